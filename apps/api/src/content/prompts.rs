// Prompt templates for content generation, analysis, variations and SEO review.
// Placeholders use `{name}` and are filled in one pass by `fill` before sending.

use crate::content::models::{ContentType, WritingStyle};

/// Used when a (content type, writing style) pair has no entry in `TEMPLATES`.
pub const DEFAULT_TEMPLATE: &str = "\
Create original, high-quality content about the given topic.
Use appropriate formatting and structure.
Ensure engagement and clarity.
Include relevant details and insights.";

/// Per-pair generation templates. Every pair currently has an entry; pairs added to the
/// enums later fall back to `DEFAULT_TEMPLATE` until a template is written for them.
const TEMPLATES: &[((ContentType, WritingStyle), &str)] = &[
    // Blog posts
    (
        (ContentType::Blog, WritingStyle::Formal),
        "\
Create a professional blog post about the given topic.

Structure:
1. Engaging headline (H1)
2. Brief introduction (2-3 sentences)
3. Table of contents (if long)
4. Main sections with H2/H3 headings
5. Key points and insights
6. Conclusion
7. Call-to-action

Style: Professional, informative, data-backed
Length: 1000-1500 words
Include: Statistics, examples, actionable insights",
    ),
    (
        (ContentType::Blog, WritingStyle::Casual),
        "\
Write a conversational, engaging blog post about the topic.

Structure:
1. Catchy headline
2. Personal introduction
3. Main points with relatable examples
4. Engaging stories or anecdotes
5. Practical tips
6. Conclusion with personal touch
7. Call-to-action

Style: Friendly, conversational, relatable
Length: 800-1200 words
Include: Personal experiences, humor, real examples",
    ),
    (
        (ContentType::Blog, WritingStyle::Technical),
        "\
Write a technical blog post with detailed explanations.

Structure:
1. Technical headline
2. Problem statement
3. Solution overview
4. Step-by-step explanation
5. Code examples or technical details
6. Best practices
7. Conclusion
8. Further reading

Style: Technical, detailed, precise
Length: 1200-1800 words
Include: Technical details, examples, code snippets",
    ),
    (
        (ContentType::Blog, WritingStyle::Creative),
        "\
Write a creative, visually descriptive blog post.

Structure:
1. Compelling hook
2. Narrative introduction
3. Descriptive sections
4. Engaging examples
5. Insights and lessons
6. Creative conclusion
7. Inspiration call-to-action

Style: Creative, descriptive, engaging
Length: 900-1300 words
Include: Vivid descriptions, storytelling, emotional connection",
    ),
    // Social media
    (
        (ContentType::Social, WritingStyle::Formal),
        "\
Create a professional social media post about the topic.

Format:
- Clear and concise message
- Professional tone
- Relevant hashtags
- Call-to-action
- Suitable for LinkedIn/corporate accounts

Length: 150-280 characters
Include: Professional tone, industry insights, engagement CTA",
    ),
    (
        (ContentType::Social, WritingStyle::Casual),
        "\
Create an engaging, casual social media post.

Format:
- Fun and relatable message
- Conversational tone
- Popular hashtags
- Emoji usage (appropriate)
- Engagement-focused

Length: 100-250 characters
Include: Conversational tone, humor, trending hashtags, emojis",
    ),
    (
        (ContentType::Social, WritingStyle::Technical),
        "\
Create a technical social media post (for developers/tech audience).

Format:
- Code insight or technical tip
- Technical terminology
- Developer community hashtags
- Link to resources
- Problem-solution focus

Length: 150-280 characters
Include: Technical insight, code reference, #hashtags, resources",
    ),
    (
        (ContentType::Social, WritingStyle::Creative),
        "\
Create a creative, visually inspiring social media post.

Format:
- Inspiring message
- Vivid language
- Aesthetic appeal
- Storytelling element
- Motivational tone

Length: 100-250 characters
Include: Inspiring tone, descriptive language, creative hashtags",
    ),
    // Email campaigns
    (
        (ContentType::Email, WritingStyle::Formal),
        "\
Write a professional email campaign about the topic.

Structure:
1. Professional subject line
2. Greeting
3. Main message (value proposition)
4. Benefits and features
5. Call-to-action
6. Professional closing
7. Signature

Tone: Professional, persuasive, value-focused
Length: 200-400 words
Include: Clear benefits, professional tone, strong CTA",
    ),
    (
        (ContentType::Email, WritingStyle::Casual),
        "\
Write a friendly, engaging email campaign.

Structure:
1. Catchy subject line
2. Warm greeting
3. Relatable introduction
4. Main benefits
5. Social proof if applicable
6. Friendly call-to-action
7. Warm closing

Tone: Friendly, personable, conversational
Length: 150-350 words
Include: Personal touch, conversational tone, warm engagement",
    ),
    (
        (ContentType::Email, WritingStyle::Technical),
        "\
Write a technical email campaign for a technical audience.

Structure:
1. Clear subject line (technical)
2. Technical introduction
3. Problem explanation
4. Solution details
5. Technical specifications
6. Documentation links
7. Technical support CTA

Tone: Technical, detailed, solution-focused
Length: 250-450 words
Include: Technical details, solutions, documentation links",
    ),
    (
        (ContentType::Email, WritingStyle::Creative),
        "\
Write a creative, engaging email campaign.

Structure:
1. Compelling subject line
2. Engaging opening
3. Narrative or story element
4. Value proposition
5. Emotional connection
6. Creative call-to-action
7. Memorable closing

Tone: Creative, engaging, memorable
Length: 180-380 words
Include: Storytelling, emotional appeal, creative messaging",
    ),
    // Product descriptions
    (
        (ContentType::Product, WritingStyle::Formal),
        "\
Write a professional product description.

Structure:
1. Product name and headline
2. What it is
3. Key features
4. Benefits
5. Specifications
6. Use cases
7. Call-to-action

Tone: Professional, informative, persuasive
Include: Features, benefits, specifications, professional tone",
    ),
    (
        (ContentType::Product, WritingStyle::Casual),
        "\
Write a friendly, engaging product description.

Structure:
1. Catchy product headline
2. What makes it special
3. Key features (bullet points)
4. Benefits (relatable)
5. Why customers love it
6. Quick specs
7. Call-to-action

Tone: Friendly, relatable, enthusiastic
Include: Benefits, customer appeal, enthusiasm, engagement",
    ),
    (
        (ContentType::Product, WritingStyle::Technical),
        "\
Write a detailed technical product description.

Structure:
1. Product name
2. Technical overview
3. Technical specifications
4. Features (detailed)
5. Performance metrics
6. Compatibility
7. Documentation/Support
8. Call-to-action

Tone: Technical, detailed, specifications-focused
Include: Tech specs, features, compatibility, performance",
    ),
    (
        (ContentType::Product, WritingStyle::Creative),
        "\
Write a creative, visually appealing product description.

Structure:
1. Compelling headline
2. Emotional hook
3. Descriptive features
4. Benefits (lifestyle)
5. Unique selling points
6. Inspirational message
7. Call-to-action

Tone: Creative, inspiring, lifestyle-focused
Include: Vivid descriptions, lifestyle appeal, emotional connection",
    ),
];

/// Returns the generation template for a pair, or `DEFAULT_TEMPLATE` if none exists.
pub fn template_for(content_type: ContentType, writing_style: WritingStyle) -> &'static str {
    lookup(TEMPLATES, content_type, writing_style)
}

/// Substitutes `{name}` placeholders in a single left-to-right pass.
///
/// Inserted values are never rescanned, so user text containing `{topic}` or
/// similar stays literal. Braces that do not name a known placeholder (the JSON
/// examples in the templates) are copied through unchanged.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        let hit = values.iter().find_map(|(name, value)| {
            tail.strip_prefix(name)
                .and_then(|after| after.strip_prefix('}'))
                .map(|after| (*value, after))
        });
        match hit {
            Some((value, after)) => {
                out.push_str(value);
                rest = after;
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}

fn lookup(
    table: &[((ContentType, WritingStyle), &'static str)],
    content_type: ContentType,
    writing_style: WritingStyle,
) -> &'static str {
    table
        .iter()
        .find(|(key, _)| *key == (content_type, writing_style))
        .map(|(_, template)| *template)
        .unwrap_or(DEFAULT_TEMPLATE)
}

/// System framing for generation.
/// Replace: {target_audience}, {writing_style}, {content_type}
pub const GENERATION_SYSTEM_TEMPLATE: &str = "\
You are an expert content writer and digital marketing specialist. Your task is to create
high-quality, engaging content that resonates with the target audience.

Target Audience: {target_audience}
Writing Style: {writing_style}
Content Type: {content_type}

Guidelines:
- Write compelling and original content
- Use appropriate tone for the style
- Include relevant keywords naturally
- Make content scannable with proper formatting
- Ensure engagement and call-to-action
- Keep grammar and spelling perfect";

/// User prompt for generation.
/// Replace: {template}, {topic}, {target_audience}, {content_type}, {writing_style}
pub const GENERATION_PROMPT_TEMPLATE: &str = "\
{template}

Topic: {topic}
Target Audience: {target_audience}

Please generate content that is:
1. Engaging and original
2. Properly formatted with markdown
3. SEO-friendly if applicable
4. Appropriate for {content_type}
5. Written in {writing_style} style";

/// Replace: {analysis_type}, {content}
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the following content for {analysis_type}.

Content to analyze:
"{content}"

Please provide:
1. Grammar and spelling check
2. Tone analysis
3. Readability score (1-100)
4. Suggestions for improvement
5. Overall quality score (1-100)

Format your response as JSON with these fields:
{
    "grammar_issues": ["issue1", "issue2"],
    "tone_analysis": "description of tone",
    "readability_score": number,
    "quality_score": number,
    "suggestions": ["suggestion1", "suggestion2"],
    "overall_assessment": "summary"
}"#;

/// Replace: {num_variations}, {content}, {variation_type}
pub const VARIATIONS_PROMPT_TEMPLATE: &str = r#"Generate {num_variations} different variations of the following content.

Original content:
"{content}"

Variation type: {variation_type}

For {variation_type} variation:
- If 'tone': Create versions with different tones (formal, casual, friendly, etc.)
- If 'length': Create short, medium, and long versions
- If 'audience': Create versions for different audiences

Return a JSON object with a 'variations' key containing a list of variations.
Each variation should be a complete, standalone piece of content.

Format:
{
    "variations": [
        {"variation": 1, "content": "..."},
        {"variation": 2, "content": "..."}
    ]
}"#;

/// Replace: {title}, {content_excerpt}, {keywords}
pub const SEO_PROMPT_TEMPLATE: &str = r#"Provide SEO optimization suggestions for this content.

Title: {title}

Content: {content_excerpt}

Target keywords: {keywords}

Analyze and provide:
1. SEO score (1-100)
2. Keyword optimization
3. Meta description suggestion
4. Heading optimization
5. Internal linking suggestions
6. Image alt text suggestions
7. Overall recommendations

Format as JSON:
{
    "seo_score": number,
    "keyword_optimization": {},
    "meta_description": "string",
    "heading_optimization": ["suggestion1"],
    "internal_links": ["suggestion1"],
    "image_alt_text": ["suggestion1"],
    "recommendations": ["recommendation1"]
}"#;
