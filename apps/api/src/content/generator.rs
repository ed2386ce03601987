//! Content orchestration. Builds prompts, makes exactly one model call per operation,
//! and merges the model output with local heuristics.
//!
//! Generation failures come back as `AppError::Generation`. For the structured
//! operations (analyze, variations, SEO) a response that is not the expected JSON is
//! not an error: a fallback object is built locally and `parsed` is set to false.

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::content::heuristics::{
    cta_phrases, hashtags, readability_score, seo_keywords, DEFAULT_MAX_HASHTAGS,
    DEFAULT_MAX_KEYWORDS,
};
use crate::content::models::{
    AnalysisType, ContentAnalysis, ContentMetadata, GeneratedContent, GenerationRequest,
    SeoSuggestions, Structured, Variation, VariationSet, VariationType,
};
use crate::content::prompts::{
    fill, template_for, ANALYSIS_PROMPT_TEMPLATE, GENERATION_PROMPT_TEMPLATE,
    GENERATION_SYSTEM_TEMPLATE, SEO_PROMPT_TEMPLATE, VARIATIONS_PROMPT_TEMPLATE,
};
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{parse_json_output, TextGenerator};

/// Content longer than this is cut before being sent for SEO review.
const SEO_EXCERPT_CHARS: usize = 1000;

/// Quality score reported when the model's analysis could not be parsed.
const FALLBACK_QUALITY_SCORE: f64 = 75.0;
const FALLBACK_SEO_SCORE: f64 = 75.0;
const FALLBACK_META_DESCRIPTION: &str = "Your content here - optimize for SEO";
const FALLBACK_ASSESSMENT: &str = "Content analysis completed";

// ────────────────────────────────────────────────────────────────────────────
// Generation
// ────────────────────────────────────────────────────────────────────────────

/// Generates content for a validated request and attaches heuristic metadata.
///
/// Keywords and hashtags derive from the topic, readability from the generated text.
/// Optional lists are empty when their flag is off.
pub async fn generate_content(
    llm: &dyn TextGenerator,
    request: &GenerationRequest,
) -> Result<GeneratedContent, AppError> {
    let (system, prompt) = build_generation_prompts(request);

    info!(
        "Generating {} content in {} style",
        request.content_type, request.writing_style
    );
    let content = llm
        .generate(Some(system.as_str()), &prompt)
        .await
        .map_err(|e| AppError::generation("generate content", e))?;

    let metadata = ContentMetadata {
        content_type: request.content_type,
        writing_style: request.writing_style,
        target_audience: request.target_audience.clone(),
        word_count: content.split_whitespace().count(),
        character_count: content.chars().count(),
        readability_score: readability_score(&content),
        seo_keywords: if request.include_seo {
            seo_keywords(&request.topic, DEFAULT_MAX_KEYWORDS)
        } else {
            Vec::new()
        },
        hashtags: if request.include_hashtags {
            hashtags(&request.topic, DEFAULT_MAX_HASHTAGS)
        } else {
            Vec::new()
        },
        cta_suggestions: if request.include_cta {
            cta_phrases()
        } else {
            Vec::new()
        },
    };

    info!(
        "Generated {} words (readability {})",
        metadata.word_count, metadata.readability_score
    );

    Ok(GeneratedContent {
        success: true,
        content,
        metadata,
    })
}

/// Returns `(system, user)` prompts for a generation request.
fn build_generation_prompts(request: &GenerationRequest) -> (String, String) {
    let content_type = request.content_type.as_str();
    let writing_style = request.writing_style.as_str();

    let system = fill(
        GENERATION_SYSTEM_TEMPLATE,
        &[
            ("target_audience", request.target_audience.as_str()),
            ("writing_style", writing_style),
            ("content_type", content_type),
        ],
    );

    let prompt = fill(
        GENERATION_PROMPT_TEMPLATE,
        &[
            (
                "template",
                template_for(request.content_type, request.writing_style),
            ),
            ("topic", request.topic.as_str()),
            ("target_audience", request.target_audience.as_str()),
            ("content_type", content_type),
            ("writing_style", writing_style),
        ],
    );

    (system, prompt)
}

// ────────────────────────────────────────────────────────────────────────────
// Structured operations
// ────────────────────────────────────────────────────────────────────────────

/// Calls the model once and tries to read its output as `T`.
/// On a parse failure `fallback` receives the raw text and builds a substitute.
async fn call_structured<T, F>(
    llm: &dyn TextGenerator,
    operation: &'static str,
    prompt: &str,
    fallback: F,
) -> Result<Structured<T>, AppError>
where
    T: DeserializeOwned,
    F: FnOnce(String) -> T,
{
    let text = llm
        .generate(Some(JSON_ONLY_SYSTEM), prompt)
        .await
        .map_err(|e| AppError::generation(operation, e))?;

    match parse_json_output::<T>(&text) {
        Ok(value) => Ok(Structured {
            value,
            parsed: true,
        }),
        Err(e) => {
            warn!("Could not parse model output for {operation} ({e}); using fallback");
            Ok(Structured {
                value: fallback(text),
                parsed: false,
            })
        }
    }
}

/// Analyzes content for grammar, tone and readability.
///
/// Fallback keeps the raw model text as `tone_analysis` and scores readability locally.
pub async fn analyze_content(
    llm: &dyn TextGenerator,
    content: &str,
    analysis_type: AnalysisType,
) -> Result<Structured<ContentAnalysis>, AppError> {
    let prompt = fill(
        ANALYSIS_PROMPT_TEMPLATE,
        &[("analysis_type", analysis_type.as_str()), ("content", content)],
    );

    call_structured(llm, "analyze content", &prompt, |raw| ContentAnalysis {
        grammar_issues: Vec::new(),
        tone_analysis: raw,
        readability_score: readability_score(content),
        quality_score: FALLBACK_QUALITY_SCORE,
        suggestions: Vec::new(),
        overall_assessment: FALLBACK_ASSESSMENT.to_string(),
    })
    .await
}

/// Produces `num_variations` rewrites of `content` along `variation_type`.
///
/// Fallback wraps the raw model text as a single variation.
pub async fn generate_variations(
    llm: &dyn TextGenerator,
    content: &str,
    num_variations: u32,
    variation_type: VariationType,
) -> Result<Structured<Vec<Variation>>, AppError> {
    let count = num_variations.to_string();
    let prompt = fill(
        VARIATIONS_PROMPT_TEMPLATE,
        &[
            ("num_variations", count.as_str()),
            ("variation_type", variation_type.as_str()),
            ("content", content),
        ],
    );

    let result = call_structured(llm, "generate variations", &prompt, |raw| VariationSet {
        variations: vec![Variation {
            variation: 1,
            content: raw,
        }],
    })
    .await?;

    Ok(Structured {
        value: result.value.variations,
        parsed: result.parsed,
    })
}

/// Reviews a title and content excerpt for SEO.
///
/// Fallback reports a neutral score and passes the raw model text through as the
/// only recommendation.
pub async fn get_seo_suggestions(
    llm: &dyn TextGenerator,
    title: &str,
    content: &str,
    target_keywords: &[String],
) -> Result<Structured<SeoSuggestions>, AppError> {
    let keywords = if target_keywords.is_empty() {
        "auto-detect".to_string()
    } else {
        target_keywords.join(", ")
    };

    let excerpt = seo_excerpt(content);
    let prompt = fill(
        SEO_PROMPT_TEMPLATE,
        &[
            ("title", title),
            ("content_excerpt", excerpt.as_str()),
            ("keywords", keywords.as_str()),
        ],
    );

    call_structured(llm, "get SEO suggestions", &prompt, |raw| SeoSuggestions {
        seo_score: FALLBACK_SEO_SCORE,
        meta_description: FALLBACK_META_DESCRIPTION.to_string(),
        recommendations: vec![raw],
        ..Default::default()
    })
    .await
}

/// First `SEO_EXCERPT_CHARS` characters of `content` followed by `...`.
fn seo_excerpt(content: &str) -> String {
    let cut = content
        .char_indices()
        .nth(SEO_EXCERPT_CHARS)
        .map_or(content.len(), |(idx, _)| idx);
    format!("{}...", &content[..cut])
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
