//! Content domain types: the content-type / writing-style enums and the
//! request/result shapes for each operation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Enums
// ────────────────────────────────────────────────────────────────────────────

/// Category of requested output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Blog,
    Social,
    Email,
    Product,
}

impl ContentType {
    pub const ALL: [ContentType; 4] = [
        ContentType::Blog,
        ContentType::Social,
        ContentType::Email,
        ContentType::Product,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Blog => "blog",
            ContentType::Social => "social",
            ContentType::Email => "email",
            ContentType::Product => "product",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ContentType::Blog => "Long-form blog posts with detailed insights",
            ContentType::Social => "Social media posts (Twitter, LinkedIn, Instagram)",
            ContentType::Email => "Email campaigns and newsletters",
            ContentType::Product => "Product descriptions and marketing copy",
        }
    }
}

/// Tone/register applied to generated content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WritingStyle {
    Formal,
    Casual,
    Technical,
    Creative,
}

impl WritingStyle {
    pub const ALL: [WritingStyle; 4] = [
        WritingStyle::Formal,
        WritingStyle::Casual,
        WritingStyle::Technical,
        WritingStyle::Creative,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WritingStyle::Formal => "formal",
            WritingStyle::Casual => "casual",
            WritingStyle::Technical => "technical",
            WritingStyle::Creative => "creative",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            WritingStyle::Formal => "Professional and corporate tone",
            WritingStyle::Casual => "Friendly and conversational tone",
            WritingStyle::Technical => "Detailed and technical tone",
            WritingStyle::Creative => "Imaginative and descriptive tone",
        }
    }
}

/// Focus of a content analysis request. `All` covers every dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisType {
    Grammar,
    Tone,
    Readability,
    #[default]
    All,
}

impl AnalysisType {
    pub const ALL: [AnalysisType; 4] = [
        AnalysisType::Grammar,
        AnalysisType::Tone,
        AnalysisType::Readability,
        AnalysisType::All,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AnalysisType::Grammar => "grammar",
            AnalysisType::Tone => "tone",
            AnalysisType::Readability => "readability",
            AnalysisType::All => "all",
        }
    }
}

/// Axis along which content variations differ.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariationType {
    #[default]
    Tone,
    Length,
    Audience,
}

impl VariationType {
    pub const ALL: [VariationType; 3] = [
        VariationType::Tone,
        VariationType::Length,
        VariationType::Audience,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            VariationType::Tone => "tone",
            VariationType::Length => "length",
            VariationType::Audience => "audience",
        }
    }
}

/// Error returned when a string does not name a known enum variant.
/// Carries the comma-separated list of accepted values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    pub allowed: String,
}

macro_rules! impl_str_enum {
    ($ty:ty) => {
        impl FromStr for $ty {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty>::ALL
                    .into_iter()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| UnknownVariant {
                        allowed: <$ty>::ALL
                            .iter()
                            .map(|v| v.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

impl_str_enum!(ContentType);
impl_str_enum!(WritingStyle);
impl_str_enum!(AnalysisType);
impl_str_enum!(VariationType);

// ────────────────────────────────────────────────────────────────────────────
// Generation
// ────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_TARGET_AUDIENCE: &str = "General audience";

/// Validated generation parameters. Built by the handler, consumed by the generator.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub topic: String,
    pub content_type: ContentType,
    pub writing_style: WritingStyle,
    pub include_seo: bool,
    pub include_hashtags: bool,
    pub include_cta: bool,
    pub target_audience: String,
}

/// Heuristic metadata attached to generated content.
/// `seo_keywords`, `hashtags` and `cta_suggestions` are empty when not requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentMetadata {
    pub content_type: ContentType,
    pub writing_style: WritingStyle,
    pub target_audience: String,
    pub word_count: usize,
    pub character_count: usize,
    pub readability_score: f64,
    pub seo_keywords: Vec<String>,
    pub hashtags: Vec<String>,
    pub cta_suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub success: bool,
    pub content: String,
    pub metadata: ContentMetadata,
}

// ────────────────────────────────────────────────────────────────────────────
// Analysis / variations / SEO
//
// Model output is untrusted: every field defaults so partial JSON still parses.
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentAnalysis {
    pub grammar_issues: Vec<String>,
    pub tone_analysis: String,
    pub readability_score: f64,
    pub quality_score: f64,
    pub suggestions: Vec<String>,
    pub overall_assessment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variation {
    pub variation: u32,
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VariationSet {
    pub variations: Vec<Variation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoSuggestions {
    pub seo_score: f64,
    pub keyword_optimization: serde_json::Map<String, serde_json::Value>,
    pub meta_description: String,
    pub heading_optimization: Vec<String>,
    pub internal_links: Vec<String>,
    pub image_alt_text: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Result of a structured model call. `parsed` is false when the model output could
/// not be read as the expected JSON and a locally built fallback was substituted.
#[derive(Debug, Clone)]
pub struct Structured<T> {
    pub value: T,
    pub parsed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_from_str() {
        assert_eq!("blog".parse::<ContentType>(), Ok(ContentType::Blog));
        assert_eq!("product".parse::<ContentType>(), Ok(ContentType::Product));
    }

    #[test]
    fn test_content_type_rejects_unknown_and_lists_allowed() {
        let err = "essay".parse::<ContentType>().unwrap_err();
        assert_eq!(err.allowed, "blog, social, email, product");
    }

    #[test]
    fn test_from_str_is_case_sensitive() {
        assert!("Blog".parse::<ContentType>().is_err());
        assert!("FORMAL".parse::<WritingStyle>().is_err());
    }

    #[test]
    fn test_writing_style_allowed_list() {
        let err = "poetic".parse::<WritingStyle>().unwrap_err();
        assert_eq!(err.allowed, "formal, casual, technical, creative");
    }

    #[test]
    fn test_serde_lowercase_matches_as_str() {
        for ct in ContentType::ALL {
            let json = serde_json::to_string(&ct).unwrap();
            assert_eq!(json, format!("\"{}\"", ct.as_str()));
        }
        for ws in WritingStyle::ALL {
            let json = serde_json::to_string(&ws).unwrap();
            assert_eq!(json, format!("\"{ws}\""));
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(AnalysisType::default(), AnalysisType::All);
        assert_eq!(VariationType::default(), VariationType::Tone);
    }

    #[test]
    fn test_analysis_partial_json_fills_defaults() {
        let analysis: ContentAnalysis =
            serde_json::from_str(r#"{"tone_analysis": "upbeat", "quality_score": 82}"#).unwrap();
        assert_eq!(analysis.tone_analysis, "upbeat");
        assert_eq!(analysis.quality_score, 82.0);
        assert!(analysis.grammar_issues.is_empty());
        assert_eq!(analysis.overall_assessment, "");
    }

    #[test]
    fn test_seo_suggestions_keyword_optimization_is_object() {
        let seo: SeoSuggestions = serde_json::from_str(
            r#"{"seo_score": 64, "keyword_optimization": {"rust": "use in H1"}}"#,
        )
        .unwrap();
        assert_eq!(seo.seo_score, 64.0);
        assert_eq!(seo.keyword_optimization["rust"], "use in H1");
    }

    #[test]
    fn test_variation_set_requires_well_formed_items() {
        let bad = r#"{"variations": [{"content": "missing number"}]}"#;
        assert!(serde_json::from_str::<VariationSet>(bad).is_err());

        let good = r#"{"variations": [{"variation": 1, "content": "hi"}]}"#;
        let set: VariationSet = serde_json::from_str(good).unwrap();
        assert_eq!(set.variations.len(), 1);
    }
}
