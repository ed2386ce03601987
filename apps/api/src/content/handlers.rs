//! Axum route handlers for the Content API.
//!
//! Each handler validates its body, checks the model backend is configured, and
//! delegates to `content::generator`. Validation always runs before the backend
//! check so bad input gets a 400 even when no API key is set.

use std::str::FromStr;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::content::generator::{
    analyze_content, generate_content, generate_variations, get_seo_suggestions,
};
use crate::content::models::{
    AnalysisType, ContentAnalysis, ContentType, GeneratedContent, GenerationRequest,
    SeoSuggestions, Variation, VariationType, WritingStyle, DEFAULT_TARGET_AUDIENCE,
};
use crate::errors::AppError;
use crate::routes::extract::ApiJson;
use crate::state::AppState;

const DEFAULT_NUM_VARIATIONS: u32 = 3;
const MAX_NUM_VARIATIONS: u32 = 10;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Raw generation body. Enum fields arrive as strings so the error message can list
/// the accepted values.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateContentBody {
    pub topic: Option<String>,
    pub content_type: Option<String>,
    pub writing_style: Option<String>,
    pub include_seo: Option<bool>,
    pub include_hashtags: Option<bool>,
    pub include_cta: Option<bool>,
    pub target_audience: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeContentBody {
    pub content: Option<String>,
    pub analysis_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenerateVariationsBody {
    pub content: Option<String>,
    pub num_variations: Option<u32>,
    pub variation_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SeoSuggestionsBody {
    pub title: Option<String>,
    pub content: Option<String>,
    pub target_keywords: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeContentResponse {
    pub success: bool,
    pub analysis: ContentAnalysis,
    pub parsed: bool,
}

#[derive(Debug, Serialize)]
pub struct GenerateVariationsResponse {
    pub success: bool,
    pub variations: Vec<Variation>,
    pub parsed: bool,
}

#[derive(Debug, Serialize)]
pub struct SeoSuggestionsResponse {
    pub success: bool,
    pub seo_suggestions: SeoSuggestions,
    pub parsed: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Validation
// ────────────────────────────────────────────────────────────────────────────

/// Absent, null, or blank all count as missing.
fn required(value: Option<String>, field: &str) -> Result<String, AppError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::Validation(format!("Missing required field: {field}")))
}

fn parse_enum<T: FromStr<Err = crate::content::models::UnknownVariant>>(
    value: &str,
    field: &str,
) -> Result<T, AppError> {
    value.parse::<T>().map_err(|e| {
        AppError::Validation(format!("Invalid {field}. Must be one of: {}", e.allowed))
    })
}

impl GenerateContentBody {
    /// Checks required fields in order, then enum membership.
    pub fn validate(self) -> Result<GenerationRequest, AppError> {
        let topic = required(self.topic, "topic")?;
        let content_type = required(self.content_type, "content_type")?;
        let writing_style = required(self.writing_style, "writing_style")?;

        let content_type: ContentType = parse_enum(&content_type, "content_type")?;
        let writing_style: WritingStyle = parse_enum(&writing_style, "writing_style")?;

        let target_audience = self
            .target_audience
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TARGET_AUDIENCE.to_string());

        Ok(GenerationRequest {
            topic,
            content_type,
            writing_style,
            include_seo: self.include_seo.unwrap_or(true),
            include_hashtags: self.include_hashtags.unwrap_or(true),
            include_cta: self.include_cta.unwrap_or(true),
            target_audience,
        })
    }
}

impl AnalyzeContentBody {
    pub fn validate(self) -> Result<(String, AnalysisType), AppError> {
        let content = required(self.content, "content")?;
        let analysis_type = match self.analysis_type.as_deref() {
            None => AnalysisType::default(),
            Some(raw) => parse_enum(raw, "analysis_type")?,
        };
        Ok((content, analysis_type))
    }
}

impl GenerateVariationsBody {
    pub fn validate(self) -> Result<(String, u32, VariationType), AppError> {
        let content = required(self.content, "content")?;
        let num_variations = self.num_variations.unwrap_or(DEFAULT_NUM_VARIATIONS);
        if !(1..=MAX_NUM_VARIATIONS).contains(&num_variations) {
            return Err(AppError::Validation(format!(
                "num_variations must be between 1 and {MAX_NUM_VARIATIONS}"
            )));
        }
        let variation_type = match self.variation_type.as_deref() {
            None => VariationType::default(),
            Some(raw) => parse_enum(raw, "variation_type")?,
        };
        Ok((content, num_variations, variation_type))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate-content
pub async fn handle_generate_content(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<GenerateContentBody>,
) -> Result<Json<GeneratedContent>, AppError> {
    let request = body.validate()?;
    let llm = state.generator()?;
    let generated = generate_content(llm, &request).await?;
    Ok(Json(generated))
}

/// POST /api/analyze-content
pub async fn handle_analyze_content(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<AnalyzeContentBody>,
) -> Result<Json<AnalyzeContentResponse>, AppError> {
    let (content, analysis_type) = body.validate()?;
    let llm = state.generator()?;
    let result = analyze_content(llm, &content, analysis_type).await?;
    Ok(Json(AnalyzeContentResponse {
        success: true,
        analysis: result.value,
        parsed: result.parsed,
    }))
}

/// POST /api/generate-variations
pub async fn handle_generate_variations(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<GenerateVariationsBody>,
) -> Result<Json<GenerateVariationsResponse>, AppError> {
    let (content, num_variations, variation_type) = body.validate()?;
    let llm = state.generator()?;
    let result = generate_variations(llm, &content, num_variations, variation_type).await?;
    Ok(Json(GenerateVariationsResponse {
        success: true,
        variations: result.value,
        parsed: result.parsed,
    }))
}

/// POST /api/get-seo-suggestions
///
/// Every field is optional; missing keywords are auto-detected by the model.
pub async fn handle_get_seo_suggestions(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<SeoSuggestionsBody>,
) -> Result<Json<SeoSuggestionsResponse>, AppError> {
    let llm = state.generator()?;
    let result = get_seo_suggestions(
        llm,
        body.title.as_deref().unwrap_or_default(),
        body.content.as_deref().unwrap_or_default(),
        &body.target_keywords.unwrap_or_default(),
    )
    .await?;
    Ok(Json(SeoSuggestionsResponse {
        success: true,
        seo_suggestions: result.value,
        parsed: result.parsed,
    }))
}

/// GET /api/content-types
pub async fn handle_content_types() -> Json<Value> {
    let types: Map<String, Value> = ContentType::ALL
        .iter()
        .map(|ct| (ct.as_str().to_string(), Value::from(ct.description())))
        .collect();
    Json(json!({ "content_types": types }))
}

/// GET /api/writing-styles
pub async fn handle_writing_styles() -> Json<Value> {
    let styles: Map<String, Value> = WritingStyle::ALL
        .iter()
        .map(|ws| (ws.as_str().to_string(), Value::from(ws.description())))
        .collect();
    Json(json!({ "writing_styles": styles }))
}
