//! Axum route handlers for the ATS scoring API.

use axum::{
    extract::{Path, Query},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::ats::{
    AtsScoreReport, AtsStandard, IndustryKeywords, JobBoardMapping, ScoreWeights, ScoringInput,
    Strictness,
};
use crate::scoring::{calculate_ats_score, score_color, score_label, supported_ats_list};
use crate::standards::tables::{all_ats_standards, ats_by_strictness, ats_standard, job_board_mappings};
use crate::taxonomy::matching::{detect_sector, extract_keywords, missing_keywords};
use crate::taxonomy::tables::{all_sectors, industry_keywords};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub input: ScoringInput,
    #[serde(default)]
    pub weights: Option<ScoreWeights>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub label: &'static str,
    pub color: &'static str,
    pub supported_ats: Vec<String>,
    #[serde(flatten)]
    pub report: AtsScoreReport,
}

#[derive(Debug, Deserialize)]
pub struct AtsListParams {
    pub strictness: Option<Strictness>,
}

#[derive(Debug, Serialize)]
pub struct AtsListResponse {
    pub standards: Vec<&'static AtsStandard>,
}

#[derive(Debug, Serialize)]
pub struct JobBoardsResponse {
    pub job_boards: &'static [JobBoardMapping],
}

#[derive(Debug, Serialize)]
pub struct SectorsResponse {
    pub sectors: Vec<&'static str>,
}

#[derive(Debug, Deserialize)]
pub struct ExtractKeywordsRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractKeywordsResponse {
    pub keywords: Vec<String>,
    /// Best-guess sector from the extracted keywords, when confident.
    pub detected_sector: Option<&'static str>,
}

#[derive(Debug, Deserialize)]
pub struct MissingKeywordsRequest {
    pub keywords: Vec<String>,
    pub sector: String,
}

#[derive(Debug, Serialize)]
pub struct MissingKeywordsResponse {
    pub missing: Vec<&'static str>,
    pub suggestions: Vec<&'static str>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/score
///
/// Runs the full scoring engine over an extracted-signal payload. Custom
/// weights are validated here — the engine itself trusts its input.
pub async fn handle_score(
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let weights = request.weights.unwrap_or_default();
    weights.validate().map_err(AppError::Validation)?;

    let report = calculate_ats_score(&request.input, &weights);

    Ok(Json(ScoreResponse {
        label: score_label(report.overall),
        color: score_color(report.overall),
        supported_ats: supported_ats_list(&report.compatibility_matrix),
        report,
    }))
}

/// GET /api/v1/ats
///
/// Lists the vendor reference table, optionally filtered by strictness.
pub async fn handle_list_ats(
    Query(params): Query<AtsListParams>,
) -> Result<Json<AtsListResponse>, AppError> {
    let standards = match params.strictness {
        Some(level) => ats_by_strictness(level),
        None => all_ats_standards().to_vec(),
    };
    Ok(Json(AtsListResponse { standards }))
}

/// GET /api/v1/ats/:id
pub async fn handle_get_ats(
    Path(id): Path<String>,
) -> Result<Json<&'static AtsStandard>, AppError> {
    let ats = ats_standard(&id)
        .ok_or_else(|| AppError::NotFound(format!("ATS standard '{id}' not found")))?;
    Ok(Json(ats))
}

/// GET /api/v1/job-boards
pub async fn handle_job_boards() -> Json<JobBoardsResponse> {
    Json(JobBoardsResponse {
        job_boards: job_board_mappings(),
    })
}

/// GET /api/v1/sectors
pub async fn handle_list_sectors() -> Json<SectorsResponse> {
    Json(SectorsResponse {
        sectors: all_sectors(),
    })
}

/// GET /api/v1/sectors/:id/keywords
pub async fn handle_sector_keywords(
    Path(id): Path<String>,
) -> Result<Json<&'static IndustryKeywords>, AppError> {
    let industry = industry_keywords(&id)
        .ok_or_else(|| AppError::NotFound(format!("Sector '{id}' not found")))?;
    Ok(Json(industry))
}

/// POST /api/v1/keywords/extract
///
/// Scans raw resume text against the full taxonomy and reports the matched
/// keywords plus a sector guess.
pub async fn handle_extract_keywords(
    Json(request): Json<ExtractKeywordsRequest>,
) -> Result<Json<ExtractKeywordsResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let keywords = extract_keywords(&request.text);
    let detected_sector = detect_sector(&keywords);

    Ok(Json(ExtractKeywordsResponse {
        keywords,
        detected_sector,
    }))
}

/// POST /api/v1/keywords/missing
///
/// Reports which required sector keywords a resume lacks, with preferred
/// keywords as suggestions.
pub async fn handle_missing_keywords(
    Json(request): Json<MissingKeywordsRequest>,
) -> Result<Json<MissingKeywordsResponse>, AppError> {
    if industry_keywords(&request.sector).is_none() {
        return Err(AppError::NotFound(format!(
            "Sector '{}' not found",
            request.sector
        )));
    }

    let result = missing_keywords(&request.keywords, &request.sector);

    Ok(Json(MissingKeywordsResponse {
        missing: result.missing,
        suggestions: result.suggestions,
    }))
}
