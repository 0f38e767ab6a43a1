//! Shared ATS value types: static knowledge-table rows, scoring inputs,
//! and the score report returned by the engine.
//!
//! Table rows (`KeywordEntry`, `AtsStandard`, …) are built from `&'static str`
//! so the taxonomy and vendor tables can live as process-wide statics, the
//! same way the layout font-metric tables did. Everything that crosses the
//! HTTP boundary derives serde.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Closed enums
// ────────────────────────────────────────────────────────────────────────────

/// How strongly a sector expects a keyword to appear on a resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Importance {
    Required,
    Preferred,
    NiceToHave,
}

/// How tolerant an ATS vendor's parser is of formatting deviations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    Low,
    Medium,
    High,
}

/// Expected score improvement from applying an optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

impl Impact {
    /// Sort rank: high first. Used with a stable sort so equal-impact
    /// optimizations keep their generation order.
    pub fn rank(self) -> u8 {
        match self {
            Impact::High => 0,
            Impact::Medium => 1,
            Impact::Low => 2,
        }
    }
}

/// How much work applying an optimization takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effort {
    Easy,
    Medium,
    Hard,
}

/// Which scoring category an optimization came from. Readability
/// suggestions surface as `content`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptimizationType {
    Formatting,
    Keywords,
    Structure,
    Content,
}

// ────────────────────────────────────────────────────────────────────────────
// Keyword taxonomy rows
// ────────────────────────────────────────────────────────────────────────────

/// One taxonomy keyword: a canonical term plus the spellings it also
/// matches under. A variant hit always records the main term.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct KeywordEntry {
    pub term: &'static str,
    pub variants: &'static [&'static str],
    pub importance: Importance,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct KeywordCategory {
    pub name: &'static str,
    pub keywords: &'static [KeywordEntry],
}

/// Full keyword knowledge base for one industry sector.
/// `id` is pre-lowercased at table-definition time; lookups are
/// case-insensitive against it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct IndustryKeywords {
    pub id: &'static str,
    pub sector: &'static str,
    pub categories: &'static [KeywordCategory],
    pub common_tools: &'static [&'static str],
    pub soft_skills: &'static [&'static str],
    pub certifications: &'static [&'static str],
}

// ────────────────────────────────────────────────────────────────────────────
// ATS vendor rows
// ────────────────────────────────────────────────────────────────────────────

/// What a vendor's resume parser can actually read.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AtsParsingCapabilities {
    pub parses_tables: bool,
    pub parses_columns: bool,
    pub parses_images: bool,
    pub parses_headers: bool,
    pub parses_footers: bool,
    pub parses_links: bool,
    pub parses_custom_fonts: bool,
}

/// Formatting conventions a vendor prefers, independent of what its
/// parser tolerates.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AtsPreferences {
    pub date_format: &'static str,
    pub section_headers: &'static [&'static str],
    pub avoid_elements: &'static [&'static str],
    /// Bytes.
    pub max_file_size: u64,
    pub supported_fonts: &'static [&'static str],
    pub preferred_file_types: &'static [&'static str],
    pub max_pages: Option<u32>,
}

/// Static reference entry for one ATS vendor. Not a live integration —
/// a capability/preference table keyed by pre-lowercased `id`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AtsStandard {
    pub id: &'static str,
    pub name: &'static str,
    pub vendor: &'static str,
    /// Rough share of the ATS market, in percent.
    pub market_share: f32,
    pub strictness: Strictness,
    pub preferences: AtsPreferences,
    pub common_in: &'static [&'static str],
    pub parsing_capabilities: AtsParsingCapabilities,
    pub tips: &'static [&'static str],
}

/// Which ATS vendors a job board typically routes applications into.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct JobBoardMapping {
    pub job_board: &'static str,
    pub common_ats: &'static [&'static str],
    pub recommended_format: &'static str,
    pub tips: &'static [&'static str],
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring input (owned by the extraction collaborator, consumed here)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontSizeRange {
    pub min: f32,
    pub max: f32,
    pub average: f32,
}

/// Page margins in inches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Margins {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

/// Formatting signals extracted from the document by the upstream parser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormattingCheck {
    pub has_tables: bool,
    pub has_multiple_columns: bool,
    pub has_images: bool,
    pub has_headers_footers: bool,
    pub has_text_boxes: bool,
    pub has_unusual_fonts: bool,
    pub fonts: Vec<String>,
    pub font_size: FontSizeRange,
    pub margins: Margins,
    pub page_count: u32,
    /// Bytes.
    pub file_size: u64,
}

/// Everything the scoring engine consumes for one call. Constructed fresh
/// per request; no identity, no shared state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringInput {
    pub formatting_check: FormattingCheck,
    /// Raw detected section-header strings, unnormalized.
    pub detected_sections: Vec<String>,
    /// Deduplicated keyword list sourced from extraction.
    pub keywords: Vec<String>,
    /// Keywords from a target job description, when the caller has one.
    #[serde(default)]
    pub target_keywords: Option<Vec<String>>,
    /// Date-format token shapes as matched upstream (e.g. "MM/YYYY").
    pub date_formats: Vec<String>,
    /// Plain-text character length of the document.
    pub text_length: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Score report
// ────────────────────────────────────────────────────────────────────────────

/// One of the four category sub-scores.
///
/// `score` and `percentage` are equal by construction (scores are already
/// on a 0–100 scale); both are kept for interface compatibility with
/// existing report consumers and only ever built via [`CategoryScore::from_raw`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryScore {
    pub score: u32,
    pub max_score: u32,
    pub percentage: u32,
    pub issues: Vec<String>,
    pub improvements: Vec<String>,
}

impl CategoryScore {
    /// Applies the zero floor to an accumulated raw score. The base is 100
    /// and categories only subtract, so no upper clamp is needed; the one
    /// naturally bounded scorer (keyword match rate) never exceeds 100 either.
    pub fn from_raw(raw: i32, issues: Vec<String>, improvements: Vec<String>) -> Self {
        let clamped = raw.max(0) as u32;
        CategoryScore {
            score: clamped,
            max_score: 100,
            percentage: clamped,
            issues,
            improvements,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub formatting: CategoryScore,
    pub keywords: CategoryScore,
    pub structure: CategoryScore,
    pub readability: CategoryScore,
}

/// Weights for combining the four category percentages into the overall
/// score. Must be non-negative and sum to 1.0 — see [`ScoreWeights::validate`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub formatting: f64,
    pub keywords: f64,
    pub structure: f64,
    pub readability: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights {
            formatting: 0.4,
            keywords: 0.3,
            structure: 0.2,
            readability: 0.1,
        }
    }
}

impl ScoreWeights {
    const SUM_EPSILON: f64 = 1e-6;

    /// Checks the caller contract: non-negative components summing to 1.0.
    /// Unnormalized weights would silently distort the 0–100 overall scale,
    /// so the HTTP boundary rejects them with this message.
    pub fn validate(&self) -> Result<(), String> {
        let components = [
            ("formatting", self.formatting),
            ("keywords", self.keywords),
            ("structure", self.structure),
            ("readability", self.readability),
        ];
        for (name, value) in components {
            if value < 0.0 {
                return Err(format!("weight '{name}' must be non-negative, got {value}"));
            }
        }
        let sum: f64 = components.iter().map(|(_, v)| v).sum();
        if (sum - 1.0).abs() > Self::SUM_EPSILON {
            return Err(format!("weights must sum to 1.0, got {sum}"));
        }
        Ok(())
    }
}

/// Per-vendor compatibility verdict, derived from raw formatting signals
/// against that vendor's declared parsing capabilities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsCompatibility {
    pub score: u32,
    /// score >= 70
    pub compatible: bool,
    pub issues: Vec<String>,
    pub optimizations: Vec<String>,
}

/// Vendor id → compatibility. BTreeMap keeps serialized vendor order
/// deterministic across calls.
pub type CompatibilityMatrix = BTreeMap<String, AtsCompatibility>;

/// A single prioritized remediation suggestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsOptimization {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: OptimizationType,
    /// Assigned sequentially across all categories in processing order.
    pub priority: u32,
    pub title: String,
    pub description: String,
    pub impact: Impact,
    pub effort: Effort,
    pub auto_fixable: bool,
}

/// Composite result of one scoring call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsScoreReport {
    pub overall: u32,
    pub breakdown: ScoreBreakdown,
    pub compatibility_matrix: CompatibilityMatrix,
    pub optimizations: Vec<AtsOptimization>,
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
