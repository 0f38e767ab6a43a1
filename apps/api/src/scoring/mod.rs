//! ATS compatibility scoring engine.
//!
//! Pure, synchronous, deterministic: given the same `ScoringInput` and
//! weights, every call produces identical output. No I/O, no shared mutable
//! state — only the static taxonomy and vendor tables are read, so the
//! engine can be called concurrently without coordination.

pub mod categories;
pub mod compatibility;
pub mod handlers;
pub mod optimizations;

use crate::models::ats::{AtsScoreReport, CompatibilityMatrix, ScoreBreakdown, ScoreWeights, ScoringInput};
use crate::standards::tables::ats_standard;

use categories::{score_formatting, score_keywords, score_readability, score_structure};
use compatibility::compatibility_matrix;
use optimizations::generate_optimizations;

/// Computes the full compatibility report: four category scores, their
/// weighted overall, the per-vendor matrix, and the prioritized
/// optimization list.
///
/// The engine trusts its input — weights are not validated here (callers
/// that accept untrusted weights should run [`ScoreWeights::validate`]
/// first, as the HTTP handler does). With non-negative weights summing to
/// 1.0 the overall is in [0, 100] by construction.
pub fn calculate_ats_score(input: &ScoringInput, weights: &ScoreWeights) -> AtsScoreReport {
    let formatting = score_formatting(&input.formatting_check);
    let keywords = score_keywords(&input.keywords, input.target_keywords.as_deref());
    let structure = score_structure(&input.detected_sections, &input.date_formats);
    let readability = score_readability(input.text_length, &input.formatting_check);

    let overall = (formatting.percentage as f64 * weights.formatting
        + keywords.percentage as f64 * weights.keywords
        + structure.percentage as f64 * weights.structure
        + readability.percentage as f64 * weights.readability)
        .round() as u32;

    let compatibility_matrix = compatibility_matrix(input);

    let breakdown = ScoreBreakdown {
        formatting,
        keywords,
        structure,
        readability,
    };

    let optimizations = generate_optimizations(&breakdown);

    AtsScoreReport {
        overall,
        breakdown,
        compatibility_matrix,
        optimizations,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Presentation helpers
// ────────────────────────────────────────────────────────────────────────────

/// Human label for a 0–100 score.
pub fn score_label(score: u32) -> &'static str {
    if score >= 90 {
        "Excellent"
    } else if score >= 75 {
        "Good"
    } else if score >= 60 {
        "Fair"
    } else if score >= 40 {
        "Needs Improvement"
    } else {
        "Poor"
    }
}

/// UI severity band for a 0–100 score.
pub fn score_color(score: u32) -> &'static str {
    if score >= 75 {
        "success"
    } else if score >= 40 {
        "warning"
    } else {
        "danger"
    }
}

/// Display names of the vendors a resume is compatible with. Unknown matrix
/// keys fall back to the raw id.
pub fn supported_ats_list(matrix: &CompatibilityMatrix) -> Vec<String> {
    matrix
        .iter()
        .filter(|(_, entry)| entry.compatible)
        .map(|(id, _)| {
            ats_standard(id)
                .map(|ats| ats.name.to_string())
                .unwrap_or_else(|| id.clone())
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Test fixtures (shared by the scoring submodule tests)
// ────────────────────────────────────────────────────────────────────────────


// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::fixtures::clean_input;
    use super::*;
    use crate::models::ats::Impact;

    #[test]
    fn test_clean_input_scores_100_everywhere() {
        let report = calculate_ats_score(&clean_input(), &ScoreWeights::default());
        assert_eq!(report.overall, 100);
        assert_eq!(report.breakdown.formatting.percentage, 100);
        assert_eq!(report.breakdown.keywords.percentage, 100);
        assert_eq!(report.breakdown.structure.percentage, 100);
        assert_eq!(report.breakdown.readability.percentage, 100);
        assert!(report.optimizations.is_empty());
    }

    #[test]
    fn test_overall_is_weighted_sum_rounded() {
        let mut input = clean_input();
        input.formatting_check.has_tables = true; // formatting 70
        let report = calculate_ats_score(&input, &ScoreWeights::default());
        // 70*0.4 + 100*0.3 + 100*0.2 + 100*0.1 = 88.
        assert_eq!(report.overall, 88);
    }

    #[test]
    fn test_weights_shift_overall() {
        let mut input = clean_input();
        input.formatting_check.has_tables = true; // formatting 70
        let formatting_only = ScoreWeights {
            formatting: 1.0,
            keywords: 0.0,
            structure: 0.0,
            readability: 0.0,
        };
        let report = calculate_ats_score(&input, &formatting_only);
        assert_eq!(report.overall, 70);
    }

    #[test]
    fn test_all_category_percentages_bounded() {
        let mut input = clean_input();
        input.formatting_check.has_tables = true;
        input.formatting_check.has_multiple_columns = true;
        input.formatting_check.has_images = true;
        input.formatting_check.has_headers_footers = true;
        input.formatting_check.has_text_boxes = true;
        input.formatting_check.has_unusual_fonts = true;
        input.formatting_check.font_size.min = 6.0;
        input.formatting_check.font_size.max = 22.0;
        input.formatting_check.page_count = 8;
        input.formatting_check.file_size = 50 * 1024 * 1024;
        input.detected_sections.clear();
        input.keywords.clear();
        input.date_formats = vec!["2019".to_string(), "Jan 2020".to_string()];
        input.text_length = 100;

        let report = calculate_ats_score(&input, &ScoreWeights::default());
        for category in [
            &report.breakdown.formatting,
            &report.breakdown.keywords,
            &report.breakdown.structure,
            &report.breakdown.readability,
        ] {
            assert!(category.percentage <= 100);
        }
        assert_eq!(report.breakdown.formatting.percentage, 0);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let mut input = clean_input();
        input.formatting_check.has_tables = true;
        input.target_keywords = Some(vec!["React".to_string(), "Go".to_string()]);
        input.detected_sections.push("My Journey".to_string());

        let first = calculate_ats_score(&input, &ScoreWeights::default());
        let second = calculate_ats_score(&input, &ScoreWeights::default());
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_failing_format_produces_high_impact_optimizations_first() {
        let mut input = clean_input();
        // Drive formatting below 50.
        input.formatting_check.has_tables = true;
        input.formatting_check.has_multiple_columns = true;
        input.formatting_check.has_text_boxes = true;
        // A mild keyword nudge that stays medium.
        input.keywords.truncate(5);

        let report = calculate_ats_score(&input, &ScoreWeights::default());
        assert!(report.breakdown.formatting.percentage < 50);
        assert!(!report.optimizations.is_empty());
        assert_eq!(report.optimizations[0].impact, Impact::High);
    }

    #[test]
    fn test_compatibility_matrix_covers_all_vendors() {
        let report = calculate_ats_score(&clean_input(), &ScoreWeights::default());
        for id in ["taleo", "workday", "greenhouse", "lever", "smartrecruiters", "icims"] {
            assert!(report.compatibility_matrix.contains_key(id), "missing {id}");
        }
    }

    #[test]
    fn test_score_label_bands() {
        assert_eq!(score_label(95), "Excellent");
        assert_eq!(score_label(90), "Excellent");
        assert_eq!(score_label(80), "Good");
        assert_eq!(score_label(75), "Good");
        assert_eq!(score_label(60), "Fair");
        assert_eq!(score_label(45), "Needs Improvement");
        assert_eq!(score_label(20), "Poor");
    }

    #[test]
    fn test_score_color_bands() {
        assert_eq!(score_color(92), "success");
        assert_eq!(score_color(75), "success");
        assert_eq!(score_color(60), "warning");
        assert_eq!(score_color(40), "warning");
        assert_eq!(score_color(39), "danger");
    }

    #[test]
    fn test_supported_ats_list_names_compatible_vendors() {
        let mut input = clean_input();
        input.formatting_check.has_tables = true;
        input.formatting_check.has_multiple_columns = true;
        let report = calculate_ats_score(&input, &ScoreWeights::default());

        let supported = supported_ats_list(&report.compatibility_matrix);
        // Lever parses everything — always present by display name.
        assert!(supported.contains(&"Lever".to_string()));
        // Taleo dropped to 45.
        assert!(!supported.contains(&"Oracle Taleo".to_string()));
    }
}
