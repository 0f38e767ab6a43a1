//! Per-vendor compatibility matrix.
//!
//! Independent of the four category scores: recomputed from the raw
//! formatting signals against each vendor's declared parsing capabilities.
//! Iterates the full static vendor table in canonical order on every call.

use crate::models::ats::{AtsCompatibility, CompatibilityMatrix, ScoringInput};
use crate::standards::tables::ATS_STANDARDS;

/// Minimum vendor score to be reported as compatible.
const COMPATIBLE_THRESHOLD: i32 = 70;

pub(crate) fn compatibility_matrix(input: &ScoringInput) -> CompatibilityMatrix {
    let check = &input.formatting_check;
    let mut matrix = CompatibilityMatrix::new();

    for ats in ATS_STANDARDS {
        let mut score: i32 = 100;
        let mut issues = Vec::new();
        let mut optimizations = Vec::new();

        if check.has_tables && !ats.parsing_capabilities.parses_tables {
            score -= 30;
            issues.push(format!("{} cannot parse tables", ats.name));
            optimizations.push("Remove tables for better compatibility".to_string());
        }

        if check.has_multiple_columns && !ats.parsing_capabilities.parses_columns {
            score -= 25;
            issues.push(format!("{} cannot parse multiple columns", ats.name));
            optimizations.push("Use single-column layout".to_string());
        }

        if check.has_images && !ats.parsing_capabilities.parses_images {
            score -= 20;
            issues.push(format!("{} ignores images", ats.name));
        }

        if check.file_size > ats.preferences.max_file_size {
            score -= 15;
            issues.push(format!("File exceeds {} size limit", ats.name));
            optimizations.push(format!(
                "Reduce file size to under {}MB",
                (ats.preferences.max_file_size as f64 / 1024.0 / 1024.0).round() as u64
            ));
        }

        if let Some(max_pages) = ats.preferences.max_pages {
            if check.page_count > max_pages {
                score -= 10;
                issues.push(format!("{} prefers max {} pages", ats.name, max_pages));
            }
        }

        matrix.insert(
            ats.id.to_string(),
            AtsCompatibility {
                score: score.max(0) as u32,
                compatible: score >= COMPATIBLE_THRESHOLD,
                issues,
                optimizations,
            },
        );
    }

    matrix
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
