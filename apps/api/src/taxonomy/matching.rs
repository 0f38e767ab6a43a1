//! Keyword extraction and sector matching over the static taxonomy.
//!
//! All matching is case-insensitive. Extraction is raw signal, not
//! classification: a single resume can legitimately match keywords from
//! several sectors, and the union is returned.

use std::collections::HashSet;

use serde::Serialize;

use super::tables::{industry_keywords, INDUSTRY_KEYWORDS};
use crate::models::ats::Importance;

/// Minimum sector-match score before `detect_sector` commits to an answer.
const SECTOR_CONFIDENCE_FLOOR: u32 = 5;

/// Cap on the `suggestions` list in [`missing_keywords`].
const SUGGESTION_CAP: usize = 10;

/// Scans the full text for every known term, variant, tool, and
/// certification across all sectors. A variant hit records the main term;
/// tool and certification hits record the literal table string. Returns
/// the deduplicated union in first-encounter order.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();
    let mut seen = HashSet::new();
    let mut keywords = Vec::new();

    let mut record = |term: &str| {
        if seen.insert(term.to_lowercase()) {
            keywords.push(term.to_string());
        }
    };

    for industry in INDUSTRY_KEYWORDS {
        for category in industry.categories {
            for entry in category.keywords {
                let term_hit = text_lower.contains(&entry.term.to_lowercase());
                let variant_hit = entry
                    .variants
                    .iter()
                    .any(|variant| text_lower.contains(&variant.to_lowercase()));
                if term_hit || variant_hit {
                    record(entry.term);
                }
            }
        }
        for tool in industry.common_tools {
            if text_lower.contains(&tool.to_lowercase()) {
                record(tool);
            }
        }
        for cert in industry.certifications {
            if text_lower.contains(&cert.to_lowercase()) {
                record(cert);
            }
        }
    }

    keywords
}

/// All keyword terms flagged `required` in the sector's categories.
/// Unknown sectors yield an empty list.
pub fn required_keywords(sector: &str) -> Vec<&'static str> {
    let Some(industry) = industry_keywords(sector) else {
        return Vec::new();
    };

    industry
        .categories
        .iter()
        .flat_map(|category| category.keywords.iter())
        .filter(|entry| entry.importance == Importance::Required)
        .map(|entry| entry.term)
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct MissingKeywords {
    /// Required sector keywords absent from the resume (case-insensitive).
    pub missing: Vec<&'static str>,
    /// Up to 10 absent `preferred` keywords, in table order — deliberately
    /// not re-ranked by relevance.
    pub suggestions: Vec<&'static str>,
}

pub fn missing_keywords(cv_keywords: &[String], sector: &str) -> MissingKeywords {
    let cv_lower: HashSet<String> = cv_keywords.iter().map(|k| k.to_lowercase()).collect();

    let missing = required_keywords(sector)
        .into_iter()
        .filter(|term| !cv_lower.contains(&term.to_lowercase()))
        .collect();

    let mut suggestions = Vec::new();
    if let Some(industry) = industry_keywords(sector) {
        for category in industry.categories {
            for entry in category.keywords {
                if entry.importance == Importance::Preferred
                    && !cv_lower.contains(&entry.term.to_lowercase())
                {
                    suggestions.push(entry.term);
                }
            }
        }
    }
    suggestions.truncate(SUGGESTION_CAP);

    MissingKeywords {
        missing,
        suggestions,
    }
}

/// Picks the sector whose taxonomy best matches the resume's keywords.
///
/// Score per sector: 3 per required-keyword match, 1 per match of any other
/// importance, 1 per common-tool match. Ties go to the earlier sector in
/// table order; below a score of 5 there is no confident signal and the
/// result is `None`. Empty input always yields `None`.
pub fn detect_sector(cv_keywords: &[String]) -> Option<&'static str> {
    let cv_lower: HashSet<String> = cv_keywords.iter().map(|k| k.to_lowercase()).collect();

    let mut best: Option<(&'static str, u32)> = None;

    for industry in INDUSTRY_KEYWORDS {
        let mut score = 0u32;

        for category in industry.categories {
            for entry in category.keywords {
                if cv_lower.contains(&entry.term.to_lowercase()) {
                    score += if entry.importance == Importance::Required {
                        3
                    } else {
                        1
                    };
                }
            }
        }

        for tool in industry.common_tools {
            if cv_lower.contains(&tool.to_lowercase()) {
                score += 1;
            }
        }

        // Strict > keeps the first sector on ties.
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((industry.id, score));
        }
    }

    best.filter(|&(_, score)| score >= SECTOR_CONFIDENCE_FLOOR)
        .map(|(sector, _)| sector)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
