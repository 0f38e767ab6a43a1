//! The four category scorers: formatting, keywords, structure, readability.
//!
//! Each starts at 100 and subtracts a fixed penalty per detected issue,
//! flooring at zero. Every triggered penalty appends one issue message and
//! one improvement suggestion; the texts are stable and asserted in tests
//! because the optimization list is generated from them verbatim.

use std::collections::HashSet;

use crate::models::ats::{CategoryScore, FormattingCheck};
use crate::standards::sections::normalize_section_header;

const MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

/// Sections every resume is expected to carry.
const REQUIRED_SECTIONS: [&str; 3] = ["experience", "education", "skills"];

pub(crate) fn score_formatting(check: &FormattingCheck) -> CategoryScore {
    let mut score: i32 = 100;
    let mut issues = Vec::new();
    let mut improvements = Vec::new();

    if check.has_tables {
        score -= 30;
        issues.push("Tables detected - many ATS cannot parse tables correctly".to_string());
        improvements.push("Convert tables to simple bullet-point lists".to_string());
    }

    if check.has_multiple_columns {
        score -= 25;
        issues.push("Multiple columns detected - disrupts reading order".to_string());
        improvements.push("Use a single-column layout".to_string());
    }

    if check.has_images {
        score -= 20;
        issues.push("Images detected - ATS cannot read image content".to_string());
        improvements.push("Remove images or replace with text".to_string());
    }

    if check.has_headers_footers {
        score -= 15;
        issues.push("Headers/footers may not be parsed correctly".to_string());
        improvements.push("Move important info to main content area".to_string());
    }

    if check.has_text_boxes {
        score -= 20;
        issues.push("Text boxes detected - content may be skipped".to_string());
        improvements.push("Remove text boxes and use normal paragraphs".to_string());
    }

    if check.has_unusual_fonts {
        score -= 10;
        issues.push("Unusual fonts may not render correctly".to_string());
        improvements.push("Use standard fonts: Arial, Calibri, or Times New Roman".to_string());
    }

    if check.font_size.min < 10.0 {
        score -= 5;
        issues.push("Font size too small (< 10pt) - hard to read".to_string());
        improvements.push("Use minimum 10pt font size".to_string());
    }

    if check.font_size.max > 16.0 {
        score -= 5;
        issues.push("Excessive font size variation".to_string());
        improvements.push("Keep font sizes between 10-14pt for body text".to_string());
    }

    if check.page_count > 3 {
        score -= 10;
        issues.push("CV too long - ideally 1-2 pages".to_string());
        improvements.push("Condense content to 2 pages maximum".to_string());
    }

    if check.file_size > MAX_FILE_SIZE_BYTES {
        score -= 10;
        issues.push("File too large (> 5MB)".to_string());
        improvements.push("Optimize PDF to reduce file size".to_string());
    }

    CategoryScore::from_raw(score, issues, improvements)
}

pub(crate) fn score_keywords(
    cv_keywords: &[String],
    target_keywords: Option<&[String]>,
) -> CategoryScore {
    let mut issues = Vec::new();
    let mut improvements = Vec::new();

    let cv_lower: HashSet<String> = cv_keywords.iter().map(|k| k.to_lowercase()).collect();

    let Some(targets) = target_keywords.filter(|t| !t.is_empty()) else {
        // No target list: score on keyword density alone.
        let score = (cv_lower.len() as i32 * 5).min(100);

        if cv_lower.len() < 10 {
            issues.push("Low keyword density".to_string());
            improvements.push("Add more relevant industry keywords".to_string());
        }

        return CategoryScore::from_raw(score, issues, improvements);
    };

    let mut matched = 0usize;
    let mut missing = Vec::new();

    for target in targets {
        let target_lower = target.to_lowercase();
        if cv_lower.contains(&target_lower) {
            matched += 1;
        } else {
            missing.push(target_lower);
        }
    }

    let score = (matched as f64 / targets.len() as f64 * 100.0).round() as i32;

    if !missing.is_empty() {
        issues.push(format!("Missing {} target keywords", missing.len()));
        improvements.push(format!(
            "Consider adding: {}",
            missing.iter().take(5).cloned().collect::<Vec<_>>().join(", ")
        ));
    }

    CategoryScore::from_raw(score, issues, improvements)
}

pub(crate) fn score_structure(
    detected_sections: &[String],
    date_formats: &[String],
) -> CategoryScore {
    let mut score: i32 = 100;
    let mut issues = Vec::new();
    let mut improvements = Vec::new();

    let normalized: Vec<&'static str> = detected_sections
        .iter()
        .filter_map(|section| normalize_section_header(section))
        .collect();

    let missing_sections: Vec<&str> = REQUIRED_SECTIONS
        .iter()
        .filter(|required| !normalized.contains(required))
        .copied()
        .collect();

    if !missing_sections.is_empty() {
        score -= missing_sections.len() as i32 * 15;
        issues.push(format!("Missing sections: {}", missing_sections.join(", ")));
        improvements.push(format!(
            "Add clear section headers: {}",
            missing_sections
                .iter()
                .map(|s| capitalize(s))
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    let non_standard: Vec<&str> = detected_sections
        .iter()
        .filter(|section| normalize_section_header(section).is_none())
        .map(String::as_str)
        .collect();

    if !non_standard.is_empty() {
        score -= non_standard.len() as i32 * 5;
        issues.push(format!(
            "Non-standard section headers: {}",
            non_standard.join(", ")
        ));
        improvements
            .push("Use standard section headers like \"Experience\", \"Education\"".to_string());
    }

    // The two date checks are independent and can both apply: a resume with
    // three differently-shaped tokens none of which is MM/YYYY loses 20.
    let distinct_formats: HashSet<&str> = date_formats.iter().map(String::as_str).collect();
    if !date_formats.is_empty() && distinct_formats.len() > 1 {
        score -= 10;
        issues.push("Inconsistent date formats".to_string());
        improvements.push("Use consistent date format: MM/YYYY".to_string());
    }

    let has_proper_format = date_formats.iter().any(|d| has_mm_yyyy_shape(d));
    if !date_formats.is_empty() && !has_proper_format {
        score -= 10;
        issues.push("Date format not optimal for ATS".to_string());
        improvements.push("Use MM/YYYY format (e.g., 01/2020 - 06/2023)".to_string());
    }

    CategoryScore::from_raw(score, issues, improvements)
}

pub(crate) fn score_readability(text_length: usize, check: &FormattingCheck) -> CategoryScore {
    let mut score: i32 = 100;
    let mut issues = Vec::new();
    let mut improvements = Vec::new();

    if text_length < 500 {
        score -= 30;
        issues.push("CV content too short".to_string());
        improvements.push("Add more detail about your experience and skills".to_string());
    } else if text_length > 5000 {
        score -= 15;
        issues.push("CV content may be too long".to_string());
        improvements.push("Be more concise - focus on relevant experience".to_string());
    }

    if check.fonts.len() > 3 {
        score -= 10;
        issues.push("Too many different fonts".to_string());
        improvements.push("Use maximum 2 fonts for consistency".to_string());
    }

    if check.margins.left < 0.5 || check.margins.right < 0.5 {
        score -= 5;
        issues.push("Margins too narrow".to_string());
        improvements.push("Use at least 0.5 inch margins".to_string());
    }

    CategoryScore::from_raw(score, issues, improvements)
}

/// Unanchored `\d{2}/\d{4}` shape check, matching anywhere in the token.
fn has_mm_yyyy_shape(token: &str) -> bool {
    let bytes = token.as_bytes();
    if bytes.len() < 7 {
        return false;
    }
    (0..=bytes.len() - 7).any(|start| {
        let window = &bytes[start..start + 7];
        window[0].is_ascii_digit()
            && window[1].is_ascii_digit()
            && window[2] == b'/'
            && window[3..7].iter().all(|b| b.is_ascii_digit())
    })
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
