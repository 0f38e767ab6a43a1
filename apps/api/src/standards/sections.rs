//! Section-header normalization.
//!
//! Maps raw resume header text onto a fixed set of canonical section keys
//! via exact (not fuzzy) case-insensitive lookup against known English and
//! French variants. "Professional Experiences" with a stray "s" does NOT
//! match unless listed.

/// Canonical key → known header-text variants. The first variant is the
/// preferred English display string; French variants carry accents.
static STANDARD_SECTION_HEADERS: &[(&str, &[&str])] = &[
    (
        "experience",
        &[
            "Professional Experience",
            "Work Experience",
            "Experience",
            "Employment History",
            "Career History",
            "Expérience Professionnelle",
            "Expériences",
        ],
    ),
    (
        "education",
        &[
            "Education",
            "Academic Background",
            "Educational Background",
            "Formation",
            "Études",
        ],
    ),
    (
        "skills",
        &[
            "Skills",
            "Technical Skills",
            "Core Competencies",
            "Competencies",
            "Compétences",
            "Compétences Techniques",
        ],
    ),
    (
        "summary",
        &[
            "Summary",
            "Professional Summary",
            "Profile",
            "About",
            "Objective",
            "Profil",
            "Résumé",
        ],
    ),
    (
        "certifications",
        &[
            "Certifications",
            "Certificates",
            "Professional Certifications",
            "Certifications et Formations",
        ],
    ),
    ("languages", &["Languages", "Langues", "Language Skills"]),
    (
        "projects",
        &["Projects", "Personal Projects", "Projets", "Side Projects"],
    ),
];

/// Trims and lowercases the header, then looks for an exact case-insensitive
/// match among the known variants. Returns the canonical key, or `None` for
/// non-standard headers.
pub fn normalize_section_header(header: &str) -> Option<&'static str> {
    let normalized = header.trim().to_lowercase();

    for (canonical, variants) in STANDARD_SECTION_HEADERS {
        if variants
            .iter()
            .any(|variant| variant.to_lowercase() == normalized)
        {
            return Some(canonical);
        }
    }

    None
}

/// Maps a canonical key back to a preferred display header. For French,
/// the first accented variant wins; otherwise (and as the fallback) the
/// first English variant is returned. Unknown keys echo the input.
pub fn recommended_section_header<'a>(section: &'a str, language: &str) -> &'a str {
    let section_lower = section.to_lowercase();
    let Some((_, variants)) = STANDARD_SECTION_HEADERS
        .iter()
        .find(|(canonical, _)| *canonical == section_lower)
    else {
        return section;
    };

    if language == "fr" {
        if let Some(accented) = variants.iter().find(|variant| {
            variant
                .chars()
                .any(|c| "àâäéèêëïîôùûüçÀÂÄÉÈÊËÏÎÔÙÛÜÇ".contains(c))
        }) {
            return accented;
        }
    }

    variants[0]
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_exact_english_variant() {
        assert_eq!(normalize_section_header("Work Experience"), Some("experience"));
        assert_eq!(normalize_section_header("Technical Skills"), Some("skills"));
    }

    #[test]
    fn test_normalize_is_case_insensitive_and_trims() {
        assert_eq!(normalize_section_header("  EDUCATION  "), Some("education"));
        assert_eq!(normalize_section_header("professional summary"), Some("summary"));
    }

    #[test]
    fn test_normalize_french_variants() {
        assert_eq!(
            normalize_section_header("Expérience Professionnelle"),
            Some("experience")
        );
        assert_eq!(normalize_section_header("Compétences"), Some("skills"));
        assert_eq!(normalize_section_header("Formation"), Some("education"));
        assert_eq!(normalize_section_header("Langues"), Some("languages"));
    }

    #[test]
    fn test_normalize_rejects_near_misses() {
        // Exact lookup only — an extra "s" must not match.
        assert_eq!(normalize_section_header("Professional Experiences"), None);
        assert_eq!(normalize_section_header("My Journey"), None);
    }

    #[test]
    fn test_recommended_header_english_is_first_variant() {
        assert_eq!(
            recommended_section_header("experience", "en"),
            "Professional Experience"
        );
        assert_eq!(recommended_section_header("skills", "en"), "Skills");
    }

    #[test]
    fn test_recommended_header_french_prefers_accented_variant() {
        assert_eq!(
            recommended_section_header("experience", "fr"),
            "Expérience Professionnelle"
        );
        assert_eq!(recommended_section_header("skills", "fr"), "Compétences");
    }

    #[test]
    fn test_recommended_header_french_falls_back_without_accent() {
        // "languages" has "Langues" (no accent) — falls back to first variant.
        assert_eq!(recommended_section_header("languages", "fr"), "Languages");
    }

    #[test]
    fn test_recommended_header_unknown_key_echoes_input() {
        assert_eq!(recommended_section_header("hobbies", "en"), "hobbies");
    }

    #[test]
    fn test_recommended_header_key_lookup_case_insensitive() {
        assert_eq!(
            recommended_section_header("EXPERIENCE", "en"),
            "Professional Experience"
        );
    }
}
