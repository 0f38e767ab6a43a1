//! Static ATS vendor reference tables.
//!
//! Vendor ids are pre-lowercased at definition time. The slice order is the
//! order the compatibility matrix iterates in, so report output stays
//! byte-identical across calls.

use crate::models::ats::{
    AtsParsingCapabilities, AtsPreferences, AtsStandard, JobBoardMapping, Strictness,
};

const MIB: u64 = 1024 * 1024;

static TALEO: AtsStandard = AtsStandard {
    id: "taleo",
    name: "Oracle Taleo",
    vendor: "Oracle",
    market_share: 40.0,
    strictness: Strictness::High,
    preferences: AtsPreferences {
        date_format: "MM/YYYY",
        section_headers: &[
            "Professional Experience",
            "Work Experience",
            "Education",
            "Skills",
            "Certifications",
            "Summary",
            "Professional Summary",
        ],
        avoid_elements: &[
            "tables",
            "multiple columns",
            "text boxes",
            "headers",
            "footers",
            "images",
            "charts",
            "graphics",
        ],
        max_file_size: 5 * MIB,
        supported_fonts: &["Arial", "Calibri", "Times New Roman", "Helvetica", "Georgia"],
        preferred_file_types: &["pdf", "doc", "docx"],
        max_pages: Some(3),
    },
    common_in: &["grandes entreprises", "corporate", "multinationales", "banques"],
    parsing_capabilities: AtsParsingCapabilities {
        parses_tables: false,
        parses_columns: false,
        parses_images: false,
        parses_headers: false,
        parses_footers: false,
        parses_links: true,
        parses_custom_fonts: false,
    },
    tips: &[
        "Utilisez un format de CV simple et linéaire",
        "Évitez absolument les tableaux et colonnes multiples",
        "Utilisez des bullet points standards (•)",
        "Format de date recommandé: MM/YYYY",
    ],
};

static WORKDAY: AtsStandard = AtsStandard {
    id: "workday",
    name: "Workday",
    vendor: "Workday Inc.",
    market_share: 25.0,
    strictness: Strictness::Medium,
    preferences: AtsPreferences {
        date_format: "MM/YYYY",
        section_headers: &[
            "Experience",
            "Education",
            "Skills",
            "Summary",
            "Certifications",
            "Languages",
        ],
        avoid_elements: &["complex tables", "graphics", "unusual fonts", "headers", "footers"],
        max_file_size: 10 * MIB,
        supported_fonts: &["Arial", "Calibri", "Georgia", "Verdana", "Tahoma"],
        preferred_file_types: &["pdf", "docx"],
        max_pages: Some(4),
    },
    common_in: &["tech companies", "finance", "retail", "consulting"],
    parsing_capabilities: AtsParsingCapabilities {
        parses_tables: true,
        parses_columns: false,
        parses_images: false,
        parses_headers: true,
        parses_footers: false,
        parses_links: true,
        parses_custom_fonts: true,
    },
    tips: &[
        "Structure chronologique inversée recommandée",
        "Mots-clés importants: mettez-les en contexte",
        "Les tableaux simples peuvent fonctionner",
    ],
};

static GREENHOUSE: AtsStandard = AtsStandard {
    id: "greenhouse",
    name: "Greenhouse",
    vendor: "Greenhouse Software",
    market_share: 15.0,
    strictness: Strictness::Medium,
    preferences: AtsPreferences {
        date_format: "MM/YYYY or YYYY",
        section_headers: &[
            "Experience",
            "Education",
            "Projects",
            "Skills",
            "Achievements",
            "Summary",
        ],
        avoid_elements: &["tables", "images", "complex formatting"],
        max_file_size: 10 * MIB,
        supported_fonts: &["Arial", "Calibri", "Helvetica", "Open Sans", "Roboto"],
        preferred_file_types: &["pdf", "docx"],
        max_pages: Some(3),
    },
    common_in: &["startups", "tech", "scale-ups", "SaaS companies"],
    parsing_capabilities: AtsParsingCapabilities {
        parses_tables: false,
        parses_columns: true,
        parses_images: false,
        parses_headers: true,
        parses_footers: true,
        parses_links: true,
        parses_custom_fonts: true,
    },
    tips: &[
        "Mettez en avant vos projets et réalisations",
        "Section compétences techniques détaillée",
        "Liens GitHub/Portfolio acceptés",
    ],
};

static LEVER: AtsStandard = AtsStandard {
    id: "lever",
    name: "Lever",
    vendor: "Lever",
    market_share: 10.0,
    strictness: Strictness::Low,
    preferences: AtsPreferences {
        date_format: "flexible",
        section_headers: &["Experience", "Education", "Skills", "About", "Projects"],
        avoid_elements: &["excessive graphics"],
        max_file_size: 10 * MIB,
        supported_fonts: &["any standard fonts"],
        preferred_file_types: &["pdf", "docx", "txt"],
        max_pages: Some(4),
    },
    common_in: &["startups", "modern companies", "tech"],
    parsing_capabilities: AtsParsingCapabilities {
        parses_tables: true,
        parses_columns: true,
        parses_images: true,
        parses_headers: true,
        parses_footers: true,
        parses_links: true,
        parses_custom_fonts: true,
    },
    tips: &[
        "Format plus flexible accepté",
        "Créativité modérée possible",
        "Liens vers travaux appréciés",
    ],
};

static SMARTRECRUITERS: AtsStandard = AtsStandard {
    id: "smartrecruiters",
    name: "SmartRecruiters",
    vendor: "SmartRecruiters",
    market_share: 8.0,
    strictness: Strictness::Low,
    preferences: AtsPreferences {
        date_format: "MM/YYYY",
        section_headers: &[
            "Professional Experience",
            "Education",
            "Skills",
            "Languages",
            "Summary",
        ],
        avoid_elements: &["complex layouts"],
        max_file_size: 10 * MIB,
        supported_fonts: &["Arial", "Calibri", "Helvetica"],
        preferred_file_types: &["pdf", "docx"],
        max_pages: Some(4),
    },
    common_in: &["e-commerce", "services", "retail"],
    parsing_capabilities: AtsParsingCapabilities {
        parses_tables: true,
        parses_columns: true,
        parses_images: false,
        parses_headers: true,
        parses_footers: true,
        parses_links: true,
        parses_custom_fonts: true,
    },
    tips: &[
        "Format moderne accepté",
        "Sections langues bien analysées",
        "Parsing avancé des compétences",
    ],
};

static ICIMS: AtsStandard = AtsStandard {
    id: "icims",
    name: "iCIMS",
    vendor: "iCIMS",
    market_share: 7.0,
    strictness: Strictness::Medium,
    preferences: AtsPreferences {
        date_format: "MM/YYYY",
        section_headers: &[
            "Work Experience",
            "Education",
            "Skills",
            "Summary",
            "Certifications",
        ],
        avoid_elements: &["tables", "columns", "images"],
        max_file_size: 5 * MIB,
        supported_fonts: &["Arial", "Times New Roman", "Calibri"],
        preferred_file_types: &["pdf", "doc", "docx"],
        max_pages: Some(3),
    },
    common_in: &["healthcare", "government", "large enterprises"],
    parsing_capabilities: AtsParsingCapabilities {
        parses_tables: false,
        parses_columns: false,
        parses_images: false,
        parses_headers: true,
        parses_footers: false,
        parses_links: true,
        parses_custom_fonts: false,
    },
    tips: &[
        "Format très classique recommandé",
        "Chronologie stricte",
        "Évitez les formats créatifs",
    ],
};

/// All vendor standards, in canonical iteration order.
pub static ATS_STANDARDS: &[&AtsStandard] = &[
    &TALEO,
    &WORKDAY,
    &GREENHOUSE,
    &LEVER,
    &SMARTRECRUITERS,
    &ICIMS,
];

// ────────────────────────────────────────────────────────────────────────────
// Job board → ATS mapping
// ────────────────────────────────────────────────────────────────────────────

pub static JOBBOARD_ATS_MAPPING: &[JobBoardMapping] = &[
    JobBoardMapping {
        job_board: "LinkedIn",
        common_ats: &["taleo", "workday", "greenhouse", "lever"],
        recommended_format: "Simple, single-column PDF",
        tips: &[
            "La plupart des entreprises utilisent Taleo ou Workday",
            "Gardez un format simple et professionnel",
        ],
    },
    JobBoardMapping {
        job_board: "Indeed",
        common_ats: &["taleo", "workday", "smartrecruiters"],
        recommended_format: "Standard PDF, no tables",
        tips: &[
            "Indeed a son propre parser en plus de l'ATS de l'entreprise",
            "Utilisez des mots-clés du poste",
        ],
    },
    JobBoardMapping {
        job_board: "HelloWork",
        common_ats: &["taleo", "workday"],
        recommended_format: "PDF classique",
        tips: &["Format français standard accepté", "Photo optionnelle"],
    },
    JobBoardMapping {
        job_board: "Cadremploi",
        common_ats: &["taleo", "workday"],
        recommended_format: "PDF professionnel",
        tips: &["Format cadre classique", "Expérience mise en avant"],
    },
    JobBoardMapping {
        job_board: "Welcome to the Jungle",
        common_ats: &["greenhouse", "lever", "workday"],
        recommended_format: "PDF moderne acceptable",
        tips: &[
            "Startups et tech principalement",
            "Format plus créatif possible",
            "Mettez en avant les soft skills",
        ],
    },
    JobBoardMapping {
        job_board: "APEC",
        common_ats: &["taleo", "workday"],
        recommended_format: "PDF standard cadre",
        tips: &["Format classique recommandé", "Focus sur les réalisations"],
    },
    JobBoardMapping {
        job_board: "Monster",
        common_ats: &["taleo"],
        recommended_format: "PDF simple",
        tips: &["Parser ancien", "Évitez tout formatage complexe"],
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Lookup
// ────────────────────────────────────────────────────────────────────────────

/// Case-insensitive vendor lookup.
pub fn ats_standard(id: &str) -> Option<&'static AtsStandard> {
    let id = id.to_lowercase();
    ATS_STANDARDS.iter().find(|ats| ats.id == id).copied()
}

pub fn all_ats_standards() -> &'static [&'static AtsStandard] {
    ATS_STANDARDS
}

pub fn ats_by_strictness(strictness: Strictness) -> Vec<&'static AtsStandard> {
    ATS_STANDARDS
        .iter()
        .filter(|ats| ats.strictness == strictness)
        .copied()
        .collect()
}

pub fn job_board_mappings() -> &'static [JobBoardMapping] {
    JOBBOARD_ATS_MAPPING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let ats = ats_standard("TALEO").unwrap();
        assert_eq!(ats.name, "Oracle Taleo");
        assert_eq!(ats.vendor, "Oracle");
    }

    #[test]
    fn test_unknown_vendor_is_none() {
        assert!(ats_standard("bamboohr").is_none());
    }

    #[test]
    fn test_vendor_ids_are_pre_lowercased() {
        for ats in ATS_STANDARDS {
            assert_eq!(ats.id, ats.id.to_lowercase());
        }
    }

    #[test]
    fn test_by_strictness_filters_exactly() {
        let strict = ats_by_strictness(Strictness::High);
        assert_eq!(strict.len(), 1);
        assert_eq!(strict[0].id, "taleo");

        let lenient = ats_by_strictness(Strictness::Low);
        let ids: Vec<_> = lenient.iter().map(|ats| ats.id).collect();
        assert_eq!(ids, vec!["lever", "smartrecruiters"]);
    }

    #[test]
    fn test_taleo_rejects_tables_and_columns() {
        let taleo = ats_standard("taleo").unwrap();
        assert!(!taleo.parsing_capabilities.parses_tables);
        assert!(!taleo.parsing_capabilities.parses_columns);
        assert_eq!(taleo.preferences.max_file_size, 5 * 1024 * 1024);
        assert_eq!(taleo.preferences.max_pages, Some(3));
    }

    #[test]
    fn test_job_board_mappings_reference_known_vendors() {
        for mapping in job_board_mappings() {
            for ats_id in mapping.common_ats {
                assert!(
                    ats_standard(ats_id).is_some(),
                    "{} references unknown ATS '{}'",
                    mapping.job_board,
                    ats_id
                );
            }
        }
    }
}
