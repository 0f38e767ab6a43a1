//! Static per-sector keyword tables.
//!
//! Sector ids are pre-lowercased at definition time; lookups lowercase the
//! query. The slice order is the canonical sector iteration order — sector
//! detection breaks ties by it, so keep new sectors appended, not inserted.

use crate::models::ats::{Importance, IndustryKeywords, KeywordCategory, KeywordEntry};

const fn kw(
    term: &'static str,
    variants: &'static [&'static str],
    importance: Importance,
) -> KeywordEntry {
    KeywordEntry {
        term,
        variants,
        importance,
    }
}

use Importance::{NiceToHave, Preferred, Required};

// ────────────────────────────────────────────────────────────────────────────
// Technology
// ────────────────────────────────────────────────────────────────────────────

static TECH_FRONTEND: &[KeywordEntry] = &[
    kw("React", &["React.js", "ReactJS"], Required),
    kw("Vue.js", &["Vue", "VueJS"], Preferred),
    kw("Angular", &["AngularJS", "Angular 2+"], Preferred),
    kw("TypeScript", &["TS"], Required),
    kw("JavaScript", &["JS", "ES6", "ES2015+"], Required),
    kw("HTML5", &["HTML"], Required),
    kw("CSS3", &["CSS", "Sass", "SCSS", "Less"], Required),
    kw("Tailwind CSS", &["TailwindCSS"], Preferred),
    kw("Next.js", &["NextJS"], Preferred),
    kw("Responsive Design", &["Mobile-first"], Required),
    kw("Accessibility", &["a11y", "WCAG"], NiceToHave),
];

static TECH_BACKEND: &[KeywordEntry] = &[
    kw("Node.js", &["NodeJS", "Node"], Required),
    kw("Python", &[], Required),
    kw("Java", &["Java SE", "Java EE"], Preferred),
    kw("Go", &["Golang"], Preferred),
    kw("REST API", &["RESTful", "API Design"], Required),
    kw("GraphQL", &[], Preferred),
    kw("PostgreSQL", &["Postgres"], Required),
    kw("MongoDB", &["Mongo"], Preferred),
    kw("Redis", &[], NiceToHave),
    kw("Microservices", &["Microservice Architecture"], Preferred),
];

static TECH_DEVOPS: &[KeywordEntry] = &[
    kw("Docker", &["Containerization"], Required),
    kw("Kubernetes", &["K8s"], Preferred),
    kw("AWS", &["Amazon Web Services"], Required),
    kw("GCP", &["Google Cloud Platform", "Google Cloud"], Preferred),
    kw("Azure", &["Microsoft Azure"], Preferred),
    kw(
        "CI/CD",
        &["Continuous Integration", "Continuous Deployment"],
        Required,
    ),
    kw("GitHub Actions", &[], Preferred),
    kw("Terraform", &["IaC"], NiceToHave),
];

static TECH: IndustryKeywords = IndustryKeywords {
    id: "tech",
    sector: "Technology",
    categories: &[
        KeywordCategory {
            name: "Frontend Development",
            keywords: TECH_FRONTEND,
        },
        KeywordCategory {
            name: "Backend Development",
            keywords: TECH_BACKEND,
        },
        KeywordCategory {
            name: "DevOps & Cloud",
            keywords: TECH_DEVOPS,
        },
    ],
    common_tools: &[
        "Git",
        "GitHub",
        "GitLab",
        "Jira",
        "Confluence",
        "Slack",
        "VS Code",
        "IntelliJ IDEA",
        "Postman",
        "Figma",
        "Linear",
        "Notion",
    ],
    soft_skills: &[
        "Problem Solving",
        "Team Collaboration",
        "Communication",
        "Agile",
        "Scrum",
        "Code Review",
        "Mentoring",
        "Technical Documentation",
    ],
    certifications: &[
        "AWS Certified",
        "Google Cloud Certified",
        "Azure Certified",
        "Kubernetes Certified",
        "Scrum Master",
        "PMP",
    ],
};

// ────────────────────────────────────────────────────────────────────────────
// Finance & Banking
// ────────────────────────────────────────────────────────────────────────────

static FINANCE_ANALYSIS: &[KeywordEntry] = &[
    kw("Financial Modeling", &["Financial Models"], Required),
    kw("Valuation", &["DCF", "Discounted Cash Flow"], Required),
    kw("GAAP", &["US GAAP"], Required),
    kw("IFRS", &["International Financial Reporting"], Required),
    kw("Financial Reporting", &["Financial Statements"], Required),
    kw("Budgeting", &["Budget Management"], Required),
    kw("Forecasting", &["Financial Forecasting"], Required),
];

static FINANCE_INVESTMENT: &[KeywordEntry] = &[
    kw("Portfolio Management", &["Asset Management"], Required),
    kw("Risk Management", &["Risk Assessment"], Required),
    kw("M&A", &["Mergers and Acquisitions"], Preferred),
    kw("Due Diligence", &[], Preferred),
    kw("Equity Research", &[], Preferred),
    kw("Fixed Income", &["Bonds"], Preferred),
];

static FINANCE: IndustryKeywords = IndustryKeywords {
    id: "finance",
    sector: "Finance & Banking",
    categories: &[
        KeywordCategory {
            name: "Financial Analysis",
            keywords: FINANCE_ANALYSIS,
        },
        KeywordCategory {
            name: "Investment",
            keywords: FINANCE_INVESTMENT,
        },
    ],
    common_tools: &[
        "Excel",
        "Bloomberg Terminal",
        "Capital IQ",
        "FactSet",
        "SAP",
        "Oracle Financials",
        "QuickBooks",
        "Tableau",
        "Power BI",
        "Python",
    ],
    soft_skills: &[
        "Analytical Thinking",
        "Attention to Detail",
        "Communication",
        "Stakeholder Management",
        "Presentation Skills",
        "Regulatory Compliance",
    ],
    certifications: &[
        "CFA",
        "CPA",
        "ACCA",
        "FRM",
        "Series 7",
        "Series 63",
        "Series 66",
    ],
};

// ────────────────────────────────────────────────────────────────────────────
// Marketing & Communications
// ────────────────────────────────────────────────────────────────────────────

static MARKETING_DIGITAL: &[KeywordEntry] = &[
    kw("SEO", &["Search Engine Optimization"], Required),
    kw("SEM", &["Search Engine Marketing", "PPC"], Required),
    kw("Google Analytics", &["GA4", "Universal Analytics"], Required),
    kw("Google Ads", &["AdWords"], Required),
    kw("Content Marketing", &["Content Strategy"], Required),
    kw("Email Marketing", &["Email Campaigns"], Required),
    kw("Marketing Automation", &[], Preferred),
    kw("A/B Testing", &["Split Testing"], Preferred),
];

static MARKETING_SOCIAL: &[KeywordEntry] = &[
    kw("Social Media Marketing", &["SMM"], Required),
    kw("Facebook Ads", &["Meta Ads"], Required),
    kw("LinkedIn Marketing", &[], Preferred),
    kw("Instagram Marketing", &[], Preferred),
    kw("Community Management", &[], Preferred),
    kw("Influencer Marketing", &[], NiceToHave),
];

static MARKETING: IndustryKeywords = IndustryKeywords {
    id: "marketing",
    sector: "Marketing & Communications",
    categories: &[
        KeywordCategory {
            name: "Digital Marketing",
            keywords: MARKETING_DIGITAL,
        },
        KeywordCategory {
            name: "Social Media",
            keywords: MARKETING_SOCIAL,
        },
    ],
    common_tools: &[
        "HubSpot",
        "Salesforce",
        "Marketo",
        "Mailchimp",
        "Hootsuite",
        "Sprout Social",
        "Canva",
        "Adobe Creative Suite",
        "Semrush",
        "Ahrefs",
    ],
    soft_skills: &[
        "Creativity",
        "Strategic Thinking",
        "Data-Driven",
        "Communication",
        "Project Management",
        "Storytelling",
        "Brand Management",
    ],
    certifications: &[
        "Google Ads Certified",
        "HubSpot Certified",
        "Facebook Blueprint",
        "Google Analytics Certified",
        "Hootsuite Certified",
    ],
};

// ────────────────────────────────────────────────────────────────────────────
// Healthcare
// ────────────────────────────────────────────────────────────────────────────

static HEALTHCARE_CLINICAL: &[KeywordEntry] = &[
    kw("Patient Care", &[], Required),
    kw("Clinical Assessment", &[], Required),
    kw("HIPAA", &["HIPAA Compliance"], Required),
    kw("Electronic Health Records", &["EHR", "EMR"], Required),
    kw("Medical Terminology", &[], Required),
];

static HEALTHCARE_ADMIN: &[KeywordEntry] = &[
    kw("Healthcare Administration", &[], Required),
    kw("Medical Billing", &["Medical Coding"], Preferred),
    kw("ICD-10", &["ICD Coding"], Preferred),
    kw("CPT Coding", &[], Preferred),
    kw("Revenue Cycle Management", &["RCM"], Preferred),
];

static HEALTHCARE: IndustryKeywords = IndustryKeywords {
    id: "healthcare",
    sector: "Healthcare",
    categories: &[
        KeywordCategory {
            name: "Clinical",
            keywords: HEALTHCARE_CLINICAL,
        },
        KeywordCategory {
            name: "Healthcare Administration",
            keywords: HEALTHCARE_ADMIN,
        },
    ],
    common_tools: &[
        "Epic",
        "Cerner",
        "Meditech",
        "Allscripts",
        "McKesson",
        "NextGen",
        "eClinicalWorks",
    ],
    soft_skills: &[
        "Empathy",
        "Communication",
        "Attention to Detail",
        "Critical Thinking",
        "Team Collaboration",
        "Stress Management",
    ],
    certifications: &["RN", "LPN", "CNA", "CMA", "RHIA", "RHIT", "CPC", "CCS"],
};

// ────────────────────────────────────────────────────────────────────────────
// Lookup
// ────────────────────────────────────────────────────────────────────────────

/// All supported sectors, in canonical iteration order.
pub static INDUSTRY_KEYWORDS: &[&IndustryKeywords] = &[&TECH, &FINANCE, &MARKETING, &HEALTHCARE];

/// Case-insensitive sector lookup.
pub fn industry_keywords(sector: &str) -> Option<&'static IndustryKeywords> {
    let sector = sector.to_lowercase();
    INDUSTRY_KEYWORDS
        .iter()
        .find(|industry| industry.id == sector)
        .copied()
}

pub fn all_sectors() -> Vec<&'static str> {
    INDUSTRY_KEYWORDS.iter().map(|industry| industry.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sectors_in_table_order() {
        assert_eq!(all_sectors(), vec!["tech", "finance", "marketing", "healthcare"]);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let industry = industry_keywords("TECH").unwrap();
        assert_eq!(industry.sector, "Technology");
    }

    #[test]
    fn test_lookup_unknown_sector_is_none() {
        assert!(industry_keywords("aerospace").is_none());
    }

    #[test]
    fn test_sector_ids_are_pre_lowercased() {
        for industry in INDUSTRY_KEYWORDS {
            assert_eq!(industry.id, industry.id.to_lowercase());
        }
    }

    #[test]
    fn test_every_sector_has_categories_and_tools() {
        for industry in INDUSTRY_KEYWORDS {
            assert!(!industry.categories.is_empty(), "{} has no categories", industry.id);
            assert!(!industry.common_tools.is_empty(), "{} has no tools", industry.id);
            assert!(!industry.certifications.is_empty(), "{} has no certs", industry.id);
        }
    }
}
