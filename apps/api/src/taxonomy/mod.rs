// Industry keyword knowledge base.
// Static per-sector tables (tables.rs) + extraction/matching utilities (matching.rs).
// Tables are process-wide immutable statics; iteration order is the slice order,
// which keeps sector-detection tie-breaking reproducible.

pub mod matching;
pub mod tables;

pub use matching::{
    detect_sector, extract_keywords, missing_keywords, required_keywords, MissingKeywords,
};
pub use tables::{all_sectors, industry_keywords, INDUSTRY_KEYWORDS};
