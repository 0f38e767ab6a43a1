// ATS vendor reference data.
// Static vendor table + job-board mapping (tables.rs) and section-header
// normalization (sections.rs). A static capability/preference table, not a
// live vendor integration.

pub mod sections;
pub mod tables;

pub use sections::{normalize_section_header, recommended_section_header};
pub use tables::{
    all_ats_standards, ats_by_strictness, ats_standard, job_board_mappings, ATS_STANDARDS,
};
