pub mod aggregate;

pub use aggregate::{normalize_keywords, Report, ReportDto, ReportId, REPORT_CATEGORIES};
