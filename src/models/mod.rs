pub mod config;
pub mod report;

pub use config::{AnalysisSection, AppConfig, ExportSection};
pub use report::{JsonReport, ReportBar, ReportConfig, ReportRow, NO_COLORS_MESSAGE};
