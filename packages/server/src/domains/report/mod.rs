//! Report domain - LLM-written business report and its `.docx` export.

pub mod actions;
pub mod export;
pub mod template;

pub use actions::{compile_report, generate_report, CompiledReport, ReportOutcome, FALLBACK_REPORT};
pub use export::{export_report, report_filename, ExportError, DOCX_MIME};
pub use template::{ReportTemplate, TemplateError};
