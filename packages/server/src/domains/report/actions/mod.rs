//! Report domain actions - LLM report generation and the full research flow

use serde::Serialize;
use tracing::{error, info};

use crate::domains::company::{research_company, CompanyRecord};
use crate::domains::report::template::ReportTemplate;
use crate::kernel::ResearchDeps;

/// Report body used whenever the LLM call fails
pub const FALLBACK_REPORT: &str = "Summary generation failed.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportOutcome {
    Generated { report: String },
    Fallback { error: String },
}

impl ReportOutcome {
    /// Report body to show and export
    pub fn text(&self) -> &str {
        match self {
            ReportOutcome::Generated { report } => report,
            ReportOutcome::Fallback { .. } => FALLBACK_REPORT,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ReportOutcome::Generated { .. } => None,
            ReportOutcome::Fallback { error } => Some(error),
        }
    }
}

/// Render the standard prompt for `record` and ask the LLM for the report.
pub async fn generate_report(record: &CompanyRecord, deps: &ResearchDeps) -> ReportOutcome {
    let prompt = ReportTemplate::standard().render(record);

    match deps.ai.complete(&prompt).await {
        Ok(reply) => {
            let report = reply.trim().to_string();
            info!(
                company = %record.company_name,
                report_len = report.len(),
                "Report generated"
            );
            ReportOutcome::Generated { report }
        }
        Err(e) => {
            error!(
                company = %record.company_name,
                error = %e,
                "Summary generation error"
            );
            ReportOutcome::Fallback {
                error: e.to_string(),
            }
        }
    }
}

/// Fact sheet plus report for one query
#[derive(Debug, Clone, Serialize)]
pub struct CompiledReport {
    pub record: CompanyRecord,
    pub outcome: ReportOutcome,
}

/// Extract facts, then generate the report. Never fails.
pub async fn compile_report(company_name: &str, deps: &ResearchDeps) -> CompiledReport {
    let record = research_company(company_name, deps).await;
    let outcome = generate_report(&record, deps).await;
    CompiledReport { record, outcome }
}
