//! Rule-based fact extraction from a company homepage.
//!
//! Everything here is a pure function of the page HTML. Each rule family
//! fills its own fields and cannot affect the others:
//!
//! - `patterns`: regex rules (phone, address, employees, revenue, SIC code)
//! - `keywords`: sentence rules (leadership, news, SWOT)
//! - `erp`: ERP vendor detection
//! - `job_postings`: SAP/ERP link texts

pub mod erp;
pub mod job_postings;
pub mod keywords;
pub mod patterns;
pub mod text;

use scraper::Html;

use crate::domains::company::models::CompanyRecord;

pub use erp::{detect_erp, ERP_VENDORS};
pub use job_postings::sap_job_postings;
pub use keywords::apply_keywords;
pub use patterns::apply_patterns;
pub use text::page_text;

/// Apply every rule family to a fetched page.
pub fn extract_facts(html: &str, record: &mut CompanyRecord) {
    let document = Html::parse_document(html);
    let text = page_text(&document);

    apply_patterns(&text, record);
    apply_keywords(&text, record);

    if let Some(erp) = detect_erp(&text) {
        record.current_erp = erp.to_string();
    }

    record.recent_sap_job_postings = sap_job_postings(&document);
}
