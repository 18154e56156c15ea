use lazy_static::lazy_static;
use scraper::{Html, Selector};

use super::text::element_text;
use crate::domains::company::models::NO_SAP_JOB_POSTINGS;

lazy_static! {
    static ref ANCHOR_SELECTOR: Selector = Selector::parse("a").unwrap();
}

const POSTING_KEYWORDS: [&str; 2] = ["sap", "erp"];

/// Comma-joined texts of every link mentioning SAP or ERP.
pub fn sap_job_postings(document: &Html) -> String {
    let postings: Vec<String> = document
        .select(&ANCHOR_SELECTOR)
        .map(|anchor| element_text(&anchor))
        .filter(|text| {
            let lower = text.to_lowercase();
            POSTING_KEYWORDS.iter().any(|k| lower.contains(k))
        })
        .collect();

    if postings.is_empty() {
        NO_SAP_JOB_POSTINGS.to_string()
    } else {
        postings.join(", ")
    }
}
