//! Keyword rules for the narrative and SWOT fields.

use crate::domains::company::models::{CompanyRecord, RecordField, NOT_AVAILABLE};

/// At most this many sentences are kept per field
const MAX_SNIPPETS: usize = 3;

const KEYWORD_RULES: [(RecordField, &[&str]); 6] = [
    (
        RecordField::LeadershipChanges,
        &["ceo", "appointed", "joined", "leadership"],
    ),
    (
        RecordField::RecentNews,
        &["news", "announcement", "press release"],
    ),
    (RecordField::Strengths, &["strength"]),
    (RecordField::Weaknesses, &["weakness"]),
    (RecordField::Opportunities, &["opportunit"]),
    (RecordField::Threats, &["threat"]),
];

/// Fill every keyword field: matching sentences, or the "Not Available" sentinel.
pub fn apply_keywords(text: &str, record: &mut CompanyRecord) {
    for (field, keywords) in KEYWORD_RULES {
        record.set(field, matching_snippets(text, keywords));
    }
}

/// Sentences are split on '.' only; a unit matches when its lowercase form
/// contains any keyword.
fn matching_snippets(text: &str, keywords: &[&str]) -> String {
    let snippets: Vec<&str> = text
        .split('.')
        .filter(|unit| {
            let lower = unit.to_lowercase();
            keywords.iter().any(|k| lower.contains(k))
        })
        .map(str::trim)
        .take(MAX_SNIPPETS)
        .collect();

    if snippets.is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        snippets.join(" ")
    }
}
