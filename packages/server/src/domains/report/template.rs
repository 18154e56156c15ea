//! Typed prompt template for the business report.
//!
//! Placeholders are `{field_key}` where `field_key` is a `RecordField` key.
//! `{{` and `}}` produce literal braces. Unknown keys are rejected when the
//! template is parsed, so rendering a parsed template cannot fail.

use lazy_static::lazy_static;
use thiserror::Error;

use crate::domains::company::models::{CompanyRecord, RecordField};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("unknown placeholder `{key}` at byte {offset}")]
    UnknownKey { key: String, offset: usize },

    #[error("unterminated placeholder at byte {offset}")]
    Unterminated { offset: usize },

    #[error("unmatched `}}` at byte {offset}")]
    UnmatchedClose { offset: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(RecordField),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTemplate {
    segments: Vec<Segment>,
}

impl ReportTemplate {
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((offset, c)) = chars.next() {
            match c {
                '{' => {
                    if matches!(chars.peek(), Some((_, '{'))) {
                        chars.next();
                        literal.push('{');
                        continue;
                    }

                    let mut key = String::new();
                    let mut closed = false;
                    for (_, k) in chars.by_ref() {
                        if k == '}' {
                            closed = true;
                            break;
                        }
                        key.push(k);
                    }
                    if !closed {
                        return Err(TemplateError::Unterminated { offset });
                    }

                    let field = RecordField::from_key(key.trim())
                        .ok_or(TemplateError::UnknownKey { key, offset })?;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Field(field));
                }
                '}' => {
                    if matches!(chars.peek(), Some((_, '}'))) {
                        chars.next();
                        literal.push('}');
                    } else {
                        return Err(TemplateError::UnmatchedClose { offset });
                    }
                }
                _ => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// The built-in business report prompt
    pub fn standard() -> &'static ReportTemplate {
        &STANDARD_TEMPLATE
    }

    pub fn render(&self, record: &CompanyRecord) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => text.as_str(),
                Segment::Field(field) => record.get(*field),
            })
            .collect()
    }

    /// Fields referenced by the template, in order of first use
    pub fn fields(&self) -> Vec<RecordField> {
        let mut fields = Vec::new();
        for segment in &self.segments {
            if let Segment::Field(field) = segment {
                if !fields.contains(field) {
                    fields.push(*field);
                }
            }
        }
        fields
    }
}

pub const STANDARD_REPORT_TEMPLATE: &str = r#"
You are a business intelligence assistant creating a report on **{company_name}**.

Return a fact-based, **plain text** report with no markdown formatting but with proper alignment. Use no asterisks (*) or hashtags (#) in the final document.
Enrich any missing information from your own knowledge and give descriptive answers.

**Company Report**

## Company Fundamentals
- **Company Name:** {company_name}
- **Size:** {employee_count}
- **Annual Revenue:** {annual_revenue}
- **Industry Classification:** {sic_codes}
- **Business Model:** Not Available (refer to {company_official_website})
- **Geographic Presence:** Not Available (refer to {company_official_website})
- **Ownership:** Not Available (refer to Crunchbase or Bloomberg)

## Financial Health & Performance
- **Recent Financials:** {annual_revenue}
- **Stability Indicators:** Not Available (refer to investor reports or 10-K)
- **Capital Investments:** {recent_funding}
- **Stock Performance:** Not Available (check Google Finance or Yahoo Finance)

## Products, Operations & Technology
- **Core Offerings:** Not Available (check company website)
- **ERP System:** {current_erp}
- **Technology Stack:** Not Available (refer to job postings or CIO LinkedIn)

## Leadership & Governance
- **Executive Team:** {leadership_changes}
- **Board of Directors:** Not Available (refer to official site or Crunchbase)
- **Leadership Strategy:** Not Available (refer to press releases/interviews)

## Strategic Initiatives & Challenges
- **Growth Priorities:** Not Available (check investor presentations)
- **Digital Initiatives:** {current_erp}
- **Challenges Identified:** {weaknesses}, {threats}

## Market Context & Competitors
- **Recent News:** {recent_news}
- **Competitive Landscape:** Not Available (check Crunchbase or analyst coverage)
- **Industry Trends:** Not Available (check news and analyst reports)

## SAP-Relevant Signals
- **Recent SAP Job Postings:** {recent_sap_job_postings}
- **Integration Maturity:** Not Available (check LinkedIn/job roles)
- **Tech Budget Indicators:** Not Available (refer to earnings calls)

## SWOT Analysis
- **Strengths:** {strengths}
- **Weaknesses:** {weaknesses}
- **Opportunities:** {opportunities}
- **Threats:** {threats}

## Contact Information
- **Phone:** {phone_number}
- **Address:** {address}
- **Official Website:** {company_official_website}

## Disclaimer
Some data may be incomplete or outdated. For the most accurate and timely information, please verify through the company's official website, investor relations, or public disclosures.
"#;

lazy_static! {
    static ref STANDARD_TEMPLATE: ReportTemplate =
        ReportTemplate::parse(STANDARD_REPORT_TEMPLATE).unwrap();
}
