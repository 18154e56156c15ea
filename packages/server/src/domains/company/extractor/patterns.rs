//! Regex rules for the contact and size fields.
//!
//! Rules run in table order against the flattened page text. Each rule is
//! case-insensitive and only its first match is used.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::domains::company::models::{CompanyRecord, RecordField};

/// How a rule turns its match into a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Capture {
    /// First capture group, verbatim
    FirstGroup,
    /// The entire match
    WholeMatch,
    /// `$` + amount without thousand separators + optional unit
    Revenue,
}

struct PatternRule {
    field: RecordField,
    regex: &'static Regex,
    capture: Capture,
}

lazy_static! {
    static ref PHONE_REGEX: Regex = Regex::new(
        r"(?i)(\+?\d{1,3}[-.\s]?\(?\d{1,4}\)?[-.\s]?\d{1,4}[-.\s]?\d{1,9})"
    ).unwrap();

    // Street number, street, city, two-letter state, ZIP (+4)
    static ref ADDRESS_REGEX: Regex = Regex::new(
        r"(?i)\d{1,5}\s[\w\s.,-]+,\s\w+,\s[A-Z]{2}\s\d{5}(-\d{4})?"
    ).unwrap();

    static ref EMPLOYEE_COUNT_REGEX: Regex = Regex::new(
        r"(?i)([0-9,]+)\s+(employees|staff|workers|team)"
    ).unwrap();

    static ref REVENUE_REGEX: Regex = Regex::new(
        r"(?i)(revenue|sales|turnover)[\s\w]{0,20}?\$?([\d,.]+)\s?(million|billion)?"
    ).unwrap();

    static ref SIC_CODE_REGEX: Regex = Regex::new(
        r"(?i)SIC Code[:\s]*([\d]{4})"
    ).unwrap();

    static ref PATTERN_RULES: [PatternRule; 5] = [
        PatternRule { field: RecordField::PhoneNumber, regex: &PHONE_REGEX, capture: Capture::FirstGroup },
        PatternRule { field: RecordField::Address, regex: &ADDRESS_REGEX, capture: Capture::WholeMatch },
        PatternRule { field: RecordField::EmployeeCount, regex: &EMPLOYEE_COUNT_REGEX, capture: Capture::FirstGroup },
        PatternRule { field: RecordField::AnnualRevenue, regex: &REVENUE_REGEX, capture: Capture::Revenue },
        PatternRule { field: RecordField::SicCodes, regex: &SIC_CODE_REGEX, capture: Capture::FirstGroup },
    ];
}

/// Fill the pattern-derived fields. Fields without a match are left untouched.
pub fn apply_patterns(text: &str, record: &mut CompanyRecord) {
    for rule in PATTERN_RULES.iter() {
        if let Some(caps) = rule.regex.captures(text) {
            record.set(rule.field, capture_value(rule.capture, &caps));
        }
    }
}

fn capture_value(capture: Capture, caps: &Captures<'_>) -> String {
    match capture {
        Capture::FirstGroup => caps
            .get(1)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
        Capture::WholeMatch => caps[0].to_string(),
        Capture::Revenue => {
            let amount = caps
                .get(2)
                .map(|m| m.as_str().replace(',', ""))
                .unwrap_or_default();
            match caps.get(3) {
                Some(unit) => format!("${} {}", amount, unit.as_str()),
                None => format!("${}", amount),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> CompanyRecord {
        let mut record = CompanyRecord::new("Acme");
        apply_patterns(text, &mut record);
        record
    }

    #[test]
    fn test_revenue_strips_commas_and_keeps_unit() {
        let record = extract("Annual revenue of $1,000,000 million was reported");
        assert_eq!(record.annual_revenue, "$1000000 million");
    }

    #[test]
    fn test_revenue_without_unit_has_no_trailing_text() {
        let record = extract("Total sales reached 2,500 last year");
        assert_eq!(record.annual_revenue, "$2500");
    }

    #[test]
    fn test_revenue_is_case_insensitive() {
        let record = extract("TURNOVER of $3.2 BILLION");
        assert_eq!(record.annual_revenue, "$3.2 BILLION");
    }

    #[test]
    fn test_employee_count_keeps_separators() {
        let record = extract("We have 12,500 employees worldwide");
        assert_eq!(record.employee_count, "12,500");
    }

    #[test]
    fn test_sic_code() {
        let record = extract("Industry SIC Code: 7372 (software)");
        assert_eq!(record.sic_codes, "7372");
    }

    #[test]
    fn test_phone_number_first_match_wins() {
        let record = extract("Call +1 (555) 123-4567 or 555-987-6543");
        assert_eq!(record.phone_number, "+1 (555) 123-4567");
    }

    #[test]
    fn test_address_uses_whole_match() {
        let record = extract("Visit us at 1600 Amphitheatre Parkway, Mountain, CA 94043 today");
        assert_eq!(record.address, "1600 Amphitheatre Parkway, Mountain, CA 94043");
    }

    #[test]
    fn test_no_match_leaves_fields_empty() {
        let record = extract("Welcome to our homepage");
        assert_eq!(record.phone_number, "");
        assert_eq!(record.address, "");
        assert_eq!(record.employee_count, "");
        assert_eq!(record.annual_revenue, "");
        assert_eq!(record.sic_codes, "");
    }
}
