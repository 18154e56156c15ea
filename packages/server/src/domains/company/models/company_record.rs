use serde::{Deserialize, Serialize};

/// Sentinel for keyword fields when no sentence mentions the keywords
pub const NOT_AVAILABLE: &str = "Not Available";

/// Sentinel for the job postings field when no anchor mentions SAP/ERP
pub const NO_SAP_JOB_POSTINGS: &str = "No SAP job postings found";

/// Flat best-effort fact sheet about one company.
///
/// Every field is always present; extraction that finds nothing leaves the
/// empty string (or one of the sentinels above) in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub company_name: String,
    pub address: String,
    pub employee_count: String,
    pub annual_revenue: String,
    pub leadership_changes: String,
    pub recent_news: String,
    pub recent_funding: String,
    pub current_erp: String,
    pub recent_sap_job_postings: String,
    pub phone_number: String,
    pub sic_codes: String,
    pub company_official_website: String,
    pub strengths: String,
    pub weaknesses: String,
    pub opportunities: String,
    pub threats: String,
}

impl CompanyRecord {
    /// Fresh record for a query. The name is kept exactly as typed.
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            ..Default::default()
        }
    }

    pub fn get(&self, field: RecordField) -> &str {
        match field {
            RecordField::CompanyName => &self.company_name,
            RecordField::Address => &self.address,
            RecordField::EmployeeCount => &self.employee_count,
            RecordField::AnnualRevenue => &self.annual_revenue,
            RecordField::LeadershipChanges => &self.leadership_changes,
            RecordField::RecentNews => &self.recent_news,
            RecordField::RecentFunding => &self.recent_funding,
            RecordField::CurrentErp => &self.current_erp,
            RecordField::RecentSapJobPostings => &self.recent_sap_job_postings,
            RecordField::PhoneNumber => &self.phone_number,
            RecordField::SicCodes => &self.sic_codes,
            RecordField::CompanyOfficialWebsite => &self.company_official_website,
            RecordField::Strengths => &self.strengths,
            RecordField::Weaknesses => &self.weaknesses,
            RecordField::Opportunities => &self.opportunities,
            RecordField::Threats => &self.threats,
        }
    }

    pub fn set(&mut self, field: RecordField, value: impl Into<String>) {
        let slot = match field {
            RecordField::CompanyName => &mut self.company_name,
            RecordField::Address => &mut self.address,
            RecordField::EmployeeCount => &mut self.employee_count,
            RecordField::AnnualRevenue => &mut self.annual_revenue,
            RecordField::LeadershipChanges => &mut self.leadership_changes,
            RecordField::RecentNews => &mut self.recent_news,
            RecordField::RecentFunding => &mut self.recent_funding,
            RecordField::CurrentErp => &mut self.current_erp,
            RecordField::RecentSapJobPostings => &mut self.recent_sap_job_postings,
            RecordField::PhoneNumber => &mut self.phone_number,
            RecordField::SicCodes => &mut self.sic_codes,
            RecordField::CompanyOfficialWebsite => &mut self.company_official_website,
            RecordField::Strengths => &mut self.strengths,
            RecordField::Weaknesses => &mut self.weaknesses,
            RecordField::Opportunities => &mut self.opportunities,
            RecordField::Threats => &mut self.threats,
        };
        *slot = value.into();
    }
}

/// Names of the `CompanyRecord` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    CompanyName,
    Address,
    EmployeeCount,
    AnnualRevenue,
    LeadershipChanges,
    RecentNews,
    RecentFunding,
    CurrentErp,
    RecentSapJobPostings,
    PhoneNumber,
    SicCodes,
    CompanyOfficialWebsite,
    Strengths,
    Weaknesses,
    Opportunities,
    Threats,
}

impl RecordField {
    pub const ALL: [RecordField; 16] = [
        RecordField::CompanyName,
        RecordField::Address,
        RecordField::EmployeeCount,
        RecordField::AnnualRevenue,
        RecordField::LeadershipChanges,
        RecordField::RecentNews,
        RecordField::RecentFunding,
        RecordField::CurrentErp,
        RecordField::RecentSapJobPostings,
        RecordField::PhoneNumber,
        RecordField::SicCodes,
        RecordField::CompanyOfficialWebsite,
        RecordField::Strengths,
        RecordField::Weaknesses,
        RecordField::Opportunities,
        RecordField::Threats,
    ];

    /// snake_case key, identical to the serialized field name
    pub fn key(self) -> &'static str {
        match self {
            RecordField::CompanyName => "company_name",
            RecordField::Address => "address",
            RecordField::EmployeeCount => "employee_count",
            RecordField::AnnualRevenue => "annual_revenue",
            RecordField::LeadershipChanges => "leadership_changes",
            RecordField::RecentNews => "recent_news",
            RecordField::RecentFunding => "recent_funding",
            RecordField::CurrentErp => "current_erp",
            RecordField::RecentSapJobPostings => "recent_sap_job_postings",
            RecordField::PhoneNumber => "phone_number",
            RecordField::SicCodes => "sic_codes",
            RecordField::CompanyOfficialWebsite => "company_official_website",
            RecordField::Strengths => "strengths",
            RecordField::Weaknesses => "weaknesses",
            RecordField::Opportunities => "opportunities",
            RecordField::Threats => "threats",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl std::fmt::Display for RecordField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_keeps_name_verbatim() {
        let record = CompanyRecord::new("  Acme Co ");
        assert_eq!(record.company_name, "  Acme Co ");
        assert_eq!(record.company_official_website, "");
        assert_eq!(record.recent_funding, "");
    }

    #[test]
    fn test_keys_match_serialized_names() {
        let record = CompanyRecord::new("Acme");
        let json = serde_json::to_value(&record).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), RecordField::ALL.len());
        for field in RecordField::ALL {
            assert!(object.contains_key(field.key()), "missing {}", field);
        }
    }

    #[test]
    fn test_from_key_round_trips() {
        for field in RecordField::ALL {
            assert_eq!(RecordField::from_key(field.key()), Some(field));
        }
        assert_eq!(RecordField::from_key("ceo"), None);
    }

    #[test]
    fn test_set_then_get() {
        let mut record = CompanyRecord::default();
        record.set(RecordField::SicCodes, "7372");
        assert_eq!(record.get(RecordField::SicCodes), "7372");
        assert_eq!(record.sic_codes, "7372");
    }
}
