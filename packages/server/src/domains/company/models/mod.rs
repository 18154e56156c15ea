pub mod company_record;

pub use company_record::{CompanyRecord, RecordField, NOT_AVAILABLE, NO_SAP_JOB_POSTINGS};
