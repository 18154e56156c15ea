//! Company domain - turns a company name into a best-effort fact sheet
//!
//! ```text
//! name -> web locator -> homepage HTML -> extractor rules -> CompanyRecord
//! ```
//!
//! - `models`: `CompanyRecord`, `RecordField` and the sentinel values
//! - `extractor`: pure rule functions over the fetched HTML
//! - `actions`: `research_company()`, the only entry point that does I/O

pub mod actions;
pub mod extractor;
pub mod models;

pub use actions::{research_company, SEARCH_SUFFIX};
pub use models::{CompanyRecord, RecordField};
