//! Company domain actions - business logic functions

use tracing::{info, warn};

use crate::domains::company::extractor::extract_facts;
use crate::domains::company::models::CompanyRecord;
use crate::kernel::ResearchDeps;

/// Appended to the company name to steer the search towards the homepage
pub const SEARCH_SUFFIX: &str = " official site";

/// Build the fact sheet for a company.
///
/// Never fails. Without a located website only `company_name` is set; when
/// the homepage cannot be fetched the website is kept and everything else
/// stays at its default.
pub async fn research_company(company_name: &str, deps: &ResearchDeps) -> CompanyRecord {
    let mut record = CompanyRecord::new(company_name);

    let query = format!("{}{}", company_name, SEARCH_SUFFIX);
    let Some(website) = deps.web_locator.locate(&query).await else {
        info!(company = %company_name, "No official website found");
        return record;
    };
    record.company_official_website = website;

    match deps.page_fetcher.fetch(&record.company_official_website).await {
        Ok(html) => {
            extract_facts(&html, &mut record);
            info!(
                company = %company_name,
                website = %record.company_official_website,
                erp = %record.current_erp,
                "Company facts extracted"
            );
        }
        Err(e) => {
            warn!(
                company = %company_name,
                website = %record.company_official_website,
                error = %e,
                "Scraping error"
            );
        }
    }

    record
}
