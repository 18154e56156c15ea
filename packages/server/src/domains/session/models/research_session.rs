use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Key the session is stored under in the cookie session store
pub const SESSION_KEY: &str = "research_session";

/// Research state of one browser session.
///
/// History keeps first-query order without duplicates. Handlers load it,
/// mutate it through these methods and write it back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchSession {
    history: Vec<String>,
    reports: HashMap<String, String>,
    selected: Option<String>,
    cleared: bool,
    last_error: Option<String>,
}

/// What the report pane shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentReport<'a> {
    pub company: &'a str,
    /// `None` means "No previous report found"
    pub report: Option<&'a str>,
}

impl ResearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the report for `company` and select it.
    ///
    /// A repeated query replaces the stored report and keeps its history slot.
    pub fn record_report(&mut self, company: &str, report: impl Into<String>) {
        self.cleared = false;
        if !self.history.iter().any(|c| c == company) {
            self.history.push(company.to_string());
        }
        self.reports.insert(company.to_string(), report.into());
        self.selected = Some(company.to_string());
    }

    /// Select a history entry; unknown companies are ignored.
    pub fn select(&mut self, company: &str) -> bool {
        if !self.history.iter().any(|c| c == company) {
            return false;
        }
        self.selected = Some(company.to_string());
        self.cleared = false;
        true
    }

    pub fn new_research(&mut self) {
        self.cleared = true;
        self.selected = None;
    }

    pub fn current_report(&self) -> Option<CurrentReport<'_>> {
        if self.cleared {
            return None;
        }
        let company = self.selected.as_deref()?;
        Some(CurrentReport {
            company,
            report: self.report_for(company),
        })
    }

    pub fn report_for(&self, company: &str) -> Option<&str> {
        self.reports.get(company).map(String::as_str)
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_cleared(&self) -> bool {
        self.cleared
    }

    /// Remember a generation failure for the next page render
    pub fn record_error(&mut self, error: impl Into<String>) {
        self.last_error = Some(error.into());
    }

    pub fn take_error(&mut self) -> Option<String> {
        self.last_error.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_keeps_first_query_order_without_duplicates() {
        let mut session = ResearchSession::new();
        session.record_report("Acme", "first");
        session.record_report("Globex", "second");
        session.record_report("Acme", "replaced");

        assert_eq!(session.history(), ["Acme", "Globex"]);
        assert_eq!(session.report_for("Acme"), Some("replaced"));
        assert_eq!(session.selected(), Some("Acme"));
    }

    #[test]
    fn test_new_research_hides_report_until_next_selection() {
        let mut session = ResearchSession::new();
        session.record_report("Acme", "report");
        session.new_research();

        assert!(session.is_cleared());
        assert_eq!(session.current_report(), None);
        assert_eq!(session.history(), ["Acme"]);

        assert!(session.select("Acme"));
        assert_eq!(
            session.current_report(),
            Some(CurrentReport {
                company: "Acme",
                report: Some("report")
            })
        );
    }

    #[test]
    fn test_selecting_unknown_company_is_ignored() {
        let mut session = ResearchSession::new();
        session.record_report("Acme", "report");

        assert!(!session.select("Initech"));
        assert_eq!(session.selected(), Some("Acme"));
    }

    #[test]
    fn test_fresh_session_shows_nothing() {
        let session = ResearchSession::new();

        assert_eq!(session.current_report(), None);
        assert!(!session.is_cleared());
    }

    #[test]
    fn test_error_is_taken_once() {
        let mut session = ResearchSession::new();
        session.record_error("API error");

        assert_eq!(session.take_error().as_deref(), Some("API error"));
        assert_eq!(session.take_error(), None);
    }

    #[test]
    fn test_survives_serde_round_trip() {
        let mut session = ResearchSession::new();
        session.record_report("Acme", "report");
        session.new_research();

        let json = serde_json::to_value(&session).unwrap();
        let restored: ResearchSession = serde_json::from_value(json).unwrap();

        assert_eq!(restored, session);
    }
}
