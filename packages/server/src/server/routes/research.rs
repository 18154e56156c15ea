//! Research UI handlers.
//!
//! Every handler loads the `ResearchSession` from the cookie session,
//! mutates it and writes it back before responding.

use askama::Template;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::{error, info};

use crate::domains::report::{compile_report, export_report, report_filename, DOCX_MIME};
use crate::domains::session::{ResearchSession, SESSION_KEY};
use crate::server::app::AppState;
use crate::server::markdown::render_markdown;

#[derive(Debug, Deserialize)]
pub struct CompanyForm {
    pub company: String,
}

pub struct HistoryEntry {
    pub company: String,
    pub selected: bool,
}

/// Report pane of the index page
pub struct ReportView {
    pub company: String,
    pub html: Option<String>,
    pub download_url: String,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub history: Vec<HistoryEntry>,
    pub cleared: bool,
    pub report: Option<ReportView>,
    pub error: Option<String>,
}

async fn load_session(session: &Session) -> Result<ResearchSession, StatusCode> {
    session
        .get::<ResearchSession>(SESSION_KEY)
        .await
        .map(Option::unwrap_or_default)
        .map_err(|e| {
            error!(error = %e, "Failed to load research session");
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

async fn save_session(session: &Session, research: &ResearchSession) -> Result<(), StatusCode> {
    session.insert(SESSION_KEY, research).await.map_err(|e| {
        error!(error = %e, "Failed to save research session");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

pub fn download_url(company: &str) -> String {
    format!("/reports/{}/download", urlencoding::encode(company))
}

/// `GET /`
pub async fn index(session: Session) -> Result<Html<String>, StatusCode> {
    let mut research = load_session(&session).await?;

    let error = research.take_error();
    if error.is_some() {
        save_session(&session, &research).await?;
    }

    let report = research.current_report().map(|current| ReportView {
        company: current.company.to_string(),
        html: current.report.map(render_markdown),
        download_url: download_url(current.company),
    });

    let shown = report.as_ref().map(|r| r.company.as_str());
    let history = research
        .history()
        .iter()
        .map(|company| HistoryEntry {
            company: company.clone(),
            selected: shown == Some(company.as_str()),
        })
        .collect();

    let page = IndexTemplate {
        history,
        cleared: research.is_cleared(),
        report,
        error,
    };

    page.render().map(Html).map_err(|e| {
        error!(error = %e, "Failed to render index page");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// `POST /research`
pub async fn research(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CompanyForm>,
) -> Result<Redirect, StatusCode> {
    let company = form.company.trim();
    if company.is_empty() {
        return Ok(Redirect::to("/"));
    }

    info!(company = %company, "Research requested");
    let compiled = compile_report(company, &state.deps).await;

    let mut research = load_session(&session).await?;
    research.record_report(company, compiled.outcome.text());
    if let Some(e) = compiled.outcome.error() {
        research.record_error(e);
    }
    save_session(&session, &research).await?;

    Ok(Redirect::to("/"))
}

/// `POST /history/select`
pub async fn select_history(
    session: Session,
    Form(form): Form<CompanyForm>,
) -> Result<Redirect, StatusCode> {
    let mut research = load_session(&session).await?;
    if research.select(&form.company) {
        save_session(&session, &research).await?;
    }
    Ok(Redirect::to("/"))
}

/// `POST /new`
pub async fn new_research(session: Session) -> Result<Redirect, StatusCode> {
    let mut research = load_session(&session).await?;
    research.new_research();
    save_session(&session, &research).await?;
    Ok(Redirect::to("/"))
}

/// `GET /reports/:company/download`
pub async fn download_report(
    State(state): State<AppState>,
    session: Session,
    Path(company): Path<String>,
) -> Result<Response, StatusCode> {
    let research = load_session(&session).await?;
    let report = research
        .report_for(&company)
        .ok_or(StatusCode::NOT_FOUND)?
        .to_string();

    let template_path = state.deps.docx_template_path.clone();
    let bytes = tokio::task::spawn_blocking(move || export_report(&template_path, &report))
        .await
        .map_err(|e| {
            error!(error = %e, "Export task failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })?
        .map_err(|e| {
            error!(company = %company, error = %e, "Report export failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    let disposition = format!("attachment; filename=\"{}\"", report_filename(&company));
    Ok((
        [
            (header::CONTENT_TYPE, DOCX_MIME.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_url_is_percent_encoded() {
        assert_eq!(download_url("Acme Co"), "/reports/Acme%20Co/download");
        assert_eq!(download_url("A/B"), "/reports/A%2FB/download");
    }
}
