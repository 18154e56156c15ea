//! Session domain - per-browser research history and stored reports.

pub mod models;

pub use models::{CurrentReport, ResearchSession, SESSION_KEY};
