// AI Sales Research - core library
//
// Resolves a company name to its official website, extracts a best-effort
// fact sheet, has an LLM write a business report and exports it as `.docx`.
// Served as a small web UI (server binary) or run once from the CLI.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
