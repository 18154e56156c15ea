// HTTP server setup (Axum + askama pages)
pub mod app;
pub mod markdown;
pub mod routes;

pub use app::*;
