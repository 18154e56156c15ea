// Common test utilities

pub mod fixtures;
pub mod harness;
pub mod web;

pub use fixtures::*;
pub use harness::*;
pub use web::*;
