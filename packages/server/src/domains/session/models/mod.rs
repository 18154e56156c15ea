pub mod research_session;

pub use research_session::*;
