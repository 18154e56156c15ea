// HTTP routes
pub mod health;
pub mod research;

pub use health::*;
pub use research::*;
