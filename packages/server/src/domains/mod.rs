// Business domains
pub mod company;
pub mod report;
pub mod session;
