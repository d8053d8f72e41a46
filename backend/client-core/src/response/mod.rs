//! Typed views over response payloads.

pub mod company;
pub mod monitoring;

pub use company::{CompanyAddress, CompanySummary};
pub use monitoring::MonitoredCompanies;
