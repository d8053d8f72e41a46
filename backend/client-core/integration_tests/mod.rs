mod helpers;

mod company_report;
mod events;
mod find_company;
mod monitoring;
mod portfolios;
mod transport_errors;
