//! Rental portfolio ledger: recorded occupancy, rent, and unit status history
//! plus the reports reconstructed from it (daily rent roll, monthly KPIs).

pub mod config;
pub mod error;
pub mod portfolio;
pub mod telemetry;
