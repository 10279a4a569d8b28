//! Temporal reconstruction over the recorded history: point-in-time lookups,
//! the daily rent roll, and the monthly KPI reductions derived from it.

pub mod kpi;
pub mod rent_roll;
pub(crate) mod timeline;

pub use kpi::{
    aggregate_kpis, calculate_kpis, move_in_out_counts, occupancy_rate_for_month, MonthOccupancy,
    MonthlyKpis, MoveActivity,
};
pub use rent_roll::{generate_rent_roll, rent_roll_csv, RentRollRecord};

use super::store::StoreError;

/// Error enumeration for report requests.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("end date must be on or after start date")]
    InvalidRange,
    #[error("month must be between 1 and 12")]
    InvalidMonth,
    #[error("year must be a positive number")]
    InvalidYear,
    #[error("failed to encode csv: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}
