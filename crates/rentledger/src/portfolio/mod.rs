//! Portfolio records and the operations over them: the validated write path
//! (leasing), the storage abstraction, the temporal reports, and the HTTP
//! router that exposes all of it.

pub mod domain;
pub mod leasing;
pub mod reports;
pub mod router;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{
    Occupancy, OccupancyId, Property, PropertyId, RentCharge, RentChargeId, Resident, ResidentId,
    StatusEvent, StatusEventId, Unit, UnitId, UnitStatus,
};
pub use leasing::{AmendOccupancy, LeasingError, LeasingService, MoveInCommand};
pub use reports::{
    aggregate_kpis, calculate_kpis, generate_rent_roll, move_in_out_counts,
    occupancy_rate_for_month, rent_roll_csv, MonthOccupancy, MonthlyKpis, MoveActivity,
    RentRollRecord, ReportError,
};
pub use router::portfolio_router;
pub use store::{MemoryStore, PortfolioReader, PortfolioStore, StoreError};
