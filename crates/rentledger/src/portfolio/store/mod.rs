mod memory;

pub use memory::MemoryStore;

use chrono::NaiveDate;

use super::domain::{
    Occupancy, OccupancyId, Property, PropertyId, RentCharge, Resident, ResidentId, StatusEvent,
    Unit, UnitId, UnitStatus,
};

/// Read side of the record store. Report generation depends only on this
/// trait, so it can run against any backing implementation.
///
/// Listing methods return copies in a defined order: entities by ascending
/// id (insertion order), occupancies by (move_in_date, id), rent history by
/// (effective_date, id), status events by (start_date, id).
pub trait PortfolioReader: Send + Sync {
    fn fetch_property(&self, id: PropertyId) -> Result<Option<Property>, StoreError>;
    fn list_properties(&self) -> Result<Vec<Property>, StoreError>;
    fn fetch_unit(&self, id: UnitId) -> Result<Option<Unit>, StoreError>;
    fn list_units(&self) -> Result<Vec<Unit>, StoreError>;
    fn list_units_for_property(&self, property_id: PropertyId) -> Result<Vec<Unit>, StoreError>;
    fn fetch_resident(&self, id: ResidentId) -> Result<Option<Resident>, StoreError>;
    fn list_residents(&self) -> Result<Vec<Resident>, StoreError>;
    fn fetch_occupancy(&self, id: OccupancyId) -> Result<Option<Occupancy>, StoreError>;
    fn list_occupancies(&self) -> Result<Vec<Occupancy>, StoreError>;
    fn list_occupancies_for_unit(&self, unit_id: UnitId) -> Result<Vec<Occupancy>, StoreError>;
    fn list_occupancies_for_resident(
        &self,
        resident_id: ResidentId,
    ) -> Result<Vec<Occupancy>, StoreError>;
    fn list_rents_for_occupancy(
        &self,
        occupancy_id: OccupancyId,
    ) -> Result<Vec<RentCharge>, StoreError>;
    fn list_status_events_for_unit(
        &self,
        unit_id: UnitId,
    ) -> Result<Vec<StatusEvent>, StoreError>;
}

/// Write side of the record store. Inserts allocate ids in insertion order
/// and enforce referential integrity against the owning rows.
pub trait PortfolioStore: PortfolioReader {
    fn insert_property(&self, name: &str) -> Result<Property, StoreError>;
    fn insert_unit(&self, property_id: PropertyId, unit_number: &str)
        -> Result<Unit, StoreError>;
    fn insert_resident(&self, first_name: &str, last_name: &str)
        -> Result<Resident, StoreError>;
    fn insert_occupancy(
        &self,
        unit_id: UnitId,
        resident_id: ResidentId,
        move_in_date: NaiveDate,
        move_out_date: Option<NaiveDate>,
    ) -> Result<Occupancy, StoreError>;
    fn update_occupancy(&self, occupancy: &Occupancy) -> Result<(), StoreError>;
    fn insert_rent_charge(
        &self,
        occupancy_id: OccupancyId,
        amount: i64,
        effective_date: NaiveDate,
    ) -> Result<RentCharge, StoreError>;
    fn insert_status_event(
        &self,
        unit_id: UnitId,
        status: UnitStatus,
        start_date: NaiveDate,
    ) -> Result<StatusEvent, StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
