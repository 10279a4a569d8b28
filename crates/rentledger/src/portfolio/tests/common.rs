use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::portfolio::domain::{
    Occupancy, OccupancyId, Property, PropertyId, RentCharge, Resident, ResidentId, StatusEvent,
    Unit, UnitId, UnitStatus,
};
use crate::portfolio::leasing::{LeasingService, MoveInCommand};
use crate::portfolio::store::{MemoryStore, PortfolioReader, PortfolioStore, StoreError};

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn build_service() -> (Arc<LeasingService<MemoryStore>>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    (Arc::new(LeasingService::new(store.clone())), store)
}

/// Creates a property with the given unit numbers and returns the ids.
pub(super) fn seed_property(
    service: &LeasingService<MemoryStore>,
    name: &str,
    unit_numbers: &[&str],
) -> (PropertyId, Vec<UnitId>) {
    let property = service.create_property(name).expect("property created");
    let units = unit_numbers
        .iter()
        .map(|number| {
            service
                .create_unit(property.id, number)
                .expect("unit created")
                .id
        })
        .collect();
    (property.id, units)
}

pub(super) fn seed_resident(
    service: &LeasingService<MemoryStore>,
    first_name: &str,
    last_name: &str,
) -> ResidentId {
    service
        .create_resident(first_name, last_name)
        .expect("resident created")
        .id
}

pub(super) fn seed_move_in(
    service: &LeasingService<MemoryStore>,
    resident_id: ResidentId,
    unit_id: UnitId,
    move_in_date: NaiveDate,
    move_out_date: Option<NaiveDate>,
    monthly_rent: i64,
) -> OccupancyId {
    service
        .move_in(MoveInCommand {
            resident_id,
            unit_id,
            move_in_date,
            move_out_date,
            initial_rent: monthly_rent,
        })
        .expect("move-in accepted")
        .id
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn read_text_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}

/// Store stub whose every call fails, for exercising the 500 paths.
pub(super) struct FailingStore;

fn offline<T>() -> Result<T, StoreError> {
    Err(StoreError::Unavailable("store offline".to_string()))
}

impl PortfolioReader for FailingStore {
    fn fetch_property(&self, _id: PropertyId) -> Result<Option<Property>, StoreError> {
        offline()
    }

    fn list_properties(&self) -> Result<Vec<Property>, StoreError> {
        offline()
    }

    fn fetch_unit(&self, _id: UnitId) -> Result<Option<Unit>, StoreError> {
        offline()
    }

    fn list_units(&self) -> Result<Vec<Unit>, StoreError> {
        offline()
    }

    fn list_units_for_property(&self, _property_id: PropertyId) -> Result<Vec<Unit>, StoreError> {
        offline()
    }

    fn fetch_resident(&self, _id: ResidentId) -> Result<Option<Resident>, StoreError> {
        offline()
    }

    fn list_residents(&self) -> Result<Vec<Resident>, StoreError> {
        offline()
    }

    fn fetch_occupancy(&self, _id: OccupancyId) -> Result<Option<Occupancy>, StoreError> {
        offline()
    }

    fn list_occupancies(&self) -> Result<Vec<Occupancy>, StoreError> {
        offline()
    }

    fn list_occupancies_for_unit(&self, _unit_id: UnitId) -> Result<Vec<Occupancy>, StoreError> {
        offline()
    }

    fn list_occupancies_for_resident(
        &self,
        _resident_id: ResidentId,
    ) -> Result<Vec<Occupancy>, StoreError> {
        offline()
    }

    fn list_rents_for_occupancy(
        &self,
        _occupancy_id: OccupancyId,
    ) -> Result<Vec<RentCharge>, StoreError> {
        offline()
    }

    fn list_status_events_for_unit(
        &self,
        _unit_id: UnitId,
    ) -> Result<Vec<StatusEvent>, StoreError> {
        offline()
    }
}

impl PortfolioStore for FailingStore {
    fn insert_property(&self, _name: &str) -> Result<Property, StoreError> {
        offline()
    }

    fn insert_unit(
        &self,
        _property_id: PropertyId,
        _unit_number: &str,
    ) -> Result<Unit, StoreError> {
        offline()
    }

    fn insert_resident(&self, _first_name: &str, _last_name: &str) -> Result<Resident, StoreError> {
        offline()
    }

    fn insert_occupancy(
        &self,
        _unit_id: UnitId,
        _resident_id: ResidentId,
        _move_in_date: NaiveDate,
        _move_out_date: Option<NaiveDate>,
    ) -> Result<Occupancy, StoreError> {
        offline()
    }

    fn update_occupancy(&self, _occupancy: &Occupancy) -> Result<(), StoreError> {
        offline()
    }

    fn insert_rent_charge(
        &self,
        _occupancy_id: OccupancyId,
        _amount: i64,
        _effective_date: NaiveDate,
    ) -> Result<RentCharge, StoreError> {
        offline()
    }

    fn insert_status_event(
        &self,
        _unit_id: UnitId,
        _status: UnitStatus,
        _start_date: NaiveDate,
    ) -> Result<StatusEvent, StoreError> {
        offline()
    }
}
