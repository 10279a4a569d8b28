use std::collections::BTreeMap;
use std::sync::Mutex;

use chrono::NaiveDate;

use super::super::domain::{
    Occupancy, OccupancyId, Property, PropertyId, RentCharge, RentChargeId, Resident, ResidentId,
    StatusEvent, StatusEventId, Unit, UnitId, UnitStatus,
};
use super::{PortfolioReader, PortfolioStore, StoreError};

/// Mutex-guarded tables keyed by id. Ids are allocated per table starting at
/// 1, so ascending-id iteration is insertion order.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

#[derive(Default)]
struct Tables {
    properties: BTreeMap<PropertyId, Property>,
    units: BTreeMap<UnitId, Unit>,
    residents: BTreeMap<ResidentId, Resident>,
    occupancies: BTreeMap<OccupancyId, Occupancy>,
    rent_charges: BTreeMap<RentChargeId, RentCharge>,
    status_events: BTreeMap<StatusEventId, StatusEvent>,
    sequences: Sequences,
}

#[derive(Default)]
struct Sequences {
    property: u64,
    unit: u64,
    resident: u64,
    occupancy: u64,
    rent_charge: u64,
    status_event: u64,
}

fn next(sequence: &mut u64) -> u64 {
    *sequence += 1;
    *sequence
}

impl MemoryStore {
    fn lock(&self) -> std::sync::MutexGuard<'_, Tables> {
        self.tables.lock().expect("store mutex poisoned")
    }
}

impl PortfolioReader for MemoryStore {
    fn fetch_property(&self, id: PropertyId) -> Result<Option<Property>, StoreError> {
        Ok(self.lock().properties.get(&id).cloned())
    }

    fn list_properties(&self) -> Result<Vec<Property>, StoreError> {
        Ok(self.lock().properties.values().cloned().collect())
    }

    fn fetch_unit(&self, id: UnitId) -> Result<Option<Unit>, StoreError> {
        Ok(self.lock().units.get(&id).cloned())
    }

    fn list_units(&self) -> Result<Vec<Unit>, StoreError> {
        Ok(self.lock().units.values().cloned().collect())
    }

    fn list_units_for_property(&self, property_id: PropertyId) -> Result<Vec<Unit>, StoreError> {
        Ok(self
            .lock()
            .units
            .values()
            .filter(|unit| unit.property_id == property_id)
            .cloned()
            .collect())
    }

    fn fetch_resident(&self, id: ResidentId) -> Result<Option<Resident>, StoreError> {
        Ok(self.lock().residents.get(&id).cloned())
    }

    fn list_residents(&self) -> Result<Vec<Resident>, StoreError> {
        Ok(self.lock().residents.values().cloned().collect())
    }

    fn fetch_occupancy(&self, id: OccupancyId) -> Result<Option<Occupancy>, StoreError> {
        Ok(self.lock().occupancies.get(&id).cloned())
    }

    fn list_occupancies(&self) -> Result<Vec<Occupancy>, StoreError> {
        let mut occupancies: Vec<Occupancy> =
            self.lock().occupancies.values().cloned().collect();
        occupancies.sort_by_key(|occupancy| (occupancy.move_in_date, occupancy.id));
        Ok(occupancies)
    }

    fn list_occupancies_for_unit(&self, unit_id: UnitId) -> Result<Vec<Occupancy>, StoreError> {
        let mut occupancies: Vec<Occupancy> = self
            .lock()
            .occupancies
            .values()
            .filter(|occupancy| occupancy.unit_id == unit_id)
            .cloned()
            .collect();
        occupancies.sort_by_key(|occupancy| (occupancy.move_in_date, occupancy.id));
        Ok(occupancies)
    }

    fn list_occupancies_for_resident(
        &self,
        resident_id: ResidentId,
    ) -> Result<Vec<Occupancy>, StoreError> {
        let mut occupancies: Vec<Occupancy> = self
            .lock()
            .occupancies
            .values()
            .filter(|occupancy| occupancy.resident_id == resident_id)
            .cloned()
            .collect();
        occupancies.sort_by_key(|occupancy| (occupancy.move_in_date, occupancy.id));
        Ok(occupancies)
    }

    fn list_rents_for_occupancy(
        &self,
        occupancy_id: OccupancyId,
    ) -> Result<Vec<RentCharge>, StoreError> {
        let mut charges: Vec<RentCharge> = self
            .lock()
            .rent_charges
            .values()
            .filter(|charge| charge.occupancy_id == occupancy_id)
            .cloned()
            .collect();
        charges.sort_by_key(|charge| (charge.effective_date, charge.id));
        Ok(charges)
    }

    fn list_status_events_for_unit(
        &self,
        unit_id: UnitId,
    ) -> Result<Vec<StatusEvent>, StoreError> {
        let mut events: Vec<StatusEvent> = self
            .lock()
            .status_events
            .values()
            .filter(|event| event.unit_id == unit_id)
            .cloned()
            .collect();
        events.sort_by_key(|event| (event.start_date, event.id));
        Ok(events)
    }
}

impl PortfolioStore for MemoryStore {
    fn insert_property(&self, name: &str) -> Result<Property, StoreError> {
        let mut tables = self.lock();
        if tables.properties.values().any(|known| known.name == name) {
            return Err(StoreError::Conflict);
        }
        let property = Property {
            id: PropertyId(next(&mut tables.sequences.property)),
            name: name.to_string(),
        };
        tables.properties.insert(property.id, property.clone());
        Ok(property)
    }

    fn insert_unit(
        &self,
        property_id: PropertyId,
        unit_number: &str,
    ) -> Result<Unit, StoreError> {
        let mut tables = self.lock();
        if !tables.properties.contains_key(&property_id) {
            return Err(StoreError::NotFound);
        }
        let unit = Unit {
            id: UnitId(next(&mut tables.sequences.unit)),
            property_id,
            unit_number: unit_number.to_string(),
        };
        tables.units.insert(unit.id, unit.clone());
        Ok(unit)
    }

    fn insert_resident(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Resident, StoreError> {
        let mut tables = self.lock();
        let resident = Resident {
            id: ResidentId(next(&mut tables.sequences.resident)),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        };
        tables.residents.insert(resident.id, resident.clone());
        Ok(resident)
    }

    fn insert_occupancy(
        &self,
        unit_id: UnitId,
        resident_id: ResidentId,
        move_in_date: NaiveDate,
        move_out_date: Option<NaiveDate>,
    ) -> Result<Occupancy, StoreError> {
        let mut tables = self.lock();
        if !tables.units.contains_key(&unit_id) || !tables.residents.contains_key(&resident_id) {
            return Err(StoreError::NotFound);
        }
        let occupancy = Occupancy {
            id: OccupancyId(next(&mut tables.sequences.occupancy)),
            unit_id,
            resident_id,
            move_in_date,
            move_out_date,
        };
        tables.occupancies.insert(occupancy.id, occupancy.clone());
        Ok(occupancy)
    }

    fn update_occupancy(&self, occupancy: &Occupancy) -> Result<(), StoreError> {
        let mut tables = self.lock();
        if !tables.occupancies.contains_key(&occupancy.id) {
            return Err(StoreError::NotFound);
        }
        if !tables.units.contains_key(&occupancy.unit_id) {
            return Err(StoreError::NotFound);
        }
        tables.occupancies.insert(occupancy.id, occupancy.clone());
        Ok(())
    }

    fn insert_rent_charge(
        &self,
        occupancy_id: OccupancyId,
        amount: i64,
        effective_date: NaiveDate,
    ) -> Result<RentCharge, StoreError> {
        let mut tables = self.lock();
        if !tables.occupancies.contains_key(&occupancy_id) {
            return Err(StoreError::NotFound);
        }
        let charge = RentCharge {
            id: RentChargeId(next(&mut tables.sequences.rent_charge)),
            occupancy_id,
            amount,
            effective_date,
        };
        tables.rent_charges.insert(charge.id, charge.clone());
        Ok(charge)
    }

    fn insert_status_event(
        &self,
        unit_id: UnitId,
        status: UnitStatus,
        start_date: NaiveDate,
    ) -> Result<StatusEvent, StoreError> {
        let mut tables = self.lock();
        if !tables.units.contains_key(&unit_id) {
            return Err(StoreError::NotFound);
        }
        let event = StatusEvent {
            id: StatusEventId(next(&mut tables.sequences.status_event)),
            unit_id,
            status,
            start_date,
        };
        tables.status_events.insert(event.id, event.clone());
        Ok(event)
    }
}
