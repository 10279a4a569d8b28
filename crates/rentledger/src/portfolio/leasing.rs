use std::sync::Arc;

use chrono::NaiveDate;

use super::domain::{
    Occupancy, OccupancyId, Property, PropertyId, RentCharge, Resident, ResidentId, StatusEvent,
    Unit, UnitId, UnitStatus,
};
use super::reports::timeline;
use super::store::{PortfolioStore, StoreError};

/// Validated write path over the record store. Every mutation checks the
/// rules that keep the history reconstructable: occupancy intervals stay
/// disjoint per unit and per resident, rent rows stay inside their
/// occupancy, and a unit cannot go inactive out from under a resident.
pub struct LeasingService<S> {
    store: Arc<S>,
}

/// Inputs for opening an occupancy. `move_out_date` may be provided up front
/// for a fixed-term stay; the initial rent takes effect on the move-in date.
#[derive(Debug, Clone)]
pub struct MoveInCommand {
    pub resident_id: ResidentId,
    pub unit_id: UnitId,
    pub move_in_date: NaiveDate,
    pub move_out_date: Option<NaiveDate>,
    pub initial_rent: i64,
}

/// Partial amendment of an occupancy. The outer `Option` on `move_out_date`
/// distinguishes "leave as is" from an explicit value, where `Some(None)`
/// reopens the occupancy.
#[derive(Debug, Clone, Default)]
pub struct AmendOccupancy {
    pub move_in_date: Option<NaiveDate>,
    pub move_out_date: Option<Option<NaiveDate>>,
    pub unit_id: Option<UnitId>,
}

impl<S> LeasingService<S>
where
    S: PortfolioStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Direct read access for report generation and listing endpoints.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn create_property(&self, name: &str) -> Result<Property, LeasingError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LeasingError::BlankField { field: "name" });
        }
        Ok(self.store.insert_property(name)?)
    }

    pub fn create_unit(
        &self,
        property_id: PropertyId,
        unit_number: &str,
    ) -> Result<Unit, LeasingError> {
        let unit_number = unit_number.trim();
        if unit_number.is_empty() {
            return Err(LeasingError::BlankField {
                field: "unit_number",
            });
        }
        self.property(property_id)?;
        Ok(self.store.insert_unit(property_id, unit_number)?)
    }

    pub fn create_resident(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Resident, LeasingError> {
        let first_name = first_name.trim();
        let last_name = last_name.trim();
        if first_name.is_empty() {
            return Err(LeasingError::BlankField {
                field: "first_name",
            });
        }
        if last_name.is_empty() {
            return Err(LeasingError::BlankField { field: "last_name" });
        }
        Ok(self.store.insert_resident(first_name, last_name)?)
    }

    /// Opens an occupancy and records its initial rent in one step.
    pub fn move_in(&self, command: MoveInCommand) -> Result<Occupancy, LeasingError> {
        let unit = self.unit(command.unit_id)?;
        let resident = self.resident(command.resident_id)?;

        if let Some(move_out) = command.move_out_date {
            if move_out <= command.move_in_date {
                return Err(LeasingError::MoveOutBeforeMoveIn);
            }
        }
        if command.initial_rent <= 0 {
            return Err(LeasingError::NonPositiveRent);
        }

        let events = self.store.list_status_events_for_unit(unit.id)?;
        if timeline::status_on(&events, command.move_in_date) == UnitStatus::Inactive {
            return Err(LeasingError::UnitInactive {
                date: command.move_in_date,
            });
        }

        let unit_occupancies = self.store.list_occupancies_for_unit(unit.id)?;
        if unit_occupancies.iter().any(|existing| {
            intervals_overlap(
                command.move_in_date,
                command.move_out_date,
                existing.move_in_date,
                existing.move_out_date,
            )
        }) {
            return Err(LeasingError::UnitOccupied {
                date: command.move_in_date,
            });
        }

        let resident_occupancies = self.store.list_occupancies_for_resident(resident.id)?;
        if resident_occupancies.iter().any(|existing| {
            intervals_overlap(
                command.move_in_date,
                command.move_out_date,
                existing.move_in_date,
                existing.move_out_date,
            )
        }) {
            return Err(LeasingError::ResidentUnavailable {
                date: command.move_in_date,
            });
        }

        let occupancy = self.store.insert_occupancy(
            unit.id,
            resident.id,
            command.move_in_date,
            command.move_out_date,
        )?;
        self.store
            .insert_rent_charge(occupancy.id, command.initial_rent, command.move_in_date)?;
        Ok(occupancy)
    }

    /// Closes (or re-dates the close of) an occupancy. The move-out day is
    /// the first vacant day, so it must fall strictly after the move-in.
    pub fn move_out(
        &self,
        occupancy_id: OccupancyId,
        move_out_date: NaiveDate,
    ) -> Result<Occupancy, LeasingError> {
        let mut occupancy = self.occupancy(occupancy_id)?;
        if move_out_date <= occupancy.move_in_date {
            return Err(LeasingError::MoveOutBeforeMoveIn);
        }
        occupancy.move_out_date = Some(move_out_date);
        self.store.update_occupancy(&occupancy)?;
        Ok(occupancy)
    }

    pub fn change_rent(
        &self,
        occupancy_id: OccupancyId,
        amount: i64,
        effective_date: NaiveDate,
    ) -> Result<RentCharge, LeasingError> {
        let occupancy = self.occupancy(occupancy_id)?;
        if amount <= 0 {
            return Err(LeasingError::NonPositiveRent);
        }
        let charges = self.store.list_rents_for_occupancy(occupancy.id)?;
        if charges
            .iter()
            .any(|charge| charge.effective_date == effective_date && charge.amount == amount)
        {
            return Err(LeasingError::DuplicateRent {
                date: effective_date,
            });
        }
        if !occupancy.covers(effective_date) {
            return Err(LeasingError::RentOutsideOccupancy);
        }
        Ok(self
            .store
            .insert_rent_charge(occupancy.id, amount, effective_date)?)
    }

    /// Applies a partial amendment, revalidating the resulting interval
    /// against the target unit's status and other occupancies.
    pub fn amend_occupancy(
        &self,
        occupancy_id: OccupancyId,
        patch: AmendOccupancy,
    ) -> Result<Occupancy, LeasingError> {
        let mut occupancy = self.occupancy(occupancy_id)?;

        let move_in_date = patch.move_in_date.unwrap_or(occupancy.move_in_date);
        let move_out_date = match patch.move_out_date {
            Some(explicit) => explicit,
            None => occupancy.move_out_date,
        };
        if let Some(move_out) = move_out_date {
            if move_out <= move_in_date {
                return Err(LeasingError::MoveOutBeforeMoveIn);
            }
        }

        let target_unit = match patch.unit_id {
            Some(unit_id) => self.unit(unit_id)?,
            None => self.unit(occupancy.unit_id)?,
        };

        let events = self.store.list_status_events_for_unit(target_unit.id)?;
        if timeline::status_on(&events, move_in_date) == UnitStatus::Inactive {
            return Err(LeasingError::UnitInactive {
                date: move_in_date,
            });
        }

        let neighbors = self.store.list_occupancies_for_unit(target_unit.id)?;
        if neighbors.iter().any(|other| {
            other.id != occupancy.id
                && intervals_overlap(
                    move_in_date,
                    move_out_date,
                    other.move_in_date,
                    other.move_out_date,
                )
        }) {
            return Err(LeasingError::OccupancyOverlap);
        }

        occupancy.unit_id = target_unit.id;
        occupancy.move_in_date = move_in_date;
        occupancy.move_out_date = move_out_date;
        self.store.update_occupancy(&occupancy)?;
        Ok(occupancy)
    }

    /// Appends a status event. One event per unit per day, and deactivation
    /// is refused while the unit is occupied on that day.
    pub fn set_unit_status(
        &self,
        unit_id: UnitId,
        status: UnitStatus,
        start_date: NaiveDate,
    ) -> Result<StatusEvent, LeasingError> {
        let unit = self.unit(unit_id)?;
        let events = self.store.list_status_events_for_unit(unit.id)?;
        if events.iter().any(|event| event.start_date == start_date) {
            return Err(LeasingError::DuplicateStatus { date: start_date });
        }
        if status == UnitStatus::Inactive {
            let occupancies = self.store.list_occupancies_for_unit(unit.id)?;
            if timeline::occupancy_on(&occupancies, start_date).is_some() {
                return Err(LeasingError::DeactivateOccupied { date: start_date });
            }
        }
        Ok(self.store.insert_status_event(unit.id, status, start_date)?)
    }

    /// Status in effect for the unit on the given date.
    pub fn unit_status_on(
        &self,
        unit_id: UnitId,
        on_date: NaiveDate,
    ) -> Result<UnitStatus, LeasingError> {
        let unit = self.unit(unit_id)?;
        let events = self.store.list_status_events_for_unit(unit.id)?;
        Ok(timeline::status_on(&events, on_date))
    }

    pub fn status_history(&self, unit_id: UnitId) -> Result<Vec<StatusEvent>, LeasingError> {
        let unit = self.unit(unit_id)?;
        Ok(self.store.list_status_events_for_unit(unit.id)?)
    }

    /// The resident's open occupancy, if one exists.
    pub fn current_occupancy(
        &self,
        resident_id: ResidentId,
    ) -> Result<Option<Occupancy>, LeasingError> {
        let resident = self.resident(resident_id)?;
        let occupancies = self.store.list_occupancies_for_resident(resident.id)?;
        Ok(occupancies
            .into_iter()
            .find(|occupancy| occupancy.move_out_date.is_none()))
    }

    fn property(&self, id: PropertyId) -> Result<Property, LeasingError> {
        self.store
            .fetch_property(id)?
            .ok_or(LeasingError::NotFound { entity: "property" })
    }

    fn unit(&self, id: UnitId) -> Result<Unit, LeasingError> {
        self.store
            .fetch_unit(id)?
            .ok_or(LeasingError::NotFound { entity: "unit" })
    }

    fn resident(&self, id: ResidentId) -> Result<Resident, LeasingError> {
        self.store
            .fetch_resident(id)?
            .ok_or(LeasingError::NotFound { entity: "resident" })
    }

    fn occupancy(&self, id: OccupancyId) -> Result<Occupancy, LeasingError> {
        self.store
            .fetch_occupancy(id)?
            .ok_or(LeasingError::NotFound {
                entity: "occupancy",
            })
    }
}

/// Half-open interval overlap; a `None` end is open-ended.
fn intervals_overlap(
    start_a: NaiveDate,
    end_a: Option<NaiveDate>,
    start_b: NaiveDate,
    end_b: Option<NaiveDate>,
) -> bool {
    let a_starts_before_b_ends = end_b.map_or(true, |end| start_a < end);
    let b_starts_before_a_ends = end_a.map_or(true, |end| start_b < end);
    a_starts_before_b_ends && b_starts_before_a_ends
}

/// Error raised by the leasing write path.
#[derive(Debug, thiserror::Error)]
pub enum LeasingError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },
    #[error("{field} is required")]
    BlankField { field: &'static str },
    #[error("rent must be a positive amount")]
    NonPositiveRent,
    #[error("move-out date must be after the move-in date")]
    MoveOutBeforeMoveIn,
    #[error("unit is inactive on {date}")]
    UnitInactive { date: NaiveDate },
    #[error("unit is already occupied on {date}")]
    UnitOccupied { date: NaiveDate },
    #[error("resident already has an occupancy covering {date}")]
    ResidentUnavailable { date: NaiveDate },
    #[error("dates overlap another occupancy of the unit")]
    OccupancyOverlap,
    #[error("a rent of that amount already applies on {date}")]
    DuplicateRent { date: NaiveDate },
    #[error("a status change already exists for {date}")]
    DuplicateStatus { date: NaiveDate },
    #[error("unit cannot go inactive while occupied on {date}")]
    DeactivateOccupied { date: NaiveDate },
    #[error("effective date falls outside the occupancy")]
    RentOutsideOccupancy,
    #[error(transparent)]
    Store(#[from] StoreError),
}
