use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::super::domain::{
    Occupancy, OccupancyId, PropertyId, RentCharge, ResidentId, StatusEvent, Unit, UnitId,
    UnitStatus,
};
use super::super::store::PortfolioReader;
use super::{timeline, ReportError};

/// One unit on one calendar day: who is in it, at what rent, and whether the
/// unit is reportable at all. `unit_number` carries the composed
/// `P{property}-{unit}` display label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentRollRecord {
    pub date: NaiveDate,
    pub property_id: PropertyId,
    pub unit_id: UnitId,
    pub unit_number: String,
    pub resident_id: Option<ResidentId>,
    pub resident_name: Option<String>,
    pub monthly_rent: i64,
    pub unit_status: UnitStatus,
}

/// Everything needed to answer day queries for one unit, copied out of the
/// store once so the day loop never goes back to it.
struct UnitTimeline {
    unit: Unit,
    label: String,
    occupancies: Vec<Occupancy>,
    rent_history: HashMap<OccupancyId, Vec<RentCharge>>,
    resident_names: HashMap<ResidentId, String>,
    status_events: Vec<StatusEvent>,
}

impl UnitTimeline {
    fn load<R>(store: &R, property_id: PropertyId, unit: Unit) -> Result<Self, ReportError>
    where
        R: PortfolioReader + ?Sized,
    {
        let occupancies = store.list_occupancies_for_unit(unit.id)?;

        let mut rent_history = HashMap::new();
        let mut resident_names = HashMap::new();
        for occupancy in &occupancies {
            rent_history.insert(occupancy.id, store.list_rents_for_occupancy(occupancy.id)?);
            if !resident_names.contains_key(&occupancy.resident_id) {
                if let Some(resident) = store.fetch_resident(occupancy.resident_id)? {
                    resident_names.insert(resident.id, resident.full_name());
                }
            }
        }

        let status_events = store.list_status_events_for_unit(unit.id)?;
        let label = format!("P{}-{}", property_id.0, unit.unit_number);

        Ok(Self {
            unit,
            label,
            occupancies,
            rent_history,
            resident_names,
            status_events,
        })
    }

    fn snapshot(&self, property_id: PropertyId, on_date: NaiveDate) -> RentRollRecord {
        let vacant = RentRollRecord {
            date: on_date,
            property_id,
            unit_id: self.unit.id,
            unit_number: self.label.clone(),
            resident_id: None,
            resident_name: None,
            monthly_rent: 0,
            unit_status: UnitStatus::Active,
        };

        // Inactive suppresses occupancy and rent no matter what overlaps it.
        if timeline::status_on(&self.status_events, on_date) == UnitStatus::Inactive {
            return RentRollRecord {
                unit_status: UnitStatus::Inactive,
                ..vacant
            };
        }

        match timeline::occupancy_on(&self.occupancies, on_date) {
            Some(occupancy) => {
                let charges = self
                    .rent_history
                    .get(&occupancy.id)
                    .map(Vec::as_slice)
                    .unwrap_or(&[]);
                RentRollRecord {
                    resident_id: Some(occupancy.resident_id),
                    resident_name: self.resident_names.get(&occupancy.resident_id).cloned(),
                    monthly_rent: timeline::rent_on(charges, on_date),
                    ..vacant
                }
            }
            None => vacant,
        }
    }
}

/// Reconstructs the daily rent roll for every unit of a property across
/// `[start_date, end_date]`, both ends inclusive. Days iterate in the outer
/// loop and units in insertion order within each day. An unknown property
/// yields an empty report rather than an error.
pub fn generate_rent_roll<R>(
    store: &R,
    property_id: PropertyId,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Vec<RentRollRecord>, ReportError>
where
    R: PortfolioReader + ?Sized,
{
    if end_date < start_date {
        return Err(ReportError::InvalidRange);
    }

    let property = match store.fetch_property(property_id)? {
        Some(property) => property,
        None => return Ok(Vec::new()),
    };

    let units = store.list_units_for_property(property.id)?;
    let mut timelines = Vec::with_capacity(units.len());
    for unit in units {
        timelines.push(UnitTimeline::load(store, property.id, unit)?);
    }

    let mut records = Vec::new();
    let mut day = start_date;
    loop {
        for unit_timeline in &timelines {
            records.push(unit_timeline.snapshot(property.id, day));
        }
        if day == end_date {
            break;
        }
        day = match day.succ_opt() {
            Some(next_day) => next_day,
            None => break,
        };
    }

    Ok(records)
}

const CSV_HEADER: [&str; 8] = [
    "date",
    "property_id",
    "unit_id",
    "unit_number",
    "resident_id",
    "resident_name",
    "monthly_rent",
    "unit_status",
];

/// Renders the report as CSV bytes with one row per record. Absent resident
/// fields become empty cells.
pub fn rent_roll_csv(records: &[RentRollRecord]) -> Result<Vec<u8>, ReportError> {
    let mut buffer = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buffer);
        writer.write_record(CSV_HEADER)?;
        for record in records {
            writer.write_record([
                record.date.to_string(),
                record.property_id.0.to_string(),
                record.unit_id.0.to_string(),
                record.unit_number.clone(),
                record
                    .resident_id
                    .map(|id| id.0.to_string())
                    .unwrap_or_default(),
                record.resident_name.clone().unwrap_or_default(),
                record.monthly_rent.to_string(),
                record.unit_status.label().to_string(),
            ])?;
        }
        writer.flush().map_err(csv::Error::from)?;
    }
    Ok(buffer)
}
