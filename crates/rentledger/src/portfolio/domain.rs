use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier wrapper for properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PropertyId(pub u64);

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier wrapper for units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u64);

/// Identifier wrapper for residents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ResidentId(pub u64);

/// Identifier wrapper for occupancy intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OccupancyId(pub u64);

/// Identifier wrapper for rent history rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RentChargeId(pub u64);

/// Identifier wrapper for unit status events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StatusEventId(pub u64);

/// A building with a unique display name. Owns zero or more units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub name: String,
}

impl Property {
    pub fn to_view(&self, unit_count: usize) -> PropertyView {
        PropertyView {
            id: self.id,
            name: self.name.clone(),
            unit_count,
        }
    }
}

/// A rentable unit within a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub property_id: PropertyId,
    pub unit_number: String,
}

impl Unit {
    pub fn to_view(&self) -> UnitView {
        UnitView {
            id: self.id,
            property_id: self.property_id,
            unit_number: self.unit_number.clone(),
            current_status: None,
        }
    }

    pub fn to_status_view(&self, status: UnitStatus) -> UnitView {
        UnitView {
            current_status: Some(status.label()),
            ..self.to_view()
        }
    }
}

/// A person who can hold occupancies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resident {
    pub id: ResidentId,
    pub first_name: String,
    pub last_name: String,
}

impl Resident {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn to_view(&self) -> ResidentView {
        ResidentView {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            full_name: self.full_name(),
        }
    }
}

/// Binds one resident to one unit for a half-open interval of days.
///
/// `move_in_date` is the first occupied day; `move_out_date` is the first
/// vacant day again, `None` while the occupancy is still open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupancy {
    pub id: OccupancyId,
    pub unit_id: UnitId,
    pub resident_id: ResidentId,
    pub move_in_date: NaiveDate,
    pub move_out_date: Option<NaiveDate>,
}

impl Occupancy {
    /// Whether the interval covers `on_date` under half-open semantics.
    pub fn covers(&self, on_date: NaiveDate) -> bool {
        self.move_in_date <= on_date
            && self
                .move_out_date
                .map_or(true, |move_out| move_out > on_date)
    }

    pub fn to_view(&self) -> OccupancyView {
        OccupancyView {
            id: self.id,
            unit_id: self.unit_id,
            resident_id: self.resident_id,
            move_in_date: self.move_in_date,
            move_out_date: self.move_out_date,
        }
    }
}

/// One row of an occupancy's rent history. The amount in effect on a date is
/// the row with the greatest effective date not after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentCharge {
    pub id: RentChargeId,
    pub occupancy_id: OccupancyId,
    pub amount: i64,
    pub effective_date: NaiveDate,
}

impl RentCharge {
    pub fn to_view(&self) -> RentChargeView {
        RentChargeView {
            id: self.id,
            occupancy_id: self.occupancy_id,
            amount: self.amount,
            effective_date: self.effective_date,
        }
    }
}

/// Append-only record of a unit switching between active and inactive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEvent {
    pub id: StatusEventId,
    pub unit_id: UnitId,
    pub status: UnitStatus,
    pub start_date: NaiveDate,
}

impl StatusEvent {
    pub fn to_view(&self) -> StatusEventView {
        StatusEventView {
            id: self.id,
            status: self.status.label(),
            start_date: self.start_date,
        }
    }
}

/// Whether a unit participates in occupancy and rent reporting. Units with no
/// recorded event are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitStatus {
    Active,
    Inactive,
}

impl UnitStatus {
    pub const fn label(self) -> &'static str {
        match self {
            UnitStatus::Active => "active",
            UnitStatus::Inactive => "inactive",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(UnitStatus::Active),
            "inactive" => Some(UnitStatus::Inactive),
            _ => None,
        }
    }
}

/// Property payload with the owned unit count resolved.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyView {
    pub id: PropertyId,
    pub name: String,
    pub unit_count: usize,
}

/// Unit payload; `current_status` is attached by detail endpoints only.
#[derive(Debug, Clone, Serialize)]
pub struct UnitView {
    pub id: UnitId,
    pub property_id: PropertyId,
    pub unit_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_status: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResidentView {
    pub id: ResidentId,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OccupancyView {
    pub id: OccupancyId,
    pub unit_id: UnitId,
    pub resident_id: ResidentId,
    pub move_in_date: NaiveDate,
    pub move_out_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RentChargeView {
    pub id: RentChargeId,
    pub occupancy_id: OccupancyId,
    pub amount: i64,
    pub effective_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusEventView {
    pub id: StatusEventId,
    pub status: &'static str,
    pub start_date: NaiveDate,
}
