use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::super::domain::{PropertyId, ResidentId, UnitId, UnitStatus};
use super::super::store::PortfolioReader;
use super::rent_roll::{generate_rent_roll, RentRollRecord};
use super::ReportError;

/// Per-month occupancy totals and transition counts.
///
/// `total_units_days` counts active unit-days only; an inactive day adds to
/// neither total. `occupancy_rate` is occupied over total, rounded to four
/// decimal places, 0.0 for a month with no active days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MonthlyKpis {
    pub total_units_days: u64,
    pub occupied_days: u64,
    pub occupancy_rate: f64,
    pub move_ins: u64,
    pub move_outs: u64,
}

/// Move-in and move-out counts over a date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveActivity {
    pub move_ins: u64,
    pub move_outs: u64,
}

/// Occupancy rate for one calendar month, computed against every unit of the
/// property regardless of status history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthOccupancy {
    pub month: String,
    pub total_units_days: u64,
    pub occupied_days: u64,
    pub occupancy_rate: f64,
}

/// Reduces a rent-roll sequence into per-month KPIs, keyed `YYYY-MM`.
///
/// The input must carry each unit's days in non-decreasing date order, as
/// `generate_rent_roll` emits them. Transition counting tracks the previous
/// day's resident per unit, starting from no prior knowledge, so an
/// occupancy already in place on the first day of the range counts as a
/// move-in. The previous state advances on every record, including days a
/// unit is inactive, which means an occupied run closed by deactivation
/// still registers its move-out.
pub fn aggregate_kpis(records: &[RentRollRecord]) -> BTreeMap<String, MonthlyKpis> {
    let mut months: BTreeMap<String, MonthlyKpis> = BTreeMap::new();
    let mut last_seen: HashMap<UnitId, Option<ResidentId>> = HashMap::new();

    for record in records {
        let totals = months.entry(month_key(record.date)).or_default();

        if record.unit_status == UnitStatus::Active {
            totals.total_units_days += 1;
            if record.resident_id.is_some() {
                totals.occupied_days += 1;
            }
        }

        let previous = last_seen.get(&record.unit_id).copied().flatten();
        match (previous, record.resident_id) {
            (None, Some(_)) => totals.move_ins += 1,
            (Some(_), None) => totals.move_outs += 1,
            _ => {}
        }
        last_seen.insert(record.unit_id, record.resident_id);
    }

    for totals in months.values_mut() {
        totals.occupancy_rate = if totals.total_units_days == 0 {
            0.0
        } else {
            round4(totals.occupied_days as f64 / totals.total_units_days as f64)
        };
    }

    months
}

/// Generates the rent roll for the range and reduces it with
/// [`aggregate_kpis`]. An unknown property yields an empty map.
pub fn calculate_kpis<R>(
    store: &R,
    property_id: PropertyId,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<BTreeMap<String, MonthlyKpis>, ReportError>
where
    R: PortfolioReader + ?Sized,
{
    let records = generate_rent_roll(store, property_id, start_date, end_date)?;
    Ok(aggregate_kpis(&records))
}

/// Counts occupancies of the property whose move-in or move-out dates fall
/// inside `[start_date, end_date]`, both ends inclusive. This is the narrow
/// range-scan variant; it reads occupancy rows directly instead of replaying
/// the rent roll.
pub fn move_in_out_counts<R>(
    store: &R,
    property_id: PropertyId,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<MoveActivity, ReportError>
where
    R: PortfolioReader + ?Sized,
{
    if end_date < start_date {
        return Err(ReportError::InvalidRange);
    }

    let mut activity = MoveActivity {
        move_ins: 0,
        move_outs: 0,
    };

    for unit in store.list_units_for_property(property_id)? {
        for occupancy in store.list_occupancies_for_unit(unit.id)? {
            if (start_date..=end_date).contains(&occupancy.move_in_date) {
                activity.move_ins += 1;
            }
            if let Some(move_out) = occupancy.move_out_date {
                if (start_date..=end_date).contains(&move_out) {
                    activity.move_outs += 1;
                }
            }
        }
    }

    Ok(activity)
}

/// Occupancy rate for one calendar month: occupied unit-days from the rent
/// roll over unit count times days in the month. A missing property or a
/// property with no units reports zeros.
pub fn occupancy_rate_for_month<R>(
    store: &R,
    property_id: PropertyId,
    year: i32,
    month: u32,
) -> Result<MonthOccupancy, ReportError>
where
    R: PortfolioReader + ?Sized,
{
    if !(1..=12).contains(&month) {
        return Err(ReportError::InvalidMonth);
    }
    if year < 1 {
        return Err(ReportError::InvalidYear);
    }

    let (month_start, month_end) =
        month_bounds(year, month).ok_or(ReportError::InvalidMonth)?;
    let days_in_month = (month_end - month_start).num_days() as u64 + 1;
    let month = format!("{year:04}-{month:02}");

    let empty = MonthOccupancy {
        month: month.clone(),
        total_units_days: 0,
        occupied_days: 0,
        occupancy_rate: 0.0,
    };

    let property = match store.fetch_property(property_id)? {
        Some(property) => property,
        None => return Ok(empty),
    };
    let units = store.list_units_for_property(property.id)?;
    if units.is_empty() {
        return Ok(empty);
    }

    let records = generate_rent_roll(store, property.id, month_start, month_end)?;
    let occupied_days = records
        .iter()
        .filter(|record| record.resident_id.is_some())
        .count() as u64;
    let total_units_days = units.len() as u64 * days_in_month;

    Ok(MonthOccupancy {
        month,
        total_units_days,
        occupied_days,
        occupancy_rate: round4(occupied_days as f64 / total_units_days as f64),
    })
}

fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_start = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }?;
    Some((start, next_start.pred_opt()?))
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
