//! Point-in-time lookups over ordered history slices.

use chrono::NaiveDate;

use super::super::domain::{Occupancy, RentCharge, StatusEvent, UnitStatus};

/// Latest entry whose date is not after `on_date`. The slice must already be
/// ordered by (date, id), so scanning from the back also settles same-date
/// ties in favor of the newest row.
pub(crate) fn latest_effective<T>(
    history: &[T],
    on_date: NaiveDate,
    date_of: impl Fn(&T) -> NaiveDate,
) -> Option<&T> {
    history.iter().rev().find(|entry| date_of(entry) <= on_date)
}

/// Status in effect on `on_date`; units with no qualifying event are active.
pub(crate) fn status_on(events: &[StatusEvent], on_date: NaiveDate) -> UnitStatus {
    latest_effective(events, on_date, |event| event.start_date)
        .map(|event| event.status)
        .unwrap_or(UnitStatus::Active)
}

/// Rent in effect on `on_date`; zero until the first charge takes effect.
pub(crate) fn rent_on(charges: &[RentCharge], on_date: NaiveDate) -> i64 {
    latest_effective(charges, on_date, |charge| charge.effective_date)
        .map(|charge| charge.amount)
        .unwrap_or(0)
}

/// The occupancy covering `on_date`, if any. The write path keeps intervals
/// disjoint per unit, so at most one can match.
pub(crate) fn occupancy_on(occupancies: &[Occupancy], on_date: NaiveDate) -> Option<&Occupancy> {
    occupancies.iter().find(|occupancy| occupancy.covers(on_date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::domain::{
        OccupancyId, RentChargeId, ResidentId, StatusEventId, UnitId,
    };

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    fn charge(id: u64, amount: i64, effective: NaiveDate) -> RentCharge {
        RentCharge {
            id: RentChargeId(id),
            occupancy_id: OccupancyId(1),
            amount,
            effective_date: effective,
        }
    }

    fn event(id: u64, status: UnitStatus, start: NaiveDate) -> StatusEvent {
        StatusEvent {
            id: StatusEventId(id),
            unit_id: UnitId(1),
            status,
            start_date: start,
        }
    }

    #[test]
    fn rent_defaults_to_zero_before_first_charge() {
        let charges = [charge(1, 950, date(2024, 2, 1))];
        assert_eq!(rent_on(&charges, date(2024, 1, 31)), 0);
        assert_eq!(rent_on(&charges, date(2024, 2, 1)), 950);
    }

    #[test]
    fn rent_takes_latest_effective_charge() {
        let charges = [
            charge(1, 1000, date(2024, 1, 1)),
            charge(2, 1500, date(2024, 1, 15)),
        ];
        assert_eq!(rent_on(&charges, date(2024, 1, 14)), 1000);
        assert_eq!(rent_on(&charges, date(2024, 1, 15)), 1500);
        assert_eq!(rent_on(&charges, date(2024, 1, 16)), 1500);
    }

    #[test]
    fn same_day_charges_resolve_to_newest_row() {
        let charges = [
            charge(1, 1000, date(2024, 1, 1)),
            charge(2, 1100, date(2024, 1, 1)),
        ];
        assert_eq!(rent_on(&charges, date(2024, 1, 1)), 1100);
    }

    #[test]
    fn status_defaults_to_active_without_history() {
        assert_eq!(status_on(&[], date(2024, 1, 1)), UnitStatus::Active);
    }

    #[test]
    fn status_follows_most_recent_event() {
        let events = [
            event(1, UnitStatus::Inactive, date(2024, 1, 10)),
            event(2, UnitStatus::Active, date(2024, 1, 20)),
        ];
        assert_eq!(status_on(&events, date(2024, 1, 9)), UnitStatus::Active);
        assert_eq!(status_on(&events, date(2024, 1, 10)), UnitStatus::Inactive);
        assert_eq!(status_on(&events, date(2024, 1, 19)), UnitStatus::Inactive);
        assert_eq!(status_on(&events, date(2024, 1, 20)), UnitStatus::Active);
    }

    #[test]
    fn occupancy_interval_is_half_open() {
        let occupancies = [Occupancy {
            id: OccupancyId(1),
            unit_id: UnitId(1),
            resident_id: ResidentId(1),
            move_in_date: date(2024, 1, 1),
            move_out_date: Some(date(2024, 1, 2)),
        }];
        assert!(occupancy_on(&occupancies, date(2024, 1, 1)).is_some());
        assert!(occupancy_on(&occupancies, date(2024, 1, 2)).is_none());
        assert!(occupancy_on(&occupancies, date(2023, 12, 31)).is_none());
    }

    #[test]
    fn open_ended_occupancy_covers_far_future() {
        let occupancies = [Occupancy {
            id: OccupancyId(1),
            unit_id: UnitId(1),
            resident_id: ResidentId(1),
            move_in_date: date(2024, 1, 1),
            move_out_date: None,
        }];
        assert!(occupancy_on(&occupancies, date(2030, 6, 15)).is_some());
    }
}
