use std::sync::Arc;

use chrono::NaiveDate;
use rentledger::portfolio::{
    aggregate_kpis, generate_rent_roll, move_in_out_counts, occupancy_rate_for_month,
    rent_roll_csv, LeasingService, MemoryStore, MoveInCommand, PortfolioReader, PropertyId,
    RentRollRecord, UnitStatus,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Three units through the first four months of 2024: a long-term stay with
/// a rent increase, a fixed-term stay ending April 1, and a unit pulled from
/// service on February 1.
fn seed_turnover_portfolio() -> (Arc<LeasingService<MemoryStore>>, PropertyId) {
    let store = Arc::new(MemoryStore::default());
    let service = Arc::new(LeasingService::new(store));

    let property = service.create_property("Maple Court").expect("property");
    for number in ["1A", "1B", "1C"] {
        service.create_unit(property.id, number).expect("unit");
    }
    let ada = service.create_resident("Ada", "Byron").expect("resident");
    let grace = service.create_resident("Grace", "Hopper").expect("resident");

    let units = service
        .store()
        .list_units_for_property(property.id)
        .expect("units listed");

    let long_stay = service
        .move_in(MoveInCommand {
            resident_id: ada.id,
            unit_id: units[0].id,
            move_in_date: date(2024, 1, 1),
            move_out_date: None,
            initial_rent: 1200,
        })
        .expect("move-in accepted");
    service
        .change_rent(long_stay.id, 1300, date(2024, 3, 1))
        .expect("rent change accepted");

    service
        .move_in(MoveInCommand {
            resident_id: grace.id,
            unit_id: units[1].id,
            move_in_date: date(2024, 2, 15),
            move_out_date: Some(date(2024, 4, 1)),
            initial_rent: 1400,
        })
        .expect("move-in accepted");

    service
        .set_unit_status(units[2].id, UnitStatus::Inactive, date(2024, 2, 1))
        .expect("status recorded");

    (service, property.id)
}

fn record_for<'a>(
    records: &'a [RentRollRecord],
    on_date: NaiveDate,
    label: &str,
) -> &'a RentRollRecord {
    records
        .iter()
        .find(|record| record.date == on_date && record.unit_number == label)
        .expect("record present")
}

#[test]
fn rent_roll_reconstructs_a_turnover_season() {
    let (service, property_id) = seed_turnover_portfolio();

    let records =
        generate_rent_roll(service.store(), property_id, date(2024, 1, 1), date(2024, 4, 30))
            .expect("rent roll generated");

    // 3 units, 121 days (leap February).
    assert_eq!(records.len(), 363);
    assert!(records.windows(2).all(|pair| {
        pair[0].date < pair[1].date
            || (pair[0].date == pair[1].date && pair[0].unit_id < pair[1].unit_id)
    }));

    // The March increase leaves February untouched.
    assert_eq!(record_for(&records, date(2024, 2, 29), "P1-1A").monthly_rent, 1200);
    assert_eq!(record_for(&records, date(2024, 3, 1), "P1-1A").monthly_rent, 1300);

    // The fixed-term stay ends on its move-out day, not the day after.
    assert_eq!(
        record_for(&records, date(2024, 3, 31), "P1-1B")
            .resident_name
            .as_deref(),
        Some("Grace Hopper")
    );
    assert_eq!(record_for(&records, date(2024, 4, 1), "P1-1B").resident_id, None);

    // The deactivated unit keeps reporting, at zero, from its start date.
    assert_eq!(
        record_for(&records, date(2024, 1, 31), "P1-1C").unit_status,
        UnitStatus::Active
    );
    let pulled = record_for(&records, date(2024, 2, 1), "P1-1C");
    assert_eq!(pulled.unit_status, UnitStatus::Inactive);
    assert_eq!(pulled.monthly_rent, 0);

    let kpis = aggregate_kpis(&records);
    let months: Vec<_> = kpis.keys().cloned().collect();
    assert_eq!(months, vec!["2024-01", "2024-02", "2024-03", "2024-04"]);

    let january = &kpis["2024-01"];
    assert_eq!(january.move_ins, 1);
    assert_eq!(january.total_units_days, 93);
    assert_eq!(january.occupied_days, 31);

    let february = &kpis["2024-02"];
    assert_eq!(february.move_ins, 1);
    assert_eq!(february.total_units_days, 58);
    assert_eq!(february.occupied_days, 44);
    assert_eq!(february.occupancy_rate, 0.7586);

    let april = &kpis["2024-04"];
    assert_eq!(april.move_outs, 1);
    assert_eq!(april.occupied_days, 30);
}

#[test]
fn month_scoped_reports_agree_with_the_daily_roll() {
    let (service, property_id) = seed_turnover_portfolio();

    // The month-rate denominator counts every unit, deactivated or not.
    let february = occupancy_rate_for_month(service.store(), property_id, 2024, 2)
        .expect("report calculated");
    assert_eq!(february.month, "2024-02");
    assert_eq!(february.total_units_days, 87);
    assert_eq!(february.occupied_days, 44);
    assert_eq!(february.occupancy_rate, 0.5057);

    let activity =
        move_in_out_counts(service.store(), property_id, date(2024, 2, 1), date(2024, 4, 30))
            .expect("counts calculated");
    assert_eq!(activity.move_ins, 1);
    assert_eq!(activity.move_outs, 1);
}

#[test]
fn csv_export_covers_every_record() {
    let (service, property_id) = seed_turnover_portfolio();

    let records =
        generate_rent_roll(service.store(), property_id, date(2024, 1, 1), date(2024, 4, 30))
            .expect("rent roll generated");
    let bytes = rent_roll_csv(&records).expect("csv encoded");
    let text = String::from_utf8(bytes).expect("utf-8 csv");

    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), records.len() + 1);
    assert!(lines[0].starts_with("date,property_id,unit_id"));
    assert!(lines[1].starts_with("2024-01-01,"));
}
