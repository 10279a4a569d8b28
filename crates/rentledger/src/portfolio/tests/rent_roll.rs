use super::common::*;
use crate::portfolio::domain::{PropertyId, UnitStatus};
use crate::portfolio::reports::{generate_rent_roll, rent_roll_csv, ReportError};

#[test]
fn row_count_is_units_times_days() {
    let (service, _) = build_service();
    let (property_id, _) = seed_property(&service, "Elm Court", &["1A", "1B", "2A"]);

    let records =
        generate_rent_roll(service.store(), property_id, date(2024, 1, 1), date(2024, 1, 5))
            .expect("rent roll generated");
    assert_eq!(records.len(), 3 * 5);
}

#[test]
fn records_run_date_major_with_units_in_id_order() {
    let (service, _) = build_service();
    let (property_id, _) = seed_property(&service, "Elm Court", &["2B", "1A"]);

    let records =
        generate_rent_roll(service.store(), property_id, date(2024, 1, 1), date(2024, 1, 3))
            .expect("rent roll generated");

    assert!(records.windows(2).all(|pair| {
        pair[0].date < pair[1].date
            || (pair[0].date == pair[1].date && pair[0].unit_id < pair[1].unit_id)
    }));
    assert_eq!(records[0].date, date(2024, 1, 1));
    assert_eq!(records.last().expect("non-empty").date, date(2024, 1, 3));
}

#[test]
fn occupancy_interval_is_half_open() {
    let (service, _) = build_service();
    let (property_id, units) = seed_property(&service, "Elm Court", &["1A"]);
    let resident = seed_resident(&service, "Ada", "Byron");
    seed_move_in(
        &service,
        resident,
        units[0],
        date(2024, 1, 1),
        Some(date(2024, 1, 2)),
        1000,
    );

    let records =
        generate_rent_roll(service.store(), property_id, date(2024, 1, 1), date(2024, 1, 2))
            .expect("rent roll generated");

    assert_eq!(records[0].resident_name.as_deref(), Some("Ada Byron"));
    assert_eq!(records[0].monthly_rent, 1000);
    assert_eq!(records[1].resident_id, None);
    assert_eq!(records[1].monthly_rent, 0);
}

#[test]
fn rent_in_effect_is_the_latest_on_or_before_the_day() {
    let (service, _) = build_service();
    let (property_id, units) = seed_property(&service, "Elm Court", &["1A"]);
    let resident = seed_resident(&service, "Ada", "Byron");
    let occupancy_id = seed_move_in(&service, resident, units[0], date(2024, 1, 1), None, 1000);
    service
        .change_rent(occupancy_id, 1500, date(2024, 1, 15))
        .expect("rent change accepted");

    let records =
        generate_rent_roll(service.store(), property_id, date(2024, 1, 14), date(2024, 1, 16))
            .expect("rent roll generated");
    let amounts: Vec<_> = records.iter().map(|record| record.monthly_rent).collect();
    assert_eq!(amounts, vec![1000, 1500, 1500]);
}

#[test]
fn same_day_rent_correction_takes_precedence() {
    let (service, _) = build_service();
    let (property_id, units) = seed_property(&service, "Elm Court", &["1A"]);
    let resident = seed_resident(&service, "Ada", "Byron");
    let occupancy_id = seed_move_in(&service, resident, units[0], date(2024, 1, 1), None, 1000);
    service
        .change_rent(occupancy_id, 1050, date(2024, 1, 1))
        .expect("correction accepted");

    let records =
        generate_rent_roll(service.store(), property_id, date(2024, 1, 1), date(2024, 1, 1))
            .expect("rent roll generated");
    assert_eq!(records[0].monthly_rent, 1050);
}

#[test]
fn vacant_units_report_no_resident_and_zero_rent() {
    let (service, _) = build_service();
    let (property_id, _) = seed_property(&service, "Elm Court", &["1A"]);

    let records =
        generate_rent_roll(service.store(), property_id, date(2024, 3, 1), date(2024, 3, 1))
            .expect("rent roll generated");
    assert_eq!(records[0].resident_id, None);
    assert_eq!(records[0].resident_name, None);
    assert_eq!(records[0].monthly_rent, 0);
    assert_eq!(records[0].unit_status, UnitStatus::Active);
}

#[test]
fn inactive_days_suppress_the_overlapping_occupancy() {
    let (service, _) = build_service();
    let (property_id, units) = seed_property(&service, "Elm Court", &["1A"]);
    let resident = seed_resident(&service, "Ada", "Byron");
    // Renovation scheduled first, while the unit is still vacant; the
    // open-ended occupancy recorded afterwards overlaps it.
    service
        .set_unit_status(units[0], UnitStatus::Inactive, date(2024, 2, 1))
        .expect("status recorded");
    seed_move_in(&service, resident, units[0], date(2024, 1, 1), None, 1000);

    let records =
        generate_rent_roll(service.store(), property_id, date(2024, 1, 31), date(2024, 2, 1))
            .expect("rent roll generated");

    assert_eq!(records[0].resident_name.as_deref(), Some("Ada Byron"));
    assert_eq!(records[0].monthly_rent, 1000);
    assert_eq!(records[1].unit_status, UnitStatus::Inactive);
    assert_eq!(records[1].resident_id, None);
    assert_eq!(records[1].monthly_rent, 0);
}

#[test]
fn unknown_property_yields_an_empty_roll() {
    let (service, _) = build_service();
    let records =
        generate_rent_roll(service.store(), PropertyId(404), date(2024, 1, 1), date(2024, 1, 31))
            .expect("rent roll generated");
    assert!(records.is_empty());
}

#[test]
fn property_without_units_yields_an_empty_roll() {
    let (service, _) = build_service();
    let (property_id, _) = seed_property(&service, "Elm Court", &[]);
    let records =
        generate_rent_roll(service.store(), property_id, date(2024, 1, 1), date(2024, 1, 31))
            .expect("rent roll generated");
    assert!(records.is_empty());
}

#[test]
fn inverted_ranges_are_rejected() {
    let (service, _) = build_service();
    let (property_id, _) = seed_property(&service, "Elm Court", &["1A"]);
    let error =
        generate_rent_roll(service.store(), property_id, date(2024, 2, 1), date(2024, 1, 1))
            .unwrap_err();
    assert!(matches!(error, ReportError::InvalidRange));
}

#[test]
fn a_single_day_range_produces_one_record_per_unit() {
    let (service, _) = build_service();
    let (property_id, _) = seed_property(&service, "Elm Court", &["1A", "1B"]);
    let records =
        generate_rent_roll(service.store(), property_id, date(2024, 1, 1), date(2024, 1, 1))
            .expect("rent roll generated");
    assert_eq!(records.len(), 2);
}

#[test]
fn generation_is_idempotent_for_unchanged_state() {
    let (service, _) = build_service();
    let (property_id, units) = seed_property(&service, "Elm Court", &["1A", "1B"]);
    let resident = seed_resident(&service, "Ada", "Byron");
    seed_move_in(&service, resident, units[0], date(2024, 1, 1), None, 1000);

    let first =
        generate_rent_roll(service.store(), property_id, date(2024, 1, 1), date(2024, 1, 7))
            .expect("rent roll generated");
    let second =
        generate_rent_roll(service.store(), property_id, date(2024, 1, 1), date(2024, 1, 7))
            .expect("rent roll generated");
    assert_eq!(first, second);
}

#[test]
fn unit_labels_carry_the_property_prefix() {
    let (service, _) = build_service();
    let (property_id, _) = seed_property(&service, "Elm Court", &["12B"]);
    let records =
        generate_rent_roll(service.store(), property_id, date(2024, 1, 1), date(2024, 1, 1))
            .expect("rent roll generated");
    assert_eq!(records[0].unit_number, "P1-12B");
}

#[test]
fn csv_export_writes_the_header_and_one_line_per_record() {
    let (service, _) = build_service();
    let (property_id, units) = seed_property(&service, "Elm Court", &["1A"]);
    let resident = seed_resident(&service, "Ada", "Byron");
    seed_move_in(
        &service,
        resident,
        units[0],
        date(2024, 1, 1),
        Some(date(2024, 1, 2)),
        1000,
    );

    let records =
        generate_rent_roll(service.store(), property_id, date(2024, 1, 1), date(2024, 1, 2))
            .expect("rent roll generated");
    let bytes = rent_roll_csv(&records).expect("csv encoded");
    let text = String::from_utf8(bytes).expect("utf-8 csv");

    let lines: Vec<_> = text.lines().collect();
    assert_eq!(
        lines[0],
        "date,property_id,unit_id,unit_number,resident_id,resident_name,monthly_rent,unit_status"
    );
    assert_eq!(lines[1], "2024-01-01,1,1,P1-1A,1,Ada Byron,1000,active");
    assert_eq!(lines[2], "2024-01-02,1,1,P1-1A,,,0,active");
    assert_eq!(lines.len(), records.len() + 1);
}

#[test]
fn csv_export_of_no_records_is_just_the_header() {
    let bytes = rent_roll_csv(&[]).expect("csv encoded");
    let text = String::from_utf8(bytes).expect("utf-8 csv");
    assert_eq!(
        text.trim_end(),
        "date,property_id,unit_id,unit_number,resident_id,resident_name,monthly_rent,unit_status"
    );
}
