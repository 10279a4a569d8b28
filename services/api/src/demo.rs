use chrono::NaiveDate;
use clap::Args;
use rentledger::error::AppError;
use rentledger::portfolio::{
    calculate_kpis, generate_rent_roll, move_in_out_counts, occupancy_rate_for_month,
    rent_roll_csv, LeasingService, MemoryStore, MonthlyKpis, MoveInCommand, PortfolioReader,
    PropertyId, RentRollRecord, UnitStatus,
};
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// First day of the printed rent-roll excerpt (YYYY-MM-DD). Defaults to 2024-03-01.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) start_date: Option<NaiveDate>,
    /// Last day of the printed rent-roll excerpt (YYYY-MM-DD). Defaults to 2024-03-07.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) end_date: Option<NaiveDate>,
    /// Skip the day-by-day rent roll portion of the demo output.
    #[arg(long)]
    pub(crate) skip_rent_roll: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RentRollArgs {
    /// First day of the report (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) start_date: NaiveDate,
    /// Last day of the report (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) end_date: NaiveDate,
    /// Emit the roll as CSV instead of the line rendering
    #[arg(long)]
    pub(crate) csv: bool,
}

#[derive(Args, Debug)]
pub(crate) struct KpiArgs {
    /// First day of the KPI window (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) start_date: NaiveDate,
    /// Last day of the KPI window (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) end_date: NaiveDate,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        start_date,
        end_date,
        skip_rent_roll,
    } = args;

    let roll_start = start_date.unwrap_or_else(|| demo_date(2024, 3, 1));
    let roll_end = end_date.unwrap_or_else(|| demo_date(2024, 3, 7));

    println!("Rent ledger demo");
    let service = sample_service();
    let property_id = seed_sample_portfolio(&service)?;
    let store = service.store();

    let property_name = store
        .fetch_property(property_id)?
        .map(|property| property.name)
        .unwrap_or_else(|| "sample portfolio".to_string());
    let units = store.list_units_for_property(property_id)?;
    let residents = store.list_residents()?;
    println!(
        "Seeded {} with {} units and {} residents",
        property_name,
        units.len(),
        residents.len()
    );

    if !skip_rent_roll {
        let records = generate_rent_roll(store, property_id, roll_start, roll_end)?;
        render_rent_roll(&property_name, roll_start, roll_end, &records);
    }

    let kpi_start = demo_date(2024, 1, 1);
    let kpi_end = demo_date(2024, 6, 30);
    let months = calculate_kpis(store, property_id, kpi_start, kpi_end)?;
    render_kpis(&months);

    let spotlight = occupancy_rate_for_month(store, property_id, 2024, 6)?;
    println!(
        "\nWhole-property rate for {}: {:.1}% ({}/{} unit-days, counting every unit)",
        spotlight.month,
        spotlight.occupancy_rate * 100.0,
        spotlight.occupied_days,
        spotlight.total_units_days
    );

    let activity = move_in_out_counts(store, property_id, kpi_start, kpi_end)?;
    println!(
        "Move activity {} -> {}: {} move-ins / {} move-outs",
        kpi_start, kpi_end, activity.move_ins, activity.move_outs
    );

    Ok(())
}

pub(crate) fn run_rent_roll_report(args: RentRollArgs) -> Result<(), AppError> {
    let RentRollArgs {
        start_date,
        end_date,
        csv,
    } = args;

    let service = sample_service();
    let property_id = seed_sample_portfolio(&service)?;
    let store = service.store();
    let records = generate_rent_roll(store, property_id, start_date, end_date)?;

    if csv {
        let bytes = rent_roll_csv(&records)?;
        match String::from_utf8(bytes) {
            Ok(text) => print!("{text}"),
            Err(err) => println!("csv output unavailable: {err}"),
        }
        return Ok(());
    }

    let property_name = store
        .fetch_property(property_id)?
        .map(|property| property.name)
        .unwrap_or_else(|| "sample portfolio".to_string());
    render_rent_roll(&property_name, start_date, end_date, &records);
    Ok(())
}

pub(crate) fn run_kpi_report(args: KpiArgs) -> Result<(), AppError> {
    let KpiArgs {
        start_date,
        end_date,
    } = args;

    let service = sample_service();
    let property_id = seed_sample_portfolio(&service)?;
    let store = service.store();

    let months = calculate_kpis(store, property_id, start_date, end_date)?;
    render_kpis(&months);

    let activity = move_in_out_counts(store, property_id, start_date, end_date)?;
    println!(
        "\nMove activity {} -> {}: {} move-ins / {} move-outs",
        start_date, end_date, activity.move_ins, activity.move_outs
    );

    Ok(())
}

/// Builds the fixed portfolio every CLI entry point works against: six units,
/// five residents, one mid-season rent change and one unit out for renovation.
pub(crate) fn seed_sample_portfolio(
    service: &LeasingService<MemoryStore>,
) -> Result<PropertyId, AppError> {
    let property = service.create_property("Harborview Flats")?;

    let mut units = Vec::new();
    for number in ["1A", "1B", "2A", "2B", "3A", "3B"] {
        units.push(service.create_unit(property.id, number)?);
    }

    let maya = service.create_resident("Maya", "Flores")?;
    let jonas = service.create_resident("Jonas", "Keller")?;
    let priya = service.create_resident("Priya", "Raman")?;
    let tom = service.create_resident("Tom", "Okafor")?;
    let lena = service.create_resident("Lena", "Fischer")?;

    // 3B goes dark for renovation while still vacant.
    service.set_unit_status(units[5].id, UnitStatus::Inactive, demo_date(2024, 2, 15))?;

    let anchor = service.move_in(MoveInCommand {
        resident_id: maya.id,
        unit_id: units[0].id,
        move_in_date: demo_date(2024, 1, 1),
        move_out_date: None,
        initial_rent: 1250,
    })?;
    service.change_rent(anchor.id, 1350, demo_date(2024, 4, 1))?;

    service.move_in(MoveInCommand {
        resident_id: jonas.id,
        unit_id: units[1].id,
        move_in_date: demo_date(2024, 1, 15),
        move_out_date: Some(demo_date(2024, 5, 1)),
        initial_rent: 1100,
    })?;

    service.move_in(MoveInCommand {
        resident_id: priya.id,
        unit_id: units[2].id,
        move_in_date: demo_date(2024, 2, 1),
        move_out_date: None,
        initial_rent: 1400,
    })?;

    service.move_in(MoveInCommand {
        resident_id: tom.id,
        unit_id: units[3].id,
        move_in_date: demo_date(2024, 3, 10),
        move_out_date: None,
        initial_rent: 990,
    })?;

    service.move_in(MoveInCommand {
        resident_id: lena.id,
        unit_id: units[4].id,
        move_in_date: demo_date(2024, 4, 5),
        move_out_date: None,
        initial_rent: 1175,
    })?;

    Ok(property.id)
}

fn sample_service() -> LeasingService<MemoryStore> {
    LeasingService::new(Arc::new(MemoryStore::default()))
}

fn demo_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn render_rent_roll(
    property_name: &str,
    start: NaiveDate,
    end: NaiveDate,
    records: &[RentRollRecord],
) {
    println!("\nDaily rent roll for {property_name}: {start} -> {end}");
    if records.is_empty() {
        println!("- no units recorded for the property");
        return;
    }

    for record in records {
        let resident = record.resident_name.as_deref().unwrap_or("(vacant)");
        println!(
            "- {} | unit {} | {} | rent {} | {}",
            record.date,
            record.unit_number,
            resident,
            record.monthly_rent,
            record.unit_status.label()
        );
    }
}

fn render_kpis(months: &BTreeMap<String, MonthlyKpis>) {
    println!("\nMonthly occupancy and moves");
    if months.is_empty() {
        println!("- no occupancy history in the window");
        return;
    }

    for (month, kpis) in months {
        println!(
            "- {}: {:.1}% occupied ({}/{} unit-days) | {} move-ins | {} move-outs",
            month,
            kpis.occupancy_rate * 100.0,
            kpis.occupied_days,
            kpis.total_units_days,
            kpis.move_ins,
            kpis.move_outs
        );
    }
}
