use std::collections::HashSet;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, patch, post, put},
    Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Deserializer};
use serde_json::json;

use super::domain::{OccupancyId, PropertyId, ResidentId, UnitId, UnitStatus};
use super::leasing::{AmendOccupancy, LeasingError, LeasingService, MoveInCommand};
use super::reports::{
    calculate_kpis, generate_rent_roll, move_in_out_counts, occupancy_rate_for_month,
    rent_roll_csv, ReportError,
};
use super::store::{PortfolioStore, StoreError};

/// Router builder exposing the portfolio record and report endpoints.
pub fn portfolio_router<S>(service: Arc<LeasingService<S>>) -> Router
where
    S: PortfolioStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/properties",
            post(create_property_handler::<S>).get(list_properties_handler::<S>),
        )
        .route("/api/v1/properties/:property_id", get(get_property_handler::<S>))
        .route(
            "/api/v1/properties/:property_id/units",
            get(list_property_units_handler::<S>),
        )
        .route(
            "/api/v1/units",
            post(create_unit_handler::<S>).get(list_units_handler::<S>),
        )
        .route("/api/v1/units/:unit_id", get(get_unit_handler::<S>))
        .route(
            "/api/v1/units/:unit_id/status",
            post(set_unit_status_handler::<S>).get(unit_status_handler::<S>),
        )
        .route("/api/v1/units/:unit_id/rents", get(unit_rent_history_handler::<S>))
        .route(
            "/api/v1/residents",
            post(create_resident_handler::<S>).get(list_residents_handler::<S>),
        )
        .route("/api/v1/residents/:resident_id", get(get_resident_handler::<S>))
        .route("/api/v1/occupancies", get(list_occupancies_handler::<S>))
        .route("/api/v1/occupancies/move-in", post(move_in_handler::<S>))
        .route(
            "/api/v1/occupancies/:occupancy_id",
            patch(amend_occupancy_handler::<S>),
        )
        .route(
            "/api/v1/occupancies/:occupancy_id/move-out",
            put(move_out_handler::<S>),
        )
        .route(
            "/api/v1/occupancies/:occupancy_id/rent-change",
            post(rent_change_handler::<S>),
        )
        .route(
            "/api/v1/occupancies/:occupancy_id/rents",
            get(occupancy_rents_handler::<S>),
        )
        .route("/api/v1/reports/rent-roll", get(rent_roll_report_handler::<S>))
        .route("/api/v1/reports/kpi", get(kpi_report_handler::<S>))
        .route("/api/v1/reports/kpi-move", get(kpi_move_report_handler::<S>))
        .route(
            "/api/v1/reports/kpi-occupancy",
            get(kpi_occupancy_report_handler::<S>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
struct CreatePropertyPayload {
    name: String,
}

#[derive(Debug, Deserialize)]
struct CreateUnitPayload {
    property_id: u64,
    unit_number: String,
}

#[derive(Debug, Deserialize)]
struct CreateResidentPayload {
    first_name: String,
    last_name: String,
}

#[derive(Debug, Deserialize)]
struct MoveInPayload {
    resident_id: u64,
    unit_id: u64,
    move_in_date: NaiveDate,
    #[serde(default)]
    move_out_date: Option<NaiveDate>,
    monthly_rent: i64,
}

#[derive(Debug, Deserialize)]
struct MoveOutPayload {
    move_out_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
struct RentChangePayload {
    amount: i64,
    effective_date: NaiveDate,
}

/// Patch body for an occupancy. A missing `move_out_date` keeps the stored
/// value while an explicit `null` clears it, hence the double option.
#[derive(Debug, Deserialize)]
struct AmendOccupancyPayload {
    #[serde(default)]
    move_in_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "double_option_date")]
    move_out_date: Option<Option<NaiveDate>>,
    #[serde(default)]
    unit_id: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct StatusPayload {
    status: String,
    start_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
struct StatusQuery {
    date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResidentFilter {
    property_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RangeParams {
    property_id: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
    format: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MonthParams {
    property_id: Option<String>,
    year: Option<String>,
    month: Option<String>,
}

pub(crate) async fn create_property_handler<S>(
    State(service): State<Arc<LeasingService<S>>>,
    axum::Json(payload): axum::Json<CreatePropertyPayload>,
) -> Response
where
    S: PortfolioStore + 'static,
{
    match service.create_property(&payload.name) {
        Ok(property) => (StatusCode::CREATED, axum::Json(property.to_view(0))).into_response(),
        Err(error) => leasing_error_response(error),
    }
}

pub(crate) async fn list_properties_handler<S>(
    State(service): State<Arc<LeasingService<S>>>,
) -> Response
where
    S: PortfolioStore + 'static,
{
    let store = service.store();
    let properties = match store.list_properties() {
        Ok(properties) => properties,
        Err(error) => return store_error_response(error),
    };
    let mut views = Vec::with_capacity(properties.len());
    for property in properties {
        let unit_count = match store.list_units_for_property(property.id) {
            Ok(units) => units.len(),
            Err(error) => return store_error_response(error),
        };
        views.push(property.to_view(unit_count));
    }
    (StatusCode::OK, axum::Json(views)).into_response()
}

pub(crate) async fn get_property_handler<S>(
    State(service): State<Arc<LeasingService<S>>>,
    Path(property_id): Path<u64>,
) -> Response
where
    S: PortfolioStore + 'static,
{
    let store = service.store();
    let property = match store.fetch_property(PropertyId(property_id)) {
        Ok(Some(property)) => property,
        Ok(None) => return json_error(StatusCode::NOT_FOUND, "property not found"),
        Err(error) => return store_error_response(error),
    };
    let unit_count = match store.list_units_for_property(property.id) {
        Ok(units) => units.len(),
        Err(error) => return store_error_response(error),
    };
    (StatusCode::OK, axum::Json(property.to_view(unit_count))).into_response()
}

pub(crate) async fn list_property_units_handler<S>(
    State(service): State<Arc<LeasingService<S>>>,
    Path(property_id): Path<u64>,
) -> Response
where
    S: PortfolioStore + 'static,
{
    let store = service.store();
    match store.fetch_property(PropertyId(property_id)) {
        Ok(Some(_)) => {}
        Ok(None) => return json_error(StatusCode::NOT_FOUND, "property not found"),
        Err(error) => return store_error_response(error),
    }
    match store.list_units_for_property(PropertyId(property_id)) {
        Ok(units) => {
            let views: Vec<_> = units.iter().map(|unit| unit.to_view()).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(error) => store_error_response(error),
    }
}

pub(crate) async fn create_unit_handler<S>(
    State(service): State<Arc<LeasingService<S>>>,
    axum::Json(payload): axum::Json<CreateUnitPayload>,
) -> Response
where
    S: PortfolioStore + 'static,
{
    match service.create_unit(PropertyId(payload.property_id), &payload.unit_number) {
        Ok(unit) => (StatusCode::CREATED, axum::Json(unit.to_view())).into_response(),
        Err(error) => leasing_error_response(error),
    }
}

pub(crate) async fn list_units_handler<S>(
    State(service): State<Arc<LeasingService<S>>>,
) -> Response
where
    S: PortfolioStore + 'static,
{
    match service.store().list_units() {
        Ok(units) => {
            let views: Vec<_> = units.iter().map(|unit| unit.to_view()).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(error) => store_error_response(error),
    }
}

pub(crate) async fn get_unit_handler<S>(
    State(service): State<Arc<LeasingService<S>>>,
    Path(unit_id): Path<u64>,
) -> Response
where
    S: PortfolioStore + 'static,
{
    let unit = match service.store().fetch_unit(UnitId(unit_id)) {
        Ok(Some(unit)) => unit,
        Ok(None) => return json_error(StatusCode::NOT_FOUND, "unit not found"),
        Err(error) => return store_error_response(error),
    };
    let today = Local::now().date_naive();
    match service.unit_status_on(unit.id, today) {
        Ok(status) => (StatusCode::OK, axum::Json(unit.to_status_view(status))).into_response(),
        Err(error) => leasing_error_response(error),
    }
}

pub(crate) async fn set_unit_status_handler<S>(
    State(service): State<Arc<LeasingService<S>>>,
    Path(unit_id): Path<u64>,
    axum::Json(payload): axum::Json<StatusPayload>,
) -> Response
where
    S: PortfolioStore + 'static,
{
    let Some(status) = UnitStatus::parse(&payload.status) else {
        return bad_request("status must be active or inactive");
    };
    match service.set_unit_status(UnitId(unit_id), status, payload.start_date) {
        Ok(event) => (StatusCode::CREATED, axum::Json(event.to_view())).into_response(),
        Err(error) => leasing_error_response(error),
    }
}

pub(crate) async fn unit_status_handler<S>(
    State(service): State<Arc<LeasingService<S>>>,
    Path(unit_id): Path<u64>,
    Query(query): Query<StatusQuery>,
) -> Response
where
    S: PortfolioStore + 'static,
{
    if let Some(raw) = query.date.as_deref() {
        let date = match parse_date(raw) {
            Ok(date) => date,
            Err(response) => return response,
        };
        return match service.unit_status_on(UnitId(unit_id), date) {
            Ok(status) => {
                let payload = json!({
                    "unit_id": unit_id,
                    "date": date,
                    "status": status.label(),
                });
                (StatusCode::OK, axum::Json(payload)).into_response()
            }
            Err(error) => leasing_error_response(error),
        };
    }

    let history = match service.status_history(UnitId(unit_id)) {
        Ok(history) => history,
        Err(error) => return leasing_error_response(error),
    };
    let today = Local::now().date_naive();
    let current = match service.unit_status_on(UnitId(unit_id), today) {
        Ok(status) => status,
        Err(error) => return leasing_error_response(error),
    };
    let views: Vec<_> = history.iter().map(|event| event.to_view()).collect();
    let payload = json!({
        "unit_id": unit_id,
        "current_status": current.label(),
        "history": views,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

/// Flattened rent timeline for a unit: one row per rent charge, with a
/// single rentless row for occupancies that have no charges yet.
pub(crate) async fn unit_rent_history_handler<S>(
    State(service): State<Arc<LeasingService<S>>>,
    Path(unit_id): Path<u64>,
) -> Response
where
    S: PortfolioStore + 'static,
{
    let store = service.store();
    let unit = match store.fetch_unit(UnitId(unit_id)) {
        Ok(Some(unit)) => unit,
        Ok(None) => return json_error(StatusCode::NOT_FOUND, "unit not found"),
        Err(error) => return store_error_response(error),
    };
    let occupancies = match store.list_occupancies_for_unit(unit.id) {
        Ok(occupancies) => occupancies,
        Err(error) => return store_error_response(error),
    };

    let mut rows = Vec::new();
    for occupancy in occupancies {
        let resident_name = match store.fetch_resident(occupancy.resident_id) {
            Ok(Some(resident)) => resident.full_name(),
            Ok(None) => continue,
            Err(error) => return store_error_response(error),
        };
        let charges = match store.list_rents_for_occupancy(occupancy.id) {
            Ok(charges) => charges,
            Err(error) => return store_error_response(error),
        };
        if charges.is_empty() {
            rows.push(json!({
                "occupancy_id": occupancy.id,
                "resident_id": occupancy.resident_id,
                "resident_name": resident_name,
                "move_in_date": occupancy.move_in_date,
                "move_out_date": occupancy.move_out_date,
                "monthly_rent": serde_json::Value::Null,
                "effective_date": serde_json::Value::Null,
            }));
            continue;
        }
        for charge in charges {
            rows.push(json!({
                "occupancy_id": occupancy.id,
                "resident_id": occupancy.resident_id,
                "resident_name": resident_name,
                "move_in_date": occupancy.move_in_date,
                "move_out_date": occupancy.move_out_date,
                "monthly_rent": charge.amount,
                "effective_date": charge.effective_date,
            }));
        }
    }
    (StatusCode::OK, axum::Json(rows)).into_response()
}

pub(crate) async fn create_resident_handler<S>(
    State(service): State<Arc<LeasingService<S>>>,
    axum::Json(payload): axum::Json<CreateResidentPayload>,
) -> Response
where
    S: PortfolioStore + 'static,
{
    match service.create_resident(&payload.first_name, &payload.last_name) {
        Ok(resident) => (StatusCode::CREATED, axum::Json(resident.to_view())).into_response(),
        Err(error) => leasing_error_response(error),
    }
}

pub(crate) async fn list_residents_handler<S>(
    State(service): State<Arc<LeasingService<S>>>,
    Query(filter): Query<ResidentFilter>,
) -> Response
where
    S: PortfolioStore + 'static,
{
    let store = service.store();
    let residents = match store.list_residents() {
        Ok(residents) => residents,
        Err(error) => return store_error_response(error),
    };

    let views: Vec<_> = if let Some(raw) = filter.property_id.as_deref() {
        let property_id = match raw.parse::<u64>() {
            Ok(value) => PropertyId(value),
            Err(_) => return bad_request("property_id must be a number"),
        };
        let units = match store.list_units_for_property(property_id) {
            Ok(units) => units,
            Err(error) => return store_error_response(error),
        };
        let unit_ids: HashSet<UnitId> = units.iter().map(|unit| unit.id).collect();
        let occupancies = match store.list_occupancies() {
            Ok(occupancies) => occupancies,
            Err(error) => return store_error_response(error),
        };
        let resident_ids: HashSet<ResidentId> = occupancies
            .iter()
            .filter(|occupancy| unit_ids.contains(&occupancy.unit_id))
            .map(|occupancy| occupancy.resident_id)
            .collect();
        residents
            .iter()
            .filter(|resident| resident_ids.contains(&resident.id))
            .map(|resident| resident.to_view())
            .collect()
    } else {
        residents.iter().map(|resident| resident.to_view()).collect()
    };
    (StatusCode::OK, axum::Json(views)).into_response()
}

pub(crate) async fn get_resident_handler<S>(
    State(service): State<Arc<LeasingService<S>>>,
    Path(resident_id): Path<u64>,
) -> Response
where
    S: PortfolioStore + 'static,
{
    let resident = match service.store().fetch_resident(ResidentId(resident_id)) {
        Ok(Some(resident)) => resident,
        Ok(None) => return json_error(StatusCode::NOT_FOUND, "resident not found"),
        Err(error) => return store_error_response(error),
    };
    let current = match service.current_occupancy(resident.id) {
        Ok(current) => current,
        Err(error) => return leasing_error_response(error),
    };
    let payload = json!({
        "id": resident.id,
        "first_name": resident.first_name,
        "last_name": resident.last_name,
        "full_name": resident.full_name(),
        "current_occupancy": current.map(|occupancy| occupancy.to_view()),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn list_occupancies_handler<S>(
    State(service): State<Arc<LeasingService<S>>>,
) -> Response
where
    S: PortfolioStore + 'static,
{
    let store = service.store();
    let occupancies = match store.list_occupancies() {
        Ok(occupancies) => occupancies,
        Err(error) => return store_error_response(error),
    };
    let mut rows = Vec::with_capacity(occupancies.len());
    for occupancy in occupancies {
        let unit = match store.fetch_unit(occupancy.unit_id) {
            Ok(Some(unit)) => unit,
            Ok(None) => continue,
            Err(error) => return store_error_response(error),
        };
        let resident = match store.fetch_resident(occupancy.resident_id) {
            Ok(Some(resident)) => resident,
            Ok(None) => continue,
            Err(error) => return store_error_response(error),
        };
        rows.push(json!({
            "id": occupancy.id,
            "unit_id": occupancy.unit_id,
            "unit_number": unit.unit_number,
            "resident_id": occupancy.resident_id,
            "resident_name": resident.full_name(),
            "move_in_date": occupancy.move_in_date,
            "move_out_date": occupancy.move_out_date,
        }));
    }
    (StatusCode::OK, axum::Json(rows)).into_response()
}

pub(crate) async fn move_in_handler<S>(
    State(service): State<Arc<LeasingService<S>>>,
    axum::Json(payload): axum::Json<MoveInPayload>,
) -> Response
where
    S: PortfolioStore + 'static,
{
    let command = MoveInCommand {
        resident_id: ResidentId(payload.resident_id),
        unit_id: UnitId(payload.unit_id),
        move_in_date: payload.move_in_date,
        move_out_date: payload.move_out_date,
        initial_rent: payload.monthly_rent,
    };
    match service.move_in(command) {
        Ok(occupancy) => (StatusCode::CREATED, axum::Json(occupancy.to_view())).into_response(),
        Err(error) => leasing_error_response(error),
    }
}

pub(crate) async fn amend_occupancy_handler<S>(
    State(service): State<Arc<LeasingService<S>>>,
    Path(occupancy_id): Path<u64>,
    axum::Json(payload): axum::Json<AmendOccupancyPayload>,
) -> Response
where
    S: PortfolioStore + 'static,
{
    let patch = AmendOccupancy {
        move_in_date: payload.move_in_date,
        move_out_date: payload.move_out_date,
        unit_id: payload.unit_id.map(UnitId),
    };
    match service.amend_occupancy(OccupancyId(occupancy_id), patch) {
        Ok(occupancy) => (StatusCode::OK, axum::Json(occupancy.to_view())).into_response(),
        Err(error) => leasing_error_response(error),
    }
}

pub(crate) async fn move_out_handler<S>(
    State(service): State<Arc<LeasingService<S>>>,
    Path(occupancy_id): Path<u64>,
    axum::Json(payload): axum::Json<MoveOutPayload>,
) -> Response
where
    S: PortfolioStore + 'static,
{
    match service.move_out(OccupancyId(occupancy_id), payload.move_out_date) {
        Ok(occupancy) => (StatusCode::OK, axum::Json(occupancy.to_view())).into_response(),
        Err(error) => leasing_error_response(error),
    }
}

pub(crate) async fn rent_change_handler<S>(
    State(service): State<Arc<LeasingService<S>>>,
    Path(occupancy_id): Path<u64>,
    axum::Json(payload): axum::Json<RentChangePayload>,
) -> Response
where
    S: PortfolioStore + 'static,
{
    match service.change_rent(OccupancyId(occupancy_id), payload.amount, payload.effective_date) {
        Ok(charge) => (StatusCode::CREATED, axum::Json(charge.to_view())).into_response(),
        Err(error) => leasing_error_response(error),
    }
}

pub(crate) async fn occupancy_rents_handler<S>(
    State(service): State<Arc<LeasingService<S>>>,
    Path(occupancy_id): Path<u64>,
) -> Response
where
    S: PortfolioStore + 'static,
{
    let store = service.store();
    let occupancy = match store.fetch_occupancy(OccupancyId(occupancy_id)) {
        Ok(Some(occupancy)) => occupancy,
        Ok(None) => return json_error(StatusCode::NOT_FOUND, "occupancy not found"),
        Err(error) => return store_error_response(error),
    };
    match store.list_rents_for_occupancy(occupancy.id) {
        Ok(charges) => {
            let views: Vec<_> = charges.iter().map(|charge| charge.to_view()).collect();
            (StatusCode::OK, axum::Json(views)).into_response()
        }
        Err(error) => store_error_response(error),
    }
}

pub(crate) async fn rent_roll_report_handler<S>(
    State(service): State<Arc<LeasingService<S>>>,
    Query(params): Query<RangeParams>,
) -> Response
where
    S: PortfolioStore + 'static,
{
    let (property_id, start_date, end_date) = match range_params(&params) {
        Ok(range) => range,
        Err(response) => return response,
    };
    let records = match generate_rent_roll(service.store(), property_id, start_date, end_date) {
        Ok(records) => records,
        Err(error) => return report_error_response(error),
    };

    if params.format.as_deref() == Some("csv") {
        let body = match rent_roll_csv(&records) {
            Ok(body) => body,
            Err(error) => return report_error_response(error),
        };
        let filename = format!("rent_roll_{}_{}_{}.csv", property_id.0, start_date, end_date);
        return (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, String::from("text/csv; charset=utf-8")),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{filename}\""),
                ),
            ],
            body,
        )
            .into_response();
    }
    (StatusCode::OK, axum::Json(records)).into_response()
}

pub(crate) async fn kpi_report_handler<S>(
    State(service): State<Arc<LeasingService<S>>>,
    Query(params): Query<RangeParams>,
) -> Response
where
    S: PortfolioStore + 'static,
{
    let (property_id, start_date, end_date) = match range_params(&params) {
        Ok(range) => range,
        Err(response) => return response,
    };
    match calculate_kpis(service.store(), property_id, start_date, end_date) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => report_error_response(error),
    }
}

pub(crate) async fn kpi_move_report_handler<S>(
    State(service): State<Arc<LeasingService<S>>>,
    Query(params): Query<RangeParams>,
) -> Response
where
    S: PortfolioStore + 'static,
{
    let (property_id, start_date, end_date) = match range_params(&params) {
        Ok(range) => range,
        Err(response) => return response,
    };
    match move_in_out_counts(service.store(), property_id, start_date, end_date) {
        Ok(activity) => (StatusCode::OK, axum::Json(activity)).into_response(),
        Err(error) => report_error_response(error),
    }
}

pub(crate) async fn kpi_occupancy_report_handler<S>(
    State(service): State<Arc<LeasingService<S>>>,
    Query(params): Query<MonthParams>,
) -> Response
where
    S: PortfolioStore + 'static,
{
    let (Some(property_id), Some(year), Some(month)) = (
        params.property_id.as_deref(),
        params.year.as_deref(),
        params.month.as_deref(),
    ) else {
        return bad_request("property_id, year and month are required");
    };
    let property_id = match property_id.parse::<u64>() {
        Ok(value) => PropertyId(value),
        Err(_) => return bad_request("property_id must be a number"),
    };
    let (Ok(year), Ok(month)) = (year.parse::<i32>(), month.parse::<u32>()) else {
        return bad_request("year and month must be numbers");
    };
    match occupancy_rate_for_month(service.store(), property_id, year, month) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => report_error_response(error),
    }
}

fn range_params(params: &RangeParams) -> Result<(PropertyId, NaiveDate, NaiveDate), Response> {
    let (Some(property_id), Some(start), Some(end)) = (
        params.property_id.as_deref(),
        params.start_date.as_deref(),
        params.end_date.as_deref(),
    ) else {
        return Err(bad_request(
            "property_id, start_date and end_date are required",
        ));
    };
    let property_id = property_id
        .parse::<u64>()
        .map(PropertyId)
        .map_err(|_| bad_request("property_id must be a number"))?;
    Ok((property_id, parse_date(start)?, parse_date(end)?))
}

fn parse_date(value: &str) -> Result<NaiveDate, Response> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| bad_request("dates must use the YYYY-MM-DD format"))
}

fn double_option_date<'de, D>(deserializer: D) -> Result<Option<Option<NaiveDate>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<NaiveDate>::deserialize(deserializer).map(Some)
}

fn json_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(json!({ "error": message }))).into_response()
}

fn bad_request(message: &str) -> Response {
    json_error(StatusCode::BAD_REQUEST, message)
}

fn leasing_error_response(error: LeasingError) -> Response {
    let status = match &error {
        LeasingError::NotFound { .. } => StatusCode::NOT_FOUND,
        LeasingError::UnitOccupied { .. }
        | LeasingError::ResidentUnavailable { .. }
        | LeasingError::OccupancyOverlap
        | LeasingError::DuplicateRent { .. }
        | LeasingError::DuplicateStatus { .. } => StatusCode::CONFLICT,
        LeasingError::Store(StoreError::NotFound) => StatusCode::NOT_FOUND,
        LeasingError::Store(StoreError::Conflict) => StatusCode::CONFLICT,
        LeasingError::Store(StoreError::Unavailable(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    };
    json_error(status, &error.to_string())
}

fn report_error_response(error: ReportError) -> Response {
    let status = match &error {
        ReportError::Csv(_) | ReportError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    };
    json_error(status, &error.to_string())
}

fn store_error_response(error: StoreError) -> Response {
    let status = match &error {
        StoreError::Conflict => StatusCode::CONFLICT,
        StoreError::NotFound => StatusCode::NOT_FOUND,
        StoreError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    json_error(status, &error.to_string())
}
