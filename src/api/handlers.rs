//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints. The
//! calculation itself never fails on user data — malformed times and
//! dates degrade to zero/defaults — so the only error responses here are
//! for unparseable JSON and structurally invalid requests.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    compute_day_money, compute_net_hours, compute_range_summary, resolve_cycles,
};
use crate::config::Settings;
use crate::error::EngineError;

use super::request::{ComputeRequest, CyclesRequest, PeriodKind, SummaryRequest};
use super::response::{ApiError, ApiErrorResponse, DayComputation, SummaryResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/records/compute", post(compute_records_handler))
        .route("/summary", post(summary_handler))
        .route("/cycles/resolve", post(resolve_cycles_handler))
        .with_state(state)
}

/// Handler for `POST /records/compute`.
///
/// Computes net hours and the money breakdown for every record in the
/// request, using the request's settings override when present.
async fn compute_records_handler(
    State(state): State<AppState>,
    payload: Result<Json<ComputeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match accept_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let settings = effective_settings(&state, request.settings);
    let results: Vec<DayComputation> = request
        .records
        .iter()
        .map(|record| DayComputation {
            date: record.date.clone(),
            computed: compute_net_hours(record, &settings),
            money: compute_day_money(record, &settings),
        })
        .collect();

    info!(
        correlation_id = %correlation_id,
        records = results.len(),
        "Computed day records"
    );
    ok_json(Json(results))
}

/// Handler for `POST /summary`.
///
/// Aggregates records over an explicit half-open date range, or over the
/// salary/OT cycle resolved from a selected month.
async fn summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match accept_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let settings = effective_settings(&state, request.settings);

    let (date_from, date_to_exclusive, cycle, period) =
        match (&request.date_from, &request.date_to_exclusive, &request.month) {
            (Some(from), Some(to), _) => (from.clone(), to.clone(), None, None),
            (_, _, Some(month)) => {
                let period = request.period.unwrap_or_default();
                let resolution = resolve_cycles(&settings, month);
                let context = match period {
                    PeriodKind::Salary => resolution.salary,
                    PeriodKind::Ot => resolution.ot,
                };
                (
                    context.range.date_from.clone(),
                    context.range.date_to_exclusive.clone(),
                    Some(context),
                    Some(period),
                )
            }
            _ => {
                warn!(correlation_id = %correlation_id, "Summary request without range or month");
                let error = EngineError::InvalidRequest {
                    message: "either dateFrom/dateToExclusive or month is required".to_string(),
                };
                return ApiErrorResponse::from(error).into_response();
            }
        };

    let summary =
        compute_range_summary(&request.records, &settings, &date_from, &date_to_exclusive);

    info!(
        correlation_id = %correlation_id,
        date_from = %date_from,
        date_to_exclusive = %date_to_exclusive,
        days_paid = summary.days_paid,
        "Computed range summary"
    );
    ok_json(Json(SummaryResponse {
        summary,
        cycle,
        period,
    }))
}

/// Handler for `POST /cycles/resolve`.
///
/// Resolves the salary, OT, and previous-OT cycle windows and pay dates
/// for a selected month.
async fn resolve_cycles_handler(
    State(state): State<AppState>,
    payload: Result<Json<CyclesRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match accept_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let settings = effective_settings(&state, request.settings);
    let resolution = resolve_cycles(&settings, &request.month);

    info!(
        correlation_id = %correlation_id,
        month = %resolution.month,
        salary_pay_date = %resolution.salary.pay_date,
        ot_pay_date = %resolution.ot.pay_date,
        "Resolved cycles"
    );
    ok_json(Json(resolution))
}

/// The settings snapshot for one call: the request override when present,
/// otherwise the startup snapshot.
fn effective_settings(state: &AppState, override_settings: Option<Settings>) -> Settings {
    override_settings.unwrap_or_else(|| state.settings().clone())
}

/// Unwraps a JSON payload, mapping rejections to 400 responses.
fn accept_json<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err((
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response())
        }
    }
}

fn ok_json<T: IntoResponse>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}
