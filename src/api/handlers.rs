//! HTTP request handlers for the finance display API.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_daily_pay_earned, calculate_incoming_pay};
use crate::calendar;
use crate::config::ChartConfig;
use crate::models::{BalanceSnapshot, FinanceData, Job, WorkLog};

use super::request::{NewBalanceSnapshot, NewWorkLog};
use super::response::{ApiError, ApiErrorResponse, ApiOk, IncomingPayResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
///
/// The router is mounted under `/api` by the server binary; paths here
/// are relative to that prefix.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/data", get(get_data))
        .route("/chart-config", get(get_chart_config))
        .route("/incoming", get(get_incoming))
        .route("/work-logs", post(create_work_log))
        .route(
            "/work-logs/:id",
            put(replace_work_log).delete(delete_work_log),
        )
        .route("/snapshots", post(create_snapshot))
        .route(
            "/snapshots/:id",
            put(replace_snapshot).delete(delete_snapshot),
        )
        .route("/jobs", post(upsert_job))
        .route("/jobs/:id", delete(delete_job))
        .with_state(state)
}

/// Unwraps a JSON body, mapping axum rejections to structured errors.
fn parse_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiErrorResponse> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err(ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            })
        }
    }
}

/// Handler for `GET /data`: the full bundle the kiosk polls.
async fn get_data(State(state): State<AppState>) -> Json<FinanceData> {
    let store = state.store().read().await;
    Json(store.data().clone())
}

/// Handler for `GET /chart-config`.
async fn get_chart_config(State(state): State<AppState>) -> Json<ChartConfig> {
    Json(state.chart().clone())
}

/// Query parameters for `GET /incoming`.
#[derive(Debug, Deserialize)]
struct IncomingQuery {
    /// Target date; defaults to today in the fixed local zone.
    date: Option<String>,
}

/// Handler for `GET /incoming`: the engine's entry point.
async fn get_incoming(
    State(state): State<AppState>,
    Query(query): Query<IncomingQuery>,
) -> Result<Json<IncomingPayResponse>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();

    let target_day_index = match &query.date {
        Some(date) => calendar::date_to_day_index(date).map_err(|err| {
            warn!(correlation_id = %correlation_id, date = %date, "Bad incoming-pay date");
            ApiErrorResponse::from(err)
        })?,
        None => calendar::today_day_index(),
    };
    let date = calendar::day_index_to_date_string(target_day_index)?;

    let store = state.store().read().await;
    let incoming = calculate_incoming_pay(target_day_index, store.work_logs())?;
    let daily_earned = calculate_daily_pay_earned(target_day_index, store.work_logs())?;

    info!(
        correlation_id = %correlation_id,
        %date,
        incoming,
        daily_earned,
        "Computed incoming pay"
    );
    Ok(Json(IncomingPayResponse {
        date,
        incoming,
        daily_earned,
    }))
}

/// Handler for `POST /work-logs`.
async fn create_work_log(
    State(state): State<AppState>,
    payload: Result<Json<NewWorkLog>, JsonRejection>,
) -> Result<Json<WorkLog>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let request = parse_body(payload)?;
    request.validate().inspect_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Rejected work log");
    })?;

    let mut store = state.store().write().await;
    let log = store.add_work_log(request.into())?;
    info!(correlation_id = %correlation_id, id = log.id, date = %log.date, "Created work log");
    Ok(Json(log))
}

/// Handler for `PUT /work-logs/:id`: replace in place, keeping the id.
async fn replace_work_log(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<NewWorkLog>, JsonRejection>,
) -> Result<Json<WorkLog>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let request = parse_body(payload)?;
    request.validate()?;

    let mut store = state.store().write().await;
    let log = store.replace_work_log(id, request.into())?;
    info!(correlation_id = %correlation_id, id, "Replaced work log");
    Ok(Json(log))
}

/// Handler for `DELETE /work-logs/:id`.
async fn delete_work_log(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiOk>, ApiErrorResponse> {
    let mut store = state.store().write().await;
    store.delete_work_log(id)?;
    info!(id, "Deleted work log");
    Ok(Json(ApiOk { ok: true }))
}

/// Handler for `POST /snapshots`.
async fn create_snapshot(
    State(state): State<AppState>,
    payload: Result<Json<NewBalanceSnapshot>, JsonRejection>,
) -> Result<Json<BalanceSnapshot>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let request = parse_body(payload)?;
    request.validate().inspect_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Rejected snapshot");
    })?;

    let mut store = state.store().write().await;
    let snapshot = store.add_snapshot(request.into())?;
    info!(correlation_id = %correlation_id, id = snapshot.id, "Created snapshot");
    Ok(Json(snapshot))
}

/// Handler for `PUT /snapshots/:id`.
async fn replace_snapshot(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<NewBalanceSnapshot>, JsonRejection>,
) -> Result<Json<BalanceSnapshot>, ApiErrorResponse> {
    let request = parse_body(payload)?;
    request.validate()?;

    let mut store = state.store().write().await;
    let snapshot = store.replace_snapshot(id, request.into())?;
    info!(id, "Replaced snapshot");
    Ok(Json(snapshot))
}

/// Handler for `DELETE /snapshots/:id`.
async fn delete_snapshot(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiOk>, ApiErrorResponse> {
    let mut store = state.store().write().await;
    store.delete_snapshot(id)?;
    info!(id, "Deleted snapshot");
    Ok(Json(ApiOk { ok: true }))
}

/// Handler for `POST /jobs`: insert or update by the job's string id.
async fn upsert_job(
    State(state): State<AppState>,
    payload: Result<Json<Job>, JsonRejection>,
) -> Result<Json<Job>, ApiErrorResponse> {
    let job = parse_body(payload)?;
    if job.id.trim().is_empty() {
        return Err(ApiErrorResponse {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::new("VALIDATION_ERROR", "Job id must not be empty"),
        });
    }

    let mut store = state.store().write().await;
    let job = store.upsert_job(job)?;
    info!(id = %job.id, "Upserted job");
    Ok(Json(job))
}

/// Handler for `DELETE /jobs/:id`.
async fn delete_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiOk>, ApiErrorResponse> {
    let mut store = state.store().write().await;
    store.delete_job(&id)?;
    info!(%id, "Deleted job");
    Ok(Json(ApiOk { ok: true }))
}
