//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::run_payroll;
use crate::config::SystemConfig;
use crate::error::EngineResult;
use crate::models::{PayrollRun, PayrollTotals};

use super::request::PayrollRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/payroll/calculate", post(calculate_payroll_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Handler for POST /payroll/calculate.
///
/// Accepts the collections for one payroll run and returns a [`PayrollRun`].
async fn calculate_payroll_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    let request = match payload {
        Ok(Json(req)) => req,
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
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return json_response(StatusCode::BAD_REQUEST, error);
        }
    };

    let config = match request.config.clone() {
        Some(config) => {
            info!(correlation_id = %correlation_id, "Using request configuration override");
            Arc::new(config)
        }
        None => state.config(),
    };
    let employee_count = request.employees.len();

    let outcome = tokio::task::spawn_blocking(move || perform_payroll(&request, &config)).await;

    match outcome {
        Ok(Ok(run)) => {
            info!(
                correlation_id = %correlation_id,
                calculation_id = %run.calculation_id,
                employees_submitted = employee_count,
                line_items = run.items.len(),
                net_total = %run.totals.net_total,
                duration_us = run.duration_us,
                "Payroll calculation completed successfully"
            );
            json_response(StatusCode::OK, run)
        }
        Ok(Err(err)) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payroll calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            json_response(api_error.status, api_error.error)
        }
        Err(join_error) => {
            warn!(
                correlation_id = %correlation_id,
                error = %join_error,
                "Payroll calculation task failed"
            );
            json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::internal("Payroll calculation did not complete"),
            )
        }
    }
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Runs the payroll and wraps the line items in a run envelope.
fn perform_payroll(request: &PayrollRequest, config: &SystemConfig) -> EngineResult<PayrollRun> {
    let start_time = Instant::now();
    let period = request.parameters.period.resolve()?;

    let items = run_payroll(
        &request.employees,
        &request.attendance,
        &request.ot_requests,
        &request.swap_requests,
        config,
        &request.parameters,
    )?;
    let totals = PayrollTotals::from_items(&items);

    Ok(PayrollRun {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        period,
        items,
        totals,
        duration_us: u64::try_from(start_time.elapsed().as_micros()).unwrap_or(u64::MAX),
    })
}
