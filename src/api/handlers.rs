//! HTTP request handlers for the HR API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Form, Json, Router,
    extract::{
        State,
        rejection::{FormRejection, JsonRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_timesheet;
use crate::error::HrResult;
use crate::export::{csv_file_name, timesheet_csv};
use crate::models::TimesheetSummary;

use super::request::{EmployeeForm, OvertimeForm, TimesheetRequest};
use super::response::{ApiError, ApiErrorResponse, EmployeeList};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(overtime_handler))
        .route(
            "/funcionarios",
            get(list_employees_handler).post(register_employee_handler),
        )
        .route("/timesheet", post(timesheet_handler))
        .route("/timesheet/csv", post(timesheet_csv_handler))
        .with_state(state)
}

fn json_ok<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn form_body<T>(
    correlation_id: Uuid,
    payload: Result<Form<T>, FormRejection>,
) -> Result<T, ApiErrorResponse> {
    match payload {
        Ok(Form(form)) => Ok(form),
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Form rejected"
            );
            let error = match rejection {
                FormRejection::InvalidFormContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/x-www-form-urlencoded",
                ),
                other => ApiError::validation_error(other.body_text()),
            };
            Err(ApiErrorResponse::bad_request(error))
        }
    }
}

fn json_body<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, ApiErrorResponse> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
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
            Err(ApiErrorResponse::bad_request(error))
        }
    }
}

/// Handler for `POST /`.
///
/// Reads the `salario`, `he50` and `he100` form fields and returns the
/// computed overtime pay.
async fn overtime_handler(payload: Result<Form<OvertimeForm>, FormRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing overtime request");

    let form = match form_body(correlation_id, payload) {
        Ok(form) => form,
        Err(err) => return err.into_response(),
    };

    let start_time = Instant::now();
    match form.parse().and_then(|request| request.compute()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                hourly_rate = %result.hourly_rate,
                total = %result.total,
                duration_us = start_time.elapsed().as_micros(),
                "Overtime calculated"
            );
            json_ok(result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Overtime calculation rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `GET /funcionarios`.
async fn list_employees_handler(State(state): State<AppState>) -> Response {
    let employees = state.registry().list_all();
    info!(count = employees.len(), "Listing employees");
    json_ok(EmployeeList { employees })
}

/// Handler for `POST /funcionarios`.
///
/// Registers the employee and redirects back to the listing.
async fn register_employee_handler(
    State(state): State<AppState>,
    payload: Result<Form<EmployeeForm>, FormRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing employee registration");

    let form = match form_body(correlation_id, payload) {
        Ok(form) => form,
        Err(err) => return err.into_response(),
    };

    let registered = form.parse().and_then(|employee| {
        state
            .registry()
            .register(&employee.name, &employee.role, employee.salary)
    });

    match registered {
        Ok(employee) => {
            info!(
                correlation_id = %correlation_id,
                name = %employee.name,
                role = %employee.role,
                registry_size = state.registry().len(),
                "Employee registered"
            );
            Redirect::to("/funcionarios").into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Employee registration rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

fn build_timesheet(state: &AppState, request: &TimesheetRequest) -> HrResult<TimesheetSummary> {
    let config = state.timesheet();
    let days = request.work_days(config)?;
    compute_timesheet(request.year, request.month, request.salary, &days, config)
}

/// Handler for `POST /timesheet`.
async fn timesheet_handler(
    State(state): State<AppState>,
    payload: Result<Json<TimesheetRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing timesheet request");

    let request = match json_body(correlation_id, payload) {
        Ok(request) => request,
        Err(err) => return err.into_response(),
    };

    let start_time = Instant::now();
    match build_timesheet(&state, &request) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                year = summary.year,
                month = summary.month,
                worked_hours = %summary.totals.worked_hours,
                net_total = %summary.totals.net_total,
                duration_us = start_time.elapsed().as_micros(),
                "Timesheet computed"
            );
            json_ok(summary)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Timesheet rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for `POST /timesheet/csv`.
///
/// Same input as `/timesheet`; returns the report as a CSV download.
async fn timesheet_csv_handler(
    State(state): State<AppState>,
    payload: Result<Json<TimesheetRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing timesheet export");

    let request = match json_body(correlation_id, payload) {
        Ok(request) => request,
        Err(err) => return err.into_response(),
    };

    match build_timesheet(&state, &request) {
        Ok(summary) => {
            let file_name = csv_file_name(&summary);
            let csv = timesheet_csv(&summary);
            info!(
                correlation_id = %correlation_id,
                file_name = %file_name,
                bytes = csv.len(),
                "Timesheet exported"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", file_name),
                    ),
                ],
                csv,
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Timesheet export rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::models::{Employee, OvertimeResult};
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use tower::ServiceExt;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_state() -> AppState {
        AppState::new(ConfigLoader::default())
    }

    fn form_request(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn json_request(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn test_overtime_form_returns_200() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(form_request("/", "salario=2200&he50=10&he100=5"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let result: OvertimeResult = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(result.hourly_rate, dec("10.00"));
        assert_eq!(result.pay_50, dec("150.00"));
        assert_eq!(result.pay_100, dec("100.00"));
        assert_eq!(result.total, dec("250.00"));
    }

    #[tokio::test]
    async fn test_overtime_negative_salary_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(form_request("/", "salario=-100&he50=0&he100=0"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "INVALID_INPUT");
        assert_eq!(error.details.as_deref(), Some("salario"));
    }

    #[tokio::test]
    async fn test_overtime_missing_field_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(form_request("/", "salario=2200&he50=1"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(error.message.contains("he100"));
    }

    #[tokio::test]
    async fn test_overtime_wrong_content_type_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(json_request("/", r#"{"salario":"2200"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "MISSING_CONTENT_TYPE");
    }

    #[tokio::test]
    async fn test_register_redirects_and_stores() {
        let state = create_test_state();
        let router = create_router(state.clone());

        let response = router
            .oneshot(form_request(
                "/funcionarios",
                "nome=Ana&cargo=Analyst&salario=3000.50",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get("location").unwrap(), "/funcionarios");
        assert_eq!(
            state.registry().list_all(),
            vec![Employee {
                name: "Ana".to_string(),
                role: "Analyst".to_string(),
                salary: dec("3000.50"),
            }]
        );
    }

    #[tokio::test]
    async fn test_register_empty_name_returns_400() {
        let state = create_test_state();
        let router = create_router(state.clone());

        let response = router
            .oneshot(form_request("/funcionarios", "nome=&cargo=Analyst&salario=1000"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.details.as_deref(), Some("nome"));
        assert!(state.registry().is_empty());
    }

    #[tokio::test]
    async fn test_list_employees() {
        let state = create_test_state();
        state
            .registry()
            .register("Ana", "Analyst", dec("3000.50"))
            .unwrap();
        let router = create_router(state);

        let response = router
            .oneshot(
                Request::builder()
                    .uri("/funcionarios")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let list: EmployeeList = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(list.employees.len(), 1);
        assert_eq!(list.employees[0].name, "Ana");
    }

    #[tokio::test]
    async fn test_timesheet_standard_schedule() {
        let router = create_router(create_test_state());
        let body = r#"{"salary": "2200", "year": 2026, "month": 1, "use_standard_schedule": true}"#;

        let response = router
            .oneshot(json_request("/timesheet", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let summary: TimesheetSummary =
            serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(summary.days.len(), 31);
        assert_eq!(summary.totals.net_total, dec("2260.00"));
    }

    #[tokio::test]
    async fn test_timesheet_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(json_request("/timesheet", "{invalid json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_timesheet_missing_field_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(json_request("/timesheet", r#"{"salary": "2200", "year": 2026}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_timesheet_invalid_month_returns_400() {
        let router = create_router(create_test_state());
        let body = r#"{"salary": "2200", "year": 2026, "month": 13}"#;

        let response = router
            .oneshot(json_request("/timesheet", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_timesheet_csv_download() {
        let router = create_router(create_test_state());
        let body = r#"{"salary": "2200", "year": 2026, "month": 1, "use_standard_schedule": true}"#;

        let response = router
            .oneshot(json_request("/timesheet/csv", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/csv; charset=utf-8"
        );
        assert_eq!(
            response.headers().get("content-disposition").unwrap(),
            "attachment; filename=\"controle_horas_1_2026.csv\""
        );

        let csv = String::from_utf8(body_bytes(response).await).unwrap();
        assert!(csv.starts_with('\u{FEFF}'));
        assert!(csv.contains("Total Líquido;R$ 2.260,00"));
    }
}
