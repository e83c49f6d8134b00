use axum::{
    Router,
    extract::{Json, Query},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::{ParamArgs, build_params};
use crate::core::{ProjectionParams, ProjectionResult, ProjectionSummary, YearRecord, project};
use crate::i18n::Language;
use crate::report::{Report, build_report, error_message};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ProjectPayload {
    current_age: Option<u32>,
    retirement_age: Option<u32>,
    current_savings: Option<f64>,
    monthly_income: Option<f64>,
    monthly_expenses: Option<f64>,
    income_growth_rate: Option<f64>,
    inflation_rate: Option<f64>,
    annual_return: Option<f64>,
    currency: Option<String>,
    lang: Option<String>,
}

#[derive(Debug)]
struct ApiRequest {
    params: ProjectionParams,
    lang: Language,
    currency: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub params: ProjectionParams,
    pub lang: Language,
    pub currency: String,
    pub years: Vec<YearRecord>,
    pub summary: ProjectionSummary,
    pub report: Report,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'static str>,
}

pub fn build_project_response(
    params: &ProjectionParams,
    result: &ProjectionResult,
    lang: Language,
    currency: &str,
) -> ProjectResponse {
    ProjectResponse {
        params: *params,
        lang,
        currency: currency.to_string(),
        years: result.years.clone(),
        summary: result.summary,
        report: build_report(params, result, lang, currency),
    }
}

pub fn router() -> Router {
    Router::new()
        .route(
            "/api/project",
            get(project_get_handler).post(project_post_handler),
        )
        .route("/api/health", get(health_handler))
        .fallback(not_found_handler)
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "projection API listening");
    info!("local access: http://127.0.0.1:{port}/api/project");

    axum::serve(listener, router()).await
}

async fn health_handler() -> Response {
    json_response(StatusCode::OK, serde_json::json!({ "status": "ok" }))
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found", None)
}

async fn project_get_handler(Query(payload): Query<ProjectPayload>) -> Response {
    project_handler_impl(payload)
}

async fn project_post_handler(Json(payload): Json<ProjectPayload>) -> Response {
    project_handler_impl(payload)
}

fn project_handler_impl(payload: ProjectPayload) -> Response {
    let request = match api_request_from_payload(payload) {
        Ok(request) => request,
        Err(msg) => {
            warn!(error = %msg, "rejected projection request");
            return error_response(StatusCode::BAD_REQUEST, &msg, None);
        }
    };

    match project(&request.params) {
        Ok(result) => {
            info!(
                years = result.years.len(),
                lang = %request.lang,
                "projection served"
            );
            let response =
                build_project_response(&request.params, &result, request.lang, &request.currency);
            json_response(StatusCode::OK, response)
        }
        Err(err) => {
            warn!(code = err.code(), error = %err, "projection inputs failed validation");
            error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                &error_message(request.lang, &err),
                Some(err.code()),
            )
        }
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}

fn error_response(status: StatusCode, msg: &str, code: Option<&'static str>) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
            code,
        },
    )
}

#[cfg(test)]
fn api_request_from_json(json: &str) -> Result<ApiRequest, String> {
    let payload = serde_json::from_str::<ProjectPayload>(json)
        .map_err(|e| format!("Invalid API JSON payload: {e}"))?;
    api_request_from_payload(payload)
}

fn api_request_from_payload(payload: ProjectPayload) -> Result<ApiRequest, String> {
    let mut args = ParamArgs::default();

    if let Some(v) = payload.current_age {
        args.current_age = v;
    }
    if let Some(v) = payload.retirement_age {
        args.retirement_age = v;
    }
    if let Some(v) = payload.current_savings {
        args.current_savings = v;
    }
    if let Some(v) = payload.monthly_income {
        args.monthly_income = v;
    }
    if let Some(v) = payload.monthly_expenses {
        args.monthly_expenses = v;
    }
    if let Some(v) = payload.income_growth_rate {
        args.income_growth_rate = v;
    }
    if let Some(v) = payload.inflation_rate {
        args.inflation_rate = v;
    }
    if let Some(v) = payload.annual_return {
        args.annual_return = v;
    }
    if let Some(v) = payload.currency {
        args.currency = v;
    }
    if let Some(v) = payload.lang {
        args.lang = v.parse()?;
    }

    let params = build_params(&args)?;
    Ok(ApiRequest {
        params,
        lang: args.lang,
        currency: args.currency,
    })
}
