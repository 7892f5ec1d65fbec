use super::dispatcher::Orchestrator;
use super::error::OrchestratorError;
use super::protocol::*;
use super::types::*;

use axum::extract::rejection::JsonRejection;
use axum::routing::{get, post};
use axum::{extract::Path, http::StatusCode, Extension, Json, Router};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;

/// Requests taking longer than this are answered with 408.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the coordinator's HTTP surface: client API, worker protocol and CORS.
pub fn build_router(orchestrator: Arc<Orchestrator>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(ENDPOINT_CALCULATE, post(handle_calculate))
        .route(ENDPOINT_EXPRESSIONS, get(handle_list_expressions))
        .route(ENDPOINT_EXPRESSION_BY_ID, get(handle_get_expression))
        .route(ENDPOINT_TASK, get(handle_poll_task).post(handle_submit_result))
        .layer(Extension(orchestrator))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(cors)
}

pub async fn handle_calculate(
    Extension(orchestrator): Extension<Arc<Orchestrator>>,
    payload: Result<Json<CalculateRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CalculateResponse>), OrchestratorError> {
    let Json(req) = payload.map_err(|e| {
        tracing::warn!("Failed to decode calculate request: {}", e);
        OrchestratorError::MalformedRequest(e.body_text())
    })?;

    if req.expression.trim().is_empty() {
        return Err(OrchestratorError::MalformedRequest(
            "expression is empty".to_string(),
        ));
    }

    let id = orchestrator.add_expression(req.expression);
    Ok((StatusCode::CREATED, Json(CalculateResponse { id })))
}

pub async fn handle_list_expressions(
    Extension(orchestrator): Extension<Arc<Orchestrator>>,
) -> (StatusCode, Json<ExpressionsResponse>) {
    (
        StatusCode::OK,
        Json(ExpressionsResponse {
            expressions: orchestrator.list_expressions(),
        }),
    )
}

pub async fn handle_get_expression(
    Extension(orchestrator): Extension<Arc<Orchestrator>>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<ExpressionResponse>), OrchestratorError> {
    let id = parse_expression_id(&id_str)?;
    let expression = orchestrator.get_expression(id)?;
    tracing::debug!("Expression query: {} -> {:?}", id, expression.status);

    Ok((StatusCode::OK, Json(ExpressionResponse { expression })))
}

/// Any integer is a well-formed id. Only non-integers are rejected as invalid;
/// integers that can never have been assigned are simply not found.
fn parse_expression_id(raw: &str) -> Result<ExpressionId, OrchestratorError> {
    let value: i128 = raw
        .trim()
        .parse()
        .map_err(|_| OrchestratorError::InvalidExpressionId(raw.to_string()))?;

    match u64::try_from(value) {
        Ok(id) if id > 0 => Ok(ExpressionId(id)),
        _ => Err(OrchestratorError::ExpressionIdOutOfRange(value)),
    }
}

pub async fn handle_poll_task(
    Extension(orchestrator): Extension<Arc<Orchestrator>>,
) -> Result<(StatusCode, Json<TaskResponse>), (StatusCode, Json<MessageResponse>)> {
    match orchestrator.poll_task() {
        Some(task) => Ok((StatusCode::OK, Json(TaskResponse { task }))),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(MessageResponse {
                message: NO_TASKS_MESSAGE.to_string(),
            }),
        )),
    }
}

pub async fn handle_submit_result(
    Extension(orchestrator): Extension<Arc<Orchestrator>>,
    payload: Result<Json<TaskResultRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TaskResultResponse>), OrchestratorError> {
    let Json(req) = payload.map_err(|e| {
        tracing::warn!("Failed to decode task result: {}", e);
        OrchestratorError::MalformedRequest(e.body_text())
    })?;

    orchestrator.submit_result(req.id, req.result)?;
    Ok((StatusCode::OK, Json(TaskResultResponse::success())))
}
