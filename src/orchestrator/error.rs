use super::protocol::MessageResponse;
use super::types::ExpressionId;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Reasons an expression cannot be turned into a task.
///
/// These never reach an HTTP caller directly: the expression moves to `error`
/// and clients find out by polling it.
#[derive(Debug, Error, PartialEq)]
pub enum DecomposeError {
    #[error("malformed expression: expected `operand operator operand ...`, got {token_count} token(s)")]
    Malformed { token_count: usize },

    #[error("unknown operator `{0}`")]
    UnknownOperator(String),

    #[error("operand `{0}` is not a number")]
    BadOperand(String),
}

/// Errors surfaced by the dispatch engine and its HTTP handlers.
#[derive(Debug, Error, PartialEq)]
pub enum OrchestratorError {
    #[error("Invalid data: {0}")]
    MalformedRequest(String),

    #[error("Invalid expression id: {0}")]
    InvalidExpressionId(String),

    #[error("Expression {0} not found")]
    ExpressionNotFound(ExpressionId),

    /// An integer id outside the range ids are assigned from (`1..=u64::MAX`).
    #[error("Expression {0} not found")]
    ExpressionIdOutOfRange(i128),

    #[error("Task {0} not found")]
    TaskNotFound(ExpressionId),
}

impl OrchestratorError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            OrchestratorError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            OrchestratorError::InvalidExpressionId(_) => StatusCode::BAD_REQUEST,
            OrchestratorError::ExpressionNotFound(_) => StatusCode::NOT_FOUND,
            OrchestratorError::ExpressionIdOutOfRange(_) => StatusCode::NOT_FOUND,
            OrchestratorError::TaskNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for OrchestratorError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(MessageResponse {
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
