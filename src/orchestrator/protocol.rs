//! HTTP Protocol Definitions
//!
//! Request/response bodies for the client API (`/api/v1/...`) and the worker
//! poll/ack protocol (`/internal/task`). The agent crate reuses the worker DTOs.

use super::types::*;
use serde::{Deserialize, Serialize};

pub const ENDPOINT_CALCULATE: &str = "/api/v1/calculate";
pub const ENDPOINT_EXPRESSIONS: &str = "/api/v1/expressions";
pub const ENDPOINT_EXPRESSION_BY_ID: &str = "/api/v1/expressions/:id";
pub const ENDPOINT_TASK: &str = "/internal/task";

pub const NO_TASKS_MESSAGE: &str = "No tasks available";

#[derive(Debug, Serialize, Deserialize)]
pub struct CalculateRequest {
    pub expression: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub id: ExpressionId,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExpressionsResponse {
    pub expressions: Vec<Expression>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExpressionResponse {
    pub expression: Expression,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TaskResponse {
    pub task: Task,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TaskResultRequest {
    pub id: ExpressionId,
    pub result: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TaskResultResponse {
    pub status: String,
}

impl TaskResultResponse {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
