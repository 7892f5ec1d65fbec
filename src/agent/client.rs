//! Orchestrator HTTP Client
//!
//! The worker side of the `/internal/task` protocol: poll for a task, post a result.

use crate::orchestrator::protocol::{TaskResponse, TaskResultRequest, ENDPOINT_TASK};
use crate::orchestrator::types::{ExpressionId, Task};

use anyhow::Result;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct OrchestratorClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl OrchestratorClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            http_client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn task_url(&self) -> String {
        format!("{}{}", self.base_url, ENDPOINT_TASK)
    }

    /// Asks the orchestrator for the next task.
    ///
    /// Returns `Ok(None)` when the queue is empty (404).
    pub async fn fetch_task(&self) -> Result<Option<Task>> {
        let response = self
            .http_client
            .get(self.task_url())
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "Unexpected status polling for task: {}",
                response.status()
            ));
        }

        let body: TaskResponse = response.json().await?;
        Ok(Some(body.task))
    }

    /// Reports a result. Any non-2xx answer (e.g. 404 for an unknown task) is an error.
    pub async fn send_result(&self, id: ExpressionId, result: f64) -> Result<()> {
        let payload = TaskResultRequest { id, result };

        let response = self
            .http_client
            .post(self.task_url())
            .json(&payload)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow::anyhow!(
                "Result for task {} rejected: {}",
                id,
                response.status()
            ));
        }

        Ok(())
    }
}

fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim();
    let normalized = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };

    normalized.trim_end_matches('/').to_string()
}
