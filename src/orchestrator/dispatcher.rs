//! Dispatch Engine
//!
//! Orchestrates intake, decomposition, queueing and result reconciliation.
//!
//! ## Lifecycle
//! 1. **Intake**: `add_expression` stores a `Pending` expression and returns its id at once.
//! 2. **Decomposition**: a detached tokio task turns the text into one `Task`, or marks
//!    the expression `Error` if it cannot.
//! 3. **Dispatch**: workers pull tasks with `poll_task` (never blocks).
//! 4. **Reconciliation**: `submit_result` removes the task from the correlation index
//!    and completes the expression.
//!
//! A task handed to a worker that never reports back stays in the correlation index
//! forever; there is no lease or requeue.

use super::decomposer::decompose;
use super::error::OrchestratorError;
use super::queue::{TaskQueue, DEFAULT_QUEUE_CAPACITY};
use super::store::ExpressionStore;
use super::timing::OperationTimings;
use super::types::*;

use serde::Serialize;
use std::sync::Arc;

/// Snapshot of the engine's counters, logged periodically by the binary.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct OrchestratorStats {
    pub queued: usize,
    pub in_flight: usize,
    pub pending: usize,
    pub completed: usize,
    pub error: usize,
}

pub struct Orchestrator {
    store: Arc<ExpressionStore>,
    queue: Arc<TaskQueue>,
    timings: OperationTimings,
}

impl Orchestrator {
    pub fn new(timings: OperationTimings) -> Arc<Self> {
        Self::with_capacity(timings, DEFAULT_QUEUE_CAPACITY)
    }

    pub fn with_capacity(timings: OperationTimings, capacity: usize) -> Arc<Self> {
        Arc::new(Self {
            store: Arc::new(ExpressionStore::new()),
            queue: Arc::new(TaskQueue::new(capacity)),
            timings,
        })
    }

    /// Accepts a new expression and schedules its decomposition.
    ///
    /// Must be called from within a tokio runtime. Returns before the expression is
    /// decomposed, so an immediate lookup may still report `Pending`.
    pub fn add_expression(self: &Arc<Self>, source_text: String) -> ExpressionId {
        let id = self.store.insert(source_text.clone());
        tracing::info!("Added expression {}: {}", id, source_text);

        let orchestrator = self.clone();
        tokio::spawn(async move {
            orchestrator.process_expression(id, &source_text).await;
        });

        id
    }

    /// Decomposes an expression and enqueues its task, or marks it `Error`.
    ///
    /// The enqueue waits while the task queue is full.
    pub async fn process_expression(&self, id: ExpressionId, source_text: &str) {
        let task = match decompose(id, source_text, &self.timings) {
            Ok(task) => task,
            Err(e) => {
                tracing::warn!("Expression {} ({}) rejected: {}", id, source_text, e);
                self.store.fail(id);
                return;
            }
        };

        tracing::debug!(
            "Expression {} decomposed into {} {} {} ({}ms)",
            id,
            task.operand_1,
            task.operator,
            task.operand_2,
            task.operation_time
        );

        if let Err(e) = self.queue.enqueue(task).await {
            tracing::error!("Failed to enqueue task for expression {}: {}", id, e);
            self.store.fail(id);
        }
    }

    pub fn list_expressions(&self) -> Vec<Expression> {
        self.store.list()
    }

    pub fn get_expression(&self, id: ExpressionId) -> Result<Expression, OrchestratorError> {
        self.store
            .get(id)
            .ok_or(OrchestratorError::ExpressionNotFound(id))
    }

    /// Hands the oldest queued task to a worker, if any.
    pub fn poll_task(&self) -> Option<Task> {
        let task = self.queue.try_dequeue()?;
        tracing::info!(
            "Sent task {} to agent: {} {} {}",
            task.id,
            task.operand_1,
            task.operator,
            task.operand_2
        );
        Some(task)
    }

    /// Accepts a worker's result for an in-flight task.
    ///
    /// Fails with `TaskNotFound` if the id was never issued or was already resolved;
    /// in that case no expression is touched.
    pub fn submit_result(&self, id: ExpressionId, result: f64) -> Result<(), OrchestratorError> {
        let task = self.queue.take_in_flight(id).ok_or_else(|| {
            tracing::warn!("Task not found for id {}", id);
            OrchestratorError::TaskNotFound(id)
        })?;

        if self.store.complete(task.id, result) {
            tracing::info!("Updated expression {}: result {}", task.id, result);
        } else {
            tracing::warn!(
                "Result {} for task {} accepted but expression is not pending",
                result,
                task.id
            );
        }

        Ok(())
    }

    pub fn stats(&self) -> OrchestratorStats {
        let (pending, completed, error) = self.store.status_counts();
        OrchestratorStats {
            queued: self.queue.queued_len(),
            in_flight: self.queue.in_flight_len(),
            pending,
            completed,
            error,
        }
    }
}
