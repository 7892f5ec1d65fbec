//! Worker Pool Implementation
//!
//! Spawns `computing_power` independent loops, each of which:
//! 1. Polls the orchestrator for a task (waits `poll_interval` on 404 or connection error).
//! 2. Spends the task's `operation_time` milliseconds, then computes the result.
//! 3. Posts the result back. A failed post is logged and the task is dropped.

use super::client::OrchestratorClient;
use super::compute::compute;

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_COMPUTING_POWER: usize = 3;
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub computing_power: usize,
    pub poll_interval: Duration,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            computing_power: DEFAULT_COMPUTING_POWER,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

pub struct WorkerPool {
    client: OrchestratorClient,
    config: AgentConfig,
}

impl WorkerPool {
    pub fn new(client: OrchestratorClient, config: AgentConfig) -> Arc<Self> {
        Arc::new(Self { client, config })
    }

    /// Spawns the workers and returns their handles. Each runs until aborted.
    pub fn start(self: &Arc<Self>) -> Vec<tokio::task::JoinHandle<()>> {
        tracing::info!(
            "Starting {} workers against {}",
            self.config.computing_power,
            self.client.base_url()
        );

        (0..self.config.computing_power)
            .map(|worker_id| {
                let pool = self.clone();
                tokio::spawn(async move {
                    pool.worker_loop(worker_id).await;
                })
            })
            .collect()
    }

    async fn worker_loop(&self, worker_id: usize) {
        tracing::info!("Worker {} started", worker_id);

        loop {
            match self.run_once(worker_id).await {
                Ok(true) => continue,
                Ok(false) => {
                    tokio::time::sleep(self.config.poll_interval).await;
                }
                Err(e) => {
                    tracing::warn!("Worker {}: {}", worker_id, e);
                    tokio::time::sleep(self.config.poll_interval).await;
                }
            }
        }
    }

    /// One poll/compute/report cycle.
    ///
    /// Returns `Ok(false)` if there was no task, `Ok(true)` once a result was accepted.
    pub async fn run_once(&self, worker_id: usize) -> Result<bool> {
        let task = match self.client.fetch_task().await? {
            Some(task) => task,
            None => return Ok(false),
        };

        tracing::info!(
            "Worker {}: computing {} {} {} (wait time: {}ms)",
            worker_id,
            task.operand_1,
            task.operator,
            task.operand_2,
            task.operation_time
        );

        tokio::time::sleep(Duration::from_millis(task.operation_time)).await;
        let result = compute(&task);

        self.client.send_result(task.id, result).await?;
        tracing::info!(
            "Worker {}: result {} for task {} sent",
            worker_id,
            result,
            task.id
        );

        Ok(true)
    }
}
