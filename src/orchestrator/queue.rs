//! Task Queue
//!
//! A bounded FIFO of tasks waiting for a worker, plus the correlation index that
//! tracks every task from the moment it is enqueued until its result is accepted.
//!
//! ## Guarantees
//! - **Ordering**: tasks are handed out in the order they were enqueued. No priorities.
//! - **Backpressure**: `enqueue` waits for a free slot when the queue is full. There is
//!   no timeout, so an intake with no polling workers stalls once the queue is full.
//! - **Correlation**: the index entry is written before the task becomes pollable, so a
//!   worker can never report a result the index has not seen yet.
//! - **Exactly-once acceptance**: `take_in_flight` removes the entry; a second result
//!   for the same id finds nothing.

use super::types::*;

use anyhow::Result;
use dashmap::DashMap;
use parking_lot::Mutex;
use tokio::sync::mpsc;

pub const DEFAULT_QUEUE_CAPACITY: usize = 100;

pub struct TaskQueue {
    sender: mpsc::Sender<Task>,
    /// Workers poll from here; the lock only guards the non-blocking `try_recv`.
    receiver: Mutex<mpsc::Receiver<Task>>,
    /// Tasks that were enqueued and whose result has not been accepted yet.
    in_flight: DashMap<ExpressionId, Task>,
}

impl TaskQueue {
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        Self {
            sender,
            receiver: Mutex::new(receiver),
            in_flight: DashMap::new(),
        }
    }

    /// Registers the task in the correlation index and appends it to the queue.
    ///
    /// Waits while the queue is full. The slot is reserved first, then the index insert
    /// and the send happen back to back.
    pub async fn enqueue(&self, task: Task) -> Result<()> {
        let permit = self
            .sender
            .reserve()
            .await
            .map_err(|_| anyhow::anyhow!("Task queue is closed"))?;

        if self.in_flight.contains_key(&task.id) {
            return Err(anyhow::anyhow!("Task {} is already in flight", task.id));
        }

        self.in_flight.insert(task.id, task.clone());
        let id = task.id;
        permit.send(task);

        tracing::debug!("Enqueued task {} ({} queued)", id, self.queued_len());
        Ok(())
    }

    /// Pops the oldest queued task, or returns `None` right away if the queue is empty.
    pub fn try_dequeue(&self) -> Option<Task> {
        self.receiver.lock().try_recv().ok()
    }

    /// Removes a task from the correlation index. Returns `None` if it is not in flight.
    pub fn take_in_flight(&self, id: ExpressionId) -> Option<Task> {
        self.in_flight.remove(&id).map(|(_, task)| task)
    }

    pub fn is_in_flight(&self, id: ExpressionId) -> bool {
        self.in_flight.contains_key(&id)
    }

    /// Tasks sitting in the queue (including slots reserved by an ongoing `enqueue`).
    pub fn queued_len(&self) -> usize {
        self.sender.max_capacity() - self.sender.capacity()
    }

    /// Tasks registered in the correlation index, queued or handed to a worker.
    pub fn in_flight_len(&self) -> usize {
        self.in_flight.len()
    }

    pub fn capacity(&self) -> usize {
        self.sender.max_capacity()
    }
}

impl Default for TaskQueue {
    fn default() -> Self {
        Self::new(DEFAULT_QUEUE_CAPACITY)
    }
}
