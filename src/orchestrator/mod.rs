//! Orchestrator Module
//!
//! The coordinator of the distributed calculator. It accepts arithmetic expressions from
//! clients, breaks each one into a single binary operation (a `Task`), and hands those
//! tasks out to remote workers over an HTTP poll/ack protocol.
//!
//! ## Architecture Overview
//! The orchestrator follows a **Pull-based** model:
//! 1. **Intake**: A client posts an expression. It is stored as `pending` and its id is
//!    returned immediately.
//! 2. **Decomposition**: In the background, the expression is tokenized and one operation
//!    is selected. Invalid input moves the expression to `error`.
//! 3. **Queueing**: The task enters a bounded FIFO queue and the correlation index.
//! 4. **Polling**: Workers fetch tasks with `GET /internal/task`; an empty queue answers 404.
//! 5. **Reconciliation**: Workers post results to `POST /internal/task`; the first result
//!    per task completes the expression, later ones are rejected as unknown.
//!
//! ## Submodules
//! - **`types`**: Expression, Task and operator definitions.
//! - **`timing`**: Per-operator simulated cost table.
//! - **`store`**: Mutex-guarded expression state.
//! - **`queue`**: Bounded task queue plus the in-flight correlation index.
//! - **`decomposer`**: Expression text to `Task`.
//! - **`dispatcher`**: The engine tying the pieces together.
//! - **`protocol`** / **`handlers`**: The HTTP contract and its axum handlers.

pub mod decomposer;
pub mod dispatcher;
pub mod error;
pub mod handlers;
pub mod protocol;
pub mod queue;
pub mod store;
pub mod timing;
pub mod types;
