//! Calculation Agent Module
//!
//! The worker side of the system. An agent runs a small pool of loops that pull tasks
//! from the orchestrator, simulate the configured cost of the operation, and report the
//! numeric result back.
//!
//! ## Submodules
//! - **`client`**: HTTP client for the `/internal/task` poll/ack protocol.
//! - **`compute`**: Evaluation of a single binary operation.
//! - **`worker`**: The pool of polling loops.

pub mod client;
pub mod compute;
pub mod worker;
