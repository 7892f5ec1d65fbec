//! Distributed Calculator Library
//!
//! Spreads the evaluation of simple arithmetic expressions across a pool of remote
//! workers. The library backs two binaries: the `orchestrator` (`main.rs`) and the
//! `agent` (workspace member under `agent/`).
//!
//! ## Architecture Modules
//! - **`orchestrator`**: The coordinator. Accepts expressions, decomposes each into a
//!   single binary operation, queues it, and reconciles worker results into expression
//!   state over HTTP.
//! - **`agent`**: The worker side. Polls the orchestrator for tasks, simulates the
//!   configured operation cost, and reports results back.

pub mod agent;
pub mod orchestrator;
