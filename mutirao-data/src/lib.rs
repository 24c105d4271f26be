//! Upstream feed access for the Mutirão matching engine.
//!
//! Responsibilities:
//! - Implement the core source traits over the remote HTTP feeds.
//! - Encapsulate the upstream JSON wire formats.
//!
//! Boundaries:
//! - Do not encode matching rules (live in `mutirao-core`).
//! - Keep blocking I/O off async executors; prefer async-capable clients.
//!
//! Invariants:
//! - Thread-safe by default where feasible.
//! - No global mutable state.

#![forbid(unsafe_code)]

pub mod sources;
