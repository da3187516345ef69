//! Data access adapters for the restwalk route planner.
//!
//! Responsibilities:
//! - Implement the `restwalk-core` service seams against external APIs.
//! - Encapsulate wire formats and transport error mapping.
//!
//! Boundaries:
//! - Do not encode domain rules (live in `restwalk-core`).
//! - Keep blocking I/O off async executors.
//!
//! Invariants:
//! - No global mutable state.

pub mod generation;
