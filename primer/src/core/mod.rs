//! Deterministic, pure components.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data and return deterministic outputs suitable for tests.

pub mod divide;
pub mod employee;
pub mod record_store;
pub mod sequence;
pub mod text;
