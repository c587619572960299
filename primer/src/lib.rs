//! Small, independent building blocks for everyday data handling.
//!
//! The crate keeps the same strict separation throughout:
//!
//! - **[`core`]**: Pure, deterministic components (key/value store, growable
//!   sequence, text helpers, nested records, safe division). No I/O.
//! - **[`io`]**: Side-effecting helpers, currently configuration loading.
//!
//! Absence and failure are always reported as data (`Option`, `Result`),
//! never as panics.

pub mod core;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use crate::core::divide::{DivideError, divide};
pub use crate::core::employee::{Address, Contact, Employee, Identity};
pub use crate::core::record_store::RecordStore;
pub use crate::core::sequence::{GrowableSequence, GrowthPolicy, SequenceError};
pub use crate::core::text;
pub use crate::io::config::{PrimerConfig, SequenceConfig, load_config};
