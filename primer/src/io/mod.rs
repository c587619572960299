//! I/O helpers.

pub mod config;
