//! Deterministic, pure logic shared by the explorer.
//!
//! Core modules must be free of I/O side effects. They operate on strings and
//! in-memory values and return deterministic outputs suitable for tests.

pub mod matcher;
pub mod menu;
pub mod path;
pub mod types;
