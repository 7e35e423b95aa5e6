//! Interactive command-line file explorer.
//!
//! A menu loop over local filesystem operations: list, change directory,
//! create, delete, rename, search, properties, and copy. The crate follows a
//! strict split:
//!
//! - **[`core`]**: Pure logic (path resolution, case-insensitive matching,
//!   menu parsing). No I/O, fully testable in isolation.
//! - **[`io`]**: Side effects (filesystem calls, recursive search, the
//!   operation log, configuration, terminal I/O).
//!
//! [`session`] ties the two together into the interactive loop.

pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
