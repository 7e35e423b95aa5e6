//! Side-effecting helpers: filesystem access, the operation log, and the console.

pub mod config;
pub mod console;
pub mod lister;
pub mod op_log;
pub mod ops;
pub mod search;
