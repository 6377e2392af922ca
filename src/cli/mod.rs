//! CLI command implementations
//!
//! - `simple`: generate, analyze
//! - `config`: schema, init
//! - `util`: shared argument and output helpers

pub mod config;
pub mod simple;
pub mod util;

pub use config::{cmd_init, cmd_schema};
pub use simple::{cmd_analyze, cmd_generate};
