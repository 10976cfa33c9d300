//! CLI command handlers

pub mod commands;

pub use commands::{emit, parse_input, parse_number, run, try_run};
