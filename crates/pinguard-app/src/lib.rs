//! Use case orchestration for pinguard.
//!
//! This crate provides the application layer: it coordinates the graph,
//! domain, and render layers and assembles the report envelope. The CLI
//! crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;

pub use check::{run_check, serialize_report, verdict_exit_code, write_report};
