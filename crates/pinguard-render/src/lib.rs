//! Rendering for pinguard reports: the canonical plain-text failure message
//! and a Markdown rendering for CI surfaces.

#![forbid(unsafe_code)]

mod markdown;
mod text;

pub use markdown::render_markdown;
pub use text::{FAILURE_HEADER, conflict_line, render_failure};
