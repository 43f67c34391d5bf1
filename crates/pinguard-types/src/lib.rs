//! Stable DTOs and IDs used across the pinguard workspace.
//!
//! This crate is intentionally boring:
//! - the dependency identity value type
//! - stable string IDs and codes
//! - data types for the emitted report envelope

#![forbid(unsafe_code)]

pub mod identity;
pub mod ids;
pub mod report;

pub use identity::{DEFAULT_SCOPE, DependencyIdentity, IdentityError, IdentityParts};
pub use report::{
    Conflict, ConflictKind, EvaluationData, ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta, Verdict,
};
