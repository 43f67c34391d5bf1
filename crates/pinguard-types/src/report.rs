use crate::DependencyIdentity;
use crate::ids;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for pinguard reports.
pub const SCHEMA_REPORT_V1: &str = "pinguard.report.v1";

/// Overall evaluation outcome. There is no warning tier: an override of a
/// managed declaration either happened or it did not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictKind {
    Version,
    Scope,
}

/// One detected disagreement between a project declaration and the managed
/// closure. Created only by the detector, never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    pub kind: ConflictKind,
    /// The closure entry being overridden.
    pub managed: DependencyIdentity,
    /// The overriding value declared by the project (version or scope).
    pub declared: String,
}

impl Conflict {
    pub fn code(&self) -> &'static str {
        match self.kind {
            ConflictKind::Version => ids::CODE_VERSION_OVERRIDE,
            ConflictKind::Scope => ids::CODE_SCOPE_OVERRIDE,
        }
    }
}

/// Summary counters for the report envelope.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationData {
    /// Managed entries declared as seeds.
    pub managed_declared: u32,
    /// Distinct identities in the expanded closure.
    pub closure_size: u32,
    /// Project dependencies compared against the closure.
    pub project_dependencies: u32,
    pub conflicts_total: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// The emitted report artifact.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEnvelope {
    pub schema: String,
    pub tool: ToolMeta,
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub conflicts: Vec<Conflict>,
    pub data: EvaluationData,
}
