//! The `check` use case: evaluate the no-overwrite rule and produce a report.

use anyhow::Context;
use camino::Utf8Path;
use pinguard_graph::EvaluationInput;
use pinguard_types::{ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta, Verdict};
use time::OffsetDateTime;

/// Run the check use case on a parsed evaluation input.
///
/// Graph collection failures abort with an error; a found conflict is not an
/// error but a `Fail` verdict inside the envelope.
pub fn run_check(input: &EvaluationInput) -> anyhow::Result<ReportEnvelope> {
    let started_at = OffsetDateTime::now_utc();

    let report = pinguard_domain::evaluate(&input.project, &input.managed, &input.graph)
        .context("collect managed dependency graph")?;

    let finished_at = OffsetDateTime::now_utc();

    Ok(ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "pinguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict: report.verdict,
        conflicts: report.conflicts,
        data: report.data,
    })
}

pub fn serialize_report(report: &ReportEnvelope) -> anyhow::Result<String> {
    let mut out = serde_json::to_string_pretty(report).context("serialize report")?;
    out.push('\n');
    Ok(out)
}

/// Write the JSON report, creating parent directories as needed.
pub fn write_report(path: &Utf8Path, report: &ReportEnvelope) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create {}", parent))?;
    }
    let json = serialize_report(report)?;
    std::fs::write(path, json).with_context(|| format!("write {}", path))?;
    Ok(())
}

/// Map verdict to exit code: 0 = pass, 2 = fail. Infrastructure errors take
/// the conventional 1 via `anyhow` in the binary.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 2,
    }
}
