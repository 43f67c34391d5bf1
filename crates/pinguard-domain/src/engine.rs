use crate::closure::build_closure;
use crate::collector::{CollectError, Collector};
use crate::detect::detect;
use pinguard_types::{Conflict, DependencyIdentity, EvaluationData, Verdict};

/// Result of one rule evaluation.
///
/// A `Fail` verdict with conflicts is the expected "rule failed" outcome,
/// not a fault; infrastructure failures surface as [`CollectError`] instead
/// so callers can tell the two apart.
#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub conflicts: Vec<Conflict>,
    pub data: EvaluationData,
}

/// Evaluate the no-overwrite rule for one project.
///
/// An empty managed list passes immediately: there is no policy to enforce.
/// Otherwise the managed seeds are expanded into their transitive closure
/// and every project declaration is checked against it. The whole evaluation
/// is single-threaded and synchronous; the collector is the only call that
/// may block, and its failure aborts the evaluation without retry.
pub fn evaluate<C: Collector + ?Sized>(
    project: &[DependencyIdentity],
    managed: &[DependencyIdentity],
    collector: &C,
) -> Result<DomainReport, CollectError> {
    if managed.is_empty() {
        return Ok(DomainReport {
            verdict: Verdict::Pass,
            conflicts: Vec::new(),
            data: EvaluationData {
                managed_declared: 0,
                closure_size: 0,
                project_dependencies: project.len() as u32,
                conflicts_total: 0,
            },
        });
    }

    let closure = build_closure(managed, collector)?;
    let conflicts = detect(project, &closure);

    let verdict = if conflicts.is_empty() {
        Verdict::Pass
    } else {
        Verdict::Fail
    };

    let data = EvaluationData {
        managed_declared: managed.len() as u32,
        closure_size: closure.len() as u32,
        project_dependencies: project.len() as u32,
        conflicts_total: conflicts.len() as u32,
    };

    Ok(DomainReport {
        verdict,
        conflicts,
        data,
    })
}
