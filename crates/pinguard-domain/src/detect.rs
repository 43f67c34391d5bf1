use crate::closure::ManagementClosure;
use pinguard_types::{Conflict, ConflictKind, DependencyIdentity};

/// Compare the project's declared dependencies against the managed closure
/// and report every silent override.
///
/// For each (project, closure) pair naming the same artifact, two checks run
/// independently:
/// - version conflict: the project version is non-empty and differs,
/// - scope conflict: the project scope is non-empty and differs.
///
/// An unset project value means "inherit, do not constrain" and never
/// conflicts: a project that does not pin a version for a managed artifact
/// cannot be overriding it. A single pair can yield zero, one or two
/// conflicts.
///
/// Emission order is fixed for deterministic output: outer loop over project
/// dependencies in declared order, inner loop over the closure in insertion
/// order. Performs no IO and never fails; an empty result is the success
/// signal.
pub fn detect(project: &[DependencyIdentity], closure: &ManagementClosure) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for declared in project {
        for managed in closure.iter() {
            if !declared.same_artifact(managed) {
                continue;
            }

            if !declared.version().is_empty() && declared.version() != managed.version() {
                conflicts.push(Conflict {
                    kind: ConflictKind::Version,
                    managed: managed.clone(),
                    declared: declared.version().to_string(),
                });
            }

            if !declared.scope().is_empty() && declared.scope() != managed.scope() {
                conflicts.push(Conflict {
                    kind: ConflictKind::Scope,
                    managed: managed.clone(),
                    declared: declared.scope().to_string(),
                });
            }
        }
    }

    conflicts
}
