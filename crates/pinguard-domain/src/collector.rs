use pinguard_types::DependencyIdentity;
use thiserror::Error;

/// The dependency graph for a node could not be built (for example missing
/// artifact metadata in the backing repository). Fatal to the evaluation:
/// a partial closure could hide real conflicts or report false ones.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("failed to collect dependency graph for {root}: {reason}")]
pub struct CollectError {
    pub root: String,
    pub reason: String,
}

impl CollectError {
    pub fn new(root: &DependencyIdentity, reason: impl Into<String>) -> Self {
        Self {
            root: root.to_string(),
            reason: reason.into(),
        }
    }
}

/// Capability for expanding one dependency into its transitive closure.
///
/// Supplied by repository-resolution infrastructure outside the core. The
/// returned list holds the root's transitive dependencies, excluding the
/// root itself. The call may block; the core treats it as a synchronous,
/// potentially slow, potentially failing operation and never retries it.
pub trait Collector {
    fn collect(&self, root: &DependencyIdentity) -> Result<Vec<DependencyIdentity>, CollectError>;
}

impl<C: Collector + ?Sized> Collector for &C {
    fn collect(&self, root: &DependencyIdentity) -> Result<Vec<DependencyIdentity>, CollectError> {
        (**self).collect(root)
    }
}
