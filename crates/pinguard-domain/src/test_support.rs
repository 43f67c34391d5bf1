use crate::collector::{CollectError, Collector};
use pinguard_types::DependencyIdentity;
use std::cell::RefCell;
use std::collections::HashMap;

/// Build an identity the way the evaluation scenarios spell them:
/// group, artifact, version, scope.
pub fn identity(group: &str, artifact: &str, version: &str, scope: &str) -> DependencyIdentity {
    DependencyIdentity::new(group, artifact)
        .expect("valid identity")
        .with_version(version)
        .with_scope(scope)
}

/// In-memory graph keyed by full identity. Nodes without edges are leaves.
/// Tracks how often each node was expanded so dedup can be asserted.
#[derive(Default)]
pub struct StaticCollector {
    edges: HashMap<DependencyIdentity, Vec<DependencyIdentity>>,
    calls: RefCell<HashMap<String, usize>>,
}

impl StaticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edge(&mut self, root: &DependencyIdentity, dependencies: Vec<DependencyIdentity>) {
        self.edges.insert(root.clone(), dependencies);
    }

    pub fn calls_for(&self, root: &DependencyIdentity) -> usize {
        self.calls
            .borrow()
            .get(&root.to_string())
            .copied()
            .unwrap_or(0)
    }
}

impl Collector for StaticCollector {
    fn collect(&self, root: &DependencyIdentity) -> Result<Vec<DependencyIdentity>, CollectError> {
        *self
            .calls
            .borrow_mut()
            .entry(root.to_string())
            .or_insert(0) += 1;
        Ok(self.edges.get(root).cloned().unwrap_or_default())
    }
}

/// Fails every expansion, for abort-path tests.
pub struct FailingCollector;

impl Collector for FailingCollector {
    fn collect(&self, root: &DependencyIdentity) -> Result<Vec<DependencyIdentity>, CollectError> {
        Err(CollectError::new(root, "unresolvable artifact metadata"))
    }
}
