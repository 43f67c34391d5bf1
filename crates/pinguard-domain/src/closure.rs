use crate::collector::{CollectError, Collector};
use pinguard_types::DependencyIdentity;
use std::collections::{HashSet, VecDeque};

/// Insertion-ordered set of identities reachable from the managed seeds.
///
/// Built once per evaluation by [`build_closure`], then handed read-only to
/// the detector and dropped. Never cached across runs. The `Vec` carries the
/// deterministic iteration order, the `HashSet` the O(1) membership check;
/// both dedup by full structural equality.
#[derive(Clone, Debug, Default)]
pub struct ManagementClosure {
    entries: Vec<DependencyIdentity>,
    seen: HashSet<DependencyIdentity>,
}

impl ManagementClosure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an identity, returning `false` if it was already present.
    fn insert(&mut self, identity: DependencyIdentity) -> bool {
        if !self.seen.insert(identity.clone()) {
            return false;
        }
        self.entries.push(identity);
        true
    }

    pub fn contains(&self, identity: &DependencyIdentity) -> bool {
        self.seen.contains(identity)
    }

    /// Iterate in insertion (BFS visit) order.
    pub fn iter(&self) -> impl Iterator<Item = &DependencyIdentity> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Expand the managed seeds into their full transitive closure.
///
/// Breadth-first: pop the next identity, skip it if already visited, add it
/// to the closure, collect its dependencies and enqueue the unvisited ones.
/// Each distinct identity is expanded at most once regardless of how many
/// paths reach it, so the traversal terminates on cyclic graphs and the
/// closure size is bounded by the number of distinct identities, not edges.
///
/// Empty seeds short-circuit to an empty closure (nothing to enforce). Any
/// [`CollectError`] aborts the whole build.
pub fn build_closure<C: Collector + ?Sized>(
    seeds: &[DependencyIdentity],
    collector: &C,
) -> Result<ManagementClosure, CollectError> {
    let mut visited = ManagementClosure::new();
    if seeds.is_empty() {
        return Ok(visited);
    }

    let mut queue: VecDeque<DependencyIdentity> = seeds.iter().cloned().collect();
    while let Some(current) = queue.pop_front() {
        if !visited.insert(current.clone()) {
            continue;
        }
        for dependency in collector.collect(&current)? {
            if !visited.contains(&dependency) {
                queue.push_back(dependency);
            }
        }
    }

    Ok(visited)
}
