//! Property-based tests for the evaluation engine.
//!
//! These cover the invariants that matter for determinism:
//! - identity equality and rendering are structural
//! - closure construction is order-insensitive as a set and cycle-safe
//! - unset project values never produce conflicts
//! - the detector is a pure function of its inputs

use crate::closure::build_closure;
use crate::collector::Collector;
use crate::detect::detect;
use crate::test_support::StaticCollector;
use pinguard_types::{ConflictKind, DependencyIdentity};
use proptest::prelude::*;
use std::collections::HashSet;

/// Small pools so generated identities collide on group/artifact often
/// enough to exercise the same-artifact predicate.
fn arb_group() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("org.company".to_string()),
        Just("org.other".to_string()),
        Just("com.example".to_string()),
    ]
}

fn arb_artifact() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Stuff".to_string()),
        Just("Log".to_string()),
        Just("Widget".to_string()),
        Just("Core".to_string()),
    ]
}

fn arb_version() -> impl Strategy<Value = String> {
    (0u32..5, 0u32..5, 0u32..5).prop_map(|(major, minor, patch)| {
        format!("{}.{}.{}", major, minor, patch)
    })
}

fn arb_scope() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("compile".to_string()),
        Just("test".to_string()),
        Just("runtime".to_string()),
        Just("provided".to_string()),
    ]
}

fn arb_identity() -> impl Strategy<Value = DependencyIdentity> {
    (arb_group(), arb_artifact(), arb_version(), arb_scope()).prop_map(
        |(group, artifact, version, scope)| {
            DependencyIdentity::new(group, artifact)
                .expect("pool identities are valid")
                .with_version(version)
                .with_scope(scope)
        },
    )
}

/// A random graph over a fixed node pool, possibly cyclic: `edges[i]` holds
/// indices of the nodes that node `i` depends on.
fn arb_graph() -> impl Strategy<Value = (Vec<DependencyIdentity>, Vec<Vec<usize>>)> {
    prop::collection::vec(arb_identity(), 1..8).prop_flat_map(|nodes| {
        let n = nodes.len();
        let edges = prop::collection::vec(prop::collection::vec(0..n, 0..n), n);
        (Just(nodes), edges)
    })
}

fn graph_collector(nodes: &[DependencyIdentity], edges: &[Vec<usize>]) -> StaticCollector {
    let mut collector = StaticCollector::new();
    for (i, targets) in edges.iter().enumerate() {
        let deps: Vec<DependencyIdentity> = targets.iter().map(|&t| nodes[t].clone()).collect();
        collector.edge(&nodes[i], deps);
    }
    collector
}

fn closure_set<C: Collector>(
    seeds: &[DependencyIdentity],
    collector: &C,
) -> HashSet<DependencyIdentity> {
    build_closure(seeds, collector)
        .expect("static graphs never fail")
        .iter()
        .cloned()
        .collect()
}

proptest! {
    /// Identities built from the same parts are equal and render identically.
    #[test]
    fn identity_equality_is_reflexive(id in arb_identity()) {
        let copy = id.clone();
        prop_assert_eq!(&id, &copy);
        prop_assert_eq!(id.to_string(), copy.to_string());
    }

    /// Expanding seeds in any order yields the same closure set; the visited
    /// set prevents re-expansion regardless of which path gets there first.
    #[test]
    fn closure_is_idempotent_under_seed_reordering(
        (nodes, edges) in arb_graph(),
    ) {
        let collector = graph_collector(&nodes, &edges);

        let forward = closure_set(&nodes, &collector);
        let mut reversed_seeds = nodes.clone();
        reversed_seeds.reverse();
        let reversed = closure_set(&reversed_seeds, &collector);

        prop_assert_eq!(forward, reversed);
    }

    /// Closure construction terminates on arbitrary (cyclic) graphs and each
    /// distinct identity appears exactly once.
    #[test]
    fn closure_terminates_and_dedups_on_any_graph(
        (nodes, edges) in arb_graph(),
        seed_index in 0usize..8,
    ) {
        let collector = graph_collector(&nodes, &edges);
        let seed = nodes[seed_index % nodes.len()].clone();

        let closure = build_closure(&[seed], &collector).expect("static graphs never fail");

        let distinct: HashSet<_> = closure.iter().cloned().collect();
        prop_assert_eq!(distinct.len(), closure.len(), "closure must hold no duplicates");

        let pool: HashSet<_> = nodes.iter().cloned().collect();
        prop_assert!(closure.len() <= pool.len(), "closure is bounded by distinct identities");
    }

    /// A project dependency without a version never triggers a version
    /// conflict, whatever the managed value is.
    #[test]
    fn unset_project_version_never_conflicts(managed in arb_identity()) {
        let collector = StaticCollector::new();
        let closure = build_closure(
            std::slice::from_ref(&managed),
            &collector,
        ).expect("static graphs never fail");

        let unpinned = DependencyIdentity::new(managed.group_id(), managed.artifact_id())
            .expect("valid identity")
            .with_scope(managed.scope());

        let conflicts = detect(&[unpinned], &closure);
        prop_assert!(
            conflicts.iter().all(|c| c.kind != ConflictKind::Version),
            "unset version produced a version conflict: {:?}",
            conflicts
        );
    }

    /// An explicitly empty project scope never triggers a scope conflict.
    #[test]
    fn empty_project_scope_never_conflicts(managed in arb_identity()) {
        let collector = StaticCollector::new();
        let closure = build_closure(
            std::slice::from_ref(&managed),
            &collector,
        ).expect("static graphs never fail");

        let inheriting = DependencyIdentity::new(managed.group_id(), managed.artifact_id())
            .expect("valid identity")
            .with_version(managed.version())
            .with_scope("");

        let conflicts = detect(&[inheriting], &closure);
        prop_assert!(
            conflicts.iter().all(|c| c.kind != ConflictKind::Scope),
            "empty scope produced a scope conflict: {:?}",
            conflicts
        );
    }

    /// Detection is deterministic: the same inputs produce the same ordered
    /// conflict list every time.
    #[test]
    fn detection_is_deterministic(
        project in prop::collection::vec(arb_identity(), 0..6),
        managed in prop::collection::vec(arb_identity(), 0..6),
    ) {
        let collector = StaticCollector::new();
        let closure = build_closure(&managed, &collector).expect("static graphs never fail");

        let first = detect(&project, &closure);
        let second = detect(&project, &closure);
        prop_assert_eq!(first, second);
    }

    /// Conflicts only ever name artifacts the project actually declares.
    #[test]
    fn conflicts_are_gated_by_same_artifact(
        project in prop::collection::vec(arb_identity(), 0..6),
        managed in prop::collection::vec(arb_identity(), 0..6),
    ) {
        let collector = StaticCollector::new();
        let closure = build_closure(&managed, &collector).expect("static graphs never fail");

        for conflict in detect(&project, &closure) {
            prop_assert!(
                project.iter().any(|p| p.same_artifact(&conflict.managed)),
                "conflict for an artifact the project never declared: {}",
                conflict.managed
            );
        }
    }
}
