//! Input adapters: load evaluation input documents and serve them as a
//! graph collection capability.
//!
//! This crate is allowed to do filesystem IO. The core never parses files;
//! it receives already-parsed dependency lists and a [`Collector`]. The
//! input document is the host-side stand-in for repository graph
//! resolution: a JSON object with the project dependency list, the managed
//! list, and a static adjacency map.

#![forbid(unsafe_code)]

use anyhow::Context;
use camino::Utf8Path;
use pinguard_domain::{CollectError, Collector};
use pinguard_types::DependencyIdentity;
use serde::Deserialize;
use std::collections::BTreeMap;

/// One parsed evaluation input: everything `evaluate` needs for a run.
#[derive(Clone, Debug)]
pub struct EvaluationInput {
    pub project: Vec<DependencyIdentity>,
    pub managed: Vec<DependencyIdentity>,
    pub graph: StaticGraph,
}

/// Static dependency graph keyed by `group:artifact`.
///
/// In strict mode a root with no entry fails collection, matching a
/// repository that cannot resolve the artifact's metadata. In lenient mode
/// (the default) unknown roots are leaves.
#[derive(Clone, Debug, Default)]
pub struct StaticGraph {
    edges: BTreeMap<String, Vec<DependencyIdentity>>,
    strict: bool,
}

impl StaticGraph {
    fn node_key(identity: &DependencyIdentity) -> String {
        format!("{}:{}", identity.group_id(), identity.artifact_id())
    }
}

impl Collector for StaticGraph {
    fn collect(&self, root: &DependencyIdentity) -> Result<Vec<DependencyIdentity>, CollectError> {
        match self.edges.get(&Self::node_key(root)) {
            Some(dependencies) => Ok(dependencies.clone()),
            None if self.strict => Err(CollectError::new(root, "no graph entry for artifact")),
            None => Ok(Vec::new()),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct InputDocument {
    #[serde(default)]
    project: Vec<DependencyIdentity>,
    #[serde(default)]
    managed: Vec<DependencyIdentity>,
    #[serde(default)]
    graph: BTreeMap<String, Vec<DependencyIdentity>>,
    #[serde(default)]
    strict: bool,
}

/// Parse an evaluation input document from JSON text.
///
/// Identity validation happens during deserialization: an entry with an
/// empty group or artifact is an input error, not a conflict.
pub fn parse_input_json(text: &str) -> anyhow::Result<EvaluationInput> {
    let doc: InputDocument =
        serde_json::from_str(text).context("parse evaluation input document")?;
    Ok(EvaluationInput {
        project: doc.project,
        managed: doc.managed,
        graph: StaticGraph {
            edges: doc.graph,
            strict: doc.strict,
        },
    })
}

/// Read and parse an evaluation input file.
pub fn load_input(path: &Utf8Path) -> anyhow::Result<EvaluationInput> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {}", path))?;
    parse_input_json(&text).with_context(|| format!("parse {}", path))
}
