use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Scope applied when a declaration carries no scope at all.
pub const DEFAULT_SCOPE: &str = "compile";

/// A required identity field was missing or empty.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("dependency group id must not be empty")]
    EmptyGroupId,
    #[error("dependency artifact id must not be empty")]
    EmptyArtifactId,
}

/// One dependency coordinate: `group:artifact:classifier:type:version:scope`.
///
/// Group and artifact are always present; classifier, type and version
/// default to `""` and scope defaults to [`DEFAULT_SCOPE`]. An empty field is
/// the explicit "unset" sentinel: the identity itself never distinguishes
/// "absent" from "default empty", comparison policy does (an unset version or
/// scope on the project side means "inherit, do not constrain").
///
/// Equality and hashing are structural over the full 6-tuple. Use
/// [`DependencyIdentity::same_artifact`] for the looser group+artifact match.
/// Values are immutable once constructed; the `with_*` builders consume and
/// return a new value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "IdentityParts")]
pub struct DependencyIdentity {
    #[serde(rename = "group")]
    group_id: String,
    #[serde(rename = "artifact")]
    artifact_id: String,
    classifier: String,
    #[serde(rename = "type")]
    kind: String,
    version: String,
    scope: String,
}

impl DependencyIdentity {
    /// Construct an identity with all optional fields at their defaults.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
    ) -> Result<Self, IdentityError> {
        let group_id = group_id.into();
        let artifact_id = artifact_id.into();
        if group_id.is_empty() {
            return Err(IdentityError::EmptyGroupId);
        }
        if artifact_id.is_empty() {
            return Err(IdentityError::EmptyArtifactId);
        }
        Ok(Self {
            group_id,
            artifact_id,
            classifier: String::new(),
            kind: String::new(),
            version: String::new(),
            scope: DEFAULT_SCOPE.to_string(),
        })
    }

    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = classifier.into();
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the scope verbatim. An explicitly empty scope is kept as-is and
    /// reads as "inherit" to the comparison policy.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn classifier(&self) -> &str {
        &self.classifier
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Two identities name the same artifact when group and artifact match,
    /// regardless of classifier, type, version and scope.
    pub fn same_artifact(&self, other: &DependencyIdentity) -> bool {
        self.group_id == other.group_id && self.artifact_id == other.artifact_id
    }
}

impl fmt::Display for DependencyIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}:{}:{}",
            self.group_id, self.artifact_id, self.classifier, self.kind, self.version, self.scope
        )
    }
}

/// Raw wire shape of an identity, as it appears in evaluation input files.
///
/// Deserialization of [`DependencyIdentity`] goes through this struct so the
/// non-empty group/artifact invariant also holds for parsed input. A missing
/// scope defaults to [`DEFAULT_SCOPE`]; an explicitly empty scope is kept.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct IdentityParts {
    pub group: String,
    pub artifact: String,
    #[serde(default)]
    pub classifier: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub scope: Option<String>,
}

impl TryFrom<IdentityParts> for DependencyIdentity {
    type Error = IdentityError;

    fn try_from(parts: IdentityParts) -> Result<Self, Self::Error> {
        let identity = DependencyIdentity::new(parts.group, parts.artifact)?
            .with_classifier(parts.classifier)
            .with_kind(parts.kind)
            .with_version(parts.version);
        Ok(match parts.scope {
            Some(scope) => identity.with_scope(scope),
            None => identity,
        })
    }
}
