use pinguard_types::{Conflict, ConflictKind};

/// Header line of the aggregated failure message.
pub const FAILURE_HEADER: &str = "Following dependencies try to overwrite managed dependencies:";

/// One line per conflict. The wording is stable; downstream tooling matches
/// on it.
pub fn conflict_line(conflict: &Conflict) -> String {
    let managed = &conflict.managed;
    match conflict.kind {
        ConflictKind::Version => format!(
            "{}:{}:{} override by version {}",
            managed.group_id(),
            managed.artifact_id(),
            managed.version(),
            conflict.declared
        ),
        ConflictKind::Scope => format!(
            "{}:{}:{} with scope {} override by scope {}",
            managed.group_id(),
            managed.artifact_id(),
            managed.version(),
            managed.scope(),
            conflict.declared
        ),
    }
}

/// Aggregate all conflicts into the single failure message: the fixed header
/// followed by one ` - ` bullet per conflict, in detection order. An empty
/// conflict list produces no output (success).
pub fn render_failure(conflicts: &[Conflict]) -> Option<String> {
    if conflicts.is_empty() {
        return None;
    }

    let mut out = String::new();
    out.push_str(FAILURE_HEADER);
    out.push('\n');
    for conflict in conflicts {
        out.push_str(" - ");
        out.push_str(&conflict_line(conflict));
        out.push('\n');
    }
    Some(out)
}
