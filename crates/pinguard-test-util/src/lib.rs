//! Shared test utilities for the pinguard workspace.
//!
//! Integration tests compare emitted report JSON against golden shapes;
//! this crate stubs out the fields that vary between runs.

use serde_json::Value;

/// Normalize non-deterministic report fields for golden comparison.
///
/// `tool.version` becomes `"__VERSION__"` when the root object looks like a
/// report envelope (has `schema`, `tool`, `verdict`, `conflicts`), and the
/// `started_at`/`finished_at` timestamps become `"__TIMESTAMP__"`.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = obj.contains_key("schema")
            && obj.contains_key("tool")
            && obj.contains_key("verdict")
            && obj.contains_key("conflicts");
        if is_envelope {
            if let Some(tool) = obj.get_mut("tool").and_then(Value::as_object_mut)
                && tool.contains_key("version")
            {
                tool.insert(
                    "version".to_string(),
                    Value::String("__VERSION__".to_string()),
                );
            }
            for key in ["started_at", "finished_at"] {
                if obj.contains_key(key) {
                    obj.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
                }
            }
        }
    }
    value
}
