use crate::text::conflict_line;
use pinguard_types::{ReportEnvelope, Verdict};

pub fn render_markdown(report: &ReportEnvelope) -> String {
    let mut out = String::new();

    out.push_str("# Pinguard report\n\n");
    let verdict = match report.verdict {
        Verdict::Pass => "PASS",
        Verdict::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Managed entries: {} (declared) / {} (closure)\n- Project dependencies: {}\n\n",
        verdict,
        report.data.managed_declared,
        report.data.closure_size,
        report.data.project_dependencies
    ));

    if report.conflicts.is_empty() {
        out.push_str("No conflicts.\n");
        return out;
    }

    out.push_str("## Conflicts\n\n");
    for conflict in &report.conflicts {
        out.push_str(&format!(
            "- `{}` {}\n",
            conflict.code(),
            conflict_line(conflict)
        ));
    }

    out
}
