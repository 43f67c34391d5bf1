//! CLI entry point for pinguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and
//! exit codes. All business logic lives in the `pinguard-app` crate.
//!
//! Exit codes: 0 = pass, 2 = overwrite conflicts found, 1 = infrastructure
//! or input error (bad document, unresolvable graph node in strict mode).

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use pinguard_app::{run_check, verdict_exit_code, write_report};
use pinguard_render::{render_failure, render_markdown};
use pinguard_types::ReportEnvelope;

#[derive(Parser, Debug)]
#[command(
    name = "pinguard",
    version,
    about = "Managed dependency override sensor"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate the no-overwrite rule against an evaluation input document.
    Check {
        /// Path to the evaluation input JSON (project deps, managed deps, graph).
        #[arg(long)]
        input: Utf8PathBuf,

        /// Where to write the JSON report (skipped when absent).
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,

        /// Where to write a Markdown report (skipped when absent).
        #[arg(long)]
        markdown_out: Option<Utf8PathBuf>,
    },

    /// Render Markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/pinguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (prints to stdout when absent).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let code = match cli.cmd {
        Commands::Check {
            input,
            report_out,
            markdown_out,
        } => cmd_check(&input, report_out.as_deref(), markdown_out.as_deref())?,
        Commands::Md { report, output } => {
            cmd_md(&report, output.as_deref())?;
            0
        }
    };

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn cmd_check(
    input_path: &camino::Utf8Path,
    report_out: Option<&camino::Utf8Path>,
    markdown_out: Option<&camino::Utf8Path>,
) -> anyhow::Result<i32> {
    let input = pinguard_graph::load_input(input_path)?;
    let report = run_check(&input)?;

    if let Some(out) = report_out {
        write_report(out, &report).context("write report json")?;
    }
    if let Some(out) = markdown_out {
        if let Some(parent) = out.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("create {}", parent))?;
        }
        std::fs::write(out, render_markdown(&report)).with_context(|| format!("write {}", out))?;
    }

    match render_failure(&report.conflicts) {
        Some(message) => eprint!("{}", message),
        None => println!(
            "no overwrites detected ({} project dependencies against {} closure entries)",
            report.data.project_dependencies, report.data.closure_size
        ),
    }

    Ok(verdict_exit_code(report.verdict))
}

fn cmd_md(
    report_path: &camino::Utf8Path,
    output: Option<&camino::Utf8Path>,
) -> anyhow::Result<()> {
    let text =
        std::fs::read_to_string(report_path).with_context(|| format!("read {}", report_path))?;
    let report: ReportEnvelope =
        serde_json::from_str(&text).with_context(|| format!("parse {}", report_path))?;

    let md = render_markdown(&report);
    match output {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent).with_context(|| format!("create {}", parent))?;
            }
            std::fs::write(out, md).with_context(|| format!("write {}", out))?;
        }
        None => print!("{}", md),
    }
    Ok(())
}
