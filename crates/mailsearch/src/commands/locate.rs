//! Locate command - show every candidate location and the one in use

use crate::context::{Context, ContextArgs};
use anyhow::{Result, bail};
use colored::Colorize;
use mailsearch_script::{CandidateStatus, LocateReport, ScriptInfo, inspect_candidates};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct LocateOutput<'a> {
    found: Option<ScriptInfo>,
    #[serde(flatten)]
    report: &'a LocateReport,
}

/// Execute `mailsearch locate`
pub fn run(json: bool, args: ContextArgs) -> Result<()> {
    let ctx = Context::new(&args)?;
    let report = inspect_candidates(&ctx.candidates);
    let found = report.found();

    if json {
        let output = LocateOutput {
            found: found.clone(),
            report: &report,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_human_readable(&report, found.as_ref());
    }

    if found.is_none() {
        bail!("no usable read_emails.py in {} location(s)", report.checks.len());
    }

    Ok(())
}

fn print_human_readable(report: &LocateReport, found: Option<&ScriptInfo>) {
    println!("{}", "Candidates:".bold());
    for check in &report.checks {
        let mark = match check.status {
            CandidateStatus::Found => "✓".green(),
            _ => "✗".red(),
        };
        println!(
            "  {} {} [{}]",
            mark,
            check.describe(),
            check.candidate.source
        );
    }

    println!();
    match found {
        Some(info) => println!("{} {}", "Using:".bold(), info.path.display()),
        None => println!(
            "{} place read_emails.py at one of the locations above and make it executable",
            "Not found:".bold()
        ),
    }
}
