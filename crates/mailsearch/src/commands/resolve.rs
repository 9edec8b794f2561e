//! Resolve command - show how a request maps to read_emails.py flags

use anyhow::Result;
use colored::Colorize;
use mailsearch_core::config::consts;
use mailsearch_core::preview::GraphQueryPreview;
use mailsearch_core::{Invocation, Resolution, SearchParameters, resolve_request};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ResolveOutput<'a> {
    params: &'a SearchParameters,
    ambiguities: &'a [mailsearch_core::Ambiguity],
    args: Vec<String>,
    graph: GraphQueryPreview,
}

/// Execute `mailsearch resolve <text>...`
pub fn run(text: Vec<String>, json: bool) -> Result<()> {
    let resolution = resolve_request(&text.join(" "))?;

    let invocation = Invocation::Search(resolution.params.clone());
    let mailbox = std::env::var(consts::env::EMAIL_ADDRESS)
        .ok()
        .filter(|v| !v.is_empty());
    let output = ResolveOutput {
        params: &resolution.params,
        ambiguities: &resolution.ambiguities,
        args: invocation.to_args(),
        graph: GraphQueryPreview::for_invocation(&invocation, mailbox.as_deref()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_human_readable(&output);
    }

    Ok(())
}

fn print_human_readable(output: &ResolveOutput<'_>) {
    print_params(output.params);
    println!();
    println!("{} {}", "Arguments:".bold(), output.args.join(" "));
    println!("{} {}", "Graph:".bold(), output.graph.to_request_line());
    for note in &output.graph.notes {
        println!("  - {}", note);
    }

    if !output.ambiguities.is_empty() {
        println!();
        println!("{}", "Ambiguous:".bold());
        for ambiguity in output.ambiguities {
            println!("  {} {}", "⚠".yellow(), ambiguity);
        }
    }
}

fn print_params(params: &SearchParameters) {
    println!("{}", "Parameters:".bold());
    println!("  Term:      {}", params.term);
    println!("  Scope:     {}", params.scope);
    println!("  Count:     {}", params.count);
    println!("  Format:    {}", params.format);
    println!("  Full body: {}", if params.full_body { "yes" } else { "no" });
}

/// Tell the caller how an ambiguous request was read, on stderr
pub(super) fn print_ambiguity_notice(resolution: &Resolution) {
    eprintln!("{} request was ambiguous:", "⚠".yellow());
    for ambiguity in &resolution.ambiguities {
        eprintln!("  - {}", ambiguity);
    }
    let params = &resolution.params;
    eprintln!(
        "  Resolved as: term=\"{}\" scope={} count={} format={} full_body={}",
        params.term, params.scope, params.count, params.format, params.full_body
    );
}
