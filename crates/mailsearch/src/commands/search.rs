//! Search command - resolve a free-text request and run read_emails.py

use super::{invoke, resolve::print_ambiguity_notice};
use crate::context::{Context, ContextArgs};
use anyhow::Result;
use mailsearch_core::{Invocation, resolve_request};
use mailsearch_script::locate_script;

/// Execute `mailsearch search <text>...`
pub fn run(text: Vec<String>, args: ContextArgs) -> Result<()> {
    let resolution = resolve_request(&text.join(" "))?;
    if resolution.is_ambiguous() {
        print_ambiguity_notice(&resolution);
    }

    let ctx = Context::new(&args)?;
    let script = locate_script(&ctx.candidates)?;

    invoke(script, &Invocation::Search(resolution.params), ctx.verbose)
}
