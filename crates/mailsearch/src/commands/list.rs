//! List command - recent inbox messages, no search resolution

use super::invoke;
use crate::context::{Context, ContextArgs};
use anyhow::Result;
use mailsearch_core::{Count, Invocation, OutputFormat};
use mailsearch_script::locate_script;

/// Execute `mailsearch list`
pub fn run(count: i64, format: OutputFormat, args: ContextArgs) -> Result<()> {
    let ctx = Context::new(&args)?;
    let script = locate_script(&ctx.candidates)?;

    let invocation = Invocation::List {
        count: Count::clamped(count),
        format,
    };
    invoke(script, &invocation, ctx.verbose)
}
