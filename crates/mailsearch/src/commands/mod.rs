//! CLI command implementations

pub mod doctor;
pub mod list;
pub mod locate;
pub mod resolve;
pub mod search;

use anyhow::Result;
use mailsearch_core::Invocation;
use mailsearch_script::{ExecOptions, ScriptInfo, exec_script};

/// Run the script, relay its output, and exit with its code when non-zero
fn invoke(script: ScriptInfo, invocation: &Invocation, verbose: bool) -> Result<()> {
    if verbose {
        eprintln!("Using {} ({})", script.path.display(), script.source);
    }

    let result = exec_script(&ExecOptions {
        script: script.path,
        args: invocation.to_args(),
    })?;

    result.relay()?;

    // Exit with the same code as the script
    if !result.success() {
        std::process::exit(result.exit_code);
    }

    Ok(())
}
