//! Locating and running read_emails.py for mailsearch.
//!
//! - [`candidates`]: ordered candidate templates and `~` / `${VAR}` expansion
//! - [`locate`]: first existing, executable candidate wins
//! - [`exec`]: run the script and relay its output
//!
//! # Resolution Flow
//!
//! ```text
//! locate_script()
//!     ↓
//! 1. --script / MAILSEARCH_SCRIPT override
//!     ↓ (missing or not executable)
//! 2. config.toml [script] candidates
//!    or ${CLAUDE_PLUGIN_ROOT}/scripts/read_emails.py
//!    then ~/.claude/plugins/marketplaces/.../read_emails.py
//!     ↓ (none qualified)
//! 3. ScriptNotFound listing every location checked
//! ```
//!
//! # Example
//!
//! ```no_run
//! use mailsearch_core::{config::Config, resolve_request, Invocation};
//! use mailsearch_script::{candidate_list, exec_script, locate_script, ExecOptions};
//!
//! # fn main() -> mailsearch_core::Result<()> {
//! let resolution = resolve_request("invoice subject 5")?;
//! let script = locate_script(&candidate_list(&Config::default(), None))?;
//!
//! let result = exec_script(&ExecOptions {
//!     script: script.path,
//!     args: Invocation::Search(resolution.params).to_args(),
//! })?;
//! println!("Exit code: {}", result.exit_code);
//! # Ok(())
//! # }
//! ```

pub mod candidates;
pub mod exec;
pub mod info;
pub mod locate;

pub use candidates::{Candidate, candidate_list};
pub use exec::{ExecOptions, ExecResult, exec_script};
pub use info::{CandidateSource, ScriptInfo};
pub use locate::{CandidateStatus, LocateReport, inspect_candidates, locate_script};
