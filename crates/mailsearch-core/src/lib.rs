//! Request resolution and shared types for mailsearch.
//!
//! - [`request`]: free text to [`SearchParameters`]
//! - [`params`]: parameters and their read_emails.py argv
//! - [`preview`]: the Graph request the script will make
//! - [`credentials`]: which credential variables are set
//! - [`config`]: optional TOML configuration

pub mod config;
pub mod credentials;
pub mod error;
pub mod params;
pub mod preview;
pub mod request;

// Re-export commonly used types
pub use error::{MailsearchError, Result};
pub use params::{Count, Invocation, OutputFormat, Scope, SearchParameters};
pub use request::{Ambiguity, Resolution, resolve_request};
