use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailsearchError {
    // Request errors
    #[error(
        "EMPTY_QUERY: no search term left after removing modifiers; please say what to search for"
    )]
    EmptyQuery,

    // Script errors
    #[error("SCRIPT_NOT_FOUND: read_emails.py not found{}", format_searched(.searched))]
    ScriptNotFound { searched: Vec<String> },

    #[error("SCRIPT_EXEC_FAILED: {0}")]
    ScriptExecFailed(String),

    // Config errors
    #[error("CONFIG_READ_ERROR: failed to read '{path}': {reason}")]
    ConfigRead { path: PathBuf, reason: String },

    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParse(String),

    // IO errors
    #[error("IO_ERROR: {0}")]
    Io(#[from] std::io::Error),

    // Generic errors
    #[error("{0}")]
    Generic(String),
}

fn format_searched(searched: &[String]) -> String {
    let mut out = String::from("\n\nSearched locations:");
    for location in searched {
        out.push_str("\n  - ");
        out.push_str(location);
    }
    out.push_str("\n\nPlace read_emails.py at one of these paths and make it executable,");
    out.push_str(" or point --script / MAILSEARCH_SCRIPT at it.");
    out
}

impl From<serde_json::Error> for MailsearchError {
    fn from(err: serde_json::Error) -> Self {
        MailsearchError::Generic(format!("JSON error: {}", err))
    }
}

impl From<toml::de::Error> for MailsearchError {
    fn from(err: toml::de::Error) -> Self {
        MailsearchError::ConfigParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MailsearchError>;
