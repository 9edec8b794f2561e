//! Search parameters and their rendering to read_emails.py flags

use crate::config::consts;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which email fields a term is matched against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Subject,
    Body,
    #[default]
    Both,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Subject => write!(f, "subject"),
            Scope::Body => write!(f, "body"),
            Scope::Both => write!(f, "both"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}

/// Result count, always within `[1, 50]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "i64")]
pub struct Count(u8);

impl Count {
    pub const MAX: Count = Count(consts::count::MAX);

    /// Clamp any integer into range
    pub fn clamped(requested: i64) -> Self {
        let clamped = requested.clamp(consts::count::MIN as i64, consts::count::MAX as i64);
        Count(clamped as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Count {
    fn default() -> Self {
        Count(consts::count::DEFAULT)
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Count> for u8 {
    fn from(count: Count) -> Self {
        count.0
    }
}

impl TryFrom<i64> for Count {
    type Error = String;

    fn try_from(value: i64) -> std::result::Result<Self, Self::Error> {
        Ok(Count::clamped(value))
    }
}

/// Canonical parameters for one mailbox search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParameters {
    pub term: String,
    pub scope: Scope,
    pub count: Count,
    pub format: OutputFormat,
    pub full_body: bool,
}

impl SearchParameters {
    /// Parameters with every modifier at its default
    pub fn new(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            scope: Scope::default(),
            count: Count::default(),
            format: OutputFormat::default(),
            full_body: false,
        }
    }
}

/// One call of the external script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Search(SearchParameters),
    List { count: Count, format: OutputFormat },
}

impl Invocation {
    /// Render the argv passed to read_emails.py
    ///
    /// `--count` and `--format` are always explicit since the script's own
    /// format default is text. `both` scope omits `--search-in`.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        match self {
            Invocation::Search(params) => {
                args.push("--search".to_string());
                args.push(params.term.clone());
                match params.scope {
                    Scope::Subject | Scope::Body => {
                        args.push("--search-in".to_string());
                        args.push(params.scope.to_string());
                    }
                    Scope::Both => {}
                }
                args.push("--count".to_string());
                args.push(params.count.to_string());
                args.push("--format".to_string());
                args.push(params.format.to_string());
                if params.full_body {
                    args.push("--full-body".to_string());
                }
            }
            Invocation::List { count, format } => {
                args.push("--list".to_string());
                args.push("--count".to_string());
                args.push(count.to_string());
                args.push("--format".to_string());
                args.push(format.to_string());
            }
        }
        args
    }
}
