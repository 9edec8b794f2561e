use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Where a candidate path came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateSource {
    /// `--script` or `MAILSEARCH_SCRIPT`
    Override,
    /// `[script] candidates` in config.toml
    Config,
    /// Built-in plugin / marketplace locations
    Default,
}

impl fmt::Display for CandidateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateSource::Override => write!(f, "override"),
            CandidateSource::Config => write!(f, "config"),
            CandidateSource::Default => write!(f, "default"),
        }
    }
}

/// A located, runnable script
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptInfo {
    pub path: PathBuf,
    pub template: String,
    pub source: CandidateSource,
}
