//! Per-invocation context for CLI commands

use anyhow::Result;
use mailsearch_core::config::{Config, ConfigSource};
use mailsearch_script::{Candidate, candidate_list};
use std::path::PathBuf;

/// Global flags shared by every command
pub struct ContextArgs {
    pub config: Option<PathBuf>,
    pub script: Option<String>,
    pub verbose: bool,
}

/// Loaded config and the candidate list derived from it
pub struct Context {
    pub config_source: ConfigSource,
    pub candidates: Vec<Candidate>,
    pub verbose: bool,
}

impl Context {
    /// Load config and build the ordered candidate list
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit config file is missing, or any
    /// config file cannot be parsed.
    pub fn new(args: &ContextArgs) -> Result<Self> {
        let (config, config_source) = Config::load(args.config.as_deref())?;
        let candidates = candidate_list(&config, args.script.as_deref());
        log::debug!("config: {:?}, {} candidate(s)", config_source, candidates.len());

        Ok(Self {
            config_source,
            candidates,
            verbose: args.verbose,
        })
    }
}
