pub mod consts;
mod model;

pub use model::{Config, ScriptConfig};

use crate::error::{MailsearchError, Result};
use std::path::{Path, PathBuf};

/// Where a loaded config came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicit `--config` / `MAILSEARCH_CONFIG`
    Explicit(PathBuf),
    /// `<config_dir>/mailsearch/config.toml`
    UserDefault(PathBuf),
    /// No file; built-in defaults
    BuiltIn,
}

impl Config {
    /// Parse a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| MailsearchError::ConfigRead {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration
    ///
    /// An explicit path must exist. Otherwise the per-user file is used
    /// when present, and built-in defaults when it is not.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, ConfigSource)> {
        if let Some(path) = explicit {
            let config = Self::from_file(path)?;
            return Ok((config, ConfigSource::Explicit(path.to_path_buf())));
        }

        if let Some(path) = user_config_path().filter(|p| p.is_file()) {
            log::debug!("loading config from {}", path.display());
            let config = Self::from_file(&path)?;
            return Ok((config, ConfigSource::UserDefault(path)));
        }

        Ok((Self::default(), ConfigSource::BuiltIn))
    }

    /// Candidate templates in priority order, falling back to the defaults
    pub fn candidate_templates(&self) -> Vec<String> {
        if self.script.candidates.is_empty() {
            consts::script::DEFAULT_CANDIDATES
                .iter()
                .map(|s| s.to_string())
                .collect()
        } else {
            self.script.candidates.clone()
        }
    }
}

/// Per-user config location
///
/// - Linux: ~/.config/mailsearch/config.toml
/// - macOS: ~/Library/Application Support/mailsearch/config.toml
/// - Windows: %APPDATA%\mailsearch\config.toml
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("mailsearch").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_default_candidates() {
        let config = Config::from_toml("").unwrap();
        let templates = config.candidate_templates();

        assert_eq!(templates.len(), 2);
        assert!(templates[0].starts_with("${CLAUDE_PLUGIN_ROOT}"));
        assert!(templates[1].starts_with("~/.claude/plugins/marketplaces"));
    }

    #[test]
    fn test_configured_candidates_replace_defaults() {
        let config = Config::from_toml(
            r#"
[script]
candidates = ["/opt/mail/read_emails.py", "~/bin/read_emails.py"]
"#,
        )
        .unwrap();

        assert_eq!(
            config.candidate_templates(),
            vec!["/opt/mail/read_emails.py", "~/bin/read_emails.py"]
        );
    }

    #[test]
    fn test_empty_candidate_list_falls_back() {
        let config = Config::from_toml("[script]\ncandidates = []\n").unwrap();
        assert_eq!(config.candidate_templates().len(), 2);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = Config::from_toml("[script\ncandidates = 3").unwrap_err();
        assert!(matches!(err, MailsearchError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_explicit_file_is_read_error() {
        let err = Config::load(Some(Path::new("/nonexistent/mailsearch.toml"))).unwrap_err();
        assert!(matches!(err, MailsearchError::ConfigRead { .. }));
        assert!(err.to_string().contains("/nonexistent/mailsearch.toml"));
    }
}
