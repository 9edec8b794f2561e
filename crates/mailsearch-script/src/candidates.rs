//! Candidate path templates and their expansion
//!
//! Templates may start with `~` and may contain `${VAR}` references.
//! Expansion happens at check time so a changed environment is picked up on
//! the next invocation.

use crate::info::CandidateSource;
use mailsearch_core::config::Config;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub template: String,
    pub source: CandidateSource,
}

impl Candidate {
    pub fn new(template: impl Into<String>, source: CandidateSource) -> Self {
        Self {
            template: template.into(),
            source,
        }
    }
}

/// Build the ordered candidate list
///
/// Priority:
/// 1. `script_override` (`--script` / `MAILSEARCH_SCRIPT`)
/// 2. config.toml `[script] candidates`
/// 3. Built-in defaults (only when config names none)
pub fn candidate_list(config: &Config, script_override: Option<&str>) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    if let Some(path) = script_override {
        candidates.push(Candidate::new(path, CandidateSource::Override));
    }

    let source = if config.script.candidates.is_empty() {
        CandidateSource::Default
    } else {
        CandidateSource::Config
    };
    candidates.extend(
        config
            .candidate_templates()
            .into_iter()
            .map(|template| Candidate::new(template, source)),
    );

    candidates
}

/// Look up a variable in the process environment
///
/// Empty values count as unset. `HOME` falls back to the platform home
/// directory so `~` works on Windows too.
pub fn process_env(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ if name == "HOME" => dirs::home_dir().map(|p| p.to_string_lossy().into_owned()),
        _ => None,
    }
}

/// Expand `~` and `${VAR}` in a template
///
/// Returns `Err(variable)` naming the first variable `lookup` could not
/// provide. An unterminated `${` is kept literally.
pub fn expand_with(
    template: &str,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<PathBuf, String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    if rest == "~" || rest.starts_with("~/") || rest.starts_with("~\\") {
        let home = lookup("HOME").ok_or_else(|| "HOME".to_string())?;
        out.push_str(&home);
        rest = &rest[1..];
    }

    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start + 2..].find('}') else {
            break;
        };
        let name = &rest[start + 2..start + 2 + len];
        let value = lookup(name).ok_or_else(|| name.to_string())?;
        out.push_str(&rest[..start]);
        out.push_str(&value);
        rest = &rest[start + 2 + len + 1..];
    }
    out.push_str(rest);

    Ok(PathBuf::from(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailsearch_core::config::ScriptConfig;

    fn fake_env(name: &str) -> Option<String> {
        match name {
            "HOME" => Some("/home/dana".to_string()),
            "CLAUDE_PLUGIN_ROOT" => Some("/plugins/tools".to_string()),
            _ => None,
        }
    }

    #[test]
    fn test_expand_plugin_root() {
        let path = expand_with("${CLAUDE_PLUGIN_ROOT}/scripts/read_emails.py", fake_env);
        assert_eq!(path, Ok(PathBuf::from("/plugins/tools/scripts/read_emails.py")));
    }

    #[test]
    fn test_expand_tilde() {
        let path = expand_with("~/.claude/read_emails.py", fake_env);
        assert_eq!(path, Ok(PathBuf::from("/home/dana/.claude/read_emails.py")));
    }

    #[test]
    fn test_tilde_only_at_start() {
        let path = expand_with("/opt/~/read_emails.py", fake_env);
        assert_eq!(path, Ok(PathBuf::from("/opt/~/read_emails.py")));
    }

    #[test]
    fn test_missing_variable_is_named() {
        let path = expand_with("${NOPE}/read_emails.py", fake_env);
        assert_eq!(path, Err("NOPE".to_string()));
    }

    #[test]
    fn test_multiple_variables() {
        let path = expand_with("${HOME}/x/${CLAUDE_PLUGIN_ROOT}", fake_env);
        assert_eq!(path, Ok(PathBuf::from("/home/dana/x//plugins/tools")));
    }

    #[test]
    fn test_unterminated_reference_kept() {
        let path = expand_with("/tmp/${HOME", fake_env);
        assert_eq!(path, Ok(PathBuf::from("/tmp/${HOME")));
    }

    #[test]
    fn test_candidate_list_defaults() {
        let candidates = candidate_list(&Config::default(), None);
        assert_eq!(candidates.len(), 2);
        assert!(candidates.iter().all(|c| c.source == CandidateSource::Default));
    }

    #[test]
    fn test_candidate_list_override_first() {
        let config = Config {
            script: ScriptConfig {
                candidates: vec!["/opt/read_emails.py".to_string()],
            },
        };
        let candidates = candidate_list(&config, Some("/tmp/read_emails.py"));

        assert_eq!(
            candidates,
            vec![
                Candidate::new("/tmp/read_emails.py", CandidateSource::Override),
                Candidate::new("/opt/read_emails.py", CandidateSource::Config),
            ]
        );
    }
}
