use serde::Deserialize;

/// mailsearch config.toml schema
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub script: ScriptConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScriptConfig {
    /// Candidate path templates, highest priority first.
    /// Empty means the built-in defaults.
    #[serde(default)]
    pub candidates: Vec<String>,
}
