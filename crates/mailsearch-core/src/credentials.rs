//! Presence check for the credentials read_emails.py reads

use crate::config::consts::env;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CredentialStatus {
    /// Required variables that are set
    pub present: Vec<String>,
    /// Required variables that are not set
    pub missing: Vec<String>,
    /// Whether `EMAIL_ADDRESS` is set
    pub mailbox_configured: bool,
}

impl CredentialStatus {
    /// Inspect the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var_os(name).is_some_and(|v| !v.is_empty()))
    }

    /// Inspect through `is_set`, which reports whether a variable has a value
    pub fn from_lookup(is_set: impl Fn(&str) -> bool) -> Self {
        let (present, missing): (Vec<&str>, Vec<&str>) = env::REQUIRED_CREDENTIALS
            .iter()
            .copied()
            .partition(|name| is_set(*name));

        Self {
            present: present.into_iter().map(String::from).collect(),
            missing: missing.into_iter().map(String::from).collect(),
            mailbox_configured: is_set(env::EMAIL_ADDRESS),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}
