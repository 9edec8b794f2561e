//! Constants shared across mailsearch

/// Result-count limits, matching what read_emails.py accepts
pub mod count {
    /// Smallest count passed to the script
    pub const MIN: u8 = 1;

    /// Largest count passed to the script
    pub const MAX: u8 = 50;

    /// Count used when the request names none
    pub const DEFAULT: u8 = 10;
}

/// Script discovery
pub mod script {
    /// File name of the external mailbox script
    pub const FILE_NAME: &str = "read_emails.py";

    /// Built-in candidate templates, checked in order
    pub const DEFAULT_CANDIDATES: &[&str] = &[
        "${CLAUDE_PLUGIN_ROOT}/scripts/read_emails.py",
        "~/.claude/plugins/marketplaces/tools/plugins/tools/scripts/read_emails.py",
    ];
}

/// Environment variable names
pub mod env {
    pub const PLUGIN_ROOT: &str = "CLAUDE_PLUGIN_ROOT";
    pub const CONFIG: &str = "MAILSEARCH_CONFIG";
    pub const SCRIPT: &str = "MAILSEARCH_SCRIPT";
    pub const LOG: &str = "MAILSEARCH_LOG";

    /// Credentials read_emails.py cannot run without
    pub const REQUIRED_CREDENTIALS: &[&str] = &["CLIENT_ID", "CLIENT_SECRET", "TENANT_ID"];

    /// Mailbox to search instead of `/me`
    pub const EMAIL_ADDRESS: &str = "EMAIL_ADDRESS";
}
