//! Environment isolation utilities for testing
//!
//! Tests that touch process-wide environment variables take [`ENV_LOCK`] so
//! they cannot interfere with each other.

use std::path::Path;
use std::process::Command;
use std::sync::Mutex;
use tempfile::TempDir;

/// Static mutex to serialize tests that modify environment variables
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Variables mailsearch reads, cleared for the duration of the test
const ISOLATED_VARS: &[&str] = &[
    "CLAUDE_PLUGIN_ROOT",
    "MAILSEARCH_CONFIG",
    "MAILSEARCH_SCRIPT",
    "CLIENT_ID",
    "CLIENT_SECRET",
    "TENANT_ID",
    "EMAIL_ADDRESS",
];

/// Run a test with an isolated HOME and no mailsearch variables set
///
/// `plugin_root`, when given, becomes `CLAUDE_PLUGIN_ROOT`. The closure
/// receives the fake HOME. Everything is restored afterwards.
///
/// # Examples
///
/// ```no_run
/// use mailsearch_testkit::with_isolated_env;
///
/// with_isolated_env(None, |home| {
///     // Neither candidate can resolve here
///     assert!(home.exists());
/// });
/// ```
pub fn with_isolated_env<F, R>(plugin_root: Option<&Path>, f: F) -> R
where
    F: FnOnce(&Path) -> R,
{
    let _guard = ENV_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let original_home = std::env::var_os("HOME");
    let originals: Vec<_> = ISOLATED_VARS
        .iter()
        .map(|name| (*name, std::env::var_os(name)))
        .collect();

    let fake_home = TempDir::new().expect("Failed to create fake HOME");

    // SAFETY: We hold ENV_LOCK, ensuring no other test is modifying env vars concurrently.
    unsafe {
        std::env::set_var("HOME", fake_home.path());
        for name in ISOLATED_VARS {
            std::env::remove_var(name);
        }
        if let Some(root) = plugin_root {
            std::env::set_var("CLAUDE_PLUGIN_ROOT", root);
        }
    }

    let result = f(fake_home.path());

    // SAFETY: We still hold ENV_LOCK, ensuring exclusive access to env vars.
    unsafe {
        match original_home {
            Some(home) => std::env::set_var("HOME", home),
            None => std::env::remove_var("HOME"),
        }
        for (name, value) in originals {
            match value {
                Some(value) => std::env::set_var(name, value),
                None => std::env::remove_var(name),
            }
        }
    }

    result
}

/// Point a child command at `home` and strip every variable mailsearch reads
///
/// Use this for CLI tests instead of [`with_isolated_env`]: the settings
/// only apply to the child, so no lock is needed.
pub fn isolate_command<'a>(cmd: &'a mut Command, home: &Path) -> &'a mut Command {
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env_remove("MAILSEARCH_LOG");
    for name in ISOLATED_VARS {
        cmd.env_remove(name);
    }
    cmd
}
