//! Doctor command - environment health check

use crate::context::{Context, ContextArgs};
use anyhow::Result;
use chrono::Utc;
use colored::Colorize;
use mailsearch_core::config::ConfigSource;
use mailsearch_core::credentials::CredentialStatus;
use mailsearch_script::inspect_candidates;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Doctor command JSON output schema
#[derive(Debug, Serialize, Deserialize)]
struct DoctorOutput {
    schema_version: String,
    timestamp: String,
    checks: Vec<Check>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Check {
    id: String,
    name: String,
    status: CheckStatus,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<BTreeMap<String, serde_json::Value>>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum CheckStatus {
    Ok,
    Warning,
    Error,
}

/// Run environment health check
///
/// Always returns Ok(()) - doctor command always exits 0
pub fn run(json: bool, args: ContextArgs) -> Result<()> {
    // Try to load context, but continue even if it fails
    let ctx_result = Context::new(&args);

    let mut checks = Vec::new();

    // Check 1: Config validity
    checks.push(match &ctx_result {
        Ok(ctx) => {
            let message = match &ctx.config_source {
                ConfigSource::Explicit(path) | ConfigSource::UserDefault(path) => {
                    format!("{} is valid", path.display())
                }
                ConfigSource::BuiltIn => "no config file; using built-in locations".to_string(),
            };
            Check {
                id: "config_valid".to_string(),
                name: "Configuration file".to_string(),
                status: CheckStatus::Ok,
                message,
                details: None,
            }
        }
        Err(e) => Check {
            id: "config_valid".to_string(),
            name: "Configuration file".to_string(),
            status: CheckStatus::Error,
            message: format!("Failed to load config: {}", e),
            details: None,
        },
    });

    // Check 2: Script availability (only if context loaded successfully)
    if let Ok(ctx) = &ctx_result {
        let report = inspect_candidates(&ctx.candidates);
        let mut details = BTreeMap::new();
        details.insert(
            "searched_locations".to_string(),
            serde_json::Value::Array(
                report
                    .searched_locations()
                    .into_iter()
                    .map(serde_json::Value::String)
                    .collect(),
            ),
        );

        checks.push(match report.found() {
            Some(info) => {
                details.insert(
                    "path".to_string(),
                    serde_json::Value::String(info.path.display().to_string()),
                );
                details.insert(
                    "source".to_string(),
                    serde_json::Value::String(info.source.to_string()),
                );
                Check {
                    id: "script_available".to_string(),
                    name: "read_emails.py".to_string(),
                    status: CheckStatus::Ok,
                    message: format!("found at {}", info.path.display()),
                    details: Some(details),
                }
            }
            None => Check {
                id: "script_available".to_string(),
                name: "read_emails.py".to_string(),
                status: CheckStatus::Error,
                message: "not found in any candidate location".to_string(),
                details: Some(details),
            },
        });
    }

    // Check 3: Credentials
    checks.push(credentials_check(&CredentialStatus::from_env()));

    let output = DoctorOutput {
        schema_version: "1.0".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        checks,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_human_readable(&output);
    }

    Ok(())
}

fn credentials_check(status: &CredentialStatus) -> Check {
    let mut details = BTreeMap::new();
    details.insert(
        "mailbox".to_string(),
        serde_json::Value::String(if status.mailbox_configured {
            "EMAIL_ADDRESS".to_string()
        } else {
            "/me".to_string()
        }),
    );

    if status.is_complete() {
        Check {
            id: "credentials".to_string(),
            name: "Graph credentials".to_string(),
            status: CheckStatus::Ok,
            message: "CLIENT_ID, CLIENT_SECRET and TENANT_ID are set".to_string(),
            details: Some(details),
        }
    } else {
        details.insert(
            "missing".to_string(),
            serde_json::Value::Array(
                status
                    .missing
                    .iter()
                    .cloned()
                    .map(serde_json::Value::String)
                    .collect(),
            ),
        );
        // read_emails.py may still find them in its .env file
        Check {
            id: "credentials".to_string(),
            name: "Graph credentials".to_string(),
            status: CheckStatus::Warning,
            message: format!(
                "{} not set in the environment; the script's .env file must provide them",
                status.missing.join(", ")
            ),
            details: Some(details),
        }
    }
}

/// Print human-readable output
fn print_human_readable(output: &DoctorOutput) {
    println!("{}", "Environment Health Check".bold());
    println!();

    println!("{}", "Checks:".bold());
    for check in &output.checks {
        let status_str = match check.status {
            CheckStatus::Ok => "✓".green(),
            CheckStatus::Warning => "⚠".yellow(),
            CheckStatus::Error => "✗".red(),
        };

        println!("  {} {}: {}", status_str, check.name.bold(), check.message);

        if let Some(details) = &check.details {
            for (key, value) in details {
                println!("      {}: {}", key, value);
            }
        }
    }

    println!();
    println!("Timestamp: {}", output.timestamp);
}
