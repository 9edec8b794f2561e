//! Integration tests for script location

use mailsearch_core::MailsearchError;
use mailsearch_core::config::{Config, ScriptConfig};
use mailsearch_script::{
    CandidateSource, CandidateStatus, candidate_list, inspect_candidates, locate_script,
};
use mailsearch_testkit::{temp_dir_in_workspace, with_isolated_env, write_fake_script};

#[cfg(unix)]
use mailsearch_testkit::write_plain_file;

#[test]
#[cfg(unix)]
fn test_plugin_dir_wins_over_marketplace() {
    let plugin = temp_dir_in_workspace();
    let plugin_script = write_fake_script(
        &plugin.path().join("scripts/read_emails.py"),
        "echo plugin",
    );

    with_isolated_env(Some(plugin.path()), |home| {
        write_fake_script(
            &home.join(".claude/plugins/marketplaces/tools/plugins/tools/scripts/read_emails.py"),
            "echo marketplace",
        );

        let info = locate_script(&candidate_list(&Config::default(), None)).unwrap();
        assert_eq!(info.path, plugin_script);
        assert_eq!(info.source, CandidateSource::Default);
    });
}

#[test]
#[cfg(unix)]
fn test_marketplace_used_when_plugin_root_unset() {
    with_isolated_env(None, |home| {
        let marketplace = write_fake_script(
            &home.join(".claude/plugins/marketplaces/tools/plugins/tools/scripts/read_emails.py"),
            "echo marketplace",
        );

        let info = locate_script(&candidate_list(&Config::default(), None)).unwrap();
        assert_eq!(info.path, marketplace);
        assert!(info.template.starts_with("~/"));
    });
}

#[test]
#[cfg(unix)]
fn test_non_executable_plugin_script_falls_through() {
    let plugin = temp_dir_in_workspace();
    write_plain_file(&plugin.path().join("scripts/read_emails.py"));

    with_isolated_env(Some(plugin.path()), |home| {
        let marketplace = write_fake_script(
            &home.join(".claude/plugins/marketplaces/tools/plugins/tools/scripts/read_emails.py"),
            "echo marketplace",
        );

        let candidates = candidate_list(&Config::default(), None);
        assert_eq!(locate_script(&candidates).unwrap().path, marketplace);

        let report = inspect_candidates(&candidates);
        assert_eq!(report.checks[0].status, CandidateStatus::NotExecutable);
        assert_eq!(report.checks[1].status, CandidateStatus::Found);
    });
}

#[test]
fn test_not_found_enumerates_both_defaults() {
    with_isolated_env(None, |_home| {
        let err = locate_script(&candidate_list(&Config::default(), None)).unwrap_err();

        match &err {
            MailsearchError::ScriptNotFound { searched } => {
                assert_eq!(searched.len(), 2);
                assert!(searched[0].contains("CLAUDE_PLUGIN_ROOT is not set"));
                assert!(searched[1].contains(".claude/plugins/marketplaces"));
                assert!(searched[1].ends_with("(missing)"));
            }
            other => panic!("expected ScriptNotFound, got {:?}", other),
        }
        assert!(err.to_string().contains("Searched locations:"));
    });
}

#[test]
#[cfg(unix)]
fn test_override_beats_config() {
    let temp = temp_dir_in_workspace();
    let override_script = write_fake_script(&temp.path().join("override/read_emails.py"), "true");
    let config_script = write_fake_script(&temp.path().join("config/read_emails.py"), "true");

    let config = Config {
        script: ScriptConfig {
            candidates: vec![config_script.to_string_lossy().into_owned()],
        },
    };

    let override_str = override_script.to_string_lossy().into_owned();
    let info = locate_script(&candidate_list(&config, Some(&override_str))).unwrap();
    assert_eq!(info.path, override_script);
    assert_eq!(info.source, CandidateSource::Override);

    let info = locate_script(&candidate_list(&config, None)).unwrap();
    assert_eq!(info.path, config_script);
    assert_eq!(info.source, CandidateSource::Config);
}

#[test]
#[cfg(unix)]
fn test_location_is_idempotent() {
    let plugin = temp_dir_in_workspace();
    write_fake_script(&plugin.path().join("scripts/read_emails.py"), "true");

    with_isolated_env(Some(plugin.path()), |_home| {
        let candidates = candidate_list(&Config::default(), None);
        let first = locate_script(&candidates).unwrap();
        let second = locate_script(&candidates).unwrap();
        assert_eq!(first, second);

        let missing = temp_dir_in_workspace();
        let candidates = vec![mailsearch_script::Candidate::new(
            missing.path().join("read_emails.py").to_string_lossy(),
            CandidateSource::Config,
        )];
        let a = locate_script(&candidates).unwrap_err().to_string();
        let b = locate_script(&candidates).unwrap_err().to_string();
        assert_eq!(a, b);
    });
}

#[test]
#[cfg(unix)]
fn test_no_caching_between_calls() {
    let temp = temp_dir_in_workspace();
    let path = temp.path().join("read_emails.py");
    let candidates = vec![mailsearch_script::Candidate::new(
        path.to_string_lossy(),
        CandidateSource::Config,
    )];

    assert!(locate_script(&candidates).is_err());

    write_fake_script(&path, "true");
    assert_eq!(locate_script(&candidates).unwrap().path, path);

    std::fs::remove_file(&path).unwrap();
    assert!(locate_script(&candidates).is_err());
}
