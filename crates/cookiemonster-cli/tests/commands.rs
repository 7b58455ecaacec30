//! End-to-end command tests against a settings directory on disk

use cookiemonster_cli::cli::{EnrichArgs, EvaluateArgs};
use cookiemonster_cli::commands::{execute_check_config, execute_enrich, execute_evaluate};
use cookiemonster_cli::setup::{build_registry, load_config};
use cookiemonster_cli::CliError;
use cookiemonster_config::CookieMonsterConfig;
use cookiemonster_domain::{MetadataSnapshot, RetrievalError};
use cookiemonster_loaders::MockRetriever;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SETTINGS: &str = r#"
[retrieval]
log = "sqlite:///tmp/retrieval.db"
period = 60
since = 0

[cookiejar]
url = "http://localhost:5984"
database = "cookiejar"
max_requests_per_second = 10

[processing]
max_threads = 4
rules = "rules.toml"
notification_receivers = "receivers.toml"
enrichment_loaders = "loaders.toml"

[baton]
bin = "/nonexistent/baton/bin"
zone = "seq"

[api]
port = 5000

[influxdb]
host = "localhost"
port = 8086
username = "u"
password = "p"
database = "cookiemonster"
"#;

const RULES: &str = r#"
[[library_update]]
name = "study_interval"
study_id = "3765"

[[library_update]]
name = "study_page"
study_id = "3781"
priority = 1
"#;

const LOADERS: &str = r#"
[[irods]]
name = "irods_data_object"
"#;

fn settings_dir() -> (TempDir, CookieMonsterConfig) {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("settings.toml"), SETTINGS).unwrap();
    fs::write(dir.path().join("rules.toml"), RULES).unwrap();
    fs::write(dir.path().join("loaders.toml"), LOADERS).unwrap();
    let config = load_config(&dir.path().join("settings.toml")).unwrap();
    (dir, config)
}

fn write_cookie(dir: &Path, json: &str) -> std::path::PathBuf {
    let path = dir.join("cookie.json");
    fs::write(&path, json).unwrap();
    path
}

#[test]
fn test_check_config_lists_rules_and_loaders() {
    let (_dir, config) = settings_dir();
    let mut out = Vec::new();

    execute_check_config(&config, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("study_interval (priority 0)"));
    assert!(text.contains("study_page (priority 1)"));
    assert!(text.contains("irods_data_object (priority 0)"));
}

#[test]
fn test_check_config_missing_rules_file() {
    let (dir, config) = settings_dir();
    fs::remove_file(dir.path().join("rules.toml")).unwrap();

    let result = execute_check_config(&config, &mut Vec::new());
    assert!(matches!(result, Err(CliError::Rules(_))));
}

#[test]
fn test_evaluate_cross_enrichment_match() {
    let (dir, config) = settings_dir();
    let registry = build_registry(&config, MockRetriever::default()).unwrap();
    let cookie = write_cookie(
        dir.path(),
        r#"{
            "identifier": "/seq/1/1.bam",
            "enrichments": [
                {"source": "irods_update", "timestamp": 1, "metadata": {"target": ["library"]}},
                {"source": "irods_data_object", "timestamp": 2, "metadata": {"study_id": ["3765"]}}
            ]
        }"#,
    );

    let mut out = Vec::new();
    execute_evaluate(EvaluateArgs { cookie }, &registry, &mut out).unwrap();

    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["identifier"], "/seq/1/1.bam");
    // Last enrichment came from the loader itself
    assert_eq!(json["eligible_loaders"].as_array().unwrap().len(), 0);
    let actions = json["actions"].as_array().unwrap();
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0]["source"], "study_interval");
    assert_eq!(actions[0]["notifications"][0]["data"], "/seq/1/1.bam");
}

#[test]
fn test_evaluate_fresh_cookie() {
    let (dir, config) = settings_dir();
    let registry = build_registry(&config, MockRetriever::default()).unwrap();
    let cookie = write_cookie(dir.path(), r#"{"identifier": "sample1.bam"}"#);

    let mut out = Vec::new();
    execute_evaluate(EvaluateArgs { cookie }, &registry, &mut out).unwrap();

    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["eligible_loaders"][0], "irods_data_object");
    assert_eq!(json["actions"].as_array().unwrap().len(), 0);
}

#[test]
fn test_enrich_appends_enrichment() {
    let (_dir, config) = settings_dir();
    let mut retriever = MockRetriever::default();
    retriever.add_snapshot(
        "sample1.bam",
        MetadataSnapshot::builder().value("study_id", "3765").build(),
    );
    let registry = build_registry(&config, retriever).unwrap();

    let mut out = Vec::new();
    let args = EnrichArgs {
        identifier: "sample1.bam".to_string(),
        cookie: None,
    };
    execute_enrich(args, &registry, &mut out).unwrap();

    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let enrichments = json["enrichments"].as_array().unwrap();
    assert_eq!(enrichments.len(), 1);
    assert_eq!(enrichments[0]["source"], "irods_data_object");
    assert_eq!(enrichments[0]["metadata"]["study_id"][0], "3765");
}

#[test]
fn test_enrich_ineligible_cookie() {
    let (_dir, config) = settings_dir();
    let registry = build_registry(&config, MockRetriever::default()).unwrap();

    let args = EnrichArgs {
        identifier: "notes.txt".to_string(),
        cookie: None,
    };
    let result = execute_enrich(args, &registry, &mut Vec::new());
    assert!(matches!(result, Err(CliError::NoEligibleLoader(_))));
}

#[test]
fn test_enrich_propagates_retrieval_error() {
    let (_dir, config) = settings_dir();
    let mut retriever = MockRetriever::default();
    retriever.add_error(
        "sample1.bam",
        RetrievalError::Transport("iRODS unavailable".to_string()),
    );
    let registry = build_registry(&config, retriever).unwrap();

    let args = EnrichArgs {
        identifier: "sample1.bam".to_string(),
        cookie: None,
    };
    let result = execute_enrich(args, &registry, &mut Vec::new());
    assert!(matches!(
        result,
        Err(CliError::Retrieval(RetrievalError::Transport(_)))
    ));
}
