//! Integration tests for `config` commands via CLI.
//!
//! These tests verify that:
//! - `mindmap config show` reports every setting with its source
//! - `mindmap config path` reports the config file location
//! - invalid config files are rejected

mod common;

use common::{TOPIC_TREE, TestEnv, parse_json};
use predicates::prelude::*;

fn setting<'a>(json: &'a serde_json::Value, key: &str) -> &'a serde_json::Value {
    json["settings"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["key"] == key)
        .unwrap()
}

// === Config Show ===

#[test]
fn test_config_show_defaults() {
    let env = TestEnv::new();

    let output = env.mindmap().args(["config", "show"]).output().unwrap();
    assert!(output.status.success());

    let json = parse_json(&output.stdout);
    assert!(json["path"].is_null());
    assert_eq!(json["settings"].as_array().unwrap().len(), 6);
    assert_eq!(setting(&json, "radius")["value"], 200.0);
    assert_eq!(setting(&json, "radius")["source"], "default");
    assert_eq!(setting(&json, "child-node-size")["value"], 60.0);
    assert_eq!(setting(&json, "center-node-size")["value"], 80.0);
    assert_eq!(setting(&json, "surface-width")["value"], 800.0);
    assert_eq!(setting(&json, "surface-height")["value"], 600.0);
    assert_eq!(setting(&json, "output-format")["value"], "json");
}

#[test]
fn test_config_show_file_values() {
    let env = TestEnv::new();
    let path = env.write_config("radius 250\nchild-node-size 45\n");

    let output = env.mindmap().args(["config", "show"]).output().unwrap();
    assert!(output.status.success());

    let json = parse_json(&output.stdout);
    let source = format!("file:{}", path.display());
    assert_eq!(json["path"], path.display().to_string());
    assert_eq!(setting(&json, "radius")["value"], 250.0);
    assert_eq!(setting(&json, "radius")["source"], source.as_str());
    assert_eq!(setting(&json, "child-node-size")["value"], 45.0);
    assert_eq!(setting(&json, "center-node-size")["source"], "default");
}

#[test]
fn test_config_show_human() {
    let env = TestEnv::new();

    env.mindmap()
        .args(["config", "show", "-H"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config file: (none)"))
        .stdout(predicate::str::contains("  radius = 200.0 (default)"))
        .stdout(predicate::str::contains("  output-format = json (default)"));
}

#[test]
fn test_config_show_rejects_invalid_value() {
    let env = TestEnv::new();
    env.write_config("radius -10\n");

    env.mindmap()
        .args(["config", "show"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid configuration"))
        .stderr(predicate::str::contains("radius must be a positive number"));
}

#[test]
fn test_config_show_rejects_unparsable_file() {
    let env = TestEnv::new();
    env.write_config("radius {{{\n");

    env.mindmap()
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse KDL"));
}

#[test]
fn test_explicit_config_must_exist() {
    let env = TestEnv::new();
    env.write_file("tree.json", TOPIC_TREE);

    env.mindmap()
        .args(["layout", "tree.json", "--config", "nope.kdl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

// === Config Path ===

#[test]
fn test_config_path_uses_config_dir() {
    let env = TestEnv::new();

    let output = env.mindmap().args(["config", "path"]).output().unwrap();
    assert!(output.status.success());

    let json = parse_json(&output.stdout);
    assert_eq!(json["path"], env.config_path().display().to_string());
    assert_eq!(json["exists"], false);
}

#[test]
fn test_config_path_existing_human() {
    let env = TestEnv::new();
    let path = env.write_config("radius 100\n");

    env.mindmap()
        .args(["config", "path", "-H"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{}\n", path.display())));
}
