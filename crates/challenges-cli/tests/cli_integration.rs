use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::{tempdir, TempDir};

/// Runs the binary with an empty config home so a developer's own config
/// never leaks into the assertions.
fn challenges(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("challenges").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path())
        .env_remove("CHALLENGES_CONFIG")
        .env_remove("CHALLENGES_DATA_DIR")
        .env_remove("CHALLENGES_DEBUG_LOG");
    cmd
}

fn parse_json_output(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("Failed to parse JSON output")
}

fn run_ok(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    let json = parse_json_output(&output);
    assert_eq!(json["success"], true);
    json
}

const EXTRA_CHALLENGE: &str = r#"{
  "id": "event-emitter",
  "title": "Event Emitter",
  "domain": "custom-hooks-browser",
  "subcategory": "event-systems",
  "difficulty": "Mid",
  "statement": "Implement `on`, `off` and `emit`.",
  "constraints": ["Listeners run in registration order"],
  "codeLines": ["class Emitter {}"],
  "language": "typescript",
  "commonMistakes": []
}"#;

mod list_tests {
    use super::*;

    #[test]
    fn test_list_all() {
        let home = tempdir().unwrap();
        let json = run_ok(challenges(&home).arg("list"));

        assert_eq!(json["data"]["count"], 10);
        let items = json["data"]["items"].as_array().unwrap();
        assert_eq!(items[0]["id"], "nested-comments");
        assert_eq!(items[0]["has_demo"], true);
        assert_eq!(items[9]["id"], "memoize-ttl");
    }

    #[test]
    fn test_list_by_subcategory() {
        let home = tempdir().unwrap();
        let json = run_ok(challenges(&home).args(["list", "--subcategory", "object-logic"]));

        let ids: Vec<&str> = json["data"]["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["deep-merge", "memoize-ttl"]);
    }

    #[test]
    fn test_list_by_domain() {
        let home = tempdir().unwrap();
        let json = run_ok(challenges(&home).args(["list", "--domain", "core-cs-javascript"]));
        assert_eq!(json["data"]["count"], 4);
    }

    #[test]
    fn test_list_rejects_unknown_subcategory() {
        let home = tempdir().unwrap();
        challenges(&home)
            .args(["list", "--subcategory", "animations"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("animations"));
    }
}

mod show_tests {
    use super::*;

    #[test]
    fn test_show_challenge() {
        let home = tempdir().unwrap();
        let json = run_ok(challenges(&home).args(["show", "--id", "nested-comments"]));

        assert_eq!(json["data"]["title"], "Nested Comments Thread");
        assert_eq!(json["data"]["subcategory"], "recursive-ui");
        assert_eq!(json["data"]["demoComponentKey"], "nested-comments");
        assert!(json["data"]["code"].as_str().unwrap().contains('\n'));
    }

    #[test]
    fn test_show_unknown_challenge() {
        let home = tempdir().unwrap();
        let output = challenges(&home)
            .args(["show", "--id", "missing"])
            .assert()
            .failure()
            .get_output()
            .stderr
            .clone();

        let json = parse_json_output(&output);
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Challenge not found: missing");
    }
}

mod taxonomy_tests {
    use super::*;

    #[test]
    fn test_taxonomy_counts() {
        let home = tempdir().unwrap();
        let json = run_ok(challenges(&home).arg("taxonomy"));

        let domains = json["data"]["items"].as_array().unwrap();
        assert_eq!(domains.len(), 4);
        assert_eq!(domains[0]["id"], "react-architecture");

        let total: u64 = domains.iter().map(|d| d["count"].as_u64().unwrap()).sum();
        assert_eq!(total, 10);

        let recursive = domains[0]["subcategories"]
            .as_array()
            .unwrap()
            .iter()
            .find(|s| s["id"] == "recursive-ui")
            .unwrap();
        assert_eq!(recursive["count"], 1);
    }
}

mod window_tests {
    use super::*;

    #[test]
    fn test_window_at_top() {
        let home = tempdir().unwrap();
        let json = run_ok(challenges(&home).args([
            "window",
            "--scroll-offset",
            "0",
            "--item-count",
            "10000",
        ]));

        assert_eq!(json["data"]["start_index"], 0);
        assert_eq!(json["data"]["end_index"], 8);
        assert_eq!(json["data"]["rendered"], 9);
        assert_eq!(json["data"]["offset_y"], 0.0);
        assert_eq!(json["data"]["total_height"], 600000.0);
    }

    #[test]
    fn test_window_mid_list() {
        let home = tempdir().unwrap();
        let json = run_ok(challenges(&home).args([
            "window",
            "--scroll-offset",
            "1200",
            "--item-count",
            "10000",
        ]));

        assert_eq!(json["data"]["start_index"], 17);
        assert_eq!(json["data"]["end_index"], 28);
        assert_eq!(json["data"]["offset_y"], 1020.0);
    }

    #[test]
    fn test_window_max_buffer_covers_everything() {
        let home = tempdir().unwrap();
        let json = run_ok(challenges(&home).args([
            "window",
            "--scroll-offset",
            "1200",
            "--item-count",
            "10000",
            "--buffer",
            "18446744073709551615",
        ]));

        assert_eq!(json["data"]["start_index"], 0);
        assert_eq!(json["data"]["end_index"], 9999);
        assert_eq!(json["data"]["rendered"], 10000);
    }

    #[test]
    fn test_window_huge_scroll_offset_is_empty() {
        let home = tempdir().unwrap();
        let json = run_ok(challenges(&home).args([
            "window",
            "--scroll-offset",
            "1e19",
            "--item-count",
            "10",
            "--item-height",
            "1",
            "--viewport-height",
            "1",
        ]));

        assert_eq!(json["data"]["rendered"], 0);
        assert!(json["data"]["end_index"].is_null());
    }

    #[test]
    fn test_window_empty_list() {
        let home = tempdir().unwrap();
        let json = run_ok(challenges(&home).args([
            "window",
            "--scroll-offset",
            "0",
            "--item-count",
            "0",
        ]));

        assert_eq!(json["data"]["rendered"], 0);
        assert!(json["data"]["end_index"].is_null());
    }

    #[test]
    fn test_window_rejects_zero_item_height() {
        let home = tempdir().unwrap();
        let output = challenges(&home)
            .args([
                "window",
                "--scroll-offset",
                "0",
                "--item-count",
                "5",
                "--item-height",
                "0",
            ])
            .assert()
            .failure()
            .get_output()
            .stderr
            .clone();

        let json = parse_json_output(&output);
        assert_eq!(json["success"], false);
        assert!(json["error"].as_str().unwrap().contains("item_height"));
    }

    #[test]
    fn test_window_uses_config_defaults() {
        let home = tempdir().unwrap();
        let config = home.path().join("custom.toml");
        fs::write(
            &config,
            "[virtual_list]\nitem_height = 20.0\nviewport_height = 100.0\nbuffer = 0\n",
        )
        .unwrap();

        let json = run_ok(challenges(&home).args([
            "--config",
            config.to_str().unwrap(),
            "window",
            "--scroll-offset",
            "40",
            "--item-count",
            "100",
        ]));

        assert_eq!(json["data"]["start_index"], 2);
        assert_eq!(json["data"]["end_index"], 7);
    }
}

mod config_tests {
    use super::*;

    #[test]
    fn test_data_dir_adds_challenges() {
        let home = tempdir().unwrap();
        let data = tempdir().unwrap();
        fs::write(data.path().join("event-emitter.json"), EXTRA_CHALLENGE).unwrap();

        let json = run_ok(challenges(&home).args([
            "--data-dir",
            data.path().to_str().unwrap(),
            "list",
            "--domain",
            "custom-hooks-browser",
        ]));

        assert_eq!(json["data"]["count"], 1);
        assert_eq!(json["data"]["items"][0]["id"], "event-emitter");
    }

    #[test]
    fn test_data_dir_from_env() {
        let home = tempdir().unwrap();
        let data = tempdir().unwrap();
        fs::write(data.path().join("event-emitter.json"), EXTRA_CHALLENGE).unwrap();

        let json = run_ok(
            challenges(&home)
                .env("CHALLENGES_DATA_DIR", data.path())
                .arg("list"),
        );
        assert_eq!(json["data"]["count"], 11);
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        let home = tempdir().unwrap();
        let missing = home.path().join("nope.toml");

        challenges(&home)
            .args(["--config", missing.to_str().unwrap(), "list"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("nope.toml"));
    }

    #[test]
    fn test_completions() {
        let home = tempdir().unwrap();
        challenges(&home)
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("challenges"));
    }
}
