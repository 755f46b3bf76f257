use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn devbelt_cmd() -> Command {
    Command::cargo_bin("devbelt").expect("Failed to find devbelt binary")
}

fn parse_jsonl(stdout: &[u8]) -> Vec<Value> {
    let s = String::from_utf8_lossy(stdout);
    s.lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str::<Value>(l).expect("valid jsonl line"))
        .collect()
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

// ============== radix tests ==============

#[test]
fn radix_converts_to_target_base() {
    let mut cmd = devbelt_cmd();
    cmd.args(["radix", "255", "--from", "10", "--to", "16"]);

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["kind"], "conversion");
    assert_eq!(items[0]["label"], "base-16");
    assert_eq!(items[0]["content"], "FF");
}

#[test]
fn radix_fans_out_to_all_display_bases() {
    let mut cmd = devbelt_cmd();
    cmd.args(["radix", "255"]);

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(items.len(), 7);

    let find = |label: &str| {
        items
            .iter()
            .find(|i| i["label"] == label)
            .unwrap_or_else(|| panic!("missing {}", label))["content"]
            .as_str()
            .unwrap()
            .to_string()
    };

    assert_eq!(find("base-2"), "11111111");
    assert_eq!(find("base-8"), "377");
    assert_eq!(find("base-16"), "FF");
}

#[test]
fn radix_parses_hex_source() {
    let mut cmd = devbelt_cmd();
    cmd.args(["radix", "FF", "--from", "16", "--to", "10"]);

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(items[0]["content"], "255");
}

#[test]
fn radix_invalid_character_yields_error_item() {
    let mut cmd = devbelt_cmd();
    cmd.args(["radix", "9", "--from", "2"]);

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["kind"], "error");
    assert_eq!(items[0]["errors"][0]["code"], "INVALID_CHARACTER");
}

#[test]
fn radix_unsupported_base_yields_error_item() {
    let mut cmd = devbelt_cmd();
    cmd.args(["radix", "10", "--to", "65"]);

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(items[0]["errors"][0]["code"], "UNSUPPORTED_BASE");
}

#[test]
fn radix_empty_input_yields_no_result() {
    let mut cmd = devbelt_cmd();
    cmd.arg("radix");

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);
    assert!(items.is_empty());
}

#[test]
fn bases_lists_descriptors() {
    let mut cmd = devbelt_cmd();
    cmd.arg("bases");

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(items.len(), 7);

    let hex = items
        .iter()
        .find(|i| i["label"] == "hexadecimal")
        .expect("hexadecimal descriptor");
    assert_eq!(hex["data"]["radix"], 16);
    assert_eq!(hex["data"]["prefix"], "0x");
    assert_eq!(hex["data"]["alphabet"], "0123456789ABCDEF");
}

// ============== css tests ==============

#[test]
fn css_fmt_reads_stdin() {
    let mut cmd = devbelt_cmd();
    cmd.args(["--format", "raw", "css", "fmt"]);
    cmd.write_stdin("a{color:red}");

    let assert = cmd.assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);

    assert!(stdout.contains("a {\n  color: red;\n}"));
}

#[test]
fn css_fmt_write_rewrites_file() {
    let temp = tempdir().unwrap();
    let file = temp.path().join("styles.css");
    write_file(&file, "a{color:red}");

    let mut cmd = devbelt_cmd();
    cmd.arg("css")
        .arg("fmt")
        .arg(&file)
        .arg("--write")
        .arg("--quiet");

    cmd.assert().success();

    let rewritten = fs::read_to_string(&file).unwrap();
    assert_eq!(rewritten, "a {\n  color: red;\n}\n");
}

#[test]
fn css_min_collapses_stylesheet() {
    let mut cmd = devbelt_cmd();
    cmd.args(["--format", "raw", "css", "min"]);
    cmd.write_stdin("a {\n  color: red;\n}\n");

    let assert = cmd.assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);

    assert!(stdout.contains("a{color:red}"));
}

#[test]
fn css_check_reports_typo_with_suggestion() {
    let mut cmd = devbelt_cmd();
    cmd.args(["css", "check"]);
    cmd.write_stdin("a { colour: red; }");

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["kind"], "check");
    assert_eq!(items[0]["errors"][0]["code"], "UNKNOWN_PROPERTY");
    assert!(items[0]["errors"][0]["message"]
        .as_str()
        .unwrap()
        .contains("did you mean 'color'"));
}

#[test]
fn css_check_clean_stylesheet_has_no_errors() {
    let mut cmd = devbelt_cmd();
    cmd.args(["css", "check"]);
    cmd.write_stdin("a { color: red; }");

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);
    assert!(items[0].get("errors").is_none());
}

#[test]
fn css_fmt_walks_directories() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.css"), "a{color:red}");
    write_file(&temp.path().join("sub/b.css"), "b{color:blue}");
    write_file(&temp.path().join("notes.txt"), "not css");

    let mut cmd = devbelt_cmd();
    cmd.arg("css").arg("fmt").arg(temp.path());

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);
    assert_eq!(items.len(), 2);
}

// ============== unit tests ==============

#[test]
fn unit_converts_px_to_rem() {
    let mut cmd = devbelt_cmd();
    cmd.args(["unit", "24px", "--to", "rem"]);

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["content"], "1.5rem");
}

#[test]
fn unit_respects_base_px() {
    let mut cmd = devbelt_cmd();
    cmd.args(["unit", "20px", "--to", "rem", "--base-px", "10"]);

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);
    assert_eq!(items[0]["content"], "2rem");
}

#[test]
fn unit_converts_to_all_units_by_default() {
    let mut cmd = devbelt_cmd();
    cmd.args(["unit", "16px"]);

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);
    assert_eq!(items.len(), 12);

    let rem = items.iter().find(|i| i["label"] == "rem").unwrap();
    assert_eq!(rem["content"], "1rem");
}

#[test]
fn unit_unknown_unit_yields_error_item() {
    let mut cmd = devbelt_cmd();
    cmd.args(["unit", "12parsec"]);

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(items[0]["kind"], "error");
    assert_eq!(items[0]["errors"][0]["code"], "UNKNOWN_UNIT");
}

// ============== http tests ==============

#[test]
fn http_snippet_emits_all_targets() {
    let mut cmd = devbelt_cmd();
    cmd.args([
        "http",
        "snippet",
        "--url",
        "https://api.example.com/items",
        "--method",
        "post",
        "-H",
        "Content-Type: application/json",
        "--body",
        r#"{"name":"belt"}"#,
    ]);

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(items.len(), 3);
    let labels: Vec<_> = items
        .iter()
        .map(|i| i["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["curl", "fetch", "python"]);

    let curl = items[0]["content"].as_str().unwrap();
    assert!(curl.starts_with("curl -X POST"));
    assert!(curl.contains("Content-Type: application/json"));
}

#[test]
fn http_snippet_single_target() {
    let mut cmd = devbelt_cmd();
    cmd.args([
        "http",
        "snippet",
        "--url",
        "https://example.com",
        "--target",
        "python",
    ]);

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(items.len(), 1);
    assert!(items[0]["content"]
        .as_str()
        .unwrap()
        .starts_with("import requests"));
}

#[test]
fn http_snippet_invalid_url_yields_error_item() {
    let mut cmd = devbelt_cmd();
    cmd.args(["http", "snippet", "--url", "example.com"]);

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(items[0]["kind"], "error");
    assert_eq!(items[0]["errors"][0]["code"], "INVALID_URL");
}

#[test]
fn http_mock_renders_status_line() {
    let mut cmd = devbelt_cmd();
    cmd.args([
        "http",
        "mock",
        "--url",
        "https://api.example.com/items",
        "--method",
        "post",
        "--status",
        "201",
    ]);

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(items[0]["kind"], "mock");
    let content = items[0]["content"].as_str().unwrap();
    assert!(content.starts_with("HTTP/1.1 201 Created"));
    assert!(content.contains("\"mock\": true"));
}

// ============== k8s tests ==============

#[test]
fn k8s_deployment_generates_yaml() {
    let mut cmd = devbelt_cmd();
    cmd.args([
        "k8s",
        "deployment",
        "web",
        "--image",
        "nginx:1.27",
        "--replicas",
        "3",
        "--port",
        "80",
    ]);

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);

    assert_eq!(items[0]["kind"], "manifest");
    assert_eq!(items[0]["label"], "deployment.yaml");
    let yaml = items[0]["content"].as_str().unwrap();
    assert!(yaml.contains("apiVersion: apps/v1"));
    assert!(yaml.contains("replicas: 3"));
    assert!(yaml.contains("image: nginx:1.27"));
    assert!(yaml.contains("app: web"));
}

#[test]
fn k8s_secret_uses_string_data() {
    let mut cmd = devbelt_cmd();
    cmd.args(["k8s", "secret", "app-secret", "--data", "API_KEY=hunter2"]);

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);

    let yaml = items[0]["content"].as_str().unwrap();
    assert!(yaml.contains("stringData:"));
    assert!(yaml.contains("API_KEY: hunter2"));
}

#[test]
fn k8s_rejects_malformed_label() {
    let mut cmd = devbelt_cmd();
    cmd.args(["k8s", "namespace", "staging", "--label", "notapair"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid KEY=VALUE pair"));
}

// ============== preset tests ==============

#[test]
fn preset_save_list_get_delete_round_trip() {
    let temp = tempdir().unwrap();
    let store = temp.path().to_str().unwrap();

    let mut save = devbelt_cmd();
    save.args([
        "--store", store, "preset", "save", "hex", "--tool", "radix", "--args", r#"{"from":16}"#,
    ]);
    save.assert().success();

    let mut list = devbelt_cmd();
    list.args(["--store", store, "preset", "list"]);
    let assert = list.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["label"], "hex");
    assert_eq!(items[0]["data"]["tool"], "radix");
    assert_eq!(items[0]["data"]["args"]["from"], 16);

    let mut get = devbelt_cmd();
    get.args(["--store", store, "preset", "get", "hex"]);
    let assert = get.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);
    assert_eq!(items[0]["kind"], "preset");

    let mut delete = devbelt_cmd();
    delete.args(["--store", store, "preset", "delete", "hex"]);
    delete.assert().success();

    let mut list_again = devbelt_cmd();
    list_again.args(["--store", store, "preset", "list"]);
    let assert = list_again.assert().success();
    assert!(parse_jsonl(&assert.get_output().stdout).is_empty());
}

#[test]
fn preset_get_missing_yields_error_item() {
    let temp = tempdir().unwrap();

    let mut cmd = devbelt_cmd();
    cmd.args([
        "--store",
        temp.path().to_str().unwrap(),
        "preset",
        "get",
        "nope",
    ]);

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);
    assert_eq!(items[0]["errors"][0]["code"], "PRESET_NOT_FOUND");
}

#[test]
fn preset_save_rejects_invalid_json() {
    let temp = tempdir().unwrap();

    let mut cmd = devbelt_cmd();
    cmd.args([
        "--store",
        temp.path().to_str().unwrap(),
        "preset",
        "save",
        "bad",
        "--tool",
        "radix",
        "--args",
        "{not json",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not valid JSON"));
}

#[test]
fn preset_survives_malformed_store() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("presets.json"), "{broken");

    let mut cmd = devbelt_cmd();
    cmd.args(["--store", temp.path().to_str().unwrap(), "preset", "list"]);

    let assert = cmd.assert().success();
    assert!(parse_jsonl(&assert.get_output().stdout).is_empty());
}

// ============== output plumbing tests ==============

#[test]
fn out_flag_writes_primary_output_to_file() {
    let temp = tempdir().unwrap();
    let out_file = temp.path().join("result.txt");

    let mut cmd = devbelt_cmd();
    cmd.arg("--quiet")
        .arg("--out")
        .arg(&out_file)
        .args(["radix", "255", "--to", "16"]);

    cmd.assert().success();

    assert_eq!(fs::read_to_string(&out_file).unwrap(), "FF");
}

#[test]
fn doctor_reports_integrations() {
    let mut cmd = devbelt_cmd();
    cmd.arg("--quiet").arg("doctor");

    let assert = cmd.assert().success();
    let items = parse_jsonl(&assert.get_output().stdout);
    assert!(items.len() >= 5);
}

#[test]
fn json_format_emits_array() {
    let mut cmd = devbelt_cmd();
    cmd.args(["--format", "json", "radix", "255", "--to", "16"]);

    let assert = cmd.assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let parsed: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert!(parsed.is_array());
    assert_eq!(parsed[0]["content"], "FF");
}
