//! Golden tests for devbelt
//!
//! These tests verify that command outputs match expected golden values.
//! Golden tests ensure:
//! - Output format stability across versions
//! - Consistent conversion and rendering behavior
//! - No unexpected regressions in output structure

use assert_cmd::Command;
use serde_json::Value;
use std::path::PathBuf;

/// Get the path to the fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Create a command for running the devbelt binary
fn devbelt_cmd() -> Command {
    Command::cargo_bin("devbelt").expect("Failed to find devbelt binary")
}

/// Parse JSONL output into a vector of JSON values
fn parse_jsonl(output: &str) -> Vec<Value> {
    output
        .lines()
        .filter(|l| !l.trim().is_empty())
        .filter_map(|l| serde_json::from_str::<Value>(l).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Radix Goldens ====================

    #[test]
    fn golden_radix_255_across_display_bases() {
        let mut cmd = devbelt_cmd();
        cmd.args(["radix", "255"]);

        let output = cmd.output().expect("failed to execute");
        let stdout = String::from_utf8_lossy(&output.stdout);
        let items = parse_jsonl(&stdout);

        let pairs: Vec<(String, String)> = items
            .iter()
            .map(|i| {
                (
                    i["label"].as_str().unwrap().to_string(),
                    i["content"].as_str().unwrap().to_string(),
                )
            })
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("base-2".to_string(), "11111111".to_string()),
                ("base-8".to_string(), "377".to_string()),
                ("base-10".to_string(), "255".to_string()),
                ("base-16".to_string(), "FF".to_string()),
                ("base-32".to_string(), "7Z".to_string()),
                ("base-36".to_string(), "73".to_string()),
                ("base-64".to_string(), "3/".to_string()),
            ]
        );
    }

    #[test]
    fn golden_radix_item_structure() {
        let mut cmd = devbelt_cmd();
        cmd.args(["radix", "255", "--to", "16"]);

        let output = cmd.output().expect("failed to execute");
        let stdout = String::from_utf8_lossy(&output.stdout);
        let items = parse_jsonl(&stdout);

        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item["kind"], "conversion");
        assert_eq!(item["tool"], "radix");
        assert_eq!(item["data"]["radix"], 16);
        assert_eq!(item["data"]["value"], "255");
        assert_eq!(item["data"]["name"], "hexadecimal");
        assert!(item["meta"].is_object(), "meta field must exist");
    }

    // ==================== Bases Goldens ====================

    #[test]
    fn golden_bases_alphabets() {
        let mut cmd = devbelt_cmd();
        cmd.arg("bases");

        let output = cmd.output().expect("failed to execute");
        let stdout = String::from_utf8_lossy(&output.stdout);
        let items = parse_jsonl(&stdout);

        let alphabet = |name: &str| {
            items
                .iter()
                .find(|i| i["label"] == name)
                .unwrap_or_else(|| panic!("missing {}", name))["data"]["alphabet"]
                .as_str()
                .unwrap()
                .to_string()
        };

        assert_eq!(alphabet("binary"), "01");
        assert_eq!(alphabet("octal"), "01234567");
        assert_eq!(alphabet("hexadecimal"), "0123456789ABCDEF");
        assert_eq!(alphabet("base32-crockford"), "0123456789ABCDEFGHJKMNPQRSTVWXYZ");
        assert_eq!(
            alphabet("base64"),
            "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz+/"
        );
    }

    // ==================== CSS Goldens ====================

    #[test]
    fn golden_css_fmt_fixture_raw_output() {
        let fixture = fixtures_dir().join("sample.css");

        let mut cmd = devbelt_cmd();
        cmd.arg("--format").arg("raw").arg("css").arg("fmt").arg(&fixture);

        let output = cmd.output().expect("failed to execute");
        let stdout = String::from_utf8_lossy(&output.stdout);

        let expected = "/* sample */\n\
a {\n\
  color: red;\n\
  background: blue;\n\
}\n\
\n\
@media (min-width:600px) {\n\
  b {\n\
    margin: 0;\n\
  }\n\
}\n";

        assert_eq!(stdout, format!("{}\n", expected));
    }

    #[test]
    fn golden_css_fmt_item_structure() {
        let fixture = fixtures_dir().join("sample.css");

        let mut cmd = devbelt_cmd();
        cmd.arg("css").arg("fmt").arg(&fixture);

        let output = cmd.output().expect("failed to execute");
        let stdout = String::from_utf8_lossy(&output.stdout);
        let items = parse_jsonl(&stdout);

        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item["kind"], "stylesheet");
        assert_eq!(item["tool"], "css");
        assert!(item["label"].as_str().unwrap().ends_with("sample.css"));
        assert!(item["meta"]["input_bytes"].as_u64().unwrap() > 0);
        assert!(item["meta"]["output_bytes"].as_u64().unwrap() > 0);
        // XXH3 hash is 16 hex chars
        assert_eq!(item["meta"]["hash"].as_str().unwrap().len(), 16);
    }

    #[test]
    fn golden_css_min_fixture() {
        let fixture = fixtures_dir().join("sample.css");

        let mut cmd = devbelt_cmd();
        cmd.arg("--format").arg("raw").arg("css").arg("min").arg(&fixture);

        let output = cmd.output().expect("failed to execute");
        let stdout = String::from_utf8_lossy(&output.stdout);

        assert_eq!(
            stdout.trim_end(),
            "a{color:red;background:blue}@media (min-width:600px){b{margin:0}}"
        );
    }

    // ==================== Markdown Rendering Goldens ====================

    #[test]
    fn golden_markdown_rendering_for_conversions() {
        let mut cmd = devbelt_cmd();
        cmd.args(["--format", "md", "radix", "255", "--to", "16"]);

        let output = cmd.output().expect("failed to execute");
        let stdout = String::from_utf8_lossy(&output.stdout);

        assert!(stdout.contains("## Conversions"));
        assert!(stdout.contains("- **base-16**: `FF`"));
    }

    #[test]
    fn golden_markdown_rendering_for_manifests() {
        let mut cmd = devbelt_cmd();
        cmd.args(["--format", "md", "k8s", "namespace", "staging"]);

        let output = cmd.output().expect("failed to execute");
        let stdout = String::from_utf8_lossy(&output.stdout);

        assert!(stdout.contains("### `namespace.yaml`"));
        assert!(stdout.contains("```yaml"));
        assert!(stdout.contains("kind: Namespace"));
    }

    // ==================== HTTP Goldens ====================

    #[test]
    fn golden_http_curl_snippet() {
        let mut cmd = devbelt_cmd();
        cmd.args([
            "--format",
            "raw",
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
            "--target",
            "curl",
        ]);

        let output = cmd.output().expect("failed to execute");
        let stdout = String::from_utf8_lossy(&output.stdout);

        let expected = "curl -X POST 'https://api.example.com/items' \\\n\
  -H 'Content-Type: application/json' \\\n\
  -d '{\"name\":\"belt\"}'";

        assert_eq!(stdout.trim_end(), expected);
    }

    #[test]
    fn golden_http_mock_structure() {
        let mut cmd = devbelt_cmd();
        cmd.args([
            "http",
            "mock",
            "--url",
            "https://api.example.com/items",
            "--status",
            "404",
        ]);

        let output = cmd.output().expect("failed to execute");
        let stdout = String::from_utf8_lossy(&output.stdout);
        let items = parse_jsonl(&stdout);

        let content = items[0]["content"].as_str().unwrap();
        assert!(content.starts_with("HTTP/1.1 404 Not Found\n"));
        assert!(content.contains("content-type: application/json\n"));
        assert!(content.contains("x-mock: true\n"));
        assert!(content.contains("\"status\": 404"));
    }
}
