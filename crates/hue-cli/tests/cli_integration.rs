/// Integration tests for the hue CLI
///
/// Runs the built binary on samples, DIMACS files, JSON descriptions and
/// config files, and validates its text and JSON output.
use std::fs;
use std::io::Write;
use std::process::{Command, Output};
use tempfile::{Builder, NamedTempFile};

fn hue() -> Command {
    Command::new(env!("CARGO_BIN_EXE_hue"))
}

fn temp_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "hue failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("Failed to parse JSON output")
}

#[test]
fn test_default_sample_text_output() {
    let output = hue().output().expect("Failed to execute hue");
    assert!(
        output.status.success(),
        "hue failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Vertex (v1, 1)"));
    assert!(stdout.contains("Vertex (v3, 3)"));
    assert!(stdout.contains("Vertex (v5, 1)"));
    assert!(stdout.contains("colors used: 3"));
    assert!(stdout.contains("conflicts: 0"));
}

#[test]
fn test_sample_json_output() {
    let output = hue()
        .args(["--sample", "complete", "--vertices", "4", "--format", "json"])
        .output()
        .expect("Failed to execute hue");
    let json = stdout_json(&output);

    assert_eq!(json["stats"]["num_vertices"], 4);
    assert_eq!(json["stats"]["num_edges"], 6);
    assert_eq!(json["report"]["colors_used"], 4);
    assert_eq!(json["report"]["order"], "insertion");
    assert_eq!(json["check"]["conflicts"], 0);
    assert_eq!(json["graph"]["vertices"][3]["color"], 4);
}

#[test]
fn test_dimacs_input() {
    let file = temp_file(
        ".col",
        "c star with center 4\np edge 4 3\ne 4 1\ne 4 2\ne 4 3\n",
    );
    let output = hue()
        .args(["--format", "json", "--order", "largest-degree-first", "--input"])
        .arg(file.path())
        .output()
        .expect("Failed to execute hue");
    let json = stdout_json(&output);

    assert_eq!(json["report"]["order"], "largest-degree-first");
    assert_eq!(json["report"]["colors_used"], 2);
    assert_eq!(json["graph"]["vertices"][3]["name"], "4");
    assert_eq!(json["graph"]["vertices"][3]["color"], 1);
}

#[test]
fn test_json_description_input() {
    let file = temp_file(
        ".json",
        r#"{
            "vertices": ["red", "green", "blue"],
            "edges": [
                { "name": "rg", "a": "red", "b": "green" },
                { "name": "gb", "a": "green", "b": "blue" }
            ]
        }"#,
    );
    let output = hue()
        .args(["--format", "json", "--input"])
        .arg(file.path())
        .output()
        .expect("Failed to execute hue");
    let json = stdout_json(&output);

    assert_eq!(json["graph"]["vertices"][0]["color"], 1);
    assert_eq!(json["graph"]["vertices"][1]["color"], 2);
    assert_eq!(json["graph"]["vertices"][2]["color"], 1);
}

#[test]
fn test_self_loop_in_description_fails() {
    let file = temp_file(
        ".json",
        r#"{ "vertices": ["a"], "edges": [{ "name": "loop", "a": "a", "b": "a" }] }"#,
    );
    let output = hue()
        .arg("--input")
        .arg(file.path())
        .output()
        .expect("Failed to execute hue");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("self-loop"), "stderr: {}", stderr);
}

#[test]
fn test_unsupported_extension_fails() {
    let file = temp_file(".txt", "p edge 1 0\n");
    let output = hue()
        .arg("--input")
        .arg(file.path())
        .output()
        .expect("Failed to execute hue");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unsupported input extension"));
}

#[test]
fn test_config_file_and_output_path() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let result_path = dir.path().join("result.json");
    let config = temp_file(
        ".toml",
        &format!(
            "[coloring]\norder = \"largest-degree-first\"\n\n[output]\nformat = \"json\"\npath = {:?}\n",
            result_path.to_string_lossy()
        ),
    );

    let output = hue()
        .args(["--sample", "path", "--vertices", "3", "--config"])
        .arg(config.path())
        .output()
        .expect("Failed to execute hue");
    assert!(
        output.status.success(),
        "hue failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.stdout.is_empty());

    let content = fs::read_to_string(&result_path).expect("Failed to read result file");
    let json: serde_json::Value = serde_json::from_str(&content).expect("Invalid JSON");
    assert_eq!(json["report"]["order"], "largest-degree-first");
    // Middle vertex has the highest degree and is colored first
    assert_eq!(json["report"]["assignments"][0]["vertex"], 1);
    assert_eq!(json["graph"]["vertices"][1]["color"], 1);
}

#[test]
fn test_vertex_limit_enforced() {
    let config = temp_file(".toml", "[limits]\nmax_vertices = 2\n");
    let output = hue()
        .args(["--sample", "cycle", "--vertices", "5", "--config"])
        .arg(config.path())
        .output()
        .expect("Failed to execute hue");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("max_vertices"));
}

#[test]
fn test_oversized_sample_rejected_before_building() {
    let output = hue()
        .args(["--sample", "complete", "--vertices", "5000000000"])
        .output()
        .expect("Failed to execute hue");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("max_vertices"), "unexpected stderr: {}", stderr);
    assert!(!stderr.contains("panicked"));
}

#[test]
fn test_oversized_dimacs_header_rejected() {
    let input = temp_file(".col", "p edge 18446744073709551615 0\n");
    let output = hue()
        .arg("--input")
        .arg(input.path())
        .output()
        .expect("Failed to execute hue");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("above the limit"), "unexpected stderr: {}", stderr);
    assert!(!stderr.contains("panicked"));
}
