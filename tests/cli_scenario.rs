//! Integration test: run the binary against scenario files.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Config pointing logs at a temp dir so runs never touch the user's state dir.
fn temp_config(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("msgwin_cli_{tag}"));
    fs::create_dir_all(&dir).expect("create temp dir");
    let config = dir.join("config.toml");
    let log_path = dir.join("msgwin.log");
    fs::write(
        &config,
        format!("log_file_path = {:?}\n", log_path.to_string_lossy()),
    )
    .expect("write config");
    config
}

fn run(tag: &str, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_msgwin"))
        .arg("--config")
        .arg(temp_config(tag))
        .args(args)
        .env_remove("MSGWIN_FORMAT")
        .env_remove("MSGWIN_BUFFER_MULTIPLIER")
        .output()
        .expect("Failed to execute binary")
}

#[test]
fn json_report_for_scrolled_back_window() {
    let scenario = fixture("scrolled_back.json");
    let output = run("json", &[scenario.to_str().unwrap(), "--format", "json"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let plan: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");

    assert_eq!(
        plan["evict_top"],
        serde_json::json!({ "pages": ["page-3", "page-2", "page-1"] })
    );
    assert_eq!(
        plan["evict_bottom"],
        serde_json::json!({ "pages": ["page-0", "page-1", "page-2"] })
    );
    assert_eq!(plan["visible"].as_array().map(Vec::len), Some(1));
    assert_eq!(plan["visible"][0]["item"], "m-c");
    assert_eq!(plan["proximity"], "far");
    assert_eq!(plan["far_from_newest"], true);
    assert_eq!(plan["pivot"], "page-1");
    assert_eq!(
        plan["visit_order"],
        serde_json::json!(["page-0", "page-2", "page-3"])
    );
}

#[test]
fn multiplier_flag_tightens_eviction() {
    let scenario = fixture("scrolled_back.json");
    let output = run(
        "multiplier",
        &[scenario.to_str().unwrap(), "--format", "json", "-m", "12"],
    );
    assert!(output.status.success());

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    // floor = 150 * 12 = 1800: only one 800px page can go from each end.
    assert_eq!(plan["evict_top"], serde_json::json!({ "pages": ["page-3"] }));
    assert_eq!(plan["evict_bottom"], serde_json::json!({ "pages": ["page-0"] }));
}

#[test]
fn text_report_is_default() {
    let scenario = fixture("scrolled_back.json");
    let output = run("text", &[scenario.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("evict top: page-3, page-2, page-1"), "got: {stdout}");
    assert!(stdout.contains("visible: m-c [800, 1200]"), "got: {stdout}");
    assert!(stdout.contains("proximity: far"), "got: {stdout}");
}

#[test]
fn inconsistent_scenario_fails() {
    let dir = std::env::temp_dir().join("msgwin_cli_inconsistent");
    fs::create_dir_all(&dir).unwrap();
    let scenario = dir.join("bad.json");
    fs::write(
        &scenario,
        r#"{ "message_count": 5, "pages": [], "ordering": ["ghost"] }"#,
    )
    .unwrap();

    let output = run("inconsistent", &[scenario.to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ghost"), "stderr: {stderr}");
}

#[test]
fn missing_scenario_file_fails() {
    let output = run("missing", &["/nonexistent/msgwin/scenario.json"]);
    assert!(!output.status.success());
}

#[test]
fn unparseable_env_multiplier_fails() {
    let scenario = fixture("scrolled_back.json");
    let output = Command::new(env!("CARGO_BIN_EXE_msgwin"))
        .arg("--config")
        .arg(temp_config("bad_env"))
        .arg(&scenario)
        .env_remove("MSGWIN_FORMAT")
        .env("MSGWIN_BUFFER_MULTIPLIER", "four")
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("MSGWIN_BUFFER_MULTIPLIER"), "stderr: {stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn duplicate_page_entries_fail() {
    let dir = std::env::temp_dir().join("msgwin_cli_duplicate");
    fs::create_dir_all(&dir).unwrap();
    let scenario = dir.join("dup.json");
    fs::write(
        &scenario,
        r#"{
            "message_count": 10,
            "pages": [
                { "key": "twin", "last_message_index": 9 },
                { "key": "twin", "last_message_index": 3 }
            ],
            "ordering": ["twin"]
        }"#,
    )
    .unwrap();

    let output = run("duplicate", &[scenario.to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("DuplicatePage"), "stderr: {stderr}");
}

#[test]
fn scenario_argument_is_required() {
    let output = run("no_scenario", &[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr: {stderr}");
}
