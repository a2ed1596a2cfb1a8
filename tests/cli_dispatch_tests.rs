mod common;

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

use common::sample_data_dir;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_mhrb")
}

fn unique_temp_path(name: &str, extension: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("mhrb-{name}-{stamp}.{extension}"))
}

fn run(args: &[&str]) -> Output {
    Command::new(bin())
        .args(args)
        .env("MHRB_DATA_DIR", sample_data_dir())
        .env("RUST_LOG", "warn")
        .output()
        .expect("mhrb should run")
}

#[test]
fn missing_command_prints_usage() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: mhrb"));
}

#[test]
fn calculate_command_reads_json_request() {
    let path = unique_temp_path("calculate", "json");
    fs::write(
        &path,
        r#"{"build": {"category": "greatsword", "weapon_id": "kamura_cleaver_1"}}"#,
    )
    .expect("write request");

    let output = run(&["calculate", path.to_str().expect("utf8 path")]);
    assert_eq!(output.status.code(), Some(0), "{}", String::from_utf8_lossy(&output.stderr));
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("calculate should emit json");
    assert_eq!(payload["weapon_id"], "kamura_cleaver_1");
    assert!(payload["effective_raw"].is_number());
    fs::remove_file(&path).ok();
}

#[test]
fn calculate_command_reads_yaml_and_prints_table() {
    let path = unique_temp_path("calculate", "yaml");
    fs::write(
        &path,
        "build:\n  category: longsword\n  weapon_id: mizuniya_1\n  rampage_picks: [attack_boost_3]\ncalc_state:\n  skills:\n    critical_eye: 3\n",
    )
    .expect("write request");

    let output = run(&["calculate", path.to_str().expect("utf8 path"), "--table"]);
    assert_eq!(output.status.code(), Some(0), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut lines = stdout.lines();
    assert!(lines.next().unwrap_or_default().starts_with("category\tweapon_id"));
    let row = lines.next().unwrap_or_default();
    assert!(row.starts_with("longsword\tmizuniya_1\t"));
    assert!(row.contains("\t20\t"), "affinity column: {row}");
    fs::remove_file(&path).ok();
}

#[test]
fn calculate_command_without_path_is_usage_error() {
    let output = run(&["calculate"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn calculate_command_reports_invalid_build() {
    let path = unique_temp_path("invalid", "json");
    fs::write(&path, r#"{"build": {"category": "lance", "weapon_id": "nope"}}"#)
        .expect("write request");
    let output = run(&["calculate", path.to_str().expect("utf8 path")]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("nope"));
    fs::remove_file(&path).ok();
}

#[test]
fn batch_command_emits_csv_rows() {
    let path = unique_temp_path("batch", "json");
    fs::write(
        &path,
        r#"[
            {"build": {"category": "hammer", "weapon_id": "kamura_iron_hammer_1"}},
            {"build": {"category": "bow", "weapon_id": "kamura_bow_1"},
             "calc_state": {"skills": {"bow_charge_plus": 1}}}
        ]"#,
    )
    .expect("write requests");

    let output = run(&["batch", path.to_str().expect("utf8 path"), "--csv"]);
    assert_eq!(output.status.code(), Some(0), "{}", String::from_utf8_lossy(&output.stderr));
    let mut reader = csv::Reader::from_reader(output.stdout.as_slice());
    let headers = reader.headers().expect("headers").clone();
    assert_eq!(&headers[0], "index");
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.expect("row")).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[1][1], "ok");
    assert_eq!(&rows[1][3], "kamura_bow_1");
    fs::remove_file(&path).ok();
}

#[test]
fn batch_command_flags_failed_requests() {
    let path = unique_temp_path("batch-fail", "json");
    fs::write(
        &path,
        r#"[
            {"build": {"category": "hammer", "weapon_id": "kamura_iron_hammer_1"}},
            {"build": {"category": "hammer", "weapon_id": "missing"}}
        ]"#,
    )
    .expect("write requests");

    let output = run(&["batch", path.to_str().expect("utf8 path")]);
    assert_eq!(output.status.code(), Some(1));
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("batch should emit json");
    assert!(payload[0]["result"].is_object());
    assert!(payload[1]["error"].as_str().unwrap_or_default().contains("missing"));
    fs::remove_file(&path).ok();
}

#[test]
fn validate_command_passes_on_sample_data() {
    let output = run(&["validate"]);
    assert_eq!(output.status.code(), Some(0), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8_lossy(&output.stdout).contains("validation passed"));
}

#[test]
fn validate_command_fails_on_invalid_data() {
    let dir = unique_temp_path("validate", "d");
    fs::create_dir_all(&dir).expect("dir");
    fs::write(
        dir.join("weapons_lance.json"),
        r#"{"Tree": {"0": {"name": "Zero", "attack": 10, "baseSharpness": [10,0,0,0,0,0], "maxSharpness": [10,0,0,0,50,0]}}}"#,
    )
    .expect("write data");

    let output = run(&["validate", dir.to_str().expect("utf8 path")]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("reserved"));
    fs::remove_dir_all(&dir).ok();
}
