//! End-to-end checks on the binary: the data stream on stdout must stay
//! valid JSON while progress lines go to stderr.

use serde_json::Value;
use std::process::Command;

fn textharvest() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_textharvest"));
    command.env_remove("RUST_LOG");
    command
}

#[cfg(feature = "lopdf-backend")]
#[test]
fn missing_document_keeps_stdout_valid_json() {
    let dir = tempfile::tempdir().unwrap();

    let output = textharvest()
        .arg("--base-dir")
        .arg(dir.path())
        .args(["-e", "absent.pdf=AI倫理・AIガバナンス"])
        .output()
        .expect("run textharvest");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    let records: Value = serde_json::from_str(stdout.trim_end()).expect("stdout is JSON");
    let records = records.as_array().expect("JSON array");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["file"], "absent.pdf");
    assert_eq!(records[0]["category"], "AI倫理・AIガバナンス");
    assert_eq!(records[0]["text"], "");
    assert_eq!(records[0]["chars"], 0);
    assert!(records[0]["error"].is_string());
    // Labels are not escaped to \uXXXX sequences
    assert!(stdout.contains("AI倫理・AIガバナンス"));

    assert!(stderr.contains("ERR: absent.pdf"));
    assert!(output.status.success());
}

#[cfg(feature = "lopdf-backend")]
#[test]
fn omit_source_drops_file_key() {
    let dir = tempfile::tempdir().unwrap();

    let output = textharvest()
        .arg("--base-dir")
        .arg(dir.path())
        .arg("--omit-source")
        .args(["-e", "a.pdf=A", "-e", "b.pdf=B"])
        .output()
        .expect("run textharvest");

    let records: Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    let records = records.as_array().expect("JSON array");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["category"], "A");
    assert_eq!(records[1]["category"], "B");
    assert!(records.iter().all(|r| r.get("file").is_none()));
}

#[cfg(feature = "lopdf-backend")]
#[test]
fn output_file_and_summary_are_written() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("out.json");
    let summary_path = dir.path().join("summary.json");
    let manifest = dir.path().join("manifest.yaml");
    std::fs::write(
        &manifest,
        format!(
            "base_dir: {}\ndocuments:\n  - path: gone.pdf\n    label: Gone\n",
            dir.path().display()
        ),
    )
    .unwrap();

    let output = textharvest()
        .arg("-c")
        .arg(&manifest)
        .arg("-o")
        .arg(&out_path)
        .arg("--summary")
        .arg(&summary_path)
        .output()
        .expect("run textharvest");

    assert!(output.stdout.is_empty());
    let records: Value =
        serde_json::from_str(&std::fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(records.as_array().unwrap().len(), 1);

    let summary: Value =
        serde_json::from_str(&std::fs::read_to_string(&summary_path).unwrap()).unwrap();
    assert_eq!(summary["documents"], 1);
    assert!(summary["run_id"].is_string());
}

#[test]
fn malformed_entry_is_a_usage_error() {
    let output = textharvest()
        .args(["-e", "no-label.pdf"])
        .output()
        .expect("run textharvest");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[cfg(not(feature = "lopdf-backend"))]
#[test]
fn no_backend_prints_single_error_and_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let summary_path = dir.path().join("summary.json");

    let output = textharvest()
        .args(["-e", "a.pdf=A", "-e", "b.pdf=B"])
        .arg("--summary")
        .arg(&summary_path)
        .output()
        .expect("run textharvest");

    assert_eq!(output.status.code(), Some(1));
    let payload: Value = serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    let object = payload.as_object().expect("a single JSON object");
    assert_eq!(object.len(), 1);
    assert!(object["error"].as_str().unwrap().contains("unavailable"));

    let summary: Value =
        serde_json::from_str(&std::fs::read_to_string(&summary_path).unwrap()).unwrap();
    assert_eq!(summary["unavailable"], true);
    assert!(summary["backend"].is_null());
}
