use std::path::{Path, PathBuf};

use assert_cmd::Command;
use docsift_core::pdf::testing::{missing_font_pdf, text_pdf};
use predicates::prelude::*;
use tempfile::TempDir;

/// Config with every OCR provider switched off, so runs never depend on
/// local models or a tesseract install.
const NO_OCR_CONFIG: &str = r#"{"ocr": {"enable_primary": false, "enable_fallback": false}}"#;

fn docsift(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("docsift").unwrap();
    cmd.current_dir(dir).env_remove("API_PORT").env_remove("RUST_LOG");
    cmd
}

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("config.json");
    std::fs::write(&path, content).unwrap();
    path
}

fn write_png(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    image::DynamicImage::new_rgb8(32, 32).save(&path).unwrap();
    path
}

fn write_pdf(dir: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, text_pdf(&[text])).unwrap();
    path
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    docsift(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("extract"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_config_init_refuses_overwrite() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("nested").join("config.json");

    docsift(dir.path())
        .args(["config", "init", "--output"])
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));
    assert!(target.exists());

    docsift(dir.path())
        .args(["config", "init", "--output"])
        .arg(&target)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    docsift(dir.path())
        .args(["config", "init", "--force", "--output"])
        .arg(&target)
        .assert()
        .success();
}

#[test]
fn test_config_show_reads_file() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, r#"{"server": {"port": 9100}}"#);

    docsift(dir.path())
        .arg("-c")
        .arg(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("9100"))
        .stdout(predicate::str::contains("\"tesseract_binary\": \"tesseract\""));
}

#[test]
fn test_config_show_applies_api_port() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "{}");

    docsift(dir.path())
        .env("API_PORT", "8123")
        .arg("-c")
        .arg(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("8123"));
}

#[test]
fn test_config_path_with_explicit_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");

    docsift(dir.path())
        .arg("-c")
        .arg(&missing)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file:"))
        .stdout(predicate::str::contains("not created"));
}

#[test]
fn test_extract_missing_input() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, NO_OCR_CONFIG);

    docsift(dir.path())
        .arg("-c")
        .arg(&config)
        .args(["extract", "invoice", "nope.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_extract_text_without_engine() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, NO_OCR_CONFIG);
    let image = write_png(&dir, "scan.png");

    docsift(dir.path())
        .arg("-c")
        .arg(&config)
        .args(["extract", "text"])
        .arg(&image)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"success\": false"))
        .stdout(predicate::str::contains("no OCR engine available"));
}

#[test]
fn test_extract_pdf_rejects_other_files() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, NO_OCR_CONFIG);
    let notes = dir.path().join("notes.txt");
    std::fs::write(&notes, "just text").unwrap();

    docsift(dir.path())
        .arg("-c")
        .arg(&config)
        .args(["extract", "pdf"])
        .arg(&notes)
        .assert()
        .success()
        .stdout(predicate::str::contains("File must be a PDF"));
}

#[test]
fn test_extract_pdf_text_format() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, NO_OCR_CONFIG);
    let pdf = write_pdf(&dir, "report.pdf", "Quarterly report");

    docsift(dir.path())
        .arg("-c")
        .arg(&config)
        .args(["extract", "pdf", "--format", "text"])
        .arg(&pdf)
        .assert()
        .success()
        .stdout(predicate::str::contains("document_type: pdf"))
        .stdout(predicate::str::contains("page_count: 1"))
        .stdout(predicate::str::contains("Quarterly report"));
}

#[test]
fn test_extract_pdf_with_unknown_font_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, NO_OCR_CONFIG);
    let pdf = dir.path().join("broken.pdf");
    std::fs::write(&pdf, missing_font_pdf("Hello")).unwrap();

    docsift(dir.path())
        .arg("-c")
        .arg(&config)
        .args(["extract", "pdf"])
        .arg(&pdf)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"success\": false"))
        .stdout(predicate::str::contains("PDF error"));
}

#[test]
fn test_extract_barcode_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, NO_OCR_CONFIG);
    let image = write_png(&dir, "blank.png");
    let output = dir.path().join("result.json");

    docsift(dir.path())
        .arg("-c")
        .arg(&config)
        .args(["extract", "barcode", "--output"])
        .arg(&output)
        .arg(&image)
        .assert()
        .success()
        .stdout(predicate::str::contains("Output written to"));

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written["success"], serde_json::json!(true));
    assert_eq!(written["data"]["found"], serde_json::json!(false));
}
