mod common;

use assert_cmd::Command;
use flate2::read::GzDecoder;
use predicates::prelude::*;
use std::fs;
use std::io::{Cursor, Read};
use tempfile::TempDir;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("file-squeeze").unwrap();
    cmd.arg("--help");
    cmd.assert().success();
}

#[test]
fn test_compress_help() {
    let mut cmd = Command::cargo_bin("file-squeeze").unwrap();
    cmd.args(["compress", "--help"]);
    cmd.assert().success();
}

#[test]
fn test_batch_help() {
    let mut cmd = Command::cargo_bin("file-squeeze").unwrap();
    cmd.args(["batch", "--help"]);
    cmd.assert().success();
}

#[test]
fn test_info_help() {
    let mut cmd = Command::cargo_bin("file-squeeze").unwrap();
    cmd.args(["info", "--help"]);
    cmd.assert().success();
}

#[test]
fn test_compress_missing_args() {
    let mut cmd = Command::cargo_bin("file-squeeze").unwrap();
    cmd.args(["compress"]);
    cmd.assert().failure();
}

#[test]
fn test_compress_nonexistent_file() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("file-squeeze").unwrap();
    cmd.args(["compress", "nonexistent.jpg"]);
    cmd.arg(temp_dir.path());
    cmd.assert().failure();
}

#[test]
fn test_compress_invalid_quality() {
    let temp_dir = TempDir::new().unwrap();
    let input = common::create_archive_payload(temp_dir.path(), "data.zip", 100);

    let mut cmd = Command::cargo_bin("file-squeeze").unwrap();
    cmd.arg("compress").arg(&input).arg(temp_dir.path());
    cmd.args(["--quality", "0"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid quality"));
}

#[test]
fn test_compress_invalid_level() {
    let temp_dir = TempDir::new().unwrap();
    let input = common::create_archive_payload(temp_dir.path(), "data.zip", 100);

    let mut cmd = Command::cargo_bin("file-squeeze").unwrap();
    cmd.arg("compress").arg(&input).arg(temp_dir.path());
    cmd.args(["--level", "10"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid compression level"));
}

#[test]
fn test_compress_real_jpeg_resizes_and_shrinks() {
    let temp_dir = TempDir::new().unwrap();
    let out_dir = temp_dir.path().join("out");
    let input = common::create_test_jpeg(temp_dir.path(), "photo.jpg", 2400, 1500);
    let original_size = fs::metadata(&input).unwrap().len();

    let mut cmd = Command::cargo_bin("file-squeeze").unwrap();
    cmd.arg("compress").arg(&input).arg(&out_dir);
    cmd.assert().success();

    let output = out_dir.join("photo.jpg");
    assert!(output.exists());
    assert!(fs::metadata(&output).unwrap().len() < original_size);

    // Longest side is capped at the default 1920.
    let img = image::open(&output).unwrap();
    assert!(img.width().max(img.height()) <= 1920);
}

#[test]
fn test_compress_to_webp_changes_extension() {
    let temp_dir = TempDir::new().unwrap();
    let out_dir = temp_dir.path().join("out");
    let input = common::create_test_jpeg(temp_dir.path(), "photo.jpg", 320, 200);

    let mut cmd = Command::cargo_bin("file-squeeze").unwrap();
    cmd.arg("compress").arg(&input).arg(&out_dir);
    cmd.args(["--format", "webp"]);
    cmd.assert().success();

    assert!(out_dir.join("photo.webp").exists());
}

#[test]
fn test_compress_png_output_stays_png() {
    let temp_dir = TempDir::new().unwrap();
    let out_dir = temp_dir.path().join("out");
    let input = common::create_test_png(temp_dir.path(), "icon.png", 320, 200);

    let mut cmd = Command::cargo_bin("file-squeeze").unwrap();
    cmd.arg("compress").arg(&input).arg(&out_dir);
    cmd.args(["--format", "png", "--quality", "0.5"]);
    cmd.assert().success();

    let output = out_dir.join("icon.png");
    assert!(output.exists());
    assert!(image::open(&output).is_ok());
}

#[test]
fn test_compress_archive_produces_gzip() {
    let temp_dir = TempDir::new().unwrap();
    let out_dir = temp_dir.path().join("out");
    let input = common::create_archive_payload(temp_dir.path(), "data.zip", 500);
    let payload = fs::read(&input).unwrap();

    let mut cmd = Command::cargo_bin("file-squeeze").unwrap();
    cmd.arg("compress").arg(&input).arg(&out_dir);
    cmd.args(["--level", "9"]);
    cmd.assert().success();

    let output = out_dir.join("data.zip.gz");
    assert!(output.exists());

    // Repetitive text deflates well.
    let compressed = fs::read(&output).unwrap();
    assert!(compressed.len() < payload.len());

    let mut decoder = GzDecoder::new(compressed.as_slice());
    let mut restored = Vec::new();
    decoder.read_to_end(&mut restored).unwrap();
    assert_eq!(restored, payload);
}

#[test]
fn test_compress_audio_pass_through() {
    let temp_dir = TempDir::new().unwrap();
    let out_dir = temp_dir.path().join("out");
    let input = temp_dir.path().join("song.mp3");
    fs::write(&input, vec![0x55u8; 1024]).unwrap();

    let mut cmd = Command::cargo_bin("file-squeeze").unwrap();
    cmd.arg("compress").arg(&input).arg(&out_dir);
    cmd.assert().success();

    // The placeholder adapter returns the bytes unchanged.
    let output = out_dir.join("song.mp3");
    assert_eq!(fs::read(&output).unwrap(), vec![0x55u8; 1024]);
}

#[test]
fn test_compress_quiet_suppresses_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let out_dir = temp_dir.path().join("out");
    let input = common::create_archive_payload(temp_dir.path(), "data.zip", 200);

    let mut cmd = Command::cargo_bin("file-squeeze").unwrap();
    cmd.arg("compress").arg(&input).arg(&out_dir);
    cmd.arg("--quiet");
    cmd.assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn test_batch_mixed_inputs_with_bundle() {
    let temp_dir = TempDir::new().unwrap();
    let in_dir = temp_dir.path().join("in");
    fs::create_dir(&in_dir).unwrap();
    let out_dir = temp_dir.path().join("out");

    common::create_test_jpeg(&in_dir, "photo.jpg", 640, 480);
    common::create_archive_payload(&in_dir, "data.zip", 400);
    common::create_unknown_file(&in_dir, "mystery.bin");

    let mut cmd = Command::cargo_bin("file-squeeze").unwrap();
    cmd.arg("batch").arg(&in_dir).arg(&out_dir);
    cmd.arg("--bundle");
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Unsupported file type"));

    assert!(out_dir.join("photo.jpg").exists());
    assert!(out_dir.join("data.zip.gz").exists());

    // The bundle holds exactly the two successes.
    let bundle = fs::read(out_dir.join("compressed_files.zip")).unwrap();
    let archive = zip::ZipArchive::new(Cursor::new(bundle)).unwrap();
    assert_eq!(archive.len(), 2);
}

#[test]
fn test_batch_continues_after_failures() {
    let temp_dir = TempDir::new().unwrap();
    let in_dir = temp_dir.path().join("in");
    fs::create_dir(&in_dir).unwrap();
    let out_dir = temp_dir.path().join("out");

    // A corrupt image fails; the archive after it still compresses.
    fs::write(in_dir.join("broken.png"), b"not a png").unwrap();
    common::create_archive_payload(&in_dir, "data.tar", 300);

    let mut cmd = Command::cargo_bin("file-squeeze").unwrap();
    cmd.arg("batch").arg(&in_dir).arg(&out_dir);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("broken.png"));

    assert!(out_dir.join("data.tar.gz").exists());
    assert!(!out_dir.join("broken.png").exists());
}

#[test]
fn test_batch_nonexistent_input() {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("file-squeeze").unwrap();
    cmd.args(["batch", "no-such-path"]);
    cmd.arg(temp_dir.path().join("out"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No input files found"));
}

#[test]
fn test_batch_glob_pattern() {
    let temp_dir = TempDir::new().unwrap();
    let in_dir = temp_dir.path().join("in");
    fs::create_dir(&in_dir).unwrap();
    let out_dir = temp_dir.path().join("out");

    common::create_archive_payload(&in_dir, "a.zip", 200);
    common::create_archive_payload(&in_dir, "b.zip", 200);
    common::create_unknown_file(&in_dir, "skip.bin");

    let pattern = format!("{}/*.zip", in_dir.to_string_lossy());
    let mut cmd = Command::cargo_bin("file-squeeze").unwrap();
    cmd.arg("batch").arg(&pattern).arg(&out_dir);
    cmd.assert().success();

    assert!(out_dir.join("a.zip.gz").exists());
    assert!(out_dir.join("b.zip.gz").exists());
    assert!(!out_dir.join("skip.bin.gz").exists());
}

#[test]
fn test_info_missing_args() {
    let mut cmd = Command::cargo_bin("file-squeeze").unwrap();
    cmd.args(["info"]);
    cmd.assert().failure();
}

#[test]
fn test_info_nonexistent_file() {
    let mut cmd = Command::cargo_bin("file-squeeze").unwrap();
    cmd.args(["info", "nonexistent.mp4"]);
    cmd.assert().failure();
}

#[test]
fn test_info_classifies_archive() {
    let temp_dir = TempDir::new().unwrap();
    let input = common::create_archive_payload(temp_dir.path(), "data.zip", 100);

    let mut cmd = Command::cargo_bin("file-squeeze").unwrap();
    cmd.arg("info").arg(&input);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("archive"))
        .stdout(predicate::str::contains("application/zip"));
}
