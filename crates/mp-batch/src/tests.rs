use crate::driver::BatchDriver;
use mp_compress::{Compressor, NormalizeMode, OutputStrategy, RuleSet};
use std::fs;
use tempfile::tempdir;

const NOTE: &str = "# 2026-02-05\n\n## Gateway\n\n- The User sent a successful message to the WhatsApp gateway\n- Manual forwarding failed without the QR code\n";

fn compressor() -> Compressor<'static> {
    Compressor::new(RuleSet::defaults(), NormalizeMode::FlattenPipe)
}

#[tokio::test]
async fn test_scan_filters_and_sorts() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("2026-02-06.md"), NOTE).unwrap();
    fs::write(dir.path().join("2026-02-05.md"), NOTE).unwrap();
    fs::write(dir.path().join("notes.txt"), "not a daily file").unwrap();
    fs::write(dir.path().join("summary.md"), "not dated").unwrap();

    let driver = BatchDriver::new(dir.path(), compressor(), OutputStrategy::Replace);
    let files = driver.scan().await.unwrap();
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["2026-02-05.md", "2026-02-06.md"]);
}

#[tokio::test]
async fn test_run_replace_strategy() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("2026-02-05.md");
    fs::write(&path, NOTE).unwrap();

    let driver = BatchDriver::new(dir.path(), compressor(), OutputStrategy::Replace);
    let stats = driver.run().await.unwrap();
    assert_eq!(stats.files_processed, 1);
    assert_eq!(stats.files_skipped, 0);
    assert!(stats.tokens_saved > 0);

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("<!-- COMPRESSED -->\n"));
    assert!(!written.contains("**"));
}

#[tokio::test]
async fn test_run_dual_strategy_keeps_original_body() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("2026-02-05.md");
    fs::write(&path, NOTE).unwrap();

    let driver = BatchDriver::new(dir.path(), compressor(), OutputStrategy::DualFormat);
    let stats = driver.run().await.unwrap();
    assert_eq!(stats.files_processed, 1);

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("# 2026-02-05\n\n```compress\n"));
    assert!(written.contains("## Human-Readable Expansion (rarely accessed)"));
    assert!(written.contains("the WhatsApp gateway"));
    assert!(written.contains("<!-- Compression Stats: "));
}

#[tokio::test]
async fn test_run_skips_marked_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("2026-02-05.md"), NOTE).unwrap();

    let driver = BatchDriver::new(dir.path(), compressor(), OutputStrategy::Replace);
    driver.run().await.unwrap();

    // second run finds only marked files
    let stats = driver.run().await.unwrap();
    assert_eq!(stats.files_processed, 0);
    assert_eq!(stats.files_skipped, 1);
}

#[tokio::test]
async fn test_run_honors_both_marker_formats() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("2026-02-05.md"),
        "<!-- COMPRESSED -->\nU TX \u{2713}",
    )
    .unwrap();
    fs::write(
        dir.path().join("2026-02-06.md"),
        "# title\n\n```compress\nU TX \u{2713}\n```\n",
    )
    .unwrap();

    let driver = BatchDriver::new(dir.path(), compressor(), OutputStrategy::Replace);
    let stats = driver.run().await.unwrap();
    assert_eq!(stats.files_processed, 0);
    assert_eq!(stats.files_skipped, 2);
}

#[tokio::test]
async fn test_run_continues_past_failures() {
    let dir = tempdir().unwrap();
    // a directory with a matching name makes the read fail for that entry
    fs::create_dir(dir.path().join("2026-02-04.md")).unwrap();
    fs::write(dir.path().join("2026-02-05.md"), NOTE).unwrap();

    let driver = BatchDriver::new(dir.path(), compressor(), OutputStrategy::Replace);
    let stats = driver.run().await.unwrap();
    assert_eq!(stats.files_failed, 1);
    assert_eq!(stats.files_processed, 1);
}

#[tokio::test]
async fn test_empty_file_processed_without_error() {
    // compression is total; an empty file yields empty output and a zero
    // saved percentage rather than a degenerate-ratio failure
    let dir = tempdir().unwrap();
    let path = dir.path().join("2026-02-05.md");
    fs::write(&path, "").unwrap();

    let driver = BatchDriver::new(dir.path(), compressor(), OutputStrategy::Replace);
    let stats = driver.run().await.unwrap();
    assert_eq!(stats.files_processed, 1);
    assert_eq!(stats.files_failed, 0);
    assert_eq!(stats.reports[0].saved_pct, 0);

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, "<!-- COMPRESSED -->\n");
}

#[tokio::test]
async fn test_run_empty_dir() {
    let dir = tempdir().unwrap();
    let driver = BatchDriver::new(dir.path(), compressor(), OutputStrategy::Replace);
    let stats = driver.run().await.unwrap();
    assert_eq!(stats.files_processed, 0);
    assert_eq!(stats.files_skipped, 0);
    assert_eq!(stats.files_failed, 0);
}

#[tokio::test]
async fn test_missing_dir_is_fatal() {
    let driver = BatchDriver::new("/nonexistent/memopress", compressor(), OutputStrategy::Replace);
    assert!(driver.run().await.is_err());
}

#[tokio::test]
async fn test_report_counts_match_content() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("2026-02-05.md"), NOTE).unwrap();

    let driver = BatchDriver::new(dir.path(), compressor(), OutputStrategy::Replace);
    let stats = driver.run().await.unwrap();
    let report = &stats.reports[0];
    assert_eq!(report.file, "2026-02-05.md");
    assert_eq!(report.original_tokens, mp_compress::estimate_tokens(NOTE));
    assert!(report.compressed_tokens < report.original_tokens);
    assert!(report.saved_pct > 0);
}
