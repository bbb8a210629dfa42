//! Batch driver — sequential rewrite of dated note files.
//!
//! Files are read, compressed, and written back one at a time; one file's
//! failure is logged and does not abort the batch.

use crate::error::Result;
use mp_compress::{is_compressed, marker, Compressor, OutputStrategy};
use regex::Regex;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, info, warn};

static RE_DAILY_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}\.md$").unwrap());

/// Per-file unit counts, reported after a successful rewrite.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub file: String,
    pub original_tokens: usize,
    pub compressed_tokens: usize,
    pub saved_pct: i64,
}

/// Aggregated batch outcome.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchStats {
    pub files_processed: usize,
    pub files_skipped: usize,
    pub files_failed: usize,
    pub tokens_saved: usize,
    pub reports: Vec<FileReport>,
}

/// Enumerates candidate files, invokes the compressor, persists output.
pub struct BatchDriver<'r> {
    dir: PathBuf,
    compressor: Compressor<'r>,
    strategy: OutputStrategy,
}

impl<'r> BatchDriver<'r> {
    pub fn new(dir: impl Into<PathBuf>, compressor: Compressor<'r>, strategy: OutputStrategy) -> Self {
        Self {
            dir: dir.into(),
            compressor,
            strategy,
        }
    }

    /// List candidate files: names matching `YYYY-MM-DD.md`, sorted for a
    /// deterministic processing order.
    pub async fn scan(&self) -> Result<Vec<PathBuf>> {
        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            if let Some(name) = name.to_str() {
                if RE_DAILY_FILE.is_match(name) {
                    files.push(entry.path());
                }
            }
        }
        files.sort();
        Ok(files)
    }

    /// Compress one file in place. Returns `Ok(None)` when the file already
    /// carries an idempotence marker (either historical format).
    pub async fn process_file(&self, path: &Path) -> Result<Option<FileReport>> {
        let content = tokio::fs::read_to_string(path).await?;
        if is_compressed(&content) {
            return Ok(None);
        }

        let (rendered, result) = match self.strategy {
            OutputStrategy::Replace => {
                let result = self.compressor.compress_with_stats(&content);
                (marker::render_replace(&result.output), result)
            }
            OutputStrategy::DualFormat => {
                // first line stays as the title; only the body is compressed
                let (title, body) = split_title(&content);
                let result = self.compressor.compress_with_stats(body);
                (marker::render_dual(title, body, &result), result)
            }
        };

        tokio::fs::write(path, rendered).await?;

        Ok(Some(FileReport {
            file: path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string(),
            original_tokens: result.original_tokens,
            compressed_tokens: result.compressed_tokens,
            saved_pct: result.saved_pct,
        }))
    }

    /// Process every candidate file sequentially and aggregate statistics.
    pub async fn run(&self) -> Result<BatchStats> {
        let files = self.scan().await?;
        info!(dir = %self.dir.display(), count = files.len(), "batch scan complete");

        let mut stats = BatchStats::default();
        for path in files {
            match self.process_file(&path).await {
                Ok(Some(report)) => {
                    info!(
                        file = %report.file,
                        original = report.original_tokens,
                        compressed = report.compressed_tokens,
                        saved_pct = report.saved_pct,
                        "compressed"
                    );
                    stats.files_processed += 1;
                    stats.tokens_saved += report
                        .original_tokens
                        .saturating_sub(report.compressed_tokens);
                    stats.reports.push(report);
                }
                Ok(None) => {
                    debug!(file = %path.display(), "already compressed, skipped");
                    stats.files_skipped += 1;
                }
                Err(err) => {
                    warn!(file = %path.display(), error = %err, "failed, continuing");
                    stats.files_failed += 1;
                }
            }
        }
        Ok(stats)
    }
}

fn split_title(content: &str) -> (&str, &str) {
    match content.split_once('\n') {
        Some((title, body)) => (title, body),
        None => (content, ""),
    }
}
