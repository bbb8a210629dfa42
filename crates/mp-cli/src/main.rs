//! memopress — compress dated note files in place.

use clap::{Parser, ValueEnum};
use mp_batch::BatchDriver;
use mp_compress::{Compressor, NormalizeMode, OutputStrategy, RuleSet};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Compress dated note files with the dictionary + pattern pipeline.
#[derive(Parser, Debug)]
#[command(name = "memopress", version, about)]
struct Cli {
    /// Directory holding YYYY-MM-DD.md note files
    dir: PathBuf,

    /// Whitespace normalization strategy
    #[arg(long, value_enum, default_value = "flatten")]
    mode: ModeArg,

    /// Persisted output format
    #[arg(long, value_enum, default_value = "replace")]
    strategy: StrategyArg,

    /// Enforce preserve rules as protected spans
    #[arg(long)]
    protect_preserved: bool,

    /// Summary output format
    #[arg(long, value_enum, default_value = "text")]
    format: FormatArg,

    /// Verbose logging
    #[arg(long, short)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    /// Join all non-empty lines into one pipe-delimited line
    Flatten,
    /// Keep line structure, cap blank-line runs
    Cap,
}

impl From<ModeArg> for NormalizeMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Flatten => NormalizeMode::FlattenPipe,
            ModeArg::Cap => NormalizeMode::CapBlankLines,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyArg {
    /// Replace file content, prepend the marker comment
    Replace,
    /// Keep the original body alongside the compressed block
    Dual,
}

impl From<StrategyArg> for OutputStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Replace => OutputStrategy::Replace,
            StrategyArg::Dual => OutputStrategy::DualFormat,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum FormatArg {
    Text,
    Json,
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

// the driver is strictly sequential, so one thread is enough
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let compressor = Compressor::new(RuleSet::defaults(), cli.mode.into())
        .with_protected_spans(cli.protect_preserved);
    let driver = BatchDriver::new(&cli.dir, compressor, cli.strategy.into());

    tracing::debug!(dir = %cli.dir.display(), "starting batch run");
    let stats = match driver.run().await {
        Ok(stats) => stats,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match cli.format {
        FormatArg::Json => {
            println!("{}", serde_json::to_string_pretty(&stats).unwrap_or_default());
        }
        FormatArg::Text => {
            for report in &stats.reports {
                println!(
                    "{}: {}\u{2192}{} tokens ({}% saved)",
                    report.file, report.original_tokens, report.compressed_tokens, report.saved_pct
                );
            }
            println!();
            println!("Compression summary:");
            println!("  files processed: {}", stats.files_processed);
            println!("  files skipped:   {}", stats.files_skipped);
            println!("  files failed:    {}", stats.files_failed);
            println!("  tokens saved:    {}", stats.tokens_saved);
        }
    }

    ExitCode::SUCCESS
}
