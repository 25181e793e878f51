//! PanMask CLI
//!
//! Reads text from stdin, masks card numbers and writes the result to stdout

use anyhow::Context;
use clap::Parser;
use panmask_core::{MaskOutcome, PanMasker};
use serde::Serialize;
use std::io::{self, BufRead, Read, Write};
use tracing::{Level, debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "panmask")]
#[command(about = "Mask card numbers (PANs) in text read from stdin", long_about = None)]
struct Cli {
    /// Mask each line on its own instead of the whole input
    ///
    /// Uses bounded memory, but card numbers split across lines are missed.
    #[arg(long, env = "PANMASK_PER_LINE")]
    per_line: bool,

    /// Write a JSON summary of masked runs to stderr
    #[arg(long, env = "PANMASK_REPORT")]
    report: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, value_name = "LEVEL", default_value = "warn", env = "PANMASK_LOG_LEVEL")]
    log_level: String,
}

/// Summary of a masking run; never contains digits from the input
#[derive(Debug, Default, Serialize)]
struct Summary {
    texts_scanned: usize,
    pans_masked: usize,
    digits_masked: usize,
    runs: Vec<MaskedRun>,
}

/// Location of one masked card number
#[derive(Debug, Serialize)]
struct MaskedRun {
    /// Ordinal of the text (line in per-line mode) holding the run
    text: usize,
    start: usize,
    end: usize,
    digits: usize,
}

impl Summary {
    fn record(&mut self, outcome: &MaskOutcome) {
        let text = self.texts_scanned;
        self.texts_scanned += 1;
        self.pans_masked += outcome.candidates.len();
        self.digits_masked += outcome.masked_digits();

        for candidate in &outcome.candidates {
            if let (Some(start), Some(end)) = (candidate.start(), candidate.end()) {
                self.runs.push(MaskedRun {
                    text,
                    start,
                    end,
                    digits: candidate.len(),
                });
            }
        }
    }
}

fn init_tracing(log_level: &str) -> anyhow::Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")?;

    Ok(())
}

/// Mask everything read from `reader` into `writer`
fn run<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    masker: &PanMasker,
    per_line: bool,
) -> anyhow::Result<Summary> {
    let mut summary = Summary::default();

    if per_line {
        let mut line = String::new();
        while reader
            .read_line(&mut line)
            .with_context(|| format!("failed to read line {}", summary.texts_scanned + 1))?
            > 0
        {
            let outcome = masker.mask_with_candidates(&line);
            writer
                .write_all(outcome.text.as_bytes())
                .context("failed to write masked line")?;
            summary.record(&outcome);
            line.clear();
        }
    } else {
        let mut input = String::new();
        reader
            .read_to_string(&mut input)
            .context("failed to read input")?;
        debug!(chars = input.chars().count(), "read input");

        let outcome = masker.mask_with_candidates(&input);
        writer
            .write_all(outcome.text.as_bytes())
            .context("failed to write masked output")?;
        summary.record(&outcome);
    }

    writer.flush().context("failed to flush output")?;
    Ok(summary)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let masker = PanMasker::new();
    let stdin = io::stdin();
    let stdout = io::stdout();

    let summary = run(stdin.lock(), stdout.lock(), &masker, cli.per_line)?;
    info!(
        texts = summary.texts_scanned,
        pans = summary.pans_masked,
        "masking finished"
    );

    if cli.report {
        let report = serde_json::to_string_pretty(&summary).context("failed to encode report")?;
        eprintln!("{}", report);
    }

    Ok(())
}
