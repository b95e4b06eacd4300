use std::path::PathBuf;

use clap::Parser;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Offline shift statistics for saved Altiplan calendar batches
#[derive(Parser, Debug, Clone)]
#[command(
    name = "altistat",
    about = "Offline shift statistics for saved Altiplan calendar batches",
    version
)]
pub struct Settings {
    /// Raw batch JSON file to load
    #[arg(long, value_name = "FILE")]
    pub input: PathBuf,

    /// Re-save the loaded batch to this file (normalized formatting)
    #[arg(long, value_name = "FILE")]
    pub save: Option<PathBuf>,

    /// Term for per-term statistics (exact match); may be given multiple times
    #[arg(long, value_name = "TERM")]
    pub find: Vec<String>,

    /// Start date (inclusive), format YYYY-MM-DD
    #[arg(long, value_name = "DATE")]
    pub startdate: Option<String>,

    /// End date (inclusive), format YYYY-MM-DD
    #[arg(long, value_name = "DATE")]
    pub enddate: Option<String>,

    /// Print expanded rows as JSON on stdout (disables summary and --find)
    #[arg(long)]
    pub expand_output: bool,

    /// Suppress the summary listing (shown by default)
    #[arg(long)]
    pub no_summary: bool,

    /// Keep time-range lines in the summary
    #[arg(long)]
    pub include_time: bool,

    /// Disable the summary noise filter (leading operators, bare 3-digit codes)
    #[arg(long)]
    pub no_filter: bool,

    /// Split only on line breaks; skip label/shift/dash-pair classification
    #[arg(long)]
    pub simple_parsing: bool,

    /// Logging level
    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,
}

impl Settings {
    /// Apply output-precedence rules, mutating the flags in place.
    ///
    /// `--save` wins over `--expand-output`, and `--expand-output` disables
    /// summary and `--find` so stdout stays pure JSON. Returns `true` when
    /// `--expand-output` was dropped in favour of `--save`.
    pub fn apply_precedence(&mut self) -> bool {
        let mut expand_dropped = false;
        if self.save.is_some() && self.expand_output {
            self.expand_output = false;
            expand_dropped = true;
        }
        if self.expand_output {
            self.no_summary = true;
            self.find.clear();
        }
        expand_dropped
    }

    /// Whether the summary listing should be printed.
    pub fn summary(&self) -> bool {
        !self.no_summary
    }
}
