mod bootstrap;

use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

use altistat_core::error::{AltistatError, Result};
use altistat_core::models::TermStats;
use altistat_core::settings::Settings;
use altistat_data::classifier::ParseMode;
use altistat_data::expander::RowExpander;
use altistat_data::stats::SummaryOptions;
use altistat_data::{filter, stats, store};

const BANNER: &str = concat!(
    "altistat v",
    env!("CARGO_PKG_VERSION"),
    " - offline statistik for Altiplan vagtplaner"
);

fn main() -> ExitCode {
    let mut settings = Settings::parse();
    let expand_dropped = settings.apply_precedence();

    if let Err(e) = bootstrap::setup_logging(&settings.log_level) {
        eprintln!("Error: {e}");
        return ExitCode::from(1);
    }

    if expand_dropped {
        eprintln!("Note: --save overrides --expand-output (no expanded JSON is printed).");
    }

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}

/// Validation failures (bad batch, bad dates, reversed range) exit with 2,
/// everything else with 1.
fn exit_code_for(err: &AltistatError) -> u8 {
    match err {
        AltistatError::FileRead { .. }
        | AltistatError::InvalidBatch(_)
        | AltistatError::InvalidBatchRow { .. }
        | AltistatError::InvalidDate(_)
        | AltistatError::DateRangeOrder { .. }
        | AltistatError::JsonParse(_) => 2,
        _ => 1,
    }
}

fn run(settings: &Settings) -> Result<()> {
    // Keep stdout pure JSON when expanded output was requested.
    if !settings.expand_output {
        println!("{}", BANNER);
    }

    let rows = store::load_batch(&settings.input)?;
    tracing::info!(
        "Loaded {} raw rows from {}",
        rows.len(),
        settings.input.display()
    );

    if let Some(path) = &settings.save {
        store::save_batch(path, &rows)?;
        println!("=== Saved raw batch to: {} ===", path.display());
    }

    let (start, end) =
        filter::parse_range(settings.startdate.as_deref(), settings.enddate.as_deref())?;
    let rows = filter::filter_by_date_range(&rows, start, end);

    let mode = if settings.simple_parsing {
        ParseMode::Simple
    } else {
        ParseMode::Full
    };
    let expander = RowExpander::new(mode);

    if !settings.find.is_empty() {
        let stats_by_term = stats::term_stats(&rows, &settings.find, &expander);
        println!("\n=== Term statistics (exact match) ===");
        for term in &settings.find {
            print!("{}", render_term_stats(&stats_by_term[term]));
        }
    }

    if settings.summary() {
        let counts = stats::summary(
            &rows,
            SummaryOptions {
                include_time: settings.include_time,
                filter_noise: !settings.no_filter,
            },
            &expander,
        );
        println!("\n=== Summary (token counts) ===");
        for (token, count) in counts {
            println!("{} {}", count, token);
        }
    }

    if settings.expand_output {
        let expanded: Vec<Value> = expander.expand(&rows).map(|r| r.to_value()).collect();
        println!("{}", serde_json::to_string_pretty(&expanded)?);
    }

    Ok(())
}

fn render_term_stats(stats: &TermStats) -> String {
    format!(
        "\nTerm: {}\n  Total occurrences: {}\n  Weekend/holiday occurrences: {}\n  Unique days: {}\n  Unique weekend/holiday days: {}\n",
        stats.term,
        stats.total,
        stats.total_weekend_or_holiday,
        stats.unique_days,
        stats.unique_days_weekend_or_holiday,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn settings_for(path: &std::path::Path, extra: &[&str]) -> Settings {
        let mut args = vec!["altistat", "--input", path.to_str().unwrap()];
        args.extend_from_slice(extra);
        let mut settings = Settings::parse_from(args);
        settings.apply_precedence();
        settings
    }

    fn write_batch(dir: &TempDir) -> std::path::PathBuf {
        let rows = json!([
            ["2024-05-25", true, false, "VITA dagtid 07:45 - 15:30 100"],
            ["2024-05-27", false, true, "bf -   700"],
        ]);
        let path = dir.path().join("batch.json");
        std::fs::write(&path, serde_json::to_string(&rows).unwrap()).unwrap();
        path
    }

    #[test]
    fn test_run_summary_and_find() {
        let dir = TempDir::new().unwrap();
        let path = write_batch(&dir);
        let settings = settings_for(&path, &["--find", "VITA dagtid"]);
        run(&settings).unwrap();
    }

    #[test]
    fn test_run_expand_output() {
        let dir = TempDir::new().unwrap();
        let path = write_batch(&dir);
        let settings = settings_for(&path, &["--expand-output"]);
        run(&settings).unwrap();
    }

    #[test]
    fn test_run_save_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = write_batch(&dir);
        let out = dir.path().join("resaved.json");
        let settings = settings_for(&path, &["--save", out.to_str().unwrap(), "--no-summary"]);
        run(&settings).unwrap();
        assert!(out.is_file());
    }

    #[test]
    fn test_run_reversed_range_exits_with_code_2() {
        let dir = TempDir::new().unwrap();
        let path = write_batch(&dir);
        let settings = settings_for(
            &path,
            &["--startdate", "2024-06-01", "--enddate", "2024-05-01"],
        );
        let err = run(&settings).unwrap_err();
        assert_eq!(exit_code_for(&err), 2);
    }

    #[test]
    fn test_run_missing_input_exits_with_code_2() {
        let settings = settings_for(std::path::Path::new("/tmp/no-such-altistat-batch.json"), &[]);
        let err = run(&settings).unwrap_err();
        assert_eq!(exit_code_for(&err), 2);
    }

    #[test]
    fn test_render_term_stats_layout() {
        let rendered = render_term_stats(&TermStats {
            term: "bf".to_string(),
            total: 3,
            total_weekend_or_holiday: 1,
            unique_days: 2,
            unique_days_weekend_or_holiday: 1,
        });
        assert!(rendered.contains("Term: bf"));
        assert!(rendered.contains("Total occurrences: 3"));
        assert!(rendered.contains("Unique days: 2"));
    }
}
