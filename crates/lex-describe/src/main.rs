//! CLI entry point for describing CSV datasets.

use anyhow::{Result, anyhow};
use clap::Parser;
use lex_describe::{DEFAULT_LABEL_COLUMN, DescribeConfig, Describer};
use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    author = "Lex Machina Team",
    version,
    about = "Descriptive statistics for the numeric columns of a CSV file",
    long_about = "Prints count, mean, std, min, max and quantiles for every numeric column.\n\n\
                  EXAMPLES:\n  \
                  # Default quantiles (0%, 25%, 50%, 75%, 100%)\n  \
                  lex-describe -i data.csv\n\n  \
                  # Custom quantiles, rows appear in the given order\n  \
                  lex-describe -i data.csv -q 0.9,0.5,0.1\n\n  \
                  # Machine-readable output\n  \
                  lex-describe -i data.csv --json | jq '.columns[0].mean'\n\n\
                  Wide tables are truncated by polars; set POLARS_FMT_MAX_COLS=-1 to show every column."
)]
struct Args {
    /// Path to the CSV file to describe
    #[arg(short, long)]
    input: PathBuf,

    /// Comma-separated quantile levels between 0.0 and 1.0
    #[arg(short, long, value_delimiter = ',', num_args = 1.., allow_negative_numbers = true)]
    quantiles: Option<Vec<f64>>,

    /// Name of the statistic label column
    #[arg(long, default_value = DEFAULT_LABEL_COLUMN)]
    label_column: String,

    /// Summarize columns one after another instead of in parallel
    #[arg(long)]
    sequential: bool,

    /// Output a JSON report to stdout instead of the table
    ///
    /// Disables all logging; only the JSON report is written.
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Only log warnings and errors
    #[arg(long)]
    quiet: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    // Validate quantiles before touching the input file
    let mut builder = DescribeConfig::builder()
        .label_column(&args.label_column)
        .parallel(!args.sequential);
    if let Some(ref levels) = args.quantiles {
        builder = builder.quantiles(levels.iter().copied());
    }
    let config = builder.build()?;

    if !args.input.exists() {
        return Err(anyhow!("Input file not found: {}", args.input.display()));
    }

    info!("Loading dataset from: {}", args.input.display());
    let data = load_csv(&args.input)?;
    info!("Dataset loaded successfully: {:?}", data.shape());

    let describer = Describer::new(config);

    if args.json {
        let report = describer.report(&data)?;
        println!("{}", report.to_json()?);
        return Ok(());
    }

    // Note: `println!` is intentional here; the table is the program's output
    let table = describer.describe(&data)?;
    println!("{table}");
    Ok(())
}

/// Load a CSV file with a header row.
fn load_csv(path: &Path) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_quote_char(Some(b'"')))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;
    debug!("Columns: {:?}", df.get_column_names());
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_quantiles_flag() {
        let args = Args::try_parse_from(["lex-describe", "-i", "x.csv", "-q", "0.1,0.5"]).unwrap();
        assert_eq!(args.quantiles, Some(vec![0.1, 0.5]));
        assert!(!args.quiet);
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["lex-describe", "--input", "x.csv"]).unwrap();
        assert_eq!(args.input, PathBuf::from("x.csv"));
        assert_eq!(args.quantiles, None);
        assert_eq!(args.label_column, DEFAULT_LABEL_COLUMN);
        assert_eq!(args.log_level, "info");
        assert!(!args.sequential && !args.json && !args.quiet);
    }

    #[test]
    fn test_long_flags() {
        let args = Args::try_parse_from([
            "lex-describe",
            "-i",
            "x.csv",
            "--quantiles",
            "0.9,-0.1",
            "--quiet",
            "--json",
            "--sequential",
            "-l",
            "debug",
        ])
        .unwrap();
        // range checks happen in the config builder, not in the parser
        assert_eq!(args.quantiles, Some(vec![0.9, -0.1]));
        assert!(args.quiet && args.json && args.sequential);
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn test_input_is_required() {
        assert!(Args::try_parse_from(["lex-describe", "-q", "0.5"]).is_err());
    }
}
