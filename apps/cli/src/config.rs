//! # Run Configuration
//!
//! Every setting can come from a flag or an environment variable; flags
//! win. Running with nothing set reproduces the default behavior: 50
//! unseeded records appended to `./sales_data.db`, charts written to `.`.
//!
//! | Flag           | Env                    | Default          |
//! |----------------|------------------------|------------------|
//! | `--db`         | `SALESPLOT_DB_PATH`    | `sales_data.db`  |
//! | `--out-dir`    | `SALESPLOT_OUTPUT_DIR` | `.`              |
//! | `--count`      | `SALESPLOT_BATCH_SIZE` | `50`             |
//! | `--seed`       | `SALESPLOT_SEED`       | OS entropy       |
//! | `--reset`      | `SALESPLOT_RESET`      | off              |
//! | `--no-charts`  | `SALESPLOT_NO_CHARTS`  | off              |
//! | `--format`     | `SALESPLOT_FORMAT`     | `table`          |

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use salesplot_core::{GeneratorConfig, DEFAULT_BATCH_SIZE};
use salesplot_db::pool::DEFAULT_DATABASE_PATH;

use crate::error::{AppError, AppResult};

/// How the summary is printed on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    /// Aligned text table.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// Generate synthetic sales, store them, aggregate per product and chart the result.
#[derive(Debug, Clone, Parser)]
#[command(name = "salesplot", version, about)]
pub struct Cli {
    /// SQLite file holding the sales table (created if missing).
    #[arg(long = "db", value_name = "PATH", env = "SALESPLOT_DB_PATH", default_value = DEFAULT_DATABASE_PATH)]
    pub db_path: PathBuf,

    /// Directory the chart files are written to.
    #[arg(long, value_name = "DIR", env = "SALESPLOT_OUTPUT_DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Records generated this run.
    #[arg(
        long,
        value_name = "N",
        env = "SALESPLOT_BATCH_SIZE",
        default_value_t = DEFAULT_BATCH_SIZE as u32,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub count: u32,

    /// Seed for a reproducible batch.
    #[arg(long, value_name = "U64", env = "SALESPLOT_SEED")]
    pub seed: Option<u64>,

    /// Delete rows from earlier runs before inserting.
    #[arg(long, env = "SALESPLOT_RESET")]
    pub reset: bool,

    /// Print the summary only.
    #[arg(long, env = "SALESPLOT_NO_CHARTS")]
    pub no_charts: bool,

    /// Summary output format.
    #[arg(long, value_enum, env = "SALESPLOT_FORMAT", default_value_t = SummaryFormat::Table)]
    pub format: SummaryFormat,
}

/// Resolved settings for one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub db_path: PathBuf,
    pub output_dir: PathBuf,
    pub generator: GeneratorConfig,
    pub reset: bool,
    pub render_charts: bool,
    pub format: SummaryFormat,
}

impl PipelineConfig {
    /// Defaults with the store at `db_path` and charts in `output_dir`.
    pub fn new(db_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        PipelineConfig {
            db_path: db_path.into(),
            output_dir: output_dir.into(),
            generator: GeneratorConfig::default(),
            reset: false,
            render_charts: true,
            format: SummaryFormat::Table,
        }
    }

    /// Rejects settings the pipeline cannot run with.
    pub fn validate(&self) -> AppResult<()> {
        if self.generator.batch_size == 0 {
            return Err(AppError::Config("batch size must be at least 1".to_string()));
        }
        if self.db_path.as_os_str().is_empty() {
            return Err(AppError::Config("database path is empty".to_string()));
        }
        if self.render_charts && self.output_dir.as_os_str().is_empty() {
            return Err(AppError::Config("output directory is empty".to_string()));
        }
        Ok(())
    }
}

impl From<Cli> for PipelineConfig {
    fn from(cli: Cli) -> Self {
        let mut generator = GeneratorConfig::default().batch_size(cli.count as usize);
        generator.seed = cli.seed;

        PipelineConfig {
            db_path: cli.db_path,
            output_dir: cli.out_dir,
            generator,
            reset: cli.reset,
            render_charts: !cli.no_charts,
            format: cli.format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let config: PipelineConfig = Cli::try_parse_from(["salesplot"]).unwrap().into();

        assert_eq!(config.db_path, PathBuf::from("sales_data.db"));
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.generator.batch_size, 50);
        assert_eq!(config.generator.seed, None);
        assert!(!config.reset);
        assert!(config.render_charts);
        assert_eq!(config.format, SummaryFormat::Table);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "salesplot",
            "--db",
            "/tmp/s.db",
            "--count",
            "5",
            "--seed",
            "42",
            "--reset",
            "--no-charts",
            "--format",
            "json",
        ])
        .unwrap();
        let config = PipelineConfig::from(cli);

        assert_eq!(config.db_path, PathBuf::from("/tmp/s.db"));
        assert_eq!(config.generator, GeneratorConfig::default().batch_size(5).seed(42));
        assert!(config.reset);
        assert!(!config.render_charts);
        assert_eq!(config.format, SummaryFormat::Json);
    }

    #[test]
    fn test_validate() {
        let config = PipelineConfig::new("sales_data.db", ".");
        assert!(config.validate().is_ok());

        let mut zero = config.clone();
        zero.generator = zero.generator.batch_size(0);
        assert!(matches!(zero.validate(), Err(AppError::Config(_))));

        let mut no_db = config.clone();
        no_db.db_path = PathBuf::new();
        assert!(matches!(no_db.validate(), Err(AppError::Config(_))));

        let mut no_out = config;
        no_out.output_dir = PathBuf::new();
        assert!(matches!(no_out.validate(), Err(AppError::Config(_))));
        no_out.render_charts = false;
        assert!(no_out.validate().is_ok());
    }

    #[test]
    fn test_zero_count_rejected() {
        assert!(Cli::try_parse_from(["salesplot", "--count", "0"]).is_err());
    }
}
