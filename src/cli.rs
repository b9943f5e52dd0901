use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::analyzer::podlint::{OutputFormat, PodlintConfig};

#[derive(Parser)]
#[command(name = "podspec-lint")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Validate a pod manifest against semantic rules")]
#[command(long_about = "Checks a single pod manifest for problems a schema validator misses: unsupported `spec.os` values, readiness probe ports outside 1-65535 and CPU requests or limits that are not bare integers. Every violation is printed as `<file>:<line> <message>` on stderr; the exit status is 1 when any is found.")]
pub struct Cli {
    /// Path to the manifest to validate
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Rule codes to skip (e.g. POD003)
    #[arg(long, value_name = "CODE", value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// Output format for diagnostics
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: FormatArg,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Plain,
    Json,
    Github,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Plain => OutputFormat::Plain,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Github => OutputFormat::GitHub,
        }
    }
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }

    /// Build the validator configuration from the flags.
    pub fn config(&self) -> PodlintConfig {
        PodlintConfig::new().with_ignores(self.ignore.iter().cloned())
    }
}
