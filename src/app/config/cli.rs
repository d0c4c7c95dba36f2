use super::{ConfigError, LogLevel};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Input file with one record per line; the second space-separated field is the score
    #[arg(value_name = "INPUT", allow_hyphen_values = true)]
    pub input: PathBuf,

    /// Log level for diagnostics written to stderr
    #[arg(long, value_name = "LEVEL", ignore_case = true, default_value = "warn")]
    pub log_level: LogLevel,
}

impl Config {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            log_level: LogLevel::default(),
        }
    }

    /// Parses command-line arguments. The environment is not consulted.
    ///
    /// `--help`, `--version` and usage errors surface as `ConfigError::Cli`;
    /// the caller decides whether to print them and exit.
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Config::try_parse_from(args).map_err(ConfigError::from)
    }
}
