pub mod config;
pub mod logging_system;

pub use config::{Config, ConfigError, LogLevel};
pub use logging_system::{InitializationError, setup_logging};

use crate::classifier::{ClassificationSummary, LineClassifier};
use anyhow::Context;
use std::io::{self, BufWriter, Write};
use tracing::{info, warn};

pub struct App {
    config: Config,
    classifier: LineClassifier,
}

impl App {
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let config = Config::from_args(args)?;
        Ok(Self::from_config(config))
    }

    pub fn from_config(config: Config) -> Self {
        Self {
            config,
            classifier: LineClassifier::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Classifies the configured input, writing labels to stdout.
    pub fn run(&self) -> anyhow::Result<ClassificationSummary> {
        let stdout = io::stdout();
        let mut writer = BufWriter::new(stdout.lock());
        self.run_with_writer(&mut writer)
    }

    /// Classifies the configured input into `writer`.
    ///
    /// The writer is flushed on failure as well, so labels produced before a
    /// malformed line still reach the output.
    pub fn run_with_writer<W: Write>(&self, writer: &mut W) -> anyhow::Result<ClassificationSummary> {
        let input = &self.config.input;
        let result = self.classifier.run_file(input, writer);
        let flushed = writer.flush();

        match result {
            Ok(summary) => {
                flushed.context("Failed to flush classification output")?;
                info!(
                    "Classified {} line(s) from {}: neg={}, neu={}, pos={}",
                    summary.total(),
                    input.display(),
                    summary.negative,
                    summary.neutral,
                    summary.positive
                );
                Ok(summary)
            }
            Err(e) => {
                if let Err(flush_error) = flushed {
                    warn!("Failed to flush partial output: {}", flush_error);
                }
                Err(e).with_context(|| format!("Failed to classify {}", input.display()))
            }
        }
    }
}

// Main entry point for the application
pub fn main() -> anyhow::Result<()> {
    let app = match App::from_args(std::env::args_os()) {
        Ok(app) => app,
        // Prints help/version/usage and exits with clap's status code.
        Err(ConfigError::Cli(e)) => e.exit(),
    };

    setup_logging(app.config().log_level).context("Failed to initialize logging")?;

    app.run()?;
    Ok(())
}
