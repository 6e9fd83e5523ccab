//! Pieces shared by the `image-gen` binaries.

use clap::Args;
use hf_imagegen::{Config, Error};
use simplelog::{LevelFilter, SimpleLogger};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct Common {
    /// TOML file with `api_key`, `model`, `endpoint`, `output_dir`,
    /// `timeout_secs` or `probe_timeout_secs`. The environment takes
    /// precedence over it.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Log requests and configuration details
    #[arg(short, long)]
    pub verbose: bool,
}

impl Common {
    pub fn init_logger(&self) -> anyhow::Result<()> {
        let level = if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        SimpleLogger::init(level, Default::default())?;
        Ok(())
    }

    pub fn load_config(&self) -> anyhow::Result<Config> {
        crate::config::load(self.config.as_deref())
    }
}

/// One-line, user facing description of a failed request.
pub fn describe(error: &Error) -> String {
    match error {
        Error::Api { status, body } => format!("API Error: {} - {}", status, body),
        other => format!("{} error: {}", other.kind(), other),
    }
}
