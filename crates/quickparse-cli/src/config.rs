//! Configuration file loading and CLI overrides

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::{Cli, OutputFormat};

/// Settings read from the optional JSON config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Output format; falls back to TTY detection when unset
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output
    #[serde(default)]
    pub pretty: bool,

    /// Enable debug logging
    #[serde(default)]
    pub verbose: bool,
}

impl Config {
    /// Apply command-line flags on top of file values
    pub fn merge_cli(mut self, cli: &Cli) -> Self {
        if cli.format.is_some() {
            self.format = cli.format;
        }
        self.pretty = cli.pretty || self.pretty;
        self.verbose = cli.verbose || self.verbose;
        self
    }

    /// Human on a terminal, JSON when piped, unless set explicitly
    pub fn effective_format(&self) -> OutputFormat {
        self.format.unwrap_or_else(|| {
            if atty::is(atty::Stream::Stdout) {
                OutputFormat::Human
            } else {
                OutputFormat::Json
            }
        })
    }
}

pub fn load_config(cli: &Cli) -> Result<Config> {
    let config = if let Some(path) = &cli.config {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config from {}", path.display()))?;
        serde_json::from_str::<Config>(&content).context("Failed to parse config")?
    } else {
        Config::default()
    };
    Ok(config.merge_cli(cli))
}
