use crate::config::toml_config::TomlConfig;
use crate::config::AppConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "liturgia")]
#[command(about = "Daily liturgy viewer and PDF preview helper")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Base URL of the liturgy server
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the preview style for PDF customization options
    Preview {
        #[arg(long)]
        font_size: Option<f64>,
        #[arg(long)]
        font_family: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    /// Load and display the liturgy for a date (default: today)
    Load { date: Option<String> },
    /// Load the liturgy for a date and save it as text
    Export {
        date: Option<String>,
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print the selectable date range around today
    Range,
}

impl CliConfig {
    /// Merges defaults, the config file (if any) and command line flags.
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                AppConfig::from(&file)
            }
            None => AppConfig::default(),
        };

        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.request_timeout = Some(Duration::from_secs(timeout));
        }
        if let Command::Export {
            output: Some(output),
            ..
        } = &self.command
        {
            config.output_path = output.clone();
        }

        config.validate()?;
        Ok(config)
    }
}
