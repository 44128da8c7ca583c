use crate::config::Config;
use crate::error::Result;
use clap::{Parser, Subcommand};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "checking-ledger", about = "In-memory checking account simulator")]
pub struct Opt {
    #[arg(long, global = true, help = "Path to a TOML settings file")]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, help = "Branch code for new accounts")]
    pub branch: Option<String>,
    #[arg(
        long = "log-level",
        global = true,
        help = "Log level (off, error, warn, info, debug, trace)"
    )]
    pub log_level: Option<String>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    #[command(name = "run", about = "Start the interactive menu (default)")]
    Run,
    #[command(name = "show-config", about = "Print the effective settings as TOML")]
    ShowConfig,
}

impl Opt {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }

    /// Effective settings: file and environment, then these flags, then
    /// validation of the result.
    pub fn load_config(&self) -> Result<Config> {
        self.load_config_with(|key| env::var(key).ok())
    }

    pub fn load_config_with<F>(&self, lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = self.apply_to(Config::from_sources(self.config.as_deref(), lookup)?);
        config.validate()?;
        Ok(config)
    }

    /// Command-line flags take precedence over every other source
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(branch) = &self.branch {
            config.branch_code = branch.clone();
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        config
    }
}
