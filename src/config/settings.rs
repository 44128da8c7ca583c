use crate::core::monetary::{
    parse_amount, DEFAULT_BRANCH_CODE, DEFAULT_WITHDRAWAL_COUNT_LIMIT,
    DEFAULT_WITHDRAWAL_VALUE_LIMIT,
};
use crate::core::AccountLimits;
use crate::error::{BankError, Result};
use log::LevelFilter;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const BRANCH_CODE_KEY: &str = "BANK_BRANCH_CODE";
const WITHDRAWAL_LIMIT_KEY: &str = "BANK_WITHDRAWAL_LIMIT";
const WITHDRAWAL_COUNT_LIMIT_KEY: &str = "BANK_WITHDRAWAL_COUNT_LIMIT";
const LOG_LEVEL_KEY: &str = "BANK_LOG_LEVEL";

const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub branch_code: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub withdrawal_value_limit: Decimal,
    pub withdrawal_count_limit: u32,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            branch_code: String::from(DEFAULT_BRANCH_CODE),
            withdrawal_value_limit: DEFAULT_WITHDRAWAL_VALUE_LIMIT,
            withdrawal_count_limit: DEFAULT_WITHDRAWAL_COUNT_LIMIT,
            log_level: String::from(DEFAULT_LOG_LEVEL),
        }
    }
}

impl Config {
    /// Defaults, then the optional TOML file, then `BANK_*` environment
    /// variables. Not validated yet: command-line flags still apply on top.
    pub fn new(path: Option<&Path>) -> Result<Config> {
        Config::from_sources(path, |key| env::var(key).ok())
    }

    /// Same as `new`, with environment lookups going through `lookup`.
    pub fn from_sources<F>(path: Option<&Path>, lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = match path {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        config.with_overrides(lookup)
    }

    pub fn load(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| {
            BankError::Config(format!("Cannot read {}: {e}", path.display()))
        })?;
        Config::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Config> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Apply `BANK_*` overrides looked up through `lookup`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(branch) = lookup(BRANCH_CODE_KEY) {
            self.branch_code = branch;
        }
        if let Some(limit) = lookup(WITHDRAWAL_LIMIT_KEY) {
            self.withdrawal_value_limit = parse_amount(&limit)
                .map_err(|_| BankError::Config(format!("{WITHDRAWAL_LIMIT_KEY}={limit}")))?;
        }
        if let Some(count) = lookup(WITHDRAWAL_COUNT_LIMIT_KEY) {
            self.withdrawal_count_limit = count.trim().parse().map_err(|_| {
                BankError::Config(format!("{WITHDRAWAL_COUNT_LIMIT_KEY}={count}"))
            })?;
        }
        if let Some(level) = lookup(LOG_LEVEL_KEY) {
            self.log_level = level;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.branch_code.trim().is_empty() {
            return Err(BankError::Config("branch_code must not be empty".into()));
        }
        if self.withdrawal_value_limit <= Decimal::ZERO {
            return Err(BankError::Config(format!(
                "withdrawal_value_limit must be positive, got {}",
                self.withdrawal_value_limit
            )));
        }
        self.log_level_filter()?;
        Ok(())
    }

    pub fn log_level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(self.log_level.trim())
            .map_err(|_| BankError::Config(format!("Unknown log level: {}", self.log_level)))
    }

    /// Limits given to every newly opened account
    pub fn account_limits(&self) -> AccountLimits {
        AccountLimits {
            withdrawal_value_limit: self.withdrawal_value_limit,
            withdrawal_count_limit: self.withdrawal_count_limit,
        }
    }
}
