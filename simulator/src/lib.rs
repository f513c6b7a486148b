//! Session runner for crapsim: configuration, replay files and session
//! statistics. The `crapsim` binary is a thin wrapper around this crate.

use clap::ValueEnum;
use crapsim_execution::{BettingStrategy, DontComeWithPlaceBets, MinPassLineMaxOdds, MinPassLineOnly};
use crapsim_types::{
    chips, Chips, DiceRoll, InvalidDie, Point, RulesError, TableRules, DEFAULT_HANDS,
    DEFAULT_MAX_ODDS_MULTIPLE, DEFAULT_MIN_BET, MAX_BALANCE, STARTING_BALANCE,
};
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    str::FromStr,
};
use thiserror::Error;
use tracing::Level;

mod session;

pub use session::{
    run_session, DiceDistribution, DistributionRow, HandReport, SessionSummary, Tally,
};

/// Betting strategies selectable from the command line or config file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyName {
    MinPassLineOnly,
    MinPassLineMaxOdds,
    #[default]
    DontComeWithPlaceBets,
}

impl StrategyName {
    pub fn strategy(self) -> &'static dyn BettingStrategy {
        match self {
            StrategyName::MinPassLineOnly => &MinPassLineOnly,
            StrategyName::MinPassLineMaxOdds => &MinPassLineMaxOdds,
            StrategyName::DontComeWithPlaceBets => &DontComeWithPlaceBets,
        }
    }
}

/// Configuration for [run_session], as written in a YAML file.
///
/// Every field may be omitted; command-line flags override what is set here.
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_hands")]
    pub hands: u32,
    #[serde(default = "default_balance")]
    pub balance: i64,
    #[serde(default)]
    pub strategy: StrategyName,
    /// Seed for the dice; a random one is drawn when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// JSON file of recorded rolls to play before random dice take over.
    #[serde(default)]
    pub rolls: Option<PathBuf>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log every roll and settlement.
    #[serde(default)]
    pub detail: bool,

    #[serde(default = "default_min_bet")]
    pub min_bet: i64,
    /// Keyed by point number.
    #[serde(default = "default_max_odds_multiple")]
    pub max_odds_multiple: BTreeMap<u8, i64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid rolls file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("roll {index} is invalid")]
    InvalidRoll {
        index: usize,
        #[source]
        source: InvalidDie,
    },
    #[error("invalid log level: {value}")]
    InvalidLogLevel { value: String },
    #[error("{field} must be > 0 (got {value})")]
    InvalidNonZero { field: &'static str, value: i64 },
    #[error("{field} must be <= {max} (got {value})")]
    TooLarge {
        field: &'static str,
        value: i64,
        max: i64,
    },
    #[error("max_odds_multiple key {0} is not a point number")]
    InvalidPoint(u8),
    #[error(transparent)]
    Rules(#[from] RulesError),
}

/// A [Config] that has been checked and resolved.
#[derive(Debug)]
pub struct ValidatedConfig {
    pub hands: u32,
    pub balance: Chips,
    pub strategy: StrategyName,
    pub seed: u64,
    pub rolls: Vec<DiceRoll>,
    pub log_level: Level,
    pub detail: bool,
    pub rules: TableRules,
}

fn default_hands() -> u32 {
    DEFAULT_HANDS
}

fn default_balance() -> i64 {
    STARTING_BALANCE
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_min_bet() -> i64 {
    DEFAULT_MIN_BET
}

fn default_max_odds_multiple() -> BTreeMap<u8, i64> {
    DEFAULT_MAX_ODDS_MULTIPLE
        .iter()
        .map(|&(point, multiple)| (point.total(), multiple))
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hands: default_hands(),
            balance: default_balance(),
            strategy: StrategyName::default(),
            seed: None,
            rolls: None,
            log_level: default_log_level(),
            detail: false,
            min_bet: default_min_bet(),
            max_odds_multiple: default_max_odds_multiple(),
        }
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses a JSON array of `{"die1": _, "die2": _}` records, rejecting faces
/// outside 1-6.
pub fn parse_rolls(contents: &str) -> Result<Vec<DiceRoll>, ConfigError> {
    let rolls: Vec<DiceRoll> = serde_json::from_str(contents)?;
    for (index, roll) in rolls.iter().enumerate() {
        roll.validate()
            .map_err(|source| ConfigError::InvalidRoll { index, source })?;
    }
    Ok(rolls)
}

pub fn load_rolls(path: &Path) -> Result<Vec<DiceRoll>, ConfigError> {
    parse_rolls(&read(path)?)
}

impl Config {
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_yaml(&read(path)?)
    }

    pub fn rules(&self) -> Result<TableRules, ConfigError> {
        let mut max_odds_multiple = BTreeMap::new();
        for (&key, &multiple) in &self.max_odds_multiple {
            let point = Point::try_from(key).map_err(|_| ConfigError::InvalidPoint(key))?;
            max_odds_multiple.insert(point, chips(multiple));
        }
        Ok(TableRules::new(chips(self.min_bet), max_odds_multiple)?)
    }

    pub fn validate(self) -> Result<ValidatedConfig, ConfigError> {
        if self.hands == 0 {
            return Err(ConfigError::InvalidNonZero {
                field: "hands",
                value: i64::from(self.hands),
            });
        }
        if self.balance <= 0 {
            return Err(ConfigError::InvalidNonZero {
                field: "balance",
                value: self.balance,
            });
        }
        if self.balance > MAX_BALANCE {
            return Err(ConfigError::TooLarge {
                field: "balance",
                value: self.balance,
                max: MAX_BALANCE,
            });
        }

        let log_level =
            Level::from_str(&self.log_level).map_err(|_| ConfigError::InvalidLogLevel {
                value: self.log_level.clone(),
            })?;
        let rules = self.rules()?;
        let rolls = match &self.rolls {
            Some(path) => load_rolls(path)?,
            None => Vec::new(),
        };

        Ok(ValidatedConfig {
            hands: self.hands,
            balance: chips(self.balance),
            strategy: self.strategy,
            seed: self.seed.unwrap_or_else(rand::random),
            rolls,
            log_level,
            detail: self.detail,
            rules,
        })
    }
}

#[cfg(test)]
mod tests;
