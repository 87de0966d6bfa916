//! Configuration management for simulation parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! the `config.toml` file. Every field has a default, so a partial file (or
//! no file at all) yields a usable configuration.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `config.toml` file (overrides defaults)
//! 3. Command-line flags (applied by the binary)
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [grid]
//! width = 80
//! height = 40
//!
//! [rules]
//! rule = "B36/S23"
//! neighborhood = "Moore"
//!
//! [simulation]
//! update_interval_ms = 50
//! random_density = 0.25
//! seed = 42
//! ```

use crate::history::{DEFAULT_HISTORY_CAPACITY, MIN_HISTORY_CAPACITY};
use crate::rules::{RuleSet, DEFAULT_RULE};
use anyhow::Context;
use chronolife_data::NeighborhoodKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Side length of the grid when nothing else is configured.
pub const DEFAULT_GRID_SIZE: usize = 50;
/// Largest accepted grid side.
pub const MAX_GRID_SIZE: usize = 1000;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Grid dimensions.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_SIZE,
            height: DEFAULT_GRID_SIZE,
        }
    }
}

/// Automaton rule and neighborhood shape.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct RulesConfig {
    /// Rule in `B<digits>/S<digits>` notation; invalid strings fall back to B3/S23.
    pub rule: String,
    pub neighborhood: NeighborhoodKind,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            rule: DEFAULT_RULE.to_string(),
            neighborhood: NeighborhoodKind::Moore,
        }
    }
}

impl RulesConfig {
    #[must_use]
    pub fn rule_set(&self) -> RuleSet {
        RuleSet::parse(&self.rule)
    }
}

/// Stepping cadence, seeding and history depth.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Ticker period used by the driver; the engine itself keeps no time.
    pub update_interval_ms: u64,
    /// Fraction of cells alive after a random fill.
    pub random_density: f64,
    pub history_capacity: usize,
    pub seed: Option<u64>,
    /// Forward generations to run before the driver stops; `0` means no limit.
    pub max_generations: u64,
    /// Replay history backward once the forward run ends.
    pub reverse: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            update_interval_ms: 100,
            random_density: 0.3,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            seed: None,
            max_generations: 1000,
            reverse: false,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub grid: GridConfig,
    pub rules: RulesConfig,
    pub simulation: SimulationConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    ///
    /// # Validation Rules
    /// - Grid dimensions must be in `1..=1000`
    /// - Random density must be in `[0.0, 1.0]`
    /// - History must hold at least two generations
    /// - Update interval must be in `1..=60000` ms
    /// - Log level must name a tracing level
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.grid.width > 0, "Grid width must be positive");
        anyhow::ensure!(
            self.grid.width <= MAX_GRID_SIZE,
            "Grid width too large (max {MAX_GRID_SIZE})"
        );
        anyhow::ensure!(self.grid.height > 0, "Grid height must be positive");
        anyhow::ensure!(
            self.grid.height <= MAX_GRID_SIZE,
            "Grid height too large (max {MAX_GRID_SIZE})"
        );

        anyhow::ensure!(
            (0.0..=1.0).contains(&self.simulation.random_density),
            "Random density must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            self.simulation.history_capacity >= MIN_HISTORY_CAPACITY,
            "History capacity must be at least {MIN_HISTORY_CAPACITY}"
        );
        anyhow::ensure!(
            self.simulation.update_interval_ms > 0,
            "Update interval must be positive"
        );
        anyhow::ensure!(
            self.simulation.update_interval_ms <= 60_000,
            "Update interval too long (max 60000 ms)"
        );

        anyhow::ensure!(
            LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()),
            "Unknown log level '{}'",
            self.logging.level
        );

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`. A missing file yields the defaults;
    /// a present but invalid file is an error.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Digest of everything that changes simulation outcomes (grid, rule,
    /// neighborhood, seed). Cadence and logging are excluded.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.grid).as_bytes());
        hasher.update(self.rules.rule_set().notation().as_bytes());
        hasher.update(self.rules.neighborhood.name().as_bytes());
        hasher.update(format!("{:?}", self.simulation.seed).as_bytes());
        hasher.update(self.simulation.random_density.to_le_bytes());
        hex::encode(hasher.finalize())
    }
}
