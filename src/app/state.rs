use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::app::shutdown::ShutdownSignal;
use crate::model::config::AppConfig;
use crate::model::engine::SimulationEngine;
use crate::model::patterns::Pattern;
use crate::model::persistence;
use crate::model::shared::SharedEngine;

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A forward step changed nothing.
    Stable,
    /// `max_generations` forward generations were reached.
    GenerationLimit,
    /// A reverse replay ran out of history.
    HistoryExhausted,
    /// Something outside the ticker stopped the engine.
    Stopped,
    /// Ctrl+C or [`ShutdownSignal::request`].
    Interrupted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Why the forward phase ended.
    pub forward: StopReason,
    /// Why the reverse replay ended, when one ran.
    pub reverse: Option<StopReason>,
    pub forward_steps: u64,
    pub backward_steps: u64,
    pub final_generation: u64,
    pub alive_cells: usize,
}

impl RunSummary {
    /// Reason of the last phase that ran.
    pub fn stop_reason(&self) -> StopReason {
        self.reverse.unwrap_or(self.forward)
    }
}

pub struct App {
    pub config: AppConfig,
    pub engine: SharedEngine,
    pub shutdown: ShutdownSignal,
    /// Where the final state is written on exit.
    pub save_path: Option<PathBuf>,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;
        let engine = SimulationEngine::with_config(&config);
        let fingerprint = config.fingerprint();
        tracing::info!(
            width = engine.width(),
            height = engine.height(),
            rules = %engine.current_rules(),
            neighborhood = engine.current_neighborhood(),
            fingerprint = %&fingerprint[..12],
            "Simulation configured"
        );
        Ok(Self {
            config,
            engine: SharedEngine::new(engine),
            shutdown: ShutdownSignal::new(),
            save_path: None,
        })
    }

    /// Fills the grid at the configured density.
    pub fn seed_random(&self) {
        let density = self.config.simulation.random_density;
        self.engine.with(|engine| engine.randomize(density));
    }

    /// Clears the grid and places `pattern` in its center.
    pub fn seed_pattern(&self, pattern: &Pattern) {
        self.engine.with(|engine| {
            let (width, height) = (engine.width(), engine.height());
            engine.initialize(width, height);
            let x = width.saturating_sub(pattern.width()) / 2;
            let y = height.saturating_sub(pattern.height()) / 2;
            engine.place_pattern(x as i32, y as i32, &pattern.cells());
        });
        tracing::info!(pattern = pattern.name, "Pattern placed");
    }

    pub fn load_state(&self, path: impl Into<PathBuf>) -> Result<u64> {
        let path = path.into();
        self.engine
            .with(|engine| persistence::load_engine(engine, &path))
            .with_context(|| format!("Failed to load {}", path.display()))
    }

    /// Writes the current state to [`save_path`](Self::save_path), if set.
    pub fn save_state(&self) -> Result<()> {
        let Some(path) = &self.save_path else {
            return Ok(());
        };
        self.engine
            .with(|engine| persistence::save_engine(engine, path))
            .with_context(|| format!("Failed to save {}", path.display()))
    }

    /// The grid as `O`/`.` text, one line per row.
    pub fn render(&self) -> String {
        self.engine.snapshot().to_text_rows().join("\n")
    }
}
