pub mod macros;

use chronolife_lib::model::config::AppConfig;
use chronolife_lib::model::engine::SimulationEngine;
use chronolife_lib::model::patterns::Pattern;

type EngineMod = Box<dyn FnOnce(&mut SimulationEngine)>;

#[allow(dead_code)]
pub struct EngineBuilder {
    config: AppConfig,
    mods: Vec<EngineMod>,
}

#[allow(dead_code)]
impl EngineBuilder {
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.grid.width = 10;
        config.grid.height = 10;
        Self {
            config,
            mods: Vec::new(),
        }
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.config.grid.width = width;
        self.config.grid.height = height;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.simulation.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_rules(mut self, rules: &str) -> Self {
        self.config.rules.rule = rules.to_string();
        self
    }

    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.config.simulation.history_capacity = capacity;
        self
    }

    /// Sets cells directly; not recorded in history.
    pub fn with_alive(mut self, cells: &[(i32, i32)]) -> Self {
        let cells = cells.to_vec();
        self.mods.push(Box::new(move |engine| {
            for (x, y) in cells {
                engine.set_cell_state(x, y, true);
            }
        }));
        self
    }

    /// Places a pattern through the engine, which records one history entry.
    pub fn with_pattern(mut self, pattern: &Pattern, x: i32, y: i32) -> Self {
        let cells = pattern.cells();
        self.mods
            .push(Box::new(move |engine| engine.place_pattern(x, y, &cells)));
        self
    }

    pub fn with_random_fill(mut self, density: f64) -> Self {
        self.mods
            .push(Box::new(move |engine| engine.randomize(density)));
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn build(self) -> SimulationEngine {
        let mut engine = SimulationEngine::with_config(&self.config);
        for modifier in self.mods {
            modifier(&mut engine);
        }
        engine
    }
}

/// Live cells as sorted `(x, y)` pairs.
#[allow(dead_code)]
pub fn alive_cells(engine: &SimulationEngine) -> Vec<(i32, i32)> {
    let mut cells: Vec<_> = engine
        .grid()
        .cells()
        .filter(|cell| cell.alive)
        .map(|cell| cell.position())
        .collect();
    cells.sort_unstable();
    cells
}
