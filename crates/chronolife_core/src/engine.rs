//! The simulation engine: grid, rules, neighborhood and history driven as
//! one unit.
//!
//! The engine keeps no clock. A driver calls [`SimulationEngine::update`] at
//! whatever cadence it likes; `update` does nothing unless the engine has
//! been started and is not paused.
//!
//! Forward steps are synchronous: every cell of the next generation is
//! computed from the previous generation only. Two buffers are kept, the
//! live grid and a back buffer that receives the next generation, and they
//! are swapped once the whole grid has been computed.

use crate::config::AppConfig;
use crate::grid::Grid;
use crate::history::{HistoryStore, DEFAULT_HISTORY_CAPACITY};
use crate::metrics::Metrics;
use crate::neighborhood::NeighborhoodLogic;
use crate::rules::RuleSet;
use chronolife_data::{CellStates, Direction, NeighborhoodKind};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

/// Grids with at least this many cells are stepped row-parallel.
#[cfg(feature = "rayon")]
const PARALLEL_THRESHOLD: usize = 64 * 64;

/// Coarse run state of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
    /// Started, but `update` is a no-op until resumed.
    Paused,
}

/// Result of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A forward step changed at least one cell.
    Advanced { generation: u64 },
    /// A forward step changed nothing. The engine has stopped itself and the
    /// generation counter was not advanced.
    Stable { generation: u64 },
    /// A backward step restored an earlier generation.
    Rewound { generation: u64 },
    /// A backward step found no history; nothing changed.
    HistoryExhausted,
}

impl StepOutcome {
    #[must_use]
    pub fn is_stable(&self) -> bool {
        matches!(self, Self::Stable { .. })
    }

    /// Generation after the step, if the step did anything.
    #[must_use]
    pub fn generation(&self) -> Option<u64> {
        match self {
            Self::Advanced { generation }
            | Self::Stable { generation }
            | Self::Rewound { generation } => Some(*generation),
            Self::HistoryExhausted => None,
        }
    }
}

pub struct SimulationEngine {
    grid: Grid,
    back_buffer: Grid,
    rules: RuleSet,
    neighborhood: NeighborhoodKind,
    history: HistoryStore,
    generation: u64,
    state: RunState,
    direction: Direction,
    rng: ChaCha8Rng,
    metrics: Metrics,
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new(
            crate::config::DEFAULT_GRID_SIZE,
            crate::config::DEFAULT_GRID_SIZE,
        )
    }
}

impl std::fmt::Debug for SimulationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationEngine")
            .field("width", &self.grid.width())
            .field("height", &self.grid.height())
            .field("rules", &self.rules.notation())
            .field("neighborhood", &self.neighborhood)
            .field("generation", &self.generation)
            .field("state", &self.state)
            .field("direction", &self.direction)
            .field("history", &self.history.count())
            .finish()
    }
}

impl SimulationEngine {
    /// Stopped engine with an all-dead grid, B3/S23 and the Moore neighborhood.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_history_capacity(width, height, DEFAULT_HISTORY_CAPACITY)
    }

    #[must_use]
    pub fn with_history_capacity(width: usize, height: usize, capacity: usize) -> Self {
        let grid = Grid::new(width, height);
        Self {
            back_buffer: grid.clone(),
            grid,
            rules: RuleSet::default(),
            neighborhood: NeighborhoodKind::default(),
            history: HistoryStore::new(capacity),
            generation: 0,
            state: RunState::Stopped,
            direction: Direction::Forward,
            rng: ChaCha8Rng::from_entropy(),
            metrics: Metrics::new(),
        }
    }

    /// Engine configured from the grid, rules and simulation sections.
    #[must_use]
    pub fn with_config(config: &AppConfig) -> Self {
        let mut engine = Self::with_history_capacity(
            config.grid.width,
            config.grid.height,
            config.simulation.history_capacity,
        );
        engine.rules = config.rules.rule_set();
        engine.neighborhood = config.rules.neighborhood;
        if let Some(seed) = config.simulation.seed {
            engine.reseed(seed);
        }
        engine
    }

    /// Makes subsequent random fills deterministic.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    // --- lifecycle -------------------------------------------------------

    /// Replaces the grid with an all-dead `width × height` grid, stops the
    /// engine and forgets all history.
    pub fn initialize(&mut self, width: usize, height: usize) {
        self.grid = Grid::new(width, height);
        self.back_buffer.copy_from(&self.grid);
        self.generation = 0;
        self.state = RunState::Stopped;
        self.direction = Direction::Forward;
        self.history.clear();
        tracing::debug!(
            width = self.grid.width(),
            height = self.grid.height(),
            "Grid initialized"
        );
    }

    /// [`initialize`](Self::initialize), then place `pattern` at the origin.
    pub fn initialize_with_pattern<R: AsRef<[bool]>>(
        &mut self,
        width: usize,
        height: usize,
        pattern: &[R],
    ) {
        self.initialize(width, height);
        self.place_pattern(0, 0, pattern);
    }

    pub fn start(&mut self, reverse: bool) {
        self.state = RunState::Running;
        self.direction = Direction::from_reverse(reverse);
        tracing::debug!(direction = ?self.direction, generation = self.generation, "Engine started");
    }

    /// Only takes effect while running.
    pub fn pause(&mut self) {
        if self.state == RunState::Running {
            self.state = RunState::Paused;
        }
    }

    /// Only takes effect while paused.
    pub fn resume(&mut self) {
        if self.state == RunState::Paused {
            self.state = RunState::Running;
        }
    }

    pub fn stop(&mut self) {
        self.state = RunState::Stopped;
    }

    /// Stops the engine, kills every cell, and clears generation and history.
    pub fn reset(&mut self) {
        self.stop();
        self.grid.reset();
        self.generation = 0;
        self.history.clear();
        self.metrics.increment_counter("reset");
        tracing::info!("Simulation reset");
    }

    // --- seeding and editing ---------------------------------------------

    /// Fills the grid at random; each cell is alive with probability
    /// `density`, clamped to `[0, 1]`. Resets the generation counter and
    /// history, then records the new state as the first history entry.
    pub fn randomize(&mut self, density: f64) {
        let density = if density.is_finite() {
            density.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let rng = &mut self.rng;
        for alive in self.grid.as_mut_slice() {
            *alive = rng.gen_bool(density);
        }
        self.generation = 0;
        self.history.clear();
        self.save_current_state();
        self.metrics.increment_counter("randomize");
        tracing::debug!(
            density = density,
            alive = self.grid.count_alive(),
            "Grid randomized"
        );
    }

    /// Overlays `pattern` (rows indexed `[y][x]`) with its top-left corner at
    /// `(start_x, start_y)`. Both live and dead pattern cells are written;
    /// the part falling outside the grid is dropped. The resulting state is
    /// recorded in history.
    pub fn place_pattern<R: AsRef<[bool]>>(&mut self, start_x: i32, start_y: i32, pattern: &[R]) {
        let mut clipped = 0usize;
        for (dy, row) in pattern.iter().enumerate() {
            for (dx, alive) in row.as_ref().iter().enumerate() {
                let x = start_x.saturating_add(dx as i32);
                let y = start_y.saturating_add(dy as i32);
                if self.grid.in_bounds(x, y) {
                    self.grid.set(x, y, *alive);
                } else {
                    clipped += 1;
                }
            }
        }
        if clipped > 0 {
            tracing::warn!(clipped = clipped, "Pattern partially outside the grid");
        }
        self.save_current_state();
        self.metrics.increment_counter("pattern");
    }

    /// Direct edit of one cell. Not recorded in history, so it cannot be
    /// undone by stepping backward.
    pub fn set_cell_state(&mut self, x: i32, y: i32, alive: bool) {
        self.grid.set(x, y, alive);
    }

    /// Flips one cell; same history policy as [`set_cell_state`](Self::set_cell_state).
    pub fn toggle_cell(&mut self, x: i32, y: i32) -> Option<bool> {
        self.grid.toggle(x, y)
    }

    /// Re-initializes grid, rules, neighborhood and generation from a saved
    /// snapshot. History is cleared and the engine is stopped.
    pub fn restore(
        &mut self,
        generation: u64,
        rules: RuleSet,
        neighborhood: NeighborhoodKind,
        cells: &CellStates,
    ) {
        self.initialize(cells.width(), cells.height());
        self.grid.load_states(cells);
        self.rules = rules;
        self.neighborhood = neighborhood;
        self.generation = generation;
        tracing::info!(
            generation = generation,
            rules = %rules,
            neighborhood = %neighborhood,
            alive = self.grid.count_alive(),
            "Simulation restored"
        );
    }

    // --- stepping --------------------------------------------------------

    /// Advances one step in the current direction when running.
    /// Returns `None` when stopped or paused.
    pub fn update(&mut self) -> Option<StepOutcome> {
        if self.state != RunState::Running {
            return None;
        }
        Some(match self.direction {
            Direction::Forward => self.step_forward(),
            Direction::Backward => self.step_backward(),
        })
    }

    /// Records the current generation in history, then computes the next.
    pub fn step_forward(&mut self) -> StepOutcome {
        let started = Instant::now();
        self.save_current_state();

        let changed = evolve(
            &self.grid,
            &mut self.back_buffer,
            &self.rules,
            self.neighborhood,
        );
        std::mem::swap(&mut self.grid, &mut self.back_buffer);

        let alive = self.grid.count_alive();
        if !changed {
            self.stop();
            self.metrics.record_stable(self.generation, alive);
            return StepOutcome::Stable {
                generation: self.generation,
            };
        }

        self.generation += 1;
        self.metrics
            .record_forward(started.elapsed(), self.generation, alive);
        StepOutcome::Advanced {
            generation: self.generation,
        }
    }

    /// Restores the most recent history entry, if any.
    pub fn step_backward(&mut self) -> StepOutcome {
        let Some(entry) = self.history.pop() else {
            return StepOutcome::HistoryExhausted;
        };
        self.grid.load_states(&entry.cells);
        self.generation = entry.generation;
        self.metrics
            .record_backward(self.generation, self.grid.count_alive());
        StepOutcome::Rewound {
            generation: self.generation,
        }
    }

    fn save_current_state(&mut self) {
        self.history.push(self.generation, self.grid.to_states());
    }

    // --- configuration ---------------------------------------------------

    /// Replaces the rule; malformed strings select B3/S23.
    pub fn set_rules(&mut self, rules: &str) {
        self.rules = RuleSet::parse(rules);
    }

    pub fn set_rule_set(&mut self, rules: RuleSet) {
        self.rules = rules;
    }

    /// Canonical notation of the active rule.
    #[must_use]
    pub fn current_rules(&self) -> String {
        self.rules.notation()
    }

    #[must_use]
    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    /// Selects the neighborhood by name; unknown names select Moore.
    pub fn set_neighborhood_type(&mut self, name: &str) {
        self.neighborhood = NeighborhoodKind::from_name(name);
    }

    pub fn set_neighborhood(&mut self, neighborhood: NeighborhoodKind) {
        self.neighborhood = neighborhood;
    }

    #[must_use]
    pub fn current_neighborhood(&self) -> &'static str {
        self.neighborhood.name()
    }

    #[must_use]
    pub fn neighborhood(&self) -> NeighborhoodKind {
        self.neighborhood
    }

    // --- queries ---------------------------------------------------------

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Detached copy of the live cell states.
    #[must_use]
    pub fn snapshot(&self) -> CellStates {
        self.grid.to_states()
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn run_state(&self) -> RunState {
        self.state
    }

    /// True while started, including when paused.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state != RunState::Stopped
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.state == RunState::Paused
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn is_reverse_time(&self) -> bool {
        self.direction.is_reverse()
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    #[must_use]
    pub fn count_alive_cells(&self) -> usize {
        self.grid.count_alive()
    }

    #[must_use]
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.count()
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

/// Writes the generation after `front` into `back` and reports whether any
/// cell changed. `back` is only written, never read.
fn evolve(front: &Grid, back: &mut Grid, rules: &RuleSet, neighborhood: NeighborhoodKind) -> bool {
    debug_assert_eq!(
        (front.width(), front.height()),
        (back.width(), back.height())
    );
    let width = front.width();
    let current = front.as_slice();

    let next_row = |y: usize, row: &mut [bool]| -> bool {
        let mut changed = false;
        for (x, slot) in row.iter_mut().enumerate() {
            let alive = current[y * width + x];
            let neighbors = neighborhood.count_alive(front, x as i32, y as i32);
            let next = rules.next_state(alive, neighbors);
            changed |= next != alive;
            *slot = next;
        }
        changed
    };

    #[cfg(feature = "rayon")]
    if current.len() >= PARALLEL_THRESHOLD {
        use rayon::prelude::*;
        return back
            .as_mut_slice()
            .par_chunks_mut(width)
            .enumerate()
            .map(|(y, row)| next_row(y, row))
            .reduce(|| false, |a, b| a || b);
    }

    back.as_mut_slice()
        .chunks_mut(width)
        .enumerate()
        .fold(false, |changed, (y, row)| next_row(y, row) | changed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alive_set(engine: &SimulationEngine) -> Vec<(i32, i32)> {
        engine
            .grid()
            .cells()
            .filter(|c| c.alive)
            .map(|c| c.position())
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let engine = SimulationEngine::default();
        assert_eq!(engine.run_state(), RunState::Stopped);
        assert_eq!(engine.generation(), 0);
        assert!(!engine.can_go_back());
        assert_eq!(engine.current_rules(), "B3/S23");
        assert_eq!(engine.current_neighborhood(), "Moore");
        assert_eq!((engine.width(), engine.height()), (50, 50));
    }

    #[test]
    fn test_state_transitions() {
        let mut engine = SimulationEngine::new(5, 5);

        engine.pause();
        assert_eq!(engine.run_state(), RunState::Stopped, "pause needs a running engine");

        engine.start(false);
        assert_eq!(engine.run_state(), RunState::Running);
        assert!(!engine.is_reverse_time());

        engine.resume();
        assert_eq!(engine.run_state(), RunState::Running, "resume needs a paused engine");

        engine.pause();
        assert!(engine.is_running());
        assert!(engine.is_paused());

        engine.resume();
        assert_eq!(engine.run_state(), RunState::Running);

        engine.stop();
        assert!(!engine.is_running());
        assert!(!engine.is_paused());

        engine.start(true);
        assert!(engine.is_reverse_time());
    }

    #[test]
    fn test_update_is_noop_unless_running() {
        let mut engine = SimulationEngine::new(5, 5);
        engine.place_pattern(1, 2, &[[true, true, true]]);
        assert_eq!(engine.update(), None);

        engine.start(false);
        engine.pause();
        assert_eq!(engine.update(), None);
        assert_eq!(engine.generation(), 0);

        engine.resume();
        assert_eq!(engine.update(), Some(StepOutcome::Advanced { generation: 1 }));
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut engine = SimulationEngine::new(3, 3);
        engine.set_cell_state(1, 0, true);
        engine.set_cell_state(1, 1, true);
        engine.set_cell_state(1, 2, true);
        let vertical = alive_set(&engine);

        assert_eq!(engine.step_forward(), StepOutcome::Advanced { generation: 1 });
        assert_eq!(alive_set(&engine), vec![(0, 1), (1, 1), (2, 1)]);

        assert_eq!(engine.step_forward(), StepOutcome::Advanced { generation: 2 });
        assert_eq!(alive_set(&engine), vertical);
    }

    #[test]
    fn test_dead_grid_is_stable_and_stops() {
        let mut engine = SimulationEngine::new(4, 4);
        engine.start(false);
        assert_eq!(engine.update(), Some(StepOutcome::Stable { generation: 0 }));
        assert!(!engine.is_running());
        assert_eq!(engine.update(), None);
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.metrics().stable_events(), 1);
    }

    #[test]
    fn test_backward_restores_previous_generation() {
        let mut engine = SimulationEngine::new(5, 5);
        engine.set_cell_state(2, 1, true);
        engine.set_cell_state(2, 2, true);
        engine.set_cell_state(2, 3, true);
        let before = engine.snapshot();

        engine.step_forward();
        assert_ne!(engine.snapshot(), before);

        assert_eq!(engine.step_backward(), StepOutcome::Rewound { generation: 0 });
        assert_eq!(engine.snapshot(), before);
        assert_eq!(engine.step_backward(), StepOutcome::HistoryExhausted);
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_backward_update_uses_history() {
        let mut engine = SimulationEngine::new(5, 5);
        engine.place_pattern(1, 2, &[[true, true, true]]);
        engine.step_forward();
        engine.step_forward();
        engine.start(true);
        assert_eq!(engine.update(), Some(StepOutcome::Rewound { generation: 1 }));
        assert_eq!(engine.update(), Some(StepOutcome::Rewound { generation: 0 }));
        // The snapshot recorded by place_pattern.
        assert_eq!(engine.update(), Some(StepOutcome::Rewound { generation: 0 }));
        assert_eq!(engine.update(), Some(StepOutcome::HistoryExhausted));
        assert!(engine.is_running());
    }

    #[test]
    fn test_manual_edits_are_not_recorded() {
        let mut engine = SimulationEngine::new(5, 5);
        engine.set_cell_state(0, 0, true);
        engine.toggle_cell(1, 1);
        assert!(!engine.can_go_back());
        engine.set_cell_state(99, 99, true);
        assert_eq!(engine.count_alive_cells(), 2);
    }

    #[test]
    fn test_place_pattern_clips_and_records() {
        let mut engine = SimulationEngine::new(4, 4);
        engine.place_pattern(2, 2, &[vec![true, true, true], vec![true, false, true]]);
        assert!(engine.grid().get(2, 2));
        assert!(engine.grid().get(3, 2));
        assert!(engine.grid().get(2, 3));
        assert!(!engine.grid().get(3, 3));
        assert_eq!(engine.count_alive_cells(), 3);
        assert_eq!(engine.history_len(), 1);
    }

    #[test]
    fn test_place_pattern_writes_dead_cells() {
        let mut engine = SimulationEngine::new(3, 3);
        engine.set_cell_state(1, 1, true);
        engine.place_pattern(0, 0, &[[false; 3], [false; 3], [false; 3]]);
        assert_eq!(engine.count_alive_cells(), 0);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut engine = SimulationEngine::new(5, 5);
        engine.place_pattern(1, 2, &[[true, true, true]]);
        engine.step_forward();
        engine.start(false);
        engine.reset();
        assert!(!engine.is_running());
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.count_alive_cells(), 0);
        assert!(!engine.can_go_back());
    }

    #[test]
    fn test_randomize_is_seeded_and_recorded() {
        let mut a = SimulationEngine::new(20, 20);
        let mut b = SimulationEngine::new(20, 20);
        a.reseed(9);
        b.reseed(9);
        a.randomize(0.4);
        b.randomize(0.4);
        assert_eq!(a.snapshot(), b.snapshot());
        assert_eq!(a.generation(), 0);
        assert_eq!(a.history_len(), 1);
    }

    #[test]
    fn test_randomize_density_extremes() {
        let mut engine = SimulationEngine::new(10, 10);
        engine.randomize(1.0);
        assert_eq!(engine.count_alive_cells(), 100);
        engine.randomize(-3.0);
        assert_eq!(engine.count_alive_cells(), 0);
        engine.randomize(7.5);
        assert_eq!(engine.count_alive_cells(), 100);
        engine.randomize(f64::NAN);
        assert_eq!(engine.count_alive_cells(), 0);
    }

    #[test]
    fn test_rule_and_neighborhood_configuration() {
        let mut engine = SimulationEngine::new(5, 5);
        engine.set_rules("b36/s23");
        assert_eq!(engine.current_rules(), "B36/S23");
        engine.set_rules("not a rule");
        assert_eq!(engine.current_rules(), "B3/S23");

        engine.set_neighborhood_type("von neumann");
        assert_eq!(engine.current_neighborhood(), "VonNeumann");
        engine.set_neighborhood_type("something else");
        assert_eq!(engine.neighborhood(), NeighborhoodKind::Moore);
    }

    #[test]
    fn test_von_neumann_changes_outcome() {
        // Under von Neumann the blinker's center only has two orthogonal
        // neighbors and the end cells one, so B3/S23 keeps just the center.
        let mut engine = SimulationEngine::new(3, 3);
        engine.set_neighborhood(NeighborhoodKind::VonNeumann);
        engine.place_pattern(0, 1, &[[true, true, true]]);
        engine.step_forward();
        assert_eq!(alive_set(&engine), vec![(1, 1)]);
    }

    #[test]
    fn test_initialize_resizes_and_clears() {
        let mut engine = SimulationEngine::new(5, 5);
        engine.randomize(0.5);
        engine.start(true);
        engine.initialize(8, 3);
        assert_eq!((engine.width(), engine.height()), (8, 3));
        assert_eq!(engine.count_alive_cells(), 0);
        assert!(!engine.is_running());
        assert!(!engine.is_reverse_time());
        assert!(!engine.can_go_back());
        assert_eq!(engine.step_forward(), StepOutcome::Stable { generation: 0 });
    }

    #[test]
    fn test_restore_bypasses_history() {
        let mut engine = SimulationEngine::new(5, 5);
        engine.randomize(0.5);
        let cells = CellStates::from_rows(&[vec![true, false], vec![false, true]]).unwrap();
        engine.restore(42, RuleSet::parse("B36/S23"), NeighborhoodKind::VonNeumann, &cells);
        assert_eq!(engine.generation(), 42);
        assert_eq!(engine.snapshot(), cells);
        assert_eq!(engine.current_rules(), "B36/S23");
        assert_eq!(engine.neighborhood(), NeighborhoodKind::VonNeumann);
        assert!(!engine.can_go_back());
    }

    #[test]
    fn test_with_config() {
        let mut config = AppConfig::default();
        config.grid.width = 12;
        config.grid.height = 7;
        config.rules.rule = "B2/S".to_string();
        config.rules.neighborhood = NeighborhoodKind::VonNeumann;
        config.simulation.history_capacity = 4;
        config.simulation.seed = Some(1);

        let engine = SimulationEngine::with_config(&config);
        assert_eq!((engine.width(), engine.height()), (12, 7));
        assert_eq!(engine.current_rules(), "B2/S");
        assert_eq!(engine.neighborhood(), NeighborhoodKind::VonNeumann);
        assert_eq!(engine.history().capacity(), 4);
    }

    #[test]
    fn test_large_grid_matches_small_grid_semantics() {
        // Big enough to take the row-parallel path when it is compiled in.
        let mut engine = SimulationEngine::new(80, 80);
        engine.place_pattern(40, 40, &[[true, true, true]]);
        engine.step_forward();
        assert_eq!(alive_set(&engine), vec![(41, 39), (41, 40), (41, 41)]);
    }

    #[test]
    fn test_edit_counters_are_readable_through_metrics() {
        let mut engine = SimulationEngine::new(6, 6);
        engine.place_pattern(1, 1, &[[true, true]]);
        engine.randomize(0.5);
        engine.randomize(0.5);
        engine.reset();
        assert_eq!(engine.metrics().counter("pattern"), 1);
        assert_eq!(engine.metrics().counter("randomize"), 2);
        assert_eq!(engine.metrics().counter("reset"), 1);
    }
}
