//! Step metrics and logging setup for the simulation.
//!
//! Provides structured logging and counters for monitoring how the engine
//! moves through time.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// How often (in forward steps) a summary line is logged.
const SUMMARY_INTERVAL: u64 = 100;

/// Counters describing what the engine has done since it was created.
pub struct Metrics {
    forward_steps: AtomicU64,
    backward_steps: AtomicU64,
    stable_events: AtomicU64,
    alive_cells: AtomicU64,
    step_time_us: AtomicU64,
    counters: Mutex<HashMap<String, AtomicU64>>,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metrics")
            .field("forward_steps", &self.forward_steps())
            .field("backward_steps", &self.backward_steps())
            .field("stable_events", &self.stable_events())
            .field("alive_cells", &self.alive_cells())
            .finish_non_exhaustive()
    }
}

impl Metrics {
    /// Creates a new metrics collector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            forward_steps: AtomicU64::new(0),
            backward_steps: AtomicU64::new(0),
            stable_events: AtomicU64::new(0),
            alive_cells: AtomicU64::new(0),
            step_time_us: AtomicU64::new(0),
            counters: Mutex::new(HashMap::new()),
            start_time: Instant::now(),
        }
    }

    /// Records a completed forward step with its duration.
    pub fn record_forward(&self, duration: Duration, generation: u64, alive: usize) {
        let steps = self.forward_steps.fetch_add(1, Ordering::Relaxed) + 1;
        self.alive_cells.store(alive as u64, Ordering::Relaxed);
        self.step_time_us
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);

        if steps % SUMMARY_INTERVAL == 0 {
            tracing::info!(
                steps = steps,
                generation = generation,
                alive = alive,
                avg_step_us = self.average_step_time().as_micros() as u64,
                "Simulation progress"
            );
        }
    }

    /// Records a generation restored from history.
    pub fn record_backward(&self, generation: u64, alive: usize) {
        self.backward_steps.fetch_add(1, Ordering::Relaxed);
        self.alive_cells.store(alive as u64, Ordering::Relaxed);
        tracing::trace!(generation = generation, alive = alive, "Generation restored");
    }

    /// Records that a forward step found no changed cell.
    pub fn record_stable(&self, generation: u64, alive: usize) {
        self.stable_events.fetch_add(1, Ordering::Relaxed);
        self.alive_cells.store(alive as u64, Ordering::Relaxed);
        tracing::info!(generation = generation, alive = alive, "Stable configuration reached");
    }

    /// Increments a named counter.
    pub fn increment_counter(&self, name: &str) {
        let mut counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .entry(name.to_string())
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Current value of a named counter, zero if it was never incremented.
    #[must_use]
    pub fn counter(&self, name: &str) -> u64 {
        let counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .get(name)
            .map_or(0, |value| value.load(Ordering::Relaxed))
    }

    #[must_use]
    pub fn forward_steps(&self) -> u64 {
        self.forward_steps.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn backward_steps(&self) -> u64 {
        self.backward_steps.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn stable_events(&self) -> u64 {
        self.stable_events.load(Ordering::Relaxed)
    }

    /// Alive cells after the most recent step.
    #[must_use]
    pub fn alive_cells(&self) -> u64 {
        self.alive_cells.load(Ordering::Relaxed)
    }

    /// Mean wall time of a forward step.
    #[must_use]
    pub fn average_step_time(&self) -> Duration {
        let steps = self.forward_steps();
        if steps == 0 {
            return Duration::ZERO;
        }
        Duration::from_micros(self.step_time_us.load(Ordering::Relaxed) / steps)
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging.
///
/// `RUST_LOG` takes precedence over `level`. Calling this more than once is
/// harmless; only the first subscriber is installed.
pub fn init_logging(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .finish(),
    )
    .ok();
}
