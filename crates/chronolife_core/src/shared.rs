//! Thread-safe handle around a [`SimulationEngine`].
//!
//! Every operation takes the lock for its whole duration, so a step, an edit
//! or a query never observes a half-updated grid.

use crate::engine::{SimulationEngine, StepOutcome};
use chronolife_data::CellStates;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone, Default)]
pub struct SharedEngine {
    inner: Arc<Mutex<SimulationEngine>>,
}

impl SharedEngine {
    #[must_use]
    pub fn new(engine: SimulationEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// A panic while the lock was held leaves the engine in a consistent
    /// state between operations, so a poisoned lock is simply reclaimed.
    fn lock(&self) -> MutexGuard<'_, SimulationEngine> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Runs `f` with exclusive access to the engine.
    pub fn with<R>(&self, f: impl FnOnce(&mut SimulationEngine) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn update(&self) -> Option<StepOutcome> {
        self.lock().update()
    }

    #[must_use]
    pub fn snapshot(&self) -> CellStates {
        self.lock().snapshot()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.lock().generation()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.lock().is_running()
    }
}

impl From<SimulationEngine> for SharedEngine {
    fn from(engine: SimulationEngine) -> Self {
        Self::new(engine)
    }
}

impl std::fmt::Debug for SharedEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SharedEngine").field(&*self.lock()).finish()
    }
}
