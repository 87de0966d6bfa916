//! # Chronolife Core
//!
//! Simulation engine for Life-like cellular automata that can run in both
//! directions of time.
//!
//! This crate contains:
//! - Birth/survival rules in `B/S` notation
//! - Moore and von Neumann neighborhoods on a bounded (non-wrapping) grid
//! - A bounded history of past generations for backward stepping
//! - The engine state machine and a thread-safe handle around it
//! - Built-in seed patterns, configuration, metrics and structured logging
//!
//! ## Example
//!
//! ```
//! use chronolife_core::engine::{SimulationEngine, StepOutcome};
//! use chronolife_core::patterns::BLINKER;
//!
//! let mut engine = SimulationEngine::new(5, 5);
//! engine.place_pattern(1, 1, &BLINKER.cells());
//!
//! engine.start(false);
//! assert_eq!(engine.update(), Some(StepOutcome::Advanced { generation: 1 }));
//!
//! engine.start(true);
//! assert_eq!(engine.update(), Some(StepOutcome::Rewound { generation: 0 }));
//! ```

/// Configuration management for simulation parameters
pub mod config;
/// Engine state machine with forward and backward stepping
pub mod engine;
/// Fixed-size cell grid
pub mod grid;
/// Bounded stack of past generations
pub mod history;
/// Performance metrics collection and logging
pub mod metrics;
/// Neighbor enumeration for each neighborhood shape
pub mod neighborhood;
/// Built-in seed patterns
pub mod patterns;
/// Birth/survival rule parsing and evaluation
pub mod rules;
/// Thread-safe engine handle
pub mod shared;

pub use config::AppConfig;
pub use engine::{RunState, SimulationEngine, StepOutcome};
pub use grid::Grid;
pub use history::HistoryStore;
pub use metrics::{init_logging, Metrics};
pub use neighborhood::NeighborhoodLogic;
pub use rules::RuleSet;
pub use shared::SharedEngine;
pub use chronolife_data::{Cell, CellStates, Direction, HistoryEntry, NeighborhoodKind};
