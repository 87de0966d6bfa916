//! # Chronolife Data
//!
//! Plain, serializable data types shared by the simulation core, the
//! persistence layer and the command-line driver. Nothing in this crate
//! knows how a generation is computed; it only describes the values that
//! flow between the other crates.

pub mod data;

pub use data::cell::Cell;
pub use data::neighborhood::{Direction, NeighborhoodKind};
pub use data::snapshot::{CellStates, HistoryEntry, ALIVE_CHAR, DEAD_CHAR};
