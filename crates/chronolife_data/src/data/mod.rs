//! Core data structures for the Chronolife simulation.

pub mod cell;
pub mod neighborhood;
pub mod snapshot;
