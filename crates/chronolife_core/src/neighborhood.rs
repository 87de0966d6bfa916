//! Neighbor enumeration for the two supported neighborhood shapes.
//!
//! Offsets are clipped against the grid: cells on an edge simply have fewer
//! neighbors. There is no toroidal wraparound.

use crate::grid::Grid;
use chronolife_data::{Cell, NeighborhoodKind};

const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const VON_NEUMANN_OFFSETS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Neighbor lookup for a neighborhood shape.
pub trait NeighborhoodLogic {
    /// Relative positions of the neighbors of a cell.
    fn offsets(&self) -> &'static [(i32, i32)];

    /// In-bounds neighbors of `(x, y)`.
    fn neighbors(&self, grid: &Grid, x: i32, y: i32) -> Vec<Cell> {
        self.offsets()
            .iter()
            .filter_map(|&(dx, dy)| grid.cell(x.saturating_add(dx), y.saturating_add(dy)))
            .collect()
    }

    /// Number of live in-bounds neighbors of `(x, y)`.
    fn count_alive(&self, grid: &Grid, x: i32, y: i32) -> u8 {
        self.offsets()
            .iter()
            .filter(|&&(dx, dy)| grid.get(x.saturating_add(dx), y.saturating_add(dy)))
            .count() as u8
    }

    fn max_neighbors(&self) -> usize {
        self.offsets().len()
    }
}

impl NeighborhoodLogic for NeighborhoodKind {
    fn offsets(&self) -> &'static [(i32, i32)] {
        match self {
            NeighborhoodKind::Moore => &MOORE_OFFSETS,
            NeighborhoodKind::VonNeumann => &VON_NEUMANN_OFFSETS,
        }
    }
}
