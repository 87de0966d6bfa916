use serde::{Deserialize, Serialize};

/// A single grid cell as seen by callers.
///
/// Cells are values, not handles: the coordinates describe where the cell
/// was read from and are never used to write back into a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub alive: bool,
    pub x: i32,
    pub y: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(alive: bool, x: i32, y: i32) -> Self {
        Self { alive, x, y }
    }

    #[must_use]
    pub const fn dead(x: i32, y: i32) -> Self {
        Self::new(false, x, y)
    }

    #[must_use]
    pub const fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}
