//! Fixed-size boolean cell grid.
//!
//! Every accessor is bounds-checked. Reads outside the grid return a dead
//! cell and writes outside the grid are ignored; the grid never wraps.

use chronolife_data::{Cell, CellStates};

/// Row-major `width × height` grid of cell states.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates an all-dead grid. Zero dimensions are raised to one.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Creates a grid holding a copy of `states`.
    #[must_use]
    pub fn from_states(states: &CellStates) -> Self {
        Self {
            width: states.width(),
            height: states.height(),
            cells: states.as_slice().to_vec(),
        }
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    fn checked_index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(self.index(x as usize, y as usize))
        } else {
            None
        }
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Whether the cell at `(x, y)` is alive. Out of bounds reads as dead.
    #[inline]
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.checked_index(x, y).is_some_and(|idx| self.cells[idx])
    }

    /// Sets the cell at `(x, y)`. Out-of-bounds writes are no-ops.
    pub fn set(&mut self, x: i32, y: i32, alive: bool) {
        if let Some(idx) = self.checked_index(x, y) {
            self.cells[idx] = alive;
        }
    }

    /// Flips the cell at `(x, y)` and returns its new state, or `None` when
    /// the coordinates are outside the grid.
    pub fn toggle(&mut self, x: i32, y: i32) -> Option<bool> {
        let idx = self.checked_index(x, y)?;
        self.cells[idx] = !self.cells[idx];
        Some(self.cells[idx])
    }

    #[must_use]
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        self.checked_index(x, y)
            .map(|idx| Cell::new(self.cells[idx], x, y))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().enumerate().map(move |(idx, alive)| {
            Cell::new(*alive, (idx % self.width) as i32, (idx / self.width) as i32)
        })
    }

    #[must_use]
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|alive| **alive).count()
    }

    /// Kills every cell.
    pub fn reset(&mut self) {
        self.cells.fill(false);
    }

    /// Makes `self` an exact copy of `other`, reusing the allocation when
    /// the dimensions already match.
    pub fn copy_from(&mut self, other: &Grid) {
        if self.width == other.width && self.height == other.height {
            self.cells.copy_from_slice(&other.cells);
        } else {
            self.clone_from(other);
        }
    }

    /// Overwrites the grid with `states`, clipped to this grid's bounds.
    /// Cells outside the overlap are left untouched.
    pub fn load_states(&mut self, states: &CellStates) {
        if states.width() == self.width && states.height() == self.height {
            self.cells.copy_from_slice(states.as_slice());
            return;
        }
        for y in 0..self.height.min(states.height()) {
            for x in 0..self.width.min(states.width()) {
                let idx = self.index(x, y);
                self.cells[idx] = states.get(x, y);
            }
        }
    }

    #[must_use]
    pub fn to_states(&self) -> CellStates {
        CellStates::from_vec(self.width, self.height, self.cells.clone())
            .unwrap_or_else(|| CellStates::new(self.width, self.height))
    }

    pub(crate) fn as_slice(&self) -> &[bool] {
        &self.cells
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [bool] {
        &mut self.cells
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_GRID_SIZE, crate::config::DEFAULT_GRID_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_zero_dimensions_are_clamped() {
        let grid = Grid::new(0, 0);
        assert_eq!((grid.width(), grid.height()), (1, 1));
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(5, 5);
        grid.set(2, 3, true);
        assert!(grid.get(2, 3));
        assert!(!grid.get(3, 2));
        assert_eq!(grid.count_alive(), 1);
        grid.set(2, 3, false);
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut grid = Grid::new(3, 3);
        for (x, y) in [(-1, 0), (0, -1), (3, 0), (0, 3), (i32::MAX, i32::MIN)] {
            grid.set(x, y, true);
            assert!(!grid.get(x, y));
            assert!(grid.cell(x, y).is_none());
            assert!(grid.toggle(x, y).is_none());
        }
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_toggle() {
        let mut grid = Grid::new(2, 2);
        assert_eq!(grid.toggle(1, 1), Some(true));
        assert_eq!(grid.toggle(1, 1), Some(false));
    }

    #[test]
    fn test_cells_carry_their_coordinates() {
        let mut grid = Grid::new(3, 2);
        grid.set(2, 1, true);
        for cell in grid.cells() {
            assert_eq!(grid.cell(cell.x, cell.y), Some(cell));
        }
        assert_eq!(grid.cells().count(), 6);
        assert_eq!(grid.cells().filter(|c| c.alive).collect::<Vec<_>>(), vec![Cell::new(true, 2, 1)]);
    }

    #[test]
    fn test_reset_kills_everything() {
        let mut grid = Grid::new(3, 3);
        grid.set(0, 0, true);
        grid.set(2, 2, true);
        grid.reset();
        assert_eq!(grid.count_alive(), 0);
    }

    #[test]
    fn test_clone_is_deep() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, true);
        let copy = grid.clone();
        grid.set(1, 1, false);
        assert!(copy.get(1, 1));
        assert_eq!(copy.cell(1, 1), Some(Cell::new(true, 1, 1)));
    }

    #[test]
    fn test_states_roundtrip() {
        let mut grid = Grid::new(4, 2);
        grid.set(3, 1, true);
        let states = grid.to_states();
        assert!(states.get(3, 1));
        assert_eq!(Grid::from_states(&states), grid);
    }

    #[test]
    fn test_load_states_clips_to_bounds() {
        let mut big = CellStates::new(5, 5);
        big.set(0, 0, true);
        big.set(4, 4, true);
        let mut grid = Grid::new(3, 3);
        grid.load_states(&big);
        assert!(grid.get(0, 0));
        assert_eq!(grid.count_alive(), 1);
    }

    #[test]
    fn test_copy_from_resizes() {
        let mut source = Grid::new(4, 4);
        source.set(3, 3, true);
        let mut target = Grid::new(2, 2);
        target.copy_from(&source);
        assert_eq!(target, source);
    }
}
