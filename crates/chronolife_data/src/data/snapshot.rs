use serde::{Deserialize, Serialize};

/// Character used for a live cell in plaintext rows.
pub const ALIVE_CHAR: char = 'O';
/// Character used for a dead cell in plaintext rows.
pub const DEAD_CHAR: char = '.';

/// Detached boolean picture of a grid, row-major.
///
/// This is what leaves the engine: history entries, save files and any
/// renderer all consume `CellStates` instead of borrowing the live grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCellStates")]
pub struct CellStates {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

/// Unchecked wire form of [`CellStates`].
#[derive(Deserialize)]
struct RawCellStates {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl TryFrom<RawCellStates> for CellStates {
    type Error = String;

    fn try_from(raw: RawCellStates) -> Result<Self, Self::Error> {
        let len = raw.cells.len();
        Self::from_vec(raw.width, raw.height, raw.cells).ok_or_else(|| {
            format!(
                "{} cells do not fill a {}x{} grid",
                len, raw.width, raw.height
            )
        })
    }
}

impl CellStates {
    /// All-dead snapshot. Zero dimensions are raised to one.
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

    /// Builds a snapshot from a flat row-major vector.
    /// Returns `None` when the length does not match `width * height`.
    #[must_use]
    pub fn from_vec(width: usize, height: usize, cells: Vec<bool>) -> Option<Self> {
        if width == 0 || height == 0 || cells.len() != width * height {
            return None;
        }
        Some(Self {
            width,
            height,
            cells,
        })
    }

    /// Builds a snapshot from rows indexed `[y][x]`.
    /// Returns `None` for empty input or ragged rows.
    #[must_use]
    pub fn from_rows(rows: &[Vec<bool>]) -> Option<Self> {
        let width = rows.first()?.len();
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }
        Self::from_vec(width, rows.len(), rows.concat())
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Out-of-range coordinates read as dead.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.cells[self.index(x, y)]
    }

    /// Out-of-range coordinates are ignored.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = alive;
        }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.cells
    }

    #[must_use]
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|alive| **alive).count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.width)
    }

    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.rows().map(<[bool]>::to_vec).collect()
    }

    /// One string per row, `O` for alive and `.` for dead.
    #[must_use]
    pub fn to_text_rows(&self) -> Vec<String> {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|alive| if *alive { ALIVE_CHAR } else { DEAD_CHAR })
                    .collect()
            })
            .collect()
    }
}

/// A past generation kept for backward stepping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub generation: u64,
    pub cells: CellStates,
}

impl HistoryEntry {
    #[must_use]
    pub fn new(generation: u64, cells: CellStates) -> Self {
        Self { generation, cells }
    }
}
