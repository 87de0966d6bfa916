//! Built-in seed patterns, written as plaintext rows (`O` alive, `.` dead).

use chronolife_data::ALIVE_CHAR;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternCategory {
    StillLife,
    Oscillator,
    Spaceship,
    Methuselah,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub category: PatternCategory,
    pub rows: &'static [&'static str],
}

impl Pattern {
    /// Rows of cell states indexed `[y][x]`, ready for
    /// [`SimulationEngine::place_pattern`](crate::engine::SimulationEngine::place_pattern).
    #[must_use]
    pub fn cells(&self) -> Vec<Vec<bool>> {
        self.rows
            .iter()
            .map(|row| row.chars().map(|c| c == ALIVE_CHAR).collect())
            .collect()
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.iter().map(|row| row.len()).max().unwrap_or(0)
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn population(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.chars().filter(|&c| c == ALIVE_CHAR).count())
            .sum()
    }
}

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    category: PatternCategory::StillLife,
    rows: &["OO", "OO"],
};

pub const BEEHIVE: Pattern = Pattern {
    name: "Beehive",
    category: PatternCategory::StillLife,
    rows: &[".OO.", "O..O", ".OO."],
};

pub const LOAF: Pattern = Pattern {
    name: "Loaf",
    category: PatternCategory::StillLife,
    rows: &[".OO.", "O..O", ".O.O", "..O."],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    category: PatternCategory::Oscillator,
    rows: &["...", "OOO", "..."],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    category: PatternCategory::Oscillator,
    rows: &["....", ".OOO", "OOO.", "...."],
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    category: PatternCategory::Oscillator,
    rows: &["OO..", "OO..", "..OO", "..OO"],
};

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    category: PatternCategory::Spaceship,
    rows: &[".O.", "..O", "OOO"],
};

pub const LIGHTWEIGHT_SPACESHIP: Pattern = Pattern {
    name: "LightweightSpaceship",
    category: PatternCategory::Spaceship,
    rows: &[".O..O", "O....", "O...O", "OOOO."],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "RPentomino",
    category: PatternCategory::Methuselah,
    rows: &[".OO", "OO.", ".O."],
};

/// Dies out after 130 generations under B3/S23.
pub const DIEHARD: Pattern = Pattern {
    name: "Diehard",
    category: PatternCategory::Methuselah,
    rows: &["......O.", "OO......", ".O...OOO"],
};

pub const PATTERNS: &[Pattern] = &[
    BLOCK,
    BEEHIVE,
    LOAF,
    BLINKER,
    TOAD,
    BEACON,
    GLIDER,
    LIGHTWEIGHT_SPACESHIP,
    R_PENTOMINO,
    DIEHARD,
];

/// Case-insensitive lookup; `-`, `_` and spaces in `name` are ignored.
#[must_use]
pub fn find_pattern(name: &str) -> Option<&'static Pattern> {
    let wanted: String = name
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect();
    PATTERNS
        .iter()
        .find(|pattern| pattern.name.to_lowercase() == wanted)
}
