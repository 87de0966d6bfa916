//! Birth/survival rules in `B<digits>/S<digits>` notation.
//!
//! Parsing is total: a string that does not describe a valid rule resolves
//! to Conway's B3/S23 instead of failing, so a running engine always has a
//! usable rule.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Largest neighbor count a rule can mention.
pub const MAX_NEIGHBORS: u8 = 8;

/// Canonical notation of the fallback rule.
pub const DEFAULT_RULE: &str = "B3/S23";

/// Well-known Life-like rules, addressable by name from the CLI.
pub const NAMED_RULES: &[(&str, &str)] = &[
    ("Life", "B3/S23"),
    ("HighLife", "B36/S23"),
    ("Seeds", "B2/S"),
    ("DayAndNight", "B3678/S34678"),
    ("LifeWithoutDeath", "B3/S012345678"),
    ("Maze", "B3/S12345"),
];

/// Immutable birth and survival sets over neighbor counts `0..=8`.
///
/// Each set is a 9-bit mask: bit `k` is set when `k` live neighbors
/// trigger the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct RuleSet {
    birth: u16,
    survival: u16,
}

impl RuleSet {
    /// B3/S23.
    pub const CONWAY: RuleSet = RuleSet {
        birth: 1 << 3,
        survival: (1 << 2) | (1 << 3),
    };

    /// Parses a rule, falling back to [`RuleSet::CONWAY`] on any malformed input.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        Self::try_parse(input).unwrap_or_else(|| {
            tracing::debug!(rule = input, fallback = DEFAULT_RULE, "Unparseable rule string");
            Self::CONWAY
        })
    }

    /// Strict parse. `None` when the input is not `B<0-8>*/S<0-8>*` or when
    /// both sets come out empty.
    #[must_use]
    pub fn try_parse(input: &str) -> Option<Self> {
        let (birth_part, survival_part) = input.trim().split_once('/')?;
        let birth = Self::parse_counts(birth_part, 'b')?;
        let survival = Self::parse_counts(survival_part, 's')?;
        if birth == 0 && survival == 0 {
            return None;
        }
        Some(Self { birth, survival })
    }

    fn parse_counts(part: &str, prefix: char) -> Option<u16> {
        let mut chars = part.chars();
        if !chars.next()?.eq_ignore_ascii_case(&prefix) {
            return None;
        }
        chars.try_fold(0u16, |mask, c| match c.to_digit(10) {
            Some(d) if d <= u32::from(MAX_NEIGHBORS) => Some(mask | (1 << d)),
            _ => None,
        })
    }

    /// Builds a rule from explicit counts. Counts above 8 are dropped.
    #[must_use]
    pub fn from_counts(
        birth: impl IntoIterator<Item = u8>,
        survival: impl IntoIterator<Item = u8>,
    ) -> Self {
        let to_mask = |counts: &mut dyn Iterator<Item = u8>| {
            counts
                .filter(|k| *k <= MAX_NEIGHBORS)
                .fold(0u16, |mask, k| mask | (1 << k))
        };
        Self {
            birth: to_mask(&mut birth.into_iter()),
            survival: to_mask(&mut survival.into_iter()),
        }
    }

    /// Looks up one of [`NAMED_RULES`] case-insensitively.
    #[must_use]
    pub fn named(name: &str) -> Option<Self> {
        NAMED_RULES
            .iter()
            .find(|(rule_name, _)| rule_name.eq_ignore_ascii_case(name.trim()))
            .and_then(|(_, notation)| Self::try_parse(notation))
    }

    /// Should a dead cell with `neighbors` live neighbors be born?
    #[inline]
    #[must_use]
    pub fn evaluate_birth(&self, neighbors: u8) -> bool {
        neighbors <= MAX_NEIGHBORS && self.birth & (1 << neighbors) != 0
    }

    /// Should a live cell with `neighbors` live neighbors survive?
    #[inline]
    #[must_use]
    pub fn evaluate_survival(&self, neighbors: u8) -> bool {
        neighbors <= MAX_NEIGHBORS && self.survival & (1 << neighbors) != 0
    }

    /// State of a cell in the next generation.
    #[inline]
    #[must_use]
    pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        if alive {
            self.evaluate_survival(neighbors)
        } else {
            self.evaluate_birth(neighbors)
        }
    }

    pub fn birth_counts(&self) -> impl Iterator<Item = u8> {
        mask_counts(self.birth)
    }

    pub fn survival_counts(&self) -> impl Iterator<Item = u8> {
        mask_counts(self.survival)
    }

    /// Canonical notation with ascending digits, e.g. `"B3/S23"`.
    #[must_use]
    pub fn notation(&self) -> String {
        self.to_string()
    }
}

fn mask_counts(mask: u16) -> impl Iterator<Item = u8> {
    (0..=MAX_NEIGHBORS).filter(move |k| mask & (1 << k) != 0)
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::CONWAY
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("B")?;
        for k in self.birth_counts() {
            write!(f, "{k}")?;
        }
        f.write_str("/S")?;
        for k in self.survival_counts() {
            write!(f, "{k}")?;
        }
        Ok(())
    }
}

impl FromStr for RuleSet {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for RuleSet {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<RuleSet> for String {
    fn from(value: RuleSet) -> Self {
        value.notation()
    }
}
