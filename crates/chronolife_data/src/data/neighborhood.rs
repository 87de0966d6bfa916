use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape of the neighborhood used when counting live neighbors.
///
/// Serialized as its [`name`](Self::name). Deserialization goes through
/// [`from_name`](Self::from_name), so aliases are accepted and unknown names
/// select Moore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NeighborhoodKind {
    /// Eight surrounding cells.
    #[default]
    Moore,
    /// The four orthogonal cells.
    VonNeumann,
}

impl From<String> for NeighborhoodKind {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<NeighborhoodKind> for String {
    fn from(kind: NeighborhoodKind) -> Self {
        kind.name().to_string()
    }
}

impl NeighborhoodKind {
    pub const ALL: [NeighborhoodKind; 2] = [NeighborhoodKind::Moore, NeighborhoodKind::VonNeumann];

    /// Matches a user-supplied name. Case, whitespace, `-` and `_` are
    /// ignored; the Russian names of both neighborhoods are accepted too.
    #[must_use]
    pub fn try_from_name(name: &str) -> Option<Self> {
        let key: String = name
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect();

        match key.as_str() {
            "moore" | "мура" | "мур" => Some(Self::Moore),
            "vonneumann" | "neumann" | "фоннейман" => Some(Self::VonNeumann),
            _ => None,
        }
    }

    /// Like [`try_from_name`](Self::try_from_name) but unknown names select Moore.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::try_from_name(name).unwrap_or_default()
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Moore => "Moore",
            Self::VonNeumann => "VonNeumann",
        }
    }
}

impl fmt::Display for NeighborhoodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Direction of time the engine moves in while running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    #[must_use]
    pub const fn from_reverse(reverse: bool) -> Self {
        if reverse {
            Self::Backward
        } else {
            Self::Forward
        }
    }

    #[must_use]
    pub const fn is_reverse(&self) -> bool {
        matches!(self, Self::Backward)
    }
}
