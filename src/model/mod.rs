pub use chronolife_core::{NeighborhoodLogic, RuleSet, SimulationEngine, StepOutcome};
pub mod config {
    pub use chronolife_core::config::*;
}
pub mod engine {
    pub use chronolife_core::engine::*;
}
pub mod grid {
    pub use chronolife_core::grid::*;
}
pub mod history {
    pub use chronolife_core::history::*;
}
pub mod metrics {
    pub use chronolife_core::metrics::*;
}
pub mod neighborhood {
    pub use chronolife_core::neighborhood::*;
}
pub mod patterns {
    pub use chronolife_core::patterns::*;
}
pub mod rules {
    pub use chronolife_core::rules::*;
}
pub mod shared {
    pub use chronolife_core::shared::*;
}

pub mod persistence {
    pub use chronolife_io::persistence::*;
}
pub mod storage {
    pub use chronolife_io::storage::*;
}
pub use chronolife_io::{IoError, SaveDirectory, SaveState};

pub mod state {
    pub use chronolife_data::*;
}
