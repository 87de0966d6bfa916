//! Save files for a single simulation.
//!
//! A save holds everything needed to resume a run: generation, grid, rule and
//! neighborhood. History is not saved; a restored engine starts with an
//! empty history. Paths ending in `.gz` are gzip-compressed.

use crate::error::{IoError, Result};
use crate::serialization::{
    decode_rows, encode_rows, from_json, read_json_file, to_json_pretty, write_json_file,
};
use chronolife_core::engine::SimulationEngine;
use chronolife_core::rules::RuleSet;
use chronolife_data::{CellStates, NeighborhoodKind};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Newest save format this build reads and the one it writes.
pub const SAVE_FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SaveState {
    pub version: u32,
    pub generation: u64,
    pub width: usize,
    pub height: usize,
    pub rules: RuleSet,
    pub neighborhood: String,
    /// One string per row, `O` alive and `.` dead.
    pub cells: Vec<String>,
    /// SHA-256 of the rows. Hand-written saves may omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    #[serde(default)]
    pub saved_at: String,
}

impl SaveState {
    #[must_use]
    pub fn capture(engine: &SimulationEngine) -> Self {
        let cells = encode_rows(&engine.snapshot());
        Self {
            version: SAVE_FORMAT_VERSION,
            generation: engine.generation(),
            width: engine.width(),
            height: engine.height(),
            rules: engine.rules(),
            neighborhood: engine.neighborhood().name().to_string(),
            checksum: Some(rows_checksum(&cells)),
            cells,
            saved_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Checks the save for internal consistency and decodes its grid.
    pub fn validate(&self) -> Result<(NeighborhoodKind, CellStates)> {
        if self.version > SAVE_FORMAT_VERSION {
            return Err(IoError::Version {
                found: self.version,
                supported: SAVE_FORMAT_VERSION,
            });
        }
        let neighborhood = NeighborhoodKind::try_from_name(&self.neighborhood).ok_or_else(|| {
            IoError::validation(format!("Unknown neighborhood '{}'", self.neighborhood))
        })?;
        let cells = decode_rows(&self.cells)?;
        if cells.width() != self.width || cells.height() != self.height {
            return Err(IoError::validation(format!(
                "Declared size {}x{} does not match grid {}x{}",
                self.width,
                self.height,
                cells.width(),
                cells.height()
            )));
        }
        if let Some(expected) = &self.checksum {
            if *expected != rows_checksum(&self.cells) {
                return Err(IoError::validation("Grid checksum mismatch"));
            }
        }
        Ok((neighborhood, cells))
    }

    /// Replaces the engine's grid, rule, neighborhood and generation with the
    /// saved ones. The engine is left stopped with an empty history. On error
    /// the engine is untouched.
    pub fn apply(self, engine: &mut SimulationEngine) -> Result<()> {
        let (neighborhood, cells) = self.validate()?;
        engine.restore(self.generation, self.rules, neighborhood, &cells);
        Ok(())
    }
}

fn rows_checksum(rows: &[String]) -> String {
    let mut hasher = Sha256::new();
    for row in rows {
        hasher.update(row.as_bytes());
        hasher.update(b"\n");
    }
    hex::encode(hasher.finalize())
}

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

/// Writes `state` to `path`, creating or truncating the file.
pub fn write_save(state: &SaveState, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if !is_gzip(path) {
        return write_json_file(state, path);
    }
    let json = to_json_pretty(state)?;
    File::create(path)
        .and_then(|file| {
            let mut encoder = GzEncoder::new(file, Compression::default());
            encoder.write_all(json.as_bytes())?;
            encoder.finish().map(|_| ())
        })
        .map_err(|e| IoError::FileSystem(e).with_context(format!("writing save {:?}", path)))
}

/// Reads a save without applying it.
pub fn read_save(path: impl AsRef<Path>) -> Result<SaveState> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(IoError::not_found(path.display().to_string()));
    }
    if !is_gzip(path) {
        return read_json_file(path);
    }
    let file = File::open(path)
        .map_err(|e| IoError::FileSystem(e).with_context(format!("opening {:?}", path)))?;
    let mut json = String::new();
    GzDecoder::new(file)
        .read_to_string(&mut json)
        .map_err(|e| IoError::compression(format!("{:?}: {}", path, e)))?;
    from_json(&json)
}

pub fn save_engine(engine: &SimulationEngine, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    write_save(&SaveState::capture(engine), path)?;
    tracing::info!(
        path = %path.display(),
        generation = engine.generation(),
        alive = engine.count_alive_cells(),
        "Simulation saved"
    );
    Ok(())
}

/// Loads a save into `engine`. Returns the generation that was restored.
pub fn load_engine(engine: &mut SimulationEngine, path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();
    let state = read_save(path)?;
    let generation = state.generation;
    state
        .apply(engine)
        .map_err(|e| e.with_context(format!("loading {:?}", path)))?;
    tracing::info!(
        path = %path.display(),
        generation = generation,
        "Simulation loaded"
    );
    Ok(generation)
}
