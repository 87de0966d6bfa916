//! Serialization utilities with robust error handling.
//!
//! JSON helpers shared by save files, plus the plaintext row encoding
//! (`O` alive, `.` dead) used to store grids in a readable form.

use crate::error::{IoError, Result};
use chronolife_data::{CellStates, ALIVE_CHAR, DEAD_CHAR};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializes data to JSON with error handling.
///
/// # Returns
/// JSON string on success, or `IoError::Serialization` on failure.
pub fn to_json<T>(data: &T) -> Result<String>
where
    T: Serialize,
{
    serde_json::to_string(data)
        .map_err(|e| IoError::serialization(format!("JSON serialization failed: {}", e)))
}

/// Serializes data to pretty-printed JSON.
pub fn to_json_pretty<T>(data: &T) -> Result<String>
where
    T: Serialize,
{
    serde_json::to_string_pretty(data)
        .map_err(|e| IoError::serialization(format!("JSON serialization failed: {}", e)))
}

/// Parses `json` into `T`. Blank input is a `Validation` error; malformed
/// or mismatched JSON surfaces as `IoError::Json`.
pub fn from_json<T>(json: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    if json.trim().is_empty() {
        return Err(IoError::validation("Empty JSON string"));
    }
    Ok(serde_json::from_str(json)?)
}

/// Encodes a grid as one string per row.
#[must_use]
pub fn encode_rows(cells: &CellStates) -> Vec<String> {
    cells.to_text_rows()
}

/// Decodes rows written by [`encode_rows`].
///
/// Rows must be non-empty, of equal length, and contain only `O` and `.`.
pub fn decode_rows<S: AsRef<str>>(rows: &[S]) -> Result<CellStates> {
    let mut decoded = Vec::with_capacity(rows.len());
    for (y, row) in rows.iter().enumerate() {
        let parsed = row
            .as_ref()
            .chars()
            .enumerate()
            .map(|(x, c)| match c {
                ALIVE_CHAR => Ok(true),
                DEAD_CHAR => Ok(false),
                other => Err(IoError::validation(format!(
                    "Unexpected character {other:?} at row {y}, column {x}"
                ))),
            })
            .collect::<Result<Vec<bool>>>()?;
        decoded.push(parsed);
    }
    CellStates::from_rows(&decoded)
        .ok_or_else(|| IoError::validation("Grid rows are empty or of unequal length"))
}

/// Writes `data` as pretty JSON, creating or truncating the file.
pub fn write_json_file<T, P>(data: &T, path: P) -> Result<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let json = to_json_pretty(data)?;
    std::fs::write(&path, json).map_err(|e| {
        IoError::FileSystem(e).with_context(format!("writing JSON to {:?}", path.as_ref()))
    })?;
    Ok(())
}

/// Reads and parses a JSON file.
pub fn read_json_file<T, P>(path: P) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let json = std::fs::read_to_string(&path).map_err(|e| {
        IoError::FileSystem(e).with_context(format!("reading JSON from {:?}", path.as_ref()))
    })?;
    from_json(&json)
}
