//! # Chronolife IO
//!
//! I/O and persistence layer for the Chronolife simulation.
//!
//! This crate provides:
//! - Structured error handling with custom error types
//! - JSON helpers and the plaintext grid encoding
//! - Save files (plain or gzip) for a single engine
//! - A directory of named saves

/// Error types and result aliases for I/O operations
pub mod error;
/// Save file format and engine save/load
pub mod persistence;
/// Validated serialization helpers for JSON and plaintext grids
pub mod serialization;
/// Named saves inside a directory
pub mod storage;

pub use error::{IoError, Result};
pub use persistence::{load_engine, read_save, save_engine, write_save, SaveState};
pub use serialization::{
    decode_rows, encode_rows, from_json, read_json_file, to_json, to_json_pretty, write_json_file,
};
pub use storage::SaveDirectory;
