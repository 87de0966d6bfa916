//! A directory of named saves.

use crate::error::{IoError, Result};
use crate::persistence::{load_engine, save_engine};
use chronolife_core::engine::SimulationEngine;
use std::path::{Path, PathBuf};

/// Extension appended to save names that do not already carry it.
pub const SAVE_EXTENSION: &str = "json";

#[derive(Debug, Clone)]
pub struct SaveDirectory {
    root: PathBuf,
}

impl SaveDirectory {
    /// Opens `root`, creating it if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|e| {
            IoError::FileSystem(e).with_context(format!("creating save directory {:?}", root))
        })?;
        Ok(Self { root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a save name to a path inside the directory.
    fn path_for(&self, name: &str) -> Result<PathBuf> {
        let name = name.trim();
        if name.is_empty() {
            return Err(IoError::validation("Save name cannot be empty"));
        }
        if name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(IoError::validation(format!(
                "Save name '{name}' must not contain a path"
            )));
        }
        let file_name = if Path::new(name)
            .extension()
            .is_some_and(|ext| ext == SAVE_EXTENSION)
        {
            name.to_string()
        } else {
            format!("{name}.{SAVE_EXTENSION}")
        };
        Ok(self.root.join(file_name))
    }

    pub fn save(&self, name: &str, engine: &SimulationEngine) -> Result<PathBuf> {
        let path = self.path_for(name)?;
        save_engine(engine, &path)?;
        Ok(path)
    }

    /// Loads the named save into `engine`, returning the restored generation.
    pub fn load(&self, name: &str, engine: &mut SimulationEngine) -> Result<u64> {
        load_engine(engine, self.path_for(name)?)
    }

    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        self.path_for(name).is_ok_and(|path| path.is_file())
    }

    /// Names of all saves, without extension, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(&self.root).map_err(|e| {
            IoError::FileSystem(e).with_context(format!("listing {:?}", self.root))
        })?;
        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == SAVE_EXTENSION) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Removes the named save. Returns `false` when there was nothing to remove.
    pub fn delete(&self, name: &str) -> Result<bool> {
        let path = self.path_for(name)?;
        if !path.is_file() {
            return Ok(false);
        }
        std::fs::remove_file(&path)?;
        tracing::info!(path = %path.display(), "Save deleted");
        Ok(true)
    }
}
