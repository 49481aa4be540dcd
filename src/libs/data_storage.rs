use anyhow::Result;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolves files that live next to the deployed service binary
/// (`todos.db`, `config.json`).
#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    /// Uses the directory of the running executable, falling back to the
    /// working directory when it cannot be determined.
    pub fn new() -> Self {
        let base_path = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));

        Self { base_path }
    }

    pub fn at(base_path: impl Into<PathBuf>) -> Self {
        Self { base_path: base_path.into() }
    }

    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
