//! Configuration management for the todos service.
//!
//! Settings are read from a JSON file (`config.json`) stored next to the
//! service executable. A missing file is not an error: every section has a
//! default matching the local development setup, and sections missing from
//! the file fall back to those defaults individually.
//!
//! ## Configuration Structure
//!
//! - **Server**: listen host and port
//! - **Database**: optional explicit path to the SQLite file
//! - **CORS**: origins allowed to call the API from a browser
//!
//! ```rust,no_run
//! use todos::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("{}", config.server.address());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default file name of the SQLite database.
pub const DB_FILE_NAME: &str = "todos.db";

/// Origins of the local frontend dev servers and the API's own docs page.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = ["http://localhost:5174", "http://127.0.0.1:8000", "http://localhost:5173"];

/// Listen address of the HTTP server.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.address()
            .parse()
            .map_err(|_| msg_error_anyhow!(Message::InvalidServerAddress(self.address())))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

/// Location of the SQLite file.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Explicit database path. When absent the database lives next to the
    /// executable as [`DB_FILE_NAME`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl DatabaseConfig {
    pub fn resolve_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }
}

/// Cross-origin settings. Credentials are always allowed and every method
/// and header is accepted from the listed origins.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        CorsConfig {
            allowed_origins: DEFAULT_ALLOWED_ORIGINS.iter().map(|origin| origin.to_string()).collect(),
        }
    }
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
}

impl Config {
    /// Path of the configuration file next to the executable.
    pub fn default_path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    /// Reads the configuration next to the executable, or defaults if the
    /// file does not exist.
    pub fn read() -> Result<Config> {
        Self::read_from(&Self::default_path()?)
    }

    /// Reads the configuration at `path`, or defaults if the file does not
    /// exist. A file that exists but cannot be parsed is an error.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }
}
