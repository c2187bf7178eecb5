//! Application configuration.
//!
//! Values are resolved with priority: config.toml > environment (.env is
//! loaded first) > built-in defaults.

use serde::Deserialize;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

// ==================== Defaults ====================

pub const DEFAULT_DATABASE_PATH: &str = "data/word_drill.db";

/// Server address to bind to
pub const SERVER_ADDR: &str = "0.0.0.0";

/// Server port
pub const SERVER_PORT: u16 = 3000;

/// Words served when the request does not say how many
pub const DEFAULT_WORD_COUNT: NonZeroUsize = NonZeroUsize::new(10).unwrap();

// ==================== config.toml ====================

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    database: Option<DatabaseConfig>,
    server: Option<ServerConfig>,
    catalog: Option<CatalogConfig>,
    words: Option<WordsConfig>,
}

#[derive(Debug, Deserialize)]
struct DatabaseConfig {
    path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ServerConfig {
    addr: Option<String>,
    port: Option<u16>,
}

#[derive(Debug, Deserialize)]
struct CatalogConfig {
    seed_path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WordsConfig {
    default_count: Option<NonZeroUsize>,
}

/// Resolved settings
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_path: PathBuf,
    pub server_addr: String,
    pub server_port: u16,
    /// JSON word list imported when the words table is empty
    pub catalog_seed_path: Option<PathBuf>,
    pub default_word_count: NonZeroUsize,
}

impl Config {
    /// Load from `config.toml` in the working directory plus the environment
    pub fn load() -> Self {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let file = match std::fs::read_to_string("config.toml") {
            Ok(contents) => parse_file_config(&contents),
            Err(_) => FileConfig::default(),
        };
        Self::resolve(file, |key| std::env::var(key).ok())
    }

    fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let database_path = file
            .database
            .and_then(|db| db.path)
            .or_else(|| env("DATABASE_PATH"))
            .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string());

        let (file_addr, file_port) = file
            .server
            .map(|server| (server.addr, server.port))
            .unwrap_or_default();
        let server_port = file_port
            .or_else(|| env("PORT").and_then(|port| port.parse().ok()))
            .unwrap_or(SERVER_PORT);

        let catalog_seed_path = file
            .catalog
            .and_then(|catalog| catalog.seed_path)
            .or_else(|| env("CATALOG_SEED_PATH"))
            .map(PathBuf::from);

        let default_word_count = file
            .words
            .and_then(|words| words.default_count)
            .unwrap_or(DEFAULT_WORD_COUNT);

        tracing::info!("Using database {}", database_path);

        Self {
            database_path: PathBuf::from(database_path),
            server_addr: file_addr.unwrap_or_else(|| SERVER_ADDR.to_string()),
            server_port,
            catalog_seed_path,
            default_word_count,
        }
    }

    /// Get the full server bind address
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server_addr, self.server_port)
    }

    pub fn database_path(&self) -> &Path {
        &self.database_path
    }
}

fn parse_file_config(contents: &str) -> FileConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!("Ignoring unreadable config.toml: {}", e);
        FileConfig::default()
    })
}
