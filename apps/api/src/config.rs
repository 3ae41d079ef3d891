use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory holding uploads while they are being read.
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
    /// Extra given names for the entity tagger, one per line.
    pub given_names_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            port: var("PORT")
                .unwrap_or_else(|| DEFAULT_PORT.to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            upload_dir: var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR)),
            max_upload_bytes: match var("MAX_UPLOAD_BYTES") {
                Some(v) => v
                    .parse::<usize>()
                    .with_context(|| format!("MAX_UPLOAD_BYTES must be a byte count, got '{v}'"))?,
                None => DEFAULT_MAX_UPLOAD_BYTES,
            },
            given_names_path: var("GIVEN_NAMES_PATH")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

#[cfg(test)]
impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            upload_dir: std::env::temp_dir(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            given_names_path: None,
        }
    }
}
