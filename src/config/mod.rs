mod file_config;

pub use file_config::{FileConfig, LoginConfig};

use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

use crate::auth::DEFAULT_LOGIN_EMAIL;
use crate::catalog::DEFAULT_PRODUCTS_URL;
use crate::kv_store::DEFAULT_STORE_FILE_NAME;

pub const DEFAULT_TIMEOUT_SEC: u64 = 30;

/// Where the favorites collection lives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StorageBackend {
    /// JSON file on disk.
    #[default]
    File,
    /// Process memory, lost on exit.
    Memory,
}

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub store_path: Option<PathBuf>,
    pub storage: StorageBackend,
    pub catalog_url: String,
    pub timeout_sec: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            store_path: None,
            storage: StorageBackend::File,
            catalog_url: DEFAULT_PRODUCTS_URL.to_string(),
            timeout_sec: DEFAULT_TIMEOUT_SEC,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSettings {
    pub email: String,
    /// None means the built-in default password.
    pub password_hash: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store_path: PathBuf,
    pub storage: StorageBackend,
    pub catalog_url: String,
    pub timeout_sec: u64,
    pub login: LoginSettings,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let store_path = file
            .store_path
            .map(PathBuf::from)
            .or_else(|| cli.store_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE_NAME));

        let storage = match file.storage {
            Some(name) => match parse_storage_backend(&name) {
                Some(storage) => storage,
                None => bail!("Unknown storage backend in config file: {}", name),
            },
            None => cli.storage,
        };

        let catalog_url = file.catalog_url.unwrap_or_else(|| cli.catalog_url.clone());
        if !(catalog_url.starts_with("http://") || catalog_url.starts_with("https://")) {
            bail!("catalog_url must be an http(s) URL, got {}", catalog_url);
        }

        let timeout_sec = file.timeout_sec.unwrap_or(cli.timeout_sec);
        if timeout_sec == 0 {
            bail!("timeout_sec must be greater than zero");
        }

        let login_file = file.login.unwrap_or_default();
        let login = match (login_file.email, login_file.password_hash) {
            (None, password_hash) => LoginSettings {
                email: DEFAULT_LOGIN_EMAIL.to_string(),
                password_hash,
            },
            (Some(email), Some(password_hash)) => LoginSettings {
                email,
                password_hash: Some(password_hash),
            },
            (Some(_), None) => {
                bail!("login.password_hash must be set when login.email is overridden")
            }
        };

        Ok(AppConfig {
            store_path,
            storage,
            catalog_url,
            timeout_sec,
            login,
        })
    }
}

/// Uses clap's ValueEnum trait for parsing.
fn parse_storage_backend(s: &str) -> Option<StorageBackend> {
    StorageBackend::from_str(s, true).ok()
}
