use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Core settings (can override CLI)
    pub store_path: Option<String>,
    pub storage: Option<String>,
    pub catalog_url: Option<String>,
    pub timeout_sec: Option<u64>,

    pub login: Option<LoginConfig>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct LoginConfig {
    pub email: Option<String>,
    /// Argon2 PHC string, as printed by `cli-auth hash`.
    pub password_hash: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
