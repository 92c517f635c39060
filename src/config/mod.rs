use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct FileConfig {
    /// Tee set applied to every hole
    #[serde(default)]
    pub tee_set: Option<String>,
    /// Output JSON path (stdout when unset)
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub pretty: bool,
    /// Resolve holes on the rayon pool
    #[serde(default)]
    pub parallel: bool,
    #[serde(default)]
    pub verbose: bool,
}

impl FileConfig {
    /// Load the first parseable config file from the default search paths
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        warn!("Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }

    /// Load an explicitly named config file
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Config file not found: {:?}", path);
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents).context("Failed to parse config file")
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("coursegeo.toml"));
    paths.push(PathBuf::from(".coursegeo.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("coursegeo").join("config.toml"));
        paths.push(config_dir.join("coursegeo.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".coursegeo.toml"));
        paths.push(home.join(".config").join("coursegeo").join("config.toml"));
    }

    paths
}
