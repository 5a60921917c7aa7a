use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration from kazi.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the task store
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme color overrides, e.g. `background = "#0C001B"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Find kazi.toml by walking up from the given directory
pub fn discover(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join("kazi.toml");
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Read and parse a config file
pub fn read(path: &Path) -> Result<Config, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Resolve the effective config: `--api-url` flag over `KAZI_API_URL`
/// over a discovered kazi.toml over built-in defaults.
pub fn load(api_url_flag: Option<&str>) -> Result<Config, ConfigError> {
    let mut config = match std::env::current_dir().ok().and_then(|d| discover(&d)) {
        Some(path) => read(&path)?,
        None => Config::default(),
    };
    if let Ok(url) = std::env::var("KAZI_API_URL") {
        config.api.base_url = url;
    }
    if let Some(url) = api_url_flag {
        config.api.base_url = url.to_string();
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_without_file() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn test_read_parses_api_and_ui_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kazi.toml");
        std::fs::write(
            &path,
            r##"[api]
base_url = "http://boards.internal:9000"

[ui.colors]
background = "#101010"
"##,
        )
        .unwrap();

        let config = read(&path).unwrap();
        assert_eq!(config.api.base_url, "http://boards.internal:9000");
        assert_eq!(
            config.ui.colors.get("background").map(String::as_str),
            Some("#101010")
        );
    }

    #[test]
    fn test_discover_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("kazi.toml"), "[api]\n").unwrap();
        let nested = dir.path().join("a/b/c");
        std::fs::create_dir_all(&nested).unwrap();

        let found = discover(&nested).unwrap();
        assert_eq!(found, dir.path().join("kazi.toml"));
    }

    #[test]
    fn test_discover_misses_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        // no kazi.toml anywhere up to / in a fresh temp dir is not
        // guaranteed, so probe a path that cannot contain one
        let nested = dir.path().join("x");
        std::fs::create_dir_all(&nested).unwrap();
        // only asserts it does not find one *inside* the temp tree
        if let Some(path) = discover(&nested) {
            assert!(!path.starts_with(dir.path()));
        }
    }

    #[test]
    fn test_read_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kazi.toml");
        std::fs::write(&path, "api = not toml").unwrap();
        assert!(matches!(read(&path), Err(ConfigError::Parse { .. })));
    }
}
