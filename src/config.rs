use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub window: WindowConfig,
    pub browser: BrowserConfig,
    pub log: LogConfig,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

/// Initial window size
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct BrowserConfig {
    /// Directory shown at startup; the working directory when unset
    pub start_dir: Option<PathBuf>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive, e.g. "info" or "tansu=debug". RUST_LOG wins when set.
    pub level: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            mode: "dark".to_string(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 500.0,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            theme: ThemeConfig::default(),
            window: WindowConfig::default(),
            browser: BrowserConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "tansu")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default location, or defaults if there is none
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Config::default(),
        }
    }

    /// Load configuration from `path`. Problems are logged and fall back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Config::default();
        }
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(path = %path.display(), "Failed to parse config file: {}", e);
                    Config::default()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), "Failed to read config file: {}", e);
                Config::default()
            }
        }
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Directory to open first: the configured one if it is a directory,
    /// else the working directory, else home, else `/`.
    pub fn start_path(&self) -> PathBuf {
        if let Some(dir) = &self.browser.start_dir {
            if dir.is_dir() {
                return dir.canonicalize().unwrap_or_else(|_| dir.clone());
            }
            tracing::warn!(path = %dir.display(), "configured start_dir is not a directory");
        }
        env::current_dir()
            .ok()
            .or_else(|| directories::UserDirs::new().map(|ud| ud.home_dir().to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme.mode, "dark");
        assert_eq!(config.window.width, 800.0);
        assert_eq!(config.window.height, 500.0);
        assert_eq!(config.browser.start_dir, None);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.browser.start_dir = Some(PathBuf::from("/srv/files"));
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str("[theme]\nmode = \"light\"\n").unwrap();
        assert_eq!(config.theme.mode, "light");
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_load_from_missing_or_broken_file() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(Config::load_from(&tmp.path().join("none.toml")), Config::default());

        let broken = tmp.path().join("broken.toml");
        fs::write(&broken, "theme = [").unwrap();
        assert_eq!(Config::load_from(&broken), Config::default());
    }

    #[test]
    fn test_save_and_reload() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested/config.toml");
        let mut config = Config::default();
        config.log.level = "tansu=debug".to_string();

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path), config);
    }

    #[test]
    fn test_start_path_prefers_configured_dir() {
        let tmp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.browser.start_dir = Some(tmp.path().to_path_buf());
        assert_eq!(config.start_path(), tmp.path().canonicalize().unwrap());

        config.browser.start_dir = Some(tmp.path().join("missing"));
        assert_ne!(config.start_path(), tmp.path().join("missing"));
    }
}
