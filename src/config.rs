use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

pub const ENV_API_KEY: &str = "WEATHER_NOW_API_KEY";
pub const ENV_API_URL: &str = "WEATHER_NOW_API_URL";
pub const ENV_BACKGROUND: &str = "WEATHER_NOW_BACKGROUND";
pub const ENV_CONFIG: &str = "WEATHER_NOW_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine platform config directory")]
    NoConfigDir,

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(
        "No API key configured.\n\
         Hint: set WEATHER_NOW_API_KEY or add `api_key = \"...\"` to {0}"
    )]
    MissingApiKey(String),

    #[error("timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("Background image not found: {0}")]
    MissingBackground(PathBuf),
}

/// Settings resolved once at startup.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// units = "metric"
/// lang = "en"
/// timeout_secs = 10
/// background = "/home/me/Pictures/sky.jpg"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub api_url: String,
    pub units: String,
    pub lang: String,
    pub timeout_secs: u64,
    pub background: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            units: "metric".to_string(),
            lang: "en".to_string(),
            timeout_secs: 10,
            background: None,
        }
    }
}

impl Config {
    /// Load the config file (if any), apply environment overrides and validate.
    pub fn load() -> Result<Self, ConfigError> {
        let path = match env::var_os(ENV_CONFIG) {
            Some(path) => PathBuf::from(path),
            None => Self::config_file_path()?,
        };

        let mut config = Self::from_file(&path)?;
        config.apply_overrides(|key| env::var(key).ok());
        config.validate(&path)?;
        Ok(config)
    }

    /// Read a TOML config file. A missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply overrides from a variable lookup (the process environment in `load`).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(ENV_API_KEY).filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(url) = lookup(ENV_API_URL).filter(|u| !u.trim().is_empty()) {
            self.api_url = url;
        }
        if let Some(path) = lookup(ENV_BACKGROUND).filter(|p| !p.trim().is_empty()) {
            self.background = Some(PathBuf::from(path));
        }
    }

    pub fn validate(&self, source: &Path) -> Result<(), ConfigError> {
        if self.api_key().is_none() {
            return Err(ConfigError::MissingApiKey(source.display().to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if let Some(background) = &self.background {
            if !background.is_file() {
                return Err(ConfigError::MissingBackground(background.clone()));
            }
        }
        Ok(())
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn config_file_path() -> Result<PathBuf, ConfigError> {
        let dirs = ProjectDirs::from("dev", "weather-now", "weather-now")
            .ok_or(ConfigError::NoConfigDir)?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::from_file(&dir.path().join("config.toml")).unwrap();

        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.api_url, DEFAULT_API_URL);
        assert_eq!(cfg.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let file = write_config("api_key = \"KEY\"\nlang = \"de\"\n");
        let cfg = Config::from_file(file.path()).unwrap();

        assert_eq!(cfg.api_key(), Some("KEY"));
        assert_eq!(cfg.lang, "de");
        assert_eq!(cfg.units, "metric");
        assert_eq!(cfg.timeout_secs, 10);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let file = write_config("timeout_secs = \"soon\"");
        let err = Config::from_file(file.path()).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn environment_overrides_file_values() {
        let mut cfg = Config {
            api_key: Some("FILE_KEY".into()),
            ..Config::default()
        };
        let vars: HashMap<&str, &str> = [
            (ENV_API_KEY, "ENV_KEY"),
            (ENV_API_URL, "http://localhost:9000/weather"),
        ]
        .into_iter()
        .collect();

        cfg.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(cfg.api_key(), Some("ENV_KEY"));
        assert_eq!(cfg.api_url, "http://localhost:9000/weather");
        assert_eq!(cfg.background, None);
    }

    #[test]
    fn blank_override_is_ignored() {
        let mut cfg = Config {
            api_key: Some("FILE_KEY".into()),
            ..Config::default()
        };
        cfg.apply_overrides(|_| Some("   ".to_string()));

        assert_eq!(cfg.api_key(), Some("FILE_KEY"));
    }

    #[test]
    fn validate_requires_api_key() {
        let err = Config::default()
            .validate(Path::new("/etc/weather-now.toml"))
            .unwrap_err();

        assert!(matches!(err, ConfigError::MissingApiKey(_)));
        let msg = err.to_string();
        assert!(msg.contains(ENV_API_KEY));
        assert!(msg.contains("/etc/weather-now.toml"));
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let cfg = Config {
            api_key: Some("KEY".into()),
            timeout_secs: 0,
            ..Config::default()
        };

        assert!(matches!(
            cfg.validate(Path::new("config.toml")),
            Err(ConfigError::ZeroTimeout)
        ));
    }

    #[test]
    fn validate_reports_missing_background() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("AppBG.jpg");
        let cfg = Config {
            api_key: Some("KEY".into()),
            background: Some(missing.clone()),
            ..Config::default()
        };

        match cfg.validate(Path::new("config.toml")) {
            Err(ConfigError::MissingBackground(path)) => assert_eq!(path, missing),
            other => panic!("expected missing background, got {other:?}"),
        }
    }

    #[test]
    fn validate_accepts_existing_background() {
        let image = tempfile::NamedTempFile::new().unwrap();
        let cfg = Config {
            api_key: Some("KEY".into()),
            background: Some(image.path().to_path_buf()),
            ..Config::default()
        };

        assert!(cfg.validate(Path::new("config.toml")).is_ok());
    }
}
