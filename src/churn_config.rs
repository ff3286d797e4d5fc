use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::churn_engine::AnnounceBounds;
use crate::shared::{ChurnError, ConfigError};

/// Bounds that shape the churn. Key names match the configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ChurnConfig {
    /// Prefix list, relative to the configuration file unless absolute
    pub prefixes_file: PathBuf,

    /// Size of the AS path pool built at startup
    pub num_different_as_paths: usize,

    pub min_as_length: usize,
    pub max_as_length: usize,

    /// Prefixes announced in the warmup cycle
    pub initial_warmup: usize,

    /// Seconds to wait after the warmup cycle
    pub initial_wait: f64,

    pub min_prefixes: usize,
    pub max_prefixes: usize,

    /// Upper bound on the number of live prefixes
    pub max_total: usize,

    /// Percentage of live prefixes withdrawn per cycle
    pub remove_prefixes: f64,

    /// Seconds between steady cycles
    pub waiting_time: f64,

    pub next_hop: String,
}

impl ChurnConfig {
    /// Reads and validates a configuration file. `.json` files are parsed as
    /// JSON, `.yml`/`.yaml` or extensionless files as YAML.
    pub fn load(path: &Path) -> Result<Self, ChurnError> {
        let text = fs::read_to_string(path).map_err(|source| ChurnError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let parse_err = |message: String| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        };
        let config: ChurnConfig = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&text).map_err(|e| parse_err(e.to_string()))?,
            Some("yml") | Some("yaml") | None => {
                serde_yaml::from_str(&text).map_err(|e| parse_err(e.to_string()))?
            }
            Some(_) => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                }
                .into())
            }
        };

        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let config: ChurnConfig = serde_yaml::from_str(text).map_err(|e| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_different_as_paths == 0 {
            return Err(ConfigError::EmptyPathPool);
        }
        if self.min_as_length > self.max_as_length {
            return Err(ConfigError::InvertedBounds {
                what: "MIN_AS_LENGTH/MAX_AS_LENGTH",
                min: self.min_as_length,
                max: self.max_as_length,
            });
        }
        if self.min_prefixes > self.max_prefixes {
            return Err(ConfigError::InvertedBounds {
                what: "MIN_PREFIXES/MAX_PREFIXES",
                min: self.min_prefixes,
                max: self.max_prefixes,
            });
        }
        if !(0.0..=100.0).contains(&self.remove_prefixes) {
            return Err(ConfigError::OutOfRange {
                key: "REMOVE_PREFIXES",
                value: self.remove_prefixes,
            });
        }
        self.initial_wait_duration()?;
        self.waiting_time_duration()?;
        Ok(())
    }

    pub fn resolve_prefixes_file(&self, config_path: &Path) -> PathBuf {
        if self.prefixes_file.is_absolute() {
            return self.prefixes_file.clone();
        }
        match config_path.parent() {
            Some(dir) => dir.join(&self.prefixes_file),
            None => self.prefixes_file.clone(),
        }
    }

    pub fn warmup_bounds(&self) -> AnnounceBounds {
        AnnounceBounds::exactly(self.initial_warmup, self.max_total)
    }

    pub fn steady_bounds(&self) -> Result<AnnounceBounds, ConfigError> {
        AnnounceBounds::new(self.min_prefixes, self.max_prefixes, self.max_total)
    }

    pub fn initial_wait_duration(&self) -> Result<Duration, ConfigError> {
        seconds("INITIAL_WAIT", self.initial_wait)
    }

    pub fn waiting_time_duration(&self) -> Result<Duration, ConfigError> {
        seconds("WAITING_TIME", self.waiting_time)
    }
}

// Negative, NaN and values beyond `Duration::MAX` are all out of range.
fn seconds(key: &'static str, value: f64) -> Result<Duration, ConfigError> {
    Duration::try_from_secs_f64(value).map_err(|_| ConfigError::OutOfRange { key, value })
}
