use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the entries store (one JSON document).
    pub store: String,
    /// Description applied to sessions started without `-m`.
    #[serde(default)]
    pub default_description: Option<String>,
    /// Decimal places for hour totals in `report`.
    #[serde(default = "default_hours_precision")]
    pub hours_precision: usize,
    /// Redraw interval of `status --watch`, in milliseconds.
    #[serde(default = "default_watch_interval_ms")]
    pub watch_interval_ms: u64,
}

fn default_hours_precision() -> usize {
    1
}

fn default_watch_interval_ms() -> u64 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: Self::store_file().to_string_lossy().to_string(),
            default_description: None,
            hours_precision: default_hours_precision(),
            watch_interval_ms: default_watch_interval_ms(),
        }
    }
}

impl Config {
    /// Path of the configured entries store.
    pub fn store_path(&self) -> PathBuf {
        PathBuf::from(&self.store)
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("timetrack")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".timetrack")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timetrack.conf")
    }

    /// Return the default path of the entries store
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("timetrack-entries.json")
    }

    /// Timer checkpoint slot, kept next to the entries store so a
    /// `--store` override isolates the whole state.
    pub fn timer_file_for(store: &str) -> PathBuf {
        Path::new(store).with_extension("timer.json")
    }

    /// Audit log slot, sibling of the entries store.
    pub fn audit_file_for(store: &str) -> PathBuf {
        Path::new(store).with_extension("log")
    }

    /// Load configuration from file. Missing or malformed files fall
    /// back to defaults; a malformed file additionally gets a warning.
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warning(format!(
                        "Malformed config file {} ({e}); using defaults.",
                        path.display()
                    ));
                    Self::default()
                }
            },
            Err(e) => {
                warning(format!(
                    "Cannot read config file {} ({e}); using defaults.",
                    path.display()
                ));
                Self::default()
            }
        }
    }

    /// Initialize configuration and store files
    pub fn init_all(custom_store: Option<String>, is_test: bool) -> std::io::Result<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Store path: user provided or default
        let store_path = if let Some(name) = custom_store {
            let p = Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::store_file()
        };

        let config = Config {
            store: store_path.to_string_lossy().to_string(),
            ..Self::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| std::io::Error::other(format!("config serialization: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        // Create an empty store slot if not exists
        if !store_path.exists() {
            if let Some(parent) = store_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&store_path, "[]")?;
        }

        Ok(store_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sibling_slots_follow_the_store_path() {
        let timer = Config::timer_file_for("/tmp/foo/entries.json");
        assert_eq!(timer, PathBuf::from("/tmp/foo/entries.timer.json"));
        let audit = Config::audit_file_for("/tmp/foo/entries.json");
        assert_eq!(audit, PathBuf::from("/tmp/foo/entries.log"));
    }

    #[test]
    fn defaults_are_sane() {
        let cfg = Config::default();
        assert_eq!(cfg.hours_precision, 1);
        assert_eq!(cfg.watch_interval_ms, 100);
        assert!(cfg.default_description.is_none());
    }
}
