//! Codec configuration.
//!
//! [`CodecConfig`] drives the blob codec. Values are layered by
//! [`ConfigLoader`], later layers winning:
//!
//! 1. [`CodecConfig::default`]
//! 2. a JSON file (fields may be omitted)
//! 3. environment variables
//! 4. programmatic overrides
//!
//! # Defaults
//!
//! | Field | Default | Environment |
//! |-------|---------|-------------|
//! | `source_symbols` | 10 | `RAPTOR_SOURCE_SYMBOLS` |
//! | `repair_symbols` | 4 | `RAPTOR_REPAIR_SYMBOLS` |
//! | `verify_digests` | true | `RAPTOR_VERIFY_DIGESTS` |

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::raptor::params::{MAX_K, MIN_K};

/// Environment variable overriding [`CodecConfig::source_symbols`].
pub const ENV_SOURCE_SYMBOLS: &str = "RAPTOR_SOURCE_SYMBOLS";
/// Environment variable overriding [`CodecConfig::repair_symbols`].
pub const ENV_REPAIR_SYMBOLS: &str = "RAPTOR_REPAIR_SYMBOLS";
/// Environment variable overriding [`CodecConfig::verify_digests`].
pub const ENV_VERIFY_DIGESTS: &str = "RAPTOR_VERIFY_DIGESTS";

/// Blob codec configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    /// Source symbols per blob (`k`).
    ///
    /// Default: 10
    pub source_symbols: usize,

    /// Repair symbols emitted after the source symbols.
    ///
    /// Default: 4
    pub repair_symbols: usize,

    /// Drop frames whose payload digest does not match.
    ///
    /// Default: true
    pub verify_digests: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            source_symbols: 10,
            repair_symbols: 4,
            verify_digests: true,
        }
    }
}

impl CodecConfig {
    /// Checks the values against the codec's limits.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `source_symbols` is outside
    /// `[4, 8192]` or the total symbol count exceeds the id space.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_K..=MAX_K).contains(&self.source_symbols) {
            return Err(ConfigError::Invalid {
                field: "source_symbols",
                reason: format!(
                    "{} outside [{MIN_K}, {MAX_K}]",
                    self.source_symbols
                ),
            });
        }
        let total = self.source_symbols.checked_add(self.repair_symbols);
        if total.map_or(true, |t| u32::try_from(t).is_err()) {
            return Err(ConfigError::Invalid {
                field: "repair_symbols",
                reason: format!("{} exceeds the symbol id space", self.repair_symbols),
            });
        }
        Ok(())
    }

    /// Total frames produced per blob.
    #[must_use]
    pub fn total_symbols(&self) -> usize {
        self.source_symbols.saturating_add(self.repair_symbols)
    }
}

/// Configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The configuration file is not valid JSON for [`CodecConfig`].
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },
    /// An environment variable holds an unparsable value.
    #[error("invalid value {value:?} for {var}")]
    Env {
        /// Variable name.
        var: &'static str,
        /// Raw value.
        value: String,
    },
    /// A value is out of range.
    #[error("invalid {field}: {reason}")]
    Invalid {
        /// Offending field.
        field: &'static str,
        /// Description of the violation.
        reason: String,
    },
}

/// Programmatic overrides, applied last.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Overrides [`CodecConfig::source_symbols`].
    pub source_symbols: Option<usize>,
    /// Overrides [`CodecConfig::repair_symbols`].
    pub repair_symbols: Option<usize>,
    /// Overrides [`CodecConfig::verify_digests`].
    pub verify_digests: Option<bool>,
}

/// Builds a [`CodecConfig`] from layered sources.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    file: Option<PathBuf>,
    use_env: bool,
    overrides: ConfigOverrides,
}

impl ConfigLoader {
    /// Loader with defaults only.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a JSON file on top of the defaults.
    #[must_use]
    pub fn file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Applies the `RAPTOR_*` environment variables.
    #[must_use]
    pub fn with_env(mut self) -> Self {
        self.use_env = true;
        self
    }

    /// Sets the number of source symbols.
    #[must_use]
    pub fn source_symbols(mut self, k: usize) -> Self {
        self.overrides.source_symbols = Some(k);
        self
    }

    /// Sets the number of repair symbols.
    #[must_use]
    pub fn repair_symbols(mut self, count: usize) -> Self {
        self.overrides.repair_symbols = Some(count);
        self
    }

    /// Enables or disables digest verification.
    #[must_use]
    pub fn verify_digests(mut self, verify: bool) -> Self {
        self.overrides.verify_digests = Some(verify);
        self
    }

    /// Loads and validates, reading the process environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if any layer fails to load or the result
    /// does not validate.
    pub fn load(&self) -> Result<CodecConfig, ConfigError> {
        self.load_with_env(|var| std::env::var(var).ok())
    }

    /// Loads and validates, resolving environment variables through `lookup`.
    ///
    /// # Errors
    ///
    /// As [`ConfigLoader::load`].
    pub fn load_with_env<F>(&self, lookup: F) -> Result<CodecConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match &self.file {
            Some(path) => read_file(path)?,
            None => CodecConfig::default(),
        };

        if self.use_env {
            if let Some(k) = env_value(&lookup, ENV_SOURCE_SYMBOLS, parse_usize)? {
                config.source_symbols = k;
            }
            if let Some(count) = env_value(&lookup, ENV_REPAIR_SYMBOLS, parse_usize)? {
                config.repair_symbols = count;
            }
            if let Some(verify) = env_value(&lookup, ENV_VERIFY_DIGESTS, parse_bool)? {
                config.verify_digests = verify;
            }
        }

        let o = self.overrides;
        if let Some(k) = o.source_symbols {
            config.source_symbols = k;
        }
        if let Some(count) = o.repair_symbols {
            config.repair_symbols = count;
        }
        if let Some(verify) = o.verify_digests {
            config.verify_digests = verify;
        }

        config.validate()?;
        Ok(config)
    }
}

fn read_file(path: &Path) -> Result<CodecConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn env_value<F, T>(
    lookup: &F,
    var: &'static str,
    parse: fn(&str) -> Option<T>,
) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(None),
        Some(value) => parse(value.trim())
            .map(Some)
            .ok_or(ConfigError::Env { var, value }),
    }
}

fn parse_usize(value: &str) -> Option<usize> {
    value.parse().ok()
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
