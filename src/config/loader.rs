// src/config/loader.rs
//! Layered configuration loading
//!
//! Sources, lowest priority first:
//! 1. serde defaults
//! 2. TOML files, in the order given
//! 3. environment variables such as `EMD_DENOISE__EMD__SIFT_THRESHOLD`

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use tracing::debug;

use crate::config::constants::paths;
use crate::config::DenoiseConfig;
use crate::utils::validation::ValidationError;

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Configuration parse error: {0}")]
    Parse(String),

    #[error("Configuration validation errors: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    #[error("Configuration serialization error: {0}")]
    Serialize(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration source error: {0}")]
    Source(#[from] config::ConfigError),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; ")
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Configuration loader over files and the environment
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_paths: Vec<PathBuf>,
    env_prefix: Option<String>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Loader reading `emd-denoise.toml` from the working directory, if present,
    /// and `EMD_DENOISE__*` variables.
    pub fn new() -> Self {
        Self {
            config_paths: vec![PathBuf::from(paths::DEFAULT_CONFIG_FILE)],
            env_prefix: Some(paths::ENV_PREFIX.to_string()),
        }
    }

    /// Loader over custom paths. Later paths override earlier ones.
    pub fn with_paths(paths: Vec<PathBuf>) -> Self {
        Self {
            config_paths: paths,
            env_prefix: Some(paths::ENV_PREFIX.to_string()),
        }
    }

    /// Use a different environment prefix.
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    /// Ignore environment variables.
    pub fn without_env(mut self) -> Self {
        self.env_prefix = None;
        self
    }

    pub fn config_paths(&self) -> &[PathBuf] {
        &self.config_paths
    }

    /// Merge every source and validate the result. Missing files are skipped.
    pub fn load(&self) -> Result<DenoiseConfig, ConfigError> {
        let mut builder = Config::builder();

        for path in &self.config_paths {
            debug!(path = %path.display(), exists = path.exists(), "config source");
            builder = builder.add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        if let Some(prefix) = &self.env_prefix {
            builder = builder.add_source(
                Environment::with_prefix(prefix)
                    .prefix_separator(paths::ENV_SEPARATOR)
                    .separator(paths::ENV_SEPARATOR)
                    .try_parsing(true),
            );
        }

        let config: DenoiseConfig = builder.build()?.try_deserialize()?;
        config.validate().map_err(ConfigError::Validation)?;
        Ok(config)
    }

    /// Parse and validate a single TOML file, without environment overrides.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<DenoiseConfig, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(content: &str) -> Result<DenoiseConfig, ConfigError> {
        let config: DenoiseConfig = toml::from_str(content)?;
        config.validate().map_err(ConfigError::Validation)?;
        Ok(config)
    }

    /// Write `config` as TOML.
    pub fn export_config<P: AsRef<Path>>(config: &DenoiseConfig, path: P) -> Result<(), ConfigError> {
        std::fs::write(path, config.to_toml_string()?)?;
        Ok(())
    }
}
