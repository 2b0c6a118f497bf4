// src/config/mod.rs
//! Configuration for the denoising pipeline
//!
//! Every knob has a serde default so partial TOML files and environment
//! overrides only need to name what they change.

pub mod constants;
pub mod loader;

pub use constants::*;
pub use loader::{ConfigError, ConfigLoader};

use serde::{Deserialize, Serialize};

use crate::utils::validation::{validate_range, ValidationError};

/// Complete pipeline configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DenoiseConfig {
    #[serde(default)]
    pub emd: EmdConfig,

    #[serde(default)]
    pub spectrum: SpectrumConfig,

    /// Map the output back to the input's mean and scale.
    #[serde(default = "defaults::restore_scale")]
    pub restore_scale: bool,
}

/// Sifting and stopping parameters for the mode decomposer
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EmdConfig {
    #[serde(default = "defaults::sift_threshold")]
    pub sift_threshold: f64,

    #[serde(default = "defaults::max_sift_iterations")]
    pub max_sift_iterations: usize,

    /// `None` caps the mode count at `floor(log2(len))`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_imfs: Option<usize>,

    #[serde(default = "defaults::range_threshold")]
    pub range_threshold: f64,

    #[serde(default = "defaults::energy_threshold")]
    pub energy_threshold: f64,

    #[serde(default = "defaults::mirror_extrema")]
    pub mirror_extrema: usize,
}

/// Band and scale of the frequency conversion
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SpectrumConfig {
    #[serde(default = "defaults::min_freq_hz")]
    pub min_freq_hz: f64,

    #[serde(default = "defaults::max_freq_hz")]
    pub max_freq_hz: f64,

    #[serde(default = "defaults::in_db")]
    pub in_db: bool,
}

/// Default value providers using constants
mod defaults {
    use crate::config::constants::*;

    pub fn restore_scale() -> bool { false }

    pub fn sift_threshold() -> f64 { emd::DEFAULT_SIFT_THRESHOLD }
    pub fn max_sift_iterations() -> usize { emd::DEFAULT_MAX_SIFT_ITERATIONS }
    pub fn range_threshold() -> f64 { emd::DEFAULT_RANGE_THRESHOLD }
    pub fn energy_threshold() -> f64 { emd::DEFAULT_ENERGY_THRESHOLD }
    pub fn mirror_extrema() -> usize { emd::DEFAULT_MIRROR_EXTREMA }

    pub fn min_freq_hz() -> f64 { spectrum::DEFAULT_MIN_FREQ_HZ }
    pub fn max_freq_hz() -> f64 { spectrum::DEFAULT_MAX_FREQ_HZ }
    pub fn in_db() -> bool { false }
}

impl Default for DenoiseConfig {
    fn default() -> Self {
        Self {
            emd: EmdConfig::default(),
            spectrum: SpectrumConfig::default(),
            restore_scale: defaults::restore_scale(),
        }
    }
}

impl Default for EmdConfig {
    fn default() -> Self {
        Self {
            sift_threshold: defaults::sift_threshold(),
            max_sift_iterations: defaults::max_sift_iterations(),
            max_imfs: None,
            range_threshold: defaults::range_threshold(),
            energy_threshold: defaults::energy_threshold(),
            mirror_extrema: defaults::mirror_extrema(),
        }
    }
}

impl Default for SpectrumConfig {
    fn default() -> Self {
        Self {
            min_freq_hz: defaults::min_freq_hz(),
            max_freq_hz: defaults::max_freq_hz(),
            in_db: defaults::in_db(),
        }
    }
}

impl DenoiseConfig {
    /// Validate every section, collecting all violations.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        if let Err(mut e) = self.emd.validate() {
            errors.append(&mut e);
        }
        if let Err(mut e) = self.spectrum.validate() {
            errors.append(&mut e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Serialize to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}

impl EmdConfig {
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if !(self.sift_threshold > 0.0 && self.sift_threshold.is_finite()) {
            errors.push(ValidationError::OutOfRange {
                field: "emd.sift_threshold".to_string(),
                value: self.sift_threshold.to_string(),
                min: "0 (exclusive)".to_string(),
                max: "inf".to_string(),
            });
        }
        if let Err(e) = validate_range(
            self.max_sift_iterations,
            1,
            emd::MAX_SIFT_ITERATIONS_LIMIT,
            "emd.max_sift_iterations",
        ) {
            errors.push(e);
        }
        if let Some(max_imfs) = self.max_imfs {
            if max_imfs == 0 {
                errors.push(ValidationError::OutOfRange {
                    field: "emd.max_imfs".to_string(),
                    value: max_imfs.to_string(),
                    min: "1".to_string(),
                    max: "unbounded".to_string(),
                });
            }
        }
        if let Err(e) = validate_range(self.range_threshold, 0.0, 1.0, "emd.range_threshold") {
            errors.push(e);
        }
        if let Err(e) = validate_range(self.energy_threshold, 0.0, 1.0, "emd.energy_threshold") {
            errors.push(e);
        }
        if let Err(e) = validate_range(
            self.mirror_extrema,
            1,
            emd::MAX_MIRROR_EXTREMA,
            "emd.mirror_extrema",
        ) {
            errors.push(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Mode cap for a signal of `len` samples.
    pub fn effective_max_imfs(&self, len: usize) -> usize {
        self.max_imfs
            .unwrap_or_else(|| (len.max(2) as f64).log2().floor() as usize)
            .max(1)
    }
}

impl SpectrumConfig {
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if !(self.min_freq_hz >= 0.0 && self.min_freq_hz.is_finite()) {
            errors.push(ValidationError::OutOfRange {
                field: "spectrum.min_freq_hz".to_string(),
                value: self.min_freq_hz.to_string(),
                min: "0".to_string(),
                max: "inf".to_string(),
            });
        }
        if !(self.max_freq_hz > self.min_freq_hz) {
            errors.push(ValidationError::ConstraintViolation {
                fields: vec![
                    "spectrum.min_freq_hz".to_string(),
                    "spectrum.max_freq_hz".to_string(),
                ],
                message: format!(
                    "max_freq_hz ({}) must exceed min_freq_hz ({})",
                    self.max_freq_hz, self.min_freq_hz
                ),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = DenoiseConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.emd.sift_threshold, emd::DEFAULT_SIFT_THRESHOLD);
        assert_eq!(config.emd.max_sift_iterations, emd::DEFAULT_MAX_SIFT_ITERATIONS);
        assert_eq!(config.emd.max_imfs, None);
        assert!(!config.restore_scale);
    }

    #[test]
    fn test_effective_max_imfs() {
        let config = EmdConfig::default();
        assert_eq!(config.effective_max_imfs(128), 7);
        assert_eq!(config.effective_max_imfs(4), 2);

        let capped = EmdConfig { max_imfs: Some(3), ..EmdConfig::default() };
        assert_eq!(capped.effective_max_imfs(1024), 3);
    }

    #[test]
    fn test_validation_collects_all_errors() {
        let config = DenoiseConfig {
            emd: EmdConfig {
                sift_threshold: -1.0,
                max_sift_iterations: 0,
                ..EmdConfig::default()
            },
            spectrum: SpectrumConfig {
                min_freq_hz: 5.0,
                max_freq_hz: 1.0,
                in_db: false,
            },
            restore_scale: false,
        };

        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: DenoiseConfig = toml::from_str(
            r#"
            restore_scale = true

            [emd]
            sift_threshold = 0.3
            "#,
        )
        .unwrap();

        assert!(config.restore_scale);
        assert_eq!(config.emd.sift_threshold, 0.3);
        assert_eq!(config.emd.mirror_extrema, emd::DEFAULT_MIRROR_EXTREMA);
        assert_eq!(config.spectrum, SpectrumConfig::default());
    }

    #[test]
    fn test_toml_export_round_trips_values() {
        let mut config = DenoiseConfig::default();
        config.emd.max_imfs = Some(5);
        let text = config.to_toml_string().unwrap();
        let parsed: DenoiseConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
