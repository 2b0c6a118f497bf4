// src/config/constants.rs
//! Numeric defaults and limits shared across the crate

/// Signal shape constraints
pub mod signal {
    /// Shortest signal the pipeline accepts.
    pub const MIN_SIGNAL_LENGTH: usize = 4;
    /// Standard deviation, relative to the largest sample magnitude, at or
    /// below which a signal is treated as constant.
    pub const MIN_RELATIVE_STD_DEV: f64 = 1e-12;
}

/// Empirical mode decomposition defaults
pub mod emd {
    /// Cauchy-type sifting threshold (Huang et al. use 0.2-0.3).
    pub const DEFAULT_SIFT_THRESHOLD: f64 = 0.2;
    pub const DEFAULT_MAX_SIFT_ITERATIONS: usize = 100;
    /// Residual range below this fraction of the input range ends decomposition.
    pub const DEFAULT_RANGE_THRESHOLD: f64 = 1e-3;
    /// Residual mean square below this fraction of the input mean square ends decomposition.
    pub const DEFAULT_ENERGY_THRESHOLD: f64 = 1e-10;
    /// Extrema reflected at each boundary before envelope interpolation.
    pub const DEFAULT_MIRROR_EXTREMA: usize = 2;
    pub const MAX_MIRROR_EXTREMA: usize = 8;
    pub const MAX_SIFT_ITERATIONS_LIMIT: usize = 10_000;
    /// Extrema a residual needs before another mode is attempted.
    pub const MIN_EXTREMA_FOR_MODE: usize = 2;
}

/// Frequency conversion defaults
pub mod spectrum {
    pub const DEFAULT_MIN_FREQ_HZ: f64 = 0.1;
    pub const DEFAULT_MAX_FREQ_HZ: f64 = 10.0;
    /// Allowed relative deviation of a sample interval from the mean interval.
    pub const UNIFORM_SPACING_TOLERANCE: f64 = 0.01;
    /// Amplitude floor applied before the dB conversion.
    pub const DB_FLOOR: f64 = 1e-12;
}

/// Configuration source settings
pub mod paths {
    pub const ENV_PREFIX: &str = "EMD_DENOISE";
    pub const ENV_SEPARATOR: &str = "__";
    pub const DEFAULT_CONFIG_FILE: &str = "emd-denoise.toml";
}
