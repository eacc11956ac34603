//! Error types for Horizon Chrome.
//!
//! Gesture and state handling never fail: constraint violations are
//! ignored and missing monitors degrade to leaving geometry untouched.
//! Errors only surface at the edges, when loading configuration or when
//! querying a platform window that cannot report its position.

use thiserror::Error;

/// Errors produced while loading or validating a [`ChromeConfig`](crate::ChromeConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("failed to parse chrome configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("failed to serialize chrome configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A numeric setting is negative, zero where it must be positive, or not finite.
    #[error("invalid value for `{field}`: {value}")]
    InvalidValue {
        /// Name of the offending setting.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Errors produced by window handle queries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// The platform cannot report the window position (e.g., on Wayland).
    #[error("window position is unavailable")]
    PositionUnavailable,

    /// Neither a monitor containing the window nor a primary monitor exists.
    #[error("no monitor available")]
    NoMonitor,
}

/// The main error type for Horizon Chrome operations.
#[derive(Debug, Error)]
pub enum ChromeError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Window error.
    #[error("window error: {0}")]
    Window(#[from] WindowError),
}

/// A specialized Result type for Horizon Chrome operations.
pub type Result<T> = std::result::Result<T, ChromeError>;
