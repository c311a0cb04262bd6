use thiserror::Error;

/// Configuration validation failures.
///
/// Every error in this crate is a configuration error surfaced before any
/// document is transformed; the transformation stages themselves are total
/// over arbitrary input and never fail.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// The high-frequency threshold must lie in `[0.0, 1.0]`.
    #[error("high-frequency threshold must be between 0.0 and 1.0, got {0}")]
    ThresholdOutOfRange(f64),

    /// The number-replacement sentinel would itself be mangled by later
    /// stages if it contained punctuation or whitespace.
    #[error("number replacement token {0:?} must not contain punctuation or whitespace")]
    InvalidSentinel(String),
}
