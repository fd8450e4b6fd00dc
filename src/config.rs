//! Run configuration.
//!
//! A single knob, `MATRIX_SIZE`, read once at startup. Configuration is
//! carried as an explicit struct rather than a process-wide dictionary so
//! the matrix code stays testable without touching the environment.

use thiserror::Error;

/// The environment key holding the matrix dimension.
pub const MATRIX_SIZE_KEY: &str = "MATRIX_SIZE";

/// Configuration problems, all fatal before any matrix work begins.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("MATRIX_SIZE is not set")]
    Missing,
    #[error("MATRIX_SIZE must be a positive integer, got {0:?}")]
    Invalid(String),
}

/// Resolved run configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Side length N of every matrix in the run. Always ≥ 1.
    pub matrix_size: usize,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration from an arbitrary key/value source.
    ///
    /// Tests hand in a closure over a fixed map instead of mutating the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(MATRIX_SIZE_KEY).ok_or(ConfigError::Missing)?;
        let matrix_size: usize = raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(raw.clone()))?;
        if matrix_size == 0 {
            return Err(ConfigError::Invalid(raw));
        }
        tracing::debug!(matrix_size, "resolved configuration");
        Ok(Self { matrix_size })
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, ConfigError};

    fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn parses_valid_size() {
        let config = Config::from_lookup(lookup_from(&[("MATRIX_SIZE", "16")])).unwrap();
        assert_eq!(config.matrix_size, 16);
    }

    #[test]
    fn missing_key_fails() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing);
    }

    #[test]
    fn non_numeric_fails() {
        let err = Config::from_lookup(lookup_from(&[("MATRIX_SIZE", "abc")])).unwrap_err();
        assert_eq!(err, ConfigError::Invalid("abc".to_string()));
    }

    #[test]
    fn zero_fails() {
        let err = Config::from_lookup(lookup_from(&[("MATRIX_SIZE", "0")])).unwrap_err();
        assert_eq!(err, ConfigError::Invalid("0".to_string()));
    }
}
