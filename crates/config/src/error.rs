//! Error and warning types for configuration loading.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or an unexpected value type.
	#[error("TOML parse error: {0}")]
	Parse(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},
}

/// Non-fatal warning produced by [`SprayConfig::sanitize`](crate::SprayConfig::sanitize).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
	/// A short code was rejected by the active policy and dropped.
	RejectedShortCode {
		/// The raw configured text.
		raw: String,
	},
	/// No configured short code survived, so the defaults were substituted.
	DefaultShortCodes,
}

impl fmt::Display for ConfigWarning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ConfigWarning::RejectedShortCode { raw } => write!(f, "short code {raw:?} was rejected by the short code policy and dropped"),
			ConfigWarning::DefaultShortCodes => f.write_str("no valid short codes configured, using defaults"),
		}
	}
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
