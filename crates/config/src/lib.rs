//! Configuration for the identifier spray.
//!
//! A configuration is a small TOML document:
//!
//! ```toml
//! enabled = true
//! base_identifier = "03F0FE0000000000"
//! short_codes = ["0003", "FE00", "FE0F"]
//! ```
//!
//! Every key is optional and falls back to [`SprayConfig::default`]. For
//! compatibility with the stored preferences format, `idm` and `system_codes`
//! are accepted as aliases and `short_codes` may also be a single
//! comma-separated string (`"0003,fe00,fe0f"`).
//!
//! Parsing keeps the values exactly as written. The spray canonicalizes each
//! entry itself, so a malformed code only costs that one registration. Host
//! loaders that want the stored-preferences behavior can call
//! [`SprayConfig::sanitize`].

pub mod error;

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use t3tspray_primitives::{ShortCodePolicy, normalize_identifier};

pub use error::{ConfigError, ConfigWarning, Result};

/// Base identifier used when none is configured.
pub const DEFAULT_BASE_IDENTIFIER: &str = "03F0FE0000000000";

/// Short codes used when none are configured.
pub const DEFAULT_SHORT_CODES: [&str; 3] = ["0003", "fe00", "fe0f"];

/// The spray configuration handed to an activation.
///
/// Immutable once loaded: the spray only ever borrows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SprayConfig {
	/// Master switch. When false nothing is registered.
	pub enabled: bool,
	/// Identifier the derived family shares its first seven bytes with.
	#[serde(alias = "idm")]
	pub base_identifier: String,
	/// Short codes in registration order. Position defines the ordinal.
	#[serde(alias = "system_codes", deserialize_with = "deserialize_code_list")]
	pub short_codes: Vec<String>,
}

impl Default for SprayConfig {
	fn default() -> Self {
		Self {
			enabled: true,
			base_identifier: DEFAULT_BASE_IDENTIFIER.to_owned(),
			short_codes: default_short_codes(),
		}
	}
}

/// Result of [`SprayConfig::sanitize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitized {
	/// Configuration holding only canonical values.
	pub config: SprayConfig,
	/// What was dropped or substituted along the way.
	pub warnings: Vec<ConfigWarning>,
}

impl SprayConfig {
	/// Parse a TOML string into a [`SprayConfig`].
	pub fn parse(input: &str) -> Result<Self> {
		Ok(toml::from_str(input)?)
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		let config = Self::parse(&content)?;
		tracing::debug!(path = %path.display(), codes = config.short_codes.len(), "loaded spray config");
		Ok(config)
	}

	/// Canonicalizes every value the way the stored preferences loader does.
	///
	/// The base identifier is normalized, short codes rejected by `policy` are
	/// dropped, and if none remain the defaults take their place.
	pub fn sanitize(&self, policy: ShortCodePolicy) -> Sanitized {
		let mut warnings = Vec::new();
		let mut short_codes: Vec<String> = self
			.short_codes
			.iter()
			.filter_map(|raw| match policy.normalize(raw) {
				Some(code) => Some(code.as_str().to_owned()),
				None => {
					warnings.push(ConfigWarning::RejectedShortCode { raw: raw.clone() });
					None
				}
			})
			.collect();

		if short_codes.is_empty() {
			warnings.push(ConfigWarning::DefaultShortCodes);
			short_codes = default_short_codes();
		}

		Sanitized {
			config: Self {
				enabled: self.enabled,
				base_identifier: normalize_identifier(&self.base_identifier).as_str().to_owned(),
				short_codes,
			},
			warnings,
		}
	}
}

fn default_short_codes() -> Vec<String> {
	DEFAULT_SHORT_CODES.iter().map(|code| (*code).to_owned()).collect()
}

/// Accepts `["0003", "fe00"]` as well as `"0003,fe00"`.
fn deserialize_code_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
	D: Deserializer<'de>,
{
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum CodeList {
		List(Vec<String>),
		Joined(String),
	}

	Ok(match CodeList::deserialize(deserializer)? {
		CodeList::List(codes) => codes,
		CodeList::Joined(joined) => joined.split(',').map(str::to_owned).collect(),
	})
}
