use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::hex::{clean_hex, pad_start};

/// Width of a canonical short code in hex characters.
pub const SHORT_CODE_HEX_LEN: usize = 4;

/// Width of a canonical short code in bytes.
pub const SHORT_CODE_LEN: usize = 2;

/// How free-form short code text is turned into a canonical [`ShortCode`].
///
/// Both policies clean the input first (uppercase, drop non-hex). They only
/// disagree when the cleaned text is not exactly four characters long:
///
/// | cleaned length | `PadLeft`        | `ExactTail` |
/// |----------------|------------------|-------------|
/// | 0              | reject           | reject      |
/// | 1..=3          | left-pad with 0  | reject      |
/// | 4              | accept           | accept      |
/// | 5+             | reject           | reject      |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ShortCodePolicy {
	/// Accept 1 to 4 cleaned characters and left-pad to four.
	#[default]
	PadLeft,
	/// Accept exactly four cleaned characters, keeping the last four.
	ExactTail,
}

impl ShortCodePolicy {
	/// Canonicalizes `raw` under this policy, or `None` when it is rejected.
	pub fn normalize(self, raw: &str) -> Option<ShortCode> {
		let cleaned = clean_hex(raw);
		let canonical = match self {
			Self::PadLeft => {
				if cleaned.is_empty() || cleaned.len() > SHORT_CODE_HEX_LEN {
					return None;
				}
				pad_start(&cleaned, SHORT_CODE_HEX_LEN)
			}
			Self::ExactTail => {
				if cleaned.len() != SHORT_CODE_HEX_LEN {
					return None;
				}
				cleaned[cleaned.len() - SHORT_CODE_HEX_LEN..].to_owned()
			}
		};
		Some(ShortCode(canonical))
	}

	/// Stable lowercase name, as accepted on the command line.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::PadLeft => "pad-left",
			Self::ExactTail => "exact-tail",
		}
	}
}

/// Canonicalizes `raw` with the default [`ShortCodePolicy::PadLeft`].
pub fn normalize_short_code(raw: &str) -> Option<ShortCode> {
	ShortCodePolicy::default().normalize(raw)
}

/// A canonical two-byte short code: exactly four uppercase hex characters.
///
/// On FeliCa this is the system code a tag answers polling for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShortCode(String);

impl ShortCode {
	/// Returns the canonical hex text.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Returns the decoded big-endian bytes.
	pub fn to_bytes(&self) -> [u8; SHORT_CODE_LEN] {
		let value = u16::from_str_radix(&self.0, 16).unwrap_or_default();
		value.to_be_bytes()
	}
}

impl Deref for ShortCode {
	type Target = str;

	fn deref(&self) -> &str {
		&self.0
	}
}

impl AsRef<str> for ShortCode {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for ShortCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Error returned when parsing a [`ShortCode`] from text that the default
/// policy rejects.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid short code {raw:?}: expected 1 to 4 hex digits")]
pub struct InvalidShortCode {
	/// The rejected input.
	pub raw: String,
}

impl FromStr for ShortCode {
	type Err = InvalidShortCode;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		normalize_short_code(s).ok_or_else(|| InvalidShortCode { raw: s.to_owned() })
	}
}

#[cfg(test)]
mod tests;
