use std::fmt;
use std::ops::Deref;

use crate::hex::{clean_hex, pad_end_truncate};

/// Width of a canonical identifier in hex characters.
pub const IDM_HEX_LEN: usize = 16;

/// Width of a canonical identifier in bytes.
pub const IDM_LEN: usize = 8;

/// Hex characters of an identifier left untouched by [`derive_identifier`].
const DERIVED_PREFIX_LEN: usize = IDM_HEX_LEN - 2;

/// A canonical eight-byte tag identifier (IDm): exactly sixteen uppercase hex
/// characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Idm(String);

impl Idm {
	/// The all-zero identifier.
	pub fn zero() -> Self {
		Self("0".repeat(IDM_HEX_LEN))
	}

	/// Returns the canonical hex text.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Returns the decoded bytes.
	pub fn to_bytes(&self) -> [u8; IDM_LEN] {
		u64::from_str_radix(&self.0, 16).unwrap_or_default().to_be_bytes()
	}

	/// Derives the identifier for `ordinal`; see [`derive_identifier`].
	pub fn derive(&self, ordinal: i64) -> Self {
		derive_identifier(self, ordinal)
	}
}

impl Default for Idm {
	fn default() -> Self {
		Self::zero()
	}
}

impl Deref for Idm {
	type Target = str;

	fn deref(&self) -> &str {
		&self.0
	}
}

impl AsRef<str> for Idm {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for Idm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Canonicalizes free-form identifier text. Never rejects.
///
/// The cleaned hex is right-padded with `'0'` and cut to sixteen characters, so
/// empty or entirely non-hex input yields [`Idm::zero`].
pub fn normalize_identifier(raw: &str) -> Idm {
	Idm(pad_end_truncate(&clean_hex(raw), IDM_HEX_LEN))
}

/// Replaces the last byte of `base` with `ordinal`.
///
/// Negative ordinals clamp to zero and the rest are masked to one byte, so
/// ordinals `0..=255` give distinct identifiers and `256` wraps back onto `0`.
pub fn derive_identifier(base: &Idm, ordinal: i64) -> Idm {
	let suffix = ordinal.max(0) & 0xFF;
	Idm(format!("{}{suffix:02X}", &base.0[..DERIVED_PREFIX_LEN]))
}

#[cfg(test)]
mod tests;
