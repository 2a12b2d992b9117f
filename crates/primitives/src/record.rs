//! Fixed-width binary registration records.
//!
//! Layout (18 bytes):
//!
//! ```text
//! +-----------+--------------------+---------------------------+
//! | 0..2      | 2..10              | 10..18                    |
//! | short code| identifier (IDm)   | manufacturer param (PMm)  |
//! +-----------+--------------------+---------------------------+
//! ```

use std::fmt;

use crate::hex::{bytes_to_hex, clean_hex, hex_to_bytes, pad_end_truncate, pad_start};
use crate::idm::{IDM_HEX_LEN, IDM_LEN, Idm};
use crate::short_code::{SHORT_CODE_HEX_LEN, SHORT_CODE_LEN, ShortCode};

/// Width of the manufacturer parameter in bytes.
pub const MANUFACTURER_PARAM_LEN: usize = 8;

/// Total width of a [`BinaryRecord`].
pub const RECORD_LEN: usize = SHORT_CODE_LEN + IDM_LEN + MANUFACTURER_PARAM_LEN;

const IDM_OFFSET: usize = SHORT_CODE_LEN;
const MANUFACTURER_OFFSET: usize = IDM_OFFSET + IDM_LEN;

/// Eight-byte manufacturer parameter (PMm) carried after the identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ManufacturerParam([u8; MANUFACTURER_PARAM_LEN]);

impl ManufacturerParam {
	/// The all-zero parameter used when nothing else is supplied.
	pub const ZERO: Self = Self([0; MANUFACTURER_PARAM_LEN]);

	/// Parses free-form hex the same way identifiers are: cleaned, right-padded
	/// and truncated to eight bytes.
	pub fn from_hex(raw: &str) -> Self {
		Self(leading_bytes(raw))
	}

	/// Returns the raw bytes.
	pub const fn to_bytes(self) -> [u8; MANUFACTURER_PARAM_LEN] {
		self.0
	}
}

/// An 18-byte binary registration record.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BinaryRecord([u8; RECORD_LEN]);

impl BinaryRecord {
	/// Builds a record from canonical values.
	pub fn new(short_code: &ShortCode, idm: &Idm, manufacturer: &ManufacturerParam) -> Self {
		Self::from_parts(short_code.to_bytes(), idm.to_bytes(), manufacturer.to_bytes())
	}

	fn from_parts(
		short_code: [u8; SHORT_CODE_LEN],
		idm: [u8; IDM_LEN],
		manufacturer: [u8; MANUFACTURER_PARAM_LEN],
	) -> Self {
		let mut bytes = [0; RECORD_LEN];
		bytes[..IDM_OFFSET].copy_from_slice(&short_code);
		bytes[IDM_OFFSET..MANUFACTURER_OFFSET].copy_from_slice(&idm);
		bytes[MANUFACTURER_OFFSET..].copy_from_slice(&manufacturer);
		Self(bytes)
	}

	/// Returns the whole record.
	pub const fn as_bytes(&self) -> &[u8; RECORD_LEN] {
		&self.0
	}

	/// Returns the short code field.
	pub fn short_code_bytes(&self) -> &[u8] {
		&self.0[..IDM_OFFSET]
	}

	/// Returns the identifier field.
	pub fn identifier_bytes(&self) -> &[u8] {
		&self.0[IDM_OFFSET..MANUFACTURER_OFFSET]
	}

	/// Returns the manufacturer parameter field.
	pub fn manufacturer_bytes(&self) -> &[u8] {
		&self.0[MANUFACTURER_OFFSET..]
	}

	/// Contiguous uppercase hex of the whole record.
	pub fn to_hex(&self) -> String {
		bytes_to_hex(&self.0)
	}
}

impl AsRef<[u8]> for BinaryRecord {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

impl From<BinaryRecord> for [u8; RECORD_LEN] {
	fn from(record: BinaryRecord) -> Self {
		record.0
	}
}

/// Space-separated hex pairs, e.g. `00 03 03 F0 ...`.
impl fmt::Display for BinaryRecord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, byte) in self.0.iter().enumerate() {
			if i > 0 {
				f.write_str(" ")?;
			}
			write!(f, "{byte:02X}")?;
		}
		Ok(())
	}
}

impl fmt::Debug for BinaryRecord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "BinaryRecord({self})")
	}
}

/// Builds a record from arbitrary strings.
///
/// The short code is left-padded to four hex characters and its last two
/// bytes kept; identifier and manufacturer parameter are right-padded to
/// sixteen and their first eight bytes kept. The result is always
/// [`RECORD_LEN`] bytes, however malformed the input.
pub fn build_record(short_code: &str, identifier: &str, manufacturer: &str) -> BinaryRecord {
	let code = hex_to_bytes(&pad_start(&clean_hex(short_code), SHORT_CODE_HEX_LEN));
	let mut short = [0; SHORT_CODE_LEN];
	short.copy_from_slice(&code[code.len() - SHORT_CODE_LEN..]);

	BinaryRecord::from_parts(
		short,
		leading_bytes(identifier),
		leading_bytes(manufacturer),
	)
}

/// Decodes the first eight bytes of `raw` after right-padding its cleaned hex
/// to sixteen characters.
fn leading_bytes(raw: &str) -> [u8; IDM_LEN] {
	let decoded = hex_to_bytes(&pad_end_truncate(&clean_hex(raw), IDM_HEX_LEN));
	let mut out = [0; IDM_LEN];
	out.copy_from_slice(&decoded);
	out
}
