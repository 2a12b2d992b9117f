//! Canonical Type 3 tag values: short codes, identifiers and the binary
//! registration record built from them.
//!
//! Every constructor here accepts untrusted, free-form text and is total: it
//! either produces a well-formed value or (for short codes only) rejects.

/// Permissive hex cleaning and decoding.
pub mod hex;
/// Canonical eight-byte identifiers and their derivation.
pub mod idm;
/// The 18-byte binary registration record.
pub mod record;
/// Canonical two-byte short codes and the policies that produce them.
pub mod short_code;

pub use hex::{bytes_to_hex, clean_hex, hex_to_bytes};
pub use idm::{IDM_HEX_LEN, IDM_LEN, Idm, derive_identifier, normalize_identifier};
pub use record::{BinaryRecord, MANUFACTURER_PARAM_LEN, ManufacturerParam, RECORD_LEN, build_record};
pub use short_code::{
	InvalidShortCode, SHORT_CODE_HEX_LEN, SHORT_CODE_LEN, ShortCode, ShortCodePolicy, normalize_short_code,
};
