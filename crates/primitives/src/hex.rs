//! Permissive hexadecimal cleaning and decoding.
//!
//! Configuration values reach the canonicalizers as free-form text typed by a
//! user, so nothing here fails: malformed input only ever produces less output.

/// Uppercases `raw` and keeps only the characters in `[0-9A-F]`.
///
/// Everything else (whitespace, separators, `0x` prefixes' `X`, non-ASCII) is
/// dropped, so `" fe:0f "` cleans to `"FE0F"`.
pub fn clean_hex(raw: &str) -> String {
	raw.chars()
		.map(|c| c.to_ascii_uppercase())
		.filter(char::is_ascii_hexdigit)
		.collect()
}

/// Decodes `raw` into bytes, two hex digits per byte.
///
/// The input is cleaned with [`clean_hex`] first. A trailing odd digit does not
/// form a whole byte and is silently dropped.
pub fn hex_to_bytes(raw: &str) -> Vec<u8> {
	let cleaned = clean_hex(raw);
	cleaned
		.as_bytes()
		.chunks(2)
		.filter_map(|pair| {
			let pair = std::str::from_utf8(pair).ok()?;
			if pair.len() != 2 {
				return None;
			}
			u8::from_str_radix(pair, 16).ok()
		})
		.collect()
}

/// Renders `bytes` as contiguous uppercase hex.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
	use std::fmt::Write;

	bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut out, b| {
		let _ = write!(out, "{b:02X}");
		out
	})
}

/// Left-pads `cleaned` with `'0'` up to `width` characters. Longer input is
/// returned unchanged.
pub(crate) fn pad_start(cleaned: &str, width: usize) -> String {
	format!("{cleaned:0>width$}")
}

/// Right-pads `cleaned` with `'0'` up to `width` characters, then keeps the
/// first `width`.
pub(crate) fn pad_end_truncate(cleaned: &str, width: usize) -> String {
	let mut out: String = cleaned.chars().take(width).collect();
	while out.len() < width {
		out.push('0');
	}
	out
}

#[cfg(test)]
mod tests;
