use proptest::prelude::*;
use rstest::rstest;

use super::*;

#[rstest]
#[case("", "0000000000000000")]
#[case("xyz!? ghij", "0000000000000000")]
#[case("03f0fe", "03F0FE0000000000")]
#[case("03F0FE0000000000", "03F0FE0000000000")]
#[case("01:23:45:67:89:ab:cd:ef", "0123456789ABCDEF")]
#[case("0123456789ABCDEF0011", "0123456789ABCDEF")]
fn normalize_pads_and_truncates(#[case] raw: &str, #[case] expected: &str) {
	assert_eq!(normalize_identifier(raw).as_str(), expected);
}

#[test]
fn derive_replaces_last_byte() {
	let base = normalize_identifier("03F0FE00000000FF");
	assert_eq!(derive_identifier(&base, 0).as_str(), "03F0FE0000000000");
	assert_eq!(derive_identifier(&base, 2).as_str(), "03F0FE0000000002");
	assert_eq!(base.derive(0xAB).as_str(), "03F0FE00000000AB");
}

#[test]
fn derive_clamps_negative_and_wraps() {
	let base = normalize_identifier("03F0FE0000000000");
	assert_eq!(derive_identifier(&base, -5), derive_identifier(&base, 0));
	assert_eq!(derive_identifier(&base, 256), derive_identifier(&base, 0));
	assert_eq!(derive_identifier(&base, 257).as_str(), "03F0FE0000000001");
}

#[test]
fn derived_family_is_distinct_over_one_byte() {
	let base = normalize_identifier("03F0FE0000000000");
	let family: std::collections::HashSet<_> = (0..256).map(|n| derive_identifier(&base, n)).collect();
	assert_eq!(family.len(), 256);
	for (n, idm) in (0..256).map(|n| (n, derive_identifier(&base, n))) {
		assert_eq!(&idm[..14], &base[..14]);
		assert_eq!(&idm[14..], format!("{n:02X}"));
	}
}

#[test]
fn bytes_follow_text() {
	let idm = normalize_identifier("03F0FE0000000001");
	assert_eq!(idm.to_bytes(), [0x03, 0xF0, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x01]);
	assert_eq!(Idm::zero().to_bytes(), [0; IDM_LEN]);
}

proptest! {
	#[test]
	fn normalize_is_total_and_idempotent(raw in ".*") {
		let idm = normalize_identifier(&raw);
		prop_assert_eq!(idm.len(), IDM_HEX_LEN);
		prop_assert!(idm.chars().all(|c| matches!(c, '0'..='9' | 'A'..='F')));
		prop_assert_eq!(normalize_identifier(&idm), idm);
	}

	#[test]
	fn derive_keeps_prefix(raw in "[0-9A-F]{16}", ordinal in any::<i64>()) {
		let base = normalize_identifier(&raw);
		let derived = derive_identifier(&base, ordinal);
		prop_assert_eq!(derived.len(), IDM_HEX_LEN);
		prop_assert_eq!(&derived[..14], &base[..14]);
		prop_assert_eq!(derived, derive_identifier(&base, ordinal.max(0) % 256));
	}
}
