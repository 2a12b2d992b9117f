use rstest::rstest;

use super::*;

#[rstest]
#[case("", "")]
#[case("fe0f", "FE0F")]
#[case(" fe:0f ", "FE0F")]
#[case("0xFE", "0FE")]
#[case("ghij", "")]
#[case("03f0-fe00 0000_0000", "03F0FE0000000000")]
fn clean_hex_strips_and_uppercases(#[case] raw: &str, #[case] expected: &str) {
	assert_eq!(clean_hex(raw), expected);
}

#[rstest]
#[case("", &[])]
#[case("0003", &[0x00, 0x03])]
#[case("fe 0f", &[0xFE, 0x0F])]
#[case("ABC", &[0xAB])]
#[case("A", &[])]
#[case("zz12zz3", &[0x12])]
fn hex_to_bytes_drops_incomplete_chunks(#[case] raw: &str, #[case] expected: &[u8]) {
	assert_eq!(hex_to_bytes(raw), expected);
}

#[test]
fn bytes_to_hex_is_uppercase_and_padded() {
	assert_eq!(bytes_to_hex(&[0x03, 0xF0, 0xFE, 0x00]), "03F0FE00");
	assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn padding_helpers() {
	assert_eq!(pad_start("3", 4), "0003");
	assert_eq!(pad_start("12345", 4), "12345");
	assert_eq!(pad_end_truncate("03F0FE", 16), "03F0FE0000000000");
	assert_eq!(pad_end_truncate("0123456789ABCDEF01", 16), "0123456789ABCDEF");
}

proptest::proptest! {
	#[test]
	fn decoded_length_is_half_the_cleaned_length(raw in ".*") {
		proptest::prop_assert_eq!(hex_to_bytes(&raw).len(), clean_hex(&raw).len() / 2);
	}
}
