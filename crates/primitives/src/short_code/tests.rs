use proptest::prelude::*;
use rstest::rstest;

use super::*;

#[rstest]
#[case("", None)]
#[case("zz", None)]
#[case("3", Some("0003"))]
#[case("fe0", Some("0FE0"))]
#[case("fe0f", Some("FE0F"))]
#[case(" 0x12 ", Some("0012"))]
#[case("12345", None)]
fn pad_left_boundaries(#[case] raw: &str, #[case] expected: Option<&str>) {
	let got = ShortCodePolicy::PadLeft.normalize(raw);
	assert_eq!(got.as_deref(), expected);
}

#[rstest]
#[case("", None)]
#[case("3", None)]
#[case("fe0", None)]
#[case("fe0f", Some("FE0F"))]
#[case("fe-0f", Some("FE0F"))]
#[case("12345", None)]
fn exact_tail_boundaries(#[case] raw: &str, #[case] expected: Option<&str>) {
	let got = ShortCodePolicy::ExactTail.normalize(raw);
	assert_eq!(got.as_deref(), expected);
}

#[test]
fn default_policy_is_pad_left() {
	assert_eq!(ShortCodePolicy::default(), ShortCodePolicy::PadLeft);
	assert_eq!(normalize_short_code("3").as_deref(), Some("0003"));
}

#[test]
fn bytes_are_big_endian() {
	let code = normalize_short_code("fe0f").unwrap();
	assert_eq!(code.to_bytes(), [0xFE, 0x0F]);
	let code = normalize_short_code("3").unwrap();
	assert_eq!(code.to_bytes(), [0x00, 0x03]);
}

#[test]
fn parse_reports_rejected_input() {
	assert_eq!("fe00".parse::<ShortCode>().unwrap().as_str(), "FE00");
	let err = "fe00f".parse::<ShortCode>().unwrap_err();
	assert_eq!(err.raw, "fe00f");
}

proptest! {
	#[test]
	fn normalize_is_idempotent(raw in ".{0,12}") {
		for policy in [ShortCodePolicy::PadLeft, ShortCodePolicy::ExactTail] {
			if let Some(code) = policy.normalize(&raw) {
				prop_assert_eq!(code.len(), SHORT_CODE_HEX_LEN);
				let again = policy.normalize(&code);
				prop_assert_eq!(again.as_ref(), Some(&code));
			}
		}
	}

	#[test]
	fn accepted_iff_cleaned_length_in_range(raw in "[0-9a-fA-F]{0,6}") {
		let accepted = normalize_short_code(&raw).is_some();
		prop_assert_eq!(accepted, (1..=4).contains(&raw.len()));
	}
}
