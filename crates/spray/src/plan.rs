use t3tspray_config::SprayConfig;
use t3tspray_primitives::{BinaryRecord, Idm, ManufacturerParam, ShortCode, ShortCodePolicy, normalize_identifier};

/// One identity to register: a canonical short code paired with the
/// identifier derived for its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
	/// Zero-based position of the short code in the configuration.
	pub ordinal: usize,
	pub short_code: ShortCode,
	pub idm: Idm,
}

impl Candidate {
	/// Binary record for this candidate with an all-zero manufacturer parameter.
	pub fn record(&self) -> BinaryRecord {
		BinaryRecord::new(&self.short_code, &self.idm, &ManufacturerParam::ZERO)
	}
}

/// A configured short code after canonicalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannedEntry {
	Candidate(Candidate),
	/// The short code was rejected by the policy. Produces no call.
	Rejected { ordinal: usize, raw: String },
}

impl PlannedEntry {
	pub fn ordinal(&self) -> usize {
		match self {
			Self::Candidate(candidate) => candidate.ordinal,
			Self::Rejected { ordinal, .. } => *ordinal,
		}
	}
}

/// Canonicalizes the configuration into one planned entry per short code.
///
/// The ordinal is the position in `short_codes`, counted before rejection, so
/// a rejected entry still consumes its identifier suffix.
pub fn plan(config: &SprayConfig, policy: ShortCodePolicy) -> Vec<PlannedEntry> {
	let base = normalize_identifier(&config.base_identifier);
	config
		.short_codes
		.iter()
		.enumerate()
		.map(|(ordinal, raw)| match policy.normalize(raw) {
			Some(short_code) => PlannedEntry::Candidate(Candidate {
				ordinal,
				idm: base.derive(i64::try_from(ordinal).unwrap_or(i64::MAX)),
				short_code,
			}),
			None => PlannedEntry::Rejected {
				ordinal,
				raw: raw.clone(),
			},
		})
		.collect()
}
