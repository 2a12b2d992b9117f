use crate::capability::RegistrationError;
use crate::plan::Candidate;

/// What happened to one planned entry during a spray pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
	Registered(Candidate),
	/// Rejected short code; no call was made.
	Skipped { ordinal: usize, raw: String },
	Failed { candidate: Candidate, error: RegistrationError },
}

impl EntryOutcome {
	pub fn ordinal(&self) -> usize {
		match self {
			Self::Registered(candidate) | Self::Failed { candidate, .. } => candidate.ordinal,
			Self::Skipped { ordinal, .. } => *ordinal,
		}
	}

	/// True when a registration call was made, whatever its result.
	pub fn attempted(&self) -> bool {
		!matches!(self, Self::Skipped { .. })
	}
}

/// Result of handling one trigger event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SprayReport {
	/// The configuration disabled the spray.
	Disabled,
	/// Another arrival already ran the gated sequence.
	AlreadyFired,
	/// The capability this surface needs could not be obtained.
	Unavailable(RegistrationError),
	/// Every planned entry was processed.
	Completed(Vec<EntryOutcome>),
}

impl SprayReport {
	/// Per-entry outcomes; empty unless the pass completed.
	pub fn outcomes(&self) -> &[EntryOutcome] {
		match self {
			Self::Completed(outcomes) => outcomes,
			_ => &[],
		}
	}

	pub fn registered(&self) -> usize {
		self.count(|outcome| matches!(outcome, EntryOutcome::Registered(_)))
	}

	pub fn failed(&self) -> usize {
		self.count(|outcome| matches!(outcome, EntryOutcome::Failed { .. }))
	}

	pub fn skipped(&self) -> usize {
		self.count(|outcome| matches!(outcome, EntryOutcome::Skipped { .. }))
	}

	fn count(&self, pred: impl Fn(&EntryOutcome) -> bool) -> usize {
		self.outcomes().iter().filter(|outcome| pred(outcome)).count()
	}
}
