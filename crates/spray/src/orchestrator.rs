//! The two spray loops.
//!
//! Both walk the same plan and differ only in the call they make. Every call
//! goes through [`isolate`], so neither an error nor a panic from the host
//! escapes a loop: each becomes an [`EntryOutcome::Failed`] and the loop moves
//! on to the next entry.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::capability::{BinaryRegistrar, IdentifierRegistrar, RegistrationError};
use crate::plan::{Candidate, PlannedEntry};
use crate::report::EntryOutcome;

/// Registers every candidate through the identifier entry point.
pub fn spray_identifiers(plan: &[PlannedEntry], registrar: &dyn IdentifierRegistrar) -> Vec<EntryOutcome> {
	spray_each(plan, "identifier", |candidate| {
		registrar.register(&candidate.idm, &candidate.short_code)
	})
}

/// Registers every candidate as an 18-byte record through the binary entry
/// point.
pub fn spray_binary(plan: &[PlannedEntry], registrar: &dyn BinaryRegistrar) -> Vec<EntryOutcome> {
	spray_each(plan, "binary", |candidate| {
		let record = candidate.record();
		tracing::debug!(ordinal = candidate.ordinal, %record, "built binary record");
		registrar.register_binary(&record)
	})
}

fn spray_each(
	plan: &[PlannedEntry],
	surface: &'static str,
	mut call: impl FnMut(&Candidate) -> Result<(), RegistrationError>,
) -> Vec<EntryOutcome> {
	plan.iter()
		.map(|entry| match entry {
			PlannedEntry::Rejected { ordinal, raw } => {
				tracing::warn!(surface, ordinal, raw = %raw, "skipping invalid short code");
				EntryOutcome::Skipped {
					ordinal: *ordinal,
					raw: raw.clone(),
				}
			}
			PlannedEntry::Candidate(candidate) => match isolate(|| call(candidate)) {
				Ok(()) => {
					tracing::info!(
						surface,
						short_code = %candidate.short_code,
						idm = %candidate.idm,
						"registered identifier"
					);
					EntryOutcome::Registered(candidate.clone())
				}
				Err(error) => {
					tracing::warn!(
						surface,
						short_code = %candidate.short_code,
						idm = %candidate.idm,
						error = %error,
						"registration failed"
					);
					EntryOutcome::Failed {
						candidate: candidate.clone(),
						error,
					}
				}
			},
		})
		.collect()
}

/// Runs a host call, turning a panic into [`RegistrationError::Panicked`].
pub(crate) fn isolate<T>(f: impl FnOnce() -> Result<T, RegistrationError>) -> Result<T, RegistrationError> {
	catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|payload| Err(RegistrationError::Panicked(panic_message(&*payload))))
}

/// Extracts the message of a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
	if let Some(msg) = payload.downcast_ref::<&str>() {
		(*msg).to_owned()
	} else if let Some(msg) = payload.downcast_ref::<String>() {
		msg.clone()
	} else {
		"<unknown panic>".to_owned()
	}
}
