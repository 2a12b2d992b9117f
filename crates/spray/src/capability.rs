//! Registration capabilities supplied by the host.
//!
//! The spray never talks to the tag-emulation service directly. Whatever
//! delivers trigger events also hands over a [`SprayTarget`], and the target
//! exposes the entry points it actually has.

use t3tspray_primitives::{BinaryRecord, Idm, ShortCode};
use thiserror::Error;

/// Failure of a single capability lookup or call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
	/// The target does not expose the requested entry point.
	#[error("{capability} is unavailable on this target: {reason}")]
	Unavailable {
		/// Name of the missing entry point.
		capability: &'static str,
		/// Host-provided detail.
		reason: String,
	},
	/// The host call returned an error.
	#[error("host rejected registration: {0}")]
	Rejected(String),
	/// The host call panicked.
	#[error("registration call panicked: {0}")]
	Panicked(String),
}

impl RegistrationError {
	/// Convenience constructor for [`RegistrationError::Unavailable`].
	pub fn unavailable(capability: &'static str, reason: impl Into<String>) -> Self {
		Self::Unavailable {
			capability,
			reason: reason.into(),
		}
	}
}

/// Diagnostic name of the identifier registration entry point.
pub const IDENTIFIER_REGISTRAR: &str = "registerT3tIdentifier";

/// Diagnostic name of the binary registration entry point.
pub const BINARY_REGISTRAR: &str = "registerT3tIdentifierBinary";

/// Registers one identifier under one short code.
pub trait IdentifierRegistrar {
	fn register(&self, idm: &Idm, short_code: &ShortCode) -> Result<(), RegistrationError>;
}

/// Registers one 18-byte binary record.
pub trait BinaryRegistrar {
	fn register_binary(&self, record: &BinaryRecord) -> Result<(), RegistrationError>;
}

impl<F> IdentifierRegistrar for F
where
	F: Fn(&Idm, &ShortCode) -> Result<(), RegistrationError>,
{
	fn register(&self, idm: &Idm, short_code: &ShortCode) -> Result<(), RegistrationError> {
		self(idm, short_code)
	}
}

impl<F> BinaryRegistrar for F
where
	F: Fn(&BinaryRecord) -> Result<(), RegistrationError>,
{
	fn register_binary(&self, record: &BinaryRecord) -> Result<(), RegistrationError> {
		self(record)
	}
}

/// A live host object the trigger handlers were invoked for.
///
/// Lookups run once per trigger event. Returning an error disables only the
/// surface that needed that capability, and only for that event.
pub trait SprayTarget {
	fn identifier_registrar(&self) -> Result<&dyn IdentifierRegistrar, RegistrationError>;

	fn binary_registrar(&self) -> Result<&dyn BinaryRegistrar, RegistrationError>;
}
