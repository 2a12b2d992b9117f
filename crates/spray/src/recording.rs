//! In-memory [`SprayTarget`] that records every call it receives.
//!
//! Used by the preview CLI to show what a host would be asked to register, and
//! by tests as a stand-in host.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use t3tspray_primitives::{BinaryRecord, Idm, ShortCode};

use crate::capability::{
	BINARY_REGISTRAR, BinaryRegistrar, IDENTIFIER_REGISTRAR, IdentifierRegistrar, RegistrationError, SprayTarget,
};

/// One call observed by a [`RecordingTarget`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
	Identifier { idm: Idm, short_code: ShortCode },
	Binary(BinaryRecord),
}

/// Recording stand-in for a live host object.
#[derive(Debug)]
pub struct RecordingTarget {
	identifier_available: bool,
	binary_available: bool,
	rejects: HashSet<String>,
	calls: Mutex<Vec<RecordedCall>>,
}

impl Default for RecordingTarget {
	fn default() -> Self {
		Self::new()
	}
}

impl RecordingTarget {
	/// A target exposing both entry points and accepting everything.
	pub fn new() -> Self {
		Self {
			identifier_available: true,
			binary_available: true,
			rejects: HashSet::new(),
			calls: Mutex::new(Vec::new()),
		}
	}

	/// Hides the identifier entry point.
	pub fn without_identifier_registrar(mut self) -> Self {
		self.identifier_available = false;
		self
	}

	/// Hides the binary entry point.
	pub fn without_binary_registrar(mut self) -> Self {
		self.binary_available = false;
		self
	}

	/// Rejects (after recording) any call for this canonical short code.
	pub fn rejecting(mut self, short_code: &str) -> Self {
		self.rejects.insert(short_code.to_owned());
		self
	}

	/// Snapshot of the calls received so far, in arrival order.
	pub fn calls(&self) -> Vec<RecordedCall> {
		self.calls.lock().unwrap_or_else(PoisonError::into_inner).clone()
	}

	fn record(&self, call: RecordedCall, short_code: &str) -> Result<(), RegistrationError> {
		self.calls.lock().unwrap_or_else(PoisonError::into_inner).push(call);
		if self.rejects.contains(short_code) {
			return Err(RegistrationError::Rejected(format!("short code {short_code} refused")));
		}
		Ok(())
	}
}

impl IdentifierRegistrar for RecordingTarget {
	fn register(&self, idm: &Idm, short_code: &ShortCode) -> Result<(), RegistrationError> {
		let call = RecordedCall::Identifier {
			idm: idm.clone(),
			short_code: short_code.clone(),
		};
		self.record(call, short_code)
	}
}

impl BinaryRegistrar for RecordingTarget {
	fn register_binary(&self, record: &BinaryRecord) -> Result<(), RegistrationError> {
		let short_code = t3tspray_primitives::bytes_to_hex(record.short_code_bytes());
		self.record(RecordedCall::Binary(*record), &short_code)
	}
}

impl SprayTarget for RecordingTarget {
	fn identifier_registrar(&self) -> Result<&dyn IdentifierRegistrar, RegistrationError> {
		if self.identifier_available {
			Ok(self)
		} else {
			Err(RegistrationError::unavailable(IDENTIFIER_REGISTRAR, "not exposed by recording target"))
		}
	}

	fn binary_registrar(&self) -> Result<&dyn BinaryRegistrar, RegistrationError> {
		if self.binary_available {
			Ok(self)
		} else {
			Err(RegistrationError::unavailable(BINARY_REGISTRAR, "not exposed by recording target"))
		}
	}
}
