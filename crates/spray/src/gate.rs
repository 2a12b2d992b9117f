use std::sync::atomic::{AtomicBool, Ordering};

/// Observable state of a [`SingleShotGate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
	/// Nobody has fired the gate yet.
	Unarmed,
	/// The gate has fired. Terminal.
	Fired,
}

/// Lock-free exactly-once gate.
///
/// The compare-and-set in [`try_fire`](Self::try_fire) is the only arbiter of
/// which caller is first. There is no reset: a fresh activation constructs a
/// fresh gate.
#[derive(Debug, Default)]
pub struct SingleShotGate {
	fired: AtomicBool,
}

impl SingleShotGate {
	/// Creates an unarmed gate.
	pub const fn new() -> Self {
		Self {
			fired: AtomicBool::new(false),
		}
	}

	/// Fires the gate. Returns `true` for exactly one caller across all
	/// threads and `false` for every other.
	pub fn try_fire(&self) -> bool {
		self.fired
			.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
			.is_ok()
	}

	/// Returns the current state.
	pub fn state(&self) -> GateState {
		if self.fired.load(Ordering::Acquire) {
			GateState::Fired
		} else {
			GateState::Unarmed
		}
	}
}
