use std::sync::Arc;

use t3tspray_config::SprayConfig;
use t3tspray_primitives::ShortCodePolicy;

use crate::capability::SprayTarget;
use crate::gate::{GateState, SingleShotGate};
use crate::orchestrator::{isolate, spray_binary, spray_identifiers};
use crate::plan::{PlannedEntry, plan};
use crate::report::SprayReport;

/// One activation of the spray inside a host process.
///
/// Owns the configuration for its whole lifetime and plans the candidates once
/// up front. The handlers take `&self` and may be called from any thread, in
/// any order, any number of times.
#[derive(Debug)]
pub struct SprayEntry {
	config: SprayConfig,
	policy: ShortCodePolicy,
	plan: Vec<PlannedEntry>,
	gate: Arc<SingleShotGate>,
}

impl SprayEntry {
	/// Activates with the default short code policy and a fresh gate.
	pub fn activate(config: SprayConfig) -> Self {
		Self::with_policy(config, ShortCodePolicy::default())
	}

	/// Activates with an explicit short code policy and a fresh gate.
	pub fn with_policy(config: SprayConfig, policy: ShortCodePolicy) -> Self {
		Self::with_gate(config, policy, Arc::new(SingleShotGate::new()))
	}

	/// Activates against a caller-owned gate.
	pub fn with_gate(config: SprayConfig, policy: ShortCodePolicy, gate: Arc<SingleShotGate>) -> Self {
		let plan = if config.enabled {
			plan(&config, policy)
		} else {
			tracing::info!("spray disabled by configuration");
			Vec::new()
		};
		tracing::debug!(policy = policy.as_str(), entries = plan.len(), "spray activated");
		Self {
			config,
			policy,
			plan,
			gate,
		}
	}

	pub fn config(&self) -> &SprayConfig {
		&self.config
	}

	pub fn policy(&self) -> ShortCodePolicy {
		self.policy
	}

	/// The canonicalized entries both surfaces iterate.
	pub fn plan(&self) -> &[PlannedEntry] {
		&self.plan
	}

	pub fn gate(&self) -> &SingleShotGate {
		&self.gate
	}

	/// Trigger A: the target's identifier table was (re)constructed.
	///
	/// Ungated. Every call re-attempts every registration.
	pub fn on_cache_constructed(&self, target: &dyn SprayTarget) -> SprayReport {
		if !self.config.enabled {
			return SprayReport::Disabled;
		}
		let registrar = match isolate(|| target.identifier_registrar()) {
			Ok(registrar) => registrar,
			Err(error) => {
				tracing::warn!(error = %error, "identifier registration unavailable");
				return SprayReport::Unavailable(error);
			}
		};
		SprayReport::Completed(spray_identifiers(&self.plan, registrar))
	}

	/// Trigger B: the target's own binary registration entry point ran.
	///
	/// Only the arrival that fires the gate does any work; every later one, on
	/// any thread, returns [`SprayReport::AlreadyFired`]. The gate is fired only
	/// once the capability lookup succeeds, so an arrival on a target without
	/// the binary entry point leaves it armed for the next one.
	pub fn on_binary_register(&self, target: &dyn SprayTarget) -> SprayReport {
		if !self.config.enabled {
			return SprayReport::Disabled;
		}
		if self.gate.state() == GateState::Fired {
			tracing::trace!("binary spray already fired");
			return SprayReport::AlreadyFired;
		}
		let registrar = match isolate(|| target.binary_registrar()) {
			Ok(registrar) => registrar,
			Err(error) => {
				tracing::warn!(error = %error, "binary registration unavailable");
				return SprayReport::Unavailable(error);
			}
		};
		if !self.gate.try_fire() {
			tracing::trace!("binary spray already fired");
			return SprayReport::AlreadyFired;
		}
		SprayReport::Completed(spray_binary(&self.plan, registrar))
	}
}
