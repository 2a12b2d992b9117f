//! Registration of derived Type 3 tag identifiers against a live host.
//!
//! A [`SprayEntry`] is created once per activation from a [`SprayConfig`]. The
//! host's interception layer then calls its two handlers:
//!
//! * [`SprayEntry::on_cache_constructed`] each time the target's identifier
//!   table is rebuilt. Every short code is registered through the target's
//!   [`IdentifierRegistrar`].
//! * [`SprayEntry::on_binary_register`] each time the target's binary entry
//!   point runs. The first arrival fires a [`SingleShotGate`] and registers
//!   every short code as a [`BinaryRecord`] through the [`BinaryRegistrar`];
//!   later arrivals do nothing.
//!
//! No fault crosses a handler. Rejected short codes, missing capabilities,
//! host errors and host panics all come back as values in a [`SprayReport`].
//!
//! [`BinaryRecord`]: t3tspray_primitives::BinaryRecord

pub mod capability;
pub mod entry;
pub mod gate;
pub mod orchestrator;
pub mod plan;
pub mod recording;
pub mod report;

pub use capability::{BinaryRegistrar, IdentifierRegistrar, RegistrationError, SprayTarget};
pub use entry::SprayEntry;
pub use gate::{GateState, SingleShotGate};
pub use orchestrator::{spray_binary, spray_identifiers};
pub use plan::{Candidate, PlannedEntry, plan};
pub use recording::{RecordedCall, RecordingTarget};
pub use report::{EntryOutcome, SprayReport};
pub use t3tspray_config::SprayConfig;
