//! Collaborator seams: the services the engine's callers pull data from.
//!
//! The engine itself performs no I/O; these traits define the shape of the
//! probe, inventory, and history collaborators so call sites (and tests)
//! can plug in remote clients or in-memory fixtures interchangeably.
//! Collaborator failures are runtime I/O conditions with varied causes,
//! so the seams report them as [`anyhow::Error`]s rather than extending
//! the engine's own taxonomy.

use netscope_types::{DeviceRecord, Sample, TraceResult};

/// Executes traces toward a target.
pub trait TraceProvider {
    /// Trace the path to `target`, probing at most `max_hops` hops.
    fn run_trace(&self, target: &str, max_hops: u32) -> anyhow::Result<TraceResult>;
}

/// Serves the current device inventory.
pub trait DeviceProvider {
    /// A snapshot of every known device.
    fn devices(&self) -> anyhow::Result<Vec<DeviceRecord>>;
}

/// Serves historical samples for a metric family.
///
/// An empty result is how a caller learns that no real history exists yet
/// and that [`crate::series::synthesize`] is the appropriate fallback.
pub trait SampleProvider {
    /// Samples for `family` (e.g. `"inventory"`, `"speed"`) over the
    /// trailing `hours`.
    fn history(&self, family: &str, hours: i64) -> anyhow::Result<Vec<Sample>>;
}
