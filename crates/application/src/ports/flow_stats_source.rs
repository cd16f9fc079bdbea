use dns_pulse_domain::{FlowKey, FlowStats};
use rustc_hash::FxHashMap;

/// Per-flow stats accumulated since the previous drain.
pub type FlowStatsMap = FxHashMap<FlowKey, FlowStats>;

/// Pull-based, reset-on-read view of accumulated flow statistics.
pub trait FlowStatsSource: Send + Sync {
    /// Atomically captures and clears all flows' stats. The returned map is
    /// the caller's to own; stats between two drains represent exactly the
    /// activity in that interval.
    fn drain_stats(&self) -> FlowStatsMap;
}
