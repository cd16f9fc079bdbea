/// Per-flow counters accumulated across correlated query/response pairs.
///
/// Monotonic between drains; a drain hands the whole record to the exporter
/// and the flow starts again from zero. Latency sums are whole microseconds.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FlowStats {
    pub successful_responses: u32,
    pub failed_responses: u32,
    pub success_latency_us: u64,
    pub failure_latency_us: u64,
    /// Counts both swept never-answered queries and responses that arrived
    /// after the expiration window.
    pub timeouts: u32,
}

impl FlowStats {
    /// Total in-window responses, successful or failed.
    pub fn responses(&self) -> u32 {
        self.successful_responses + self.failed_responses
    }
}
