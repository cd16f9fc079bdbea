use async_trait::async_trait;
use dns_pulse_domain::DomainError;

use super::flow_stats_source::FlowStatsMap;

/// Port for the metrics-export pipeline.
///
/// Takes ownership of one drained batch. A failed export loses that batch;
/// stats are in-memory only and never redelivered.
#[async_trait]
pub trait StatsExporter: Send + Sync {
    async fn export(&self, stats: FlowStatsMap) -> Result<(), DomainError>;
}
