mod flow_stats_source;
mod packet_sink;
mod stats_exporter;

pub use flow_stats_source::{FlowStatsMap, FlowStatsSource};
pub use packet_sink::PacketSink;
pub use stats_exporter::StatsExporter;

// Re-export for convenience
pub use dns_pulse_domain::{FlowKey, FlowStats, PacketEvent};
