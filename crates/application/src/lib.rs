//! dns-pulse Application Layer
//!
//! Port traits at the engine's interface boundaries: the capture layer feeds
//! packets through `PacketSink`, the export pipeline pulls accumulated stats
//! through `FlowStatsSource` and serializes them behind `StatsExporter`.
pub mod ports;
