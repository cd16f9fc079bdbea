//! dns-pulse Correlation Engine
//!
//! Pairs passively observed DNS responses with their originating queries,
//! classifies each outcome (success, failure, timeout), and accumulates
//! per-flow latency statistics until the exporter drains them.
mod keeper;
mod pending;

pub use keeper::StatKeeper;
