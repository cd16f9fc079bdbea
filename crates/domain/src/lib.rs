//! dns-pulse Domain Layer
pub mod config;
pub mod errors;
pub mod flow;
pub mod packet;
pub mod stats;

pub use config::{Config, ConfigError, ExportConfig, TrackerConfig};
pub use errors::DomainError;
pub use flow::{FlowKey, Transport};
pub use packet::{PacketEvent, PacketKind, PendingKey};
pub use stats::FlowStats;
