use std::time::Instant;

use dns_pulse_domain::PacketEvent;

/// Ingestion boundary between the capture layer and the correlation engine.
///
/// One call per observed packet, stamped with its capture time. Safe to call
/// from any number of capture threads concurrently. The operation reports
/// nothing back: dropped, duplicate, and unmatched packets are policy
/// decisions of the engine, not errors.
pub trait PacketSink: Send + Sync {
    fn process_packet(&self, event: PacketEvent, at: Instant);
}
