use crate::flow::FlowKey;

/// Tells us whether an observed packet is a query or a reply
/// (successful/failed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketKind {
    Query,
    /// The response code of the DNS reply is 0 (NoError).
    SuccessfulResponse,
    /// The response code of the DNS reply is anything other than 0.
    FailedResponse,
}

impl PacketKind {
    /// Classifies a DNS reply by its response code.
    pub fn response_for_rcode(rcode: u8) -> Self {
        if rcode == 0 {
            PacketKind::SuccessfulResponse
        } else {
            PacketKind::FailedResponse
        }
    }

    pub fn is_response(&self) -> bool {
        matches!(
            self,
            PacketKind::SuccessfulResponse | PacketKind::FailedResponse
        )
    }
}

/// One passively observed DNS packet, already decoded by the capture layer.
///
/// Ephemeral: produced once per packet and consumed by value by the engine.
#[derive(Debug, Clone)]
pub struct PacketEvent {
    pub transaction_id: u16,
    pub key: FlowKey,
    pub kind: PacketKind,
}

/// Identifies one in-flight query awaiting its response.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PendingKey {
    pub flow: FlowKey,
    pub transaction_id: u16,
}
