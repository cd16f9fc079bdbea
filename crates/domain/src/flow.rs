use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

/// Transport protocol carrying a DNS conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transport {
    Udp,
    Tcp,
}

impl Transport {
    pub fn protocol_name(&self) -> &'static str {
        match self {
            Transport::Udp => "UDP",
            Transport::Tcp => "TCP",
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.protocol_name())
    }
}

impl FromStr for Transport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "udp" => Ok(Transport::Udp),
            "tcp" => Ok(Transport::Tcp),
            _ => Err(format!("Invalid transport '{}'. Expected 'udp' or 'tcp'", s)),
        }
    }
}

/// Identifies one DNS conversation path between a client and a DNS server.
///
/// Used as a map key for per-flow stat accumulation; the client port is part
/// of the key so concurrent resolvers behind the same address stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlowKey {
    pub server: IpAddr,
    pub client: IpAddr,
    pub client_port: u16,
    pub transport: Transport,
}

impl fmt::Display for FlowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}:{} -> {}",
            self.transport, self.client, self.client_port, self.server
        )
    }
}
