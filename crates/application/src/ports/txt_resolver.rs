use async_trait::async_trait;
use forsale_domain::{DomainError, RawRecord};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportProtocol {
    Udp,
    Tcp,
}

impl fmt::Display for TransportProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportProtocol::Udp => f.write_str("UDP"),
            TransportProtocol::Tcp => f.write_str("TCP"),
        }
    }
}

/// TXT records from the ANSWER section, in answer order.
#[derive(Debug, Clone)]
pub struct TxtAnswer {
    pub records: Vec<RawRecord>,
    /// Server that produced the answer.
    pub server: String,
    pub protocol_used: TransportProtocol,
}

impl TxtAnswer {
    pub fn new(records: Vec<RawRecord>, server: impl Into<String>, protocol_used: TransportProtocol) -> Self {
        Self {
            records,
            server: server.into(),
            protocol_used,
        }
    }
}

#[async_trait]
pub trait TxtResolver: Send + Sync {
    /// Resolve the TXT RRset at an absolute query name. NXDOMAIN and NODATA
    /// both produce an empty answer rather than an error.
    async fn lookup_txt(&self, qname: &str) -> Result<TxtAnswer, DomainError>;
}
