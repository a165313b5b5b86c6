pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use forsale_application::ports::TransportProtocol;
use forsale_domain::DomainError;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,
    pub protocol_used: TransportProtocol,
}

#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;
}

/// Reject a response whose ID does not match the query it answers.
pub fn validate_response_id(
    query: &[u8],
    response: &[u8],
    server: SocketAddr,
) -> Result<(), DomainError> {
    if query.len() < 2 || response.len() < 2 {
        return Err(DomainError::InvalidDnsResponse(format!(
            "message from {server} too short to carry an ID"
        )));
    }
    let sent = u16::from_be_bytes([query[0], query[1]]);
    let received = u16::from_be_bytes([response[0], response[1]]);
    if sent != received {
        return Err(DomainError::InvalidDnsResponse(format!(
            "ID mismatch from {server}: sent {sent:#06x}, received {received:#06x}"
        )));
    }
    Ok(())
}

pub(crate) fn io_error(server: SocketAddr, action: &str, e: io::Error) -> DomainError {
    match e.kind() {
        io::ErrorKind::ConnectionRefused => DomainError::TransportConnectionRefused {
            server: server.to_string(),
        },
        io::ErrorKind::TimedOut => DomainError::TransportTimeout {
            server: server.to_string(),
        },
        _ => DomainError::TransportFailed {
            server: server.to_string(),
            reason: format!("{action}: {e}"),
        },
    }
}

pub(crate) fn timeout_error(server: SocketAddr) -> DomainError {
    DomainError::TransportTimeout {
        server: server.to_string(),
    }
}
