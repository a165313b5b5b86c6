//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). The receive buffer matches the
//! advertised EDNS(0) payload size; a reply with the TC bit set is handed
//! back unchanged so the caller can retry over TCP.

use super::{io_error, timeout_error, DnsTransport, TransportResponse};
use async_trait::async_trait;
use forsale_application::ports::TransportProtocol;
use forsale_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Plain DNS limit without EDNS(0)
const MIN_UDP_RESPONSE_SIZE: usize = 512;

pub struct UdpTransport {
    server_addr: SocketAddr,
    max_response_size: usize,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr, udp_payload_size: u16) -> Self {
        Self {
            server_addr,
            max_response_size: usize::from(udp_payload_size).max(MIN_UDP_RESPONSE_SIZE),
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let bind_addr: SocketAddr = if self.server_addr.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| io_error(self.server_addr, "bind UDP socket", e))?;

        let bytes_sent =
            tokio::time::timeout(timeout, socket.send_to(message_bytes, self.server_addr))
                .await
                .map_err(|_| timeout_error(self.server_addr))?
                .map_err(|e| io_error(self.server_addr, "send UDP query", e))?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; self.max_response_size];

        let (bytes_received, from_addr) =
            tokio::time::timeout(timeout, socket.recv_from(&mut recv_buf))
                .await
                .map_err(|_| timeout_error(self.server_addr))?
                .map_err(|e| io_error(self.server_addr, "receive UDP response", e))?;

        if from_addr.ip() != self.server_addr.ip() {
            warn!(
                expected = %self.server_addr,
                received_from = %from_addr,
                "UDP response from unexpected source"
            );
        }

        recv_buf.truncate(bytes_received);

        debug!(
            server = %self.server_addr,
            bytes_received = bytes_received,
            "UDP response received"
        );

        Ok(TransportResponse {
            bytes: recv_buf,
            protocol_used: TransportProtocol::Udp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_udp_transport_creation() {
        let addr: SocketAddr = "9.9.9.9:53".parse().unwrap();
        let transport = UdpTransport::new(addr, 4096);
        assert_eq!(transport.server_addr, addr);
        assert_eq!(transport.max_response_size, 4096);
    }

    #[test]
    fn test_udp_buffer_never_below_plain_dns_limit() {
        let addr: SocketAddr = "[2620:fe::fe]:53".parse().unwrap();
        let transport = UdpTransport::new(addr, 100);
        assert_eq!(transport.max_response_size, 512);
    }

    #[tokio::test]
    async fn test_udp_round_trip_against_local_socket() {
        let server = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let server_addr = server.local_addr().unwrap();
        tokio::spawn(async move {
            let mut buf = [0u8; 64];
            let (n, peer) = server.recv_from(&mut buf).await.unwrap();
            server.send_to(&buf[..n], peer).await.unwrap();
        });

        let transport = UdpTransport::new(server_addr, 4096);
        let response = transport
            .send(b"\x12\x34ping", Duration::from_secs(2))
            .await
            .unwrap();

        assert_eq!(response.bytes, b"\x12\x34ping");
        assert_eq!(response.protocol_used, TransportProtocol::Udp);
    }

    #[tokio::test]
    async fn test_udp_timeout() {
        let silent = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let transport = UdpTransport::new(silent.local_addr().unwrap(), 4096);

        let err = transport
            .send(b"\x00\x01", Duration::from_millis(50))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::TransportTimeout { .. }));
    }
}
