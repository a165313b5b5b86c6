//! `TxtResolver` adapter: sends the TXT query to each configured server in
//! turn until one of them answers.

use super::message_builder::MessageBuilder;
use super::resolv_conf;
use super::response_parser::{ResponseParser, TxtResponse};
use super::transport::tcp::TcpTransport;
use super::transport::udp::UdpTransport;
use super::transport::{validate_response_id, DnsTransport};
use async_trait::async_trait;
use forsale_application::ports::{TransportProtocol, TxtAnswer, TxtResolver};
use forsale_domain::{DomainError, ResolverConfig};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, warn};

pub struct UpstreamTxtResolver {
    servers: Vec<SocketAddr>,
    timeout: Duration,
    udp_payload_size: u16,
    tcp_fallback: bool,
}

impl UpstreamTxtResolver {
    pub fn new(
        servers: Vec<SocketAddr>,
        timeout: Duration,
        udp_payload_size: u16,
        tcp_fallback: bool,
    ) -> Self {
        Self {
            servers,
            timeout,
            udp_payload_size,
            tcp_fallback,
        }
    }

    /// Use the configured servers, falling back to resolv.conf.
    pub fn from_config(config: &ResolverConfig) -> Result<Self, DomainError> {
        let servers: Vec<SocketAddr> = if config.servers.is_empty() {
            resolv_conf::read_nameservers(&config.resolv_conf)?
                .into_iter()
                .map(|ip| SocketAddr::new(ip, config.port))
                .collect()
        } else {
            config
                .servers
                .iter()
                .map(|s| {
                    config.parse_server(s).ok_or_else(|| {
                        DomainError::ConfigError(format!("Invalid DNS server address '{s}'"))
                    })
                })
                .collect::<Result<_, _>>()?
        };

        if servers.is_empty() {
            return Err(DomainError::NoServersConfigured);
        }

        debug!(servers = ?servers, "Resolver servers configured");

        Ok(Self::new(
            servers,
            Duration::from_secs(config.timeout_secs),
            config.udp_payload_size,
            config.tcp_fallback,
        ))
    }

    pub fn servers(&self) -> &[SocketAddr] {
        &self.servers
    }

    async fn exchange(
        &self,
        transport: &dyn DnsTransport,
        server: SocketAddr,
        query: &[u8],
    ) -> Result<(TxtResponse, TransportProtocol), DomainError> {
        let response = transport.send(query, self.timeout).await?;
        validate_response_id(query, &response.bytes, server)?;
        let parsed = ResponseParser::parse(&response.bytes)?;
        Ok((parsed, response.protocol_used))
    }

    async fn query_server(&self, server: SocketAddr, qname: &str) -> Result<TxtAnswer, DomainError> {
        let (id, query) = MessageBuilder::build_txt_query(qname, self.udp_payload_size)?;
        debug!(server = %server, qname = %qname, id = id, "Sending TXT query");

        let udp = UdpTransport::new(server, self.udp_payload_size);
        let (mut response, mut protocol) = self.exchange(&udp, server, &query).await?;

        if response.truncated {
            if self.tcp_fallback {
                warn!(server = %server, "UDP response truncated, retrying over TCP");
                let tcp = TcpTransport::new(server);
                (response, protocol) = self
                    .exchange(&tcp, server, &query)
                    .await
                    .map_err(|e| DomainError::TruncatedResponse {
                        server: server.to_string(),
                        reason: e.to_string(),
                    })?;
            } else {
                warn!(server = %server, "UDP response truncated and TCP fallback is disabled; answer may be incomplete");
            }
        }

        if !response.is_answer() {
            return Err(DomainError::ServerFailure {
                server: server.to_string(),
                rcode: ResponseParser::rcode_to_status(response.rcode).to_string(),
            });
        }

        Ok(TxtAnswer::new(response.records, server.to_string(), protocol))
    }
}

#[async_trait]
impl TxtResolver for UpstreamTxtResolver {
    async fn lookup_txt(&self, qname: &str) -> Result<TxtAnswer, DomainError> {
        let mut last_error = DomainError::NoServersConfigured;

        for server in &self.servers {
            match self.query_server(*server, qname).await {
                Ok(answer) => return Ok(answer),
                Err(e) => {
                    warn!(server = %server, error = %e, "DNS server failed, trying next");
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }
}
