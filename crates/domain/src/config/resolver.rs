use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Explicit servers (`ip` or `ip:port`). Empty means use `resolv_conf`.
    #[serde(default)]
    pub servers: Vec<String>,

    #[serde(default = "default_resolv_conf")]
    pub resolv_conf: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_udp_payload_size")]
    pub udp_payload_size: u16,

    #[serde(default = "default_true")]
    pub tcp_fallback: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            servers: vec![],
            resolv_conf: default_resolv_conf(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            udp_payload_size: default_udp_payload_size(),
            tcp_fallback: true,
        }
    }
}

impl ResolverConfig {
    /// Parse `ip`, `ip:port` or `[ipv6]:port`, defaulting to the configured port.
    pub fn parse_server(&self, server: &str) -> Option<SocketAddr> {
        let server = server.trim();
        if let Ok(addr) = server.parse::<SocketAddr>() {
            return Some(addr);
        }
        server
            .trim_start_matches('[')
            .trim_end_matches(']')
            .parse::<IpAddr>()
            .ok()
            .map(|ip| SocketAddr::new(ip, self.port))
    }
}

fn default_resolv_conf() -> String {
    "/etc/resolv.conf".to_string()
}

fn default_port() -> u16 {
    53
}

fn default_timeout_secs() -> u64 {
    5
}

fn default_udp_payload_size() -> u16 {
    4096
}

fn default_true() -> bool {
    true
}
