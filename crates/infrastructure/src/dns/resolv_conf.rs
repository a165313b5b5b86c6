//! `nameserver` discovery from a resolv.conf file.

use forsale_domain::DomainError;
use std::net::IpAddr;

/// Collect `nameserver` addresses in file order. Comments, other options and
/// unparsable addresses are skipped; an IPv6 `%zone` suffix is dropped.
pub fn parse_nameservers(contents: &str) -> Vec<IpAddr> {
    contents
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.starts_with('#') || line.starts_with(';') {
                return None;
            }
            let mut fields = line.split_whitespace();
            if fields.next()? != "nameserver" {
                return None;
            }
            let addr = fields.next()?;
            let addr = addr.split('%').next().unwrap_or(addr);
            addr.parse().ok()
        })
        .collect()
}

pub fn read_nameservers(path: &str) -> Result<Vec<IpAddr>, DomainError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| DomainError::ConfigError(format!("Failed to read {path}: {e}")))?;
    Ok(parse_nameservers(&contents))
}
