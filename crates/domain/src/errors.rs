use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Domain {0} is in the .arpa hierarchy; _for-sale records there are out of scope")]
    ArpaDomain(String),

    #[error("Invalid _for-sale record: {0}")]
    InvalidRecord(String),

    #[error("Duplicate tag-value pair: {0}")]
    DuplicateRecord(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("UDP response from {server} was truncated and the TCP retry failed: {reason}")]
    TruncatedResponse { server: String, reason: String },

    #[error("Server {server} answered with {rcode}")]
    ServerFailure { server: String, rcode: String },

    #[error("Transport timeout talking to {server}")]
    TransportTimeout { server: String },

    #[error("Transport connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("Transport error with {server}: {reason}")]
    TransportFailed { server: String, reason: String },

    #[error("No DNS servers configured")]
    NoServersConfigured,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl DomainError {
    /// True for failures of the DNS exchange itself, as opposed to bad input.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::TruncatedResponse { .. }
                | DomainError::ServerFailure { .. }
                | DomainError::TransportTimeout { .. }
                | DomainError::TransportConnectionRefused { .. }
                | DomainError::TransportFailed { .. }
                | DomainError::InvalidDnsResponse(_)
                | DomainError::NoServersConfigured
        )
    }
}
