use crate::errors::DomainError;
use std::fmt;

pub const FOR_SALE_LABEL: &str = "_for-sale";

const MAX_DOMAIN_LENGTH: usize = 253;

/// A domain accepted for a `_for-sale` lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForSaleName {
    domain: String,
}

impl ForSaleName {
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        let domain = trimmed.strip_suffix('.').unwrap_or(trimmed);

        if domain.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "Domain cannot be empty".to_string(),
            ));
        }
        if domain.len() > MAX_DOMAIN_LENGTH {
            return Err(DomainError::InvalidDomainName(format!(
                "Domain cannot exceed {MAX_DOMAIN_LENGTH} characters"
            )));
        }
        let valid = domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.' || c == '_');
        if !valid || domain.split('.').any(str::is_empty) {
            return Err(DomainError::InvalidDomainName(format!(
                "{domain} (only alphanumerics, hyphens, underscores and non-empty dot-separated labels are allowed)"
            )));
        }

        let lower = domain.to_ascii_lowercase();
        if lower == "arpa" || lower.ends_with(".arpa") {
            return Err(DomainError::ArpaDomain(domain.to_string()));
        }

        Ok(Self {
            domain: domain.to_string(),
        })
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Absolute query name, e.g. `_for-sale.example.com.`
    pub fn query_name(&self) -> String {
        format!("{FOR_SALE_LABEL}.{}.", self.domain)
    }
}

impl fmt::Display for ForSaleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.domain)
    }
}
