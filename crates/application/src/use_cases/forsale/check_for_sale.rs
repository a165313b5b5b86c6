use crate::ports::{TransportProtocol, TxtResolver};
use forsale_domain::{DomainError, ForSaleName, RRsetAnalyzer, RRsetReport};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Outcome of checking one domain.
#[derive(Debug, Clone)]
pub struct ForSaleCheck {
    pub name: ForSaleName,
    pub query: String,
    pub server: String,
    pub protocol_used: TransportProtocol,
    pub report: RRsetReport,
}

impl ForSaleCheck {
    pub fn is_for_sale(&self) -> bool {
        self.report.any_valid()
    }
}

pub struct CheckForSaleUseCase {
    resolver: Arc<dyn TxtResolver>,
}

impl CheckForSaleUseCase {
    pub fn new(resolver: Arc<dyn TxtResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self, domain: &str) -> Result<ForSaleCheck, DomainError> {
        let name = ForSaleName::parse(domain)?;
        let query = name.query_name();
        let start = Instant::now();

        let answer = self.resolver.lookup_txt(&query).await?;

        debug!(
            query = %query,
            server = %answer.server,
            protocol = %answer.protocol_used,
            records = answer.records.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "TXT answer received"
        );

        let report = RRsetAnalyzer::analyze(&answer.records);

        info!(
            domain = %name,
            valid = report.valid_count,
            invalid = report.invalid_count,
            ignored = report.ignored_count,
            "_for-sale check complete"
        );

        Ok(ForSaleCheck {
            name,
            query,
            server: answer.server,
            protocol_used: answer.protocol_used,
            report,
        })
    }
}
