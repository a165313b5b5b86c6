use forsale_application::ports::TransportProtocol;
use forsale_application::use_cases::ForSaleCheck;
use forsale_domain::{Diagnostic, RRsetReport, RecordSetBuilder};
use serde::Serialize;

#[derive(Serialize)]
struct CheckDocument<'a> {
    query: &'a str,
    server: &'a str,
    protocol: TransportProtocol,
    #[serde(flatten)]
    report: &'a RRsetReport,
    summary: String,
}

#[derive(Serialize)]
struct GeneratedDocument<'a> {
    domain: &'a str,
    records: Vec<GeneratedEntry<'a>>,
}

#[derive(Serialize)]
struct GeneratedEntry<'a> {
    content: String,
    zone_line: String,
    warnings: &'a [Diagnostic],
}

pub fn render_check(check: &ForSaleCheck) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&CheckDocument {
        query: &check.query,
        server: &check.server,
        protocol: check.protocol_used,
        report: &check.report,
        summary: check.report.summary(),
    })
}

pub fn render_generated(set: &RecordSetBuilder) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&GeneratedDocument {
        domain: set.name().domain(),
        records: set
            .records()
            .iter()
            .map(|r| GeneratedEntry {
                content: r.presentation.clone(),
                zone_line: r.zone_line(set.name()),
                warnings: &r.warnings,
            })
            .collect(),
    })
}
