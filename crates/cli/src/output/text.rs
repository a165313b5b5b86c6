//! Human-readable rendering, grouped VALID, INVALID, IGNORED.

use forsale_application::use_cases::ForSaleCheck;
use forsale_domain::txt_record::validators::Price;
use forsale_domain::{ClassifiedRecord, ContentTag, RecordSetBuilder, Verdict};
use std::fmt;

pub struct TextReport<'a> {
    check: &'a ForSaleCheck,
}

impl<'a> TextReport<'a> {
    pub fn new(check: &'a ForSaleCheck) -> Self {
        Self { check }
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let check = self.check;
        let report = &check.report;

        if report.is_empty() {
            writeln!(
                f,
                "No TXT records found at {} (via {} over {})",
                check.query, check.server, check.protocol_used
            )?;
        } else {
            writeln!(
                f,
                "Found {} TXT record(s) at {} (via {} over {})",
                report.total(),
                check.query,
                check.server,
                check.protocol_used
            )?;
        }
        writeln!(f)?;

        for (n, entry) in report.records.iter().enumerate() {
            write_record(f, n + 1, &entry.record)?;
            writeln!(f)?;
        }

        for diagnostic in &report.diagnostics {
            writeln!(f, "{diagnostic}")?;
        }
        if report.ttl_histogram.len() > 1 {
            writeln!(f, "TTLs seen:")?;
            for (ttl, count) in &report.ttl_histogram {
                writeln!(f, "  TTL {ttl}: {count} record(s)")?;
            }
        }
        if !report.diagnostics.is_empty() {
            writeln!(f)?;
        }

        writeln!(f, "Summary: {}", report.summary())
    }
}

fn write_record(f: &mut fmt::Formatter<'_>, n: usize, record: &ClassifiedRecord) -> fmt::Result {
    writeln!(
        f,
        "Record #{n} (TTL={}, raw-strings={}, concatenated-bytes={}, fits_single_charstring={}):",
        record.ttl,
        record.raw_txts.len(),
        record.decoded.total_length,
        record.fits_single_charstring
    )?;

    for (i, raw) in record.raw_txts.iter().enumerate() {
        let decoded_len = record.decoded.part_lengths.get(i).copied().unwrap_or(0);
        writeln!(f, "  Raw Txt[{i}] (decoded-len={decoded_len}): \"{raw}\"")?;
    }

    if record.decoded.bytes.is_empty() {
        writeln!(f, "  Decoded content: <empty>")?;
    } else {
        writeln!(
            f,
            "  Decoded content (len={}): {}",
            record.decoded.total_length,
            printable(&record.decoded.text())
        )?;
    }

    match record.verdict {
        Verdict::Ignored => writeln!(f, "  Verdict: IGNORED (no valid version tag found)")?,
        verdict => writeln!(f, "  Verdict: {verdict}")?,
    }

    match (record.tag, record.value_text()) {
        (Some(tag), Some(value)) => {
            writeln!(f, "  Content tag: {tag}")?;
            writeln!(
                f,
                "  Content value (len={}): {}",
                record.value.as_ref().map_or(0, Vec::len),
                printable(&value)
            )?;
            if tag == ContentTag::Fval && record.verdict == Verdict::Valid {
                if let Some(price) = Price::parse(&value) {
                    writeln!(f, "  Price: {price}")?;
                }
            }
        }
        _ if record.verdict != Verdict::Ignored => {
            writeln!(f, "  No recognised content tag present")?;
        }
        _ => {}
    }

    for message in &record.messages {
        writeln!(f, "  - {message}")?;
    }
    Ok(())
}

/// Control characters are shown escaped so they cannot drive the terminal.
fn printable(text: &str) -> String {
    text.chars()
        .flat_map(|c| {
            let escaped: Vec<char> = if c.is_control() {
                c.escape_default().collect()
            } else {
                vec![c]
            };
            escaped
        })
        .collect()
}

/// Zone-file snippet plus any warnings, for `generate`.
pub struct GeneratedSnippet<'a> {
    set: &'a RecordSetBuilder,
}

impl<'a> GeneratedSnippet<'a> {
    pub fn new(set: &'a RecordSetBuilder) -> Self {
        Self { set }
    }
}

impl fmt::Display for GeneratedSnippet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in self.set.records() {
            for warning in &record.warnings {
                writeln!(f, "; {} ({})", warning, record.content)?;
            }
        }
        writeln!(f, "{}", self.set.zone_snippet())
    }
}
