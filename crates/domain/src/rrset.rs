//! Answer-set level analysis: per-record classification plus the checks
//! that only make sense across the whole RRset.

use crate::txt_record::{
    ClassifiedRecord, ContentClassifier, ContentTag, Diagnostic, RawRecord, Verdict,
    RECOMMENDED_MAX_TTL,
};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// A classified record together with its position in the original answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    pub index: usize,
    #[serde(flatten)]
    pub record: ClassifiedRecord,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RRsetReport {
    /// Valid, then Invalid, then Ignored; answer order within each group.
    pub records: Vec<ReportEntry>,
    #[serde(rename = "ttl_counts")]
    pub ttl_histogram: BTreeMap<u32, usize>,
    pub diagnostics: Vec<Diagnostic>,
    pub valid_count: usize,
    pub invalid_count: usize,
    pub ignored_count: usize,
}

impl RRsetReport {
    pub fn total(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The sole determinant of "this domain is for sale".
    pub fn any_valid(&self) -> bool {
        self.valid_count > 0
    }

    pub fn group(&self, verdict: Verdict) -> impl Iterator<Item = &ReportEntry> {
        self.records
            .iter()
            .filter(move |e| e.record.verdict == verdict)
    }

    pub fn summary(&self) -> String {
        format!(
            "{} record(s) total: {} valid, {} ignored (no version), {} invalid",
            self.total(),
            self.valid_count,
            self.ignored_count,
            self.invalid_count
        )
    }
}

pub struct RRsetAnalyzer;

impl RRsetAnalyzer {
    pub fn analyze(records: &[RawRecord]) -> RRsetReport {
        let classified: Vec<ReportEntry> = records
            .iter()
            .enumerate()
            .map(|(index, raw)| ReportEntry {
                index,
                record: ContentClassifier::classify(raw),
            })
            .collect();
        Self::aggregate(classified)
    }

    /// Reduce already-classified records into a report. Entries may arrive in
    /// any order; their `index` restores answer order.
    pub fn aggregate(mut entries: Vec<ReportEntry>) -> RRsetReport {
        entries.sort_by_key(|e| (verdict_rank(e.record.verdict), e.index));

        let mut report = RRsetReport::default();
        for entry in &entries {
            match entry.record.verdict {
                Verdict::Valid => report.valid_count += 1,
                Verdict::Invalid => report.invalid_count += 1,
                Verdict::Ignored => report.ignored_count += 1,
            }
            if entry.record.ttl > 0 {
                *report.ttl_histogram.entry(entry.record.ttl).or_default() += 1;
            }
        }

        report.diagnostics.extend(ttl_diagnostics(&report.ttl_histogram));
        report.diagnostics.extend(duplicate_diagnostics(&entries));
        report.records = entries;
        report
    }
}

fn verdict_rank(verdict: Verdict) -> u8 {
    match verdict {
        Verdict::Valid => 0,
        Verdict::Invalid => 1,
        Verdict::Ignored => 2,
    }
}

fn ttl_diagnostics(histogram: &BTreeMap<u32, usize>) -> Option<Diagnostic> {
    if histogram.len() > 1 {
        let seen = histogram
            .iter()
            .map(|(ttl, count)| format!("TTL {ttl}: {count} record(s)"))
            .collect::<Vec<_>>()
            .join(", ");
        return Some(Diagnostic::warning(format!(
            "TXT RRset contains records with differing TTLs (RFC 2181 §5.2 requires one TTL per RRset); {seen}"
        )));
    }

    histogram
        .keys()
        .next()
        .filter(|ttl| **ttl > RECOMMENDED_MAX_TTL)
        .map(|ttl| {
            Diagnostic::warning(format!(
                "TTL={ttl} is greater than the recommended {RECOMMENDED_MAX_TTL}s; long TTLs increase the risk of outdated sale information"
            ))
        })
}

fn duplicate_diagnostics(entries: &[ReportEntry]) -> Vec<Diagnostic> {
    let mut seen: HashMap<(ContentTag, &[u8]), usize> = HashMap::new();
    let mut order = Vec::new();

    for entry in entries {
        if entry.record.verdict == Verdict::Ignored {
            continue;
        }
        if let (Some(tag), Some(value)) = (entry.record.tag, entry.record.value.as_deref()) {
            let count = seen.entry((tag, value)).or_default();
            *count += 1;
            if *count == 2 {
                order.push((tag, value));
            }
        }
    }

    order
        .into_iter()
        .map(|(tag, value)| {
            Diagnostic::warning(format!(
                "duplicate tag-value pair {tag}={} appears {} times in the RRset",
                String::from_utf8_lossy(value),
                seen[&(tag, value)]
            ))
        })
        .collect()
}
