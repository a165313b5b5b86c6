//! Turns one raw TXT record into a verdict.
//!
//! Stages: version check, then either the bare indicator or a tag-value
//! split, then the per-tag validator. Problems found while assembling the
//! character-strings (oversized content) force `Invalid` once the version
//! tag has been recognised.

use super::assembler::{self, Assembly};
use super::content_tag::ContentTag;
use super::raw::RawRecord;
use super::validators;
use super::verdict::{ClassifiedRecord, Diagnostic, Verdict};

pub const VERSION_TAG: &[u8] = b"v=FORSALE1;";

/// TTLs above this risk serving stale sale information.
pub const RECOMMENDED_MAX_TTL: u32 = 3600;

pub struct ContentClassifier;

impl ContentClassifier {
    pub fn classify(record: &RawRecord) -> ClassifiedRecord {
        let mut messages = Vec::new();

        if record.ttl > RECOMMENDED_MAX_TTL {
            messages.push(Diagnostic::warning(format!(
                "observed TTL={} exceeds the recommended {RECOMMENDED_MAX_TTL}s; this value may come from a resolver cache rather than the authoritative server",
                record.ttl
            )));
        }

        if record.strings.is_empty() {
            messages.push(Diagnostic::error("TXT RR contains zero character-strings (no content)"));
            return ClassifiedRecord {
                ttl: record.ttl,
                raw_txts: Vec::new(),
                decoded: Default::default(),
                fits_single_charstring: true,
                multi_part: false,
                verdict: Verdict::Invalid,
                tag: None,
                value: None,
                messages,
            };
        }

        let Assembly {
            decoded,
            fits_single_charstring,
            multi_part,
            messages: assembly_messages,
        } = assembler::assemble(&record.strings);
        let assembly_blocking = assembly_messages.iter().any(|m| m.severity.is_blocking());
        messages.extend(assembly_messages);

        let outcome = classify_content(&decoded.bytes);
        messages.extend(outcome.messages);

        let verdict = match outcome.verdict {
            Verdict::Valid if assembly_blocking => Verdict::Invalid,
            other => other,
        };

        ClassifiedRecord {
            ttl: record.ttl,
            raw_txts: record.strings.clone(),
            decoded,
            fits_single_charstring,
            multi_part,
            verdict,
            tag: outcome.tag,
            value: outcome.value,
            messages,
        }
    }
}

struct ContentOutcome {
    verdict: Verdict,
    tag: Option<ContentTag>,
    value: Option<Vec<u8>>,
    messages: Vec<Diagnostic>,
}

impl ContentOutcome {
    fn new(verdict: Verdict, messages: Vec<Diagnostic>) -> Self {
        Self {
            verdict,
            tag: None,
            value: None,
            messages,
        }
    }
}

fn classify_content(content: &[u8]) -> ContentOutcome {
    let mut messages = Vec::new();

    let Some(mut rest) = content.strip_prefix(VERSION_TAG) else {
        messages.push(Diagnostic::info(
            "no valid version tag at the start of the record; without the exact, case-sensitive \"v=FORSALE1;\" the record is not a _for-sale indicator and is ignored",
        ));
        return ContentOutcome::new(Verdict::Ignored, messages);
    };

    if let Some((&(b' ' | b'\t'), after)) = rest.split_first() {
        messages.push(Diagnostic::warning(
            "version tag is followed by whitespace; accepted for robustness, but the record grammar does not allow it",
        ));
        rest = after;
    }

    if rest.is_empty() {
        messages.push(Diagnostic::info(
            "record contains only the version tag: a valid indicator that the domain is for sale, with no further details",
        ));
        return ContentOutcome::new(Verdict::Valid, messages);
    }

    let Some((tag, value)) = ContentTag::split_pair(rest) else {
        messages.push(Diagnostic::warning(format!(
            "content does not start with a recognised content tag (fcod=, ftxt=, furi=, fval=); found {:?}",
            String::from_utf8_lossy(rest)
        )));
        messages.push(Diagnostic::info(
            "the version tag is valid, so the domain is still treated as for sale despite the unrecognised content",
        ));
        return ContentOutcome::new(Verdict::Valid, messages);
    };

    for other in ContentTag::ALL {
        let marker = other.embedded_marker();
        if contains(value, marker.as_bytes()) {
            messages.push(Diagnostic::warning(format!(
                "the value contains \"{marker}\", which looks like a second tag-value pair; only one pair per record is allowed"
            )));
        }
    }

    let check = validators::validate(tag, value);
    messages.extend(check.messages);

    ContentOutcome {
        verdict: if check.accepted {
            Verdict::Valid
        } else {
            Verdict::Invalid
        },
        tag: Some(tag),
        value: Some(value.to_vec()),
        messages,
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}
