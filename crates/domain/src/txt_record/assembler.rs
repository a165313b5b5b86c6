use super::presentation;
use super::verdict::{DecodedContent, Diagnostic};

/// Maximum octets in one DNS character-string.
pub const MAX_CHARACTER_STRING: usize = 255;

/// A record's character-strings decoded and joined, with the diagnostics
/// raised while doing so.
#[derive(Debug, Clone, Default)]
pub struct Assembly {
    pub decoded: DecodedContent,
    pub fits_single_charstring: bool,
    pub multi_part: bool,
    pub messages: Vec<Diagnostic>,
}

impl Assembly {
    pub fn is_blocking(&self) -> bool {
        self.messages.iter().any(|m| m.severity.is_blocking())
    }
}

pub fn assemble(strings: &[String]) -> Assembly {
    let mut assembly = Assembly::default();

    for part in strings {
        let unescaped = presentation::decode(part);
        for err in &unescaped.errors {
            assembly.messages.push(Diagnostic::warning(format!(
                "error while unescaping presentation string: {err}"
            )));
        }
        assembly.decoded.part_lengths.push(unescaped.bytes.len());
        assembly.decoded.bytes.extend_from_slice(&unescaped.bytes);
    }

    let total = assembly.decoded.bytes.len();
    assembly.decoded.total_length = total;
    assembly.fits_single_charstring = total <= MAX_CHARACTER_STRING;
    assembly.multi_part = strings.len() > 1;

    if assembly.multi_part {
        assembly.messages.push(Diagnostic::warning(format!(
            "TXT RR contains {} character-strings (multi-part RR); a single character-string is RECOMMENDED to avoid ambiguity",
            strings.len()
        )));
        for (i, len) in assembly.decoded.part_lengths.iter().enumerate() {
            if *len > MAX_CHARACTER_STRING {
                assembly.messages.push(Diagnostic::error(format!(
                    "character-string #{i} decodes to {len} octets, exceeding the {MAX_CHARACTER_STRING}-octet maximum"
                )));
            }
        }
    }

    if total > MAX_CHARACTER_STRING {
        assembly.messages.push(Diagnostic::error(format!(
            "decoded content is {total} octets, exceeding {MAX_CHARACTER_STRING}; the record data MUST be a single character-string"
        )));
    }

    assembly
}
