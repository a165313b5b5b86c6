//! Zone-file presentation format for TXT character-strings (RFC 1035 §5.1).
//!
//! Decoding turns `\DDD` decimal escapes and backslash-escaped literals back
//! into raw octets. It is best-effort: a bad escape is reported but never
//! stops the rest of the string from being decoded.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PresentationError {
    #[error("escaped decimal value \\{digits} at offset {offset} is out of range (0-255)")]
    EscapeOutOfRange { offset: usize, digits: String },
}

/// Result of decoding one presentation-form string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Unescaped {
    pub bytes: Vec<u8>,
    pub errors: Vec<PresentationError>,
}

impl Unescaped {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Decode a presentation-form character-string into raw octets.
pub fn decode(input: &str) -> Unescaped {
    let src = input.as_bytes();
    let mut out = Unescaped {
        bytes: Vec::with_capacity(src.len()),
        errors: Vec::new(),
    };

    let mut i = 0;
    while i < src.len() {
        let c = src[i];
        if c != b'\\' {
            out.bytes.push(c);
            i += 1;
            continue;
        }

        let escape_at = i;
        i += 1;
        let Some(&next) = src.get(i) else {
            // lone trailing backslash
            out.bytes.push(b'\\');
            break;
        };

        if next.is_ascii_digit() {
            let end = src[i..]
                .iter()
                .take(3)
                .take_while(|b| b.is_ascii_digit())
                .count()
                + i;
            let value = src[i..end]
                .iter()
                .fold(0u32, |acc, d| acc * 10 + u32::from(d - b'0'));
            match u8::try_from(value) {
                Ok(byte) => out.bytes.push(byte),
                Err(_) => out.errors.push(PresentationError::EscapeOutOfRange {
                    offset: escape_at,
                    digits: String::from_utf8_lossy(&src[i..end]).into_owned(),
                }),
            }
            i = end;
            continue;
        }

        out.bytes.push(next);
        i += 1;
    }

    out
}

/// Encode raw octets as a presentation-form character-string (without the
/// surrounding quotes). `"` and `\` are backslash-escaped, anything outside
/// printable ASCII becomes `\DDD`.
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        match b {
            b'"' | b'\\' => {
                out.push('\\');
                out.push(char::from(b));
            }
            0x20..=0x7e => out.push(char::from(b)),
            _ => out.push_str(&format!("\\{b:03}")),
        }
    }
    out
}
