use super::content_tag::ContentTag;
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Valid,
    Invalid,
    Ignored,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Valid => "VALID",
            Verdict::Invalid => "INVALID",
            Verdict::Ignored => "IGNORED",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `Info` and `Warning` are advisory; `Error` is blocking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn is_blocking(&self) -> bool {
        matches!(self, Severity::Error)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "Note",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity.label(), self.message)
    }
}

/// Concatenated, decoded character-strings of one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DecodedContent {
    #[serde(rename = "content", serialize_with = "lossy_text")]
    pub bytes: Vec<u8>,
    #[serde(rename = "raw_decoded_lens")]
    pub part_lengths: Vec<usize>,
    #[serde(rename = "concatenated_length")]
    pub total_length: usize,
}

impl DecodedContent {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

/// Verdict and diagnostics for one TXT record. Built once by the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedRecord {
    pub ttl: u32,
    pub raw_txts: Vec<String>,
    #[serde(flatten)]
    pub decoded: DecodedContent,
    pub fits_single_charstring: bool,
    pub multi_part: bool,
    pub verdict: Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<ContentTag>,
    #[serde(
        rename = "tag_value",
        skip_serializing_if = "Option::is_none",
        serialize_with = "lossy_opt_text"
    )]
    pub value: Option<Vec<u8>>,
    pub messages: Vec<Diagnostic>,
}

impl ClassifiedRecord {
    pub fn value_text(&self) -> Option<String> {
        self.value
            .as_deref()
            .map(|v| String::from_utf8_lossy(v).into_owned())
    }

    pub fn has_blocking_messages(&self) -> bool {
        self.messages.iter().any(|m| m.severity.is_blocking())
    }

    pub fn messages_with(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.messages.iter().filter(move |m| m.severity == severity)
    }
}

fn lossy_text<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(bytes))
}

fn lossy_opt_text<S: Serializer>(
    bytes: &Option<Vec<u8>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match bytes {
        Some(b) => lossy_text(b, serializer),
        None => serializer.serialize_none(),
    }
}
