//! Builds `_for-sale` TXT records for a zone file, validated by the same
//! classifier the checker uses.

use crate::errors::DomainError;
use crate::for_sale_name::ForSaleName;
use crate::txt_record::validators::{self, Price};
use crate::txt_record::{
    presentation, ContentClassifier, ContentTag, Diagnostic, RawRecord, Severity, Verdict,
    MAX_CHARACTER_STRING, VERSION_TAG,
};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordContent {
    /// Version tag only.
    Bare,
    Pair(ContentTag, String),
}

impl RecordContent {
    pub fn pair(tag: ContentTag, value: impl Into<String>) -> Self {
        RecordContent::Pair(tag, value.into())
    }

    /// Decoded record content, version tag included.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = VERSION_TAG.to_vec();
        if let RecordContent::Pair(tag, value) = self {
            bytes.extend_from_slice(tag.as_str().as_bytes());
            bytes.push(b'=');
            bytes.extend_from_slice(value.as_bytes());
        }
        bytes
    }
}

impl fmt::Display for RecordContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordContent::Bare => f.write_str("(version tag only)"),
            RecordContent::Pair(tag, value) => write!(f, "{tag}={value}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedRecord {
    pub content: RecordContent,
    /// Character-string in presentation form, without surrounding quotes.
    pub presentation: String,
    pub warnings: Vec<Diagnostic>,
}

impl GeneratedRecord {
    pub fn build(content: RecordContent) -> Result<Self, DomainError> {
        let bytes = content.to_bytes();
        if bytes.len() > MAX_CHARACTER_STRING {
            return Err(DomainError::InvalidRecord(format!(
                "{content}: record content is {} octets, the maximum is {MAX_CHARACTER_STRING}",
                bytes.len()
            )));
        }

        let presentation = presentation::encode(&bytes);
        let classified = ContentClassifier::classify(&RawRecord::single(0, presentation.clone()));

        if let Some(error) = classified.messages_with(Severity::Error).next() {
            return Err(DomainError::InvalidRecord(format!("{content}: {}", error.message)));
        }
        if classified.verdict != Verdict::Valid {
            return Err(DomainError::InvalidRecord(format!(
                "{content}: classified as {}",
                classified.verdict
            )));
        }

        let mut warnings: Vec<Diagnostic> = classified
            .messages_with(Severity::Warning)
            .cloned()
            .collect();

        if let RecordContent::Pair(tag, value) = &content {
            let check = validators::validate(*tag, value.as_bytes());
            if check.lenient {
                let reason = check
                    .messages
                    .iter()
                    .rev()
                    .find(|m| m.severity == Severity::Warning)
                    .map(|m| m.message.clone())
                    .unwrap_or_else(|| "not a valid URI".to_string());
                return Err(DomainError::InvalidRecord(format!("{content}: {reason}")));
            }
            if *tag == ContentTag::Fval {
                warnings.extend(Price::parse(value).and_then(|p| validators::currency_style_hint(&p)));
            }
        }

        Ok(Self {
            content,
            presentation,
            warnings,
        })
    }

    pub fn zone_line(&self, name: &ForSaleName) -> String {
        format!("{} IN TXT \"{}\"", name.query_name(), self.presentation)
    }
}

/// Collects records for one domain, rejecting duplicate tag-value pairs.
#[derive(Debug, Clone)]
pub struct RecordSetBuilder {
    name: ForSaleName,
    records: Vec<GeneratedRecord>,
    seen: HashSet<RecordContent>,
}

impl RecordSetBuilder {
    pub fn new(name: ForSaleName) -> Self {
        Self {
            name,
            records: Vec::new(),
            seen: HashSet::new(),
        }
    }

    pub fn add(&mut self, content: RecordContent) -> Result<&GeneratedRecord, DomainError> {
        if self.seen.contains(&content) {
            return Err(DomainError::DuplicateRecord(content.to_string()));
        }
        let record = GeneratedRecord::build(content.clone())?;
        self.seen.insert(content);
        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    pub fn name(&self) -> &ForSaleName {
        &self.name
    }

    pub fn records(&self) -> &[GeneratedRecord] {
        &self.records
    }

    pub fn zone_snippet(&self) -> String {
        self.records
            .iter()
            .map(|r| r.zone_line(&self.name))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
