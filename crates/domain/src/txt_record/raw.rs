use serde::{Deserialize, Serialize};

/// One TXT resource record as handed over by the transport: its TTL and the
/// character-strings in presentation form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    pub ttl: u32,
    pub strings: Vec<String>,
}

impl RawRecord {
    pub fn new(ttl: u32, strings: Vec<String>) -> Self {
        Self { ttl, strings }
    }

    pub fn single(ttl: u32, content: impl Into<String>) -> Self {
        Self {
            ttl,
            strings: vec![content.into()],
        }
    }
}
