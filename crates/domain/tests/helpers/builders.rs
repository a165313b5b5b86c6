#![allow(dead_code)]
use forsale_domain::RawRecord;

pub struct RawRecordBuilder {
    ttl: u32,
    strings: Vec<String>,
}

impl RawRecordBuilder {
    pub fn new() -> Self {
        Self {
            ttl: 300,
            strings: Vec::new(),
        }
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn part(mut self, part: &str) -> Self {
        self.strings.push(part.to_string());
        self
    }

    pub fn content(self, content: &str) -> Self {
        self.part(content)
    }

    pub fn build(self) -> RawRecord {
        RawRecord::new(self.ttl, self.strings)
    }
}

impl Default for RawRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn record(content: &str) -> RawRecord {
    RawRecordBuilder::new().content(content).build()
}

pub fn record_with_ttl(content: &str, ttl: u32) -> RawRecord {
    RawRecordBuilder::new().ttl(ttl).content(content).build()
}
