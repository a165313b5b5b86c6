#![allow(dead_code)]
//! Hand-assembled DNS responses for parser and resolver tests.

pub const RCODE_NOERROR: u8 = 0;
pub const RCODE_SERVFAIL: u8 = 2;
pub const RCODE_NXDOMAIN: u8 = 3;
pub const RCODE_REFUSED: u8 = 5;

#[derive(Debug, Clone, Default)]
pub struct ResponseSpec {
    pub rcode: u8,
    pub truncated: bool,
    /// `(ttl, character-strings)` per TXT record.
    pub txt_records: Vec<(u32, Vec<Vec<u8>>)>,
    /// Adds an A record after the TXT records.
    pub with_a_record: bool,
    /// Added to the query ID to provoke a mismatch.
    pub id_offset: u16,
}

impl ResponseSpec {
    pub fn noerror() -> Self {
        Self::default()
    }

    pub fn rcode(rcode: u8) -> Self {
        Self {
            rcode,
            ..Self::default()
        }
    }

    pub fn txt(mut self, ttl: u32, strings: &[&str]) -> Self {
        self.txt_records
            .push((ttl, strings.iter().map(|s| s.as_bytes().to_vec()).collect()));
        self
    }

    pub fn txt_bytes(mut self, ttl: u32, strings: Vec<Vec<u8>>) -> Self {
        self.txt_records.push((ttl, strings));
        self
    }

    pub fn truncated(mut self) -> Self {
        self.truncated = true;
        self
    }

    pub fn with_a_record(mut self) -> Self {
        self.with_a_record = true;
        self
    }

    pub fn wrong_id(mut self) -> Self {
        self.id_offset = 1;
        self
    }
}

/// Offset just past the first question of a wire-format message.
fn question_end(query: &[u8]) -> usize {
    let mut i = 12;
    while i < query.len() {
        let len = usize::from(query[i]);
        if len == 0 {
            i += 1;
            break;
        }
        i += 1 + len;
    }
    i + 4
}

pub fn build_response(query: &[u8], spec: &ResponseSpec) -> Vec<u8> {
    let mut r = Vec::with_capacity(512);

    let id = u16::from_be_bytes([query[0], query[1]]).wrapping_add(spec.id_offset);
    r.extend_from_slice(&id.to_be_bytes());

    let mut flags = 0x81u8; // QR + RD
    if spec.truncated {
        flags |= 0x02;
    }
    r.push(flags);
    r.push(0x80 | (spec.rcode & 0x0f)); // RA + RCODE

    let answers = spec.txt_records.len() + usize::from(spec.with_a_record);
    r.extend_from_slice(&[0x00, 0x01]);
    r.extend_from_slice(&(answers as u16).to_be_bytes());
    r.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

    r.extend_from_slice(&query[12..question_end(query)]);

    for (ttl, strings) in &spec.txt_records {
        r.extend_from_slice(&[0xc0, 0x0c, 0x00, 0x10, 0x00, 0x01]);
        r.extend_from_slice(&ttl.to_be_bytes());
        let mut rdata = Vec::new();
        for s in strings {
            rdata.push(s.len() as u8);
            rdata.extend_from_slice(s);
        }
        r.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        r.extend_from_slice(&rdata);
    }

    if spec.with_a_record {
        r.extend_from_slice(&[0xc0, 0x0c, 0x00, 0x01, 0x00, 0x01]);
        r.extend_from_slice(&300u32.to_be_bytes());
        r.extend_from_slice(&[0x00, 0x04, 192, 0, 2, 1]);
    }

    r
}
