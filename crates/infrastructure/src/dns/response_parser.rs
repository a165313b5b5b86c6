use forsale_domain::txt_record::presentation;
use forsale_domain::{DomainError, RawRecord};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RData;
use tracing::debug;

/// TXT answers of one DNS response, still carrying the header bits the
/// resolver acts on.
#[derive(Debug, Clone)]
pub struct TxtResponse {
    pub rcode: ResponseCode,
    pub truncated: bool,
    /// TXT records in answer order; other record types are dropped.
    pub records: Vec<RawRecord>,
}

impl TxtResponse {
    /// NXDOMAIN and NODATA both mean "no records here".
    pub fn is_answer(&self) -> bool {
        matches!(self.rcode, ResponseCode::NoError | ResponseCode::NXDomain)
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<TxtResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {e}"))
        })?;

        let rcode = message.response_code();
        let truncated = message.truncated();

        let mut records = Vec::new();
        let mut skipped = 0usize;
        for record in message.answers() {
            match record.data() {
                RData::TXT(txt) => {
                    let strings = txt
                        .txt_data()
                        .iter()
                        .map(|part| presentation::encode(part))
                        .collect();
                    records.push(RawRecord::new(record.ttl(), strings));
                }
                _ => skipped += 1,
            }
        }

        debug!(
            rcode = Self::rcode_to_status(rcode),
            truncated = truncated,
            txt_records = records.len(),
            skipped = skipped,
            "DNS response parsed"
        );

        Ok(TxtResponse {
            rcode,
            truncated,
            records,
        })
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
