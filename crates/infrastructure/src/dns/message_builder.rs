//! DNS Message Builder
//!
//! Constructs the `_for-sale` TXT query in wire format using `hickory-proto`.

use forsale_domain::DomainError;
use hickory_proto::op::{Edns, Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};

pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a recursive TXT query with a random ID and an EDNS(0) OPT record
    /// advertising `udp_payload_size`.
    ///
    /// Returns the query ID together with the serialized bytes.
    pub fn build_txt_query(
        qname: &str,
        udp_payload_size: u16,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let name = Name::from_ascii(qname).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid query name '{qname}': {e}"))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordType::TXT);
        query.set_query_class(DNSClass::IN);

        let mut edns = Edns::new();
        edns.set_max_payload(udp_payload_size);
        edns.set_version(0);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);
        message.set_edns(edns);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to serialize DNS query: {e}"))
        })?;

        Ok(buf)
    }
}
