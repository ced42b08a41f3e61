//! DNS message builder
//!
//! Constructs single-question query datagrams in wire format. The header
//! carries a fresh random transaction id so the transport can match the
//! response against the in-flight query.

use super::name::write_name;
use super::{CLASS_IN, FLAGS_STANDARD_QUERY};
use iterdns_domain::{DnsQuery, DomainError};

pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a query message and return the transaction id with the bytes.
    ///
    /// Header: random id, standard-query flags with RD set, question count
    /// 1, every other count 0. Question: the name as length-prefixed
    /// labels, the type code, class IN. Fails only on names violating the
    /// structural limits; no I/O happens here.
    pub fn build_query(query: &DnsQuery) -> Result<(u16, Vec<u8>), DomainError> {
        let id = fastrand::u16(..);

        let mut buf = Vec::with_capacity(512);
        buf.extend_from_slice(&id.to_be_bytes());
        buf.extend_from_slice(&FLAGS_STANDARD_QUERY.to_be_bytes());
        buf.extend_from_slice(&1u16.to_be_bytes()); // QDCOUNT
        buf.extend_from_slice(&0u16.to_be_bytes()); // ANCOUNT
        buf.extend_from_slice(&0u16.to_be_bytes()); // NSCOUNT
        buf.extend_from_slice(&0u16.to_be_bytes()); // ARCOUNT

        write_name(&mut buf, &query.domain)?;
        buf.extend_from_slice(&query.record_type.to_u16().to_be_bytes());
        buf.extend_from_slice(&CLASS_IN.to_be_bytes());

        Ok((id, buf))
    }
}
