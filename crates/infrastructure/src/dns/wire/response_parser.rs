//! DNS response parser
//!
//! Decodes one received datagram into header fields and the three record
//! sections, resolving name-compression pointers along the way. Unsupported
//! record types are consumed byte-for-byte so the cursor stays aligned for
//! the records that follow them.

use super::cursor::Cursor;
use super::name::read_name;
use iterdns_domain::{DomainError, RecordType, ResourceRecord};
use tracing::debug;

/// A parsed response: header id and flags plus the three record lists.
#[derive(Debug)]
pub struct DnsResponse {
    pub id: u16,
    pub is_response: bool,
    pub authoritative: bool,
    pub rcode: u8,
    pub answers: Vec<ResourceRecord>,
    pub authority: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl DnsResponse {
    /// All records in section order: answer, authority, additional.
    pub fn records(&self) -> impl Iterator<Item = &ResourceRecord> {
        self.answers
            .iter()
            .chain(self.authority.iter())
            .chain(self.additionals.iter())
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(message: &[u8]) -> Result<DnsResponse, DomainError> {
        let mut cursor = Cursor::new(message);

        let id = cursor.read_u16()?;
        let flags = cursor.read_u16()?;
        let qdcount = cursor.read_u16()?;
        let ancount = cursor.read_u16()?;
        let nscount = cursor.read_u16()?;
        let arcount = cursor.read_u16()?;

        for _ in 0..qdcount {
            Self::skip_question(&mut cursor)?;
        }

        let answers = Self::parse_section(&mut cursor, ancount)?;
        let authority = Self::parse_section(&mut cursor, nscount)?;
        let additionals = Self::parse_section(&mut cursor, arcount)?;

        let response = DnsResponse {
            id,
            is_response: flags & 0x8000 != 0,
            authoritative: flags & 0x0400 != 0,
            rcode: (flags & 0x000F) as u8,
            answers,
            authority,
            additionals,
        };

        debug!(
            id = response.id,
            rcode = response.rcode,
            answers = response.answers.len(),
            authority = response.authority.len(),
            additionals = response.additionals.len(),
            "response parsed"
        );

        Ok(response)
    }

    /// The echoed question: a name (compression tolerated even though none
    /// is expected here) followed by type and class.
    fn skip_question(cursor: &mut Cursor<'_>) -> Result<(), DomainError> {
        read_name(cursor)?;
        cursor.read_u16()?;
        cursor.read_u16()?;
        Ok(())
    }

    fn parse_section(
        cursor: &mut Cursor<'_>,
        count: u16,
    ) -> Result<Vec<ResourceRecord>, DomainError> {
        let mut records = Vec::with_capacity(count as usize);
        for _ in 0..count {
            records.push(Self::parse_record(cursor)?);
        }
        Ok(records)
    }

    fn parse_record(cursor: &mut Cursor<'_>) -> Result<ResourceRecord, DomainError> {
        let name = read_name(cursor)?;
        let record_type = RecordType::from_u16(cursor.read_u16()?);
        let _class = cursor.read_u16()?;
        let ttl = cursor.read_u32()?;
        let rdlength = cursor.read_u16()? as usize;
        let rdata_end = cursor.pos() + rdlength;

        let data = match record_type {
            RecordType::A => {
                if rdlength != 4 {
                    return Err(DomainError::MalformedMessage(format!(
                        "A record with {}-byte rdata",
                        rdlength
                    )));
                }
                let octets = cursor.read_slice(4)?;
                format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3])
            }
            RecordType::AAAA => {
                if rdlength != 16 {
                    return Err(DomainError::MalformedMessage(format!(
                        "AAAA record with {}-byte rdata",
                        rdlength
                    )));
                }
                let bytes = cursor.read_slice(16)?;
                let groups: Vec<String> = bytes
                    .chunks_exact(2)
                    .map(|pair| format!("{:x}", u16::from_be_bytes([pair[0], pair[1]])))
                    .collect();
                groups.join(":")
            }
            RecordType::NS | RecordType::CNAME => read_name(cursor)?,
            RecordType::MX => {
                // Preference is consumed but not surfaced; the record text
                // is the exchange name only.
                cursor.read_u16()?;
                read_name(cursor)?
            }
            RecordType::Other(_) => {
                cursor.read_slice(rdlength)?;
                String::new()
            }
        };

        // Realign in case a compressed name ended short of RDLENGTH.
        cursor.seek(rdata_end)?;

        Ok(ResourceRecord::new(name, record_type, ttl, data))
    }
}
