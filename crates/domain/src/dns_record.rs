use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// DNS record types the resolver understands.
///
/// Anything outside the supported set is carried as `Other` with the raw
/// wire code, so unknown records stay representable for diagnostics instead
/// of becoming an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    NS,
    CNAME,
    MX,
    Other(u16),
}

impl RecordType {
    /// Convert from wire format number (RFC 1035)
    pub fn from_u16(value: u16) -> Self {
        match value {
            1 => RecordType::A,
            2 => RecordType::NS,
            5 => RecordType::CNAME,
            15 => RecordType::MX,
            28 => RecordType::AAAA,
            other => RecordType::Other(other),
        }
    }

    /// Convert to wire format number
    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::MX => 15,
            RecordType::AAAA => 28,
            RecordType::Other(code) => *code,
        }
    }

}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::A => write!(f, "A"),
            RecordType::AAAA => write!(f, "AAAA"),
            RecordType::NS => write!(f, "NS"),
            RecordType::CNAME => write!(f, "CNAME"),
            RecordType::MX => write!(f, "MX"),
            RecordType::Other(code) => write!(f, "{}", code),
        }
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "NS" => Ok(RecordType::NS),
            "CNAME" => Ok(RecordType::CNAME),
            "MX" => Ok(RecordType::MX),
            _ => Err(format!("Invalid record type: {}", s)),
        }
    }
}

/// One DNS answer: owner name, type, TTL and the decoded payload as text
/// (dotted IPv4, colon-grouped IPv6 hex, or a target domain name).
///
/// Built only by the response parser and never mutated afterwards. Identity
/// for set purposes is `(name, record_type, data)`; the TTL is excluded so
/// a re-learned record refreshes the stored TTL instead of duplicating the
/// entry.
#[derive(Debug, Clone)]
pub struct ResourceRecord {
    pub name: String,
    pub record_type: RecordType,
    pub ttl: u32,
    pub data: String,
}

impl ResourceRecord {
    pub fn new(name: impl Into<String>, record_type: RecordType, ttl: u32, data: impl Into<String>) -> Self {
        Self {
            name: name.into().to_lowercase(),
            record_type,
            ttl,
            data: data.into(),
        }
    }
}

impl PartialEq for ResourceRecord {
    fn eq(&self, other: &Self) -> bool {
        self.record_type == other.record_type && self.name == other.name && self.data == other.data
    }
}

impl Eq for ResourceRecord {}

impl Hash for ResourceRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.record_type.hash(state);
        self.data.hash(state);
    }
}
