use super::RecordType;
use std::fmt;
use std::sync::Arc;

/// DNS query key (domain + record type).
///
/// Domain names are case-insensitive on the wire, so the constructor
/// lowercases the name once and every later comparison is a plain equality.
/// Uses `Arc<str>` for zero-cost cloning across resolver and cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(domain: &str, record_type: RecordType) -> Self {
        Self {
            domain: Arc::from(domain.to_lowercase()),
            record_type,
        }
    }
}

impl fmt::Display for DnsQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.domain, self.record_type)
    }
}
