use iterdns_domain::{DnsQuery, RecordType, ResourceRecord};
use std::sync::Arc;

/// Cache key: the (name, type) pair a set of records is stored under.
///
/// Names are already lowercased by the domain constructors, so plain
/// equality is the case-insensitive match.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl From<&DnsQuery> for CacheKey {
    fn from(query: &DnsQuery) -> Self {
        Self {
            domain: Arc::clone(&query.domain),
            record_type: query.record_type,
        }
    }
}

/// Every record is keyed under its own name and type, never under the
/// query that caused it to be learned.
impl From<&ResourceRecord> for CacheKey {
    fn from(record: &ResourceRecord) -> Self {
        Self {
            domain: Arc::from(record.name.as_str()),
            record_type: record.record_type,
        }
    }
}
