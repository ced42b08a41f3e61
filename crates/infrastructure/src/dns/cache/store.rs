use super::key::CacheKey;
use dashmap::DashMap;
use iterdns_application::ports::RecordStore;
use iterdns_domain::{DnsQuery, ResourceRecord};
use rustc_hash::FxBuildHasher;
use std::collections::HashSet;
use tracing::debug;

/// Process-wide record cache.
///
/// Entries live for the lifetime of the process; the TTL on each record is
/// advisory and nothing is purged. The DashMap backing keeps inserts atomic
/// per key, which is what a concurrent extension of the resolver would need
/// to preserve the glue-visible-before-needed ordering.
pub struct RecordCache {
    entries: DashMap<CacheKey, HashSet<ResourceRecord>, FxBuildHasher>,
}

impl RecordCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::with_hasher(FxBuildHasher::default()),
        }
    }

    pub fn lookup(&self, query: &DnsQuery) -> Vec<ResourceRecord> {
        self.entries
            .get(&CacheKey::from(query))
            .map(|entry| entry.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn insert(&self, record: ResourceRecord) {
        let key = CacheKey::from(&record);

        debug!(
            name = %record.name,
            record_type = %record.record_type,
            ttl = record.ttl,
            data = %record.data,
            "cached record"
        );

        // `replace` keeps set semantics while refreshing the TTL of an
        // already-known record.
        self.entries.entry(key).or_default().replace(record);
    }

    pub fn for_each(&self, visitor: &mut dyn FnMut(&ResourceRecord)) {
        for entry in self.entries.iter() {
            for record in entry.value() {
                visitor(record);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.iter().map(|entry| entry.value().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl Default for RecordCache {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for RecordCache {
    fn lookup(&self, query: &DnsQuery) -> Vec<ResourceRecord> {
        RecordCache::lookup(self, query)
    }

    fn insert(&self, record: ResourceRecord) {
        RecordCache::insert(self, record)
    }

    fn for_each(&self, visitor: &mut dyn FnMut(&ResourceRecord)) {
        RecordCache::for_each(self, visitor)
    }

    fn len(&self) -> usize {
        RecordCache::len(self)
    }
}
