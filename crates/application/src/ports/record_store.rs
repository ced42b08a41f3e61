use iterdns_domain::{DnsQuery, ResourceRecord};

/// Cache surface shared by the resolver (read/write) and the front end
/// (read-only dump).
pub trait RecordStore: Send + Sync {
    /// Records stored for this exact (name, type) key; empty when unknown.
    fn lookup(&self, query: &DnsQuery) -> Vec<ResourceRecord>;

    /// Insert under the record's own (name, type) key. Set semantics:
    /// re-inserting an identical record only refreshes its TTL.
    fn insert(&self, record: ResourceRecord);

    /// Visit every cached record, for diagnostics.
    fn for_each(&self, visitor: &mut dyn FnMut(&ResourceRecord));

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
