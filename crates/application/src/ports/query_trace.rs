use iterdns_domain::ResourceRecord;

/// Sink notified of every record at the moment it is cached.
///
/// The front end plugs in a printing implementation for `trace on`; the
/// default does nothing.
pub trait QueryTrace: Send + Sync {
    fn record_learned(&self, record: &ResourceRecord);
}

pub struct NoopTrace;

impl QueryTrace for NoopTrace {
    fn record_learned(&self, _record: &ResourceRecord) {}
}
