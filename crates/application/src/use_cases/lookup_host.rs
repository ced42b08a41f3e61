use crate::ports::DnsResolver;
use iterdns_domain::{DnsQuery, RecordType, ResourceRecord};
use std::sync::Arc;
use tracing::warn;

/// Resolve all records for a host name and type.
///
/// The front end only ever renders record sets: every failure mode of the
/// resolution core (timeout, malformed response, indirection limit, bad
/// input) collapses to an empty result here, after being logged.
pub struct LookupHostUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl LookupHostUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self, host_name: &str, record_type: RecordType) -> Vec<ResourceRecord> {
        let query = DnsQuery::new(host_name, record_type);

        match self.resolver.resolve(&query).await {
            Ok(records) => records,
            Err(err) => {
                warn!(query = %query, error = %err, "lookup produced no result");
                Vec::new()
            }
        }
    }
}
