use async_trait::async_trait;
use iterdns_domain::{DnsQuery, DomainError, ResourceRecord};
use std::net::IpAddr;

#[async_trait]
pub trait DnsResolver: Send + Sync {
    /// Resolve one query iteratively, starting at the configured root
    /// server. An empty vec is the documented "no data" result; errors are
    /// reserved for conditions the caller may want to distinguish (bad
    /// input, exhausted indirection budget).
    async fn resolve(&self, query: &DnsQuery) -> Result<Vec<ResourceRecord>, DomainError>;

    /// Swap the root server the next resolution starts from.
    fn set_root_server(&self, addr: IpAddr);
}
