use async_trait::async_trait;
use bytes::Bytes;
use iterdns_domain::DomainError;
use std::net::SocketAddr;

/// One query/response round-trip with a single DNS server.
///
/// Implementations own the socket and the timeout policy. The first two
/// bytes of `query` are the transaction id; responses carrying a different
/// id must be discarded, not returned.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn exchange(&self, query: &[u8], server: SocketAddr) -> Result<Bytes, DomainError>;
}
