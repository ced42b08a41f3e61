//! Iterative DNS resolver
//!
//! Walks the delegation chain itself, starting at a configured root server:
//! cache short-circuit, query, then either answers, an alias to chase from
//! the root, or a referral whose name server address comes from glue in the
//! cache or a fresh address resolution.

use super::super::cache::RecordCache;
use super::super::wire::{DnsResponse, MessageBuilder, ResponseParser};
use async_trait::async_trait;
use iterdns_application::ports::{DnsResolver, DnsTransport, QueryTrace};
use iterdns_domain::{DnsQuery, DomainError, RecordType, ResourceRecord};
use std::future::Future;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::pin::Pin;
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

/// Budget shared by CNAME hops and glueless NS-address resolutions.
const MAX_INDIRECTION: u32 = 10;

/// Cap on referral hops within one query; a delegation chain deeper than
/// this is a server loop, not a real hierarchy.
const MAX_REFERRALS: u32 = 16;

type RecordsFuture<'a> = Pin<Box<dyn Future<Output = Result<Vec<ResourceRecord>, DomainError>> + Send + 'a>>;

pub struct IterativeResolver {
    transport: Arc<dyn DnsTransport>,
    cache: Arc<RecordCache>,
    trace: Arc<dyn QueryTrace>,
    root_server: RwLock<IpAddr>,
    dns_port: u16,
}

impl IterativeResolver {
    pub fn new(
        transport: Arc<dyn DnsTransport>,
        cache: Arc<RecordCache>,
        trace: Arc<dyn QueryTrace>,
        root_server: IpAddr,
        dns_port: u16,
    ) -> Self {
        Self {
            transport,
            cache,
            trace,
            root_server: RwLock::new(root_server),
            dns_port,
        }
    }

    fn root_addr(&self) -> SocketAddr {
        let ip = *self.root_server.read().unwrap();
        SocketAddr::new(ip, self.dns_port)
    }

    /// One round-trip with `server`. Every record of the response, from
    /// all three sections, is cached under its own key and reported to the
    /// trace sink before any decision is made, so glue is visible by the
    /// time a referral needs it.
    async fn query_server(
        &self,
        query: &DnsQuery,
        server: SocketAddr,
    ) -> Result<DnsResponse, DomainError> {
        let (id, message) = MessageBuilder::build_query(query)?;
        debug!(query = %query, server = %server, id = id, "querying server");

        let response_bytes = self.transport.exchange(&message, server).await?;
        let response = ResponseParser::parse(&response_bytes)?;

        for record in response.records() {
            self.cache.insert(record.clone());
            self.trace.record_learned(record);
        }

        Ok(response)
    }

    /// The recursive entry point. Boxed because the alias and glue branches
    /// re-enter it with a deeper indirection level.
    fn resolve_node(&self, query: DnsQuery, indirection: u32) -> RecordsFuture<'_> {
        Box::pin(async move {
            if indirection > MAX_INDIRECTION {
                warn!(query = %query, "maximum number of indirection levels reached");
                return Err(DomainError::IndirectionLimitExceeded);
            }

            let cached = self.cache.lookup(&query);
            if !cached.is_empty() {
                debug!(query = %query, records = cached.len(), "served from cache");
                return Ok(cached);
            }

            let mut server = self.root_addr();

            for _ in 0..MAX_REFERRALS {
                let response = match self.query_server(&query, server).await {
                    Ok(response) => response,
                    Err(err) if err.is_recoverable() => {
                        debug!(query = %query, server = %server, error = %err, "no usable answer from server");
                        return Ok(Vec::new());
                    }
                    Err(err) => return Err(err),
                };

                // Exact-type answers for the queried name settle it.
                let answers: Vec<ResourceRecord> = response
                    .answers
                    .iter()
                    .filter(|r| r.record_type == query.record_type && r.name == *query.domain)
                    .cloned()
                    .collect();
                if !answers.is_empty() {
                    return Ok(answers);
                }

                // An alias restarts the walk from the root for the target,
                // keeping the originally queried type.
                if query.record_type != RecordType::CNAME {
                    if let Some(alias) = response
                        .answers
                        .iter()
                        .find(|r| r.record_type == RecordType::CNAME && r.name == *query.domain)
                    {
                        debug!(query = %query, target = %alias.data, "following alias");
                        let target = DnsQuery::new(&alias.data, query.record_type);
                        return self.resolve_node(target, indirection + 1).await;
                    }
                }

                // A referral without an answer: move to a delegated server.
                let ns_targets: Vec<String> = response
                    .authority
                    .iter()
                    .filter(|r| r.record_type == RecordType::NS)
                    .map(|r| r.data.clone())
                    .collect();
                if ns_targets.is_empty() {
                    debug!(query = %query, server = %server, "no answer and no delegation");
                    return Ok(Vec::new());
                }

                match self.delegated_server(&ns_targets, indirection).await? {
                    Some(address) => {
                        debug!(query = %query, next_server = %address, "following referral");
                        server = SocketAddr::new(address, self.dns_port);
                    }
                    None => {
                        debug!(query = %query, "delegation without resolvable name server");
                        return Ok(Vec::new());
                    }
                }
            }

            warn!(query = %query, "referral chain too long, giving up");
            Ok(Vec::new())
        })
    }

    /// Address of one of the delegated name servers: glue cached from the
    /// additional section first, then a fresh resolution of each NS target
    /// under the same indirection budget.
    async fn delegated_server(
        &self,
        ns_targets: &[String],
        indirection: u32,
    ) -> Result<Option<IpAddr>, DomainError> {
        for target in ns_targets {
            let glue = self.cache.lookup(&DnsQuery::new(target, RecordType::A));
            if let Some(address) = first_ipv4(&glue) {
                return Ok(Some(address));
            }
        }

        for target in ns_targets {
            let query = DnsQuery::new(target, RecordType::A);
            match self.resolve_node(query, indirection + 1).await {
                Ok(records) => {
                    if let Some(address) = first_ipv4(&records) {
                        return Ok(Some(address));
                    }
                }
                Err(err) if err.is_recoverable() => {
                    debug!(target = %target, error = %err, "name server address resolution failed");
                }
                Err(err) => return Err(err),
            }
        }

        Ok(None)
    }
}

#[async_trait]
impl DnsResolver for IterativeResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<Vec<ResourceRecord>, DomainError> {
        self.resolve_node(query.clone(), 0).await
    }

    fn set_root_server(&self, addr: IpAddr) {
        *self.root_server.write().unwrap() = addr;
    }
}

/// The transport speaks IPv4, so referrals follow A glue only.
fn first_ipv4(records: &[ResourceRecord]) -> Option<IpAddr> {
    records
        .iter()
        .filter(|r| r.record_type == RecordType::A)
        .find_map(|r| r.data.parse::<Ipv4Addr>().ok().map(IpAddr::V4))
}
