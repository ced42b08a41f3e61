use crate::trace::ConsoleTrace;
use anyhow::Context;
use iterdns_application::ports::DnsResolver;
use iterdns_application::use_cases::{DumpCacheUseCase, LookupHostUseCase};
use iterdns_domain::Config;
use iterdns_infrastructure::dns::cache::RecordCache;
use iterdns_infrastructure::dns::resolver::IterativeResolver;
use iterdns_infrastructure::dns::transport::UdpTransport;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

/// Wired collaborators for the REPL.
pub struct Services {
    pub root_server: IpAddr,
    pub lookup: LookupHostUseCase,
    pub dump: DumpCacheUseCase,
    pub resolver: Arc<dyn DnsResolver>,
    pub trace: Arc<ConsoleTrace>,
}

impl Services {
    pub async fn build(config: &Config) -> anyhow::Result<Self> {
        let root_server: IpAddr = config
            .resolver
            .root_server
            .as_deref()
            .context("no root server configured")?
            .parse()
            .context("invalid root server address")?;

        let timeout = Duration::from_millis(config.resolver.query_timeout_ms);
        let transport = Arc::new(
            UdpTransport::bind(timeout)
                .await
                .context("failed to open UDP transport")?,
        );

        let cache = Arc::new(RecordCache::new());
        let trace = Arc::new(ConsoleTrace::new(config.resolver.trace));

        let resolver: Arc<dyn DnsResolver> = Arc::new(IterativeResolver::new(
            transport,
            Arc::clone(&cache),
            trace.clone(),
            root_server,
            config.resolver.dns_port,
        ));

        Ok(Self {
            root_server,
            lookup: LookupHostUseCase::new(Arc::clone(&resolver)),
            dump: DumpCacheUseCase::new(cache),
            resolver,
            trace,
        })
    }
}
