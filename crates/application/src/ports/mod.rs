pub mod dns_resolver;
pub mod dns_transport;
pub mod query_trace;
pub mod record_store;

pub use dns_resolver::DnsResolver;
pub use dns_transport::DnsTransport;
pub use query_trace::{NoopTrace, QueryTrace};
pub use record_store::RecordStore;
