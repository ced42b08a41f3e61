//! iterdns domain layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod validators;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::DnsQuery;
pub use dns_record::{RecordType, ResourceRecord};
pub use errors::DomainError;
