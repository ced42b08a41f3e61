//! Configuration for iterdns
//!
//! - `root`: main configuration aggregate and CLI overrides
//! - `resolver`: root server, timeout, trace defaults
//! - `logging`: logging settings
//! - `errors`: configuration errors

pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
