//! iterdns infrastructure layer: wire codec, cache, transport, resolver
pub mod dns;
