use serde::{Deserialize, Serialize};

/// Iterative resolution settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Root DNS server the delegation walk starts from, dotted IP form.
    /// Usually supplied on the command line; the file value is a fallback.
    #[serde(default)]
    pub root_server: Option<String>,

    #[serde(default = "default_dns_port")]
    pub dns_port: u16,

    /// Per-query timeout in milliseconds. A timed-out query is abandoned,
    /// not retried.
    #[serde(default = "default_query_timeout")]
    pub query_timeout_ms: u64,

    /// Print every record at the moment it is learned.
    #[serde(default = "default_false")]
    pub trace: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root_server: None,
            dns_port: default_dns_port(),
            query_timeout_ms: default_query_timeout(),
            trace: false,
        }
    }
}

fn default_dns_port() -> u16 {
    53
}

fn default_query_timeout() -> u64 {
    5000
}

fn default_false() -> bool {
    false
}
