use iterdns_application::ports::QueryTrace;
use iterdns_domain::ResourceRecord;
use std::sync::atomic::{AtomicBool, Ordering};

/// Printing trace sink behind the `trace on|off` REPL command.
///
/// When enabled, every record is printed at the moment it is learned,
/// indented under the lookup that produced it.
pub struct ConsoleTrace {
    enabled: AtomicBool,
}

impl ConsoleTrace {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
        }
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }
}

impl QueryTrace for ConsoleTrace {
    fn record_learned(&self, record: &ResourceRecord) {
        if self.is_enabled() {
            println!(
                "       {:<30} {:<10} {:<4} {}",
                record.name,
                record.ttl,
                record.record_type.to_string(),
                record.data
            );
        }
    }
}
