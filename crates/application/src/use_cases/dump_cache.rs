use crate::ports::RecordStore;
use iterdns_domain::ResourceRecord;
use std::sync::Arc;

/// Collect every record currently cached, for the `dump` command.
pub struct DumpCacheUseCase {
    store: Arc<dyn RecordStore>,
}

impl DumpCacheUseCase {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self) -> Vec<ResourceRecord> {
        let mut records = Vec::with_capacity(self.store.len());
        self.store.for_each(&mut |record| records.push(record.clone()));
        records
    }
}
