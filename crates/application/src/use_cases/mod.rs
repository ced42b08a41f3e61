pub mod dump_cache;
pub mod lookup_host;

pub use dump_cache::DumpCacheUseCase;
pub use lookup_host::LookupHostUseCase;
