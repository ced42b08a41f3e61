pub mod cache;
pub mod resolver;
pub mod transport;
pub mod wire;
