//! DNS wire-format codec
//!
//! Hand-rolled encoding and decoding of RFC 1035 messages: a bounds-checked
//! cursor, name compression handling, query construction and response
//! parsing. The resolver never touches raw bytes outside this module.

pub mod cursor;
pub mod message_builder;
pub mod name;
pub mod response_parser;

pub use cursor::Cursor;
pub use message_builder::MessageBuilder;
pub use response_parser::{DnsResponse, ResponseParser};

/// Flags for a standard query with recursion desired.
pub const FLAGS_STANDARD_QUERY: u16 = 0x0100;

/// The Internet class.
pub const CLASS_IN: u16 = 1;
