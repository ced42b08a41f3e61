use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Malformed DNS message: {0}")]
    MalformedMessage(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Maximum number of indirection levels reached")]
    IndirectionLimitExceeded,

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    /// Errors the resolver absorbs as "no usable answer from this server".
    /// Everything else should surface to the caller.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            DomainError::MalformedMessage(_)
                | DomainError::QueryTimeout
                | DomainError::IndirectionLimitExceeded
                | DomainError::IoError(_)
        )
    }
}
