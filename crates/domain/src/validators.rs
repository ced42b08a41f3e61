use crate::errors::DomainError;

/// Longest label RFC 1035 allows.
pub const MAX_LABEL_LEN: usize = 63;

/// Longest encoded name (length bytes + labels + root byte).
pub const MAX_NAME_LEN: usize = 255;

/// Structural validation of a host name before it is encoded into a query.
///
/// Checks the RFC 1035 length limits only; full character-set and escaping
/// rules are out of scope.
pub fn validate_host_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidDomainName(
            "host name cannot be empty".to_string(),
        ));
    }

    let mut encoded_len = 1; // terminating root byte
    for label in name.trim_end_matches('.').split('.') {
        if label.is_empty() {
            return Err(DomainError::InvalidDomainName(format!(
                "empty label in '{}'",
                name
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "label '{}' exceeds {} bytes",
                label, MAX_LABEL_LEN
            )));
        }
        encoded_len += 1 + label.len();
    }

    if encoded_len > MAX_NAME_LEN {
        return Err(DomainError::InvalidDomainName(format!(
            "name '{}' exceeds {} bytes when encoded",
            name, MAX_NAME_LEN
        )));
    }

    Ok(())
}
