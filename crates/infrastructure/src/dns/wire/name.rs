use super::cursor::Cursor;
use iterdns_domain::validators::validate_host_name;
use iterdns_domain::DomainError;

/// Upper bound on compression-pointer jumps while decoding one name.
/// A 255-byte name cannot legitimately need more; a cycle hits the cap.
const MAX_POINTER_JUMPS: usize = 64;

/// Append a name to `buf` as length-prefixed labels plus the root byte.
pub fn write_name(buf: &mut Vec<u8>, name: &str) -> Result<(), DomainError> {
    validate_host_name(name)?;

    for label in name.trim_end_matches('.').split('.') {
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.push(0);

    Ok(())
}

/// Decode a possibly-compressed name at the cursor's position.
///
/// Labels are read until the zero byte. A byte with the top two bits set is
/// the first half of a 14-bit pointer: decoding continues at that offset,
/// and the cursor resumes right after the first pointer once the name is
/// complete. The jump cap turns pointer cycles into `MalformedMessage`
/// instead of an infinite loop.
pub fn read_name(cursor: &mut Cursor<'_>) -> Result<String, DomainError> {
    let mut name = String::new();
    let mut resume_pos = None;
    let mut jumps = 0;

    loop {
        let len = cursor.read_u8()?;

        if len == 0 {
            break;
        }

        if len & 0xC0 == 0xC0 {
            let low = cursor.read_u8()?;
            if resume_pos.is_none() {
                resume_pos = Some(cursor.pos());
            }
            jumps += 1;
            if jumps > MAX_POINTER_JUMPS {
                return Err(DomainError::MalformedMessage(
                    "compression pointer chain exceeds jump limit".to_string(),
                ));
            }
            let offset = usize::from(len & 0x3F) << 8 | usize::from(low);
            cursor.seek(offset)?;
            continue;
        }

        if len & 0xC0 != 0 {
            return Err(DomainError::MalformedMessage(format!(
                "reserved label type {:#04x}",
                len
            )));
        }

        let label = cursor.read_slice(len as usize)?;
        if !name.is_empty() {
            name.push('.');
        }
        name.push_str(&String::from_utf8_lossy(label));
    }

    if let Some(pos) = resume_pos {
        cursor.seek(pos)?;
    }

    Ok(name.to_lowercase())
}
