use iterdns_domain::DomainError;

/// Bounds-checked reader over one received datagram.
///
/// Every read checks the remaining buffer and fails with
/// `MalformedMessage` instead of panicking; compression handling jumps by
/// seeking and restoring the position explicitly.
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn seek(&mut self, pos: usize) -> Result<(), DomainError> {
        if pos > self.buf.len() {
            return Err(DomainError::MalformedMessage(format!(
                "seek to byte {} past end of {}-byte message",
                pos,
                self.buf.len()
            )));
        }
        self.pos = pos;
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8, DomainError> {
        let byte = *self
            .buf
            .get(self.pos)
            .ok_or_else(|| self.truncated("u8"))?;
        self.pos += 1;
        Ok(byte)
    }

    pub fn read_u16(&mut self) -> Result<u16, DomainError> {
        let bytes = self.read_slice(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    /// The TTL field is a signed 32-bit quantity on the wire; reading it as
    /// unsigned matches how it is interpreted everywhere downstream.
    pub fn read_u32(&mut self) -> Result<u32, DomainError> {
        let bytes = self.read_slice(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    pub fn read_slice(&mut self, len: usize) -> Result<&'a [u8], DomainError> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.buf.len())
            .ok_or_else(|| self.truncated("slice"))?;
        let slice = &self.buf[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn truncated(&self, what: &str) -> DomainError {
        DomainError::MalformedMessage(format!(
            "truncated message: {} read at byte {} of {}",
            what,
            self.pos,
            self.buf.len()
        ))
    }
}
