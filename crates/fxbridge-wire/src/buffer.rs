use crate::error::{Result, WireError};

/// Checked reader over a borrowed command payload.
///
/// Every read validates the declared length first; a short payload yields
/// [`WireError::TooShort`] instead of reading past the end.
#[derive(Debug)]
pub struct PayloadReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> PayloadReader<'a> {
    /// Create a reader over a command payload.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Take the next `n` bytes.
    pub fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(WireError::TooShort {
                need: self.pos + n,
                got: self.buf.len(),
            });
        }
        let out = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    /// Read a little-endian u32.
    pub fn u32_le(&mut self) -> Result<u32> {
        let bytes = self.take(4)?;
        Ok(u32::from_le_bytes(bytes.try_into().expect("4-byte slice")))
    }

    /// Read a little-endian i32.
    pub fn i32_le(&mut self) -> Result<i32> {
        let bytes = self.take(4)?;
        Ok(i32::from_le_bytes(bytes.try_into().expect("4-byte slice")))
    }
}

/// Checked writer over a borrowed reply buffer.
///
/// Tracks capacity and written length; writes past capacity are rejected
/// with [`WireError::InsufficientCapacity`]. Encoders size-check with
/// [`Reply::ensure_capacity`] before the first write, so a failed encode
/// commits no partial bytes.
///
/// When an encode is rejected for capacity, [`Reply::set_required`] records
/// the size the caller should retry with; `len()` then reports that size
/// while the buffer contents stay untouched.
#[derive(Debug)]
pub struct Reply<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> Reply<'a> {
    /// Wrap a caller-supplied reply buffer. Its length is the capacity.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    /// Declared capacity of the underlying buffer.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Bytes written, or the required size after a rejected encode.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if nothing has been written or reported.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The written prefix of the reply.
    pub fn bytes(&self) -> &[u8] {
        &self.buf[..self.len.min(self.buf.len())]
    }

    /// Fail fast if the buffer cannot hold `required` bytes in total.
    pub fn ensure_capacity(&self, required: usize) -> Result<()> {
        if self.capacity() < required {
            return Err(WireError::InsufficientCapacity {
                required,
                capacity: self.capacity(),
            });
        }
        Ok(())
    }

    /// Report the size a retry needs, without writing anything.
    pub fn set_required(&mut self, required: usize) {
        self.len = required;
    }

    /// Append raw bytes.
    pub fn put_slice(&mut self, src: &[u8]) -> Result<()> {
        let end = self.len + src.len();
        if end > self.capacity() {
            return Err(WireError::InsufficientCapacity {
                required: end,
                capacity: self.capacity(),
            });
        }
        self.buf[self.len..end].copy_from_slice(src);
        self.len = end;
        Ok(())
    }

    /// Append a little-endian u32.
    pub fn put_u32_le(&mut self, value: u32) -> Result<()> {
        self.put_slice(&value.to_le_bytes())
    }

    /// Append a little-endian i32.
    pub fn put_i32_le(&mut self, value: i32) -> Result<()> {
        self.put_slice(&value.to_le_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reader_reports_need_and_got() {
        let mut reader = PayloadReader::new(&[1, 2, 3]);
        let err = reader.u32_le().unwrap_err();
        assert!(matches!(err, WireError::TooShort { need: 4, got: 3 }));
    }

    #[test]
    fn reader_consumes_in_order() {
        let payload = [0x01, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xAB];
        let mut reader = PayloadReader::new(&payload);
        assert_eq!(reader.u32_le().unwrap(), 1);
        assert_eq!(reader.i32_le().unwrap(), -1);
        assert_eq!(reader.remaining(), 1);
        assert_eq!(reader.take(1).unwrap(), &[0xAB]);
    }

    #[test]
    fn reply_rejects_writes_past_capacity() {
        let mut buf = [0u8; 6];
        let mut reply = Reply::new(&mut buf);
        reply.put_u32_le(7).unwrap();
        let err = reply.put_u32_le(8).unwrap_err();
        assert!(matches!(
            err,
            WireError::InsufficientCapacity {
                required: 8,
                capacity: 6
            }
        ));
        assert_eq!(reply.len(), 4);
    }

    #[test]
    fn reply_bytes_is_written_prefix() {
        let mut buf = [0u8; 8];
        let mut reply = Reply::new(&mut buf);
        reply.put_i32_le(-22).unwrap();
        assert_eq!(reply.bytes(), (-22i32).to_le_bytes());
    }

    #[test]
    fn set_required_reports_without_writing() {
        let mut buf = [0xAAu8; 4];
        let mut reply = Reply::new(&mut buf);
        reply.set_required(16);
        assert_eq!(reply.len(), 16);
        assert_eq!(buf, [0xAA; 4]);
    }

    #[test]
    fn ensure_capacity_checks_total_size() {
        let mut buf = [0u8; 4];
        let reply = Reply::new(&mut buf);
        assert!(reply.ensure_capacity(4).is_ok());
        assert!(matches!(
            reply.ensure_capacity(5),
            Err(WireError::InsufficientCapacity {
                required: 5,
                capacity: 4
            })
        ));
    }
}
