use byteorder::ByteOrder;

/// A cursor over an in-memory byte buffer that tracks the current read
/// position. All multi-byte reads are little-endian, matching the supported
/// transfer syntaxes.
///
#[derive(Debug)]
pub struct ByteCursor<'a> {
  buffer: &'a [u8],
  position: usize,
}

/// A read was attempted that would go past the end of the buffer.
///
#[derive(Debug, PartialEq)]
pub struct DataEnd;

impl<'a> ByteCursor<'a> {
  /// Creates a new cursor positioned at the start of the given buffer.
  ///
  pub fn new(buffer: &'a [u8]) -> Self {
    Self {
      buffer,
      position: 0,
    }
  }

  /// Returns the current read position in the buffer.
  ///
  pub fn position(&self) -> usize {
    self.position
  }

  /// Returns whether all bytes in the buffer have been consumed.
  ///
  pub fn is_at_end(&self) -> bool {
    self.position == self.buffer.len()
  }

  /// Returns the number of unread bytes remaining.
  ///
  pub fn remaining(&self) -> usize {
    self.buffer.len() - self.position
  }

  /// Reads the next `byte_count` bytes and advances the cursor past them.
  ///
  pub fn read_bytes(&mut self, byte_count: usize) -> Result<&'a [u8], DataEnd> {
    let bytes = self
      .buffer
      .get(self.position..self.position + byte_count)
      .ok_or(DataEnd)?;

    self.position += byte_count;

    Ok(bytes)
  }

  /// Peeks at the next `byte_count` bytes without advancing the cursor.
  ///
  pub fn peek_bytes(&self, byte_count: usize) -> Result<&'a [u8], DataEnd> {
    self
      .buffer
      .get(self.position..self.position + byte_count)
      .ok_or(DataEnd)
  }

  /// Advances the cursor past the next `byte_count` bytes.
  ///
  pub fn skip(&mut self, byte_count: usize) -> Result<(), DataEnd> {
    self.read_bytes(byte_count).map(|_| ())
  }

  /// Reads a 16-bit unsigned little-endian integer.
  ///
  pub fn read_u16(&mut self) -> Result<u16, DataEnd> {
    let bytes = self.read_bytes(2)?;

    Ok(byteorder::LittleEndian::read_u16(bytes))
  }

  /// Reads a 32-bit unsigned little-endian integer.
  ///
  pub fn read_u32(&mut self) -> Result<u32, DataEnd> {
    let bytes = self.read_bytes(4)?;

    Ok(byteorder::LittleEndian::read_u32(bytes))
  }
}
