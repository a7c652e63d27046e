//! A single metadata element: its value representation and the location of
//! its value bytes within the source buffer.

use byteorder::ByteOrder;

use crate::Vr;

/// One data element in a [`crate::MetadataTable`]. Elements do not own their
/// value bytes, they record where the value lies in the buffer the table was
/// parsed from. The parser guarantees that `offset + length` is within the
/// bounds of that buffer.
///
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Element {
  pub vr: Vr,
  pub offset: usize,
  pub length: usize,
}

impl Element {
  /// Creates a new element with the given VR and value location.
  ///
  pub fn new(vr: Vr, offset: usize, length: usize) -> Self {
    Self { vr, offset, length }
  }

  /// Slices this element's value bytes out of the buffer it was parsed from.
  /// Returns `None` if the recorded location does not lie within the buffer,
  /// which can only happen when the wrong buffer is supplied.
  ///
  pub fn value_bytes<'a>(&self, buffer: &'a [u8]) -> Option<&'a [u8]> {
    buffer.get(self.offset..self.offset + self.length)
  }

  /// Reads this element's value as a single 16-bit unsigned little-endian
  /// integer. Returns `None` when the VR is not `US` or the value is not
  /// exactly two bytes.
  ///
  pub fn read_u16(&self, buffer: &[u8]) -> Option<u16> {
    if self.vr != Vr::UnsignedShort || self.length != 2 {
      return None;
    }

    let bytes = self.value_bytes(buffer)?;

    Some(byteorder::LittleEndian::read_u16(bytes))
  }

  /// Reads this element's value as a string, trimming the trailing padding
  /// byte that DICOM string values are padded with to an even length. Returns
  /// `None` when the value is not valid UTF-8.
  ///
  pub fn read_string<'a>(&self, buffer: &'a [u8]) -> Option<&'a str> {
    let bytes = self.value_bytes(buffer)?;
    let value = std::str::from_utf8(bytes).ok()?;

    Some(value.trim_end_matches(['\0', ' ']))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn value_bytes_test() {
    let buffer = [0u8, 1, 2, 3, 4, 5];

    assert_eq!(
      Element::new(Vr::OtherWordString, 2, 3).value_bytes(&buffer),
      Some([2u8, 3, 4].as_slice())
    );

    assert_eq!(
      Element::new(Vr::OtherWordString, 4, 4).value_bytes(&buffer),
      None
    );
  }

  #[test]
  fn read_u16_test() {
    let buffer = [0u8, 0, 0x34, 0x12];

    assert_eq!(
      Element::new(Vr::UnsignedShort, 2, 2).read_u16(&buffer),
      Some(0x1234)
    );

    // Wrong VR
    assert_eq!(
      Element::new(Vr::SignedShort, 2, 2).read_u16(&buffer),
      None
    );

    // Wrong length
    assert_eq!(
      Element::new(Vr::UnsignedShort, 0, 4).read_u16(&buffer),
      None
    );
  }

  #[test]
  fn read_string_test() {
    let buffer = b"1.2.840.10008.1.2.1\0";

    assert_eq!(
      Element::new(Vr::UniqueIdentifier, 0, 20).read_string(buffer),
      Some("1.2.840.10008.1.2.1")
    );

    assert_eq!(
      Element::new(Vr::CodeString, 0, 2).read_string(&[0xFF, 0xFE][..]),
      None
    );
  }
}
