//! A DICOM data element tag, defined as 16-bit `group` and `element` values.

/// Identifies one metadata field in a DICOM buffer by its `group` and
/// `element` values, each a 16-bit unsigned integer.
///
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Tag {
  pub group: u16,
  pub element: u16,
}

impl std::fmt::Display for Tag {
  /// Formats a tag as `"($GROUP,$ELEMENT)"`, e.g. `"(0028,0010)"`.
  ///
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "({:04X},{:04X})", self.group, self.element)
  }
}

impl Tag {
  /// Creates a new tag with the given group and element values.
  ///
  pub const fn new(group: u16, element: u16) -> Self {
    Self { group, element }
  }

  /// Converts a tag to a single 32-bit integer with the group in the high 16
  /// bits and the element in the low 16 bits.
  ///
  pub fn to_int(&self) -> u32 {
    ((self.group as u32) << 16) | self.element as u32
  }

  /// Formats a tag as eight hexadecimal digits, e.g. `"7FE00010"`.
  ///
  pub fn to_hex_string(&self) -> String {
    format!("{:04X}{:04X}", self.group, self.element)
  }

  /// Parses a tag from its eight-hex-digit form, e.g. `"7FE00010"`. Upper and
  /// lower case digits are accepted.
  ///
  #[allow(clippy::result_unit_err)]
  pub fn from_hex_string(tag: &str) -> Result<Self, ()> {
    if tag.len() != 8 || !tag.is_ascii() {
      return Err(());
    }

    let group = u16::from_str_radix(&tag[0..4], 16).map_err(|_| ())?;
    let element = u16::from_str_radix(&tag[4..8], 16).map_err(|_| ())?;

    Ok(Self { group, element })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn to_int_test() {
    assert_eq!(Tag::new(0x7FE0, 0x0010).to_int(), 0x7FE00010);
  }

  #[test]
  fn to_string_test() {
    assert_eq!(Tag::new(0x0028, 0x0010).to_string(), "(0028,0010)");
  }

  #[test]
  fn to_hex_string_test() {
    assert_eq!(Tag::new(0x7FE0, 0x0010).to_hex_string(), "7FE00010");
  }

  #[test]
  fn from_hex_string_test() {
    assert_eq!(
      Tag::from_hex_string("7fe00010"),
      Ok(Tag::new(0x7FE0, 0x0010))
    );

    assert_eq!(
      Tag::from_hex_string("00280011"),
      Ok(Tag::new(0x0028, 0x0011))
    );

    assert_eq!(Tag::from_hex_string("0028001"), Err(()));
    assert_eq!(Tag::from_hex_string("0028001G"), Err(()));
  }
}
