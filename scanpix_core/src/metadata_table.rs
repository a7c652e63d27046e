//! The tag-indexed table of metadata elements parsed out of a single DICOM
//! buffer.

use std::collections::BTreeMap;

use crate::{dictionary, Element, Tag};

/// Maps each tag present in a parsed buffer to its [`Element`]. Tags are
/// unique within one buffer, lookup is exact-match only, and iteration is in
/// ascending tag order.
///
/// A table borrows the buffer it was parsed from, so element values can be
/// sliced out without copying.
///
#[derive(Clone, Debug, PartialEq)]
pub struct MetadataTable<'a> {
  buffer: &'a [u8],
  elements: BTreeMap<Tag, Element>,
}

impl<'a> MetadataTable<'a> {
  /// Creates a new empty metadata table over the given buffer.
  ///
  pub fn new(buffer: &'a [u8]) -> Self {
    Self {
      buffer,
      elements: BTreeMap::new(),
    }
  }

  /// Returns the number of elements in the table.
  ///
  pub fn size(&self) -> usize {
    self.elements.len()
  }

  /// Returns whether the table contains no elements.
  ///
  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  /// Returns whether the table contains the given tag.
  ///
  pub fn has(&self, tag: Tag) -> bool {
    self.elements.contains_key(&tag)
  }

  /// Inserts an element into the table, replacing any existing element with
  /// the same tag.
  ///
  pub fn insert(&mut self, tag: Tag, element: Element) {
    self.elements.insert(tag, element);
  }

  /// Returns the element for the given tag, if present.
  ///
  pub fn get(&self, tag: Tag) -> Option<&Element> {
    self.elements.get(&tag)
  }

  /// Returns the value bytes for the given tag, if present.
  ///
  pub fn get_value_bytes(&self, tag: Tag) -> Option<&'a [u8]> {
    self.get(tag)?.value_bytes(self.buffer)
  }

  /// Returns the value of the given tag as a 16-bit unsigned integer.
  /// `None` when the tag is absent or its value is not a single `US` value.
  ///
  pub fn get_u16(&self, tag: Tag) -> Option<u16> {
    self.get(tag)?.read_u16(self.buffer)
  }

  /// Returns the value of the given tag as a string. `None` when the tag is
  /// absent or its value is not valid UTF-8.
  ///
  pub fn get_string(&self, tag: Tag) -> Option<&'a str> {
    self.get(tag)?.read_string(self.buffer)
  }

  /// Returns all tags in the table in ascending order.
  ///
  pub fn tags(&self) -> Vec<Tag> {
    self.elements.keys().copied().collect()
  }

  /// Iterates over the table's elements in ascending tag order.
  ///
  pub fn iter(&self) -> impl Iterator<Item = (&Tag, &Element)> {
    self.elements.iter()
  }

  /// Returns lines of text describing the table's elements, one line per
  /// element, in the format `"(GROUP,ELEMENT) VR NAME <length> bytes"`.
  ///
  pub fn to_lines(&self) -> Vec<String> {
    self
      .iter()
      .map(|(tag, element)| {
        format!(
          "{} {} {} ({} bytes)",
          tag,
          element.vr,
          dictionary::tag_name(*tag),
          element.length
        )
      })
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Vr;

  #[test]
  fn lookup_test() {
    let buffer = [0x02u8, 0x00, 0x08, 0x00];

    let mut table = MetadataTable::new(&buffer);
    table.insert(
      dictionary::ROWS.tag,
      Element::new(Vr::UnsignedShort, 0, 2),
    );
    table.insert(
      dictionary::COLUMNS.tag,
      Element::new(Vr::UnsignedShort, 2, 2),
    );

    assert_eq!(table.size(), 2);
    assert!(table.has(dictionary::ROWS.tag));
    assert!(!table.has(dictionary::PIXEL_DATA.tag));

    assert_eq!(table.get_u16(dictionary::ROWS.tag), Some(2));
    assert_eq!(table.get_u16(dictionary::COLUMNS.tag), Some(8));
    assert_eq!(table.get_u16(dictionary::PIXEL_DATA.tag), None);

    assert_eq!(
      table.tags(),
      vec![dictionary::ROWS.tag, dictionary::COLUMNS.tag]
    );
  }

  #[test]
  fn to_lines_test() {
    let buffer = [0x02u8, 0x00];

    let mut table = MetadataTable::new(&buffer);
    table.insert(
      dictionary::ROWS.tag,
      Element::new(Vr::UnsignedShort, 0, 2),
    );

    assert_eq!(
      table.to_lines(),
      vec!["(0028,0010) US Rows (2 bytes)".to_string()]
    );
  }
}
