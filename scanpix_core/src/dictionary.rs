//! A dictionary of the well-known data elements used when preparing CT/PET
//! slices for display.

use crate::{Tag, Vr};

/// One entry in the dictionary: a tag, its human-readable name, and the VR
/// its value is encoded with.
///
pub struct Item {
  pub tag: Tag,
  pub name: &'static str,
  pub vr: Vr,
}

pub const FILE_META_INFORMATION_GROUP_LENGTH: Item = Item {
  tag: Tag::new(0x0002, 0x0000),
  name: "File Meta Information Group Length",
  vr: Vr::UnsignedLong,
};

pub const MEDIA_STORAGE_SOP_CLASS_UID: Item = Item {
  tag: Tag::new(0x0002, 0x0002),
  name: "Media Storage SOP Class UID",
  vr: Vr::UniqueIdentifier,
};

pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Item = Item {
  tag: Tag::new(0x0002, 0x0003),
  name: "Media Storage SOP Instance UID",
  vr: Vr::UniqueIdentifier,
};

pub const TRANSFER_SYNTAX_UID: Item = Item {
  tag: Tag::new(0x0002, 0x0010),
  name: "Transfer Syntax UID",
  vr: Vr::UniqueIdentifier,
};

pub const SOP_CLASS_UID: Item = Item {
  tag: Tag::new(0x0008, 0x0016),
  name: "SOP Class UID",
  vr: Vr::UniqueIdentifier,
};

pub const SOP_INSTANCE_UID: Item = Item {
  tag: Tag::new(0x0008, 0x0018),
  name: "SOP Instance UID",
  vr: Vr::UniqueIdentifier,
};

pub const STUDY_DATE: Item = Item {
  tag: Tag::new(0x0008, 0x0020),
  name: "Study Date",
  vr: Vr::Date,
};

pub const MODALITY: Item = Item {
  tag: Tag::new(0x0008, 0x0060),
  name: "Modality",
  vr: Vr::CodeString,
};

pub const PATIENT_NAME: Item = Item {
  tag: Tag::new(0x0010, 0x0010),
  name: "Patient's Name",
  vr: Vr::PersonName,
};

pub const PATIENT_ID: Item = Item {
  tag: Tag::new(0x0010, 0x0020),
  name: "Patient ID",
  vr: Vr::LongString,
};

pub const SAMPLES_PER_PIXEL: Item = Item {
  tag: Tag::new(0x0028, 0x0002),
  name: "Samples per Pixel",
  vr: Vr::UnsignedShort,
};

pub const PHOTOMETRIC_INTERPRETATION: Item = Item {
  tag: Tag::new(0x0028, 0x0004),
  name: "Photometric Interpretation",
  vr: Vr::CodeString,
};

pub const ROWS: Item = Item {
  tag: Tag::new(0x0028, 0x0010),
  name: "Rows",
  vr: Vr::UnsignedShort,
};

pub const COLUMNS: Item = Item {
  tag: Tag::new(0x0028, 0x0011),
  name: "Columns",
  vr: Vr::UnsignedShort,
};

pub const BITS_ALLOCATED: Item = Item {
  tag: Tag::new(0x0028, 0x0100),
  name: "Bits Allocated",
  vr: Vr::UnsignedShort,
};

pub const BITS_STORED: Item = Item {
  tag: Tag::new(0x0028, 0x0101),
  name: "Bits Stored",
  vr: Vr::UnsignedShort,
};

pub const HIGH_BIT: Item = Item {
  tag: Tag::new(0x0028, 0x0102),
  name: "High Bit",
  vr: Vr::UnsignedShort,
};

pub const PIXEL_REPRESENTATION: Item = Item {
  tag: Tag::new(0x0028, 0x0103),
  name: "Pixel Representation",
  vr: Vr::UnsignedShort,
};

pub const PIXEL_DATA: Item = Item {
  tag: Tag::new(0x7FE0, 0x0010),
  name: "Pixel Data",
  vr: Vr::OtherWordString,
};

pub const ITEM: Item = Item {
  tag: Tag::new(0xFFFE, 0xE000),
  name: "Item",
  vr: Vr::Unknown,
};

pub const ITEM_DELIMITATION_ITEM: Item = Item {
  tag: Tag::new(0xFFFE, 0xE00D),
  name: "Item Delimitation Item",
  vr: Vr::Unknown,
};

pub const SEQUENCE_DELIMITATION_ITEM: Item = Item {
  tag: Tag::new(0xFFFE, 0xE00E),
  name: "Sequence Delimitation Item",
  vr: Vr::Unknown,
};

/// All dictionary entries, in tag order.
///
const ITEMS: [&Item; 22] = [
  &FILE_META_INFORMATION_GROUP_LENGTH,
  &MEDIA_STORAGE_SOP_CLASS_UID,
  &MEDIA_STORAGE_SOP_INSTANCE_UID,
  &TRANSFER_SYNTAX_UID,
  &SOP_CLASS_UID,
  &SOP_INSTANCE_UID,
  &STUDY_DATE,
  &MODALITY,
  &PATIENT_NAME,
  &PATIENT_ID,
  &SAMPLES_PER_PIXEL,
  &PHOTOMETRIC_INTERPRETATION,
  &ROWS,
  &COLUMNS,
  &BITS_ALLOCATED,
  &BITS_STORED,
  &HIGH_BIT,
  &PIXEL_REPRESENTATION,
  &PIXEL_DATA,
  &ITEM,
  &ITEM_DELIMITATION_ITEM,
  &SEQUENCE_DELIMITATION_ITEM,
];

/// Returns the dictionary entry for a tag, if there is one.
///
pub fn find(tag: Tag) -> Option<&'static Item> {
  ITEMS.iter().find(|item| item.tag == tag).copied()
}

/// Returns the name of a tag, or `"unknown_tag"` if it isn't in the
/// dictionary.
///
pub fn tag_name(tag: Tag) -> &'static str {
  match find(tag) {
    Some(item) => item.name,
    None => "unknown_tag",
  }
}

/// Formats a tag along with its name, e.g. `"(0028,0010) Rows"`.
///
pub fn tag_with_name(tag: Tag) -> String {
  format!("{} {}", tag, tag_name(tag))
}

/// Returns the VR to assume for a tag read from data that doesn't store
/// explicit VRs, i.e. the 'Implicit VR Little Endian' transfer syntax.
/// Tags not in the dictionary are treated as [`Vr::Unknown`].
///
pub fn infer_vr(tag: Tag) -> Vr {
  match find(tag) {
    Some(item) => item.vr,
    None => Vr::Unknown,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tag_name_test() {
    assert_eq!(tag_name(PIXEL_DATA.tag), "Pixel Data");
    assert_eq!(tag_name(Tag::new(0x1234, 0x5678)), "unknown_tag");
  }

  #[test]
  fn tag_with_name_test() {
    assert_eq!(tag_with_name(ROWS.tag), "(0028,0010) Rows");
  }

  #[test]
  fn infer_vr_test() {
    assert_eq!(infer_vr(ROWS.tag), Vr::UnsignedShort);
    assert_eq!(infer_vr(PIXEL_DATA.tag), Vr::OtherWordString);
    assert_eq!(infer_vr(Tag::new(0x1234, 0x5678)), Vr::Unknown);
  }
}
