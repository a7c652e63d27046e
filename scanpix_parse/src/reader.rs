//! Single-pass conversion of a raw DICOM buffer into a [`MetadataTable`].

use byteorder::ByteOrder;

use scanpix_core::{
  dictionary, Element, MetadataTable, Tag, TransferSyntax, Vr,
};

use crate::internal::byte_cursor::ByteCursor;
use crate::ParseError;

/// The marker stored in a value length field to indicate an undefined
/// length. Undefined lengths introduce delimiter-terminated content, which
/// only occurs for sequences and encapsulated pixel data, neither of which
/// is supported.
///
const UNDEFINED_LENGTH: u32 = 0xFFFF_FFFF;

/// Parses a single-file DICOM buffer into a metadata table.
///
/// The buffer's optional File Preamble and `DICM` prefix are skipped, its
/// File Meta Information is read (when present) to determine the transfer
/// syntax, and then every data element in the main data set is recorded in
/// the returned table. Element values stay in place in the buffer, only
/// their offsets and lengths are recorded.
///
pub fn parse(buffer: &[u8]) -> Result<MetadataTable<'_>, ParseError> {
  if buffer.is_empty() {
    return Err(data_end_error("Reading file header", 0));
  }

  let mut cursor = ByteCursor::new(buffer);

  skip_preamble(&mut cursor);

  let mut table = MetadataTable::new(buffer);

  read_file_meta_information(&mut cursor, &mut table)?;

  let transfer_syntax = transfer_syntax_for_table(&table)?;

  read_data_set(&mut cursor, &mut table, transfer_syntax)?;

  Ok(table)
}

fn data_end_error(when: &str, offset: usize) -> ParseError {
  ParseError::DataEndedUnexpectedly {
    when: when.to_string(),
    offset,
  }
}

/// Skips the 128-byte File Preamble and the 4-byte `DICM` prefix following
/// it. If the `DICM` bytes aren't present at the expected offset then it is
/// assumed the preamble is absent and data elements start at offset zero.
///
fn skip_preamble(cursor: &mut ByteCursor) {
  if let Ok(data) = cursor.peek_bytes(132) {
    if &data[128..132] == b"DICM" {
      let _ = cursor.skip(132);
    }
  }
}

/// Reads the File Meta Information data elements, which always use explicit
/// VR little-endian encoding and have the group 0x0002. If a *'(0002,0000)
/// File Meta Information Group Length'* element is present it determines
/// where the File Meta Information ends, otherwise elements are read until
/// one with a different group is encountered.
///
fn read_file_meta_information(
  cursor: &mut ByteCursor,
  table: &mut MetadataTable,
) -> Result<(), ParseError> {
  let when = "Reading File Meta Information";

  let starts_at = cursor.position();
  let mut ends_at: Option<usize> = None;

  loop {
    if let Some(ends_at) = ends_at {
      if cursor.position() >= ends_at {
        break;
      }
    }

    if cursor.is_at_end() {
      break;
    }

    // Peek the group of the next data element to detect the end of the File
    // Meta Information when no group length was specified
    let data = cursor
      .peek_bytes(2)
      .map_err(|_| data_end_error(when, cursor.position()))?;
    let group = byteorder::LittleEndian::read_u16(data);

    if group != 0x0002 {
      if ends_at.is_none() {
        break;
      }

      return Err(ParseError::DataInvalid {
        when: when.to_string(),
        details: "Data element in File Meta Information does not have the \
          group 0x0002"
          .to_string(),
        offset: cursor.position(),
      });
    }

    let header_offset = cursor.position();

    let group = cursor
      .read_u16()
      .map_err(|_| data_end_error(when, header_offset))?;
    let element = cursor
      .read_u16()
      .map_err(|_| data_end_error(when, header_offset))?;
    let tag = Tag::new(group, element);

    let vr_bytes = cursor
      .read_bytes(2)
      .map_err(|_| data_end_error(when, header_offset))?;
    let vr =
      Vr::from_bytes(vr_bytes).map_err(|_| ParseError::DataInvalid {
        when: when.to_string(),
        details: format!("Data element {} has invalid VR", tag),
        offset: header_offset,
      })?;

    if vr == Vr::Sequence {
      return Err(ParseError::DataInvalid {
        when: when.to_string(),
        details: "Data element in File Meta Information is a sequence"
          .to_string(),
        offset: header_offset,
      });
    }

    let length = if vr.has_u32_length() {
      cursor
        .skip(2)
        .and_then(|_| cursor.read_u32())
        .map_err(|_| data_end_error(when, header_offset))? as usize
    } else {
      cursor
        .read_u16()
        .map_err(|_| data_end_error(when, header_offset))? as usize
    };

    let value_offset = cursor.position();
    let value_bytes = cursor
      .read_bytes(length)
      .map_err(|_| data_end_error(when, value_offset))?;

    // The group length element specifies where the File Meta Information
    // ends. It isn't recorded in the table.
    if tag == dictionary::FILE_META_INFORMATION_GROUP_LENGTH.tag {
      if ends_at.is_none() {
        if length != 4 {
          return Err(ParseError::DataInvalid {
            when: when.to_string(),
            details: format!("Group length is {} bytes, expected 4", length),
            offset: value_offset,
          });
        }

        let group_length = byteorder::LittleEndian::read_u32(value_bytes);

        ends_at = Some(starts_at + 12 + group_length as usize);
      }

      continue;
    }

    table.insert(tag, Element::new(vr, value_offset, length));
  }

  Ok(())
}

/// Returns the transfer syntax for the main data set based on the
/// *'(0002,0010) Transfer Syntax UID'* read from the File Meta Information.
/// When no File Meta Information is present the data is assumed to be
/// 'Implicit VR Little Endian'.
///
fn transfer_syntax_for_table(
  table: &MetadataTable,
) -> Result<TransferSyntax, ParseError> {
  let element = match table.get(dictionary::TRANSFER_SYNTAX_UID.tag) {
    Some(element) => *element,
    None => return Ok(TransferSyntax::ImplicitVrLittleEndian),
  };

  let uid = table
    .get_string(dictionary::TRANSFER_SYNTAX_UID.tag)
    .ok_or_else(|| ParseError::DataInvalid {
      when: "Reading File Meta Information".to_string(),
      details: "Transfer syntax UID is not a valid string".to_string(),
      offset: element.offset,
    })?;

  TransferSyntax::from_uid(uid).map_err(|_| {
    ParseError::TransferSyntaxNotSupported {
      transfer_syntax_uid: uid.to_string(),
    }
  })
}

/// Reads the main data set's elements into the table until the end of the
/// buffer. Defined-length sequences are recorded and skipped over without
/// descending into their items; group length elements are consumed without
/// being recorded.
///
fn read_data_set(
  cursor: &mut ByteCursor,
  table: &mut MetadataTable,
  transfer_syntax: TransferSyntax,
) -> Result<(), ParseError> {
  let when = "Reading data element header";

  loop {
    if cursor.is_at_end() {
      break;
    }

    let header_offset = cursor.position();

    let group = cursor
      .read_u16()
      .map_err(|_| data_end_error(when, header_offset))?;
    let element = cursor
      .read_u16()
      .map_err(|_| data_end_error(when, header_offset))?;
    let tag = Tag::new(group, element);

    // Items and delimiters only occur inside undefined-length content, which
    // is never entered
    if tag.group == 0xFFFE {
      return Err(ParseError::DataInvalid {
        when: when.to_string(),
        details: format!(
          "Delimiter {} occurred outside of a sequence",
          dictionary::tag_with_name(tag)
        ),
        offset: header_offset,
      });
    }

    let (vr, length) = if transfer_syntax.is_explicit_vr() {
      let vr_bytes = cursor
        .read_bytes(2)
        .map_err(|_| data_end_error(when, header_offset))?;
      let vr =
        Vr::from_bytes(vr_bytes).map_err(|_| ParseError::DataInvalid {
          when: when.to_string(),
          details: format!("Data element {} has invalid VR", tag),
          offset: header_offset,
        })?;

      let length = if vr.has_u32_length() {
        cursor
          .skip(2)
          .and_then(|_| cursor.read_u32())
          .map_err(|_| data_end_error(when, header_offset))?
      } else {
        cursor
          .read_u16()
          .map_err(|_| data_end_error(when, header_offset))? as u32
      };

      (vr, length)
    } else {
      let length = cursor
        .read_u32()
        .map_err(|_| data_end_error(when, header_offset))?;

      (dictionary::infer_vr(tag), length)
    };

    if length == UNDEFINED_LENGTH {
      let details = if tag == dictionary::PIXEL_DATA.tag {
        "Encapsulated pixel data is not supported"
      } else {
        "Undefined-length sequences are not supported"
      };

      return Err(ParseError::DataInvalid {
        when: when.to_string(),
        details: details.to_string(),
        offset: header_offset,
      });
    }

    let value_offset = cursor.position();
    cursor.skip(length as usize).map_err(|_| {
      data_end_error("Reading data element value", value_offset)
    })?;

    // Group length elements are informational and aren't recorded.
    // Ref: PS3.5 7.2.
    if tag.element == 0x0000 {
      continue;
    }

    table.insert(tag, Element::new(vr, value_offset, length as usize));
  }

  Ok(())
}
