//! Decodes a single-frame grayscale DICOM slice into a display-ready RGBA
//! raster.
//!
//! Decoding is a pure synchronous function: the same input buffer always
//! produces the same raster, there is no I/O and no shared state, and
//! independent decodes can safely run concurrently. Every failure is
//! reported as a distinct [`DecodeError`] kind and no partial result is
//! ever returned.

mod decode_error;
mod raster_image;

pub use decode_error::DecodeError;
pub use raster_image::RasterImage;

use byteorder::ByteOrder;

use scanpix_core::dictionary;

/// Decodes a single-file DICOM buffer into an RGBA raster.
///
/// The buffer is parsed into a metadata table, the frame geometry is taken
/// from the *'(0028,0010) Rows'* and *'(0028,0011) Columns'* elements, and
/// the *'(7FE0,0010) Pixel Data'* element's bytes are reinterpreted as
/// unsigned 16-bit little-endian samples in row-major order. The sample
/// count must equal `rows * columns` exactly.
///
/// Each sample is written to the red, green and blue channels of its pixel
/// with the alpha channel fully opaque. Samples are clamped into the 8-bit
/// channel range, i.e. `t(v) = min(v, 255)`: values above 255 saturate to
/// white rather than wrapping. No windowing, rescaling or contrast
/// adjustment is applied, so output is a direct mapping of the stored
/// sample values.
///
pub fn decode(buffer: &[u8]) -> Result<RasterImage, DecodeError> {
  let table =
    scanpix_parse::parse(buffer).map_err(DecodeError::MalformedHeader)?;

  let sample_bytes = table
    .get_value_bytes(dictionary::PIXEL_DATA.tag)
    .ok_or(DecodeError::MissingPixelData)?;

  let rows = table.get_u16(dictionary::ROWS.tag);
  let columns = table.get_u16(dictionary::COLUMNS.tag);

  let (rows, columns) = match (rows, columns) {
    (Some(rows), Some(columns)) if rows > 0 && columns > 0 => {
      (rows as usize, columns as usize)
    }

    _ => return Err(DecodeError::MissingDimensions { rows, columns }),
  };

  let pixel_count = rows * columns;

  if sample_bytes.len() != pixel_count * 2 {
    return Err(DecodeError::PixelDataSizeMismatch {
      expected_bytes: pixel_count * 2,
      actual_bytes: sample_bytes.len(),
    });
  }

  let mut samples = vec![0u16; pixel_count];
  byteorder::LittleEndian::read_u16_into(sample_bytes, &mut samples);

  let mut data = Vec::with_capacity(pixel_count * 4);
  for sample in samples {
    let value = sample.min(0xFF) as u8;

    data.extend_from_slice(&[value, value, value, 0xFF]);
  }

  Ok(RasterImage::new(columns as u32, rows as u32, data))
}

#[cfg(test)]
mod tests {
  use super::*;

  use scanpix_core::Tag;
  use scanpix_parse::ParseError;

  /// Builds a synthetic single-frame slice file: preamble, `DICM` prefix,
  /// File Meta Information specifying Explicit VR Little Endian, frame
  /// geometry, and the given pixel samples.
  ///
  fn synthetic_slice(rows: u16, columns: u16, samples: &[u16]) -> Vec<u8> {
    let mut sample_bytes = vec![];
    for sample in samples {
      sample_bytes.extend_from_slice(&sample.to_le_bytes());
    }

    synthetic_slice_raw(Some(rows), Some(columns), &sample_bytes)
  }

  /// As [`synthetic_slice`], but with raw pixel data bytes and optional
  /// geometry elements.
  ///
  fn synthetic_slice_raw(
    rows: Option<u16>,
    columns: Option<u16>,
    pixel_data: &[u8],
  ) -> Vec<u8> {
    let mut bytes = vec![0u8; 128];
    bytes.extend_from_slice(b"DICM");

    bytes.extend_from_slice(&short_element(
      Tag::new(0x0002, 0x0010),
      b"UI",
      b"1.2.840.10008.1.2.1\0",
    ));

    if let Some(rows) = rows {
      bytes.extend_from_slice(&short_element(
        dictionary::ROWS.tag,
        b"US",
        &rows.to_le_bytes(),
      ));
    }

    if let Some(columns) = columns {
      bytes.extend_from_slice(&short_element(
        dictionary::COLUMNS.tag,
        b"US",
        &columns.to_le_bytes(),
      ));
    }

    bytes.extend_from_slice(&dictionary::PIXEL_DATA.tag.group.to_le_bytes());
    bytes
      .extend_from_slice(&dictionary::PIXEL_DATA.tag.element.to_le_bytes());
    bytes.extend_from_slice(b"OW");
    bytes.extend_from_slice(&[0, 0]);
    bytes.extend_from_slice(&(pixel_data.len() as u32).to_le_bytes());
    bytes.extend_from_slice(pixel_data);

    bytes
  }

  fn short_element(tag: Tag, vr: &[u8; 2], value: &[u8]) -> Vec<u8> {
    let mut bytes = vec![];
    bytes.extend_from_slice(&tag.group.to_le_bytes());
    bytes.extend_from_slice(&tag.element.to_le_bytes());
    bytes.extend_from_slice(vr);
    bytes.extend_from_slice(&(value.len() as u16).to_le_bytes());
    bytes.extend_from_slice(value);

    bytes
  }

  #[test]
  fn decode_2x2_test() {
    let buffer = synthetic_slice(2, 2, &[0, 65535, 32768, 255]);

    let raster = decode(&buffer).unwrap();

    assert_eq!(raster.width(), 2);
    assert_eq!(raster.height(), 2);
    assert_eq!(
      raster.data(),
      [
        0, 0, 0, 255, //
        255, 255, 255, 255, //
        255, 255, 255, 255, //
        255, 255, 255, 255
      ]
    );
  }

  #[test]
  fn decode_is_deterministic_test() {
    let buffer = synthetic_slice(3, 2, &[0, 1, 127, 128, 255, 256]);

    assert_eq!(decode(&buffer).unwrap(), decode(&buffer).unwrap());
  }

  #[test]
  fn decode_output_invariants_test() {
    let samples: Vec<u16> = (0..12).map(|i| i * 1000).collect();
    let buffer = synthetic_slice(4, 3, &samples);

    let raster = decode(&buffer).unwrap();

    // Dimension fidelity: width is columns, height is rows
    assert_eq!(raster.width(), 3);
    assert_eq!(raster.height(), 4);

    // Size invariant
    assert_eq!(raster.data().len(), 3 * 4 * 4);

    for (i, pixel) in raster.data().chunks_exact(4).enumerate() {
      // Grayscale invariant
      assert_eq!(pixel[0], pixel[1]);
      assert_eq!(pixel[1], pixel[2]);

      // Opacity invariant
      assert_eq!(pixel[3], 255);

      // Clamped sample value in row-major order
      assert_eq!(pixel[0] as u16, samples[i].min(255));
    }
  }

  #[test]
  fn decode_empty_buffer_test() {
    assert_eq!(
      decode(&[]),
      Err(DecodeError::MalformedHeader(
        ParseError::DataEndedUnexpectedly {
          when: "Reading file header".to_string(),
          offset: 0,
        }
      ))
    );
  }

  #[test]
  fn decode_garbage_buffer_test() {
    let buffer = b"this is not a dicom file at all";

    assert!(matches!(
      decode(buffer),
      Err(DecodeError::MalformedHeader(..))
    ));
  }

  #[test]
  fn decode_missing_pixel_data_test() {
    // Build a valid file then drop everything from the pixel data element's
    // header onwards
    let mut buffer = synthetic_slice(2, 2, &[1, 2, 3, 4]);
    buffer.truncate(buffer.len() - 20);

    assert_eq!(decode(&buffer), Err(DecodeError::MissingPixelData));
  }

  #[test]
  fn decode_missing_rows_test() {
    let buffer = synthetic_slice_raw(None, Some(2), &[1, 0, 2, 0]);

    assert_eq!(
      decode(&buffer),
      Err(DecodeError::MissingDimensions {
        rows: None,
        columns: Some(2),
      })
    );
  }

  #[test]
  fn decode_zero_columns_test() {
    let buffer = synthetic_slice_raw(Some(2), Some(0), &[1, 0, 2, 0]);

    assert_eq!(
      decode(&buffer),
      Err(DecodeError::MissingDimensions {
        rows: Some(2),
        columns: Some(0),
      })
    );
  }

  #[test]
  fn decode_pixel_data_size_mismatch_test() {
    // 2x2 frame but only three samples
    let buffer = synthetic_slice(2, 2, &[1, 2, 3]);

    assert_eq!(
      decode(&buffer),
      Err(DecodeError::PixelDataSizeMismatch {
        expected_bytes: 8,
        actual_bytes: 6,
      })
    );
  }

  #[test]
  fn decode_odd_length_pixel_data_test() {
    let buffer = synthetic_slice_raw(Some(1), Some(2), &[1, 0, 2]);

    assert_eq!(
      decode(&buffer),
      Err(DecodeError::PixelDataSizeMismatch {
        expected_bytes: 4,
        actual_bytes: 3,
      })
    );
  }
}
