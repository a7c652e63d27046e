//! Defines the type used to describe errors that can occur when decoding a
//! slice into a raster image.

use scanpix_core::ScanpixError;
use scanpix_parse::ParseError;

/// An error that occurred when decoding a DICOM buffer into an RGBA raster.
/// Every failure is terminal for that decode call: no partial raster is ever
/// returned.
///
#[derive(Clone, Debug, PartialEq)]
pub enum DecodeError {
  /// The buffer's structured metadata region couldn't be parsed.
  MalformedHeader(ParseError),

  /// The *'(7FE0,0010) Pixel Data'* element is absent from the metadata
  /// table.
  MissingPixelData,

  /// The *'(0028,0010) Rows'* or *'(0028,0011) Columns'* element is absent,
  /// unreadable, or zero.
  MissingDimensions {
    rows: Option<u16>,
    columns: Option<u16>,
  },

  /// The pixel data's byte length does not match the frame geometry, i.e.
  /// its sample count is not `rows * columns`.
  PixelDataSizeMismatch {
    expected_bytes: usize,
    actual_bytes: usize,
  },
}

impl std::fmt::Display for DecodeError {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "DICOM decode error: {}", self.name())
  }
}

impl DecodeError {
  /// Returns the name of the error as a human-readable string.
  ///
  pub fn name(&self) -> &'static str {
    match self {
      DecodeError::MalformedHeader(..) => "Malformed header",
      DecodeError::MissingPixelData => "Missing pixel data",
      DecodeError::MissingDimensions { .. } => "Missing dimensions",
      DecodeError::PixelDataSizeMismatch { .. } => "Pixel data size mismatch",
    }
  }
}

impl ScanpixError for DecodeError {
  /// Returns lines of text that describe a decode error in a human-readable
  /// format.
  ///
  fn to_lines(&self, task_description: &str) -> Vec<String> {
    let mut lines = vec![
      format!("DICOM decode error {}", task_description),
      "".to_string(),
      format!("  Error: {}", self.name()),
    ];

    match self {
      DecodeError::MalformedHeader(parse_error) => {
        lines.push(format!("  Details: {}", parse_error));
      }

      DecodeError::MissingPixelData => (),

      DecodeError::MissingDimensions { rows, columns } => {
        fn dimension_to_string(dimension: &Option<u16>) -> String {
          match dimension {
            Some(value) => value.to_string(),
            None => "<absent>".to_string(),
          }
        }

        lines.push(format!("  Rows: {}", dimension_to_string(rows)));
        lines.push(format!("  Columns: {}", dimension_to_string(columns)));
      }

      DecodeError::PixelDataSizeMismatch {
        expected_bytes,
        actual_bytes,
      } => {
        lines.push(format!("  Expected: {} bytes", expected_bytes));
        lines.push(format!("  Actual: {} bytes", actual_bytes));
      }
    }

    lines
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn to_lines_test() {
    assert_eq!(
      DecodeError::MissingDimensions {
        rows: Some(0),
        columns: None,
      }
      .to_lines("decoding file \"a.dcm\"")
      .join("\n"),
      r#"DICOM decode error decoding file "a.dcm"

  Error: Missing dimensions
  Rows: 0
  Columns: <absent>"#
    );

    assert_eq!(
      DecodeError::PixelDataSizeMismatch {
        expected_bytes: 8,
        actual_bytes: 6,
      }
      .to_lines("testing")
      .join("\n"),
      r#"DICOM decode error testing

  Error: Pixel data size mismatch
  Expected: 8 bytes
  Actual: 6 bytes"#
    );

    assert_eq!(
      DecodeError::MissingPixelData.to_lines("testing").join("\n"),
      r#"DICOM decode error testing

  Error: Missing pixel data"#
    );
  }
}
