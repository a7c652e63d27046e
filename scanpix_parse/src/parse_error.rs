//! Defines the type used to describe errors that can occur when parsing
//! DICOM slice data.

use scanpix_core::ScanpixError;

/// An error that occurred when parsing a DICOM buffer into a metadata table.
///
#[derive(Clone, Debug, PartialEq)]
pub enum ParseError {
  /// The end of the buffer was reached in the middle of a structure, i.e. the
  /// data is truncated or not DICOM at all.
  DataEndedUnexpectedly { when: String, offset: usize },

  /// The buffer's structure is invalid, e.g. a data element with an
  /// unrecognized VR, or an undefined-length value which scanpix does not
  /// support.
  DataInvalid {
    when: String,
    details: String,
    offset: usize,
  },

  /// The buffer specifies a transfer syntax that scanpix can't parse, such as
  /// one of the compressed transfer syntaxes.
  TransferSyntaxNotSupported { transfer_syntax_uid: String },
}

impl std::fmt::Display for ParseError {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "DICOM parse error: {}", self.name())
  }
}

impl ParseError {
  /// Returns the name of the error as a human-readable string.
  ///
  pub fn name(&self) -> &'static str {
    match self {
      ParseError::DataEndedUnexpectedly { .. } => "Unexpected end of data",
      ParseError::DataInvalid { .. } => "Invalid data",
      ParseError::TransferSyntaxNotSupported { .. } => {
        "Transfer syntax not supported"
      }
    }
  }
}

impl ScanpixError for ParseError {
  /// Returns lines of text that describe a parse error in a human-readable
  /// format.
  ///
  fn to_lines(&self, task_description: &str) -> Vec<String> {
    let mut lines = vec![
      format!("DICOM parse error {}", task_description),
      "".to_string(),
      format!("  Error: {}", self.name()),
    ];

    match self {
      ParseError::DataEndedUnexpectedly { when, offset } => {
        lines.push(format!("  When: {}", when));
        lines.push(format!("  Offset: 0x{:X}", offset));
      }

      ParseError::DataInvalid {
        when,
        details,
        offset,
      } => {
        lines.push(format!("  When: {}", when));
        lines.push(format!("  Details: {}", details));
        lines.push(format!("  Offset: 0x{:X}", offset));
      }

      ParseError::TransferSyntaxNotSupported {
        transfer_syntax_uid,
      } => {
        lines.push(format!("  Transfer syntax UID: {}", transfer_syntax_uid));
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
      ParseError::DataEndedUnexpectedly {
        when: "Reading data element header".to_string(),
        offset: 0x20,
      }
      .to_lines("parsing file \"a.dcm\"")
      .join("\n"),
      r#"DICOM parse error parsing file "a.dcm"

  Error: Unexpected end of data
  When: Reading data element header
  Offset: 0x20"#
    );

    assert_eq!(
      ParseError::TransferSyntaxNotSupported {
        transfer_syntax_uid: "1.2.840.10008.1.2.4.50".to_string(),
      }
      .to_lines("testing")
      .join("\n"),
      r#"DICOM parse error testing

  Error: Transfer syntax not supported
  Transfer syntax UID: 1.2.840.10008.1.2.4.50"#
    );
  }
}
