//! Defines the type used to describe errors that can occur when bundling
//! scan files into an archive.

use scanpix_core::ScanpixError;

/// An error that occurred when adding a file to a [`crate::ScanBundle`].
///
#[derive(Clone, Debug, PartialEq)]
pub enum BundleError {
  /// The file's name is empty, contains a path separator, or is a relative
  /// path component. Entry names inside the archive's `CT/` and `PET/`
  /// folders must be plain file names.
  InvalidFileName { name: String },

  /// A file with the same name has already been added to the same folder.
  DuplicateFileName { name: String },

  /// Compressing the file's data failed.
  CompressionFailed { details: String },
}

impl std::fmt::Display for BundleError {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "Scan bundle error: {}", self.name())
  }
}

impl BundleError {
  /// Returns the name of the error as a human-readable string.
  ///
  pub fn name(&self) -> &'static str {
    match self {
      BundleError::InvalidFileName { .. } => "Invalid file name",
      BundleError::DuplicateFileName { .. } => "Duplicate file name",
      BundleError::CompressionFailed { .. } => "Compression failed",
    }
  }
}

impl ScanpixError for BundleError {
  /// Returns lines of text that describe a bundle error in a human-readable
  /// format.
  ///
  fn to_lines(&self, task_description: &str) -> Vec<String> {
    let mut lines = vec![
      format!("Scan bundle error {}", task_description),
      "".to_string(),
      format!("  Error: {}", self.name()),
    ];

    match self {
      BundleError::InvalidFileName { name }
      | BundleError::DuplicateFileName { name } => {
        lines.push(format!("  File name: {}", name));
      }

      BundleError::CompressionFailed { details } => {
        lines.push(format!("  Details: {}", details));
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
      BundleError::InvalidFileName {
        name: "../escape.dcm".to_string(),
      }
      .to_lines("bundling scans")
      .join("\n"),
      r#"Scan bundle error bundling scans

  Error: Invalid file name
  File name: ../escape.dcm"#
    );
  }
}
