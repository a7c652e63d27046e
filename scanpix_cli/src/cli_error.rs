//! Defines the type used to describe errors encountered by CLI commands.

use scanpix::bundle::BundleError;
use scanpix::core::ScanpixError;
use scanpix::parse::ParseError;
use scanpix::raster::DecodeError;

/// An error that occurred while running a CLI command. Wraps the library
/// error types and adds a variant for file system errors.
///
pub enum CliError {
  FileError { when: String, details: String },
  ParseFailed(ParseError),
  DecodeFailed(DecodeError),
  BundleFailed(BundleError),
}

impl ScanpixError for CliError {
  fn to_lines(&self, task_description: &str) -> Vec<String> {
    match self {
      CliError::FileError { when, details } => vec![
        format!("File error {}", task_description),
        "".to_string(),
        format!("  When: {}", when),
        format!("  Details: {}", details),
      ],

      CliError::ParseFailed(error) => error.to_lines(task_description),
      CliError::DecodeFailed(error) => error.to_lines(task_description),
      CliError::BundleFailed(error) => error.to_lines(task_description),
    }
  }
}
