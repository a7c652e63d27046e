//! The DICOM transfer syntaxes supported when parsing slice files.

/// The transfer syntaxes that scanpix is able to parse. Uncompressed
/// little-endian data only: compressed and encapsulated transfer syntaxes
/// are out of scope for slice previewing.
///
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TransferSyntax {
  ImplicitVrLittleEndian,
  ExplicitVrLittleEndian,
}

impl std::fmt::Display for TransferSyntax {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    f.write_str(self.uid())
  }
}

impl TransferSyntax {
  /// Returns the transfer syntax for a UID. Errors when the UID names a
  /// transfer syntax that isn't supported.
  ///
  pub fn from_uid(uid: &str) -> Result<Self, ()> {
    match uid {
      "1.2.840.10008.1.2" => Ok(TransferSyntax::ImplicitVrLittleEndian),
      "1.2.840.10008.1.2.1" => Ok(TransferSyntax::ExplicitVrLittleEndian),
      _ => Err(()),
    }
  }

  /// Returns the UID for a transfer syntax.
  ///
  pub fn uid(&self) -> &'static str {
    match self {
      TransferSyntax::ImplicitVrLittleEndian => "1.2.840.10008.1.2",
      TransferSyntax::ExplicitVrLittleEndian => "1.2.840.10008.1.2.1",
    }
  }

  /// Returns whether data elements carry an explicit VR code in this transfer
  /// syntax.
  ///
  pub fn is_explicit_vr(&self) -> bool {
    *self == TransferSyntax::ExplicitVrLittleEndian
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_uid_test() {
    assert_eq!(
      TransferSyntax::from_uid("1.2.840.10008.1.2.1"),
      Ok(TransferSyntax::ExplicitVrLittleEndian)
    );

    // JPEG Baseline is a compressed transfer syntax
    assert_eq!(TransferSyntax::from_uid("1.2.840.10008.1.2.4.50"), Err(()));
  }

  #[test]
  fn is_explicit_vr_test() {
    assert!(TransferSyntax::ExplicitVrLittleEndian.is_explicit_vr());
    assert!(!TransferSyntax::ImplicitVrLittleEndian.is_explicit_vr());
  }
}
