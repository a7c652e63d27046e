//! DICOM value representations (VRs).
//!
//! See [section 6.2](https://dicom.nema.org/medical/dicom/current/output/chtml/part05/sect_6.2.html)
//! of the DICOM specification for VR definitions.

/// All DICOM value representations (VRs).
///
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Vr {
  AgeString,
  ApplicationEntity,
  AttributeTag,
  CodeString,
  Date,
  DateTime,
  DecimalString,
  FloatingPointDouble,
  FloatingPointSingle,
  IntegerString,
  LongString,
  LongText,
  OtherByteString,
  OtherDoubleString,
  OtherFloatString,
  OtherLongString,
  OtherVeryLongString,
  OtherWordString,
  PersonName,
  Sequence,
  ShortString,
  ShortText,
  SignedLong,
  SignedShort,
  SignedVeryLong,
  Time,
  UniqueIdentifier,
  UniversalResourceIdentifier,
  Unknown,
  UnlimitedCharacters,
  UnlimitedText,
  UnsignedLong,
  UnsignedShort,
  UnsignedVeryLong,
}

impl std::fmt::Display for Vr {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    let bytes = self.to_bytes();
    write!(f, "{}{}", bytes[0] as char, bytes[1] as char)
  }
}

impl Vr {
  /// Converts a two-character code, e.g. `b"US"`, into a value
  /// representation.
  ///
  #[allow(clippy::result_unit_err)]
  pub fn from_bytes(bytes: &[u8]) -> Result<Self, ()> {
    match bytes {
      b"AE" => Ok(Vr::ApplicationEntity),
      b"AS" => Ok(Vr::AgeString),
      b"AT" => Ok(Vr::AttributeTag),
      b"CS" => Ok(Vr::CodeString),
      b"DA" => Ok(Vr::Date),
      b"DS" => Ok(Vr::DecimalString),
      b"DT" => Ok(Vr::DateTime),
      b"FD" => Ok(Vr::FloatingPointDouble),
      b"FL" => Ok(Vr::FloatingPointSingle),
      b"IS" => Ok(Vr::IntegerString),
      b"LO" => Ok(Vr::LongString),
      b"LT" => Ok(Vr::LongText),
      b"OB" => Ok(Vr::OtherByteString),
      b"OD" => Ok(Vr::OtherDoubleString),
      b"OF" => Ok(Vr::OtherFloatString),
      b"OL" => Ok(Vr::OtherLongString),
      b"OV" => Ok(Vr::OtherVeryLongString),
      b"OW" => Ok(Vr::OtherWordString),
      b"PN" => Ok(Vr::PersonName),
      b"SH" => Ok(Vr::ShortString),
      b"SL" => Ok(Vr::SignedLong),
      b"SQ" => Ok(Vr::Sequence),
      b"SS" => Ok(Vr::SignedShort),
      b"ST" => Ok(Vr::ShortText),
      b"SV" => Ok(Vr::SignedVeryLong),
      b"TM" => Ok(Vr::Time),
      b"UC" => Ok(Vr::UnlimitedCharacters),
      b"UI" => Ok(Vr::UniqueIdentifier),
      b"UL" => Ok(Vr::UnsignedLong),
      b"UN" => Ok(Vr::Unknown),
      b"UR" => Ok(Vr::UniversalResourceIdentifier),
      b"US" => Ok(Vr::UnsignedShort),
      b"UT" => Ok(Vr::UnlimitedText),
      b"UV" => Ok(Vr::UnsignedVeryLong),

      _ => Err(()),
    }
  }

  /// Converts a value representation to its two-byte character code.
  ///
  pub fn to_bytes(&self) -> [u8; 2] {
    match self {
      Vr::AgeString => *b"AS",
      Vr::ApplicationEntity => *b"AE",
      Vr::AttributeTag => *b"AT",
      Vr::CodeString => *b"CS",
      Vr::Date => *b"DA",
      Vr::DateTime => *b"DT",
      Vr::DecimalString => *b"DS",
      Vr::FloatingPointDouble => *b"FD",
      Vr::FloatingPointSingle => *b"FL",
      Vr::IntegerString => *b"IS",
      Vr::LongString => *b"LO",
      Vr::LongText => *b"LT",
      Vr::OtherByteString => *b"OB",
      Vr::OtherDoubleString => *b"OD",
      Vr::OtherFloatString => *b"OF",
      Vr::OtherLongString => *b"OL",
      Vr::OtherVeryLongString => *b"OV",
      Vr::OtherWordString => *b"OW",
      Vr::PersonName => *b"PN",
      Vr::Sequence => *b"SQ",
      Vr::ShortString => *b"SH",
      Vr::ShortText => *b"ST",
      Vr::SignedLong => *b"SL",
      Vr::SignedShort => *b"SS",
      Vr::SignedVeryLong => *b"SV",
      Vr::Time => *b"TM",
      Vr::UniqueIdentifier => *b"UI",
      Vr::UniversalResourceIdentifier => *b"UR",
      Vr::Unknown => *b"UN",
      Vr::UnlimitedCharacters => *b"UC",
      Vr::UnlimitedText => *b"UT",
      Vr::UnsignedLong => *b"UL",
      Vr::UnsignedShort => *b"US",
      Vr::UnsignedVeryLong => *b"UV",
    }
  }

  /// Returns whether this VR stores a 32-bit value length in the DICOM
  /// explicit VR encoding. VRs not listed here store a 16-bit length and have
  /// no reserved bytes following the VR code.
  ///
  pub fn has_u32_length(&self) -> bool {
    matches!(
      self,
      Vr::OtherByteString
        | Vr::OtherDoubleString
        | Vr::OtherFloatString
        | Vr::OtherLongString
        | Vr::OtherVeryLongString
        | Vr::OtherWordString
        | Vr::Sequence
        | Vr::SignedVeryLong
        | Vr::UniversalResourceIdentifier
        | Vr::Unknown
        | Vr::UnlimitedCharacters
        | Vr::UnlimitedText
        | Vr::UnsignedVeryLong
    )
  }
}
