//! Scanpix is a collection of libraries and a CLI tool for decoding
//! single-frame grayscale DICOM scan slices, such as CT and PET series
//! exports, into display-ready raster images, and for bundling slice files
//! into archives.

/// Bundles a set of CT and PET slice files into a single ZIP archive.
///
pub mod bundle {
  pub use scanpix_bundle::*;
}

/// Provides core DICOM concepts including tags, value representations,
/// transfer syntaxes, metadata tables, and a registry of the data elements
/// this library understands.
///
pub mod core {
  pub use scanpix_core::*;
}

/// Parses the binary layout of a single-file DICOM buffer into a metadata
/// table of data element locations.
///
pub mod parse {
  pub use scanpix_parse::*;
}

/// Decodes a parsed slice's pixel data into an RGBA raster image.
///
pub mod raster {
  pub use scanpix_raster::*;
}
