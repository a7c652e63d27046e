//! Parses single-file DICOM byte buffers into a [`MetadataTable`].
//!
//! Parsing is a single pass over an in-memory buffer: the optional 128-byte
//! File Preamble and `DICM` prefix, then the File Meta Information (always
//! encoded with explicit VRs), then the main data set in the transfer syntax
//! the File Meta Information specifies. Element values are never copied,
//! each parsed element records the offset and length of its value bytes in
//! the source buffer.
//!
//! Only the uncompressed little-endian transfer syntaxes are supported.
//! Deflated, encapsulated and big-endian data is rejected, as are
//! undefined-length sequences.

mod parse_error;
mod reader;

mod internal {
  pub mod byte_cursor;
}

pub use parse_error::ParseError;
pub use reader::parse;

pub use scanpix_core::MetadataTable;
