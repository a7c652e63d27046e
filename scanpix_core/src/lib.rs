//! Core types for working with DICOM slice metadata: tags, value
//! representations, metadata tables, transfer syntaxes, and a dictionary of
//! the well-known data elements used when preparing scans for display.

pub mod dictionary;
pub mod element;
pub mod error;
pub mod metadata_table;
pub mod tag;
pub mod transfer_syntax;
pub mod vr;

pub use element::Element;
pub use error::ScanpixError;
pub use metadata_table::MetadataTable;
pub use tag::Tag;
pub use transfer_syntax::TransferSyntax;
pub use vr::Vr;
