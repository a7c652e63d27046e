//! Bundles a set of CT and PET slice files into a single ZIP archive for
//! download or transfer.
//!
//! The archive has exactly two top-level folders, `CT/` and `PET/`, with
//! each slice file stored under the folder for its modality. Archive output
//! is byte-for-byte deterministic: entries appear in the order they were
//! added and all entries carry a fixed modification timestamp, so bundling
//! the same files always produces the same bytes.

mod bundle_error;

pub use bundle_error::BundleError;

use std::io::Write;

use flate2::write::DeflateEncoder;
use flate2::{Compression, Crc};

/// The fixed DOS date stamped on every archive entry: 1980-01-01, the
/// earliest date the ZIP format can represent.
const ENTRY_DOS_DATE: u16 = (1 << 5) | 1;

const COMPRESSION_METHOD_STORED: u16 = 0;
const COMPRESSION_METHOD_DEFLATED: u16 = 8;

/// An in-progress scan bundle. Files are added to either the CT or the PET
/// folder, then the whole bundle is serialized to a ZIP archive with
/// [`ScanBundle::to_zip_bytes`].
///
#[derive(Debug, Default)]
pub struct ScanBundle {
  entries: Vec<Entry>,
}

/// A single archive entry with its data already compressed.
///
#[derive(Debug)]
struct Entry {
  name: String,
  compression_method: u16,
  crc32: u32,
  compressed_data: Vec<u8>,
  uncompressed_size: u32,
}

impl ScanBundle {
  /// Creates a new empty scan bundle.
  ///
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds a slice file to the bundle's `CT/` folder.
  ///
  pub fn add_ct_file(
    &mut self,
    name: &str,
    data: &[u8],
  ) -> Result<(), BundleError> {
    self.add_file("CT", name, data)
  }

  /// Adds a slice file to the bundle's `PET/` folder.
  ///
  pub fn add_pet_file(
    &mut self,
    name: &str,
    data: &[u8],
  ) -> Result<(), BundleError> {
    self.add_file("PET", name, data)
  }

  /// Returns the number of files in the bundle.
  ///
  pub fn file_count(&self) -> usize {
    self.entries.len()
  }

  /// Returns whether the bundle contains no files.
  ///
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  fn add_file(
    &mut self,
    folder: &str,
    name: &str,
    data: &[u8],
  ) -> Result<(), BundleError> {
    if name.is_empty()
      || name == "."
      || name == ".."
      || name.contains(['/', '\\'])
    {
      return Err(BundleError::InvalidFileName {
        name: name.to_string(),
      });
    }

    let entry_name = format!("{}/{}", folder, name);

    if self.entries.iter().any(|entry| entry.name == entry_name) {
      return Err(BundleError::DuplicateFileName { name: entry_name });
    }

    let mut crc = Crc::new();
    crc.update(data);

    let (compression_method, compressed_data) = compress_entry_data(data)?;

    self.entries.push(Entry {
      name: entry_name,
      compression_method,
      crc32: crc.sum(),
      compressed_data,
      uncompressed_size: data.len() as u32,
    });

    Ok(())
  }

  /// Serializes the bundle to the bytes of a ZIP archive.
  ///
  pub fn to_zip_bytes(&self) -> Vec<u8> {
    let mut bytes = vec![];
    let mut local_header_offsets = Vec::with_capacity(self.entries.len());

    // Local file headers, each followed by the entry's data
    for entry in self.entries.iter() {
      local_header_offsets.push(bytes.len() as u32);

      put_u32(&mut bytes, 0x04034B50);
      put_u16(&mut bytes, 20); // Version needed to extract
      put_u16(&mut bytes, 0); // General purpose bit flag
      put_u16(&mut bytes, entry.compression_method);
      put_u16(&mut bytes, 0); // Modification time
      put_u16(&mut bytes, ENTRY_DOS_DATE);
      put_u32(&mut bytes, entry.crc32);
      put_u32(&mut bytes, entry.compressed_data.len() as u32);
      put_u32(&mut bytes, entry.uncompressed_size);
      put_u16(&mut bytes, entry.name.len() as u16);
      put_u16(&mut bytes, 0); // Extra field length
      bytes.extend_from_slice(entry.name.as_bytes());

      bytes.extend_from_slice(&entry.compressed_data);
    }

    // Central directory
    let central_directory_offset = bytes.len() as u32;

    for (entry, local_header_offset) in
      self.entries.iter().zip(local_header_offsets)
    {
      put_u32(&mut bytes, 0x02014B50);
      put_u16(&mut bytes, 20); // Version made by
      put_u16(&mut bytes, 20); // Version needed to extract
      put_u16(&mut bytes, 0); // General purpose bit flag
      put_u16(&mut bytes, entry.compression_method);
      put_u16(&mut bytes, 0); // Modification time
      put_u16(&mut bytes, ENTRY_DOS_DATE);
      put_u32(&mut bytes, entry.crc32);
      put_u32(&mut bytes, entry.compressed_data.len() as u32);
      put_u32(&mut bytes, entry.uncompressed_size);
      put_u16(&mut bytes, entry.name.len() as u16);
      put_u16(&mut bytes, 0); // Extra field length
      put_u16(&mut bytes, 0); // File comment length
      put_u16(&mut bytes, 0); // Disk number start
      put_u16(&mut bytes, 0); // Internal file attributes
      put_u32(&mut bytes, 0); // External file attributes
      put_u32(&mut bytes, local_header_offset);
      bytes.extend_from_slice(entry.name.as_bytes());
    }

    let central_directory_size =
      bytes.len() as u32 - central_directory_offset;

    // End of central directory record
    put_u32(&mut bytes, 0x06054B50);
    put_u16(&mut bytes, 0); // Disk number
    put_u16(&mut bytes, 0); // Disk with the central directory
    put_u16(&mut bytes, self.entries.len() as u16);
    put_u16(&mut bytes, self.entries.len() as u16);
    put_u32(&mut bytes, central_directory_size);
    put_u32(&mut bytes, central_directory_offset);
    put_u16(&mut bytes, 0); // Comment length

    bytes
  }
}

/// Deflates the given entry data, falling back to storing it uncompressed
/// when deflate doesn't make it smaller.
///
fn compress_entry_data(data: &[u8]) -> Result<(u16, Vec<u8>), BundleError> {
  let mut encoder = DeflateEncoder::new(vec![], Compression::default());

  let deflated = encoder
    .write_all(data)
    .and_then(|_| encoder.finish())
    .map_err(|e| BundleError::CompressionFailed {
      details: e.to_string(),
    })?;

  if deflated.len() < data.len() {
    Ok((COMPRESSION_METHOD_DEFLATED, deflated))
  } else {
    Ok((COMPRESSION_METHOD_STORED, data.to_vec()))
  }
}

fn put_u16(bytes: &mut Vec<u8>, value: u16) {
  bytes.extend_from_slice(&value.to_le_bytes());
}

fn put_u32(bytes: &mut Vec<u8>, value: u32) {
  bytes.extend_from_slice(&value.to_le_bytes());
}

#[cfg(test)]
mod tests {
  use super::*;

  use std::io::Read;

  /// Reads the entry count out of an archive's end of central directory
  /// record, which is the archive's final 22 bytes when there is no archive
  /// comment.
  ///
  fn archive_entry_count(zip: &[u8]) -> u16 {
    let eocd = &zip[zip.len() - 22..];
    assert_eq!(&eocd[0..4], &[0x50, 0x4B, 0x05, 0x06]);

    u16::from_le_bytes([eocd[10], eocd[11]])
  }

  #[test]
  fn archive_layout_test() {
    let mut bundle = ScanBundle::new();
    bundle.add_ct_file("slice-001.dcm", &[0x11; 64]).unwrap();
    bundle.add_pet_file("slice-001.dcm", &[0x22; 64]).unwrap();

    assert_eq!(bundle.file_count(), 2);

    let zip = bundle.to_zip_bytes();

    // Starts with a local file header signature
    assert_eq!(&zip[0..4], &[0x50, 0x4B, 0x03, 0x04]);

    assert_eq!(archive_entry_count(&zip), 2);

    // Each entry name appears twice: once in its local file header and once
    // in the central directory
    for name in [&b"CT/slice-001.dcm"[..], &b"PET/slice-001.dcm"[..]] {
      let occurrences = zip
        .windows(name.len())
        .filter(|window| *window == name)
        .count();

      assert_eq!(occurrences, 2);
    }
  }

  #[test]
  fn stored_entry_test() {
    // Tiny data doesn't shrink under deflate so it's stored uncompressed
    let mut bundle = ScanBundle::new();
    bundle.add_ct_file("h.dcm", b"hello").unwrap();

    let zip = bundle.to_zip_bytes();

    // Compression method, CRC-32, and sizes in the local file header
    assert_eq!(&zip[8..10], &0u16.to_le_bytes());
    assert_eq!(&zip[14..18], &0x3610A686u32.to_le_bytes());
    assert_eq!(&zip[18..22], &5u32.to_le_bytes());
    assert_eq!(&zip[22..26], &5u32.to_le_bytes());

    // The data follows the 30-byte header and the entry name verbatim
    let data_offset = 30 + "CT/h.dcm".len();
    assert_eq!(&zip[data_offset..data_offset + 5], b"hello");
  }

  #[test]
  fn deflated_entry_test() {
    let data = vec![0x42u8; 4096];

    let mut bundle = ScanBundle::new();
    bundle.add_pet_file("big.dcm", &data).unwrap();

    let zip = bundle.to_zip_bytes();

    // Compression method in the local file header
    assert_eq!(&zip[8..10], &8u16.to_le_bytes());

    let compressed_size =
      u32::from_le_bytes([zip[18], zip[19], zip[20], zip[21]]) as usize;
    assert!(compressed_size < data.len());

    // Inflating the entry's data recovers the original bytes
    let data_offset = 30 + "PET/big.dcm".len();
    let mut inflated = vec![];
    flate2::read::DeflateDecoder::new(
      &zip[data_offset..data_offset + compressed_size],
    )
    .read_to_end(&mut inflated)
    .unwrap();

    assert_eq!(inflated, data);
  }

  #[test]
  fn determinism_test() {
    let build = || {
      let mut bundle = ScanBundle::new();
      bundle.add_ct_file("a.dcm", &[1, 2, 3]).unwrap();
      bundle.add_ct_file("b.dcm", &[4; 2000]).unwrap();
      bundle.add_pet_file("a.dcm", &[5, 6]).unwrap();

      bundle.to_zip_bytes()
    };

    assert_eq!(build(), build());
  }

  #[test]
  fn empty_bundle_test() {
    let bundle = ScanBundle::new();

    assert!(bundle.is_empty());

    let zip = bundle.to_zip_bytes();

    // An empty archive is just the end of central directory record
    assert_eq!(zip.len(), 22);
    assert_eq!(archive_entry_count(&zip), 0);
  }

  #[test]
  fn invalid_file_name_test() {
    let mut bundle = ScanBundle::new();

    for name in ["", ".", "..", "nested/file.dcm", "nested\\file.dcm"] {
      assert_eq!(
        bundle.add_ct_file(name, &[0]),
        Err(BundleError::InvalidFileName {
          name: name.to_string(),
        })
      );
    }

    assert!(bundle.is_empty());
  }

  #[test]
  fn duplicate_file_name_test() {
    let mut bundle = ScanBundle::new();
    bundle.add_ct_file("slice.dcm", &[0]).unwrap();

    assert_eq!(
      bundle.add_ct_file("slice.dcm", &[1]),
      Err(BundleError::DuplicateFileName {
        name: "CT/slice.dcm".to_string(),
      })
    );

    // The same name is fine in the other modality's folder
    bundle.add_pet_file("slice.dcm", &[2]).unwrap();

    assert_eq!(bundle.file_count(), 2);
  }
}
