//! The decoded, display-ready pixel grid produced by a successful decode.

use image::{codecs::png::PngEncoder, ExtendedColorType, ImageEncoder};

/// An RGBA raster with four 8-bit channels per pixel, stored in row-major
/// order. The pixel data is always exactly `width * height * 4` bytes.
///
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RasterImage {
  width: u32,
  height: u32,
  data: Vec<u8>,
}

impl RasterImage {
  /// Creates a new raster image from RGBA pixel data, which must be exactly
  /// `width * height * 4` bytes long.
  ///
  pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
    debug_assert_eq!(data.len(), width as usize * height as usize * 4);

    Self {
      width,
      height,
      data,
    }
  }

  /// Creates an opaque all-black raster of the given size, used as a
  /// stand-in when a slice fails to decode.
  ///
  pub fn placeholder(width: u32, height: u32) -> Self {
    let mut data = vec![0u8; width as usize * height as usize * 4];

    for alpha in data.iter_mut().skip(3).step_by(4) {
      *alpha = 0xFF;
    }

    Self {
      width,
      height,
      data,
    }
  }

  /// Returns the width of the raster in pixels.
  ///
  pub fn width(&self) -> u32 {
    self.width
  }

  /// Returns the height of the raster in pixels.
  ///
  pub fn height(&self) -> u32 {
    self.height
  }

  /// Returns the raw RGBA pixel data.
  ///
  pub fn data(&self) -> &[u8] {
    &self.data
  }

  /// Consumes the raster and returns its RGBA pixel data.
  ///
  pub fn into_data(self) -> Vec<u8> {
    self.data
  }

  /// Encodes the raster as a PNG image.
  ///
  pub fn to_png(&self) -> Result<Vec<u8>, image::ImageError> {
    let mut bytes = vec![];

    PngEncoder::new(&mut bytes).write_image(
      &self.data,
      self.width,
      self.height,
      ExtendedColorType::Rgba8,
    )?;

    Ok(bytes)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn placeholder_test() {
    let raster = RasterImage::placeholder(2, 3);

    assert_eq!(raster.width(), 2);
    assert_eq!(raster.height(), 3);
    assert_eq!(raster.data().len(), 24);

    for pixel in raster.data().chunks_exact(4) {
      assert_eq!(pixel, [0, 0, 0, 0xFF]);
    }
  }

  #[test]
  fn to_png_test() {
    let raster = RasterImage::new(2, 1, vec![0, 0, 0, 255, 9, 9, 9, 255]);

    let png = raster.to_png().unwrap();
    assert_eq!(&png[0..8], b"\x89PNG\r\n\x1a\n");

    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.width(), 2);
    assert_eq!(decoded.height(), 1);
    assert_eq!(decoded.into_raw(), raster.into_data());
  }
}
