//! The canonical in-memory bitmap: an unpadded, top-to-bottom pixel buffer
//! plus its dimensions and color depth.
//!
//! Rows on disk are stored bottom-up and padded to a 4-byte boundary; both
//! of those are serialization-boundary concerns handled by the encoder and
//! decoder. A `Bitmap` never contains padding and its rows always run
//! top-to-bottom. Pixel bytes are kept in BMP channel order (B,G,R for
//! 24-bit, B,G,R,A for 32-bit).

use alloc::format;
use alloc::vec::Vec;

use crate::error::BmpError;
use crate::header::BitsPerPixel;
use crate::limits::Limits;

/// On-disk bytes per row, padded up to a 4-byte boundary. `None` when the
/// arithmetic would overflow `usize`.
pub(crate) fn checked_row_stride(width: usize, bytes_per_pixel: usize) -> Option<usize> {
    width
        .checked_mul(bytes_per_pixel)
        .and_then(|live| live.checked_add(3))
        .map(|live| live & !3)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    bits_per_pixel: BitsPerPixel,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Create a bitmap from a canonical pixel buffer.
    ///
    /// `pixels` must be exactly `width * height * bytes_per_pixel` bytes of
    /// unpadded, top-to-bottom row-major data.
    pub fn new(
        width: u32,
        height: u32,
        pixels: Vec<u8>,
        bits_per_pixel: BitsPerPixel,
    ) -> Result<Self, BmpError> {
        if width == 0 || height == 0 {
            return Err(BmpError::InvalidArgument(format!(
                "image dimensions must be positive, got {width}x{height}"
            )));
        }
        // Headers store dimensions as i32.
        if width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(BmpError::DimensionsTooLarge { width, height });
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|wh| wh.checked_mul(bits_per_pixel.bytes_per_pixel()))
            .ok_or(BmpError::DimensionsTooLarge { width, height })?;
        if pixels.len() != expected {
            return Err(BmpError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            bits_per_pixel,
            pixels,
        })
    }

    /// Decode a complete BMP file from memory.
    pub fn decode(data: &[u8]) -> Result<Self, BmpError> {
        crate::decode::decode_bmp(data, None)
    }

    /// Decode with resource limits applied after header parsing, before any
    /// pixel buffer is allocated.
    pub fn decode_with_limits(data: &[u8], limits: &Limits) -> Result<Self, BmpError> {
        crate::decode::decode_bmp(data, Some(limits))
    }

    /// Encode to a complete, byte-exact BMP file.
    pub fn encode(&self) -> Result<Vec<u8>, BmpError> {
        crate::encode::encode_bmp(self)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bits_per_pixel(&self) -> BitsPerPixel {
        self.bits_per_pixel
    }

    pub fn bytes_per_pixel(&self) -> usize {
        self.bits_per_pixel.bytes_per_pixel()
    }

    /// The canonical pixel buffer: unpadded, top-to-bottom.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Live bytes in one row of the canonical buffer.
    pub fn bytes_per_row(&self) -> usize {
        self.width as usize * self.bytes_per_pixel()
    }

    /// On-disk row stride: [`Self::bytes_per_row`] padded to a 4-byte
    /// boundary.
    pub fn row_stride(&self) -> usize {
        // Cannot overflow: `new` validated width * height * bpp.
        (self.bytes_per_row() + 3) & !3
    }

    /// A copy of the pixel buffer with row order reversed. Applying this
    /// twice reproduces the original buffer.
    pub fn flipped_pixels(&self) -> Vec<u8> {
        let row = self.bytes_per_row();
        let mut out = Vec::with_capacity(self.pixels.len());
        for chunk in self.pixels.chunks_exact(row).rev() {
            out.extend_from_slice(chunk);
        }
        out
    }

    /// View the buffer as typed BGR pixels. Fails unless the bitmap is
    /// 24-bit.
    #[cfg(feature = "rgb")]
    pub fn as_bgr_pixels(&self) -> Result<&[rgb::alt::BGR8], BmpError> {
        use rgb::AsPixels as _;
        if self.bits_per_pixel != BitsPerPixel::Rgb24 {
            return Err(BmpError::LayoutMismatch {
                requested: 24,
                actual: self.bits_per_pixel.bits(),
            });
        }
        Ok(self.pixels.as_pixels())
    }

    /// View the buffer as typed BGRA pixels. Fails unless the bitmap is
    /// 32-bit.
    #[cfg(feature = "rgb")]
    pub fn as_bgra_pixels(&self) -> Result<&[rgb::alt::BGRA8], BmpError> {
        use rgb::AsPixels as _;
        if self.bits_per_pixel != BitsPerPixel::Rgba32 {
            return Err(BmpError::LayoutMismatch {
                requested: 32,
                actual: self.bits_per_pixel.bits(),
            });
        }
        Ok(self.pixels.as_pixels())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn stride_pads_to_four_bytes() {
        assert_eq!(checked_row_stride(1, 3), Some(4));
        assert_eq!(checked_row_stride(2, 3), Some(8));
        assert_eq!(checked_row_stride(3, 3), Some(12));
        assert_eq!(checked_row_stride(4, 3), Some(12));
        assert_eq!(checked_row_stride(1, 4), Some(4));
        assert_eq!(checked_row_stride(5, 4), Some(20));
        assert_eq!(checked_row_stride(usize::MAX / 2, 3), None);
    }

    #[test]
    fn new_rejects_zero_dimensions() {
        assert!(matches!(
            Bitmap::new(0, 1, vec![], BitsPerPixel::Rgb24),
            Err(BmpError::InvalidArgument(_))
        ));
        assert!(matches!(
            Bitmap::new(1, 0, vec![], BitsPerPixel::Rgb24),
            Err(BmpError::InvalidArgument(_))
        ));
    }

    #[test]
    fn new_rejects_wrong_buffer_length() {
        let err = Bitmap::new(2, 2, vec![0u8; 11], BitsPerPixel::Rgb24).unwrap_err();
        assert!(matches!(
            err,
            BmpError::BufferSizeMismatch {
                expected: 12,
                actual: 11
            }
        ));
        // Oversized buffers are rejected too; the invariant is exact length.
        assert!(Bitmap::new(2, 2, vec![0u8; 13], BitsPerPixel::Rgb24).is_err());
    }

    #[test]
    fn new_rejects_dimensions_beyond_i32() {
        // Header width/height fields are i32, so anything above i32::MAX
        // can never be represented on disk.
        assert!(matches!(
            Bitmap::new(u32::MAX, 1, vec![], BitsPerPixel::Rgba32),
            Err(BmpError::DimensionsTooLarge { .. })
        ));
        assert!(matches!(
            Bitmap::new(1, i32::MAX as u32 + 1, vec![], BitsPerPixel::Rgb24),
            Err(BmpError::DimensionsTooLarge { .. })
        ));
    }

    #[test]
    fn flip_reverses_rows() {
        let top = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0x00];
        let bottom = [0xFF, 0xFF, 0xFF, 0x77, 0x76, 0x75, 0x10, 0x11, 0x12];
        let mut pixels = Vec::new();
        pixels.extend_from_slice(&top);
        pixels.extend_from_slice(&bottom);

        let bitmap = Bitmap::new(3, 2, pixels.clone(), BitsPerPixel::Rgb24).unwrap();
        let flipped = bitmap.flipped_pixels();
        assert_eq!(&flipped[..9], &bottom);
        assert_eq!(&flipped[9..], &top);
    }

    #[test]
    fn flip_twice_is_identity() {
        let pixels: Vec<u8> = (0..5 * 4 * 4).map(|i| i as u8).collect();
        let bitmap = Bitmap::new(5, 4, pixels.clone(), BitsPerPixel::Rgba32).unwrap();
        let once = Bitmap::new(5, 4, bitmap.flipped_pixels(), BitsPerPixel::Rgba32).unwrap();
        assert_eq!(once.flipped_pixels(), pixels);
    }

    #[cfg(feature = "rgb")]
    #[test]
    fn typed_views_check_depth() {
        let bitmap = Bitmap::new(1, 1, vec![10, 20, 30], BitsPerPixel::Rgb24).unwrap();
        let bgr = bitmap.as_bgr_pixels().unwrap();
        assert_eq!((bgr[0].b, bgr[0].g, bgr[0].r), (10, 20, 30));
        assert!(matches!(
            bitmap.as_bgra_pixels(),
            Err(BmpError::LayoutMismatch { .. })
        ));
    }
}
