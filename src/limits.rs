use alloc::format;

use crate::error::BmpError;

/// Caps on what a BMP header may ask the decoder to produce.
///
/// BMP dimensions come straight out of attacker-controlled header fields, so
/// a 30-byte file can demand a multi-gigabyte canonical buffer. Decoding with
/// a `Limits` rejects such files between header parsing and the buffer
/// allocation. A field left at `None` places no bound, and
/// `Limits::default()` bounds nothing.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    /// Largest accepted image width, in pixels.
    pub max_width: Option<u64>,
    /// Largest accepted image height, in pixels.
    pub max_height: Option<u64>,
    /// Largest accepted `width * height` product.
    pub max_pixels: Option<u64>,
    /// Largest canonical pixel buffer the decoder may allocate, in bytes.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Validate header-declared dimensions. Called before any sizing
    /// arithmetic, so the caps also shield the later overflow checks.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), BmpError> {
        if let Some(max_w) = self.max_width {
            if u64::from(width) > max_w {
                return Err(BmpError::LimitExceeded(format!(
                    "declared width {width} is over the {max_w} pixel cap"
                )));
            }
        }
        if let Some(max_h) = self.max_height {
            if u64::from(height) > max_h {
                return Err(BmpError::LimitExceeded(format!(
                    "declared height {height} is over the {max_h} pixel cap"
                )));
            }
        }
        if let Some(max_px) = self.max_pixels {
            let pixels = u64::from(width) * u64::from(height);
            if pixels > max_px {
                return Err(BmpError::LimitExceeded(format!(
                    "{pixels} pixels is over the {max_px} pixel cap"
                )));
            }
        }
        Ok(())
    }

    /// Validate the canonical buffer size once it is known exactly.
    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), BmpError> {
        if let Some(max_mem) = self.max_memory_bytes {
            if bytes as u64 > max_mem {
                return Err(BmpError::LimitExceeded(format!(
                    "decoded buffer of {bytes} bytes is over the {max_mem} byte cap"
                )));
            }
        }
        Ok(())
    }
}
