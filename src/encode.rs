//! BMP encoder: uncompressed 24-bit and 32-bit, bottom-up rows padded to a
//! 4-byte boundary.

use alloc::vec::Vec;
use core::iter::repeat_n;

use crate::bitmap::{Bitmap, checked_row_stride};
use crate::error::BmpError;
use crate::header::{DibHeader, FILE_HEADER_SIZE, FileHeader};

pub(crate) fn encode_bmp(bitmap: &Bitmap) -> Result<Vec<u8>, BmpError> {
    let width = bitmap.width();
    let height = bitmap.height();
    let w = width as usize;
    let h = height as usize;
    let bpp = bitmap.bits_per_pixel();
    let too_large = || BmpError::DimensionsTooLarge { width, height };

    let row_stride = checked_row_stride(w, bpp.bytes_per_pixel()).ok_or_else(too_large)?;
    let pixel_data_size = row_stride.checked_mul(h).ok_or_else(too_large)?;

    let dib = DibHeader::for_image(
        width as i32,
        height as i32,
        bpp,
        u32::try_from(pixel_data_size).map_err(|_| too_large())?,
    );
    let header_size = FILE_HEADER_SIZE + dib.size_bytes();
    let file_size = pixel_data_size
        .checked_add(header_size)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(too_large)?;

    let mut out = Vec::with_capacity(file_size as usize);
    out.extend_from_slice(&FileHeader::new(file_size, header_size as u32).to_bytes());
    dib.write_to(&mut out);

    let live = w * bpp.bytes_per_pixel();
    let pad = row_stride - live;
    let pixels = bitmap.pixels();
    // Rows go out bottom-to-top: disk row r is canonical row h-1-r.
    for row in (0..h).rev() {
        let start = row * live;
        out.extend_from_slice(&pixels[start..start + live]);
        out.extend(repeat_n(0u8, pad));
    }

    Ok(out)
}
