//! BMP decoder: header parse and dispatch, exact-size validation, and
//! padded-row reassembly into the canonical buffer.

use alloc::format;
use alloc::vec;

use crate::bitmap::{Bitmap, checked_row_stride};
use crate::error::BmpError;
use crate::header::{DibHeader, FILE_HEADER_SIZE, FileHeader};
use crate::limits::Limits;

pub(crate) fn decode_bmp(data: &[u8], limits: Option<&Limits>) -> Result<Bitmap, BmpError> {
    let file = FileHeader::parse(data)?;

    // Exact-match policy: the declared size must equal the input length,
    // not merely bound it. Checked before the DIB block is even probed,
    // so a wrong size field wins over whatever follows it.
    if file.file_size as u64 != data.len() as u64 {
        return Err(BmpError::SizeMismatch {
            declared: file.file_size as u64,
            actual: data.len() as u64,
        });
    }

    // The DIB size field selects the 40- or 56-byte layout.
    let dib = DibHeader::parse(&data[FILE_HEADER_SIZE..])?;

    let info = dib.info();
    // Positive, validated during header parse.
    let width = info.width as u32;
    let height = info.height as u32;
    let bpp = info.bits_per_pixel;
    let w = width as usize;
    let h = height as usize;
    let too_large = || BmpError::DimensionsTooLarge { width, height };

    if let Some(limits) = limits {
        limits.check(width, height)?;
    }

    // Untrusted dimensions: size the output buffer with checked arithmetic
    // before allocating anything.
    let live = w
        .checked_mul(bpp.bytes_per_pixel())
        .ok_or_else(too_large)?;
    let out_size = live.checked_mul(h).ok_or_else(too_large)?;
    if let Some(limits) = limits {
        limits.check_memory(out_size)?;
    }

    let row_stride = checked_row_stride(w, bpp.bytes_per_pixel()).ok_or_else(too_large)?;
    let offset = file.pixel_data_offset as usize;
    if offset < FILE_HEADER_SIZE + dib.size_bytes() {
        return Err(BmpError::InvalidHeader(format!(
            "pixel data offset {offset} overlaps the headers"
        )));
    }
    let end = row_stride
        .checked_mul(h)
        .and_then(|n| n.checked_add(offset))
        .ok_or_else(too_large)?;
    if end > data.len() {
        return Err(BmpError::UnexpectedEof);
    }

    let mut pixels = vec![0u8; out_size];
    // Disk rows run bottom-to-top; drop each row's padding and place it at
    // the mirrored canonical position.
    for row in 0..h {
        let src = offset + row * row_stride;
        let dst = (h - 1 - row) * live;
        pixels[dst..dst + live].copy_from_slice(&data[src..src + live]);
    }

    Bitmap::new(width, height, pixels, bpp)
}
