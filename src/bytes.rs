//! Little-endian primitive codec.
//!
//! BMP is little-endian on the wire regardless of host byte order. Every
//! read or write of a multi-byte field in this crate goes through these
//! functions; no other module touches byte order.

use crate::error::BmpError;

/// Read a `u16` stored little-endian at `offset`.
pub fn read_u16_le(buf: &[u8], offset: usize) -> Result<u16, BmpError> {
    Ok(u16::from_le_bytes(get::<2>(buf, offset)?))
}

/// Read a `u32` stored little-endian at `offset`.
pub fn read_u32_le(buf: &[u8], offset: usize) -> Result<u32, BmpError> {
    Ok(u32::from_le_bytes(get::<4>(buf, offset)?))
}

/// Read a `u64` stored little-endian at `offset`.
pub fn read_u64_le(buf: &[u8], offset: usize) -> Result<u64, BmpError> {
    Ok(u64::from_le_bytes(get::<8>(buf, offset)?))
}

/// Write `value` little-endian at `offset`.
///
/// # Panics
///
/// Panics if `buf` is shorter than `offset + 2`. Writers in this crate
/// target fixed-size header buffers, so the bound is known at the call site.
pub fn write_u16_le(buf: &mut [u8], offset: usize, value: u16) {
    buf[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

/// Write `value` little-endian at `offset`.
///
/// # Panics
///
/// Panics if `buf` is shorter than `offset + 4`.
pub fn write_u32_le(buf: &mut [u8], offset: usize, value: u32) {
    buf[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

/// Write `value` little-endian at `offset`.
///
/// # Panics
///
/// Panics if `buf` is shorter than `offset + 8`.
pub fn write_u64_le(buf: &mut [u8], offset: usize, value: u64) {
    buf[offset..offset + 8].copy_from_slice(&value.to_le_bytes());
}

fn get<const N: usize>(buf: &[u8], offset: usize) -> Result<[u8; N], BmpError> {
    let end = offset.checked_add(N).ok_or(BmpError::UnexpectedEof)?;
    let slice = buf.get(offset..end).ok_or(BmpError::UnexpectedEof)?;
    let mut out = [0u8; N];
    out.copy_from_slice(slice);
    Ok(out)
}
