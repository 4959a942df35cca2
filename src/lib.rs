//! # bmpcodec
//!
//! Encoder and decoder for uncompressed Windows BMP files.
//!
//! The canonical in-memory form is a [`Bitmap`]: an unpadded, top-to-bottom
//! pixel buffer in BMP channel order (B,G,R or B,G,R,A). Encoding produces a
//! byte-exact file — 14-byte file header, 40-byte DIB header (24-bit) or
//! 56-byte bit-masked DIB header (32-bit), then bottom-up rows padded to a
//! 4-byte boundary. Decoding validates headers and the declared file size
//! before reconstructing the buffer.
//!
//! ## Supported
//!
//! - 24-bit BGR and 32-bit BGRA, BI_RGB and BI_BITFIELDS, bottom-up rows
//!
//! ## Non-Goals
//!
//! - Compressed variants (RLE, embedded JPEG/PNG)
//! - Indexed/palette images below 24 bpp
//! - Top-down (negative height) row order
//!
//! All of these fail with an explicit [`BmpError`], never silent corruption.
//!
//! ## Usage
//!
//! ```
//! use bmpcodec::{Bitmap, BitsPerPixel};
//!
//! // A 2x1 image: one blue pixel, one red pixel (B,G,R order).
//! let pixels = vec![255, 0, 0, 0, 0, 255];
//! let bitmap = Bitmap::new(2, 1, pixels, BitsPerPixel::Rgb24)?;
//!
//! let encoded = bitmap.encode()?;
//! assert_eq!(&encoded[..2], b"BM");
//!
//! let decoded = Bitmap::decode(&encoded)?;
//! assert_eq!(decoded.pixels(), bitmap.pixels());
//! # Ok::<(), bmpcodec::BmpError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod bytes;

mod bitmap;
mod decode;
mod encode;
mod error;
mod header;
mod limits;

#[cfg(feature = "std")]
mod file;

// Re-exports
pub use bitmap::Bitmap;
pub use error::BmpError;
#[cfg(feature = "std")]
pub use file::{read_bitmap, write_bitmap};
pub use header::{
    BitsPerPixel, Compression, DEFAULT_PIXELS_PER_METER, DibHeader, FILE_HEADER_SIZE, FileHeader,
    INFO_HEADER_RGBA_SIZE, INFO_HEADER_SIZE, InfoHeader, InfoHeaderRgba,
};
pub use limits::Limits;
