//! File orchestration: open and validate BMP files on disk, and write
//! encoded bitmaps out.
//!
//! Destination directories are never created here; a missing parent is an
//! error the caller has to resolve.

use std::fs;
use std::path::Path;

use log::debug;

use crate::bitmap::Bitmap;
use crate::error::BmpError;
use crate::header::FILE_HEADER_SIZE;

/// Read and decode a BMP file.
///
/// Fails with [`BmpError::InvalidArgument`] on an empty path,
/// [`BmpError::FileNotFound`] if the file does not exist,
/// [`BmpError::FileTooSmall`] if it cannot even hold a file header, and
/// [`BmpError::SizeMismatch`] if the declared file size differs from the
/// actual length.
pub fn read_bitmap<P: AsRef<Path>>(path: P) -> Result<Bitmap, BmpError> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(BmpError::InvalidArgument("path is empty".into()));
    }
    if !path.exists() {
        return Err(BmpError::FileNotFound(path.display().to_string()));
    }
    let len = fs::metadata(path)?.len();
    if len <= FILE_HEADER_SIZE as u64 {
        return Err(BmpError::FileTooSmall { actual: len });
    }

    let data = fs::read(path)?;
    let bitmap = Bitmap::decode(&data)?;
    debug!(
        "read {}x{} {}bpp bitmap from {}",
        bitmap.width(),
        bitmap.height(),
        bitmap.bits_per_pixel().bits(),
        path.display()
    );
    Ok(bitmap)
}

/// Encode `bitmap` and write it to `path`.
///
/// Fails with [`BmpError::InvalidArgument`] on an empty path and
/// [`BmpError::DirectoryNotFound`] if the parent directory does not exist.
pub fn write_bitmap<P: AsRef<Path>>(path: P, bitmap: &Bitmap) -> Result<(), BmpError> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(BmpError::InvalidArgument("path is empty".into()));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(BmpError::DirectoryNotFound(parent.display().to_string()));
        }
    }

    let encoded = bitmap.encode()?;
    fs::write(path, &encoded)?;
    debug!("wrote {} bytes to {}", encoded.len(), path.display());
    Ok(())
}
