use alloc::string::String;

/// Errors from BMP decoding, encoding, and file orchestration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    #[error("not a BMP file: missing BM magic bytes")]
    UnrecognizedFormat,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unsupported BMP variant: {0}")]
    UnsupportedVariant(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("pixel buffer length mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("declared file size {declared} does not match actual size {actual}")]
    SizeMismatch { declared: u64, actual: u64 },

    #[error("file too small for a BMP header: {actual} bytes")]
    FileTooSmall { actual: u64 },

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[cfg(feature = "rgb")]
    #[error("pixel layout mismatch: buffer is {actual}-bit, requested a {requested}-bit view")]
    LayoutMismatch { requested: u16, actual: u16 },

    #[cfg(feature = "std")]
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[cfg(feature = "std")]
    #[error("destination directory not found: {0}")]
    DirectoryNotFound(String),

    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
