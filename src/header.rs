//! BMP header model: the 14-byte file header, the 40-byte BITMAPINFOHEADER,
//! and the 56-byte extended variant carrying RGBA channel masks.
//!
//! Headers are encoded and parsed field by field through [`crate::bytes`];
//! nothing here depends on struct layout or host byte order.

use alloc::format;

use crate::bytes;
use crate::error::BmpError;

/// Size of the BMP file header in bytes.
pub const FILE_HEADER_SIZE: usize = 14;
/// Size of the base DIB info header (BITMAPINFOHEADER) in bytes.
pub const INFO_HEADER_SIZE: usize = 40;
/// Size of the extended DIB info header with RGBA channel masks in bytes.
pub const INFO_HEADER_RGBA_SIZE: usize = 56;

/// 96 DPI expressed as pixels per meter, the resolution written by default.
pub const DEFAULT_PIXELS_PER_METER: i32 = 3780;

const MAGIC: [u8; 2] = [0x42, 0x4D]; // "BM"

/// Supported color depths.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitsPerPixel {
    /// 24-bit, three bytes per pixel (B,G,R).
    Rgb24,
    /// 32-bit, four bytes per pixel (B,G,R,A).
    Rgba32,
}

impl BitsPerPixel {
    pub fn bits(self) -> u16 {
        match self {
            Self::Rgb24 => 24,
            Self::Rgba32 => 32,
        }
    }

    pub fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Rgb24 => 3,
            Self::Rgba32 => 4,
        }
    }

    pub(crate) fn from_bits(bits: u16) -> Result<Self, BmpError> {
        match bits {
            24 => Ok(Self::Rgb24),
            32 => Ok(Self::Rgba32),
            other => Err(BmpError::UnsupportedVariant(format!(
                "bit depth {other} (only 24 and 32 bpp are supported)"
            ))),
        }
    }
}

/// BMP compression method codes accepted by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Compression {
    /// BI_RGB: uncompressed.
    Rgb,
    /// BI_BITFIELDS: uncompressed with explicit channel masks.
    Bitfields,
}

impl Compression {
    pub fn code(self) -> u32 {
        match self {
            Self::Rgb => 0,
            Self::Bitfields => 3,
        }
    }

    pub(crate) fn from_code(code: u32) -> Result<Self, BmpError> {
        match code {
            0 => Ok(Self::Rgb),
            3 => Ok(Self::Bitfields),
            other => Err(BmpError::UnsupportedVariant(format!(
                "compression method {other} (only BI_RGB and BI_BITFIELDS are supported)"
            ))),
        }
    }
}

// ── File header ─────────────────────────────────────────────────────

/// The fixed 14-byte BMP file header.
///
/// Layout: "BM" magic, total file size @2, four reserved bytes @6 (zeroed on
/// write, ignored on read), pixel data offset @10.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    /// Total size of the BMP file in bytes, headers included.
    pub file_size: u32,
    /// Byte offset from the start of the file to the pixel data.
    pub pixel_data_offset: u32,
}

impl FileHeader {
    pub fn new(file_size: u32, pixel_data_offset: u32) -> Self {
        Self {
            file_size,
            pixel_data_offset,
        }
    }

    pub fn to_bytes(&self) -> [u8; FILE_HEADER_SIZE] {
        let mut out = [0u8; FILE_HEADER_SIZE];
        out[..2].copy_from_slice(&MAGIC);
        bytes::write_u32_le(&mut out, 2, self.file_size);
        bytes::write_u32_le(&mut out, 10, self.pixel_data_offset);
        out
    }

    /// Parse the first 14 bytes of a BMP file.
    pub fn parse(data: &[u8]) -> Result<Self, BmpError> {
        if data.len() < FILE_HEADER_SIZE {
            return Err(BmpError::UnexpectedEof);
        }
        if data[..2] != MAGIC {
            return Err(BmpError::UnrecognizedFormat);
        }
        Ok(Self {
            file_size: bytes::read_u32_le(data, 2)?,
            pixel_data_offset: bytes::read_u32_le(data, 10)?,
        })
    }
}

// ── DIB info headers ────────────────────────────────────────────────

/// The 40-byte BITMAPINFOHEADER.
///
/// Color planes (fixed 1) and the palette fields (fixed 0) are not stored;
/// they are validated on parse and written as constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    pub width: i32,
    pub height: i32,
    pub bits_per_pixel: BitsPerPixel,
    pub compression: Compression,
    /// On-disk pixel data size in bytes, row padding included.
    pub image_size: u32,
    pub pixels_per_meter_x: i32,
    pub pixels_per_meter_y: i32,
}

impl InfoHeader {
    pub fn new(width: i32, height: i32, bits_per_pixel: BitsPerPixel, image_size: u32) -> Self {
        Self {
            width,
            height,
            bits_per_pixel,
            compression: Compression::Rgb,
            image_size,
            pixels_per_meter_x: DEFAULT_PIXELS_PER_METER,
            pixels_per_meter_y: DEFAULT_PIXELS_PER_METER,
        }
    }

    pub fn to_bytes(&self) -> [u8; INFO_HEADER_SIZE] {
        let mut out = [0u8; INFO_HEADER_SIZE];
        self.write_fields(&mut out, INFO_HEADER_SIZE as u32);
        out
    }

    /// Write the 40 base fields into `out`, with the caller's header size
    /// in the size field (40 for the base header, 56 for the RGBA variant).
    fn write_fields(&self, out: &mut [u8], header_size: u32) {
        bytes::write_u32_le(out, 0, header_size);
        bytes::write_u32_le(out, 4, self.width as u32);
        bytes::write_u32_le(out, 8, self.height as u32);
        bytes::write_u16_le(out, 12, 1); // color planes
        bytes::write_u16_le(out, 14, self.bits_per_pixel.bits());
        bytes::write_u32_le(out, 16, self.compression.code());
        bytes::write_u32_le(out, 20, self.image_size);
        bytes::write_u32_le(out, 24, self.pixels_per_meter_x as u32);
        bytes::write_u32_le(out, 28, self.pixels_per_meter_y as u32);
        // palette color count @32 and important color count @36 stay zero
    }

    /// Parse the 40 base fields from a DIB header block. The caller has
    /// already read the size field and knows `data` is long enough.
    fn parse_fields(data: &[u8]) -> Result<Self, BmpError> {
        let width = bytes::read_u32_le(data, 4)? as i32;
        let height = bytes::read_u32_le(data, 8)? as i32;
        let planes = bytes::read_u16_le(data, 12)?;
        let bits_per_pixel = BitsPerPixel::from_bits(bytes::read_u16_le(data, 14)?)?;
        let compression = Compression::from_code(bytes::read_u32_le(data, 16)?)?;
        let image_size = bytes::read_u32_le(data, 20)?;
        let pixels_per_meter_x = bytes::read_u32_le(data, 24)? as i32;
        let pixels_per_meter_y = bytes::read_u32_le(data, 28)? as i32;

        if planes != 1 {
            return Err(BmpError::InvalidHeader(format!(
                "color planes field is {planes}, expected 1"
            )));
        }
        if width <= 0 {
            return Err(BmpError::InvalidHeader(format!(
                "width {width} is not positive"
            )));
        }
        if height < 0 {
            return Err(BmpError::UnsupportedVariant(
                "top-down (negative height) row order".into(),
            ));
        }
        if height == 0 {
            return Err(BmpError::InvalidHeader("height is zero".into()));
        }

        Ok(Self {
            width,
            height,
            bits_per_pixel,
            compression,
            image_size,
            pixels_per_meter_x,
            pixels_per_meter_y,
        })
    }
}

/// The 56-byte extended DIB header: base fields plus fixed RGBA channel
/// masks. Written for every 32-bit image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeaderRgba {
    pub info: InfoHeader,
}

impl InfoHeaderRgba {
    pub const RED_MASK: u32 = 0x00FF_0000;
    pub const GREEN_MASK: u32 = 0x0000_FF00;
    pub const BLUE_MASK: u32 = 0x0000_00FF;
    pub const ALPHA_MASK: u32 = 0xFF00_0000;

    pub fn new(width: i32, height: i32, image_size: u32) -> Self {
        let mut info = InfoHeader::new(width, height, BitsPerPixel::Rgba32, image_size);
        info.compression = Compression::Bitfields;
        Self { info }
    }

    pub fn to_bytes(&self) -> [u8; INFO_HEADER_RGBA_SIZE] {
        let mut out = [0u8; INFO_HEADER_RGBA_SIZE];
        self.info.write_fields(&mut out, INFO_HEADER_RGBA_SIZE as u32);
        bytes::write_u32_le(&mut out, 40, Self::RED_MASK);
        bytes::write_u32_le(&mut out, 44, Self::GREEN_MASK);
        bytes::write_u32_le(&mut out, 48, Self::BLUE_MASK);
        bytes::write_u32_le(&mut out, 52, Self::ALPHA_MASK);
        out
    }
}

// ── Tagged DIB variant ──────────────────────────────────────────────

/// The DIB header found in a file: base 40-byte layout or the extended
/// 56-byte layout. The two differ only in on-disk size, never in behavior,
/// so they are one tagged type rather than an inheritance pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DibHeader {
    Info(InfoHeader),
    InfoRgba(InfoHeaderRgba),
}

impl DibHeader {
    /// Choose the header variant for an image: 24 bpp gets the base header,
    /// 32 bpp gets the extended header with channel masks.
    pub fn for_image(
        width: i32,
        height: i32,
        bits_per_pixel: BitsPerPixel,
        image_size: u32,
    ) -> Self {
        match bits_per_pixel {
            BitsPerPixel::Rgb24 => {
                Self::Info(InfoHeader::new(width, height, bits_per_pixel, image_size))
            }
            BitsPerPixel::Rgba32 => Self::InfoRgba(InfoHeaderRgba::new(width, height, image_size)),
        }
    }

    pub fn size_bytes(&self) -> usize {
        match self {
            Self::Info(_) => INFO_HEADER_SIZE,
            Self::InfoRgba(_) => INFO_HEADER_RGBA_SIZE,
        }
    }

    pub fn info(&self) -> &InfoHeader {
        match self {
            Self::Info(info) => info,
            Self::InfoRgba(rgba) => &rgba.info,
        }
    }

    pub(crate) fn write_to(&self, out: &mut alloc::vec::Vec<u8>) {
        match self {
            Self::Info(info) => out.extend_from_slice(&info.to_bytes()),
            Self::InfoRgba(rgba) => out.extend_from_slice(&rgba.to_bytes()),
        }
    }

    /// Parse a DIB header block starting at `data[0]`. The size field is
    /// read first and dispatches the layout, since the mask fields only
    /// exist in the extended header.
    pub fn parse(data: &[u8]) -> Result<Self, BmpError> {
        let size = bytes::read_u32_le(data, 0)? as usize;
        match size {
            INFO_HEADER_SIZE => {
                if data.len() < INFO_HEADER_SIZE {
                    return Err(BmpError::UnexpectedEof);
                }
                Ok(Self::Info(InfoHeader::parse_fields(data)?))
            }
            INFO_HEADER_RGBA_SIZE => {
                if data.len() < INFO_HEADER_RGBA_SIZE {
                    return Err(BmpError::UnexpectedEof);
                }
                // The four mask dwords @40..56 carry fixed values and are
                // not consulted when decoding pixel data.
                Ok(Self::InfoRgba(InfoHeaderRgba {
                    info: InfoHeader::parse_fields(data)?,
                }))
            }
            other => Err(BmpError::UnsupportedVariant(format!(
                "DIB header size {other} (only 40 and 56 byte headers are supported)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn file_header_bytes_exact() {
        let header = FileHeader::new(58, 54);
        let bytes_out = header.to_bytes();
        assert_eq!(&bytes_out[..2], b"BM");
        assert_eq!(bytes_out[2..6], 58u32.to_le_bytes());
        assert_eq!(bytes_out[6..10], [0, 0, 0, 0]);
        assert_eq!(bytes_out[10..14], 54u32.to_le_bytes());
        assert_eq!(FileHeader::parse(&bytes_out).unwrap(), header);
    }

    #[test]
    fn file_header_rejects_bad_magic() {
        let mut bytes_out = FileHeader::new(58, 54).to_bytes();
        bytes_out[0] = b'P';
        assert!(matches!(
            FileHeader::parse(&bytes_out),
            Err(BmpError::UnrecognizedFormat)
        ));
    }

    #[test]
    fn file_header_one_byte_short() {
        let full = FileHeader::new(58, 54).to_bytes();
        assert!(matches!(
            FileHeader::parse(&full[..13]),
            Err(BmpError::UnexpectedEof)
        ));
    }

    #[test]
    fn info_header_field_offsets() {
        let header = InfoHeader::new(640, 480, BitsPerPixel::Rgb24, 921_600);
        let raw = header.to_bytes();
        assert_eq!(raw[0..4], 40u32.to_le_bytes());
        assert_eq!(raw[4..8], 640i32.to_le_bytes());
        assert_eq!(raw[8..12], 480i32.to_le_bytes());
        assert_eq!(raw[12..14], 1u16.to_le_bytes());
        assert_eq!(raw[14..16], 24u16.to_le_bytes());
        assert_eq!(raw[16..20], 0u32.to_le_bytes());
        assert_eq!(raw[20..24], 921_600u32.to_le_bytes());
        assert_eq!(raw[24..28], 3780i32.to_le_bytes());
        assert_eq!(raw[28..32], 3780i32.to_le_bytes());
        assert_eq!(raw[32..40], [0u8; 8]);
    }

    #[test]
    fn rgba_header_masks() {
        let raw = InfoHeaderRgba::new(2, 2, 16).to_bytes();
        assert_eq!(raw[0..4], 56u32.to_le_bytes());
        assert_eq!(raw[14..16], 32u16.to_le_bytes());
        assert_eq!(raw[16..20], 3u32.to_le_bytes()); // BI_BITFIELDS
        assert_eq!(raw[40..44], 0x00FF_0000u32.to_le_bytes());
        assert_eq!(raw[44..48], 0x0000_FF00u32.to_le_bytes());
        assert_eq!(raw[48..52], 0x0000_00FFu32.to_le_bytes());
        assert_eq!(raw[52..56], 0xFF00_0000u32.to_le_bytes());
    }

    #[test]
    fn dib_parse_dispatches_on_size() {
        let base = InfoHeader::new(3, 2, BitsPerPixel::Rgb24, 24).to_bytes();
        assert!(matches!(
            DibHeader::parse(&base).unwrap(),
            DibHeader::Info(_)
        ));

        let extended = InfoHeaderRgba::new(3, 2, 24).to_bytes();
        assert!(matches!(
            DibHeader::parse(&extended).unwrap(),
            DibHeader::InfoRgba(_)
        ));
    }

    #[test]
    fn dib_parse_rejects_other_sizes() {
        for size in [12u32, 16, 52, 64, 108, 124] {
            let mut raw = [0u8; 124];
            bytes::write_u32_le(&mut raw, 0, size);
            assert!(matches!(
                DibHeader::parse(&raw),
                Err(BmpError::UnsupportedVariant(_))
            ));
        }
    }

    #[test]
    fn dib_parse_rejects_bad_planes() {
        let mut raw = InfoHeader::new(3, 2, BitsPerPixel::Rgb24, 24).to_bytes();
        bytes::write_u16_le(&mut raw, 12, 2);
        assert!(matches!(
            DibHeader::parse(&raw),
            Err(BmpError::InvalidHeader(_))
        ));
    }

    #[test]
    fn dib_parse_rejects_rle_compression() {
        let mut raw = InfoHeader::new(3, 2, BitsPerPixel::Rgb24, 24).to_bytes();
        bytes::write_u32_le(&mut raw, 16, 1); // BI_RLE8
        assert!(matches!(
            DibHeader::parse(&raw),
            Err(BmpError::UnsupportedVariant(_))
        ));
    }

    #[test]
    fn dib_parse_rejects_unsupported_depths() {
        for depth in [1u16, 4, 8, 16] {
            let mut raw = InfoHeader::new(3, 2, BitsPerPixel::Rgb24, 24).to_bytes();
            bytes::write_u16_le(&mut raw, 14, depth);
            assert!(matches!(
                DibHeader::parse(&raw),
                Err(BmpError::UnsupportedVariant(_))
            ));
        }
    }

    #[test]
    fn dib_parse_rejects_top_down() {
        let mut raw = InfoHeader::new(3, 2, BitsPerPixel::Rgb24, 24).to_bytes();
        bytes::write_u32_le(&mut raw, 8, (-2i32) as u32);
        assert!(matches!(
            DibHeader::parse(&raw),
            Err(BmpError::UnsupportedVariant(_))
        ));
    }

    #[test]
    fn dib_parse_rejects_zero_dimensions() {
        let mut raw = InfoHeader::new(3, 2, BitsPerPixel::Rgb24, 24).to_bytes();
        bytes::write_u32_le(&mut raw, 4, 0);
        assert!(matches!(
            DibHeader::parse(&raw),
            Err(BmpError::InvalidHeader(_))
        ));

        let mut raw = InfoHeader::new(3, 2, BitsPerPixel::Rgb24, 24).to_bytes();
        bytes::write_u32_le(&mut raw, 8, 0);
        assert!(matches!(
            DibHeader::parse(&raw),
            Err(BmpError::InvalidHeader(_))
        ));
    }

    #[test]
    fn dib_roundtrip_through_write_to() {
        let dib = DibHeader::for_image(7, 5, BitsPerPixel::Rgba32, 140);
        let mut out: Vec<u8> = Vec::new();
        dib.write_to(&mut out);
        assert_eq!(out.len(), dib.size_bytes());
        assert_eq!(DibHeader::parse(&out).unwrap(), dib);
    }
}
