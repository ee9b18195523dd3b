// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Image encoding names and the lookups derived from them.

use std::fmt;
use std::str::FromStr;

use crate::core::CodecError;

/// Recognized `sensor_msgs/Image` encodings.
///
/// Only the 8-bit variants can be converted; the 16-bit variants are
/// recognized so their channel layout can still be queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageEncoding {
    Mono8,
    Rgb8,
    Bgr8,
    Rgba8,
    Bgra8,
    Mono16,
    Rgb16,
    Bgr16,
    Rgba16,
    Bgra16,
}

/// Element type of a single channel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelType {
    /// Unsigned 8-bit
    Byte,
    /// Unsigned 16-bit
    UInt2,
}

impl PixelType {
    /// Size of one channel value in bytes.
    pub const fn size(self) -> usize {
        match self {
            PixelType::Byte => 1,
            PixelType::UInt2 => 2,
        }
    }
}

/// Order in which color channels appear inside an interleaved pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelOrder {
    Mono,
    Rgb,
    Bgr,
}

impl ImageEncoding {
    /// All recognized encodings.
    pub const ALL: [ImageEncoding; 10] = [
        ImageEncoding::Mono8,
        ImageEncoding::Rgb8,
        ImageEncoding::Bgr8,
        ImageEncoding::Rgba8,
        ImageEncoding::Bgra8,
        ImageEncoding::Mono16,
        ImageEncoding::Rgb16,
        ImageEncoding::Bgr16,
        ImageEncoding::Rgba16,
        ImageEncoding::Bgra16,
    ];

    /// Wire name of the encoding.
    pub const fn as_str(self) -> &'static str {
        match self {
            ImageEncoding::Mono8 => "mono8",
            ImageEncoding::Rgb8 => "rgb8",
            ImageEncoding::Bgr8 => "bgr8",
            ImageEncoding::Rgba8 => "rgba8",
            ImageEncoding::Bgra8 => "bgra8",
            ImageEncoding::Mono16 => "mono16",
            ImageEncoding::Rgb16 => "rgb16",
            ImageEncoding::Bgr16 => "bgr16",
            ImageEncoding::Rgba16 => "rgba16",
            ImageEncoding::Bgra16 => "bgra16",
        }
    }

    /// Number of channels per pixel.
    pub const fn channels(self) -> usize {
        match self {
            ImageEncoding::Mono8 | ImageEncoding::Mono16 => 1,
            ImageEncoding::Rgb8 | ImageEncoding::Bgr8 | ImageEncoding::Rgb16 | ImageEncoding::Bgr16 => 3,
            ImageEncoding::Rgba8
            | ImageEncoding::Bgra8
            | ImageEncoding::Rgba16
            | ImageEncoding::Bgra16 => 4,
        }
    }

    /// Element type of each channel value.
    pub const fn pixel_type(self) -> PixelType {
        match self {
            ImageEncoding::Mono8
            | ImageEncoding::Rgb8
            | ImageEncoding::Bgr8
            | ImageEncoding::Rgba8
            | ImageEncoding::Bgra8 => PixelType::Byte,
            ImageEncoding::Mono16
            | ImageEncoding::Rgb16
            | ImageEncoding::Bgr16
            | ImageEncoding::Rgba16
            | ImageEncoding::Bgra16 => PixelType::UInt2,
        }
    }

    pub const fn channel_order(self) -> ChannelOrder {
        match self {
            ImageEncoding::Mono8 | ImageEncoding::Mono16 => ChannelOrder::Mono,
            ImageEncoding::Rgb8
            | ImageEncoding::Rgba8
            | ImageEncoding::Rgb16
            | ImageEncoding::Rgba16 => ChannelOrder::Rgb,
            ImageEncoding::Bgr8
            | ImageEncoding::Bgra8
            | ImageEncoding::Bgr16
            | ImageEncoding::Bgra16 => ChannelOrder::Bgr,
        }
    }

    pub const fn has_alpha(self) -> bool {
        self.channels() == 4
    }

    /// Whether the codec can convert images with this encoding.
    pub const fn is_convertible(self) -> bool {
        matches!(self.pixel_type(), PixelType::Byte)
    }

    /// Bytes per pixel across all channels.
    pub const fn bytes_per_pixel(self) -> usize {
        self.channels() * self.pixel_type().size()
    }

    /// Position of each canonical plane (R, G, B, A) inside an interleaved pixel.
    ///
    /// Mono images have a single plane at position 0.
    pub fn interleave_positions(self) -> &'static [usize] {
        match (self.channel_order(), self.has_alpha()) {
            (ChannelOrder::Mono, _) => &[0],
            (ChannelOrder::Rgb, false) => &[0, 1, 2],
            (ChannelOrder::Bgr, false) => &[2, 1, 0],
            (ChannelOrder::Rgb, true) => &[0, 1, 2, 3],
            (ChannelOrder::Bgr, true) => &[2, 1, 0, 3],
        }
    }
}

impl FromStr for ImageEncoding {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ImageEncoding::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .ok_or_else(|| CodecError::unsupported_encoding(s))
    }
}

impl fmt::Display for ImageEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse an encoding name and require that it be convertible.
pub fn convertible_encoding(name: &str) -> Result<ImageEncoding, CodecError> {
    let encoding: ImageEncoding = name.parse()?;
    if !encoding.is_convertible() {
        return Err(CodecError::unsupported_encoding(name));
    }
    Ok(encoding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_names() {
        for enc in ImageEncoding::ALL {
            assert_eq!(enc.as_str().parse::<ImageEncoding>().unwrap(), enc);
            assert_eq!(enc.to_string(), enc.as_str());
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("BGR8".parse::<ImageEncoding>().is_err());
        assert!("yuv422".parse::<ImageEncoding>().is_err());
        assert!("".parse::<ImageEncoding>().is_err());
    }

    #[test]
    fn test_channel_lookup() {
        assert_eq!(ImageEncoding::Mono8.channels(), 1);
        assert_eq!(ImageEncoding::Bgr8.channels(), 3);
        assert_eq!(ImageEncoding::Rgba16.channels(), 4);
        assert_eq!(ImageEncoding::Bgr16.pixel_type(), PixelType::UInt2);
        assert_eq!(ImageEncoding::Bgra8.pixel_type(), PixelType::Byte);
        assert_eq!(ImageEncoding::Rgb16.bytes_per_pixel(), 6);
    }

    #[test]
    fn test_channel_order() {
        assert_eq!(ImageEncoding::Mono16.channel_order(), ChannelOrder::Mono);
        assert_eq!(ImageEncoding::Rgba8.channel_order(), ChannelOrder::Rgb);
        assert_eq!(ImageEncoding::Bgr16.channel_order(), ChannelOrder::Bgr);
    }

    #[test]
    fn test_interleave_positions() {
        assert_eq!(ImageEncoding::Rgb8.interleave_positions(), &[0, 1, 2]);
        assert_eq!(ImageEncoding::Bgr8.interleave_positions(), &[2, 1, 0]);
        assert_eq!(ImageEncoding::Bgra8.interleave_positions(), &[2, 1, 0, 3]);
        assert_eq!(ImageEncoding::Mono8.interleave_positions(), &[0]);
    }

    #[test]
    fn test_convertible() {
        assert!(convertible_encoding("bgra8").is_ok());
        assert!(matches!(
            convertible_encoding("mono16"),
            Err(CodecError::UnsupportedEncoding { .. })
        ));
        assert!(matches!(
            convertible_encoding("yuv422"),
            Err(CodecError::UnsupportedEncoding { .. })
        ));
    }
}
