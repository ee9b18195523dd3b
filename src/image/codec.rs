// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Conversion between [`VisionImage`] and `sensor_msgs/Image`.
//!
//! Both directions go through the planar representation: encoding
//! interleaves the planes in the wire channel order, decoding splits the
//! interleaved rows back into canonical R, G, B(, A) planes.
//!
//! # Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use robovision::image::{from_image_msg, to_image_msg, ImageEncoding, PlanarImage, VisionImage};
//! use robovision::msgs::Header;
//!
//! let planes = PlanarImage::rgb8(2, 1, vec![10, 11], vec![20, 21], vec![30, 31])?;
//! let image = VisionImage::new(Header::default(), ImageEncoding::Bgr8, planes)?;
//!
//! let msg = to_image_msg(&image)?;
//! assert_eq!(msg.step, 6);
//! assert_eq!(msg.data, vec![30, 20, 10, 31, 21, 11]);
//!
//! assert_eq!(from_image_msg(&msg)?, image);
//! # Ok(())
//! # }
//! ```

use tracing::{debug, warn};

use crate::core::error::checked_size;
use crate::core::{CodecError, Result};
use crate::msgs::{Header, Image};

use super::encoding::{convertible_encoding, ImageEncoding};
use super::planar::{ColumnGrid, PlanarImage};

/// A planar image tagged with its wire encoding and message header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisionImage {
    pub header: Header,
    encoding: ImageEncoding,
    image: PlanarImage,
}

impl VisionImage {
    /// Pair a planar image with the encoding it is published as.
    ///
    /// The plane count and pixel type must agree with `encoding`.
    pub fn new(header: Header, encoding: ImageEncoding, image: PlanarImage) -> Result<Self> {
        if image.channels() != encoding.channels() {
            return Err(CodecError::malformed(
                "VisionImage",
                format!(
                    "{} planes cannot be published as {encoding} ({} channels)",
                    image.channels(),
                    encoding.channels()
                ),
            ));
        }
        if image.pixel_type() != encoding.pixel_type() {
            return Err(CodecError::malformed(
                "VisionImage",
                format!(
                    "{:?} pixels cannot be published as {encoding}",
                    image.pixel_type()
                ),
            ));
        }
        Ok(Self {
            header,
            encoding,
            image,
        })
    }

    /// Wire encoding the planes are published as.
    pub fn encoding(&self) -> ImageEncoding {
        self.encoding
    }

    /// Planar pixel data in canonical channel order.
    pub fn image(&self) -> &PlanarImage {
        &self.image
    }

    /// Take ownership of the planar pixel data.
    pub fn into_image(self) -> PlanarImage {
        self.image
    }

    /// Convert to a newly allocated `sensor_msgs/Image`.
    pub fn to_image_msg(&self) -> Result<Image> {
        to_image_msg(self)
    }
}

/// Encode a vision image into a new message.
pub fn to_image_msg(source: &VisionImage) -> Result<Image> {
    let mut msg = Image::default();
    write_image_msg(source, &mut msg)?;
    Ok(msg)
}

/// Encode a vision image into an existing message.
///
/// Useful when the image is embedded in a larger message. `out` is only
/// modified once encoding has succeeded.
pub fn write_image_msg(source: &VisionImage, out: &mut Image) -> Result<()> {
    let encoding = source.encoding;
    if !encoding.is_convertible() {
        return Err(CodecError::unsupported_encoding(encoding.as_str()));
    }

    let image = &source.image;
    let channels = image.channels();
    let step = checked_size(
        "image step",
        &[channels, image.width(), image.pixel_type().size()],
    )?;

    let data = if channels == 1 {
        image.planes()[0].clone()
    } else {
        interleave(image, encoding)?
    };
    debug_assert_eq!(data.len(), step * image.height());

    let msg = Image {
        header: source.header.clone(),
        height: to_u32("height", image.height())?,
        width: to_u32("width", image.width())?,
        encoding: encoding.as_str().to_string(),
        is_bigendian: false,
        step: to_u32("step", step)?,
        data,
    };

    debug!(
        "Encoded {}x{} {} image ({} bytes)",
        msg.width,
        msg.height,
        msg.encoding,
        msg.data.len()
    );
    *out = msg;
    Ok(())
}

/// Decode a message into a planar vision image.
///
/// Rows are addressed through `step`, so padded rows are accepted.
pub fn from_image_msg(msg: &Image) -> Result<VisionImage> {
    let encoding = convertible_encoding(&msg.encoding)?;
    if msg.is_bigendian {
        warn!(
            "Ignoring big-endian flag on {} image; 8-bit data has no byte order",
            encoding
        );
    }

    let width = msg.width as usize;
    let height = msg.height as usize;
    let step = msg.step as usize;
    let channels = encoding.channels();
    let row_bytes = checked_size("image row", &[width, encoding.bytes_per_pixel()])?;

    if step < row_bytes {
        return Err(CodecError::malformed(
            "Image",
            format!("step {step} is smaller than {width} pixels of {encoding} ({row_bytes} bytes)"),
        ));
    }
    let required = checked_size("image data", &[height, step])?;
    if msg.data.len() < required {
        return Err(CodecError::malformed(
            "Image",
            format!(
                "data holds {} bytes, {required} required by {height} rows of step {step}",
                msg.data.len()
            ),
        ));
    }

    let plane_len = checked_size("image plane", &[width, height])?;
    let positions = encoding.interleave_positions();
    let mut planes = vec![Vec::with_capacity(plane_len); channels];
    for row in 0..height {
        let start = row * step;
        let line = &msg.data[start..start + row_bytes];
        for pixel in line.chunks_exact(channels) {
            for (plane, &position) in planes.iter_mut().zip(positions) {
                plane.push(pixel[position]);
            }
        }
    }

    debug!(
        "Decoded {}x{} {} image into {} planes",
        width, height, encoding, channels
    );
    let image = PlanarImage::new(width, height, encoding.pixel_type(), planes)?;
    VisionImage::new(msg.header.clone(), encoding, image)
}

/// Repack planes into one interleaved buffer.
///
/// The planes are stretched N times horizontally (N = channel count), split
/// apart, and each is painted onto a shared canvas through the period-N
/// column grid at its interleave position.
fn interleave(image: &PlanarImage, encoding: ImageEncoding) -> Result<Vec<u8>> {
    let channels = image.channels();
    let scaled = image.scale_columns(channels)?;
    let grids = ColumnGrid::partition(channels, scaled.width(), scaled.height())?;

    let mut canvas = PlanarImage::zeroed(scaled.width(), scaled.height(), image.pixel_type(), 1)?;
    for (plane, &position) in scaled
        .decompose()
        .iter()
        .zip(encoding.interleave_positions())
    {
        canvas.overpaint(plane, &grids[position])?;
    }

    Ok(canvas.into_planes().swap_remove(0))
}

fn to_u32(what: &str, value: usize) -> Result<u32> {
    u32::try_from(value)
        .map_err(|_| CodecError::malformed("Image", format!("{what} {value} exceeds u32")))
}
