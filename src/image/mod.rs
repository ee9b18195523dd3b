// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Image codec.
//!
//! - [`encoding`] - Encoding names and channel/pixel lookups
//! - [`planar`] - Channel-planar image model and raster helpers
//! - [`codec`] - Conversion to and from `sensor_msgs/Image`

pub mod codec;
pub mod encoding;
pub mod planar;

pub use codec::{from_image_msg, to_image_msg, write_image_msg, VisionImage};
pub use encoding::{ChannelOrder, ImageEncoding, PixelType};
pub use planar::{ColumnGrid, PlanarImage};
