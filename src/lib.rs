// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Robovision
//!
//! Converters between ROS sensor messages and the in-memory models used by
//! machine-vision code:
//! - **Images** in [`image`](crate::image): interleaved `sensor_msgs/Image`
//!   to and from channel-planar [`PlanarImage`]
//! - **Point clouds** in [`pointcloud`](crate::pointcloud): record-packed
//!   `sensor_msgs/PointCloud2` to and from structure-of-arrays [`PointModel`]
//!
//! Every conversion is a pure function from a borrowed input to a newly
//! owned output. The two codecs share only [`CodecError`] and the message
//! types in [`msgs`].
//!
//! ## Example: Decoding an image
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use robovision::image::from_image_msg;
//! use robovision::msgs::Image;
//!
//! let msg = Image {
//!     height: 1,
//!     width: 1,
//!     encoding: "rgb8".to_string(),
//!     step: 3,
//!     data: vec![255, 128, 0],
//!     ..Default::default()
//! };
//! let image = from_image_msg(&msg)?;
//! assert_eq!(image.image().plane(1), Some(&[128u8][..]));
//! # Ok(())
//! # }
//! ```

// Core types
pub mod core;

pub use core::{CodecError, ConvertOptions, Result};

// Wire messages
pub mod msgs;

// Codecs
pub mod image;
pub mod pointcloud;

pub use image::{ImageEncoding, PlanarImage, VisionImage};
pub use pointcloud::{PointModel, VisionPointCloud};
