// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Point-cloud codec.
//!
//! - [`model`] - Structure-of-arrays point model with optional normals
//! - [`layout`] - Fixed record layouts and field lookup
//! - [`codec`] - Conversion to and from `sensor_msgs/PointCloud2`

pub mod codec;
pub mod layout;
pub mod model;

pub use codec::{
    from_pointcloud_msg, from_pointcloud_msg_with_options, to_pointcloud_msg,
    to_pointcloud_msg_with_options, write_pointcloud_msg, write_pointcloud_msg_with_options,
    VisionPointCloud,
};
pub use layout::{xyz_fields, xyz_normal_fields, FieldLayout, XYZ_NORMAL_POINT_STEP, XYZ_POINT_STEP};
pub use model::{Normals, PointModel};
