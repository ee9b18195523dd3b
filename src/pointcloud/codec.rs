// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Conversion between [`VisionPointCloud`] and `sensor_msgs/PointCloud2`.
//!
//! Encoding always produces one of the two fixed layouts from
//! [`layout`](super::layout); decoding accepts any layout that carries
//! 4-byte float `x`, `y` and `z` fields.
//!
//! # Example
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use robovision::msgs::Header;
//! use robovision::pointcloud::{from_pointcloud_msg, to_pointcloud_msg, PointModel, VisionPointCloud};
//!
//! let model = PointModel::from_points(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
//! let cloud = VisionPointCloud::new(Header::default(), model);
//!
//! let msg = to_pointcloud_msg(&cloud)?;
//! assert_eq!(msg.point_step, 12);
//! assert_eq!(msg.data.len(), 24);
//!
//! assert_eq!(from_pointcloud_msg(&msg)?, cloud);
//! # Ok(())
//! # }
//! ```

use byteorder::{ByteOrder, LittleEndian};
use tracing::debug;

use crate::core::error::checked_size;
use crate::core::{CodecError, ConvertOptions, Result};
use crate::msgs::{Header, PointCloud2};

use super::layout::{xyz_fields, xyz_normal_fields, FieldLayout, XYZ_NORMAL_POINT_STEP, XYZ_POINT_STEP};
use super::model::{Normals, PointModel};

/// A point model tagged with its message header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisionPointCloud {
    pub header: Header,
    pub model: PointModel,
}

impl VisionPointCloud {
    pub fn new(header: Header, model: PointModel) -> Self {
        Self { header, model }
    }

    /// Convert to a newly allocated `sensor_msgs/PointCloud2`.
    pub fn to_pointcloud_msg(&self) -> Result<PointCloud2> {
        to_pointcloud_msg(self)
    }
}

/// Encode a point cloud into a new message with default options.
pub fn to_pointcloud_msg(source: &VisionPointCloud) -> Result<PointCloud2> {
    to_pointcloud_msg_with_options(source, &ConvertOptions::default())
}

/// Encode a point cloud into a new message.
pub fn to_pointcloud_msg_with_options(
    source: &VisionPointCloud,
    options: &ConvertOptions,
) -> Result<PointCloud2> {
    let mut msg = PointCloud2::default();
    write_pointcloud_msg_with_options(source, &mut msg, options)?;
    Ok(msg)
}

/// Encode a point cloud into an existing message with default options.
pub fn write_pointcloud_msg(source: &VisionPointCloud, out: &mut PointCloud2) -> Result<()> {
    write_pointcloud_msg_with_options(source, out, &ConvertOptions::default())
}

/// Encode a point cloud into an existing message.
///
/// `out` is only modified once encoding has succeeded.
pub fn write_pointcloud_msg_with_options(
    source: &VisionPointCloud,
    out: &mut PointCloud2,
    options: &ConvertOptions,
) -> Result<()> {
    let model = &source.model;
    let num_points = model.num_points();
    let (fields, point_step) = match model.normals() {
        Some(_) => (xyz_normal_fields(), XYZ_NORMAL_POINT_STEP),
        None => (xyz_fields(), XYZ_POINT_STEP),
    };

    let size = checked_size("point cloud data", &[num_points, point_step])?;
    let width = u32::try_from(num_points).map_err(|_| {
        CodecError::malformed("PointCloud2", format!("{num_points} points exceed u32"))
    })?;
    let row_step = u32::try_from(size).map_err(|_| {
        CodecError::malformed("PointCloud2", format!("row of {size} bytes exceeds u32"))
    })?;

    let mut data = vec![0u8; size];
    for (i, record) in data.chunks_exact_mut(point_step).enumerate() {
        LittleEndian::write_f32(&mut record[0..4], model.x()[i]);
        LittleEndian::write_f32(&mut record[4..8], model.y()[i]);
        LittleEndian::write_f32(&mut record[8..12], model.z()[i]);
        if let Some(normals) = model.normals() {
            let curvature = model
                .curvature()
                .map_or(options.default_curvature, |c| c[i]);
            LittleEndian::write_f32(&mut record[12..16], normals.x[i]);
            LittleEndian::write_f32(&mut record[16..20], normals.y[i]);
            LittleEndian::write_f32(&mut record[20..24], normals.z[i]);
            LittleEndian::write_f32(&mut record[24..28], curvature);
        }
    }

    debug!(
        "Encoded {} points ({} fields, point_step {})",
        num_points,
        fields.len(),
        point_step
    );

    *out = PointCloud2 {
        header: source.header.clone(),
        height: 1,
        width,
        fields,
        is_bigendian: false,
        point_step: point_step as u32,
        row_step,
        data,
        is_dense: false,
    };
    Ok(())
}

/// Decode a message into a point model with default options.
pub fn from_pointcloud_msg(msg: &PointCloud2) -> Result<VisionPointCloud> {
    from_pointcloud_msg_with_options(msg, &ConvertOptions::default())
}

/// Decode a message into a point model.
///
/// Points are read row by row; rows are `row_step` bytes apart, or packed
/// back to back when `row_step` is smaller than a row of records.
pub fn from_pointcloud_msg_with_options(
    msg: &PointCloud2,
    options: &ConvertOptions,
) -> Result<VisionPointCloud> {
    if msg.is_bigendian {
        return Err(CodecError::unsupported("big-endian point cloud data"));
    }
    let layout = FieldLayout::scan(msg, options)?;

    let width = msg.width as usize;
    let height = msg.height as usize;
    let point_step = msg.point_step as usize;
    let row_bytes = checked_size("point cloud row", &[width, point_step])?;
    let row_stride = row_bytes.max(msg.row_step as usize);
    let required = match height {
        0 => 0,
        _ => checked_size("point cloud data", &[height - 1, row_stride])?
            .checked_add(row_bytes)
            .ok_or_else(|| CodecError::allocation("point cloud data"))?,
    };
    if msg.data.len() < required {
        return Err(CodecError::malformed(
            "PointCloud2",
            format!(
                "data holds {} bytes, {required} required by {width}x{height} points of step {point_step}",
                msg.data.len()
            ),
        ));
    }

    let num_points = checked_size("point count", &[width, height])?;
    let mut x = Vec::with_capacity(num_points);
    let mut y = Vec::with_capacity(num_points);
    let mut z = Vec::with_capacity(num_points);
    let mut normals = layout.normals.map(|_| Normals {
        x: Vec::with_capacity(num_points),
        y: Vec::with_capacity(num_points),
        z: Vec::with_capacity(num_points),
    });
    let mut curvature = layout.curvature.map(|_| Vec::with_capacity(num_points));

    for row in 0..height {
        let row_start = row * row_stride;
        for col in 0..width {
            let start = row_start + col * point_step;
            let record = &msg.data[start..start + point_step];
            x.push(layout.x.read(record));
            y.push(layout.y.read(record));
            z.push(layout.z.read(record));
            if let (Some(slots), Some(n)) = (layout.normals, normals.as_mut()) {
                n.x.push(slots[0].read(record));
                n.y.push(slots[1].read(record));
                n.z.push(slots[2].read(record));
            }
            if let (Some(slot), Some(c)) = (layout.curvature, curvature.as_mut()) {
                c.push(slot.read(record));
            }
        }
    }

    let mut model = PointModel::new(x, y, z)?;
    if let Some(normals) = normals {
        model = model.with_normals(normals)?;
    }
    if let Some(curvature) = curvature {
        model = model.with_curvature(curvature)?;
    }

    debug!(
        "Decoded {} points (normals: {}, curvature: {})",
        model.num_points(),
        model.has_normals(),
        model.curvature().is_some()
    );
    Ok(VisionPointCloud::new(msg.header.clone(), model))
}
