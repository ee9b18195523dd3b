// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! ROS wire message types handled by the codecs.
//!
//! These mirror the field layout of the corresponding ROS messages:
//!
//! - `builtin_interfaces/Time` - [`Time`]
//! - `std_msgs/Header` - [`Header`]
//! - `sensor_msgs/Image` - [`Image`]
//! - `sensor_msgs/PointField` - [`PointField`]
//! - `sensor_msgs/PointCloud2` - [`PointCloud2`]
//!
//! All types are plain owned data and serialize with serde, which is what
//! the CLI uses to load and store them as JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{CodecError, Result};

/// Timestamp with seconds and nanoseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Time {
    pub sec: i32,
    pub nanosec: u32,
}

impl Time {
    pub fn new(sec: i32, nanosec: u32) -> Self {
        Self { sec, nanosec }
    }
}

/// Standard message header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub stamp: Time,
    pub frame_id: String,
}

impl Header {
    pub fn new(stamp: Time, frame_id: impl Into<String>) -> Self {
        Self {
            stamp,
            frame_id: frame_id.into(),
        }
    }
}

/// An uncompressed image with interleaved channels.
///
/// `step` is the row length in bytes; `data` holds `height` rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub header: Header,
    pub height: u32,
    pub width: u32,
    pub encoding: String,
    pub is_bigendian: bool,
    pub step: u32,
    pub data: Vec<u8>,
}

/// Datatype tags for [`PointField::datatype`].
///
/// Discriminants are the values used on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[allow(clippy::upper_case_acronyms)]
pub enum PointFieldType {
    INT8 = 1,
    UINT8 = 2,
    INT16 = 3,
    UINT16 = 4,
    INT32 = 5,
    UINT32 = 6,
    FLOAT32 = 7,
    FLOAT64 = 8,
}

impl PointFieldType {
    /// Size of one element in bytes.
    pub const fn size(self) -> usize {
        match self {
            Self::INT8 | Self::UINT8 => 1,
            Self::INT16 | Self::UINT16 => 2,
            Self::INT32 | Self::UINT32 | Self::FLOAT32 => 4,
            Self::FLOAT64 => 8,
        }
    }

    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for PointFieldType {
    type Error = CodecError;

    fn try_from(value: u8) -> Result<Self> {
        Ok(match value {
            1 => Self::INT8,
            2 => Self::UINT8,
            3 => Self::INT16,
            4 => Self::UINT16,
            5 => Self::INT32,
            6 => Self::UINT32,
            7 => Self::FLOAT32,
            8 => Self::FLOAT64,
            other => {
                return Err(CodecError::unsupported(format!(
                    "point field datatype {other}"
                )))
            }
        })
    }
}

impl fmt::Display for PointFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Describes one named sub-range of a point record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointField {
    pub name: String,
    pub offset: u32,
    pub datatype: u8,
    pub count: u32,
}

impl PointField {
    pub fn new(name: impl Into<String>, offset: u32, datatype: PointFieldType, count: u32) -> Self {
        Self {
            name: name.into(),
            offset,
            datatype: datatype.as_u8(),
            count,
        }
    }

    /// Decode the datatype tag.
    pub fn field_type(&self) -> Result<PointFieldType> {
        PointFieldType::try_from(self.datatype)
    }
}

/// A collection of N-dimensional points stored as fixed-size records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointCloud2 {
    pub header: Header,
    pub height: u32,
    pub width: u32,
    pub fields: Vec<PointField>,
    pub is_bigendian: bool,
    pub point_step: u32,
    pub row_step: u32,
    pub data: Vec<u8>,
    pub is_dense: bool,
}
