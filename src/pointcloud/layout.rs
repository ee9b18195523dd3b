// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Point record layouts.
//!
//! Clouds produced by this crate use one of two fixed layouts:
//!
//! ```text
//! xyz (12 bytes)
//! ┌───────┬───────┬───────┐
//! │ x:f32 │ y:f32 │ z:f32 │
//! └───────┴───────┴───────┘
//!
//! xyz + normal + curvature (28 bytes)
//! ┌───────┬───────┬───────┬──────────────┬──────────────┬──────────────┬───────────────┐
//! │ x:f32 │ y:f32 │ z:f32 │ normal_x:f32 │ normal_y:f32 │ normal_z:f32 │ curvature:f32 │
//! └───────┴───────┴───────┴──────────────┴──────────────┴──────────────┴───────────────┘
//! ```
//!
//! Incoming clouds may use any layout; [`FieldLayout::scan`] locates the
//! fields the codec consumes.

use byteorder::{ByteOrder, LittleEndian};
use tracing::warn;

use crate::core::{CodecError, ConvertOptions, Result};
use crate::msgs::{PointCloud2, PointField, PointFieldType};

pub const FIELD_X: &str = "x";
pub const FIELD_Y: &str = "y";
pub const FIELD_Z: &str = "z";
pub const FIELD_NORMAL_X: &str = "normal_x";
pub const FIELD_NORMAL_Y: &str = "normal_y";
pub const FIELD_NORMAL_Z: &str = "normal_z";
pub const FIELD_CURVATURE: &str = "curvature";

/// Record size of the xyz layout.
pub const XYZ_POINT_STEP: usize = 12;

/// Record size of the xyz + normal + curvature layout.
pub const XYZ_NORMAL_POINT_STEP: usize = 28;

const FLOAT_SIZE: usize = 4;

fn float_field(name: &str, offset: u32) -> PointField {
    PointField::new(name, offset, PointFieldType::FLOAT32, 1)
}

/// Field descriptors for the 12-byte xyz layout.
pub fn xyz_fields() -> Vec<PointField> {
    vec![
        float_field(FIELD_X, 0),
        float_field(FIELD_Y, 4),
        float_field(FIELD_Z, 8),
    ]
}

/// Field descriptors for the 28-byte xyz + normal + curvature layout.
pub fn xyz_normal_fields() -> Vec<PointField> {
    let mut fields = xyz_fields();
    fields.extend([
        float_field(FIELD_NORMAL_X, 12),
        float_field(FIELD_NORMAL_Y, 16),
        float_field(FIELD_NORMAL_Z, 20),
        float_field(FIELD_CURVATURE, 24),
    ]);
    fields
}

/// Byte offset of a 4-byte float inside a point record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatSlot {
    offset: usize,
}

impl FloatSlot {
    pub fn offset(self) -> usize {
        self.offset
    }

    /// Read the float from one point record.
    #[inline]
    pub fn read(self, record: &[u8]) -> f32 {
        LittleEndian::read_f32(&record[self.offset..self.offset + FLOAT_SIZE])
    }
}

/// Where the consumed fields live inside each point record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    pub x: FloatSlot,
    pub y: FloatSlot,
    pub z: FloatSlot,
    pub normals: Option<[FloatSlot; 3]>,
    pub curvature: Option<FloatSlot>,
}

#[derive(Default)]
struct Found<'a> {
    x: Option<&'a PointField>,
    y: Option<&'a PointField>,
    z: Option<&'a PointField>,
    normal_x: Option<&'a PointField>,
    normal_y: Option<&'a PointField>,
    normal_z: Option<&'a PointField>,
    curvature: Option<&'a PointField>,
}

impl FieldLayout {
    /// Locate the consumed fields in a single pass over the descriptors.
    ///
    /// `x`, `y` and `z` are required. Normals are used only when all three
    /// normal fields are present with a non-zero count, and curvature only
    /// together with normals. Every used field must be a 4-byte float that
    /// fits inside `point_step`.
    pub fn scan(cloud: &PointCloud2, options: &ConvertOptions) -> Result<Self> {
        let mut found = Found::default();
        let mut ignored = Vec::new();
        for field in &cloud.fields {
            let slot = match field.name.as_str() {
                FIELD_X => &mut found.x,
                FIELD_Y => &mut found.y,
                FIELD_Z => &mut found.z,
                FIELD_NORMAL_X => &mut found.normal_x,
                FIELD_NORMAL_Y => &mut found.normal_y,
                FIELD_NORMAL_Z => &mut found.normal_z,
                FIELD_CURVATURE => &mut found.curvature,
                _ => {
                    ignored.push(field.name.as_str());
                    continue;
                }
            };
            // Last descriptor wins.
            *slot = Some(field);
        }
        if !ignored.is_empty() {
            warn!("Ignoring point fields not consumed by the codec: {:?}", ignored);
        }

        let point_step = cloud.point_step as usize;
        let required = |name: &str, field: Option<&PointField>| -> Result<FloatSlot> {
            let field = field.ok_or_else(|| {
                CodecError::malformed("PointCloud2", format!("missing required field '{name}'"))
            })?;
            float_slot(field, point_step, options)
        };
        let x = required(FIELD_X, found.x)?;
        let y = required(FIELD_Y, found.y)?;
        let z = required(FIELD_Z, found.z)?;

        let normals = match (
            present(found.normal_x),
            present(found.normal_y),
            present(found.normal_z),
        ) {
            (Some(nx), Some(ny), Some(nz)) => Some([
                float_slot(nx, point_step, options)?,
                float_slot(ny, point_step, options)?,
                float_slot(nz, point_step, options)?,
            ]),
            (None, None, None) => None,
            _ => {
                warn!("Point cloud has an incomplete set of normal fields; ignoring normals");
                None
            }
        };
        let curvature = match (normals, present(found.curvature)) {
            (Some(_), Some(field)) => Some(float_slot(field, point_step, options)?),
            (None, Some(_)) => {
                warn!("Point cloud has curvature but no normals; ignoring curvature");
                None
            }
            (_, None) => None,
        };

        Ok(Self {
            x,
            y,
            z,
            normals,
            curvature,
        })
    }
}

fn present(field: Option<&PointField>) -> Option<&PointField> {
    field.filter(|f| f.count > 0)
}

fn float_slot(field: &PointField, point_step: usize, options: &ConvertOptions) -> Result<FloatSlot> {
    let datatype = field.field_type()?;
    let accepted = if options.strict_datatypes {
        datatype == PointFieldType::FLOAT32
    } else {
        datatype.size() == FLOAT_SIZE
    };
    if !accepted {
        return Err(CodecError::unsupported(format!(
            "{datatype} field '{}'",
            field.name
        )));
    }

    let offset = field.offset as usize;
    if offset + FLOAT_SIZE > point_step {
        return Err(CodecError::malformed(
            "PointCloud2",
            format!(
                "field '{}' at offset {offset} does not fit in point_step {point_step}",
                field.name
            ),
        ));
    }
    Ok(FloatSlot { offset })
}
