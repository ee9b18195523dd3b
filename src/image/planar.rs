// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Channel-planar image model.
//!
//! A [`PlanarImage`] stores every channel as its own contiguous, row-major
//! block. Planes are always kept in canonical R, G, B(, A) order; the wire
//! channel order only matters when interleaving.
//!
//! The raster helpers here ([`PlanarImage::scale_columns`],
//! [`PlanarImage::decompose`], [`ColumnGrid`], [`PlanarImage::overpaint`])
//! are the building blocks the image encoder composes into a
//! planar-to-interleaved repack.

use crate::core::error::checked_size;
use crate::core::{CodecError, Result};

use super::encoding::PixelType;

/// Image with one contiguous buffer per channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanarImage {
    width: usize,
    height: usize,
    pixel_type: PixelType,
    planes: Vec<Vec<u8>>,
}

impl PlanarImage {
    /// Create an image from its planes.
    ///
    /// Every plane must hold exactly `width * height` elements of
    /// `pixel_type`, and there must be 1, 3 or 4 planes.
    pub fn new(
        width: usize,
        height: usize,
        pixel_type: PixelType,
        planes: Vec<Vec<u8>>,
    ) -> Result<Self> {
        if !matches!(planes.len(), 1 | 3 | 4) {
            return Err(CodecError::malformed(
                "PlanarImage",
                format!("expected 1, 3 or 4 planes, got {}", planes.len()),
            ));
        }
        let plane_len = checked_size("image plane", &[width, height, pixel_type.size()])?;
        if let Some((index, plane)) = planes
            .iter()
            .enumerate()
            .find(|(_, p)| p.len() != plane_len)
        {
            return Err(CodecError::malformed(
                "PlanarImage",
                format!(
                    "plane {index} holds {} bytes, expected {plane_len}",
                    plane.len()
                ),
            ));
        }
        Ok(Self {
            width,
            height,
            pixel_type,
            planes,
        })
    }

    /// Create a zero-filled image with `channels` planes.
    pub fn zeroed(
        width: usize,
        height: usize,
        pixel_type: PixelType,
        channels: usize,
    ) -> Result<Self> {
        let plane_len = checked_size("image plane", &[width, height, pixel_type.size()])?;
        Self::new(width, height, pixel_type, vec![vec![0u8; plane_len]; channels])
    }

    /// Create a single-channel 8-bit image.
    pub fn mono8(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        Self::new(width, height, PixelType::Byte, vec![data])
    }

    /// Create a three-channel 8-bit image from red, green and blue planes.
    pub fn rgb8(
        width: usize,
        height: usize,
        red: Vec<u8>,
        green: Vec<u8>,
        blue: Vec<u8>,
    ) -> Result<Self> {
        Self::new(width, height, PixelType::Byte, vec![red, green, blue])
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn pixel_type(&self) -> PixelType {
        self.pixel_type
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.planes.len()
    }

    /// Raw bytes of one plane.
    pub fn plane(&self, index: usize) -> Option<&[u8]> {
        self.planes.get(index).map(Vec::as_slice)
    }

    pub fn planes(&self) -> &[Vec<u8>] {
        &self.planes
    }

    /// Consume the image, returning its planes.
    pub fn into_planes(self) -> Vec<Vec<u8>> {
        self.planes
    }

    /// 8-bit value at (row, col) in the given plane.
    ///
    /// Returns `None` out of bounds or for wider pixel types.
    pub fn get_u8(&self, plane: usize, row: usize, col: usize) -> Option<u8> {
        if self.pixel_type != PixelType::Byte || row >= self.height || col >= self.width {
            return None;
        }
        self.planes.get(plane).map(|p| p[row * self.width + col])
    }

    /// Stretch the image horizontally by an integer factor.
    ///
    /// Each source element is replicated `factor` times along its row, the
    /// nearest-neighbour result of an affine column scale.
    pub fn scale_columns(&self, factor: usize) -> Result<PlanarImage> {
        let elem = self.pixel_type.size();
        let new_width = checked_size("scaled width", &[self.width, factor])?;
        let planes = self
            .planes
            .iter()
            .map(|plane| {
                let mut out = Vec::with_capacity(plane.len() * factor);
                for value in plane.chunks_exact(elem) {
                    for _ in 0..factor {
                        out.extend_from_slice(value);
                    }
                }
                out
            })
            .collect();
        Ok(PlanarImage {
            width: new_width,
            height: self.height,
            pixel_type: self.pixel_type,
            planes,
        })
    }

    /// Split into single-channel images, one per plane.
    pub fn decompose(&self) -> Vec<PlanarImage> {
        self.planes
            .iter()
            .map(|plane| PlanarImage {
                width: self.width,
                height: self.height,
                pixel_type: self.pixel_type,
                planes: vec![plane.clone()],
            })
            .collect()
    }

    /// Paint `source` onto this image wherever `grid` is set.
    ///
    /// Both images must be single-channel with identical geometry and pixel
    /// type. Elements outside the grid keep their current value.
    pub fn overpaint(&mut self, source: &PlanarImage, grid: &ColumnGrid) -> Result<()> {
        if self.channels() != 1 || source.channels() != 1 {
            return Err(CodecError::unsupported("overpaint of multi-channel images"));
        }
        if (self.width, self.height, self.pixel_type)
            != (source.width, source.height, source.pixel_type)
        {
            return Err(CodecError::malformed(
                "PlanarImage",
                format!(
                    "overpaint geometry mismatch: {}x{} onto {}x{}",
                    source.width, source.height, self.width, self.height
                ),
            ));
        }

        let elem = self.pixel_type.size();
        let dst = &mut self.planes[0];
        let src = &source.planes[0];
        for row in 0..self.height.min(grid.height) {
            for col in grid.columns(self.width) {
                let at = (row * self.width + col) * elem;
                dst[at..at + elem].copy_from_slice(&src[at..at + elem]);
            }
        }
        Ok(())
    }
}

/// Mask selecting every `period`-th column starting at `phase`.
///
/// The mask is clipped to a `width` x `height` canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnGrid {
    period: usize,
    phase: usize,
    width: usize,
    height: usize,
}

impl ColumnGrid {
    pub fn new(period: usize, phase: usize, width: usize, height: usize) -> Result<Self> {
        if period == 0 || phase >= period {
            return Err(CodecError::malformed(
                "ColumnGrid",
                format!("phase {phase} is not inside period {period}"),
            ));
        }
        Ok(Self {
            period,
            phase,
            width,
            height,
        })
    }

    /// The `period` disjoint grids covering a canvas, one per phase.
    pub fn partition(period: usize, width: usize, height: usize) -> Result<Vec<ColumnGrid>> {
        (0..period)
            .map(|phase| ColumnGrid::new(period, phase, width, height))
            .collect()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width && col % self.period == self.phase
    }

    /// Selected columns, further clipped to `limit`.
    fn columns(&self, limit: usize) -> impl Iterator<Item = usize> {
        (self.phase..self.width.min(limit)).step_by(self.period)
    }
}
