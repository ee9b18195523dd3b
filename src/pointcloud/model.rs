// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Structure-of-arrays 3D point model.

use crate::core::{CodecError, Result};

/// Per-point surface normals, one array per axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Normals {
    pub x: Vec<f32>,
    pub y: Vec<f32>,
    pub z: Vec<f32>,
}

impl Normals {
    pub fn new(x: Vec<f32>, y: Vec<f32>, z: Vec<f32>) -> Self {
        Self { x, y, z }
    }
}

/// 3D points stored as parallel coordinate arrays, with optional normals and
/// curvature.
///
/// All arrays that are present have the same length; this is checked when
/// the model is built and cannot be broken afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointModel {
    x: Vec<f32>,
    y: Vec<f32>,
    z: Vec<f32>,
    normals: Option<Normals>,
    curvature: Option<Vec<f32>>,
}

impl PointModel {
    /// Create a model from coordinate arrays.
    pub fn new(x: Vec<f32>, y: Vec<f32>, z: Vec<f32>) -> Result<Self> {
        if x.len() != y.len() || x.len() != z.len() {
            return Err(CodecError::malformed(
                "PointModel",
                format!(
                    "coordinate arrays differ in length (x={}, y={}, z={})",
                    x.len(),
                    y.len(),
                    z.len()
                ),
            ));
        }
        Ok(Self {
            x,
            y,
            z,
            normals: None,
            curvature: None,
        })
    }

    /// Create a model from `[x, y, z]` triples.
    pub fn from_points(points: &[[f32; 3]]) -> Self {
        Self {
            x: points.iter().map(|p| p[0]).collect(),
            y: points.iter().map(|p| p[1]).collect(),
            z: points.iter().map(|p| p[2]).collect(),
            normals: None,
            curvature: None,
        }
    }

    /// Attach per-point normals.
    pub fn with_normals(mut self, normals: Normals) -> Result<Self> {
        let n = self.num_points();
        if normals.x.len() != n || normals.y.len() != n || normals.z.len() != n {
            return Err(CodecError::malformed(
                "PointModel",
                format!(
                    "normal arrays (x={}, y={}, z={}) do not match {n} points",
                    normals.x.len(),
                    normals.y.len(),
                    normals.z.len()
                ),
            ));
        }
        self.normals = Some(normals);
        Ok(self)
    }

    /// Attach per-point curvature.
    ///
    /// Curvature is only carried alongside normals, so normals must be
    /// attached first.
    pub fn with_curvature(mut self, curvature: Vec<f32>) -> Result<Self> {
        if self.normals.is_none() {
            return Err(CodecError::malformed(
                "PointModel",
                "curvature requires normals to be attached first",
            ));
        }
        if curvature.len() != self.num_points() {
            return Err(CodecError::malformed(
                "PointModel",
                format!(
                    "curvature array has {} values for {} points",
                    curvature.len(),
                    self.num_points()
                ),
            ));
        }
        self.curvature = Some(curvature);
        Ok(self)
    }

    #[inline]
    pub fn num_points(&self) -> usize {
        self.x.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    #[inline]
    pub fn has_normals(&self) -> bool {
        self.normals.is_some()
    }

    /// X coordinates, one per point.
    pub fn x(&self) -> &[f32] {
        &self.x
    }

    /// Y coordinates, one per point.
    pub fn y(&self) -> &[f32] {
        &self.y
    }

    /// Z coordinates, one per point.
    pub fn z(&self) -> &[f32] {
        &self.z
    }

    /// Per-point normals, if attached.
    pub fn normals(&self) -> Option<&Normals> {
        self.normals.as_ref()
    }

    /// Per-point curvature, if attached. Only present alongside normals.
    pub fn curvature(&self) -> Option<&[f32]> {
        self.curvature.as_deref()
    }

    /// Coordinates of point `i`.
    pub fn point(&self, i: usize) -> Option<[f32; 3]> {
        Some([*self.x.get(i)?, self.y[i], self.z[i]])
    }

    /// Normal of point `i`, if the model has normals.
    pub fn normal(&self, i: usize) -> Option<[f32; 3]> {
        let n = self.normals.as_ref()?;
        Some([*n.x.get(i)?, n.y[i], n.z[i]])
    }

    /// Axis-aligned bounding box as `(min, max)`, or `None` when empty.
    pub fn bounds(&self) -> Option<([f32; 3], [f32; 3])> {
        let first = self.point(0)?;
        let mut min = first;
        let mut max = first;
        for i in 1..self.num_points() {
            let p = [self.x[i], self.y[i], self.z[i]];
            for axis in 0..3 {
                min[axis] = min[axis].min(p[axis]);
                max[axis] = max[axis].max(p[axis]);
            }
        }
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_uneven_coordinates() {
        let err = PointModel::new(vec![0.0; 2], vec![0.0; 2], vec![0.0; 3]).unwrap_err();
        assert!(matches!(err, CodecError::MalformedRecord { .. }));
    }

    #[test]
    fn test_from_points() {
        let model = PointModel::from_points(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert_eq!(model.num_points(), 2);
        assert_eq!(model.point(1), Some([4.0, 5.0, 6.0]));
        assert_eq!(model.point(2), None);
        assert!(!model.has_normals());
    }

    #[test]
    fn test_normals_must_match() {
        let model = PointModel::from_points(&[[0.0; 3]; 3]);
        let bad = Normals::new(vec![0.0; 3], vec![0.0; 2], vec![0.0; 3]);
        assert!(model.clone().with_normals(bad).is_err());

        let good = Normals::new(vec![1.0; 3], vec![0.0; 3], vec![0.0; 3]);
        let model = model.with_normals(good).unwrap();
        assert!(model.has_normals());
        assert_eq!(model.normal(2), Some([1.0, 0.0, 0.0]));
    }

    #[test]
    fn test_curvature_must_match() {
        let model = PointModel::from_points(&[[0.0; 3]; 2])
            .with_normals(Normals::new(vec![0.0; 2], vec![0.0; 2], vec![1.0; 2]))
            .unwrap();
        assert!(model.clone().with_curvature(vec![0.5]).is_err());
        let model = model.with_curvature(vec![0.5, 0.25]).unwrap();
        assert_eq!(model.curvature(), Some(&[0.5, 0.25][..]));
    }

    #[test]
    fn test_curvature_requires_normals() {
        let err = PointModel::from_points(&[[0.0; 3]; 2])
            .with_curvature(vec![0.5, 0.25])
            .unwrap_err();
        assert_eq!(
            err,
            CodecError::malformed("PointModel", "curvature requires normals to be attached first")
        );
    }

    #[test]
    fn test_bounds() {
        let model = PointModel::from_points(&[[1.0, -2.0, 3.0], [-1.0, 5.0, 0.0]]);
        assert_eq!(model.bounds(), Some(([-1.0, -2.0, 0.0], [1.0, 5.0, 3.0])));
        assert_eq!(PointModel::default().bounds(), None);
    }
}
