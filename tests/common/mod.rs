// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use robovision::msgs::{Header, Image, PointCloud2, PointField, PointFieldType, Time};

// ============================================================================
// Message Builders
// ============================================================================

/// Header used by every fixture.
pub fn test_header() -> Header {
    Header::new(Time::new(1_700_000_000, 500), "sensor_frame")
}

/// Deterministic 8-bit pattern that differs per channel and pixel.
pub fn pattern(len: usize, seed: u8) -> Vec<u8> {
    (0..len)
        .map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed))
        .collect()
}

/// Build a tightly packed image message.
pub fn image_msg(encoding: &str, width: u32, height: u32, channels: u32) -> Image {
    let step = width * channels;
    Image {
        header: test_header(),
        height,
        width,
        encoding: encoding.to_string(),
        is_bigendian: false,
        step,
        data: pattern((step * height) as usize, 7),
    }
}

/// Pack float records into a little-endian point cloud message.
pub fn cloud_msg(fields: Vec<PointField>, records: &[Vec<f32>]) -> PointCloud2 {
    let floats = records.first().map_or(0, Vec::len);
    let point_step = (floats * 4) as u32;
    let data = records
        .iter()
        .flat_map(|r| r.iter().flat_map(|v| v.to_le_bytes()))
        .collect();
    PointCloud2 {
        header: test_header(),
        height: 1,
        width: records.len() as u32,
        fields,
        is_bigendian: false,
        point_step,
        row_step: point_step * records.len() as u32,
        data,
        is_dense: true,
    }
}

pub fn float_field(name: &str, offset: u32) -> PointField {
    PointField::new(name, offset, PointFieldType::FLOAT32, 1)
}

// ============================================================================
// Temporary Files
// ============================================================================

/// Get a temporary directory for test files
pub fn temp_dir(prefix: &str) -> PathBuf {
    let random = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .subsec_nanos();
    std::env::temp_dir().join(format!(
        "robovision_{}_{}_{}",
        prefix,
        std::process::id(),
        random
    ))
}

/// Create a temporary directory with cleanup guard
pub fn temp_workspace(prefix: &str) -> (PathBuf, CleanupGuard) {
    let dir = temp_dir(prefix);
    fs::create_dir_all(&dir).expect("create temp dir");
    (dir.clone(), CleanupGuard(dir))
}

/// Cleanup guard for test temporary files
pub struct CleanupGuard(PathBuf);

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}
