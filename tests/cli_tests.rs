// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! CLI integration tests.
//!
//! These tests run the actual robovision binary and verify its behavior.

mod common;

use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use common::{cloud_msg, image_msg, temp_workspace};
use robovision::msgs::{Image, PointCloud2};
use robovision::pointcloud::{xyz_fields, xyz_normal_fields};

/// Get the path to the built robovision binary
fn robovision_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_robovision"))
}

/// Run robovision with arguments
fn run(args: &[&str]) -> Output {
    let bin = robovision_bin();
    Command::new(&bin)
        .args(args)
        .output()
        .unwrap_or_else(|_| panic!("Failed to run {:?}", bin))
}

/// Run robovision and assert success
fn run_ok(args: &[&str]) -> String {
    let output = run(args);
    assert!(
        output.status.success(),
        "Command failed: {:?}\nstdout: {}\nstderr: {}",
        args,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run robovision and assert failure
fn run_err(args: &[&str]) -> String {
    let output = run(args);
    assert!(
        !output.status.success(),
        "Command should have failed but succeeded: {:?}",
        args
    );
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn write_fixture<T: serde::Serialize>(dir: &Path, name: &str, value: &T) -> String {
    let path = dir.join(name);
    fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
    path.to_string_lossy().to_string()
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_cli_help() {
    let output = run_ok(&["--help"]);
    assert!(output.contains("Image and point-cloud converters"));
    assert!(output.contains("image"));
    assert!(output.contains("cloud"));
}

#[test]
fn test_cli_version() {
    let output = run_ok(&["--version"]);
    assert!(output.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_missing_file() {
    let stderr = run_err(&["image", "info", "/nonexistent/frame.json"]);
    assert!(stderr.contains("Error"));
}

// ============================================================================
// Image Commands
// ============================================================================

#[test]
fn test_image_info() {
    let (dir, _guard) = temp_workspace("cli_image_info");
    let input = write_fixture(&dir, "frame.json", &image_msg("bgr8", 4, 2, 3));

    let output = run_ok(&["image", "info", &input]);
    assert!(output.contains("Size:     4x2"));
    assert!(output.contains("Encoding: bgr8"));
    assert!(output.contains("Channels: 3"));
    assert!(output.contains("sensor_frame"));
    assert!(output.contains("red"));
    assert!(output.contains("blue"));
}

#[test]
fn test_image_roundtrip_writes_output() {
    let (dir, _guard) = temp_workspace("cli_image_roundtrip");
    let msg = image_msg("rgba8", 3, 3, 4);
    let input = write_fixture(&dir, "frame.json", &msg);
    let output_path = dir.join("out.json");

    let output = run_ok(&[
        "image",
        "roundtrip",
        &input,
        "-o",
        output_path.to_str().unwrap(),
    ]);
    assert!(output.contains("Identical: yes"));

    let written: Image =
        serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(written, msg);
}

#[test]
fn test_image_unsupported_encoding() {
    let (dir, _guard) = temp_workspace("cli_image_yuv");
    let input = write_fixture(&dir, "frame.json", &image_msg("yuv422", 2, 2, 2));

    let stderr = run_err(&["image", "info", &input]);
    assert!(stderr.contains("Unsupported encoding: 'yuv422'"));
    assert!(stderr.contains("Conversion failed: encoding=yuv422"));
}

// ============================================================================
// Cloud Commands
// ============================================================================

#[test]
fn test_cloud_info() {
    let (dir, _guard) = temp_workspace("cli_cloud_info");
    let msg = cloud_msg(
        xyz_normal_fields(),
        &[
            vec![1.0, 2.0, 3.0, 0.0, 0.0, 1.0, 0.1],
            vec![-1.0, 0.0, 5.0, 0.0, 1.0, 0.0, 0.2],
        ],
    );
    let input = write_fixture(&dir, "cloud.json", &msg);

    let output = run_ok(&["cloud", "info", &input]);
    assert!(output.contains("Points:    2"));
    assert!(output.contains("Normals:   yes"));
    assert!(output.contains("Curvature: yes"));
    assert!(output.contains("[-1.000, 0.000, 3.000]"));
    assert!(output.contains("[1.000, 2.000, 5.000]"));
}

#[test]
fn test_cloud_roundtrip_canonical_layout() {
    let (dir, _guard) = temp_workspace("cli_cloud_roundtrip");
    let msg = cloud_msg(xyz_fields(), &[vec![1.0, 2.0, 3.0]]);
    let input = write_fixture(&dir, "cloud.json", &msg);
    let output_path = dir.join("out.json");

    let output = run_ok(&[
        "cloud",
        "roundtrip",
        &input,
        "--output",
        output_path.to_str().unwrap(),
    ]);
    assert!(output.contains("Point step: 12 -> 12"));
    assert!(output.contains("Fields:     x,y,z"));
    assert!(output.contains("Identical:  yes"));

    let written: PointCloud2 =
        serde_json::from_str(&fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(written.data, msg.data);
    assert!(!written.is_dense);
}

#[test]
fn test_cloud_with_config() {
    let (dir, _guard) = temp_workspace("cli_cloud_config");
    let mut msg = cloud_msg(xyz_fields(), &[vec![1.0, 2.0, 3.0]]);
    msg.fields[0].datatype = 6; // UINT32
    let input = write_fixture(&dir, "cloud.json", &msg);

    let stderr = run_err(&["cloud", "info", &input]);
    assert!(stderr.contains("Unsupported feature"));

    let config = dir.join("robovision.toml");
    fs::write(&config, "strict_datatypes = false\n").unwrap();
    let output = run_ok(&["cloud", "info", &input, "-c", config.to_str().unwrap()]);
    assert!(output.contains("Points:    1"));
}

#[test]
fn test_cloud_missing_x() {
    let (dir, _guard) = temp_workspace("cli_cloud_missing_x");
    let mut msg = cloud_msg(xyz_fields(), &[vec![1.0, 2.0, 3.0]]);
    msg.fields.remove(0);
    let input = write_fixture(&dir, "cloud.json", &msg);

    let stderr = run_err(&["cloud", "info", &input]);
    assert!(stderr.contains("missing required field 'x'"));
}
