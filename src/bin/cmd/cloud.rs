// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Cloud command - decode and re-encode sensor_msgs/PointCloud2.

use std::path::PathBuf;

use clap::Subcommand;

use crate::common::{format_stamp, load_options, read_json, write_json, Result};
use robovision::msgs::PointCloud2;
use robovision::pointcloud::{from_pointcloud_msg_with_options, to_pointcloud_msg_with_options};

/// sensor_msgs/PointCloud2 operations.
#[derive(Subcommand, Clone, Debug)]
pub enum CloudCmd {
    /// Decode a point cloud and print a summary
    Info {
        /// PointCloud2 message as JSON
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Conversion options (TOML)
        #[arg(short, long, value_name = "CONFIG")]
        config: Option<PathBuf>,
    },

    /// Decode and re-encode a point cloud into the canonical layout
    Roundtrip {
        /// PointCloud2 message as JSON
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Write the re-encoded message here
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Conversion options (TOML)
        #[arg(short, long, value_name = "CONFIG")]
        config: Option<PathBuf>,
    },
}

impl CloudCmd {
    pub fn run(self) -> Result<()> {
        match self {
            CloudCmd::Info { input, config } => cmd_info(input, config),
            CloudCmd::Roundtrip {
                input,
                output,
                config,
            } => cmd_roundtrip(input, output, config),
        }
    }
}

/// Print point count, attributes and bounds.
fn cmd_info(input: PathBuf, config: Option<PathBuf>) -> Result<()> {
    let options = load_options(config.as_deref())?;
    let msg: PointCloud2 = read_json(&input)?;
    let cloud = from_pointcloud_msg_with_options(&msg, &options)?;
    let model = &cloud.model;

    println!("Point cloud: {}", input.display());
    println!("  Frame:     {}", cloud.header.frame_id);
    println!("  Stamp:     {}", format_stamp(&cloud.header.stamp));
    println!("  Points:    {}", model.num_points());
    println!("  Normals:   {}", if model.has_normals() { "yes" } else { "no" });
    println!(
        "  Curvature: {}",
        if model.curvature().is_some() { "yes" } else { "no" }
    );
    if let Some((min, max)) = model.bounds() {
        println!("  Min:       [{:.3}, {:.3}, {:.3}]", min[0], min[1], min[2]);
        println!("  Max:       [{:.3}, {:.3}, {:.3}]", max[0], max[1], max[2]);
    }
    Ok(())
}

/// Decode, re-encode and report the resulting layout.
fn cmd_roundtrip(input: PathBuf, output: Option<PathBuf>, config: Option<PathBuf>) -> Result<()> {
    let options = load_options(config.as_deref())?;
    let msg: PointCloud2 = read_json(&input)?;
    let cloud = from_pointcloud_msg_with_options(&msg, &options)?;
    let encoded = to_pointcloud_msg_with_options(&cloud, &options)?;

    println!("Point cloud round trip: {}", input.display());
    println!("  Points:     {}", encoded.width);
    println!("  Point step: {} -> {}", msg.point_step, encoded.point_step);
    println!("  Fields:     {}", field_names(&encoded));
    println!(
        "  Identical:  {}",
        if encoded.data == msg.data { "yes" } else { "no" }
    );

    if let Some(output) = output {
        write_json(&output, &encoded)?;
        println!("  Written:    {}", output.display());
    }
    Ok(())
}

fn field_names(msg: &PointCloud2) -> String {
    msg.fields
        .iter()
        .map(|f| f.name.as_str())
        .collect::<Vec<_>>()
        .join(",")
}
