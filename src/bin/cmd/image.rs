// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Image command - decode and re-encode sensor_msgs/Image.

use std::path::PathBuf;

use clap::Subcommand;

use crate::common::{format_stamp, read_json, write_json, Result};
use robovision::image::{from_image_msg, to_image_msg};
use robovision::msgs::Image;

/// sensor_msgs/Image operations.
#[derive(Subcommand, Clone, Debug)]
pub enum ImageCmd {
    /// Decode an image and print its planes
    Info {
        /// Image message as JSON
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },

    /// Decode and re-encode an image, checking the payload survives
    Roundtrip {
        /// Image message as JSON
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Write the re-encoded message here
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },
}

impl ImageCmd {
    pub fn run(self) -> Result<()> {
        match self {
            ImageCmd::Info { input } => cmd_info(input),
            ImageCmd::Roundtrip { input, output } => cmd_roundtrip(input, output),
        }
    }
}

/// Print dimensions and per-plane statistics.
fn cmd_info(input: PathBuf) -> Result<()> {
    let msg: Image = read_json(&input)?;
    let decoded = from_image_msg(&msg)?;
    let image = decoded.image();

    println!("Image: {}", input.display());
    println!("  Frame:    {}", decoded.header.frame_id);
    println!("  Stamp:    {}", format_stamp(&decoded.header.stamp));
    println!("  Size:     {}x{}", image.width(), image.height());
    println!("  Encoding: {}", decoded.encoding());
    println!("  Channels: {}", image.channels());

    let names: &[&str] = match image.channels() {
        1 => &["mono"],
        3 => &["red", "green", "blue"],
        _ => &["red", "green", "blue", "alpha"],
    };
    for (name, plane) in names.iter().zip(image.planes()) {
        match plane_stats(plane) {
            Some((min, max, mean)) => {
                println!("  {name:<6} min={min:<3} max={max:<3} mean={mean:.2}")
            }
            None => println!("  {name:<6} (empty)"),
        }
    }
    Ok(())
}

/// Decode, re-encode and compare payloads.
fn cmd_roundtrip(input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let msg: Image = read_json(&input)?;
    let encoded = to_image_msg(&from_image_msg(&msg)?)?;

    let identical = encoded.data == msg.data && encoded.step == msg.step;
    println!("Image round trip: {}", input.display());
    println!("  Bytes in:  {}", msg.data.len());
    println!("  Bytes out: {}", encoded.data.len());
    println!("  Identical: {}", if identical { "yes" } else { "no" });

    if let Some(output) = output {
        write_json(&output, &encoded)?;
        println!("  Written:   {}", output.display());
    }
    Ok(())
}

fn plane_stats(plane: &[u8]) -> Option<(u8, u8, f64)> {
    let min = *plane.iter().min()?;
    let max = *plane.iter().max()?;
    let sum: u64 = plane.iter().map(|&v| v as u64).sum();
    Some((min, max, sum as f64 / plane.len() as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_stats() {
        assert_eq!(plane_stats(&[1, 2, 3, 6]), Some((1, 6, 3.0)));
        assert_eq!(plane_stats(&[]), None);
    }
}
