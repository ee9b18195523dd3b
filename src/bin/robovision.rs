// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! # Robovision CLI
//!
//! Inspect and round-trip sensor messages stored as JSON.
//!
//! ## Usage
//!
//! ```sh
//! # Decode an image and print per-plane statistics
//! robovision image info frame.json
//!
//! # Decode and re-encode an image, writing the result
//! robovision image roundtrip frame.json -o frame.out.json
//!
//! # Decode a point cloud with custom options
//! robovision cloud info cloud.json --config robovision.toml
//! ```

mod cmd;
mod common;

use std::process;

use clap::{Parser, Subcommand};
use cmd::{CloudCmd, ImageCmd};
use common::Result;
use robovision::CodecError;

/// Robovision - ROS image and point-cloud converters
///
/// Converts sensor_msgs/Image and sensor_msgs/PointCloud2 messages to and
/// from planar vision models.
#[derive(Parser, Clone)]
#[command(name = "robovision")]
#[command(about = "Image and point-cloud converters for ROS sensor messages", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "ArcheBase")]
struct Cli {
    /// Log conversion details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Clone)]
enum Commands {
    /// sensor_msgs/Image operations (info, roundtrip)
    #[command(subcommand)]
    Image(ImageCmd),

    /// sensor_msgs/PointCloud2 operations (info, roundtrip)
    #[command(subcommand)]
    Cloud(CloudCmd),
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    common::init_logging(cli.verbose);

    match cli.command {
        Commands::Image(cmd) => cmd.run(),
        Commands::Cloud(cmd) => cmd.run(),
    }
}

fn main() {
    let result = run();

    if let Err(e) = result {
        if let Some(codec) = e.chain().find_map(|c| c.downcast_ref::<CodecError>()) {
            let fields: Vec<String> = codec
                .log_fields()
                .into_iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect();
            tracing::error!("Conversion failed: {}", fields.join(", "));
        }
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
