// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Common utilities for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::Context as _;
use serde::de::DeserializeOwned;
use serde::Serialize;

use robovision::msgs::Time;
use robovision::ConvertOptions;

pub use anyhow::Result as CliResult;
pub type Result<T = ()> = CliResult<T>;

/// Install a stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects debug over warn.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .init();
}

/// Load a message from a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Store a message as pretty-printed JSON.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

/// Load conversion options, falling back to defaults.
pub fn load_options(path: Option<&Path>) -> Result<ConvertOptions> {
    match path {
        Some(path) => Ok(ConvertOptions::from_toml_file(path)?),
        None => Ok(ConvertOptions::default()),
    }
}

/// Format a message stamp as a human-readable string.
pub fn format_stamp(stamp: &Time) -> String {
    let datetime =
        chrono::DateTime::<chrono::Utc>::from_timestamp(stamp.sec as i64, stamp.nanosec);

    match datetime {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S%.3f UTC").to_string(),
        None => format!("{}.{:09}", stamp.sec, stamp.nanosec),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_stamp() {
        assert_eq!(format_stamp(&Time::new(0, 0)), "1970-01-01 00:00:00.000 UTC");
        assert_eq!(
            format_stamp(&Time::new(1_700_000_000, 250_000_000)),
            "2023-11-14 22:13:20.250 UTC"
        );
    }

    #[test]
    fn test_load_default_options() {
        assert_eq!(load_options(None).unwrap(), ConvertOptions::default());
    }
}
