// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Conversion options.

use std::path::Path;

use serde::Deserialize;

use super::error::{CodecError, Result};

/// Options controlling how point clouds are converted.
///
/// Can be built in code or loaded from TOML:
///
/// ```toml
/// strict_datatypes = false
/// default_curvature = 0.5
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertOptions {
    /// Require every consumed point field to be FLOAT32.
    ///
    /// When disabled, any 4-byte field is reinterpreted as f32.
    pub strict_datatypes: bool,

    /// Curvature written for models that carry normals but no curvature
    pub default_curvature: f32,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            strict_datatypes: true,
            default_curvature: 0.0,
        }
    }
}

impl ConvertOptions {
    /// Set strict datatype checking.
    pub fn with_strict_datatypes(mut self, strict: bool) -> Self {
        self.strict_datatypes = strict;
        self
    }

    /// Set the curvature written when a model has none.
    pub fn with_default_curvature(mut self, curvature: f32) -> Self {
        self.default_curvature = curvature;
        self
    }

    /// Parse options from a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| CodecError::malformed("options", e.to_string()))
    }

    /// Load options from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            CodecError::malformed("options", format!("{}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }
}
