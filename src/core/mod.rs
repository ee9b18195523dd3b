// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core types used throughout robovision.
//!
//! This module provides the foundational types for the library:
//! - [`CodecError`] - Error handling shared by both codecs
//! - [`ConvertOptions`] - Tunables for the point-cloud codec

pub mod error;
pub mod options;

pub use error::{CodecError, Result};
pub use options::ConvertOptions;
