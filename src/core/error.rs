// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for robovision.
//!
//! Every conversion is a one-shot transformation, so every error is terminal
//! for the call that produced it. No partial output is ever returned.

use thiserror::Error;

/// Errors that can occur while converting messages.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    /// Image encoding is unknown, or known but not convertible
    #[error("Unsupported encoding: '{encoding}'")]
    UnsupportedEncoding {
        /// Encoding name as found on the message
        encoding: String,
    },

    /// Wire record or vision model violates its layout invariants
    #[error("Malformed {record}: {reason}")]
    MalformedRecord {
        /// Kind of record ("Image", "PointCloud2", "PointModel", ...)
        record: String,
        /// What is wrong with it
        reason: String,
    },

    /// Unsupported datatype or feature
    #[error("Unsupported feature: '{feature}'")]
    Unsupported {
        /// What is not supported
        feature: String,
    },

    /// Size computation overflowed
    #[error("Allocation of {what} overflows the address space")]
    Allocation {
        /// What was being sized
        what: String,
    },
}

impl CodecError {
    /// Create an unsupported encoding error.
    pub fn unsupported_encoding(encoding: impl Into<String>) -> Self {
        CodecError::UnsupportedEncoding {
            encoding: encoding.into(),
        }
    }

    /// Create a malformed record error.
    pub fn malformed(record: impl Into<String>, reason: impl Into<String>) -> Self {
        CodecError::MalformedRecord {
            record: record.into(),
            reason: reason.into(),
        }
    }

    /// Create an unsupported feature error.
    pub fn unsupported(feature: impl Into<String>) -> Self {
        CodecError::Unsupported {
            feature: feature.into(),
        }
    }

    /// Create an allocation overflow error.
    pub fn allocation(what: impl Into<String>) -> Self {
        CodecError::Allocation { what: what.into() }
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            CodecError::UnsupportedEncoding { encoding } => vec![("encoding", encoding.clone())],
            CodecError::MalformedRecord { record, reason } => {
                vec![("record", record.clone()), ("reason", reason.clone())]
            }
            CodecError::Unsupported { feature } => vec![("feature", feature.clone())],
            CodecError::Allocation { what } => vec![("what", what.clone())],
        }
    }
}

/// Result type for robovision operations.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Multiply sizes, mapping overflow to [`CodecError::Allocation`].
pub(crate) fn checked_size(what: &str, factors: &[usize]) -> Result<usize> {
    factors
        .iter()
        .try_fold(1usize, |acc, &f| acc.checked_mul(f))
        .ok_or_else(|| CodecError::allocation(what))
}
