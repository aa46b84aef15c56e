//! Error types for the counting core.

use serde::Serialize;
use thiserror::Error;

use crate::counting::detection::RawId;

/// Why a single detection was rejected from a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedReason {
    /// `x2 < x1` or `y2 < y1`
    InvertedBox,
    /// Confidence is NaN or infinite
    NonFiniteConfidence,
    /// The raw id already appeared earlier in the same frame
    DuplicateRawId,
}

impl std::fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvertedBox => write!(f, "inverted bounding box"),
            Self::NonFiniteConfidence => write!(f, "non-finite confidence"),
            Self::DuplicateRawId => write!(f, "raw id repeated within one frame"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CountingError {
    /// A detection that cannot be processed. Only that detection is skipped.
    #[error("malformed detection for raw id {raw_id}: {reason}")]
    MalformedDetection { raw_id: RawId, reason: MalformedReason },

    /// Invalid construction-time configuration.
    #[error("invalid configuration: {field} must be positive, got {value}")]
    CapacityMisconfiguration { field: &'static str, value: u64 },
}
