//! Per-frame input from the upstream detector/tracker.

use serde::{Deserialize, Serialize};

use crate::counting::bbox::BBox;
use crate::counting::error::{CountingError, MalformedReason};

/// Volatile identifier assigned by the upstream tracker.
pub type RawId = u64;

/// Sequential identity assigned by this crate on confirmation, starting at 1.
pub type StableId = u64;

/// One tracked object in one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Tracker-assigned identifier
    pub raw_id: RawId,
    /// Bounding box in TLBR format (x1, y1, x2, y2)
    pub bbox: BBox,
    /// Class label from the detector
    pub class_id: u32,
    /// Detection confidence score
    pub confidence: f32,
}

impl Detection {
    pub fn new(
        raw_id: RawId,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        class_id: u32,
        confidence: f32,
    ) -> Self {
        Self {
            raw_id,
            bbox: BBox::new(x1, y1, x2, y2),
            class_id,
            confidence,
        }
    }

    pub fn from_bbox(raw_id: RawId, bbox: BBox, class_id: u32, confidence: f32) -> Self {
        Self {
            raw_id,
            bbox,
            class_id,
            confidence,
        }
    }

    /// Structural check applied before a detection reaches the counters.
    pub fn validate(&self) -> Result<(), CountingError> {
        let reason = if !self.bbox.is_well_formed() {
            MalformedReason::InvertedBox
        } else if !self.confidence.is_finite() {
            MalformedReason::NonFiniteConfidence
        } else {
            return Ok(());
        };
        Err(CountingError::MalformedDetection {
            raw_id: self.raw_id,
            reason,
        })
    }
}
