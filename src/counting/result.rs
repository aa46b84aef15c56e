//! Per-frame output handed to the renderer.

use std::collections::HashMap;

use serde::Serialize;

use crate::counting::bbox::{BBox, Point};
use crate::counting::detection::{Detection, RawId, StableId};
use crate::counting::error::MalformedReason;

/// A confirmed object as seen in the current frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub stable_id: StableId,
    pub raw_id: RawId,
    pub bbox: BBox,
    pub class_id: u32,
    pub confidence: f32,
    pub center: Point,
    /// Trail after this frame's center was appended, oldest first
    pub trail: Vec<Point>,
}

impl Annotation {
    /// Consecutive trail points, one pair per polyline segment.
    pub fn trail_segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.trail.windows(2).map(|w| (w[0], w[1]))
    }

    /// Display text such as `ID: 4 car (0.87)`.
    ///
    /// Falls back to the numeric class id when `names` has no entry.
    pub fn label(&self, names: &HashMap<u32, String>) -> String {
        let class_name = names
            .get(&self.class_id)
            .cloned()
            .unwrap_or_else(|| self.class_id.to_string());
        format!("ID: {} {} ({:.2})", self.stable_id, class_name, self.confidence)
    }
}

/// A detection skipped as malformed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedDetection {
    pub detection: Detection,
    pub reason: MalformedReason,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FrameResult {
    /// 1-based index of this frame in the stream
    pub frame_index: u64,
    /// Confirmed objects in this frame, in detection order
    pub annotations: Vec<Annotation>,
    /// Stable identities assigned so far
    pub unique_count: u64,
    pub rejected: Vec<RejectedDetection>,
}

impl FrameResult {
    pub fn count_label(&self) -> String {
        format!("COUNT: {}", self.unique_count)
    }

    pub fn annotation_for(&self, stable_id: StableId) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.stable_id == stable_id)
    }
}
