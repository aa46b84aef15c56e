//! Builder for creating Detection objects from various input formats.

use crate::counting::{BBox, Detection, RawId};

/// Builder for creating `Detection` objects from various input formats.
#[derive(Debug, Clone, Default)]
pub struct DetectionBuilder {
    raw_id: RawId,
    bbox: BBox,
    class_id: u32,
    confidence: f32,
}

impl DetectionBuilder {
    /// Create a new detection builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tracker-assigned id.
    pub fn raw_id(mut self, raw_id: RawId) -> Self {
        self.raw_id = raw_id;
        self
    }

    /// Set bounding box in TLBR format (x1, y1, x2, y2).
    pub fn xyxy(mut self, x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        self.bbox = BBox::new(x1, y1, x2, y2);
        self
    }

    /// Set bounding box from float TLBR coordinates, truncated toward zero.
    pub fn xyxy_f32(mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        self.bbox = BBox::from_tlbr_f32(x1, y1, x2, y2);
        self
    }

    /// Set bounding box in TLWH format (left, top, width, height).
    pub fn tlwh(mut self, x: i32, y: i32, w: i32, h: i32) -> Self {
        self.bbox = BBox::from_tlwh(x, y, w, h);
        self
    }

    pub fn class_id(mut self, class_id: u32) -> Self {
        self.class_id = class_id;
        self
    }

    /// Set the confidence score.
    pub fn confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence;
        self
    }

    /// Build the final `Detection`.
    pub fn build(self) -> Detection {
        Detection::from_bbox(self.raw_id, self.bbox, self.class_id, self.confidence)
    }
}
