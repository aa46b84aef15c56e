//! Trait for the upstream detection + tracking collaborator.

use crate::counting::{BBox, Detection, RawId};

/// Source of tracked detections, one call per video frame.
///
/// Implement this to connect a detector/tracker (YOLO + ByteTrack, a
/// replayed log, ...) to the counting core. Every returned detection must
/// carry the tracker's raw id.
///
/// # Example
///
/// ```ignore
/// use traffic_count_rs::{Detection, DetectionSource};
///
/// struct MyTracker {
///     // Your model and tracker here
/// }
///
/// impl DetectionSource for MyTracker {
///     type Error = std::io::Error;
///
///     fn detect(
///         &mut self,
///         input: &[u8],
///         width: u32,
///         height: u32,
///     ) -> Result<Vec<Detection>, Self::Error> {
///         // Run inference + tracking and return detections
///         Ok(vec![])
///     }
/// }
/// ```
pub trait DetectionSource {
    /// Error type for detection failures.
    type Error;

    /// Run detection and tracking on raw image data.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes (format depends on implementation)
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    fn detect(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<Detection>, Self::Error>;
}

/// Helper trait for converting tracker-specific outputs to `Detection`.
pub trait IntoDetections {
    /// Convert the output into a vector of detections.
    fn into_detections(self) -> Vec<Detection>;
}

impl IntoDetections for Vec<Detection> {
    fn into_detections(self) -> Vec<Detection> {
        self
    }
}

/// `(raw_id, [x1, y1, x2, y2], class_id, confidence)` rows with float boxes,
/// as most trackers report them. Coordinates are truncated toward zero.
impl IntoDetections for Vec<(RawId, [f32; 4], u32, f32)> {
    fn into_detections(self) -> Vec<Detection> {
        self.into_iter()
            .map(|(raw_id, [x1, y1, x2, y2], class_id, confidence)| {
                let bbox = BBox::from_tlbr_f32(x1, y1, x2, y2);
                Detection::from_bbox(raw_id, bbox, class_id, confidence)
            })
            .collect()
    }
}
