//! CountingPipeline for combining detection with identity counting.

use crate::counting::{CountingConfig, CountingError, FrameProcessor, FrameResult};

use super::{ClassFilter, DetectionSource};

/// Bundles an upstream detector/tracker with a [`FrameProcessor`].
///
/// Detections outside the class filter are dropped before they reach the
/// processor, the way the detector's own class configuration would.
pub struct CountingPipeline<D: DetectionSource> {
    detector: D,
    filter: ClassFilter,
    processor: FrameProcessor,
}

impl<D: DetectionSource> CountingPipeline<D> {
    /// Create a new pipeline with the given detector, class filter and config.
    pub fn new(
        detector: D,
        filter: ClassFilter,
        config: CountingConfig,
    ) -> Result<Self, CountingError> {
        Ok(Self {
            detector,
            filter,
            processor: FrameProcessor::new(config)?,
        })
    }

    /// Create a pipeline counting COCO vehicles with the default config.
    pub fn with_default_config(detector: D) -> Self {
        Self {
            detector,
            filter: ClassFilter::coco_vehicles(),
            processor: FrameProcessor::default(),
        }
    }

    /// Process a single frame.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    ///
    /// # Returns
    /// Confirmed annotations and the running unique count, or a detection error.
    pub fn process_frame(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<FrameResult, D::Error> {
        let detections = self.detector.detect(input, width, height)?;
        let detections = self.filter.apply(detections);
        Ok(self.processor.process_frame(detections))
    }

    pub fn filter(&self) -> &ClassFilter {
        &self.filter
    }

    /// Get a reference to the underlying detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Get a mutable reference to the underlying detector.
    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    /// Get a reference to the underlying processor.
    pub fn processor(&self) -> &FrameProcessor {
        &self.processor
    }
}
