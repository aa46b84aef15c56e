//! Class allow-list applied on the detector side of the pipeline.

use std::collections::{BTreeSet, HashMap};

use crate::counting::Detection;

/// COCO class ids treated as vehicles: bicycle, car, motorcycle, bus, truck.
pub const COCO_VEHICLE_CLASSES: [u32; 5] = [1, 2, 3, 5, 7];

/// Display names for [`COCO_VEHICLE_CLASSES`].
pub fn coco_vehicle_names() -> HashMap<u32, String> {
    [(1, "bicycle"), (2, "car"), (3, "motorcycle"), (5, "bus"), (7, "truck")]
        .into_iter()
        .map(|(id, name)| (id, name.to_string()))
        .collect()
}

/// Which detector classes are allowed through to the counting core.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassFilter {
    /// `None` accepts every class
    accepted: Option<BTreeSet<u32>>,
}

impl ClassFilter {
    pub fn any() -> Self {
        Self { accepted: None }
    }

    pub fn only(classes: impl IntoIterator<Item = u32>) -> Self {
        Self {
            accepted: Some(classes.into_iter().collect()),
        }
    }

    pub fn coco_vehicles() -> Self {
        Self::only(COCO_VEHICLE_CLASSES)
    }

    #[inline]
    pub fn accepts(&self, class_id: u32) -> bool {
        self.accepted
            .as_ref()
            .is_none_or(|classes| classes.contains(&class_id))
    }

    pub fn apply(&self, detections: Vec<Detection>) -> Vec<Detection> {
        if self.accepted.is_none() {
            return detections;
        }
        detections
            .into_iter()
            .filter(|d| self.accepts(d.class_id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coco_vehicles() {
        let filter = ClassFilter::coco_vehicles();
        assert!(filter.accepts(2));
        assert!(filter.accepts(7));
        // person, traffic light
        assert!(!filter.accepts(0));
        assert!(!filter.accepts(9));
        assert_eq!(coco_vehicle_names().len(), COCO_VEHICLE_CLASSES.len());
    }

    #[test]
    fn test_apply_keeps_order() {
        let dets = vec![
            Detection::new(1, 0, 0, 1, 1, 2, 0.9),
            Detection::new(2, 0, 0, 1, 1, 0, 0.9),
            Detection::new(3, 0, 0, 1, 1, 5, 0.9),
        ];
        let kept = ClassFilter::coco_vehicles().apply(dets.clone());
        assert_eq!(kept.iter().map(|d| d.raw_id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(ClassFilter::any().apply(dets).len(), 3);
    }
}
