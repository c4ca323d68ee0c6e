//! Object-detection collaborator boundary.
//!
//! The backend does not run a detection model itself; it only defines the
//! contract an external detector fulfils: given an image path, return the
//! detections found in it.

use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;
use debriswatch_common::Detection;

/// Detections below this confidence are not worth showing.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.6;

#[async_trait]
pub trait ObjectDetector: Send + Sync {
    /// Run detection on the image at `path`.
    async fn detect(&self, path: &Path) -> Result<Vec<Detection>>;
}

/// Drop detections below `threshold`, preserving order.
pub fn retain_confident(detections: Vec<Detection>, threshold: f32) -> Vec<Detection> {
    detections
        .into_iter()
        .filter(|d| d.confidence >= threshold)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use debriswatch_common::BoundingBox;
    use std::path::PathBuf;

    struct FixedDetector(Vec<Detection>);

    #[async_trait]
    impl ObjectDetector for FixedDetector {
        async fn detect(&self, _path: &Path) -> Result<Vec<Detection>> {
            Ok(self.0.clone())
        }
    }

    fn detection(class_id: u32, confidence: f32) -> Detection {
        Detection {
            bbox: BoundingBox {
                x1: 0.0,
                y1: 0.0,
                x2: 10.0,
                y2: 10.0,
            },
            class_id,
            confidence,
        }
    }

    #[tokio::test]
    async fn threshold_filters_detector_output() {
        let detector = FixedDetector(vec![detection(0, 0.92), detection(1, 0.41)]);
        let raw = detector.detect(&PathBuf::from("image.jpg")).await.unwrap();

        let kept = retain_confident(raw, DEFAULT_CONFIDENCE_THRESHOLD);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].class_id, 0);
    }
}
