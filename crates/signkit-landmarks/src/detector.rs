use crate::{Detection, LandmarkError};
use signkit_video::VideoFrame;

/// Confidence thresholds for a holistic detector backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorConfig {
    /// Minimum confidence for the initial per-frame detection
    pub min_detection_confidence: f32,
    /// Minimum confidence for tracking landmarks across frames
    pub min_tracking_confidence: f32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            min_detection_confidence: 0.5,
            min_tracking_confidence: 0.5,
        }
    }
}

impl DetectorConfig {
    /// Set detection confidence threshold (builder pattern)
    pub fn with_detection_confidence(mut self, threshold: f32) -> Self {
        self.min_detection_confidence = threshold;
        self
    }

    /// Set tracking confidence threshold (builder pattern)
    pub fn with_tracking_confidence(mut self, threshold: f32) -> Self {
        self.min_tracking_confidence = threshold;
        self
    }
}

/// Per-frame holistic landmark detection.
///
/// The detector is an external collaborator; implementations wrap whatever
/// pretrained pose/hand model is in use. The handle is passed explicitly to
/// the processing loop (open at the start of a video, dropped at the end),
/// never held as ambient global state.
pub trait HolisticDetector {
    /// Run detection on one frame.
    ///
    /// Hands out of view are `None` in the returned `Detection`; pose is
    /// expected to always be present.
    fn detect(&mut self, frame: &VideoFrame) -> Result<Detection, LandmarkError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let config = DetectorConfig::default();
        assert_eq!(config.min_detection_confidence, 0.5);
        assert_eq!(config.min_tracking_confidence, 0.5);
    }

    #[test]
    fn test_builder_setters() {
        let config = DetectorConfig::default()
            .with_detection_confidence(0.7)
            .with_tracking_confidence(0.3);
        assert_eq!(config.min_detection_confidence, 0.7);
        assert_eq!(config.min_tracking_confidence, 0.3);
    }
}
