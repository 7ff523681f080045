use crate::types::GROUP_FLAT_LEN;
use crate::{FrameKeypoints, LandmarkError};
use signkit_base::Tensor;

/// One video's worth of frame keypoints: three parallel sequences, one
/// entry per processed frame, insertion order = frame order.
///
/// `push` appends to all three sequences unconditionally, so their lengths
/// are always equal. The sample is transient; `into_tensors` consumes it
/// for persistence.
#[derive(Debug, Clone, Default)]
pub struct SignSample {
    pose: Vec<Vec<f32>>,
    left_hand: Vec<Vec<f32>>,
    right_hand: Vec<Vec<f32>>,
}

/// The three `[num_frames, 63]` tensors of a consumed sample.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleTensors {
    pub pose: Tensor<f32>,
    pub left_hand: Tensor<f32>,
    pub right_hand: Tensor<f32>,
}

impl SignSample {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one frame's keypoints to all three sequences.
    pub fn push(&mut self, keypoints: FrameKeypoints) {
        self.pose.push(keypoints.pose);
        self.left_hand.push(keypoints.left_hand);
        self.right_hand.push(keypoints.right_hand);
    }

    /// Number of frames accumulated so far.
    pub fn num_frames(&self) -> usize {
        self.pose.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pose.is_empty()
    }

    /// Convert the three sequences into `[num_frames, 63]` tensors.
    ///
    /// A zero-frame sample yields three valid `[0, 63]` tensors.
    pub fn into_tensors(self) -> Result<SampleTensors, LandmarkError> {
        Ok(SampleTensors {
            pose: Tensor::from_rows(self.pose, GROUP_FLAT_LEN)?,
            left_hand: Tensor::from_rows(self.left_hand, GROUP_FLAT_LEN)?,
            right_hand: Tensor::from_rows(self.right_hand, GROUP_FLAT_LEN)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keypoints(fill: f32) -> FrameKeypoints {
        FrameKeypoints {
            pose: vec![fill; GROUP_FLAT_LEN],
            left_hand: vec![0.0; GROUP_FLAT_LEN],
            right_hand: vec![0.0; GROUP_FLAT_LEN],
        }
    }

    #[test]
    fn test_push_keeps_sequences_aligned() {
        let mut sample = SignSample::new();
        sample.push(keypoints(0.5));
        sample.push(keypoints(0.6));

        assert_eq!(sample.num_frames(), 2);

        let tensors = sample.into_tensors().unwrap();
        assert_eq!(tensors.pose.shape, vec![2, GROUP_FLAT_LEN]);
        assert_eq!(tensors.left_hand.shape, vec![2, GROUP_FLAT_LEN]);
        assert_eq!(tensors.right_hand.shape, vec![2, GROUP_FLAT_LEN]);
    }

    #[test]
    fn test_empty_sample_yields_zero_row_tensors() {
        let sample = SignSample::new();
        assert!(sample.is_empty());

        let tensors = sample.into_tensors().unwrap();
        assert_eq!(tensors.pose.shape, vec![0, GROUP_FLAT_LEN]);
        assert!(tensors.pose.is_empty());
    }
}
