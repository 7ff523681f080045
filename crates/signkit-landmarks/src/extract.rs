use crate::types::{Landmark, LandmarkGroup, GROUP_FLAT_LEN};
use crate::{Detection, LandmarkError};

/// The flattened keypoint vectors for one frame, one per landmark group.
///
/// Every vector has exactly `GROUP_FLAT_LEN` (63) elements regardless of
/// detection success; absent hands are all-zero.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameKeypoints {
    pub pose: Vec<f32>,
    pub left_hand: Vec<f32>,
    pub right_hand: Vec<f32>,
}

/// Flatten a landmark collection into `3 * count` values, landmark-major:
/// (x, y, z) of landmark 0, then landmark 1, and so on.
fn landmarks_to_flat(landmarks: &[Landmark]) -> Vec<f32> {
    let mut flat = Vec::with_capacity(landmarks.len() * 3);
    for landmark in landmarks {
        flat.extend(landmark.to_array());
    }
    flat
}

/// Flatten one group, checking its count against the group's expected count.
fn flatten_present(group: LandmarkGroup, landmarks: &[Landmark]) -> Result<Vec<f32>, LandmarkError> {
    let expected = group.expected_count();
    if landmarks.len() != expected {
        return Err(LandmarkError::Shape {
            expected: format!("{expected} landmarks for {group:?}"),
            got: format!("{}", landmarks.len()),
        });
    }
    Ok(landmarks_to_flat(landmarks))
}

/// Extract the three fixed-length keypoint vectors from one detection.
///
/// Absent hands resolve to zero vectors here, at the extractor boundary,
/// so downstream sequences stay aligned frame for frame. An absent pose is
/// a shape error: pose is the one group the detector contract guarantees.
/// Pure function of its input.
pub fn extract_keypoints(detection: &Detection) -> Result<FrameKeypoints, LandmarkError> {
    let pose = match &detection.pose {
        Some(landmarks) => flatten_present(LandmarkGroup::Pose, landmarks)?,
        None => {
            return Err(LandmarkError::Shape {
                expected: "pose landmarks".to_string(),
                got: "absent pose group".to_string(),
            });
        }
    };

    let left_hand = match &detection.left_hand {
        Some(landmarks) => flatten_present(LandmarkGroup::LeftHand, landmarks)?,
        None => vec![0.0; GROUP_FLAT_LEN],
    };

    let right_hand = match &detection.right_hand {
        Some(landmarks) => flatten_present(LandmarkGroup::RightHand, landmarks)?,
        None => vec![0.0; GROUP_FLAT_LEN],
    };

    Ok(FrameKeypoints {
        pose,
        left_hand,
        right_hand,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use signkit_base::Vec3;

    #[test]
    fn test_landmarks_to_flat_order() {
        let landmarks = vec![Vec3::new(0.1, 0.2, 0.3), Vec3::new(0.4, 0.5, 0.6)];
        assert_eq!(
            landmarks_to_flat(&landmarks),
            vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6]
        );
    }

    #[test]
    fn test_flatten_present_rejects_wrong_count() {
        let landmarks = vec![Vec3::zero(); 20];
        let result = flatten_present(LandmarkGroup::LeftHand, &landmarks);
        assert!(matches!(result, Err(LandmarkError::Shape { .. })));
    }
}
