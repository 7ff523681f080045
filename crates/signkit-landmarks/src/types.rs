use signkit_base::Vec3;

/// Number of landmarks per hand in the holistic hand model
pub const HAND_LANDMARK_COUNT: usize = 21;

/// Number of pose landmarks in this convention (upper-body subset,
/// same count as a hand so all three groups flatten to the same length)
pub const POSE_LANDMARK_COUNT: usize = 21;

/// Length of one flattened landmark group: 21 landmarks x (x, y, z)
pub const GROUP_FLAT_LEN: usize = HAND_LANDMARK_COUNT * 3;

/// One detected anatomical keypoint in normalized image coordinates
pub type Landmark = Vec3<f32>;

/// Hand landmark indices in the holistic hand model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandLandmarkIndex {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexFingerMcp = 5,
    IndexFingerPip = 6,
    IndexFingerDip = 7,
    IndexFingerTip = 8,
    MiddleFingerMcp = 9,
    MiddleFingerPip = 10,
    MiddleFingerDip = 11,
    MiddleFingerTip = 12,
    RingFingerMcp = 13,
    RingFingerPip = 14,
    RingFingerDip = 15,
    RingFingerTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

impl From<HandLandmarkIndex> for usize {
    fn from(index: HandLandmarkIndex) -> usize {
        index as usize
    }
}

impl TryFrom<usize> for HandLandmarkIndex {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(HandLandmarkIndex::Wrist),
            1 => Ok(HandLandmarkIndex::ThumbCmc),
            2 => Ok(HandLandmarkIndex::ThumbMcp),
            3 => Ok(HandLandmarkIndex::ThumbIp),
            4 => Ok(HandLandmarkIndex::ThumbTip),
            5 => Ok(HandLandmarkIndex::IndexFingerMcp),
            6 => Ok(HandLandmarkIndex::IndexFingerPip),
            7 => Ok(HandLandmarkIndex::IndexFingerDip),
            8 => Ok(HandLandmarkIndex::IndexFingerTip),
            9 => Ok(HandLandmarkIndex::MiddleFingerMcp),
            10 => Ok(HandLandmarkIndex::MiddleFingerPip),
            11 => Ok(HandLandmarkIndex::MiddleFingerDip),
            12 => Ok(HandLandmarkIndex::MiddleFingerTip),
            13 => Ok(HandLandmarkIndex::RingFingerMcp),
            14 => Ok(HandLandmarkIndex::RingFingerPip),
            15 => Ok(HandLandmarkIndex::RingFingerDip),
            16 => Ok(HandLandmarkIndex::RingFingerTip),
            17 => Ok(HandLandmarkIndex::PinkyMcp),
            18 => Ok(HandLandmarkIndex::PinkyPip),
            19 => Ok(HandLandmarkIndex::PinkyDip),
            20 => Ok(HandLandmarkIndex::PinkyTip),
            _ => Err(format!(
                "Invalid hand landmark index: {}. Must be in range 0-20.",
                value
            )),
        }
    }
}

/// The three landmark groups a holistic detection can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandmarkGroup {
    Pose,
    LeftHand,
    RightHand,
}

impl LandmarkGroup {
    /// Expected landmark count for this group
    pub fn expected_count(&self) -> usize {
        match self {
            LandmarkGroup::Pose => POSE_LANDMARK_COUNT,
            LandmarkGroup::LeftHand | LandmarkGroup::RightHand => HAND_LANDMARK_COUNT,
        }
    }

    /// File name prefix used by the persistence layout
    pub fn file_prefix(&self) -> &'static str {
        match self {
            LandmarkGroup::Pose => "pose_",
            LandmarkGroup::LeftHand => "lh_",
            LandmarkGroup::RightHand => "rh_",
        }
    }
}

/// One holistic detection result for a single frame.
///
/// Each group is explicitly optional: a hand that was not in view is
/// `None`, which the extractor resolves to a zero vector. The detector
/// contract guarantees pose, so a `None` pose is a shape error at the
/// extractor boundary.
#[derive(Debug, Clone, Default)]
pub struct Detection {
    pub pose: Option<Vec<Landmark>>,
    pub left_hand: Option<Vec<Landmark>>,
    pub right_hand: Option<Vec<Landmark>>,
}
