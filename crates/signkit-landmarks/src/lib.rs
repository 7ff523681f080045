pub mod detector;
pub mod error;
pub mod extract;
pub mod persist;
pub mod process;
pub mod sample;
pub mod types;

pub use detector::{DetectorConfig, HolisticDetector};
pub use error::LandmarkError;
pub use extract::{extract_keypoints, FrameKeypoints};
pub use persist::{load_array, sample_paths, save_array, write_sample, SamplePaths};
pub use process::{process_video, ProcessSummary};
pub use sample::{SampleTensors, SignSample};
pub use types::{
    Detection, HandLandmarkIndex, Landmark, LandmarkGroup, GROUP_FLAT_LEN, HAND_LANDMARK_COUNT,
    POSE_LANDMARK_COUNT,
};
