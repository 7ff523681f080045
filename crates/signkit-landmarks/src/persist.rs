use crate::types::LandmarkGroup;
use crate::{LandmarkError, SignSample};
use serde::{Deserialize, Serialize};
use signkit_base::Tensor;
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk form of one persisted array. JSON is used because serde_json's
/// float formatting round-trips `f32` exactly, satisfying the exact
/// equality law for `save_array`/`load_array`.
#[derive(Serialize, Deserialize)]
struct ArrayRecord {
    shape: Vec<usize>,
    data: Vec<f32>,
}

/// The three file paths of one persisted sign sample.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplePaths {
    pub pose: PathBuf,
    pub left_hand: PathBuf,
    pub right_hand: PathBuf,
}

/// Compute the fixed persistence layout for a sign:
/// `<output_root>/<sign>/{pose_,lh_,rh_}<sign>.json`.
pub fn sample_paths(output_root: &Path, sign: &str) -> SamplePaths {
    let dir = output_root.join(sign);
    let file = |group: LandmarkGroup| dir.join(format!("{}{sign}.json", group.file_prefix()));

    SamplePaths {
        pose: file(LandmarkGroup::Pose),
        left_hand: file(LandmarkGroup::LeftHand),
        right_hand: file(LandmarkGroup::RightHand),
    }
}

/// Serialize one array to the given path.
pub fn save_array(tensor: &Tensor<f32>, path: &Path) -> Result<(), LandmarkError> {
    let record = ArrayRecord {
        shape: tensor.shape.clone(),
        data: tensor.data.clone(),
    };
    let bytes = serde_json::to_vec(&record)?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Deserialize an array previously written by `save_array`.
///
/// The shape/data consistency is re-validated on load, so a truncated or
/// hand-edited file surfaces as a shape error instead of a silent
/// misshapen tensor.
pub fn load_array(path: &Path) -> Result<Tensor<f32>, LandmarkError> {
    let bytes = fs::read(path)?;
    let record: ArrayRecord = serde_json::from_slice(&bytes)?;
    Ok(Tensor::new(record.shape, record.data)?)
}

/// Persist a consumed sample as three `[num_frames, 63]` arrays.
///
/// Creates `<output_root>/<sign>/` if needed. Writes are independent:
/// a failure on one file leaves any already-written files in place, and
/// the returned error names the write that failed.
pub fn write_sample(
    sample: SignSample,
    output_root: &Path,
    sign: &str,
) -> Result<SamplePaths, LandmarkError> {
    let tensors = sample.into_tensors()?;
    let paths = sample_paths(output_root, sign);

    fs::create_dir_all(output_root.join(sign))?;

    save_array(&tensors.pose, &paths.pose)?;
    save_array(&tensors.left_hand, &paths.left_hand)?;
    save_array(&tensors.right_hand, &paths.right_hand)?;

    Ok(paths)
}
