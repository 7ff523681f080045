use signkit_base::Tensor;
use signkit_landmarks::{
    load_array, sample_paths, save_array, write_sample, FrameKeypoints, LandmarkError, SignSample,
    GROUP_FLAT_LEN,
};
use std::fs;
use std::path::PathBuf;

fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("signkit-persist-{}-{}", std::process::id(), name));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn keypoints(fill: f32) -> FrameKeypoints {
    FrameKeypoints {
        pose: vec![fill; GROUP_FLAT_LEN],
        left_hand: vec![0.0; GROUP_FLAT_LEN],
        right_hand: vec![0.0; GROUP_FLAT_LEN],
    }
}

#[test]
fn test_save_load_roundtrip_exact() {
    let dir = test_dir("roundtrip");

    // Values chosen to stress float formatting
    let data: Vec<f32> = (0..2 * GROUP_FLAT_LEN)
        .map(|i| (i as f32) * 0.1 + 0.333_333_34)
        .collect();
    let tensor = Tensor::new(vec![2, GROUP_FLAT_LEN], data).unwrap();

    let path = dir.join("pose_roundtrip.json");
    save_array(&tensor, &path).unwrap();
    let loaded = load_array(&path).unwrap();

    assert_eq!(loaded, tensor);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_sample_paths_layout() {
    let paths = sample_paths(&PathBuf::from("data/dataset"), "hello");

    assert_eq!(paths.pose, PathBuf::from("data/dataset/hello/pose_hello.json"));
    assert_eq!(paths.left_hand, PathBuf::from("data/dataset/hello/lh_hello.json"));
    assert_eq!(paths.right_hand, PathBuf::from("data/dataset/hello/rh_hello.json"));
}

#[test]
fn test_write_sample_creates_exactly_three_files() {
    let dir = test_dir("three-files");

    let mut sample = SignSample::new();
    sample.push(keypoints(0.1));
    sample.push(keypoints(0.2));

    let paths = write_sample(sample, &dir, "hello").unwrap();

    assert!(paths.pose.exists());
    assert!(paths.left_hand.exists());
    assert!(paths.right_hand.exists());

    let entries: Vec<_> = fs::read_dir(dir.join("hello")).unwrap().collect();
    assert_eq!(entries.len(), 3);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_write_empty_sample_persists_zero_row_arrays() {
    let dir = test_dir("empty-sample");

    let paths = write_sample(SignSample::new(), &dir, "empty").unwrap();

    let pose = load_array(&paths.pose).unwrap();
    assert_eq!(pose.shape, vec![0, GROUP_FLAT_LEN]);
    assert!(pose.is_empty());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_write_sample_roundtrips_values() {
    let dir = test_dir("values");

    let mut sample = SignSample::new();
    sample.push(keypoints(0.25));

    let paths = write_sample(sample, &dir, "one").unwrap();

    let pose = load_array(&paths.pose).unwrap();
    assert_eq!(pose.shape, vec![1, GROUP_FLAT_LEN]);
    assert_eq!(pose.row(0).unwrap(), &[0.25; GROUP_FLAT_LEN][..]);

    let left = load_array(&paths.left_hand).unwrap();
    assert_eq!(left.row(0).unwrap(), &[0.0; GROUP_FLAT_LEN][..]);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_load_rejects_inconsistent_record() {
    let dir = test_dir("corrupt");

    // Record claims [2, 63] but carries a single value
    let path = dir.join("pose_bad.json");
    fs::write(&path, r#"{"shape":[2,63],"data":[1.0]}"#).unwrap();

    let result = load_array(&path);
    assert!(matches!(result, Err(LandmarkError::Shape { .. })));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_load_missing_file_is_io_error() {
    let result = load_array(&PathBuf::from("/nonexistent/signkit/pose_x.json"));
    assert!(matches!(result, Err(LandmarkError::Io(_))));
}
