use crate::persist::{write_sample, SamplePaths};
use crate::{extract_keypoints, HolisticDetector, LandmarkError, SignSample};
use signkit_video::VideoSource;
use std::path::Path;

/// Outcome of processing one video.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessSummary {
    /// Number of frames decoded, detected, and accumulated
    pub frames: usize,
    /// Where the three sequences were written
    pub paths: SamplePaths,
}

/// Process one video end to end: decode frames sequentially, run the
/// detector on each, accumulate the three keypoint sequences, and persist
/// them under `<output_root>/<sign>/`.
///
/// Strictly single-threaded; the source and detector handles are owned by
/// this call for its duration and released when it returns. End of stream
/// ends the loop silently; a genuine decode failure propagates as an error.
/// An empty video persists three zero-row arrays.
pub fn process_video(
    source: &mut dyn VideoSource,
    detector: &mut dyn HolisticDetector,
    sign: &str,
    output_root: &Path,
) -> Result<ProcessSummary, LandmarkError> {
    log::info!("processing sign '{sign}'");

    let mut sample = SignSample::new();

    while let Some(frame) = source.next_frame()? {
        let detection = detector.detect(&frame)?;
        let keypoints = extract_keypoints(&detection)?;
        sample.push(keypoints);
    }

    let frames = sample.num_frames();
    log::debug!("sign '{sign}': {frames} frames accumulated");

    let paths = write_sample(sample, output_root, sign)?;

    log::info!("sign '{sign}': {frames} frames written under {:?}", output_root.join(sign));

    Ok(ProcessSummary { frames, paths })
}
