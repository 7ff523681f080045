use crate::{VideoError, VideoFrame, VideoSource};
use opencv::{core, imgproc, prelude::*, videoio};
use signkit_base::Tensor;
use std::path::Path;

/// Frame-sequential reader for a video container file, backed by OpenCV.
///
/// CAP_ANY lets OpenCV pick the platform backend (AVFoundation, Media
/// Foundation, GStreamer/FFmpeg). Frames are converted from OpenCV's BGR
/// layout to RGB before being handed out.
pub struct VideoFileReader {
    capture: videoio::VideoCapture,
    fps: f64,
}

impl VideoFileReader {
    pub fn open(path: &Path) -> Result<Self, VideoError> {
        let path_str = path
            .to_str()
            .ok_or_else(|| VideoError::Open(format!("non-UTF8 path: {path:?}")))?;

        let capture = videoio::VideoCapture::from_file(path_str, videoio::CAP_ANY)
            .map_err(|e| VideoError::Backend(e.to_string()))?;

        if !capture
            .is_opened()
            .map_err(|e| VideoError::Backend(e.to_string()))?
        {
            return Err(VideoError::Open(format!(
                "failed to open video file: {path_str}"
            )));
        }

        let fps = capture
            .get(videoio::CAP_PROP_FPS)
            .map_err(|e| VideoError::Backend(e.to_string()))?;

        log::debug!("opened {path_str} ({fps} fps)");

        Ok(Self { capture, fps })
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }
}

impl VideoSource for VideoFileReader {
    fn next_frame(&mut self) -> Result<Option<VideoFrame>, VideoError> {
        let mut frame = Mat::default();

        let got = self
            .capture
            .read(&mut frame)
            .map_err(|e| VideoError::Decode(e.to_string()))?;
        if !got || frame.empty() {
            return Ok(None);
        }

        let mut rgb = Mat::default();
        imgproc::cvt_color(
            &frame,
            &mut rgb,
            imgproc::COLOR_BGR2RGB,
            0,
            core::AlgorithmHint::ALGO_HINT_DEFAULT,
        )
        .map_err(|e| VideoError::Decode(e.to_string()))?;

        if !rgb.is_continuous() {
            return Err(VideoError::Decode("frame is not continuous".to_string()));
        }

        let height = rgb.rows() as usize;
        let width = rgb.cols() as usize;
        let data = rgb
            .data_bytes()
            .map_err(|e| VideoError::Decode(e.to_string()))?
            .to_vec();

        let tensor = Tensor::new(vec![height, width, 3], data)
            .map_err(|e| VideoError::Decode(e.to_string()))?;

        Ok(Some(VideoFrame::Rgb(tensor)))
    }
}
