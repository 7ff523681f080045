use signkit_base::TensorError;
use signkit_video::VideoError;
use std::fmt;

#[derive(Debug)]
pub enum LandmarkError {
    Shape { expected: String, got: String },
    Io(String),
    Serde(String),
    Detector(String),
    Video(VideoError),
}

impl fmt::Display for LandmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LandmarkError::Shape { expected, got } => {
                write!(f, "shape error: expected {expected}, got {got}")
            }
            LandmarkError::Io(msg) => write!(f, "io error: {msg}"),
            LandmarkError::Serde(msg) => write!(f, "serialization error: {msg}"),
            LandmarkError::Detector(msg) => write!(f, "detector error: {msg}"),
            LandmarkError::Video(err) => write!(f, "video error: {err}"),
        }
    }
}

impl std::error::Error for LandmarkError {}

impl From<std::io::Error> for LandmarkError {
    fn from(err: std::io::Error) -> Self {
        LandmarkError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LandmarkError {
    fn from(err: serde_json::Error) -> Self {
        LandmarkError::Serde(err.to_string())
    }
}

impl From<TensorError> for LandmarkError {
    fn from(err: TensorError) -> Self {
        match err {
            TensorError::ShapeMismatch { expected, got } => LandmarkError::Shape {
                expected: expected.to_string(),
                got: got.to_string(),
            },
            TensorError::ShapeOverflow => LandmarkError::Shape {
                expected: "a non-overflowing shape".to_string(),
                got: "dimension product overflow".to_string(),
            },
        }
    }
}

impl From<VideoError> for LandmarkError {
    fn from(err: VideoError) -> Self {
        LandmarkError::Video(err)
    }
}
