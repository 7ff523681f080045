use crate::{VideoError, VideoFrame};
use std::path::Path;

/// Frame-sequential access to a finite video.
///
/// Implementations decode one frame per call, in presentation order.
/// `Ok(None)` is normal end-of-stream; `Err` is a genuine decode failure,
/// which callers are expected to report rather than swallow. A source is
/// not restartable once consumed; re-open it for another pass.
pub trait VideoSource {
    /// Decode and return the next frame, or `None` at end of stream.
    fn next_frame(&mut self) -> Result<Option<VideoFrame>, VideoError>;
}

/// Derive the sign name from a video path: the file name without its
/// extension. `"videos/hello.mp4"` yields `"hello"`.
pub fn sign_name(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|s| s.to_str())
}
