use signkit_base::Tensor;

/// A decoded video frame, either raw RGB pixels or JPEG bytes.
#[derive(Debug, Clone)]
pub enum VideoFrame {
    /// RGB pixel data as a `Tensor<u8>` with shape `[height, width, 3]`.
    Rgb(Tensor<u8>),
    /// Raw JPEG-encoded image bytes.
    Jpeg(Vec<u8>),
}

impl VideoFrame {
    /// Frame width in pixels, or `None` for encoded frames.
    pub fn width(&self) -> Option<usize> {
        match self {
            VideoFrame::Rgb(t) => t.shape.get(1).copied(),
            VideoFrame::Jpeg(_) => None,
        }
    }

    /// Frame height in pixels, or `None` for encoded frames.
    pub fn height(&self) -> Option<usize> {
        match self {
            VideoFrame::Rgb(t) => t.shape.first().copied(),
            VideoFrame::Jpeg(_) => None,
        }
    }
}
