pub mod error;
pub mod frame;
pub mod source;

#[cfg(feature = "opencv")]
pub mod videofile;

pub use error::VideoError;
pub use frame::VideoFrame;
pub use source::{sign_name, VideoSource};

#[cfg(feature = "opencv")]
pub use videofile::VideoFileReader;
