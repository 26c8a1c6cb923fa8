use {image::ImageError, std::fmt, std::path::PathBuf, video::VideoError};

#[derive(Debug)]
pub enum CaptureError {
    /// The camera could not be opened.
    DeviceUnavailable(String),
    /// No frame could be captured.
    FrameRead(String),
    /// One frame could not be encoded or written.
    EncodeOrWrite { path: PathBuf, source: ImageError },
    /// Rejected before any camera resource is acquired.
    InvalidConfiguration(String),
    /// The preview window could not be created or updated.
    Surface(String),
    /// No tutorial image for the requested letter.
    Tutorial(String),
    Io(std::io::Error),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::DeviceUnavailable(msg) => write!(f, "device unavailable: {msg}"),
            CaptureError::FrameRead(msg) => write!(f, "frame read failed: {msg}"),
            CaptureError::EncodeOrWrite { path, source } => {
                write!(f, "failed to save {}: {source}", path.display())
            }
            CaptureError::InvalidConfiguration(msg) => write!(f, "invalid configuration: {msg}"),
            CaptureError::Surface(msg) => write!(f, "display error: {msg}"),
            CaptureError::Tutorial(msg) => write!(f, "tutorial error: {msg}"),
            CaptureError::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for CaptureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CaptureError::EncodeOrWrite { source, .. } => Some(source),
            CaptureError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CaptureError {
    fn from(err: std::io::Error) -> Self {
        CaptureError::Io(err)
    }
}

impl From<VideoError> for CaptureError {
    fn from(err: VideoError) -> Self {
        match err {
            VideoError::Device(msg) => CaptureError::DeviceUnavailable(msg),
            VideoError::Stream(msg) => CaptureError::FrameRead(msg),
            VideoError::Decode(err) => CaptureError::FrameRead(err.to_string()),
        }
    }
}
