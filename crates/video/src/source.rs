use {crate::*, base::Vec2, image::Image};

/// A camera handle owned by exactly one thread.
///
/// `open` runs on the thread that will call `read`, since some backends
/// bind the device to the opening thread.
pub trait VideoSource: Send {
    /// Open camera `index`, returning the negotiated frame size.
    ///
    /// Fails with `VideoError::Device` when the camera is unavailable.
    fn open(&mut self, index: usize) -> Result<Vec2<usize>, VideoError>;

    /// Capture one frame, normalized to RGB8.
    ///
    /// An error means no frame could be captured; it does not close the
    /// source, the caller decides whether to go on.
    fn read(&mut self) -> Result<Image, VideoError>;

    /// Release the camera. Safe to call repeatedly, and after a failed `open`.
    fn release(&mut self);

    fn is_open(&self) -> bool;
}
