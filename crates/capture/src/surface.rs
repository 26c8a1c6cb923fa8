use {
    crate::*,
    base::{Vec2, log_debug},
    image::Image,
    minifb::{Window, WindowOptions},
};

/// Keyboard input as seen by the capture loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    WindowClosed,
    Other,
}

impl Key {
    pub fn is_cancel(&self) -> bool {
        matches!(self, Key::Escape | Key::WindowClosed)
    }
}

/// The window the guide and the recording loop draw into.
///
/// One surface lives for a whole session; it is created on the worker thread
/// and closed there during cleanup.
pub trait Surface {
    fn show(&mut self, frame: &Image) -> Result<(), CaptureError>;

    /// Input received since the last call, if any.
    fn poll_key(&mut self) -> Option<Key>;

    /// Close the window. Safe to call repeatedly.
    fn close(&mut self);
}

/// Builds the session's surface on the worker thread.
pub type SurfaceFactory = Box<dyn FnOnce() -> Result<Box<dyn Surface>, CaptureError> + Send>;

/// A surface that displays nothing and never reports input.
#[derive(Debug, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn show(&mut self, _frame: &Image) -> Result<(), CaptureError> {
        Ok(())
    }

    fn poll_key(&mut self) -> Option<Key> {
        None
    }

    fn close(&mut self) {}
}

/// A `minifb` window sized to the first frame shown.
pub struct MinifbSurface {
    title: String,
    window: Option<Window>,
    size: Vec2<usize>,
}

impl MinifbSurface {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            window: None,
            size: Vec2::new(0, 0),
        }
    }

    pub fn factory(title: impl Into<String>) -> SurfaceFactory {
        let title = title.into();
        Box::new(move || Ok(Box::new(MinifbSurface::new(title)) as Box<dyn Surface>))
    }
}

impl Surface for MinifbSurface {
    fn show(&mut self, frame: &Image) -> Result<(), CaptureError> {
        let buffer = image::image_to_u32(frame)
            .map_err(|e| CaptureError::Surface(format!("cannot display frame: {e}")))?;

        // (re)create the window when the frame size changes
        if self.window.is_none() || self.size != frame.size {
            let window = Window::new(
                &self.title,
                frame.size.x,
                frame.size.y,
                WindowOptions {
                    resize: true,
                    ..WindowOptions::default()
                },
            )
            .map_err(|e| CaptureError::Surface(e.to_string()))?;
            log_debug!("window {:?} created at {}", self.title, frame.size);
            self.window = Some(window);
            self.size = frame.size;
        }

        if let Some(window) = self.window.as_mut() {
            window
                .update_with_buffer(&buffer, frame.size.x, frame.size.y)
                .map_err(|e| CaptureError::Surface(e.to_string()))?;
        }
        Ok(())
    }

    fn poll_key(&mut self) -> Option<Key> {
        let window = self.window.as_ref()?;
        if !window.is_open() {
            Some(Key::WindowClosed)
        } else if window.is_key_down(minifb::Key::Escape) {
            Some(Key::Escape)
        } else if !window.get_keys().is_empty() {
            Some(Key::Other)
        } else {
            None
        }
    }

    fn close(&mut self) {
        if self.window.take().is_some() {
            log_debug!("window {:?} closed", self.title);
        }
    }
}
