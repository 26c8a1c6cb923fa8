//! Frame buffers and pixel utilities for the capture tools.
//!
//! Everything here works on `Image`: a packed buffer with a size and a
//! `PixelFormat`. Camera formats (YUYV, MJPEG) are normalized to RGB8,
//! which is what the overlay drawing, the preview window and the file
//! writers expect.

pub mod draw;
pub use draw::*;

mod error;
pub use error::*;

mod file;
pub use file::*;

mod image;
pub use image::*;

mod pixelformat;
pub use pixelformat::*;

mod rgb;
pub use rgb::*;

mod packed;
pub use packed::*;
