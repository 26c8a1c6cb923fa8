//! Camera input for the capture tools.
//!
//! A `VideoSource` is opened by index, read one RGB8 frame at a time on a
//! single thread, and released when done. The V4L2 backend is the only
//! real implementation; tests drive the trait with mocks.

mod device;
pub use device::*;

mod error;
pub use error::*;

mod source;
pub use source::*;

#[cfg(feature = "v4l2")]
pub mod v4l2;

#[cfg(feature = "v4l2")]
pub use v4l2::{V4l2Config, V4l2Source};
