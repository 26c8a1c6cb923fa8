//! Webcam frame collection for labeled image datasets.
//!
//! A session opens one camera, shows a positioning countdown, then records
//! for a fixed time, saving throttled frames into `{parent}/{LETTER}/`.
//! All camera and window work happens on one worker thread owned by
//! `CapturePipeline`; the controller only starts and stops it.

mod clock;
pub use clock::*;

mod config;
pub use config::*;

mod error;
pub use error::*;

mod guide;
pub use guide::*;

mod pipeline;
pub use pipeline::*;

mod sampler;
pub use sampler::*;

mod storage;
pub use storage::*;

mod surface;
pub use surface::*;

pub mod tutorial;
