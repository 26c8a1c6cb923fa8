use {
    crate::*,
    base::{Vec2, log_debug, log_info},
    image::{Image, PixelFormat},
    v4l::{
        Device, Format, FourCC, buffer::Type, capability::Flags, io::mmap::Stream as MmapStream,
        io::traits::CaptureStream, video::Capture,
    },
};

// number of mmap buffers queued with the driver
const BUFFER_COUNT: u32 = 4;

/// Optional overrides applied when the device is opened; `None` keeps the
/// device's current setting.
#[derive(Debug, Clone, Default)]
pub struct V4l2Config {
    pub size: Option<Vec2<usize>>,
    pub frame_rate: Option<f32>,
}

pub struct V4l2Source {
    config: V4l2Config,
    stream: Option<MmapStream<'static>>,
    size: Vec2<usize>,
    format: PixelFormat,
}

impl V4l2Source {
    pub fn new(config: V4l2Config) -> Self {
        Self {
            config,
            stream: None,
            size: Vec2::new(0, 0),
            format: PixelFormat::Yuyv,
        }
    }

    pub fn size(&self) -> Vec2<usize> {
        self.size
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }
}

impl Default for V4l2Source {
    fn default() -> Self {
        Self::new(V4l2Config::default())
    }
}

impl VideoSource for V4l2Source {
    fn open(&mut self, index: usize) -> Result<Vec2<usize>, VideoError> {
        self.release();

        let device = Device::new(index)
            .map_err(|e| VideoError::Device(format!("camera {index} unavailable: {e}")))?;
        let current = Capture::format(&device)?;

        let desired_size = self.config.size.unwrap_or(Vec2::new(
            current.width as usize,
            current.height as usize,
        ));

        // keep the device's format when we can decode it, otherwise ask for YUYV
        let desired_fourcc = match PixelFormat::from_fourcc(&current.fourcc.repr) {
            Some(_) => current.fourcc,
            None => FourCC::new(b"YUYV"),
        };

        let actual = Capture::set_format(
            &device,
            &Format::new(desired_size.x as u32, desired_size.y as u32, desired_fourcc),
        )?;
        let format = PixelFormat::from_fourcc(&actual.fourcc.repr).ok_or_else(|| {
            VideoError::Device(format!("Unsupported pixel format: {}", actual.fourcc))
        })?;

        if let Some(frame_rate) = self.config.frame_rate {
            let params = Capture::set_params(
                &device,
                &v4l::video::capture::Parameters::with_fps(frame_rate as u32),
            )?;
            log_debug!(
                "camera {}: frame interval {}/{}",
                index,
                params.interval.numerator,
                params.interval.denominator
            );
        }

        let stream = MmapStream::with_buffers(&device, Type::VideoCapture, BUFFER_COUNT)
            .map_err(|e| VideoError::Device(format!("camera {index}: {e}")))?;

        self.size = Vec2::new(actual.width as usize, actual.height as usize);
        self.format = format;
        self.stream = Some(stream);
        log_info!("camera {} opened: {} {:?}", index, self.size, self.format);
        Ok(self.size)
    }

    fn read(&mut self) -> Result<Image, VideoError> {
        let stream = self
            .stream
            .as_mut()
            .ok_or_else(|| VideoError::Stream("camera is not open".to_string()))?;

        let (data, metadata) =
            CaptureStream::next(stream).map_err(|e| VideoError::Stream(e.to_string()))?;

        // the mmap buffer is only valid until the next call
        let used = match metadata.bytesused as usize {
            0 => data.len(),
            n => n.min(data.len()),
        };
        let raw = Image::new(self.size, data[..used].to_vec(), self.format);

        Ok(image::to_rgb(raw)?)
    }

    fn release(&mut self) {
        if self.stream.take().is_some() {
            log_debug!("camera released");
        }
    }

    fn is_open(&self) -> bool {
        self.stream.is_some()
    }
}

impl Drop for V4l2Source {
    fn drop(&mut self) {
        self.release();
    }
}

pub(crate) fn probe(index: usize) -> Option<DeviceInfo> {
    let device = Device::new(index).ok()?;
    let caps = device.query_caps().ok()?;
    if !caps.capabilities.contains(Flags::VIDEO_CAPTURE) {
        return None;
    }
    let format = Capture::format(&device).ok()?;
    Some(DeviceInfo {
        index,
        size: Vec2::new(format.width as usize, format.height as usize),
        name: Some(caps.card),
    })
}
