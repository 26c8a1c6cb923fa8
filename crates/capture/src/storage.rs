use {
    crate::*,
    base::log_debug,
    chrono::Local,
    image::{FileFormat, Image},
    std::path::{Path, PathBuf},
};

/// Writes frames as `{prefix}_{YYYYMMDD_HHMMSS_micros}_{counter:06}.{ext}`.
///
/// The counter advances once per successful save, so names within a
/// session are strictly increasing even when two saves share a timestamp.
#[derive(Debug)]
pub struct FrameStorage {
    dir: PathBuf,
    prefix: String,
    ext: String,
    format: FileFormat,
    quality: u8,
    counter: u64,
}

impl FrameStorage {
    /// Create storage writing into `dir`, creating it (and its parents).
    pub fn new(
        dir: impl Into<PathBuf>,
        prefix: &str,
        ext: &str,
        quality: u8,
    ) -> Result<Self, CaptureError> {
        let dir = dir.into();
        let ext = ext.trim().trim_start_matches('.').to_ascii_lowercase();
        let format = FileFormat::from_extension(&ext).ok_or_else(|| {
            CaptureError::InvalidConfiguration(format!("unsupported image extension: {ext:?}"))
        })?;
        std::fs::create_dir_all(&dir)?;
        let prefix = match prefix.trim() {
            "" => DEFAULT_PREFIX.to_string(),
            prefix => prefix.to_string(),
        };
        Ok(Self {
            dir,
            prefix,
            ext,
            format,
            quality,
            counter: 0,
        })
    }

    pub fn from_config(config: &CaptureConfig) -> Result<Self, CaptureError> {
        Self::new(
            config.output_dir()?,
            config.filename_prefix(),
            &config.image_ext(),
            config.jpeg_quality(),
        )
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of frames saved so far.
    pub fn saved(&self) -> u64 {
        self.counter
    }

    pub fn save(&mut self, frame: &Image) -> Result<PathBuf, CaptureError> {
        let next = self.counter + 1;
        let timestamp = Local::now().format("%Y%m%d_%H%M%S_%6f");
        let path = self.dir.join(format!(
            "{}_{}_{:06}.{}",
            self.prefix, timestamp, next, self.ext
        ));

        image::save_rgb(frame, &path, self.format, self.quality)
            .map_err(|source| CaptureError::EncodeOrWrite {
                path: path.clone(),
                source,
            })?;

        self.counter = next;
        log_debug!("saved {}", path.display());
        Ok(path)
    }
}
