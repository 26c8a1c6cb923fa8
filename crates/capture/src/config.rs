use {
    crate::*,
    image::FileFormat,
    std::{
        path::{Path, PathBuf},
        time::Duration,
    },
};

pub const DEFAULT_PREFIX: &str = "frame";
pub const DEFAULT_LETTER: char = 'A';

/// How often recorded frames are written to disk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SamplingMode {
    /// Every Nth frame read.
    Stride(u32),
    /// At most this many frames per second; zero or less saves every frame.
    Rate(f32),
}

/// Configuration for one capture session.
#[derive(Clone, Debug)]
pub struct CaptureConfig {
    output_parent: PathBuf,
    output_letter: String,
    filename_prefix: String,
    sampling: SamplingMode,
    camera_index: usize,
    image_ext: String,
    jpeg_quality: u8,
    preview: bool,
    max_duration: Duration,
    countdown: Duration,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            output_parent: PathBuf::new(),
            output_letter: DEFAULT_LETTER.to_string(),
            filename_prefix: DEFAULT_PREFIX.to_string(),
            sampling: SamplingMode::Rate(5.0),
            camera_index: 0,
            image_ext: "jpg".to_string(),
            jpeg_quality: 95,
            preview: true,
            max_duration: Duration::from_secs(5),
            countdown: Duration::from_secs(5),
        }
    }
}

/// Resolve a folder name to a single uppercase letter, `A` when invalid.
pub fn normalize_letter(raw: &str) -> char {
    let mut chars = raw.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
        _ => DEFAULT_LETTER,
    }
}

impl CaptureConfig {
    /// Set the directory that holds the A-Z class folders.
    pub fn with_output_parent(mut self, parent: impl Into<PathBuf>) -> Self {
        self.output_parent = parent.into();
        self
    }

    /// Set the class folder; normalized by `output_letter()`.
    pub fn with_output_letter(mut self, letter: impl Into<String>) -> Self {
        self.output_letter = letter.into();
        self
    }

    pub fn with_filename_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.filename_prefix = prefix.into();
        self
    }

    pub fn with_sampling(mut self, sampling: SamplingMode) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn with_camera_index(mut self, index: usize) -> Self {
        self.camera_index = index;
        self
    }

    pub fn with_image_ext(mut self, ext: impl Into<String>) -> Self {
        self.image_ext = ext.into();
        self
    }

    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality;
        self
    }

    pub fn with_preview(mut self, preview: bool) -> Self {
        self.preview = preview;
        self
    }

    /// Zero means no time limit.
    pub fn with_max_duration(mut self, duration: Duration) -> Self {
        self.max_duration = duration;
        self
    }

    /// Zero skips the positioning guide.
    pub fn with_countdown(mut self, duration: Duration) -> Self {
        self.countdown = duration;
        self
    }

    // Getters
    pub fn output_parent(&self) -> &Path {
        &self.output_parent
    }

    pub fn output_letter(&self) -> char {
        normalize_letter(&self.output_letter)
    }

    pub fn filename_prefix(&self) -> &str {
        match self.filename_prefix.trim() {
            "" => DEFAULT_PREFIX,
            prefix => prefix,
        }
    }

    pub fn sampling(&self) -> SamplingMode {
        self.sampling
    }

    pub fn camera_index(&self) -> usize {
        self.camera_index
    }

    /// Extension without leading dots, lowercased.
    pub fn image_ext(&self) -> String {
        self.image_ext
            .trim()
            .trim_start_matches('.')
            .to_ascii_lowercase()
    }

    pub fn jpeg_quality(&self) -> u8 {
        self.jpeg_quality
    }

    pub fn preview(&self) -> bool {
        self.preview
    }

    pub fn max_duration(&self) -> Duration {
        self.max_duration
    }

    pub fn countdown(&self) -> Duration {
        self.countdown
    }

    /// `{parent}/{LETTER}`, without touching the filesystem.
    pub fn output_path(&self) -> PathBuf {
        self.output_parent.join(self.output_letter().to_string())
    }

    /// `{parent}/{LETTER}`, created (with parents) if missing.
    pub fn output_dir(&self) -> Result<PathBuf, CaptureError> {
        let dir = self.output_path();
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    pub fn file_format(&self) -> Result<FileFormat, CaptureError> {
        let ext = self.image_ext();
        FileFormat::from_extension(&ext).ok_or_else(|| {
            CaptureError::InvalidConfiguration(format!("unsupported image extension: {ext:?}"))
        })
    }

    /// Check everything that can be checked before a camera is opened.
    pub fn validate(&self) -> Result<(), CaptureError> {
        if self.output_parent.as_os_str().is_empty() {
            return Err(CaptureError::InvalidConfiguration(
                "output directory is not set".to_string(),
            ));
        }
        if let SamplingMode::Stride(0) = self.sampling {
            return Err(CaptureError::InvalidConfiguration(
                "frame stride must be at least 1".to_string(),
            ));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(CaptureError::InvalidConfiguration(format!(
                "JPEG quality must be 1-100, got {}",
                self.jpeg_quality
            )));
        }
        self.file_format()?;
        Ok(())
    }
}
