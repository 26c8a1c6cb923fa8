//! Reference images showing the hand shape for each letter.

use {
    crate::*,
    base::{Vec2, log_debug},
    image::Image,
    std::path::{Path, PathBuf},
};

pub const DEFAULT_TUTORIAL_DIR: &str = "assets/tutorials";

/// Extensions tried, in order, for `{LETTER}.{ext}`.
pub const TUTORIAL_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

/// Largest size a tutorial image is displayed at.
pub fn max_size() -> Vec2<usize> {
    Vec2::new(900, 700)
}

/// Path of the tutorial image for `letter`, if one exists in `dir`.
pub fn find_tutorial(dir: &Path, letter: &str) -> Option<PathBuf> {
    let mut chars = letter.trim().chars();
    let letter = match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
        _ => return None,
    };
    TUTORIAL_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{letter}.{ext}")))
        .find(|path| path.is_file())
}

/// Load the tutorial image for `letter` as RGB8, shrunk to fit `max_size()`.
pub fn load_tutorial(dir: &Path, letter: &str) -> Result<Image, CaptureError> {
    let path = find_tutorial(dir, letter).ok_or_else(|| {
        CaptureError::Tutorial(format!(
            "no tutorial image for {:?} in {}",
            letter.trim(),
            dir.display()
        ))
    })?;
    log_debug!("loading tutorial {}", path.display());
    image::open_rgb(&path, Some(max_size()))
        .map_err(|e| CaptureError::Tutorial(format!("cannot read {}: {e}", path.display())))
}
