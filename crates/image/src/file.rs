use {
    crate::*,
    base::Vec2,
    crates_image::{GenericImageView, ImageEncoder},
    std::{
        fs::File,
        io::{BufWriter, Write},
        path::Path,
    },
};

/// Image file formats frames can be written as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Jpeg,
    Png,
    Bmp,
    Tiff,
    WebP,
}

impl FileFormat {
    /// Look up a format by file extension, ignoring case and leading dots.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim().trim_start_matches('.').to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(FileFormat::Jpeg),
            "png" => Some(FileFormat::Png),
            "bmp" => Some(FileFormat::Bmp),
            "tif" | "tiff" => Some(FileFormat::Tiff),
            "webp" => Some(FileFormat::WebP),
            _ => None,
        }
    }

    fn as_image_format(&self) -> crates_image::ImageFormat {
        match self {
            FileFormat::Jpeg => crates_image::ImageFormat::Jpeg,
            FileFormat::Png => crates_image::ImageFormat::Png,
            FileFormat::Bmp => crates_image::ImageFormat::Bmp,
            FileFormat::Tiff => crates_image::ImageFormat::Tiff,
            FileFormat::WebP => crates_image::ImageFormat::WebP,
        }
    }
}

fn from_crates_error(err: crates_image::ImageError) -> ImageError {
    match err {
        crates_image::ImageError::IoError(io) => ImageError::Io(io),
        other => ImageError::Encode(other.to_string()),
    }
}

/// Write an RGB8 image to `path`.
///
/// `quality` (1-100) applies to JPEG only.
pub fn save_rgb(
    image: &Image,
    path: &Path,
    format: FileFormat,
    quality: u8,
) -> Result<(), ImageError> {
    image.format.ensure_format(PixelFormat::Rgb8)?;
    // checked before the file is created, so a bad frame leaves nothing behind
    let expected = image.size.area() * 3;
    if image.data.len() != expected {
        return Err(ImageError::Encode(format!(
            "{} frame needs {} bytes, got {}",
            image.size,
            expected,
            image.data.len()
        )));
    }
    let (width, height) = (image.size.x as u32, image.size.y as u32);

    match format {
        FileFormat::Jpeg => {
            let mut writer = BufWriter::new(File::create(path)?);
            crates_image::codecs::jpeg::JpegEncoder::new_with_quality(&mut writer, quality)
                .write_image(
                    &image.data,
                    width,
                    height,
                    crates_image::ExtendedColorType::Rgb8,
                )
                .map_err(from_crates_error)?;
            writer.flush()?;
            Ok(())
        }
        _ => crates_image::save_buffer_with_format(
            path,
            &image.data,
            width,
            height,
            crates_image::ExtendedColorType::Rgb8,
            format.as_image_format(),
        )
        .map_err(from_crates_error),
    }
}

/// Load an image file as RGB8, shrinking it to fit inside `max_size` if given.
///
/// Aspect ratio is preserved and smaller images are left as they are.
pub fn open_rgb(path: &Path, max_size: Option<Vec2<usize>>) -> Result<Image, ImageError> {
    let mut decoded = crates_image::open(path).map_err(|e| match e {
        crates_image::ImageError::IoError(io) => ImageError::Io(io),
        other => ImageError::Decode(other.to_string()),
    })?;

    if let Some(max) = max_size {
        let (width, height) = decoded.dimensions();
        if width as usize > max.x || height as usize > max.y {
            decoded = decoded.thumbnail(max.x as u32, max.y as u32);
        }
    }

    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(Image::new(
        Vec2::new(width as usize, height as usize),
        rgb.into_raw(),
        PixelFormat::Rgb8,
    ))
}
