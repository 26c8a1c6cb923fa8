use base::Vec2;
use image::{Color, FileFormat, Image, ImageError, PixelFormat};
use std::fs;

fn temp_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("image-file-test-{}-{}", std::process::id(), name));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn gradient(size: Vec2<usize>) -> Image {
    let data = (0..size.area() * 3).map(|v| (v % 256) as u8).collect();
    Image::new(size, data, PixelFormat::Rgb8)
}

#[test]
fn test_file_format_from_extension() {
    assert_eq!(FileFormat::from_extension("jpg"), Some(FileFormat::Jpeg));
    assert_eq!(FileFormat::from_extension(".JPEG"), Some(FileFormat::Jpeg));
    assert_eq!(FileFormat::from_extension("Png"), Some(FileFormat::Png));
    assert_eq!(FileFormat::from_extension("tif"), Some(FileFormat::Tiff));
    assert_eq!(FileFormat::from_extension("gif"), None);
    assert_eq!(FileFormat::from_extension(""), None);
}

#[test]
fn test_save_jpeg_writes_soi_marker() {
    let dir = temp_dir("jpeg");
    let path = dir.join("frame.jpg");

    image::save_rgb(&gradient(Vec2::new(8, 8)), &path, FileFormat::Jpeg, 90).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(&bytes[..2], &[0xFF, 0xD8]);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_save_png_reopens_with_same_pixels() {
    let dir = temp_dir("png");
    let path = dir.join("frame.png");
    let original = gradient(Vec2::new(5, 3));

    image::save_rgb(&original, &path, FileFormat::Png, 0).unwrap();
    let reopened = image::open_rgb(&path, None).unwrap();

    assert_eq!(reopened, original);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_save_into_missing_directory_is_io_error() {
    let dir = temp_dir("missing");
    let path = dir.join("no-such-dir").join("frame.jpg");

    let result = image::save_rgb(&gradient(Vec2::new(2, 2)), &path, FileFormat::Jpeg, 90);
    assert!(matches!(result, Err(ImageError::Io(_))));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_save_rejects_buffer_size_mismatch() {
    let dir = temp_dir("short");
    let short = Image::new(Vec2::new(4, 4), vec![0; 10], PixelFormat::Rgb8);
    let long = Image::new(Vec2::new(2, 2), vec![0; 20], PixelFormat::Rgb8);

    for format in [FileFormat::Jpeg, FileFormat::Png] {
        let path = dir.join("frame.out");
        assert!(matches!(
            image::save_rgb(&short, &path, format, 90),
            Err(ImageError::Encode(_))
        ));
        assert!(matches!(
            image::save_rgb(&long, &path, format, 90),
            Err(ImageError::Encode(_))
        ));
        assert!(!path.exists());
    }

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_save_rejects_non_rgb() {
    let dir = temp_dir("yuyv");
    let frame = Image::new(Vec2::new(2, 1), vec![128; 4], PixelFormat::Yuyv);

    let result = image::save_rgb(&frame, &dir.join("f.jpg"), FileFormat::Jpeg, 90);
    assert!(result.is_err());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_open_rgb_shrinks_to_fit() {
    let dir = temp_dir("shrink");
    let path = dir.join("big.png");
    image::save_rgb(&Image::filled(Vec2::new(200, 100), Color::WHITE), &path, FileFormat::Png, 0)
        .unwrap();

    let image = image::open_rgb(&path, Some(Vec2::new(50, 50))).unwrap();
    assert_eq!(image.size, Vec2::new(50, 25));

    let untouched = image::open_rgb(&path, Some(Vec2::new(900, 700))).unwrap();
    assert_eq!(untouched.size, Vec2::new(200, 100));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_open_missing_file() {
    let result = image::open_rgb(std::path::Path::new("/definitely/not/here.png"), None);
    assert!(matches!(result, Err(ImageError::Io(_))));
}
