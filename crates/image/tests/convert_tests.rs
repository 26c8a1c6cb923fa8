use base::Vec2;
use crates_image::ImageEncoder;
use image::{Image, PixelFormat};

fn encode_jpeg(size: Vec2<usize>, data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::new();
    crates_image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, 90)
        .write_image(
            data,
            size.x as u32,
            size.y as u32,
            crates_image::ExtendedColorType::Rgb8,
        )
        .unwrap();
    buffer
}

#[test]
fn test_yuyv_to_rgb_gray() {
    let size = Vec2::new(2, 1);
    let rgb = image::yuyv_to_rgb(size, &[128, 128, 128, 128]).unwrap();

    assert_eq!(rgb.len(), 6);
    for &v in &rgb {
        assert!((126..=130).contains(&v));
    }
}

#[test]
fn test_yuyv_to_rgb_short_input() {
    let size = Vec2::new(2, 2);
    assert!(image::yuyv_to_rgb(size, &[128, 128, 128, 128]).is_err());
}

#[test]
fn test_jpeg_to_rgb_decode() {
    let size = Vec2::new(4, 4);
    let data: Vec<u8> = (0..48).collect();
    let jpeg = Image::new(size, encode_jpeg(size, &data), PixelFormat::Jpeg);

    let decoded = image::jpeg_to_rgb(&jpeg).unwrap();

    assert_eq!(decoded.format, PixelFormat::Rgb8);
    assert_eq!(decoded.size, size);
    assert_eq!(decoded.data.len(), 48);
}

#[test]
fn test_jpeg_to_rgb_rejects_invalid_data() {
    let invalid = Image::new(Vec2::new(4, 4), vec![0u8; 10], PixelFormat::Jpeg);
    assert!(image::jpeg_to_rgb(&invalid).is_err());
}

#[test]
fn test_to_rgb_passes_rgb_through() {
    let image = Image::new(Vec2::new(1, 1), vec![9, 8, 7], PixelFormat::Rgb8);
    assert_eq!(image::to_rgb(image.clone()).unwrap(), image);
}

#[test]
fn test_to_rgb_converts_yuyv() {
    let image = Image::new(Vec2::new(2, 1), vec![255, 128, 255, 128], PixelFormat::Yuyv);
    let rgb = image::to_rgb(image).unwrap();

    assert_eq!(rgb.format, PixelFormat::Rgb8);
    assert_eq!(rgb.data, vec![255; 6]);
}

#[test]
fn test_rgb_to_u32() {
    let size = Vec2::new(2, 1);
    let buf = image::rgb_to_u32(size, &[255, 0, 0, 0, 255, 0]);

    assert_eq!(buf, vec![0xFFFF0000, 0xFF00FF00]);
}

#[test]
fn test_image_to_u32_from_yuyv() {
    let image = Image::new(Vec2::new(2, 1), vec![0, 128, 0, 128], PixelFormat::Yuyv);
    let buf = image::image_to_u32(&image).unwrap();

    assert_eq!(buf, vec![0xFF000000, 0xFF000000]);
}
