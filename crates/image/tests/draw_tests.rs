use base::Vec2;
use image::{Color, Image, ImageError, PixelFormat};

#[test]
fn test_fill_rect_clips_to_bounds() {
    let mut image = Image::filled(Vec2::new(4, 4), Color::BLACK);
    image::fill_rect(&mut image, Vec2::new(-2, 2), Vec2::new(4, 10), Color::WHITE).unwrap();

    assert_eq!(image.pixel(0, 2), Some(Color::WHITE));
    assert_eq!(image.pixel(1, 3), Some(Color::WHITE));
    assert_eq!(image.pixel(2, 2), Some(Color::BLACK));
    assert_eq!(image.pixel(0, 1), Some(Color::BLACK));
}

#[test]
fn test_draw_ring_paints_outline_only() {
    let mut image = Image::filled(Vec2::new(41, 41), Color::BLACK);
    image::draw_ring(&mut image, Vec2::new(20, 20), 10, 2, Color::GREEN).unwrap();

    // on the radius
    assert_eq!(image.pixel(30, 20), Some(Color::GREEN));
    assert_eq!(image.pixel(20, 10), Some(Color::GREEN));
    // center and far outside stay untouched
    assert_eq!(image.pixel(20, 20), Some(Color::BLACK));
    assert_eq!(image.pixel(0, 0), Some(Color::BLACK));
}

#[test]
fn test_draw_ring_partially_off_frame() {
    let mut image = Image::filled(Vec2::new(10, 10), Color::BLACK);
    image::draw_ring(&mut image, Vec2::new(0, 0), 5, 1, Color::WHITE).unwrap();

    assert_eq!(image.pixel(5, 0), Some(Color::WHITE));
    assert_eq!(image.pixel(0, 5), Some(Color::WHITE));
}

#[test]
fn test_draw_requires_rgb8() {
    let mut image = Image::new(Vec2::new(2, 1), vec![128; 4], PixelFormat::Yuyv);
    let result = image::draw_ring(&mut image, Vec2::new(1, 0), 1, 1, Color::WHITE);
    assert!(matches!(result, Err(ImageError::Decode(_))));
}

#[test]
fn test_text_size_scales() {
    assert_eq!(image::text_size("GO!", 1), Vec2::new(24, 8));
    assert_eq!(image::text_size("3", 4), Vec2::new(32, 32));
    assert_eq!(image::text_size("", 2), Vec2::new(0, 16));
}

#[test]
fn test_draw_text_marks_pixels_inside_cell() {
    let mut image = Image::filled(Vec2::new(16, 16), Color::BLACK);
    image::draw_text(&mut image, "8", Vec2::new(4, 4), 1, Color::WHITE).unwrap();

    let painted: Vec<(usize, usize)> = (0..16)
        .flat_map(|y| (0..16).map(move |x| (x, y)))
        .filter(|&(x, y)| image.pixel(x, y) == Some(Color::WHITE))
        .collect();

    assert!(!painted.is_empty());
    assert!(painted.iter().all(|&(x, y)| (4..12).contains(&x) && (4..12).contains(&y)));
}

#[test]
fn test_draw_space_paints_nothing() {
    let mut image = Image::filled(Vec2::new(16, 16), Color::BLACK);
    image::draw_text_centered(&mut image, "  ", Vec2::new(8, 8), 1, Color::WHITE).unwrap();
    assert_eq!(image, Image::filled(Vec2::new(16, 16), Color::BLACK));
}

#[test]
fn test_draw_text_centered_is_symmetric_for_block() {
    // '8' is horizontally symmetric-ish; just check the bounding cell placement
    let mut image = Image::filled(Vec2::new(32, 32), Color::BLACK);
    image::draw_text_centered(&mut image, "8", Vec2::new(16, 16), 2, Color::WHITE).unwrap();

    let painted: Vec<(usize, usize)> = (0..32)
        .flat_map(|y| (0..32).map(move |x| (x, y)))
        .filter(|&(x, y)| image.pixel(x, y) == Some(Color::WHITE))
        .collect();

    assert!(!painted.is_empty());
    assert!(painted.iter().all(|&(x, y)| (8..24).contains(&x) && (8..24).contains(&y)));
}
