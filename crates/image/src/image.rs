use {crate::*, base::Vec2};

/// A packed frame buffer.
///
/// For `Rgb8` the data is row-major, 3 bytes per pixel; for `Yuyv` 2 bytes per
/// pixel; for `Jpeg` it is the compressed bitstream.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub size: Vec2<usize>,
    pub data: Vec<u8>,
    pub format: PixelFormat,
}

impl Image {
    pub fn new(size: Vec2<usize>, data: Vec<u8>, format: PixelFormat) -> Self {
        Self { size, data, format }
    }

    /// A solid RGB8 image.
    pub fn filled(size: Vec2<usize>, color: Color) -> Self {
        let data = color.0.repeat(size.area());
        Self::new(size, data, PixelFormat::Rgb8)
    }

    pub fn width(&self) -> usize {
        self.size.x
    }

    pub fn height(&self) -> usize {
        self.size.y
    }

    /// RGB value at `(x, y)`, for RGB8 images inside bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if self.format != PixelFormat::Rgb8 || x >= self.size.x || y >= self.size.y {
            return None;
        }
        let i = (y * self.size.x + x) * 3;
        let p = self.data.get(i..i + 3)?;
        Some(Color([p[0], p[1], p[2]]))
    }

    // caller guarantees RGB8 and bounds
    pub(crate) fn put_pixel(&mut self, x: usize, y: usize, color: Color) {
        let i = (y * self.size.x + x) * 3;
        if let Some(p) = self.data.get_mut(i..i + 3) {
            p.copy_from_slice(&color.0);
        }
    }
}
