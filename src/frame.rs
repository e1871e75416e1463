use std::path::Path;

use image::{Rgb, RgbImage};
use log::info;

use crate::{
    color::Color,
    error::{Error, Result},
    viewport::Resolution,
};

/// One traced pixel. Columns grow to the right, rows grow downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pixel {
    pub column: u32,
    pub row: u32,
    pub color: Color,
}

impl Pixel {
    pub fn new(column: u32, row: u32, color: Color) -> Self {
        Self { column, row, color }
    }
}

pub trait Rgb8 {
    fn to_rgb8(&self) -> [u8; 3];
    fn from_rgb8(rgb: [u8; 3]) -> Self;
}

impl Rgb8 for Color {
    /// Channels are truncated, so only 1.0 maps to 255. Out of range values
    /// saturate.
    fn to_rgb8(&self) -> [u8; 3] {
        [
            (self.r * 255.0) as u8,
            (self.g * 255.0) as u8,
            (self.b * 255.0) as u8,
        ]
    }

    fn from_rgb8([r, g, b]: [u8; 3]) -> Self {
        Self::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }
}

impl Rgb8 for Rgb<u8> {
    fn to_rgb8(&self) -> [u8; 3] {
        self.0
    }

    fn from_rgb8(rgb: [u8; 3]) -> Self {
        Rgb(rgb)
    }
}

/// 8-bit RGB frame, black until pixels are written.
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixel_data: Box<[u8]>,
}

impl FrameBuffer {
    pub fn new(resolution: Resolution) -> Self {
        let (width, height) = (resolution.width(), resolution.height());
        Self {
            width,
            height,
            pixel_data: vec![0; width as usize * height as usize * 3].into_boxed_slice(),
        }
    }

    /// Places each pixel by its own coordinates, so the order of `pixels`
    /// does not matter.
    pub fn from_pixels<'a>(
        resolution: Resolution,
        pixels: impl IntoIterator<Item = &'a Pixel>,
    ) -> Result<Self> {
        let mut frame = Self::new(resolution);
        for pixel in pixels {
            frame.set_pixel(pixel.column, pixel.row, pixel.color)?;
        }
        Ok(frame)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_data(&self) -> &[u8] {
        &self.pixel_data
    }

    pub fn set_pixel<T: Rgb8>(&mut self, column: u32, row: u32, color: T) -> Result<()> {
        let start = self.offset(column, row)?;
        self.pixel_data[start..start + 3].copy_from_slice(&color.to_rgb8());
        Ok(())
    }

    pub fn get_pixel<T: Rgb8>(&self, column: u32, row: u32) -> Result<T> {
        let start = self.offset(column, row)?;
        let rgb = [
            self.pixel_data[start],
            self.pixel_data[start + 1],
            self.pixel_data[start + 2],
        ];
        Ok(T::from_rgb8(rgb))
    }

    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            let start = (x as usize + y as usize * self.width as usize) * 3;
            Rgb([
                self.pixel_data[start],
                self.pixel_data[start + 1],
                self.pixel_data[start + 2],
            ])
        })
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.to_image()
            .save_with_format(path, image::ImageFormat::Png)?;
        info!("wrote {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }

    fn offset(&self, column: u32, row: u32) -> Result<usize> {
        if column >= self.width || row >= self.height {
            return Err(Error::PixelOutOfBounds { column, row });
        }
        Ok((column as usize + row as usize * self.width as usize) * 3)
    }
}
