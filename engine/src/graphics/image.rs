use std::io::Read;
use std::path::Path;

use image::RgbaImage;

use super::Color;
use crate::error::{Error, Result};
use crate::resources;

/// A decoded RGBA image that can be drawn onto the canvas or used as the window icon.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pixels: RgbaImage,
}

impl Image {
    /// A fully transparent image.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
        }
    }

    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self> {
        let len = rgba.len();
        RgbaImage::from_raw(width, height, rgba)
            .map(|pixels| Self { pixels })
            .ok_or(Error::ImageSize { width, height, len })
    }

    /// Decodes PNG, JPEG, BMP or GIF data.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let pixels = image::load_from_memory(bytes)?.to_rgba8();
        Ok(Self { pixels })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_bytes(&resources::read_file_bytes(path)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Self::from_bytes(&resources::read_all_bytes(reader)?)
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.pixels.get_pixel_checked(x, y).map(|px| Color::from(*px))
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if let Some(px) = self.pixels.get_pixel_mut_checked(x, y) {
            *px = color.to_rgba();
        }
    }

    pub fn as_rgba(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn into_rgba(self) -> RgbaImage {
        self.pixels
    }
}

impl From<RgbaImage> for Image {
    fn from(pixels: RgbaImage) -> Self {
        Self { pixels }
    }
}
