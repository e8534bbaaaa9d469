use std::path::Path;

use ab_glyph::{point, Font as _, FontArc, PxScale, Rect, ScaleFont};

use crate::error::Result;
use crate::resources;

/// A typeface at a given pixel size.
#[derive(Clone)]
pub struct Font {
    face: FontArc,
    size: f32,
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font").field("size", &self.size).finish()
    }
}

/// Glyph coverage of a laid out string. The top left cell sits at
/// (`left`, `top`) relative to the start of the baseline.
pub(crate) struct TextBitmap {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
    pub coverage: Vec<f32>,
}

impl Font {
    /// Parses TrueType/OpenType data.
    pub fn from_bytes(data: Vec<u8>, size: f32) -> Result<Self> {
        let face = FontArc::try_from_vec(data)?;
        Ok(Self { face, size })
    }

    pub fn from_file(path: impl AsRef<Path>, size: f32) -> Result<Self> {
        Self::from_bytes(resources::read_file_bytes(path)?, size)
    }

    /// Same typeface at another size.
    pub fn with_size(&self, size: f32) -> Self {
        Self {
            face: self.face.clone(),
            size,
        }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    fn scaled(&self) -> ab_glyph::PxScaleFont<&FontArc> {
        self.face.as_scaled(PxScale::from(self.size))
    }

    pub fn ascent(&self) -> f32 {
        self.scaled().ascent()
    }

    /// Distance from the baseline to the lowest descender, as a positive number.
    pub fn descent(&self) -> f32 {
        -self.scaled().descent()
    }

    /// Horizontal advance of `text` in pixels.
    pub fn text_width(&self, text: &str) -> f32 {
        let scaled = self.scaled();
        let mut caret = 0.0;
        let mut previous = None;
        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = previous {
                caret += scaled.kern(prev, id);
            }
            caret += scaled.h_advance(id);
            previous = Some(id);
        }
        caret
    }

    /// Lays `text` out on a baseline at the origin. The bitmap spans the
    /// ink of every glyph, so overhangs and negative bearings are kept.
    pub(crate) fn rasterize(&self, text: &str) -> TextBitmap {
        let scaled = self.scaled();
        let mut outlines = Vec::new();
        let mut caret = 0.0;
        let mut previous = None;
        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = previous {
                caret += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(scaled.scale(), point(caret, 0.0));
            caret += scaled.h_advance(id);
            previous = Some(id);
            outlines.extend(self.face.outline_glyph(glyph));
        }

        let Some(ink) = outlines.iter().map(|g| g.px_bounds()).reduce(|a, b| {
            Rect {
                min: point(a.min.x.min(b.min.x), a.min.y.min(b.min.y)),
                max: point(a.max.x.max(b.max.x), a.max.y.max(b.max.y)),
            }
        }) else {
            return TextBitmap {
                left: 0,
                top: 0,
                width: 0,
                height: 0,
                coverage: Vec::new(),
            };
        };

        let (left, top) = (ink.min.x.floor() as i32, ink.min.y.floor() as i32);
        let width = (ink.max.x.ceil() as i32 - left).max(0) as u32;
        let height = (ink.max.y.ceil() as i32 - top).max(0) as u32;
        let mut coverage = vec![0.0f32; width as usize * height as usize];
        for outlined in &outlines {
            let bounds = outlined.px_bounds();
            let (ox, oy) = (bounds.min.x as i32 - left, bounds.min.y as i32 - top);
            outlined.draw(|gx, gy, c| {
                let (x, y) = (ox + gx as i32, oy + gy as i32);
                if x < 0 || y < 0 || x as u32 >= width || y as u32 >= height {
                    return;
                }
                let cell = &mut coverage[(y as u32 * width + x as u32) as usize];
                *cell = (*cell + c).min(1.0);
            });
        }

        TextBitmap {
            left,
            top,
            width,
            height,
            coverage,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rejects_invalid_font_data() {
        assert!(matches!(
            Font::from_bytes(vec![1, 2, 3, 4], 12.0),
            Err(crate::Error::Font(_))
        ));
    }

    fn dejavu(size: f32) -> Font {
        let data = include_bytes!("../../tests/fixtures/DejaVuSans.ttf");
        Font::from_bytes(data.to_vec(), size).unwrap()
    }

    #[test]
    fn metrics_are_positive() {
        let font = dejavu(32.0);
        assert!(font.ascent() > 0.0);
        assert!(font.descent() > 0.0);
        assert!(font.text_width("Hi") > font.text_width("H"));
        assert_eq!(font.with_size(16.0).size(), 16.0);
    }

    #[test]
    fn bitmap_sits_on_the_baseline() {
        let font = dejavu(64.0);
        let bitmap = font.rasterize("H");
        // H has no descender, so its ink ends at the baseline
        assert_eq!(bitmap.top + bitmap.height as i32, 0);
        assert!(bitmap.top < 0 && bitmap.top as f32 >= -font.ascent().ceil());
        assert!(bitmap.left > 0);
    }

    #[test]
    fn bitmap_keeps_negative_bearings_and_overhangs() {
        let font = dejavu(64.0);
        // the tail of j reaches left of the origin
        assert!(font.rasterize("j").left < 0);
        // f overhangs its own advance
        let f = font.rasterize("f");
        assert!((f.left + f.width as i32) as f32 > font.text_width("f"));
        let below = font.rasterize("g");
        assert!(below.top + below.height as i32 > 0);
    }

    #[test]
    fn empty_text_has_no_bitmap() {
        let bitmap = dejavu(20.0).rasterize("   ");
        assert_eq!((bitmap.width, bitmap.height), (0, 0));
    }
}
