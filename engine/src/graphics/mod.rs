pub mod backend;
pub mod color;
mod font;
pub mod image;
mod shape;
mod stroke;
mod transform;

use ::image::RgbaImage;
use tiny_skia::{
    ColorU8, FillRule, FilterQuality, Paint, Path, PathBuilder, Pixmap, PixmapPaint,
};

pub use self::color::Color;
pub use self::font::Font;
pub use self::image::Image;
pub use self::shape::{Polygon, Rect};
pub use self::stroke::{LineCap, LineJoin, Stroke};
pub use self::transform::Transform;
use crate::error::{Error, Result};

// Outlines run through pixel centres so integer coordinates land on whole pixels
const STROKE_OFFSET: f32 = 0.5;

/// The drawing surface shown in the window.
///
/// Everything drawn stays on the canvas until it is painted over or
/// [`Canvas::clear`]ed, so a game that redraws its whole scene every tick
/// should start with a clear. Sizes below zero draw nothing.
pub struct Canvas {
    // starts opaque and only ever blends over itself, so it stays opaque
    pixmap: Pixmap,
    transform: Transform,
    stroke: Stroke,
}

impl Canvas {
    /// A canvas filled with black.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let mut pixmap = Pixmap::new(width, height).ok_or(Error::CanvasSize { width, height })?;
        pixmap.fill(tiny_skia::Color::BLACK);
        Ok(Self {
            pixmap,
            transform: Transform::identity(),
            stroke: Stroke::default(),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let px = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgba(px.red(), px.green(), px.blue(), px.alpha()))
    }

    /// Tightly packed RGBA rows.
    pub fn pixels(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Copy of the current contents, e.g. for screenshots.
    pub fn snapshot(&self) -> Image {
        let pixels = RgbaImage::from_fn(self.width(), self.height(), |x, y| {
            self.pixel(x, y).unwrap_or(Color::TRANSPARENT).to_rgba()
        });
        Image::from(pixels)
    }

    /// Fills the canvas-sized rectangle at the origin, through the current
    /// transform like every other drawing call.
    pub fn clear(&mut self, color: Color) {
        let (w, h) = (self.width() as i32, self.height() as i32);
        self.fill_rect(0, 0, w, h, color);
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        if width <= 0 || height <= 0 {
            return;
        }
        let Some(rect) = tiny_skia::Rect::from_xywh(x as f32, y as f32, width as f32, height as f32)
        else {
            return;
        };
        let ts = self.transform.to_skia();
        self.pixmap.fill_rect(rect, &paint(color), ts, None);
    }

    pub fn draw_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        if width < 0 || height < 0 {
            return;
        }
        let rect = tiny_skia::Rect::from_xywh(
            x as f32 + STROKE_OFFSET,
            y as f32 + STROKE_OFFSET,
            width as f32,
            height as f32,
        );
        if let Some(path) = rect.map(PathBuilder::from_rect) {
            self.stroke_path(&path, color);
        }
    }

    /// Fills the circle (or oval) inscribed in the given box.
    pub fn fill_circle(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        if width <= 0 || height <= 0 {
            return;
        }
        if let Some(path) = oval(x as f32, y as f32, width, height) {
            self.fill_path(&path, FillRule::Winding, color);
        }
    }

    pub fn draw_circle(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        if width < 0 || height < 0 {
            return;
        }
        let (x, y) = (x as f32 + STROKE_OFFSET, y as f32 + STROKE_OFFSET);
        if let Some(path) = oval(x, y, width, height) {
            self.stroke_path(&path, color);
        }
    }

    /// Both end points are part of the line.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        let mut pb = PathBuilder::new();
        pb.move_to(x1 as f32 + STROKE_OFFSET, y1 as f32 + STROKE_OFFSET);
        pb.line_to(x2 as f32 + STROKE_OFFSET, y2 as f32 + STROKE_OFFSET);
        if let Some(path) = pb.finish() {
            self.stroke_path(&path, color);
        }
    }

    pub fn draw_polygon(&mut self, polygon: &Polygon, color: Color) {
        if let Some(path) = polygon.path(STROKE_OFFSET) {
            self.stroke_path(&path, color);
        }
    }

    /// Fills with the even-odd rule, so self-intersecting polygons get holes.
    pub fn fill_polygon(&mut self, polygon: &Polygon, color: Color) {
        if let Some(path) = polygon.path(0.0) {
            self.fill_path(&path, FillRule::EvenOdd, color);
        }
    }

    /// Draws `text` with its baseline starting at (`x`, `y`).
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, font: &Font, color: Color) {
        let bitmap = font.rasterize(text);
        let Some(mut glyphs) = Pixmap::new(bitmap.width, bitmap.height) else {
            return;
        };
        for (px, &coverage) in glyphs.pixels_mut().iter_mut().zip(&bitmap.coverage) {
            let alpha = (color.a as f32 * coverage).round() as u8;
            *px = ColorU8::from_rgba(color.r, color.g, color.b, alpha).premultiply();
        }
        self.draw_pixmap(&glyphs, x + bitmap.left, y + bitmap.top, 1.0, 1.0);
    }

    pub fn draw_image(&mut self, image: &Image, x: i32, y: i32) {
        let (w, h) = (image.width() as i32, image.height() as i32);
        self.draw_image_region_scaled(image, Rect::new(x, y, w, h), Rect::new(0, 0, w, h));
    }

    /// Draws the whole image stretched to `width` x `height`.
    pub fn draw_image_scaled(&mut self, image: &Image, x: i32, y: i32, width: i32, height: i32) {
        let src = Rect::new(0, 0, image.width() as i32, image.height() as i32);
        self.draw_image_region_scaled(image, Rect::new(x, y, width, height), src);
    }

    /// Draws the `src` part of the image at its natural size.
    pub fn draw_image_region(&mut self, image: &Image, x: i32, y: i32, src: Rect) {
        self.draw_image_region_scaled(image, Rect::new(x, y, src.width, src.height), src);
    }

    /// Draws the `src` part of the image stretched over `dst`. Parts of `src`
    /// outside the image are transparent.
    pub fn draw_image_region_scaled(&mut self, image: &Image, dst: Rect, src: Rect) {
        if dst.is_empty() || src.is_empty() {
            return;
        }
        let Some(region) = crop(image, src) else {
            return;
        };
        let sx = dst.width as f32 / src.width as f32;
        let sy = dst.height as f32 / src.height as f32;
        self.draw_pixmap(&region, dst.x, dst.y, sx, sy);
    }

    pub fn set_stroke(&mut self, stroke: Stroke) {
        self.stroke = stroke;
    }

    pub fn stroke(&self) -> Stroke {
        self.stroke
    }

    pub fn translate(&mut self, x: i32, y: i32) {
        self.transform.translate(x as f64, y as f64);
    }

    pub fn scale(&mut self, x: f64, y: f64) {
        self.transform.scale(x, y);
    }

    /// Rotates subsequent drawing by `degrees` around the current origin.
    pub fn rotate(&mut self, degrees: f64) {
        self.transform.rotate(degrees);
    }

    pub fn rotate_about(&mut self, degrees: f64, x: f64, y: f64) {
        self.transform.rotate_about(degrees, x, y);
    }

    pub fn shear(&mut self, x: f64, y: f64) {
        self.transform.shear(x, y);
    }

    /// Appends `transform` to the current one.
    pub fn transform(&mut self, transform: &Transform) {
        self.transform = self.transform.then(transform);
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    pub fn reset_transform(&mut self) {
        self.transform = Transform::identity();
    }

    pub fn current_transform(&self) -> Transform {
        self.transform
    }

    fn fill_path(&mut self, path: &Path, rule: FillRule, color: Color) {
        let ts = self.transform.to_skia();
        self.pixmap.fill_path(path, &paint(color), rule, ts, None);
    }

    fn stroke_path(&mut self, path: &Path, color: Color) {
        let ts = self.transform.to_skia();
        let stroke = self.stroke.to_skia();
        self.pixmap.stroke_path(path, &paint(color), &stroke, ts, None);
    }

    /// Draws `pixmap` with its top left corner at (`x`, `y`), scaled by
    /// `sx` and `sy`, then through the current transform.
    fn draw_pixmap(&mut self, pixmap: &Pixmap, x: i32, y: i32, sx: f32, sy: f32) {
        let ts = self
            .transform
            .to_skia()
            .pre_translate(x as f32, y as f32)
            .pre_scale(sx, sy);
        let paint = PixmapPaint {
            quality: FilterQuality::Nearest,
            ..Default::default()
        };
        self.pixmap.draw_pixmap(0, 0, pixmap.as_ref(), &paint, ts, None);
    }
}

fn paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    // hard pixel edges, so integer shapes cover exactly their pixels
    paint.anti_alias = false;
    paint
}

fn oval(x: f32, y: f32, width: i32, height: i32) -> Option<Path> {
    let rect = tiny_skia::Rect::from_xywh(x, y, width as f32, height as f32)?;
    PathBuilder::from_oval(rect)
}

/// The `src` area of `image` as a premultiplied pixmap.
fn crop(image: &Image, src: Rect) -> Option<Pixmap> {
    let mut out = Pixmap::new(src.width as u32, src.height as u32)?;
    let stride = src.width as usize;
    for (i, px) in out.pixels_mut().iter_mut().enumerate() {
        let ix = src.x as i64 + (i % stride) as i64;
        let iy = src.y as i64 + (i / stride) as i64;
        if ix < 0 || iy < 0 {
            continue;
        }
        if let Some(c) = image.pixel(ix as u32, iy as u32) {
            *px = ColorU8::from_rgba(c.r, c.g, c.b, c.a).premultiply();
        }
    }
    Some(out)
}

#[cfg(test)]
mod test {
    use super::*;

    fn canvas(width: u32, height: u32) -> Canvas {
        Canvas::new(width, height).unwrap()
    }

    fn painted(canvas: &Canvas, color: Color) -> Vec<(u32, u32)> {
        let mut out = Vec::new();
        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                if canvas.pixel(x, y) == Some(color) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn starts_black_and_clears() {
        let mut canvas = canvas(4, 3);
        assert_eq!(painted(&canvas, Color::BLACK).len(), 12);
        canvas.clear(Color::BLUE);
        assert_eq!(painted(&canvas, Color::BLUE).len(), 12);
    }

    #[test]
    fn clear_follows_transform() {
        let mut canvas = canvas(8, 8);
        canvas.translate(4, 4);
        canvas.clear(Color::RED);
        let red = painted(&canvas, Color::RED);
        assert_eq!(red.len(), 16);
        assert!(red.iter().all(|&(x, y)| x >= 4 && y >= 4));
    }

    #[test]
    fn zero_sized_canvas_is_an_error() {
        assert!(matches!(
            Canvas::new(0, 10),
            Err(Error::CanvasSize { width: 0, height: 10 })
        ));
    }

    #[test]
    fn negative_sizes_draw_nothing() {
        let mut canvas = canvas(10, 10);
        canvas.fill_rect(8, 8, -5, -5, Color::WHITE);
        canvas.draw_rect(8, 8, -5, 2, Color::WHITE);
        canvas.fill_circle(8, 8, -6, -6, Color::WHITE);
        canvas.draw_circle(8, 8, 4, -6, Color::WHITE);
        assert!(painted(&canvas, Color::WHITE).is_empty());
    }

    #[test]
    fn many_small_fills_touch_only_their_pixels() {
        let mut canvas = canvas(2048, 2048);
        for i in 0..10_000 {
            canvas.fill_rect(i % 2000, i / 5, 1, 1, Color::WHITE);
        }
        assert_eq!(canvas.pixel(0, 0), Some(Color::WHITE));
        assert_eq!(canvas.pixel(1999, 1999), Some(Color::WHITE));
        assert_eq!(canvas.pixel(2000, 0), Some(Color::BLACK));
        assert_eq!(canvas.pixel(0, 1), Some(Color::BLACK));
    }

    #[test]
    fn fill_rect_covers_width_by_height() {
        let mut canvas = canvas(10, 10);
        canvas.fill_rect(2, 3, 4, 2, Color::WHITE);
        let px = painted(&canvas, Color::WHITE);
        assert_eq!(px.len(), 8);
        assert!(px.contains(&(2, 3)));
        assert!(px.contains(&(5, 4)));
    }

    #[test]
    fn draw_line_includes_both_end_points() {
        let mut canvas = canvas(10, 3);
        canvas.draw_line(1, 1, 5, 1, Color::WHITE);
        let px = painted(&canvas, Color::WHITE);
        assert_eq!(px, vec![(1, 1), (2, 1), (3, 1), (4, 1), (5, 1)]);
    }

    #[test]
    fn draw_rect_outlines_one_pixel_larger() {
        let mut canvas = canvas(10, 10);
        canvas.draw_rect(1, 1, 4, 4, Color::WHITE);
        let px = painted(&canvas, Color::WHITE);
        assert_eq!(px.len(), 16);
        for corner in [(1, 1), (5, 1), (1, 5), (5, 5)] {
            assert!(px.contains(&corner), "missing corner {corner:?}");
        }
        assert!(!px.contains(&(3, 3)));
    }

    #[test]
    fn fill_circle_stays_inside_its_box() {
        let mut canvas = canvas(12, 12);
        canvas.fill_circle(1, 1, 10, 10, Color::GREEN);
        assert_eq!(canvas.pixel(6, 6), Some(Color::GREEN));
        assert_eq!(canvas.pixel(1, 1), Some(Color::BLACK));
        assert_eq!(canvas.pixel(10, 10), Some(Color::BLACK));
        assert_eq!(canvas.pixel(0, 6), Some(Color::BLACK));
    }

    #[test]
    fn draw_circle_leaves_centre_empty() {
        let mut canvas = canvas(24, 24);
        canvas.draw_circle(2, 2, 20, 20, Color::WHITE);
        assert_eq!(canvas.pixel(12, 12), Some(Color::BLACK));
        // pixel centres exactly on the ring, (6, -8) and (-8, 6) from its centre
        assert_eq!(canvas.pixel(18, 4), Some(Color::WHITE));
        assert_eq!(canvas.pixel(4, 18), Some(Color::WHITE));
    }

    #[test]
    fn polygon_fill_and_outline() {
        let poly: Polygon = [(1, 1), (8, 1), (8, 8)].into_iter().collect();
        let mut canvas = canvas(10, 10);
        canvas.fill_polygon(&poly, Color::RED);
        assert_eq!(canvas.pixel(7, 2), Some(Color::RED));
        assert_eq!(canvas.pixel(2, 7), Some(Color::BLACK));

        canvas.clear(Color::BLACK);
        canvas.draw_polygon(&poly, Color::RED);
        assert_eq!(canvas.pixel(4, 1), Some(Color::RED));
        assert_eq!(canvas.pixel(8, 4), Some(Color::RED));
        assert_eq!(canvas.pixel(7, 3), Some(Color::BLACK));
    }

    #[test]
    fn thick_stroke_widens_lines() {
        let mut canvas = canvas(10, 10);
        canvas.set_stroke(Stroke::new(3.0).with_cap(LineCap::Butt));
        canvas.draw_line(0, 5, 9, 5, Color::WHITE);
        assert_eq!(canvas.pixel(4, 4), Some(Color::WHITE));
        assert_eq!(canvas.pixel(4, 5), Some(Color::WHITE));
        assert_eq!(canvas.pixel(4, 6), Some(Color::WHITE));
        assert_eq!(canvas.pixel(4, 7), Some(Color::BLACK));
        assert_eq!(canvas.stroke().width, 3.0);
    }

    #[test]
    fn translate_moves_shapes() {
        let mut canvas = canvas(10, 10);
        canvas.translate(3, 4);
        canvas.fill_rect(0, 0, 2, 2, Color::WHITE);
        assert_eq!(painted(&canvas, Color::WHITE), vec![(3, 4), (4, 4), (3, 5), (4, 5)]);
    }

    #[test]
    fn scale_grows_shapes() {
        let mut canvas = canvas(10, 10);
        canvas.scale(2.0, 3.0);
        canvas.fill_rect(1, 1, 1, 1, Color::WHITE);
        assert_eq!(painted(&canvas, Color::WHITE).len(), 6);
        assert_eq!(canvas.pixel(2, 3), Some(Color::WHITE));
        assert_eq!(canvas.pixel(3, 5), Some(Color::WHITE));
    }

    #[test]
    fn rotate_about_centre_keeps_square_in_place() {
        let mut canvas = canvas(10, 10);
        canvas.rotate_about(90.0, 5.0, 5.0);
        canvas.fill_rect(3, 3, 4, 4, Color::WHITE);
        let px = painted(&canvas, Color::WHITE);
        assert_eq!(px.len(), 16);
        assert!(px.contains(&(3, 3)));
        assert!(px.contains(&(6, 6)));
    }

    #[test]
    fn reset_transform_restores_identity() {
        let mut canvas = canvas(4, 4);
        canvas.translate(2, 2);
        canvas.shear(1.0, 0.0);
        canvas.reset_transform();
        assert!(canvas.current_transform().is_identity());
        canvas.transform(&Transform::translation(1.0, 0.0));
        assert_eq!(canvas.current_transform().apply(0.0, 0.0), (1.0, 0.0));
    }

    #[test]
    fn draw_image_copies_pixels() {
        let mut img = Image::new(2, 2);
        img.set_pixel(0, 0, Color::RED);
        img.set_pixel(1, 1, Color::BLUE);
        let mut canvas = canvas(6, 6);
        canvas.draw_image(&img, 3, 2);
        assert_eq!(canvas.pixel(3, 2), Some(Color::RED));
        assert_eq!(canvas.pixel(4, 3), Some(Color::BLUE));
        // transparent pixels keep the background
        assert_eq!(canvas.pixel(4, 2), Some(Color::BLACK));
    }

    #[test]
    fn draw_image_scaled_stretches() {
        let mut img = Image::new(1, 1);
        img.set_pixel(0, 0, Color::GREEN);
        let mut canvas = canvas(6, 6);
        canvas.draw_image_scaled(&img, 1, 1, 3, 2);
        assert_eq!(painted(&canvas, Color::GREEN).len(), 6);
    }

    #[test]
    fn draw_image_region_crops() {
        let mut img = Image::new(4, 1);
        for x in 0..4 {
            img.set_pixel(x, 0, if x < 2 { Color::RED } else { Color::BLUE });
        }
        let mut canvas = canvas(6, 2);
        canvas.draw_image_region(&img, 0, 0, Rect::new(2, 0, 2, 1));
        assert_eq!(painted(&canvas, Color::BLUE), vec![(0, 0), (1, 0)]);
        assert!(painted(&canvas, Color::RED).is_empty());

        canvas.draw_image_region_scaled(&img, Rect::new(0, 1, 4, 1), Rect::new(0, 0, 2, 1));
        assert_eq!(painted(&canvas, Color::RED), vec![(0, 1), (1, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn draw_image_clips_outside_canvas() {
        let mut img = Image::new(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                img.set_pixel(x, y, Color::WHITE);
            }
        }
        let mut canvas = canvas(4, 4);
        canvas.draw_image(&img, -2, 2);
        assert_eq!(painted(&canvas, Color::WHITE), vec![(0, 2), (0, 3)]);
    }

    #[test]
    fn translucent_fill_blends() {
        let mut canvas = canvas(2, 1);
        canvas.fill_rect(0, 0, 1, 1, Color::WHITE.fade(0.5));
        let px = canvas.pixel(0, 0).unwrap();
        assert!((127..=128).contains(&px.r));
        assert_eq!(canvas.pixel(1, 0), Some(Color::BLACK));
    }

    #[test]
    fn outlines_with_zero_width_are_hairlines() {
        let mut canvas = canvas(10, 3);
        canvas.set_stroke(Stroke::new(0.0));
        canvas.draw_line(1, 1, 8, 1, Color::WHITE);
        assert_eq!(canvas.pixel(4, 1), Some(Color::WHITE));
        assert_eq!(canvas.pixel(4, 0), Some(Color::BLACK));
        assert_eq!(canvas.pixel(4, 2), Some(Color::BLACK));
    }

    #[test]
    fn fill_polygon_uses_even_odd() {
        // a pentagram, whose centre is covered twice
        let star: Polygon = [(10, 0), (16, 19), (0, 7), (20, 7), (4, 19)].into_iter().collect();
        let mut canvas = canvas(21, 21);
        canvas.fill_polygon(&star, Color::WHITE);
        assert_eq!(canvas.pixel(10, 10), Some(Color::BLACK));
        assert_eq!(canvas.pixel(10, 3), Some(Color::WHITE));
    }

    #[test]
    fn snapshot_copies_the_canvas() {
        let mut canvas = canvas(3, 2);
        canvas.fill_rect(1, 1, 1, 1, Color::YELLOW);
        let shot = canvas.snapshot();
        assert_eq!((shot.width(), shot.height()), (3, 2));
        assert_eq!(shot.pixel(1, 1), Some(Color::YELLOW));
        assert_eq!(shot.pixel(0, 0), Some(Color::BLACK));
        assert_eq!(canvas.pixels().len(), 3 * 2 * 4);
    }

    fn dejavu(size: f32) -> Font {
        let data = include_bytes!("../../tests/fixtures/DejaVuSans.ttf");
        Font::from_bytes(data.to_vec(), size).unwrap()
    }

    /// Bounding box of every pixel that isn't black, as (min, max) corners.
    fn ink(canvas: &Canvas) -> Option<((u32, u32), (u32, u32))> {
        let mut bounds: Option<((u32, u32), (u32, u32))> = None;
        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                if canvas.pixel(x, y) == Some(Color::BLACK) {
                    continue;
                }
                bounds = Some(match bounds {
                    None => ((x, y), (x, y)),
                    Some((min, max)) => ((min.0.min(x), min.1.min(y)), (max.0.max(x), max.1.max(y))),
                });
            }
        }
        bounds
    }

    #[test]
    fn draw_text_sits_on_its_baseline() {
        let font = dejavu(32.0);
        let mut canvas = canvas(120, 60);
        canvas.draw_text(10, 40, "Hi", &font, Color::WHITE);
        let ((left, top), (_, bottom)) = ink(&canvas).unwrap();
        // no descenders, so nothing below the baseline
        assert!(bottom < 40, "ink reaches row {bottom}");
        assert!(top as f32 >= 40.0 - font.ascent().ceil(), "ink starts at row {top}");
        assert!((10..=14).contains(&left), "ink starts at column {left}");
        assert_eq!(canvas.pixel(13, 30), Some(Color::WHITE));
    }

    #[test]
    fn draw_text_descenders_go_below_the_baseline() {
        let font = dejavu(32.0);
        let mut canvas = canvas(60, 60);
        canvas.draw_text(10, 30, "g", &font, Color::WHITE);
        let (_, (_, bottom)) = ink(&canvas).unwrap();
        assert!(bottom >= 30);
        assert!(bottom as f32 <= 30.0 + font.descent().ceil());
    }

    #[test]
    fn draw_text_keeps_ink_left_of_the_origin() {
        let font = dejavu(64.0);
        let mut canvas = canvas(60, 100);
        canvas.draw_text(20, 60, "j", &font, Color::WHITE);
        let ((left, _), _) = ink(&canvas).unwrap();
        assert_eq!(left, 19);
    }

    #[test]
    fn draw_text_follows_transform() {
        let font = dejavu(32.0);
        let mut plain = canvas(80, 80);
        plain.draw_text(10, 40, "H", &font, Color::WHITE);
        let mut moved = canvas(80, 80);
        moved.translate(5, 7);
        moved.draw_text(5, 33, "H", &font, Color::WHITE);
        assert_eq!(ink(&plain), ink(&moved));
    }
}
