use crate::error::{Error, Result};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const DARK_GRAY: Color = Color::rgb(64, 64, 64);
    pub const LIGHT_GRAY: Color = Color::rgb(192, 192, 192);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const ORANGE: Color = Color::rgb(255, 200, 0);
    pub const PINK: Color = Color::rgb(255, 175, 175);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    fn next_two(chars: &mut dyn Iterator<Item = char>) -> Option<u8> {
        let hi = chars.next()?.to_digit(16)?;
        let lo = chars.next()?.to_digit(16)?;
        Some((hi * 16 + lo) as u8)
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA`; the leading `#` is optional.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 && digits.len() != 8 {
            return Err(Error::InvalidColor(hex.to_string()));
        }
        let mut chars = digits.chars();
        let mut next = || Self::next_two(&mut chars).ok_or_else(|| Error::InvalidColor(hex.to_string()));

        let r = next()?;
        let g = next()?;
        let b = next()?;
        let a = if digits.len() == 8 { next()? } else { 255 };

        Ok(Color { r, g, b, a })
    }

    /// Replaces the alpha channel, `alpha` in `0.0..=1.0`.
    pub fn fade(mut self, alpha: f32) -> Self {
        self.a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        self
    }

    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, self.a])
    }
}

impl From<image::Rgba<u8>> for Color {
    fn from(px: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = px.0;
        Color { r, g, b, a }
    }
}

#[cfg(test)]
mod test {
    use super::Color;
    #[test]
    fn test_color_from_hex() {
        let color = Color::from_hex("292828").unwrap();
        assert_eq!(
            color,
            Color {
                r: 41,
                g: 40,
                b: 40,
                a: 255
            }
        );
        assert_eq!(Color::from_hex("#292828").unwrap(), color);
    }
    #[test]
    fn test_color_from_hex_with_alpha() {
        let color = Color::from_hex("#ff000080").unwrap();
        assert_eq!(color, Color::rgba(255, 0, 0, 128));
    }
    #[test]
    fn test_color_from_hex_rejects_garbage() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#GG0000").is_err());
        assert!(Color::from_hex("").is_err());
    }
    #[test]
    fn test_color_fade() {
        assert_eq!(Color::WHITE.fade(0.0).a, 0);
        assert_eq!(Color::WHITE.fade(1.0).a, 255);
        assert_eq!(Color::WHITE.fade(2.0).a, 255);
    }
}
