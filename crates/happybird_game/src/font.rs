use std::convert::Infallible;

use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use happybird_common::Color;

use crate::surface::Surface;

/// Monospace text renderer over `embedded-graphics` fonts, enlarged by a
/// whole-number factor.
#[derive(Clone, Copy)]
pub struct Font {
    face: &'static MonoFont<'static>,
    scale: u32,
}

impl Font {
    /// A font whose glyphs are at least as tall as the 10x20 face and
    /// otherwise the largest whole multiple of it not above `size`.
    pub fn new(size: u32) -> Self {
        let face = &FONT_10X20;
        Self {
            face,
            scale: (size / face.character_size.height).max(1),
        }
    }

    fn advance(&self) -> u32 {
        self.face.character_size.width + self.face.character_spacing
    }

    pub fn render(&self, text: &str, color: Color) -> Surface {
        let columns = text.chars().count() as u32 * self.advance();
        let rows = self.face.character_size.height;
        let mut target = ScaledTarget {
            surface: Surface::new(columns * self.scale, rows * self.scale),
            size: Size::new(columns, rows),
            scale: self.scale,
        };

        let style = MonoTextStyle::new(self.face, Rgb888::new(color.r, color.g, color.b));
        if let Err(never) =
            Text::with_baseline(text, Point::zero(), style, Baseline::Top).draw(&mut target)
        {
            match never {}
        }
        target.surface
    }
}

/// Draw target in font pixels; each one lands as a `scale` x `scale`
/// block on the surface.
struct ScaledTarget {
    surface: Surface,
    size: Size,
    scale: u32,
}

impl OriginDimensions for ScaledTarget {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for ScaledTarget {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let scale = self.scale as i32;
        for Pixel(point, color) in pixels {
            let color = Color::new_rgb(color.r(), color.g(), color.b());
            self.surface.fill_rect(
                point.x * scale,
                point.y * scale,
                self.scale,
                self.scale,
                color,
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &Surface) -> usize {
        let (w, h) = s.size();
        (0..h)
            .flat_map(|y| (0..w).map(move |x| (x, y)))
            .filter(|&(x, y)| s.pixel(x, y).a != 0)
            .count()
    }

    #[test]
    fn size_picks_whole_multiples_of_the_face() {
        let height = |size| Font::new(size).render("A", Color::WHITE).height();
        assert_eq!(height(28), 20);
        assert_eq!(height(40), 40);
        assert_eq!(height(3), 20);
    }

    #[test]
    fn render_is_one_cell_per_character() {
        let font = Font::new(20);
        let s = font.render("Pig: 3", Color::GREEN);
        assert_eq!(s.size(), (60, 20));
        assert_eq!(font.render("", Color::GREEN).size(), (0, 20));
    }

    #[test]
    fn lowercase_keeps_its_own_glyphs() {
        let font = Font::new(20);
        assert_ne!(
            font.render("new game", Color::RED),
            font.render("NEW GAME", Color::RED)
        );
    }

    #[test]
    fn glyphs_are_drawn_in_the_text_color_on_transparent() {
        let s = Font::new(20).render("H", Color::RED);
        assert!(lit(&s) > 0);
        assert_eq!(s.pixel(0, 0).a, 0);
        let (w, h) = s.size();
        for y in 0..h {
            for x in 0..w {
                let p = s.pixel(x, y);
                assert!(p.a == 0 || p == Color::RED);
            }
        }
        assert_eq!(lit(&Font::new(20).render(" ", Color::RED)), 0);
    }

    #[test]
    fn scaled_font_doubles_every_glyph_pixel() {
        let small = Font::new(20).render("Score", Color::YELLOW);
        let big = Font::new(40).render("Score", Color::YELLOW);
        assert_eq!(big.size(), (100, 40));
        assert_eq!(lit(&big), 4 * lit(&small));
    }
}
