#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::new_rgb(0, 0, 0);
    pub const WHITE: Color = Color::new_rgb(255, 255, 255);
    pub const RED: Color = Color::new_rgb(255, 0, 0);
    pub const GREEN: Color = Color::new_rgb(0, 255, 0);
    pub const BLUE: Color = Color::new_rgb(0, 0, 255);
    pub const YELLOW: Color = Color::new_rgb(255, 255, 0);
    pub const SKY_BLUE: Color = Color::new_rgb(135, 206, 235);
    pub const BROWN: Color = Color::new_rgb(139, 90, 43);
    pub const PINK: Color = Color::new_rgb(255, 160, 190);
    pub const GRASS: Color = Color::new_rgb(96, 176, 64);
    pub const TRANSPARENT: Color = Color::new_rgba(0, 0, 0, 0);

    #[inline]
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 0xff }
    }

    #[inline]
    pub const fn new_rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    #[inline]
    pub const fn rgba(&self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }

    #[inline]
    pub const fn to_array(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Source-over blend of `self` onto an opaque `dst`.
    pub fn blend_over(&self, dst: (u8, u8, u8)) -> (u8, u8, u8) {
        match self.a {
            0xff => self.rgb(),
            0 => dst,
            a => {
                let a = a as u16;
                let mix = |s: u8, d: u8| ((s as u16 * a + d as u16 * (255 - a) + 127) / 255) as u8;
                (mix(self.r, dst.0), mix(self.g, dst.1), mix(self.b, dst.2))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_over_respects_alpha_extremes() {
        let dst = (10, 20, 30);
        assert_eq!(Color::RED.blend_over(dst), (255, 0, 0));
        assert_eq!(Color::TRANSPARENT.blend_over(dst), dst);
    }

    #[test]
    fn blend_over_mixes_half_alpha() {
        let c = Color::new_rgba(255, 255, 255, 128);
        let (r, g, b) = c.blend_over((0, 0, 0));
        assert_eq!((r, g, b), (128, 128, 128));
    }
}
