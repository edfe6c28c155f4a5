use crate::surface::Surface;

/// Pixels with alpha above this value count as solid.
const ALPHA_THRESHOLD: u8 = 127;

/// Per-pixel opacity bitmap used for pixel-accurate collision tests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl Mask {
    pub fn from_surface(surface: &Surface) -> Self {
        let (width, height) = surface.size();
        let mut bits = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                bits.push(surface.pixel(x, y).a > ALPHA_THRESHOLD);
            }
        }
        Self {
            width,
            height,
            bits,
        }
    }

    /// A mask with every pixel solid.
    #[cfg(test)]
    pub fn solid(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![true; (width * height) as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.bits[(y * self.width + x) as usize]
    }

    #[cfg(test)]
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Whether any solid pixel of `other`, placed with its top-left corner
    /// at (dx, dy) relative to this mask, coincides with a solid pixel here.
    pub fn overlaps(&self, other: &Mask, dx: i32, dy: i32) -> bool {
        let x0 = dx.max(0);
        let y0 = dy.max(0);
        let x1 = (self.width as i32).min(dx + other.width as i32);
        let y1 = (self.height as i32).min(dy + other.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return false;
        }

        for y in y0..y1 {
            let row = (y * self.width as i32) as usize;
            let other_row = ((y - dy) * other.width as i32) as usize;
            for x in x0..x1 {
                if self.bits[row + x as usize] && other.bits[other_row + (x - dx) as usize] {
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use happybird_common::Color;

    #[test]
    fn alpha_threshold_decides_solidity() {
        let mut s = Surface::new(3, 1);
        s.set_pixel(0, 0, Color::new_rgba(0, 0, 0, 127));
        s.set_pixel(1, 0, Color::new_rgba(0, 0, 0, 128));
        s.set_pixel(2, 0, Color::RED);
        let mask = Mask::from_surface(&s);
        assert!(!mask.get(0, 0));
        assert!(mask.get(1, 0));
        assert!(mask.get(2, 0));
        assert_eq!(mask.count(), 2);
    }

    #[test]
    fn overlap_requires_shared_solid_pixel() {
        let a = Mask::solid(4, 4);
        let b = Mask::solid(2, 2);
        assert!(a.overlaps(&b, 3, 3));
        assert!(a.overlaps(&b, -1, -1));
        assert!(!a.overlaps(&b, 4, 0));
        assert!(!a.overlaps(&b, -2, 0));
    }

    #[test]
    fn transparent_pixels_never_collide() {
        // Only the right column of `a` is solid.
        let mut s = Surface::new(4, 4);
        s.fill_rect(3, 0, 1, 4, Color::RED);
        let a = s.mask();
        let b = Mask::solid(2, 2);
        assert!(!a.overlaps(&b, 0, 0));
        assert!(!a.overlaps(&b, 1, 2));
        assert!(a.overlaps(&b, 2, 2));
    }
}
