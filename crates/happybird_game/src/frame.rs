use happybird_common::Color;

use crate::surface::Surface;

/// RGB24 render target backed by the frontend's screen buffer.
pub struct Frame<'a> {
    buffer: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> Frame<'a> {
    pub fn new(buffer: &'a mut [u8], width: usize, height: usize) -> Self {
        debug_assert_eq!(buffer.len(), width * height * 3);
        Self {
            buffer,
            width,
            height,
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> (u8, u8, u8) {
        let idx = (y * self.width + x) * 3;
        (self.buffer[idx], self.buffer[idx + 1], self.buffer[idx + 2])
    }

    #[inline]
    fn put(&mut self, x: usize, y: usize, rgb: (u8, u8, u8)) {
        let idx = (y * self.width + x) * 3;
        self.buffer[idx] = rgb.0;
        self.buffer[idx + 1] = rgb.1;
        self.buffer[idx + 2] = rgb.2;
    }

    pub fn fill(&mut self, color: Color) {
        for px in self.buffer.chunks_exact_mut(3) {
            px[0] = color.r;
            px[1] = color.g;
            px[2] = color.b;
        }
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
        let x0 = x.clamp(0, self.width as i32) as usize;
        let y0 = y.clamp(0, self.height as i32) as usize;
        let x1 = (x + width as i32).clamp(0, self.width as i32) as usize;
        let y1 = (y + height as i32).clamp(0, self.height as i32) as usize;
        for py in y0..y1 {
            for px in x0..x1 {
                let dst = self.pixel(px, py);
                self.put(px, py, color.blend_over(dst));
            }
        }
    }

    /// Composite `src` with its top-left corner at (x, y), alpha blended
    /// and clipped to the frame.
    pub fn blit(&mut self, src: &Surface, x: i32, y: i32) {
        let sx0 = (-x).max(0) as u32;
        let sy0 = (-y).max(0) as u32;
        let sx1 = (self.width as i32 - x).clamp(0, src.width() as i32) as u32;
        let sy1 = (self.height as i32 - y).clamp(0, src.height() as i32) as u32;

        for sy in sy0..sy1 {
            for sx in sx0..sx1 {
                let color = src.pixel(sx, sy);
                if color.a == 0 {
                    continue;
                }
                let dx = (x + sx as i32) as usize;
                let dy = (y + sy as i32) as usize;
                let dst = self.pixel(dx, dy);
                self.put(dx, dy, color.blend_over(dst));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_paints_every_pixel() {
        let mut buf = vec![0u8; 4 * 3 * 3];
        let mut frame = Frame::new(&mut buf, 4, 3);
        frame.fill(Color::SKY_BLUE);
        assert_eq!(frame.pixel(3, 2), Color::SKY_BLUE.rgb());
    }

    #[test]
    fn blit_clips_at_every_edge() {
        let mut buf = vec![0u8; 4 * 4 * 3];
        let mut frame = Frame::new(&mut buf, 4, 4);
        let src = Surface::filled(3, 3, Color::RED);
        frame.blit(&src, -2, -2);
        frame.blit(&src, 3, 3);
        assert_eq!(frame.pixel(0, 0), (255, 0, 0));
        assert_eq!(frame.pixel(1, 1), (0, 0, 0));
        assert_eq!(frame.pixel(3, 3), (255, 0, 0));
        assert_eq!(frame.pixel(2, 2), (0, 0, 0));
    }

    #[test]
    fn blit_skips_transparent_pixels() {
        let mut buf = vec![0u8; 2 * 1 * 3];
        let mut frame = Frame::new(&mut buf, 2, 1);
        frame.fill(Color::WHITE);
        let mut src = Surface::new(2, 1);
        src.set_pixel(1, 0, Color::GREEN);
        frame.blit(&src, 0, 0);
        assert_eq!(frame.pixel(0, 0), (255, 255, 255));
        assert_eq!(frame.pixel(1, 0), (0, 255, 0));
    }

    #[test]
    fn blit_fully_offscreen_is_a_no_op() {
        let mut buf = vec![7u8; 2 * 2 * 3];
        let mut frame = Frame::new(&mut buf, 2, 2);
        let src = Surface::filled(2, 2, Color::RED);
        frame.blit(&src, -5, 0);
        frame.blit(&src, 0, 9);
        assert!(buf.iter().all(|&b| b == 7));
    }
}
