use crate::frame::Frame;
use crate::mask::Mask;
use crate::rect::Rect;
use crate::surface::Surface;

/// Two copies of one image tiled horizontally and scrolled left forever.
///
/// When a copy reaches `-width` it is moved to the right edge of its
/// partner, so the two stay contiguous regardless of frame-time jitter.
#[derive(Clone, Debug)]
pub struct ScrollingPair {
    image: Surface,
    mask: Mask,
    x1: f32,
    x2: f32,
    y: i32,
    speed: f32,
}

impl ScrollingPair {
    /// `speed` is the effective px/s, damping already applied.
    pub fn new(image: Surface, y: i32, speed: f32) -> Self {
        let width = image.width() as f32;
        let mask = image.mask();
        Self {
            image,
            mask,
            x1: 0.0,
            x2: width,
            y,
            speed,
        }
    }

    pub fn width(&self) -> f32 {
        self.image.width() as f32
    }

    #[cfg(test)]
    pub fn offsets(&self) -> (f32, f32) {
        (self.x1, self.x2)
    }

    pub fn update(&mut self, dt: f32) {
        let step = self.speed * dt;
        self.x1 -= step;
        self.x2 -= step;

        let width = self.width();
        if self.x1 <= -width {
            self.x1 = self.x2 + width;
        }
        if self.x2 <= -width {
            self.x2 = self.x1 + width;
        }
    }

    /// Screen rectangles of both copies.
    pub fn rects(&self) -> [Rect; 2] {
        let (w, h) = self.image.size();
        [
            Rect::new(self.x1 as i32, self.y, w, h),
            Rect::new(self.x2 as i32, self.y, w, h),
        ]
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    pub fn draw(&self, frame: &mut Frame) {
        for rect in self.rects() {
            frame.blit(&self.image, rect.x, rect.y);
        }
    }
}
