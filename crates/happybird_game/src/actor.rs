use std::rc::Rc;

use crate::mask::Mask;
use crate::rect::Rect;
use crate::surface::Surface;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An ordered frame sequence with the collision mask of every frame.
#[derive(Debug)]
pub struct SpriteSheet {
    frames: Vec<Surface>,
    masks: Vec<Mask>,
}

impl SpriteSheet {
    pub fn new(frames: Vec<Surface>) -> Self {
        assert!(!frames.is_empty(), "sprite sheet needs at least one frame");
        let masks = frames.iter().map(Surface::mask).collect();
        Self { frames, masks }
    }

    pub fn single(frame: Surface) -> Self {
        Self::new(vec![frame])
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frame(&self, index: usize) -> &Surface {
        &self.frames[index]
    }

    pub fn mask(&self, index: usize) -> &Mask {
        &self.masks[index]
    }

    /// Size of the first frame; actor rectangles keep this size for life.
    pub fn size(&self) -> (u32, u32) {
        self.frames[0].size()
    }
}

/// Time-driven cycling through a shared sprite sheet.
#[derive(Clone, Debug)]
pub struct Animation {
    sheet: Rc<SpriteSheet>,
    index: f32,
}

impl Animation {
    pub fn new(sheet: Rc<SpriteSheet>) -> Self {
        Self { sheet, index: 0.0 }
    }

    /// Advance by `fps * dt` frames. Reaching the end snaps straight back to
    /// frame 0; any overshoot is discarded.
    pub fn animate(&mut self, dt: f32, fps: f32) {
        self.index += fps * dt;
        if self.index >= self.sheet.len() as f32 {
            self.index = 0.0;
        }
    }

    pub fn frame_index(&self) -> usize {
        self.index as usize
    }

    pub fn image(&self) -> &Surface {
        self.sheet.frame(self.frame_index())
    }

    pub fn mask(&self) -> &Mask {
        self.sheet.mask(self.frame_index())
    }

    pub fn sheet(&self) -> &SpriteSheet {
        &self.sheet
    }
}

/// A positioned, animated sprite.
#[derive(Clone, Debug)]
pub struct Actor {
    pub pos: Vec2,
    pub animation: Animation,
}

impl Actor {
    /// Place an actor so its rectangle is `rect` built from the sheet size.
    pub fn at(sheet: Rc<SpriteSheet>, place: impl FnOnce(u32, u32) -> Rect) -> Self {
        let (w, h) = sheet.size();
        let rect = place(w, h);
        Self {
            pos: Vec2::new(rect.x as f32, rect.y as f32),
            animation: Animation::new(sheet),
        }
    }

    /// Screen rectangle; the position is truncated toward zero.
    pub fn rect(&self) -> Rect {
        let (w, h) = self.animation.sheet().size();
        Rect::new(self.pos.x as i32, self.pos.y as i32, w, h)
    }

    pub fn image(&self) -> &Surface {
        self.animation.image()
    }

    pub fn mask(&self) -> &Mask {
        self.animation.mask()
    }

    /// True once the right edge has left the screen on the left side.
    pub fn is_off_screen(&self) -> bool {
        is_off_screen_left(self.rect())
    }
}

pub fn is_off_screen_left(rect: Rect) -> bool {
    rect.right() <= 0
}
