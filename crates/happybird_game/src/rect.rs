/// Integer screen rectangle anchored at its top-left corner.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_bottom_right(right: i32, bottom: i32, width: u32, height: u32) -> Self {
        Self::new(right - width as i32, bottom - height as i32, width, height)
    }

    pub fn from_bottom_left(left: i32, bottom: i32, width: u32, height: u32) -> Self {
        Self::new(left, bottom - height as i32, width, height)
    }

    pub fn from_mid_left(left: i32, center_y: i32, width: u32, height: u32) -> Self {
        Self::new(left, center_y - height as i32 / 2, width, height)
    }

    pub fn from_center(center_x: i32, center_y: i32, width: u32, height: u32) -> Self {
        Self::new(
            center_x - width as i32 / 2,
            center_y - height as i32 / 2,
            width,
            height,
        )
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    pub fn center(&self) -> (i32, i32) {
        (
            self.x + self.width as i32 / 2,
            self.y + self.height as i32 / 2,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_resolve_to_top_left() {
        let r = Rect::from_bottom_right(100, 50, 20, 10);
        assert_eq!((r.left(), r.top(), r.right(), r.bottom()), (80, 40, 100, 50));

        let r = Rect::from_bottom_left(5, 50, 20, 10);
        assert_eq!((r.x, r.y), (5, 40));

        let r = Rect::from_mid_left(60, 400, 51, 36);
        assert_eq!((r.x, r.y), (60, 382));

        let r = Rect::from_center(240, 400, 300, 200);
        assert_eq!((r.x, r.y), (90, 300));
        assert_eq!(r.center(), (240, 400));
    }
}
