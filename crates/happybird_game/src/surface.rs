use std::path::Path;

use anyhow::{Context, Result};
use happybird_common::Color;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::mask::Mask;

/// An RGBA pixel buffer: a loaded sprite, a rendered string, or a
/// procedurally drawn placeholder.
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    pixels: RgbaImage,
}

impl Surface {
    /// A fully transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
        }
    }

    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        Self {
            pixels: RgbaImage::from_pixel(width, height, Rgba(color.to_array())),
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let pixels = image::open(path)
            .with_context(|| format!("failed to load image '{}'", path.display()))?
            .to_rgba8();
        Ok(Self { pixels })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let Rgba([r, g, b, a]) = *self.pixels.get_pixel(x, y);
        Color::new_rgba(r, g, b, a)
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        if x < self.width() && y < self.height() {
            self.pixels.put_pixel(x, y, Rgba(color.to_array()));
        }
    }

    /// Overwrite a clipped rectangle with `color`.
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
        let x0 = x.max(0) as u32;
        let y0 = y.max(0) as u32;
        let x1 = (x + width as i32).clamp(0, self.width() as i32) as u32;
        let y1 = (y + height as i32).clamp(0, self.height() as i32) as u32;
        for py in y0..y1 {
            for px in x0..x1 {
                self.pixels.put_pixel(px, py, Rgba(color.to_array()));
            }
        }
    }

    /// Overwrite the pixels inside an axis-aligned ellipse with `color`.
    pub fn fill_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, color: Color) {
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        for py in 0..self.height() {
            for px in 0..self.width() {
                let dx = (px as f32 + 0.5 - cx) / rx;
                let dy = (py as f32 + 0.5 - cy) / ry;
                if dx * dx + dy * dy <= 1.0 {
                    self.pixels.put_pixel(px, py, Rgba(color.to_array()));
                }
            }
        }
    }

    /// Copy `src` onto this surface at (x, y), replacing pixels where `src`
    /// is not fully transparent.
    pub fn stamp(&mut self, src: &Surface, x: i32, y: i32) {
        for sy in 0..src.height() {
            for sx in 0..src.width() {
                let color = src.pixel(sx, sy);
                if color.a == 0 {
                    continue;
                }
                let (dx, dy) = (x + sx as i32, y + sy as i32);
                if dx >= 0 && dy >= 0 {
                    self.set_pixel(dx as u32, dy as u32, color);
                }
            }
        }
    }

    /// Resize by `factor` on both axes. The new size is truncated, so very
    /// small factors can produce an empty surface.
    pub fn scale(&self, factor: f32) -> Surface {
        let width = (self.width() as f32 * factor) as u32;
        let height = (self.height() as f32 * factor) as u32;
        if width == 0 || height == 0 {
            return Surface::new(width, height);
        }
        Surface {
            pixels: imageops::resize(&self.pixels, width, height, FilterType::Nearest),
        }
    }

    pub fn flip(&self, flip_x: bool, flip_y: bool) -> Surface {
        let mut pixels = self.pixels.clone();
        if flip_x {
            pixels = imageops::flip_horizontal(&pixels);
        }
        if flip_y {
            pixels = imageops::flip_vertical(&pixels);
        }
        Surface { pixels }
    }

    pub fn scale_and_flip(&self, factor: f32, flip_x: bool, flip_y: bool) -> Surface {
        let scaled = self.scale(factor);
        if flip_x || flip_y {
            scaled.flip(flip_x, flip_y)
        } else {
            scaled
        }
    }

    /// Rotate counter-clockwise by `degrees` without rescaling. The result
    /// grows to the rotated bounding box; uncovered pixels are transparent.
    pub fn rotate(&self, degrees: f32) -> Surface {
        let (w, h) = (self.width() as f32, self.height() as f32);
        let (sin, cos) = degrees.to_radians().sin_cos();
        let out_w = rotated_extent(w * cos.abs() + h * sin.abs());
        let out_h = rotated_extent(w * sin.abs() + h * cos.abs());

        let mut out = RgbaImage::new(out_w, out_h);
        let (ocx, ocy) = (out_w as f32 / 2.0, out_h as f32 / 2.0);
        let (icx, icy) = (w / 2.0, h / 2.0);

        for oy in 0..out_h {
            for ox in 0..out_w {
                let dx = ox as f32 + 0.5 - ocx;
                let dy = oy as f32 + 0.5 - ocy;
                // Inverse rotation in y-down screen space.
                let sx = (dx * cos - dy * sin + icx).floor();
                let sy = (dx * sin + dy * cos + icy).floor();
                if sx >= 0.0 && sy >= 0.0 && sx < w && sy < h {
                    out.put_pixel(ox, oy, *self.pixels.get_pixel(sx as u32, sy as u32));
                }
            }
        }
        Surface { pixels: out }
    }

    pub fn mask(&self) -> Mask {
        Mask::from_surface(self)
    }
}

// Round up, ignoring float noise from sin/cos at right angles.
fn rotated_extent(extent: f32) -> u32 {
    (extent - 1e-3).ceil().max(0.0) as u32
}
