use std::rc::Rc;

use crate::actor::{Actor, SpriteSheet};
use crate::config::GameConfig;
use crate::mask::Mask;
use crate::rect::Rect;
use crate::surface::Surface;

/// Degrees of tilt per px/s of vertical velocity.
const TILT_PER_VELOCITY: f32 = 0.05;

/// The player. Falls under gravity, jumps on demand and strafes while the
/// strafe flags are held.
#[derive(Clone, Debug)]
pub struct Bird {
    pub actor: Actor,
    pub velocity: f32,
    pub moving_left: bool,
    pub moving_right: bool,
    gravity: f32,
    jump_velocity: f32,
    move_speed: f32,
    fps: f32,
    /// Tilted copy of the current frame, drawn instead of the frame itself.
    rotated: Surface,
}

impl Bird {
    pub fn new(sheet: Rc<SpriteSheet>, config: &GameConfig) -> Self {
        let left = (config.width() / 8.0) as i32;
        let center_y = (config.height() / 2.0) as i32;
        let actor = Actor::at(sheet, |w, h| Rect::from_mid_left(left, center_y, w, h));
        let rotated = actor.image().clone();
        Self {
            actor,
            velocity: 0.0,
            moving_left: false,
            moving_right: false,
            gravity: config.gravity,
            jump_velocity: config.jump_velocity,
            move_speed: config.strafe_speed,
            fps: config.bird_fps,
            rotated,
        }
    }

    /// Semi-implicit Euler: velocity first, then position with the new
    /// velocity.
    pub fn apply_gravity(&mut self, dt: f32) {
        self.velocity += self.gravity * dt;
        self.actor.pos.y += self.velocity * dt;
    }

    /// Overwrites the current velocity.
    pub fn jump(&mut self) {
        self.velocity = self.jump_velocity;
    }

    pub fn tilt_degrees(&self) -> f32 {
        -self.velocity * TILT_PER_VELOCITY
    }

    fn rotate(&mut self) {
        self.rotated = self.actor.image().rotate(self.tilt_degrees());
    }

    pub fn update(&mut self, dt: f32) {
        self.apply_gravity(dt);
        self.actor.animation.animate(dt, self.fps);
        self.rotate();

        if self.moving_left {
            self.actor.pos.x -= self.move_speed * dt;
        }
        if self.moving_right {
            self.actor.pos.x += self.move_speed * dt;
        }
    }

    pub fn rect(&self) -> Rect {
        self.actor.rect()
    }

    /// Mask of the unrotated frame; tilt is cosmetic only.
    pub fn mask(&self) -> &Mask {
        self.actor.mask()
    }

    pub fn image(&self) -> &Surface {
        &self.rotated
    }
}
