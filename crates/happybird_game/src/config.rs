use std::path::PathBuf;

use typed_builder::TypedBuilder;

/// Fixed game tuning, built once at startup and shared by reference.
#[derive(Debug, Clone, PartialEq, TypedBuilder)]
pub struct GameConfig {
    #[builder(default = 480)]
    pub screen_width: u32,
    #[builder(default = 800)]
    pub screen_height: u32,
    #[builder(default = 60)]
    pub fps: u32,

    /// Downward acceleration of the bird in px/s².
    #[builder(default = 1100.0)]
    pub gravity: f32,
    /// Velocity the bird is set to on a jump (negative is up).
    #[builder(default = -420.0)]
    pub jump_velocity: f32,
    #[builder(default = 700.0)]
    pub strafe_speed: f32,
    #[builder(default = 10.0)]
    pub bird_fps: f32,
    #[builder(default = 3.0)]
    pub drifter_fps: f32,

    #[builder(default = 400.0)]
    pub background_speed: f32,
    #[builder(default = 360.0)]
    pub ground_speed: f32,
    #[builder(default = 0.8)]
    pub scroll_damping: f32,
    /// Log drift multiplier; logs move at `scroll_speed * 200` px/s.
    #[builder(default = 1.0)]
    pub scroll_speed: f32,
    #[builder(default = 1.0)]
    pub enemy_speed: f32,

    #[builder(default = 1100)]
    pub spawn_interval_ms: u32,
    #[builder(default = 1000)]
    pub flash_duration_ms: u32,

    #[builder(default = PathBuf::from("assets"))]
    pub asset_dir: PathBuf,
    #[builder(default = PathBuf::from("best_score.txt"))]
    pub best_score_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl GameConfig {
    pub fn width(&self) -> f32 {
        self.screen_width as f32
    }

    pub fn height(&self) -> f32 {
        self.screen_height as f32
    }

    /// Horizontal speed shared by both logs of a pair, in px/s.
    pub fn log_speed(&self) -> f32 {
        self.scroll_speed * 200.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_game_constants() {
        let config = GameConfig::default();
        assert_eq!((config.screen_width, config.screen_height), (480, 800));
        assert_eq!(config.gravity, 1100.0);
        assert_eq!(config.jump_velocity, -420.0);
        assert_eq!(config.spawn_interval_ms, 1100);
        assert_eq!(config.flash_duration_ms, 1000);
        assert_eq!(config.log_speed(), 200.0);
    }

    #[test]
    fn builder_overrides_single_fields() {
        let config = GameConfig::builder().screen_width(320).gravity(0.0).build();
        assert_eq!(config.screen_width, 320);
        assert_eq!(config.screen_height, 800);
        assert_eq!(config.gravity, 0.0);
    }
}
