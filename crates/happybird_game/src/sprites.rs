use std::path::Path;
use std::rc::Rc;

use anyhow::{ensure, Result};
use happybird_common::Color;

use crate::actor::SpriteSheet;
use crate::config::GameConfig;
use crate::font::Font;
use crate::obstacle::LogVariant;
use crate::surface::Surface;

const BIRD_FRAMES: usize = 3;
const PIG_FRAMES: usize = 2;
const ENEMY_FRAMES: usize = 3;
const LOG_VARIANTS: [u32; 2] = [1, 4];
const LOG_SCALE: f32 = 2.5;

/// Every image the game draws, already scaled for the screen.
#[derive(Debug)]
pub struct Sprites {
    /// Screen height over background height; sizes everything but logs.
    pub scale_factor: f32,
    pub background: Surface,
    pub ground: Surface,
    pub bird: Rc<SpriteSheet>,
    pub pig: Rc<SpriteSheet>,
    /// Mirrored to face left.
    pub enemy: Rc<SpriteSheet>,
    pub logs: Vec<LogVariant>,
    pub menu: Surface,
}

/// Raw, unscaled artwork.
struct RawArt {
    background: Surface,
    ground: Surface,
    bird: Vec<Surface>,
    pig: Vec<Surface>,
    enemy: Vec<Surface>,
    logs: Vec<Surface>,
    menu: Surface,
}

impl Sprites {
    /// Load from `config.asset_dir`, or draw placeholders if the directory
    /// does not exist. A present but incomplete directory is an error.
    pub fn load_or_placeholder(config: &GameConfig) -> Result<Self> {
        if config.asset_dir.is_dir() {
            Self::load(&config.asset_dir, config)
        } else {
            log::warn!(
                "Asset directory '{}' not found, using placeholder sprites",
                config.asset_dir.display()
            );
            Ok(Self::placeholder(config))
        }
    }

    pub fn load(dir: &Path, config: &GameConfig) -> Result<Self> {
        let frames = |name: &str, count: usize| -> Result<Vec<Surface>> {
            (0..count)
                .map(|i| Surface::load(dir.join(name).join(format!("{name}{i}.png"))))
                .collect()
        };
        let art = RawArt {
            background: Surface::load(dir.join("Background/background.png"))?,
            ground: Surface::load(dir.join("Background/ground.png"))?,
            bird: frames("Bird", BIRD_FRAMES)?,
            pig: frames("Pigs", PIG_FRAMES)?,
            enemy: frames("Enemy", ENEMY_FRAMES)?,
            logs: LOG_VARIANTS
                .iter()
                .map(|n| Surface::load(dir.join(format!("Logs/Logs{n}.png"))))
                .collect::<Result<_>>()?,
            menu: Surface::load(dir.join("UI/menu.png"))?,
        };
        ensure!(art.background.height() > 0, "background image is empty");
        log::info!("Loaded sprites from '{}'", dir.display());
        Ok(Self::from_art(art, config))
    }

    /// Procedurally drawn stand-ins sized like the real artwork.
    pub fn placeholder(config: &GameConfig) -> Self {
        let (w, h) = (config.screen_width, config.screen_height);

        let mut background = Surface::filled(w, h, Color::SKY_BLUE);
        for (cx, cy, r) in [(0.2, 0.15, 40.0), (0.7, 0.3, 55.0), (0.45, 0.55, 35.0)] {
            let (cx, cy) = (cx * w as f32, cy * h as f32);
            background.fill_ellipse(cx, cy, r * 1.6, r * 0.7, Color::WHITE);
        }

        let mut ground = Surface::filled(w, 100, Color::BROWN);
        ground.fill_rect(0, 0, w, 18, Color::GRASS);

        let bird = (0..BIRD_FRAMES)
            .map(|i| {
                let mut s = Surface::new(34, 24);
                s.fill_ellipse(17.0, 12.0, 16.0, 11.0, Color::YELLOW);
                s.fill_ellipse(10.0, 8.0 + 4.0 * i as f32, 7.0, 4.0, Color::WHITE);
                s.fill_rect(24, 8, 3, 3, Color::BLACK);
                s.fill_rect(30, 11, 4, 3, Color::RED);
                s
            })
            .collect();

        let pig = (0..PIG_FRAMES)
            .map(|i| {
                let mut s = Surface::new(500, 460);
                s.fill_ellipse(250.0, 240.0, 240.0, 210.0, Color::PINK);
                s.fill_ellipse(250.0, 280.0, 80.0, 55.0, Color::new_rgb(230, 120, 150));
                let eye_y = 170 + 10 * i as i32;
                s.fill_rect(160, eye_y, 30, 30, Color::BLACK);
                s.fill_rect(310, eye_y, 30, 30, Color::BLACK);
                s
            })
            .collect();

        let enemy = (0..ENEMY_FRAMES)
            .map(|i| {
                let mut s = Surface::new(24, 18);
                s.fill_ellipse(12.0, 10.0, 11.0, 7.0, Color::RED);
                s.fill_ellipse(8.0, 6.0 + 2.0 * i as f32, 5.0, 3.0, Color::BLACK);
                s.fill_rect(21, 9, 3, 2, Color::YELLOW);
                s
            })
            .collect();

        let logs = LOG_VARIANTS
            .iter()
            .map(|&n| {
                let mut s = Surface::filled(40, 240, Color::BROWN);
                let shade = Color::new_rgb(110, 70, 30);
                for ring in 0..n as i32 + 2 {
                    s.fill_rect(6 + ring * 7, 0, 2, 240, shade);
                }
                s.fill_rect(0, 0, 40, 10, Color::new_rgb(200, 160, 110));
                s
            })
            .collect();

        let mut menu = Surface::filled(600, 400, Color::new_rgba(255, 255, 255, 200));
        let title = Font::new(56).render("Happy Bird", Color::new_rgb(230, 120, 40));
        menu.stamp(&title, (600 - title.width() as i32) / 2, 80);
        let hint = Font::new(28).render("Click to fly", Color::BLACK);
        menu.stamp(&hint, (600 - hint.width() as i32) / 2, 220);

        Self::from_art(
            RawArt {
                background,
                ground,
                bird,
                pig,
                enemy,
                logs,
                menu,
            },
            config,
        )
    }

    fn from_art(art: RawArt, config: &GameConfig) -> Self {
        let scale_factor = config.height() / art.background.height() as f32;
        let scale_all = |frames: Vec<Surface>, factor: f32, flip_x: bool| {
            let frames = frames
                .iter()
                .map(|f| f.scale_and_flip(factor, flip_x, false))
                .collect();
            Rc::new(SpriteSheet::new(frames))
        };

        Self {
            scale_factor,
            background: art.background.scale(scale_factor),
            ground: art.ground.scale(scale_factor),
            bird: scale_all(art.bird, scale_factor * 1.5, false),
            pig: scale_all(art.pig, scale_factor * 0.1, false),
            enemy: scale_all(art.enemy, scale_factor * 2.5, true),
            logs: art
                .logs
                .iter()
                .map(|log| LogVariant {
                    bottom: Rc::new(SpriteSheet::single(log.scale(LOG_SCALE))),
                    top: Rc::new(SpriteSheet::single(
                        log.scale_and_flip(LOG_SCALE, false, true),
                    )),
                })
                .collect(),
            menu: art.menu.scale(scale_factor * 0.5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_matches_screen_and_entity_scales() {
        let config = GameConfig::default();
        let sprites = Sprites::placeholder(&config);
        assert_eq!(sprites.scale_factor, 1.0);
        assert_eq!(sprites.background.size(), (480, 800));
        assert_eq!(sprites.ground.width(), 480);
        assert_eq!(sprites.bird.len(), 3);
        assert_eq!(sprites.bird.size(), (51, 36));
        assert_eq!(sprites.pig.len(), 2);
        assert_eq!(sprites.pig.size(), (50, 46));
        assert_eq!(sprites.enemy.size(), (60, 45));
        assert_eq!(sprites.logs.len(), 2);
        assert_eq!(sprites.logs[0].bottom.size(), (100, 600));
        assert_eq!(sprites.menu.size(), (300, 200));
    }

    #[test]
    fn top_logs_are_vertically_mirrored() {
        let sprites = Sprites::placeholder(&GameConfig::default());
        let log = &sprites.logs[0];
        let (_, h) = log.bottom.size();
        let bottom = log.bottom.frame(0);
        let top = log.top.frame(0);
        assert_eq!(bottom.pixel(0, 0), top.pixel(0, h - 1));
    }

    #[test]
    fn enemy_frames_face_left() {
        let sprites = Sprites::placeholder(&GameConfig::default());
        let frame = sprites.enemy.frame(0);
        // The beak is drawn on the right of the raw art.
        assert_eq!(frame.pixel(1, 24), Color::YELLOW);
    }

    #[test]
    fn missing_asset_dir_falls_back_to_placeholders() {
        let config = GameConfig::builder()
            .asset_dir(std::env::temp_dir().join("happybird-no-such-assets"))
            .build();
        let sprites = Sprites::load_or_placeholder(&config).unwrap();
        assert_eq!(sprites.scale_factor, 1.0);
    }

    #[test]
    fn incomplete_asset_dir_is_an_error() {
        let dir = std::env::temp_dir().join(format!("happybird-empty-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let config = GameConfig::builder().asset_dir(dir.clone()).build();
        assert!(Sprites::load_or_placeholder(&config).is_err());
        let _ = std::fs::remove_dir(dir);
    }
}
