use std::rc::Rc;

use rand::Rng;

use crate::actor::{is_off_screen_left, Actor, SpriteSheet, Vec2};
use crate::config::GameConfig;
use crate::mask::Mask;
use crate::rect::Rect;
use crate::surface::Surface;

/// Vertical bobbing shape of a drifting obstacle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Wave {
    /// Pigs.
    Sine,
    /// Enemy birds.
    Cosine,
}

impl Wave {
    fn sample(self, phase: f64) -> f32 {
        match self {
            Wave::Sine => phase.sin() as f32,
            Wave::Cosine => phase.cos() as f32,
        }
    }
}

/// A pig or enemy bird: enters from the right, drifts left and bobs
/// vertically in phase with the global clock.
#[derive(Clone, Debug)]
pub struct Drifter {
    pub actor: Actor,
    pub wave: Wave,
    pub wave_amplitude: f32,
    pub speed_random: f32,
    enemy_speed: f32,
    fps: f32,
}

impl Drifter {
    pub fn spawn(
        sheet: Rc<SpriteSheet>,
        wave: Wave,
        config: &GameConfig,
        rng: &mut impl Rng,
    ) -> Self {
        let right = config.screen_width as i32 + rng.gen_range(120..=300);
        let bottom = rng.gen_range(150..=config.screen_height as i32 - 100);
        let actor = Actor::at(sheet, |w, h| Rect::from_bottom_right(right, bottom, w, h));
        Self {
            actor,
            wave,
            wave_amplitude: rng.gen_range(300..=750) as f32,
            speed_random: rng.gen_range(400..=600) as f32,
            enemy_speed: config.enemy_speed,
            fps: config.drifter_fps,
        }
    }

    /// `clock_ms` is the game-wide clock, so every drifter bobs in unison.
    pub fn update(&mut self, dt: f32, clock_ms: f64) {
        self.actor.animation.animate(dt, self.fps);
        self.actor.pos.x -= self.enemy_speed * self.speed_random * dt;
        self.actor.pos.y += self.wave.sample(clock_ms / 100.0) * self.wave_amplitude * dt;
    }

    pub fn rect(&self) -> Rect {
        self.actor.rect()
    }

    pub fn mask(&self) -> &Mask {
        self.actor.mask()
    }

    pub fn image(&self) -> &Surface {
        self.actor.image()
    }

    pub fn is_off_screen(&self) -> bool {
        self.actor.is_off_screen()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LogSide {
    Top,
    Bottom,
}

/// Vertical placement shared by both logs of one spawn event. The
/// horizontal offset is drawn per log.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LogPairLayout {
    pub top_y: i32,
    /// Offset below the bottom screen edge.
    pub bottom_offset: i32,
    pub gap: i32,
}

impl LogPairLayout {
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            top_y: rng.gen_range(-250..=0),
            bottom_offset: rng.gen_range(0..=250),
            gap: rng.gen_range(250..=550),
        }
    }
}

/// Both orientations of one log artwork.
#[derive(Debug)]
pub struct LogVariant {
    pub bottom: Rc<SpriteSheet>,
    pub top: Rc<SpriteSheet>,
}

/// A log hanging from the top or standing on the bottom. Drifts left at
/// the scroll speed with no vertical motion.
#[derive(Clone, Debug)]
pub struct Log {
    pub side: LogSide,
    pub pos: Vec2,
    sheet: Rc<SpriteSheet>,
    speed: f32,
}

impl Log {
    pub fn spawn(
        side: LogSide,
        variant: &LogVariant,
        layout: LogPairLayout,
        config: &GameConfig,
        rng: &mut impl Rng,
    ) -> Self {
        let x = config.screen_width as i32 + rng.gen_range(20..=300);
        let (sheet, rect) = match side {
            LogSide::Top => {
                let (w, h) = variant.top.size();
                let rect = Rect::new(x, layout.top_y - layout.gap / 2, w, h);
                (variant.top.clone(), rect)
            }
            LogSide::Bottom => {
                let (w, h) = variant.bottom.size();
                let bottom = config.screen_height as i32 + layout.bottom_offset + layout.gap / 2;
                let rect = Rect::from_bottom_left(x, bottom, w, h);
                (variant.bottom.clone(), rect)
            }
        };
        Self {
            side,
            pos: Vec2::new(rect.x as f32, rect.y as f32),
            sheet,
            speed: config.log_speed(),
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.pos.x -= self.speed * dt;
    }

    pub fn rect(&self) -> Rect {
        let (w, h) = self.sheet.size();
        Rect::new(self.pos.x as i32, self.pos.y as i32, w, h)
    }

    pub fn mask(&self) -> &Mask {
        self.sheet.mask(0)
    }

    pub fn image(&self) -> &Surface {
        self.sheet.frame(0)
    }

    pub fn is_off_screen(&self) -> bool {
        is_off_screen_left(self.rect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use happybird_common::Color;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sheet(w: u32, h: u32) -> Rc<SpriteSheet> {
        Rc::new(SpriteSheet::new(vec![
            Surface::filled(w, h, Color::PINK),
            Surface::filled(w, h, Color::PINK),
        ]))
    }

    #[test]
    fn drifter_spawns_off_the_right_edge_within_ranges() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            let d = Drifter::spawn(sheet(50, 46), Wave::Sine, &config, &mut rng);
            let r = d.rect();
            assert!((480 + 120..=480 + 300).contains(&r.right()));
            assert!((150..=700).contains(&r.bottom()));
            assert!((300.0..=750.0).contains(&d.wave_amplitude));
            assert!((400.0..=600.0).contains(&d.speed_random));
            assert!(!d.is_off_screen());
        }
    }

    #[test]
    fn drifter_motion_uses_wave_of_global_clock() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(2);
        let mut pig = Drifter::spawn(sheet(10, 10), Wave::Sine, &config, &mut rng);
        let mut enemy = pig.clone();
        enemy.wave = Wave::Cosine;

        let (x0, y0) = (pig.actor.pos.x, pig.actor.pos.y);
        let clock_ms = 1234.0;
        pig.update(0.01, clock_ms);
        enemy.update(0.01, clock_ms);

        let dx = pig.speed_random * 0.01;
        let pig_dy = (12.34f64).sin() as f32 * pig.wave_amplitude * 0.01;
        let enemy_dy = (12.34f64).cos() as f32 * pig.wave_amplitude * 0.01;
        assert!((pig.actor.pos.x - (x0 - dx)).abs() < 1e-3);
        assert!((pig.actor.pos.y - (y0 + pig_dy)).abs() < 1e-3);
        assert!((enemy.actor.pos.y - (y0 + enemy_dy)).abs() < 1e-3);
    }

    #[test]
    fn drifters_spawned_apart_share_the_same_phase() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut a = Drifter::spawn(sheet(10, 10), Wave::Sine, &config, &mut rng);
        let mut b = a.clone();
        // `b` has lived longer, but only the global clock matters.
        for _ in 0..10 {
            b.update(0.016, 500.0);
        }
        let (ya, yb) = (a.actor.pos.y, b.actor.pos.y);
        a.update(0.016, 2000.0);
        b.update(0.016, 2000.0);
        assert!(((a.actor.pos.y - ya) - (b.actor.pos.y - yb)).abs() < 1e-4);
    }

    #[test]
    fn log_pair_shares_one_vertical_layout() {
        let config = GameConfig::default();
        let variant = LogVariant {
            bottom: sheet(100, 600),
            top: sheet(100, 600),
        };
        let layout = LogPairLayout {
            top_y: -100,
            bottom_offset: 50,
            gap: 301,
        };
        let mut rng = StdRng::seed_from_u64(3);
        let top = Log::spawn(LogSide::Top, &variant, layout, &config, &mut rng);
        let bottom = Log::spawn(LogSide::Bottom, &variant, layout, &config, &mut rng);

        assert_eq!(top.rect().y, -250);
        assert_eq!((top.rect().width, top.rect().height), (100, 600));
        assert_eq!(bottom.rect().bottom(), 800 + 50 + 150);
        for log in [&top, &bottom] {
            assert!((480 + 20..=480 + 300).contains(&log.rect().x));
        }
    }

    #[test]
    fn each_log_draws_its_own_horizontal_offset() {
        let config = GameConfig::default();
        let variant = LogVariant {
            bottom: sheet(100, 600),
            top: sheet(100, 600),
        };
        let mut rng = StdRng::seed_from_u64(8);
        let staggered = (0..50)
            .filter(|_| {
                let layout = LogPairLayout::random(&mut rng);
                let top = Log::spawn(LogSide::Top, &variant, layout, &config, &mut rng);
                let bottom = Log::spawn(LogSide::Bottom, &variant, layout, &config, &mut rng);
                top.rect().x != bottom.rect().x
            })
            .count();
        assert!(staggered > 40);
    }

    #[test]
    fn log_moves_left_at_scroll_speed_and_culls() {
        let config = GameConfig::default();
        let variant = LogVariant {
            bottom: sheet(100, 600),
            top: sheet(100, 600),
        };
        let mut rng = StdRng::seed_from_u64(4);
        let layout = LogPairLayout::random(&mut rng);
        let mut log = Log::spawn(LogSide::Bottom, &variant, layout, &config, &mut rng);
        let y = log.pos.y;
        let x = log.pos.x;
        log.update(0.5);
        assert_eq!(log.pos.x, x - 100.0);
        assert_eq!(log.pos.y, y);

        log.pos.x = -100.0;
        assert!(log.is_off_screen());
    }

    #[test]
    fn layout_ranges() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..500 {
            let l = LogPairLayout::random(&mut rng);
            assert!((-250..=0).contains(&l.top_y));
            assert!((0..=250).contains(&l.bottom_offset));
            assert!((250..=550).contains(&l.gap));
        }
    }
}
