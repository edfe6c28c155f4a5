use happybird_common::key::MouseButton;
use happybird_common::Color;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::arena::{Arena, EntityId, Groups};
use crate::bird::Bird;
use crate::config::GameConfig;
use crate::entity::{Entity, SpriteType};
use crate::font::Font;
use crate::frame::Frame;
use crate::obstacle::{Drifter, Log, LogPairLayout, LogSide, Wave};
use crate::rect::Rect;
use crate::score::{ScoreStore, Scoreboard};
use crate::scroller::ScrollingPair;
use crate::sprites::Sprites;
use crate::timer::IntervalTimer;

const FONT_SIZE: u32 = 28;
const TEXT_BOX_WIDTH: u32 = 350;
const TEXT_BOX_HEIGHT: u32 = 50;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Menu,
    Flying,
    Paused,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DeathCause {
    /// The bird touched the top, left or right screen edge.
    Boundary,
    Collision(SpriteType),
}

/// Owns every entity, the clock, timers and score, and drives one frame at
/// a time: input, then `step`, then `draw`.
pub struct Game {
    config: GameConfig,
    sprites: Sprites,
    font: Font,
    phase: Phase,
    arena: Arena<Entity>,
    /// The current (or last) flight's bird. Kept after death until the
    /// next flight replaces it.
    bird: Option<EntityId>,
    scoreboard: Scoreboard,
    spawn_timer: IntervalTimer,
    flash_timer: IntervalTimer,
    /// Milliseconds since the game started; drives obstacle bobbing.
    clock_ms: f64,
    rng: StdRng,
}

impl Game {
    pub fn new(
        config: GameConfig,
        sprites: Sprites,
        store: Box<dyn ScoreStore>,
        rng: StdRng,
    ) -> Self {
        let mut arena = Arena::new();
        let background = ScrollingPair::new(
            sprites.background.clone(),
            0,
            config.background_speed * config.scroll_damping,
        );
        arena.insert(Groups::BACKGROUND, Entity::Background(background));

        let ground_y = config.screen_height as i32 - sprites.ground.height() as i32;
        let ground = ScrollingPair::new(
            sprites.ground.clone(),
            ground_y,
            config.ground_speed * config.scroll_damping,
        );
        arena.insert(Groups::GROUND | Groups::COLLIDE, Entity::Ground(ground));

        let scoreboard = Scoreboard::new(store);
        info!("Best score so far: {}", scoreboard.best());

        Self {
            spawn_timer: IntervalTimer::repeating(config.spawn_interval_ms),
            flash_timer: IntervalTimer::one_shot(config.flash_duration_ms),
            config,
            sprites,
            font: Font::new(FONT_SIZE),
            phase: Phase::Menu,
            arena,
            bird: None,
            scoreboard,
            clock_ms: 0.0,
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True from the start of a flight until death, including while paused.
    pub fn is_flying(&self) -> bool {
        self.phase != Phase::Menu
    }

    pub fn score(&self) -> u32 {
        self.scoreboard.score()
    }

    pub fn best_score(&self) -> u32 {
        self.scoreboard.best()
    }

    /// Whether the "New High Score!" banner is showing.
    pub fn is_flash_active(&self) -> bool {
        self.flash_timer.is_armed()
    }

    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    pub fn arena(&self) -> &Arena<Entity> {
        &self.arena
    }

    pub fn bird(&self) -> Option<&Bird> {
        self.bird
            .and_then(|id| self.arena.get(id))
            .and_then(Entity::as_bird)
    }

    fn bird_mut(&mut self) -> Option<&mut Bird> {
        self.bird
            .and_then(|id| self.arena.get_mut(id))
            .and_then(Entity::as_bird_mut)
    }

    pub fn obstacle_count(&self) -> usize {
        self.arena.iter().filter(|(_, e)| e.is_obstacle()).count()
    }

    /// Pointer button press.
    pub fn press(&mut self, button: MouseButton) {
        match (button, self.phase) {
            (MouseButton::Primary, Phase::Menu) => self.start_flight(),
            (MouseButton::Primary, Phase::Flying) => {
                if let Some(bird) = self.bird_mut() {
                    bird.jump();
                }
            }
            (MouseButton::Secondary, Phase::Flying) => {
                debug!("Paused");
                self.phase = Phase::Paused;
            }
            (MouseButton::Secondary, Phase::Paused) => {
                debug!("Resumed");
                self.phase = Phase::Flying;
            }
            _ => {}
        }
    }

    /// Held strafe keys. Ignored unless flying and not paused.
    pub fn set_strafe(&mut self, left: bool, right: bool) {
        if self.phase != Phase::Flying {
            return;
        }
        if let Some(bird) = self.bird_mut() {
            bird.moving_left = left;
            bird.moving_right = right;
        }
    }

    fn start_flight(&mut self) {
        if let Some(old) = self.bird.take() {
            self.arena.remove(old);
        }
        self.scoreboard.reset_run();
        let bird = Bird::new(self.sprites.bird.clone(), &self.config);
        self.bird = Some(self.arena.insert(Groups::COLLIDE, Entity::Bird(bird)));
        self.spawn_timer.arm();
        self.phase = Phase::Flying;
        info!("Flight started, best score {}", self.scoreboard.best());
    }

    /// Clear every obstacle and return to the menu. The bird entity stays
    /// until the next flight replaces it.
    fn end_flight(&mut self, cause: DeathCause) {
        self.arena.retain(|_, e| !e.is_obstacle());
        self.spawn_timer.disarm();
        self.phase = Phase::Menu;
        info!(
            "Flight ended by {:?} with score {}",
            cause,
            self.scoreboard.score()
        );
    }

    /// Advance the game by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        self.clock_ms += dt as f64 * 1000.0;
        self.flash_timer.tick(dt);

        if self.phase != Phase::Flying {
            return;
        }

        if self.spawn_timer.tick(dt) {
            self.spawn_obstacles();
        }
        self.update_entities(dt);
        self.resolve_collisions();

        if self.scoreboard.sync_best() {
            info!("New best score: {}", self.scoreboard.best());
            if !self.flash_timer.is_armed() {
                self.flash_timer.arm();
            }
        }
    }

    fn spawn_obstacles(&mut self) {
        let pig = Drifter::spawn(
            self.sprites.pig.clone(),
            Wave::Sine,
            &self.config,
            &mut self.rng,
        );
        self.arena.insert(Groups::COLLIDE, Entity::Pig(pig));

        let enemy = Drifter::spawn(
            self.sprites.enemy.clone(),
            Wave::Cosine,
            &self.config,
            &mut self.rng,
        );
        self.arena.insert(Groups::COLLIDE, Entity::Enemy(enemy));

        let layout = LogPairLayout::random(&mut self.rng);
        for side in [LogSide::Bottom, LogSide::Top] {
            let Some(variant) = self.sprites.logs.choose(&mut self.rng) else {
                continue;
            };
            let log = Log::spawn(side, variant, layout, &self.config, &mut self.rng);
            self.arena.insert(Groups::COLLIDE, Entity::Log(log));
        }
        debug!("Spawned obstacles, {} entities live", self.arena.len());
    }

    fn update_entities(&mut self, dt: f32) {
        let clock_ms = self.clock_ms;
        let mut culled = Vec::new();
        for (id, entity) in self.arena.iter_mut() {
            if !entity.update(dt, clock_ms) {
                culled.push(id);
            }
        }
        for id in culled {
            self.arena.remove(id);
        }
    }

    /// Boundary check, then mask collisions in spawn order. The first lethal
    /// hit ends the flight; pigs before it are scored, pigs after it are not.
    fn resolve_collisions(&mut self) {
        let Some(bird_id) = self.bird else {
            return;
        };
        let Some(bird) = self.arena.get(bird_id).and_then(Entity::as_bird) else {
            return;
        };

        let rect = bird.rect();
        if rect.top() <= 0 || rect.left() <= 0 || rect.right() >= self.config.screen_width as i32
        {
            self.end_flight(DeathCause::Boundary);
            return;
        }

        let mask = bird.mask();
        let hits: Vec<(EntityId, SpriteType)> = self
            .arena
            .in_group(Groups::COLLIDE)
            .filter(|&(id, _)| id != bird_id)
            .filter(|(_, entity)| entity.overlaps(rect, mask))
            .filter_map(|(id, entity)| entity.sprite_type().map(|kind| (id, kind)))
            .collect();

        for (id, kind) in hits {
            if kind.is_lethal() {
                self.end_flight(DeathCause::Collision(kind));
                return;
            }
            if kind == SpriteType::Pig {
                self.arena.remove(id);
                self.scoreboard.add_point();
                debug!("Pig caught, score {}", self.scoreboard.score());
            }
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        match self.phase {
            Phase::Menu => self.draw_menu(frame),
            Phase::Flying => self.draw_world(frame),
            Phase::Paused => self.draw_pause(frame),
        }
    }

    fn draw_world(&self, frame: &mut Frame) {
        frame.fill(Color::SKY_BLUE);
        for (_, entity) in self.arena.in_group(Groups::BACKGROUND) {
            entity.draw(frame);
        }
        for (_, entity) in self.arena.in_group(Groups::GROUND) {
            entity.draw(frame);
        }
        for (_, entity) in self.arena.in_group(Groups::COLLIDE) {
            if !matches!(entity, Entity::Ground(_)) {
                entity.draw(frame);
            }
        }
        self.draw_score(frame);
    }

    fn draw_score(&self, frame: &mut Frame) {
        let score = self
            .font
            .render(&format!("Pig: {}", self.scoreboard.score()), Color::GREEN);
        frame.blit(&score, 20, 20);
        let best = self
            .font
            .render(&format!("High Score: {}", self.scoreboard.best()), Color::RED);
        frame.blit(&best, 20, 60);

        if self.is_flash_active() {
            let banner = self.font.render("New High Score!", Color::YELLOW);
            frame.blit(&banner, 20, 100);
        }
    }

    fn menu_origin(&self) -> (i32, i32) {
        let (w, h) = self.sprites.menu.size();
        let rect = Rect::from_center(
            self.config.screen_width as i32 / 2,
            self.config.screen_height as i32 / 2,
            w,
            h,
        );
        (rect.x, rect.y)
    }

    fn text_box_x(&self) -> i32 {
        self.config.screen_width as i32 / 2 - TEXT_BOX_WIDTH as i32 / 2
    }

    fn draw_menu(&self, frame: &mut Frame) {
        frame.fill(Color::SKY_BLUE);
        let (mx, my) = self.menu_origin();
        frame.blit(&self.sprites.menu, mx, my);

        let x = self.text_box_x();
        let mid_y = self.config.screen_height as i32 / 2;
        self.draw_text_box(frame, "New Game", x, mid_y + 200);
        let best = format!("High Score: {}", self.scoreboard.best());
        self.draw_text_box(frame, &best, x, mid_y + 300);
    }

    /// Drawn over whatever the last flying frame left in the buffer.
    fn draw_pause(&self, frame: &mut Frame) {
        let (mx, my) = self.menu_origin();
        frame.blit(&self.sprites.menu, mx, my);
        let mid_y = self.config.screen_height as i32 / 2;
        self.draw_text_box(frame, "Resume", self.text_box_x(), mid_y + 200);
    }

    fn draw_text_box(&self, frame: &mut Frame, text: &str, x: i32, y: i32) {
        frame.fill_rect(x, y, TEXT_BOX_WIDTH, TEXT_BOX_HEIGHT, Color::YELLOW);
        let text = self.font.render(text, Color::RED);
        let (cx, cy) = Rect::new(x, y, TEXT_BOX_WIDTH, TEXT_BOX_HEIGHT).center();
        let rect = Rect::from_center(cx, cy, text.width(), text.height());
        frame.blit(&text, rect.x, rect.y);
    }
}
