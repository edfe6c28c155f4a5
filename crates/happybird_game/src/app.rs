use anyhow::Result;
use happybird_common::app::App;
use happybird_common::key::{Key, MouseButton};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::GameConfig;
use crate::frame::Frame;
use crate::game::Game;
use crate::score::FileScoreStore;
use crate::sprites::Sprites;
use crate::{SCREEN_SCALE, TITLE};

pub struct HappyBirdApp {
    pub game: Game,
    left_held: bool,
    right_held: bool,
    should_exit: bool,
}

impl HappyBirdApp {
    /// Loads sprites and the persisted best score from the paths in `config`.
    pub fn new(config: GameConfig) -> Result<Self> {
        let sprites = Sprites::load_or_placeholder(&config)?;
        let store = FileScoreStore::new(config.best_score_path.clone());
        let game = Game::new(config, sprites, Box::new(store), StdRng::from_entropy());
        Ok(Self::with_game(game))
    }

    pub fn with_game(game: Game) -> Self {
        Self {
            game,
            left_held: false,
            right_held: false,
            should_exit: false,
        }
    }
}

impl App for HappyBirdApp {
    fn init(&mut self) {
        log::info!("Happy Bird init");
    }

    fn update(&mut self, dt: f32, screen: &mut [u8]) {
        self.game.set_strafe(self.left_held, self.right_held);
        self.game.step(dt);

        let width = self.width() as usize;
        let height = self.height() as usize;
        let mut frame = Frame::new(screen, width, height);
        self.game.draw(&mut frame);
    }

    fn handle_key_event(&mut self, key: Key, is_down: bool) {
        match key {
            Key::A | Key::Left => self.left_held = is_down,
            Key::D | Key::Right => self.right_held = is_down,
            Key::Escape if is_down => self.should_exit = true,
            _ => {}
        }
    }

    fn handle_mouse_event(&mut self, button: MouseButton, is_down: bool) {
        if is_down {
            self.game.press(button);
        }
    }

    fn should_exit(&self) -> bool {
        self.should_exit
    }

    fn exit(&mut self) {
        log::info!("Happy Bird exit, best score {}", self.game.best_score());
    }

    fn width(&self) -> u32 {
        self.game.config().screen_width
    }

    fn height(&self) -> u32 {
        self.game.config().screen_height
    }

    fn scale(&self) -> u32 {
        SCREEN_SCALE
    }

    fn fps(&self) -> u32 {
        self.game.config().fps
    }

    fn title(&self) -> String {
        TITLE.to_string()
    }
}
