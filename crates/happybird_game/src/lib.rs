pub mod actor;
pub mod app;
pub mod arena;
pub mod bird;
pub mod config;
pub mod entity;
pub mod font;
pub mod frame;
pub mod game;
pub mod mask;
pub mod obstacle;
pub mod rect;
pub mod score;
pub mod scroller;
pub mod sprites;
pub mod surface;
pub mod timer;

pub use app::HappyBirdApp;
pub use config::GameConfig;
pub use game::{Game, Phase};

/// Window title shown by the frontend.
pub const TITLE: &str = "Happy Bird";
/// Integer window scaling factor for the SDL2 frontend.
pub const SCREEN_SCALE: u32 = 1;
