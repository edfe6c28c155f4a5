use crate::key::{Key, MouseButton};

/// A frame-driven application hosted by a frontend.
///
/// The frontend owns the window and the event queue. Each frame it forwards
/// input, then calls `update` with the wall-clock seconds elapsed since the
/// previous frame and an RGB24 buffer of `width * height * 3` bytes.
pub trait App {
    fn init(&mut self);
    fn update(&mut self, dt: f32, screen: &mut [u8]);
    fn handle_key_event(&mut self, key: Key, is_down: bool);
    fn handle_mouse_event(&mut self, button: MouseButton, is_down: bool);
    fn should_exit(&self) -> bool;
    fn exit(&mut self);

    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn scale(&self) -> u32;
    fn fps(&self) -> u32;
    fn title(&self) -> String;
}
