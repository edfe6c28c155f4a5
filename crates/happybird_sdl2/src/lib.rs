use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use typed_builder::TypedBuilder;

pub use happybird_common;
pub use happybird_common::app::App;
pub use sdl2;

use happybird_common::key::{Key, MouseButton};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    RGB24,
}

#[derive(TypedBuilder)]
pub struct SdlInitInfo {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
    pub title: String,
    #[builder(default = 60)]
    pub fps: u32,
    #[builder(default = PixelFormat::RGB24)]
    pub pixel_format: PixelFormat,
}

pub struct SdlContext;

impl SdlContext {
    pub fn run(sdl_init_info: SdlInitInfo, mut app: impl App) -> Result<()> {
        let SdlInitInfo {
            width,
            height,
            scale,
            title,
            fps,
            pixel_format,
        } = sdl_init_info;

        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
        let window = video_subsystem
            .window(&title, width * scale, height * scale)
            .position_centered()
            .build()?;
        let mut canvas = window.into_canvas().build()?;
        canvas
            .set_scale(scale as f32, scale as f32)
            .map_err(|e| anyhow!(e))?;

        let texture_creator = canvas.texture_creator();
        let mut texture = texture_creator.create_texture_streaming(
            map_pixel_format(pixel_format),
            width,
            height,
        )?;

        let color_size = map_pixel_format_size(pixel_format);
        let mut screen_state = vec![0u8; (width * color_size * height) as usize];

        app.init();
        let mut event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;

        let target_frame = Duration::from_secs_f64(1.0 / fps.max(1) as f64);
        let mut last_frame = Instant::now();

        loop {
            if app.should_exit() {
                app.exit();
                break;
            }

            let frame_start = Instant::now();
            let dt = frame_start.duration_since(last_frame).as_secs_f32();
            last_frame = frame_start;

            for event in event_pump.poll_iter() {
                match event {
                    Event::Quit { .. } => {
                        app.exit();
                        return Ok(());
                    }
                    Event::KeyDown {
                        keycode: Some(keycode),
                        repeat: false,
                        ..
                    } => {
                        app.handle_key_event(map_keycode(keycode), true);
                    }
                    Event::KeyUp {
                        keycode: Some(keycode),
                        ..
                    } => {
                        app.handle_key_event(map_keycode(keycode), false);
                    }
                    Event::MouseButtonDown { mouse_btn, .. } => {
                        app.handle_mouse_event(map_mouse_button(mouse_btn), true);
                    }
                    Event::MouseButtonUp { mouse_btn, .. } => {
                        app.handle_mouse_event(map_mouse_button(mouse_btn), false);
                    }
                    _ => {}
                }
            }

            app.update(dt, &mut screen_state);

            texture.update(None, &screen_state, (width * color_size) as usize)?;
            canvas.clear();
            canvas.copy(&texture, None, None).map_err(|e| anyhow!(e))?;
            canvas.present();

            let elapsed = frame_start.elapsed();
            if elapsed < target_frame {
                std::thread::sleep(target_frame - elapsed);
            } else {
                log::trace!("frame overran budget: {:?}", elapsed);
            }
        }

        Ok(())
    }
}

pub fn map_pixel_format(pixel_format: PixelFormat) -> PixelFormatEnum {
    match pixel_format {
        PixelFormat::RGB24 => PixelFormatEnum::RGB24,
    }
}

pub fn map_pixel_format_size(pixel_format: PixelFormat) -> u32 {
    match pixel_format {
        PixelFormat::RGB24 => 3,
    }
}

pub fn map_keycode(keycode: Keycode) -> Key {
    match keycode {
        Keycode::A => Key::A,
        Keycode::D => Key::D,
        Keycode::Left => Key::Left,
        Keycode::Right => Key::Right,
        Keycode::Escape => Key::Escape,
        _ => Key::None,
    }
}

pub fn map_mouse_button(button: sdl2::mouse::MouseButton) -> MouseButton {
    match button {
        sdl2::mouse::MouseButton::Left => MouseButton::Primary,
        sdl2::mouse::MouseButton::Right => MouseButton::Secondary,
        _ => MouseButton::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strafe_keys_map_to_game_keys() {
        assert_eq!(map_keycode(Keycode::A), Key::A);
        assert_eq!(map_keycode(Keycode::D), Key::D);
        assert_eq!(map_keycode(Keycode::Q), Key::None);
    }

    #[test]
    fn mouse_buttons_map_to_primary_and_secondary() {
        assert_eq!(
            map_mouse_button(sdl2::mouse::MouseButton::Left),
            MouseButton::Primary
        );
        assert_eq!(
            map_mouse_button(sdl2::mouse::MouseButton::Right),
            MouseButton::Secondary
        );
        assert_eq!(
            map_mouse_button(sdl2::mouse::MouseButton::Middle),
            MouseButton::Other
        );
    }

    #[test]
    fn init_info_defaults_to_rgb24_at_sixty_fps() {
        let info = SdlInitInfo::builder()
            .width(480)
            .height(800)
            .scale(1)
            .title("Happy Bird".to_string())
            .build();
        assert_eq!(info.fps, 60);
        assert_eq!(info.pixel_format, PixelFormat::RGB24);
        assert_eq!(map_pixel_format_size(info.pixel_format), 3);
    }
}
