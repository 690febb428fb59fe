use anyhow::{Result, anyhow};
use raylib::prelude::*;

use crate::color::Color;
use crate::screen::Framebuffer;
use crate::surface::Surface;

/// Desktop window showing a [`Framebuffer`] scaled up to the window size.
pub struct WindowSurface {
    screen: Framebuffer,
    texture: Texture2D,
    r1: RaylibHandle,
    thread: RaylibThread,
}

impl WindowSurface {
    pub fn new(width: u32, height: u32, scale: u32, title: &str) -> Result<Self> {
        let scale = scale.max(1);
        let (mut r1, thread) = raylib::init()
            .size((width * scale) as i32, (height * scale) as i32)
            .title(title)
            .resizable()
            .build();
        r1.set_target_fps(60);

        let image = Image::gen_image_color(width as i32, height as i32, raylib::prelude::Color::BLACK);
        let texture = r1
            .load_texture_from_image(&thread, &image)
            .map_err(|e| anyhow!("failed to create framebuffer texture: {e}"))?;

        Ok(Self { screen: Framebuffer::new(width, height), texture, r1, thread })
    }
}

impl Surface for WindowSurface {
    fn width(&self) -> u32 {
        self.screen.width
    }

    fn height(&self) -> u32 {
        self.screen.height
    }

    fn clear(&mut self) {
        self.screen.fill(0, 0, 0, 255);
    }

    fn set_pixel(&mut self, color: Color, x: i32, y: i32) {
        self.screen.set_pixel(color, x, y);
    }

    fn present(&mut self) -> Result<()> {
        self.texture
            .update_texture(&self.screen.rgba)
            .map_err(|e| anyhow!("failed to upload frame: {e}"))?;
        let window_width = self.r1.get_screen_width();
        let window_height = self.r1.get_screen_height();

        let mut d = self.r1.begin_drawing(&self.thread);
        d.clear_background(raylib::prelude::Color::BLACK);
        d.draw_texture_pro(
            &self.texture,
            Rectangle { x: 0.0, y: 0.0, width: self.screen.width as f32, height: self.screen.height as f32 },
            Rectangle { x: 0.0, y: 0.0, width: window_width as f32, height: window_height as f32 },
            Vector2 { x: 0.0, y: 0.0 },
            0.0,
            raylib::prelude::Color::WHITE,
        );
        Ok(())
    }

    fn poll_quit(&mut self) -> bool {
        self.r1.window_should_close() || self.r1.is_key_pressed(KeyboardKey::KEY_ESCAPE)
    }
}
