use std::io::{self, Stdout, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};

use crate::color::Color;
use crate::surface::Surface;

/// Dark to bright.
const GRAYSCALE: &[u8] = b"`.-':_,^=;><+!rc*/z?sLTv)J7(|Fi{C}fI31tlu[neoZ5Yxjya]2ESwqkP6h9d4VpOGbUAKXHm8RD#$Bg0MNWQ%&@";

/// Luminance mapped to the end of the ramp. Full white stops at index 39.
const LUMA_SCALE: f32 = 600.0;

const CLEAR: &str = "\x1b[2J";
const HOME: &str = "\x1b[H";
const HIDE_CURSOR: &str = "\x1b[?25l";
const SHOW_CURSOR: &str = "\x1b[?25h";

/// ASCII art renderer: one character cell per pixel.
pub struct TerminalSurface<W: Write = Stdout> {
    width: u32,
    height: u32,
    cells: Vec<u8>,
    out: W,
    quit: Arc<AtomicBool>,
}

impl TerminalSurface<Stdout> {
    /// Draws to stdout. Ctrl-C and SIGTERM raise the quit flag instead of
    /// killing the process, so the loop can stop and restore the cursor.
    pub fn stdout(width: u32, height: u32) -> Result<Self> {
        let surface = Self::new(width, height, io::stdout())?;
        let quit = surface.quit_flag();
        ctrlc::set_handler(move || quit.store(true, Ordering::SeqCst))
            .context("failed to install Ctrl-C handler")?;
        Ok(surface)
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(width: u32, height: u32, mut out: W) -> Result<Self> {
        write!(out, "{HIDE_CURSOR}{CLEAR}").context("failed to initialise terminal")?;
        out.flush()?;
        Ok(Self {
            width,
            height,
            cells: vec![b' '; width as usize * height as usize],
            out,
            quit: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Flag read by `poll_quit`; setting it ends the render loop.
    pub fn quit_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.quit)
    }

    /// Rows of the current frame.
    pub fn rows(&self) -> impl Iterator<Item = &str> {
        self.cells
            .chunks(self.width.max(1) as usize)
            .map(|row| std::str::from_utf8(row).unwrap_or_default())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Ramp character for a color.
pub fn shade_char(color: Color) -> u8 {
    let index = (color.luminance() / LUMA_SCALE * GRAYSCALE.len() as f32).round() as usize;
    GRAYSCALE[index.min(GRAYSCALE.len() - 1)]
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) {
        self.cells.fill(b' ');
    }

    fn set_pixel(&mut self, color: Color, x: i32, y: i32) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        self.cells[y as usize * self.width as usize + x as usize] = shade_char(color);
    }

    fn present(&mut self) -> Result<()> {
        let mut frame = String::with_capacity(self.cells.len() + self.height as usize + HOME.len());
        frame.push_str(HOME);
        for row in self.rows() {
            frame.push_str(row);
            frame.push('\n');
        }
        self.out.write_all(frame.as_bytes()).context("failed to write frame")?;
        self.out.flush()?;
        Ok(())
    }

    fn poll_quit(&mut self) -> bool {
        self.quit.load(Ordering::SeqCst)
    }

    fn shutdown(&mut self) -> Result<()> {
        write!(self.out, "{SHOW_CURSOR}")?;
        self.out.flush()?;
        Ok(())
    }
}
