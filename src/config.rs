use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};

use tri_raster::{Shading, Vec3, Winding};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// ASCII art on stdout.
    Terminal,
    /// Desktop window (needs the `window` feature).
    Window,
}

/// Spinning meshes drawn by a tiny software rasterizer.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Wavefront OBJ files to render. A cube is shown when none are given.
    pub meshes: Vec<PathBuf>,

    #[arg(long, value_enum, default_value_t = Backend::Terminal)]
    pub backend: Backend,

    /// Horizontal resolution in pixels (terminal: 125, window: 200).
    #[arg(long)]
    pub width: Option<u32>,

    /// Vertical resolution in pixels (terminal: 62, window: 200).
    #[arg(long)]
    pub height: Option<u32>,

    /// Window magnification.
    #[arg(long, default_value_t = 4)]
    pub scale: u32,

    /// Vertical field of view, degrees.
    #[arg(long, default_value_t = 60.0)]
    pub fov: f32,

    /// Width over height of one output pixel (terminal: 0.5, otherwise 1.0).
    #[arg(long)]
    pub pixel_aspect: Option<f32>,

    #[arg(long, default_value_t = 0.5)]
    pub ambient: f32,

    #[arg(long, default_value_t = 0.5)]
    pub diffuse: f32,

    /// Direction toward the light, `x,y,z`.
    #[arg(long, default_value_t = Vec3::new(10.0, 10.0, 0.0), allow_hyphen_values = true)]
    pub light: Vec3,

    /// Front faces are counter-clockwise instead of clockwise.
    #[arg(long)]
    pub ccw: bool,

    /// Skip shading and draw base colors.
    #[arg(long)]
    pub flat: bool,

    /// Distance of the meshes from the camera.
    #[arg(long, default_value_t = 5.0)]
    pub distance: f32,

    /// Stop after this many frames; 0 runs until quit.
    #[arg(long, default_value_t = 0)]
    pub frames: u64,

    /// Pause after presenting each frame.
    #[arg(long, default_value_t = 0)]
    pub frame_delay_ms: u64,

    /// Render headless and save the last frame as PNG.
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// One rasterize call per mesh; later meshes overwrite earlier ones.
    #[arg(long)]
    pub per_mesh: bool,
}

impl Args {
    pub fn resolution(&self) -> (u32, u32) {
        let (w, h) = match self.backend {
            Backend::Terminal if self.snapshot.is_none() => (125, 62),
            _ => (200, 200),
        };
        (self.width.unwrap_or(w), self.height.unwrap_or(h))
    }

    pub fn pixel_aspect(&self) -> f32 {
        self.pixel_aspect.unwrap_or(match self.backend {
            Backend::Terminal if self.snapshot.is_none() => 0.5,
            _ => 1.0,
        })
    }

    /// Rejects settings that would give a non-finite camera or a frame
    /// buffer too large to address.
    pub fn validate(&self) -> Result<()> {
        let (width, height) = self.resolution();
        if width == 0 || height == 0 {
            bail!("resolution must be non-zero, got {width}x{height}");
        }
        let cells = (width as usize).checked_mul(height as usize);
        if cells.and_then(|c| c.checked_mul(4)).is_none_or(|bytes| bytes > isize::MAX as usize) {
            bail!("resolution {width}x{height} is too large");
        }
        if self.backend == Backend::Window && self.snapshot.is_none() {
            let scaled = |side: u32| side.checked_mul(self.scale.max(1)).is_some_and(|s| s <= i32::MAX as u32);
            if !scaled(width) || !scaled(height) {
                bail!("window of {width}x{height} at scale {} is too large", self.scale);
            }
        }
        if !(self.fov.is_finite() && self.fov > 0.0 && self.fov < 180.0) {
            bail!("field of view must be between 0 and 180 degrees, got {}", self.fov);
        }
        let aspect = self.pixel_aspect();
        if !(aspect.is_finite() && aspect > 0.0) {
            bail!("pixel aspect must be positive, got {aspect}");
        }
        Ok(())
    }

    pub fn shading(&self) -> Shading {
        Shading {
            ambient: self.ambient,
            diffuse: self.diffuse,
            winding: if self.ccw { Winding::CounterClockwise } else { Winding::Clockwise },
        }
    }

    pub fn light(&self) -> Option<Vec3> {
        (!self.flat).then_some(self.light)
    }
}
