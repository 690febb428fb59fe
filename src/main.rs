mod config;

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use tri_raster::obj::load_mesh;
use tri_raster::screen::Framebuffer;
use tri_raster::terminal::TerminalSurface;
use tri_raster::{Camera, Color, Mesh, Rasterizer, Renderer, Surface, Vec3};

use crate::config::{Args, Backend};

/// Base colors handed out to meshes in load order.
const PALETTE: [Color; 2] = [Color::new(255, 125, 50), Color::new(255, 255, 255)];

fn load_scene(args: &Args) -> Result<Vec<Mesh>> {
    let mut meshes = Vec::new();
    if args.meshes.is_empty() {
        meshes.push(Mesh::cube(PALETTE[0], args.shading().winding));
    }
    for (i, path) in args.meshes.iter().enumerate() {
        let mesh = load_mesh(path, PALETTE[i % PALETTE.len()])
            .with_context(|| format!("failed to load mesh {}", path.display()))?;
        info!("loaded {} ({} triangles)", path.display(), mesh.triangle_count());
        meshes.push(mesh);
    }

    // Spread meshes out along x in front of the camera.
    let count = meshes.len() as f32;
    for (i, mesh) in meshes.iter_mut().enumerate() {
        mesh.position = Vec3::new(2.0 * i as f32 - (count - 1.0), 0.0, args.distance);
    }
    Ok(meshes)
}

/// Per-frame motion: even meshes yaw and rock, odd ones tumble.
fn animate(meshes: &mut [Mesh], t: f32) {
    for (i, mesh) in meshes.iter_mut().enumerate() {
        if i % 2 == 0 {
            mesh.rotation.y += 0.02;
            mesh.rotation.x = 0.5 * (0.75 * t).sin();
        } else {
            mesh.rotation += Vec3::new(0.03, 0.0, 0.02);
        }
    }
}

fn open_surface(args: &Args, width: u32, height: u32) -> Result<Box<dyn Surface>> {
    match args.backend {
        Backend::Terminal => Ok(Box::new(TerminalSurface::stdout(width, height)?)),
        #[cfg(feature = "window")]
        Backend::Window => Ok(Box::new(tri_raster::window::WindowSurface::new(
            width,
            height,
            args.scale,
            "Triangle Rasterizer",
        )?)),
        #[cfg(not(feature = "window"))]
        Backend::Window => anyhow::bail!("built without the `window` feature"),
    }
}

fn draw(renderer: &Renderer, args: &Args, meshes: &[Mesh], surface: &mut dyn Surface) {
    if args.per_mesh {
        for mesh in meshes {
            match args.light() {
                Some(light) => renderer.render_mesh_shaded(mesh, light, surface),
                None => renderer.render_mesh(mesh, surface),
            };
        }
    } else {
        renderer.render_scene(meshes, args.light(), surface);
    }
}

fn run(args: &Args, renderer: &Renderer, meshes: &mut [Mesh], surface: &mut dyn Surface) -> Result<()> {
    let mut frame: u64 = 0;
    let mut t = 0.0f32;
    while args.frames == 0 || frame < args.frames {
        if surface.poll_quit() {
            info!("quit requested after {frame} frames");
            break;
        }
        surface.clear();
        draw(renderer, args, meshes, surface);
        animate(meshes, t);
        surface.present()?;

        if args.frame_delay_ms > 0 {
            thread::sleep(Duration::from_millis(args.frame_delay_ms));
        }
        frame += 1;
        t += 0.01;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    args.validate()?;

    let (width, height) = args.resolution();
    let camera = Camera::new(width, height, args.fov.to_radians(), args.pixel_aspect());
    let renderer = Renderer::new(Rasterizer::new(camera), args.shading());
    let mut meshes = load_scene(&args)?;

    if let Some(path) = &args.snapshot {
        info!("rendering {width}x{height} snapshot to {}", path.display());
        let mut screen = Framebuffer::new(width, height);
        let frames = args.frames.max(1);
        for frame in 0..frames {
            screen.clear();
            draw(&renderer, &args, &meshes, &mut screen);
            animate(&mut meshes, frame as f32 * 0.01);
        }
        return screen.save_png(path);
    }

    info!("{:?} backend at {width}x{height}", args.backend);
    let mut surface = open_surface(&args, width, height)?;
    let result = run(&args, &renderer, &mut meshes, surface.as_mut());
    surface.shutdown()?;
    result
}
