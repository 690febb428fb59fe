//! Small software rasterizer: perspective projection, barycentric scan
//! conversion with per-pixel depth resolution, and flat diffuse shading,
//! drawing into a pluggable [`surface::Surface`].

pub mod bounds;
pub mod camera;
pub mod color;
pub mod geometry;
pub mod mesh;
pub mod obj;
pub mod point2d;
pub mod raster;
pub mod renderer;
pub mod screen;
pub mod shading;
pub mod surface;
pub mod terminal;
pub mod transform;
pub mod triangle;
pub mod vec3;
#[cfg(feature = "window")]
pub mod window;

pub use camera::Camera;
pub use color::Color;
pub use mesh::Mesh;
pub use raster::Rasterizer;
pub use renderer::Renderer;
pub use shading::{Shading, Winding};
pub use surface::Surface;
pub use triangle::Triangle;
pub use vec3::Vec3;
