use std::time::Instant;

use log::debug;

use crate::mesh::Mesh;
use crate::raster::Rasterizer;
use crate::shading::Shading;
use crate::surface::Surface;
use crate::triangle::Triangle;
use crate::vec3::Vec3;

/// Places meshes in the world and hands them to the [`Rasterizer`].
///
/// `render_mesh*` resolve depth within one mesh only; a later call overwrites
/// whatever it covers. `render_scene` puts every mesh of the frame into one
/// batch so meshes occlude each other correctly.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    pub rasterizer: Rasterizer,
    pub shading: Shading,
}

impl Renderer {
    pub fn new(rasterizer: Rasterizer, shading: Shading) -> Self {
        Renderer { rasterizer, shading }
    }

    /// Returns pixels written.
    pub fn render_mesh(&self, mesh: &Mesh, surface: &mut dyn Surface) -> usize {
        if mesh.is_empty() {
            return 0;
        }
        let triangles: Vec<Triangle> = mesh.world_triangles().collect();
        self.rasterizer.rasterize(&triangles, surface)
    }

    /// Like [`Renderer::render_mesh`], flat shading each triangle first.
    pub fn render_mesh_shaded(&self, mesh: &Mesh, light: Vec3, surface: &mut dyn Surface) -> usize {
        if mesh.is_empty() {
            return 0;
        }
        let triangles: Vec<Triangle> = mesh
            .world_triangles()
            .map(|t| self.shading.shade(&t, light))
            .collect();
        self.rasterizer.rasterize(&triangles, surface)
    }

    /// One rasterize call for all meshes. Unshaded when `light` is `None`.
    pub fn render_scene(&self, meshes: &[Mesh], light: Option<Vec3>, surface: &mut dyn Surface) -> usize {
        let transform_start = Instant::now();
        let mut batch: Vec<Triangle> = Vec::with_capacity(meshes.iter().map(Mesh::triangle_count).sum());
        for mesh in meshes {
            match light {
                Some(light) => batch.extend(mesh.world_triangles().map(|t| self.shading.shade(&t, light))),
                None => batch.extend(mesh.world_triangles()),
            }
        }
        if batch.is_empty() {
            return 0;
        }
        let transform_time = transform_start.elapsed();

        let raster_start = Instant::now();
        let written = self.rasterizer.rasterize(&batch, surface);
        debug!(
            "{} triangles, {} pixels, transform {:.2?}, raster {:.2?}",
            batch.len(),
            written,
            transform_time,
            raster_start.elapsed()
        );
        written
    }
}
