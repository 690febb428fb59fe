use log::trace;

use crate::bounds::TriangleBounds;
use crate::camera::Camera;
use crate::color::Color;
use crate::geometry::{barycentric, interpolate_color, interpolate_depth};
use crate::surface::Surface;
use crate::triangle::Triangle;

/// Fragments at or in front of this depth never win a pixel.
pub const NEAR_THRESHOLD: f32 = 0.1;

/// Closest surviving sample for one pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fragment {
    pub color: Color,
    pub depth: f32,
}

/// Scan converter for one batch of triangles.
///
/// Depth is resolved only among the triangles of a single call; there is no
/// depth buffer kept between calls, so separate calls compose by overwrite.
#[derive(Debug, Clone, Copy)]
pub struct Rasterizer {
    pub camera: Camera,
}

impl Rasterizer {
    pub fn new(camera: Camera) -> Self {
        Rasterizer { camera }
    }

    /// Projects view-space triangles and draws them. Returns pixels written.
    pub fn rasterize(&self, triangles: &[Triangle], surface: &mut dyn Surface) -> usize {
        let projected: Vec<Triangle> = triangles.iter().map(|t| self.camera.project(t)).collect();
        self.rasterize_projected(&projected, surface)
    }

    /// Draws triangles already in screen space. Returns pixels written.
    pub fn rasterize_projected(&self, projected: &[Triangle], surface: &mut dyn Surface) -> usize {
        let bounds: Vec<TriangleBounds> = projected.iter().map(TriangleBounds::of).collect();
        let Some(scan) = TriangleBounds::union_all(&bounds)
            .and_then(|b| b.clamp_to(surface.width(), surface.height()))
        else {
            return 0;
        };
        trace!("rasterizing {} triangles over {:?}", projected.len(), scan);

        let mut written = 0;
        for y in scan.ymin..=scan.ymax {
            for x in scan.xmin..=scan.xmax {
                if let Some(fragment) = resolve_pixel(projected, &bounds, x, y) {
                    surface.set_pixel(fragment.color, x, y);
                    written += 1;
                }
            }
        }
        written
    }
}

/// Nearest fragment at pixel `(x, y)` in front of [`NEAR_THRESHOLD`].
///
/// Equal depths keep the earlier triangle.
pub fn resolve_pixel(projected: &[Triangle], bounds: &[TriangleBounds], x: i32, y: i32) -> Option<Fragment> {
    let p = Camera::pixel_to_world(x, y);
    let mut closest: Option<Fragment> = None;
    for (tri, bb) in projected.iter().zip(bounds) {
        if !bb.contains(x, y) {
            continue;
        }
        let [v0, v1, v2] = tri.vertices;
        let Some(weights) = barycentric(v0, v1, v2, p) else {
            continue;
        };
        let depth = interpolate_depth(v0, v1, v2, weights);
        let closest_depth = closest.map_or(f32::INFINITY, |f| f.depth);
        if depth < closest_depth && depth > NEAR_THRESHOLD {
            let [c0, c1, c2] = tri.colors;
            closest = Some(Fragment { color: interpolate_color(c0, c1, c2, weights), depth });
        }
    }
    closest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::Framebuffer;
    use crate::vec3::Vec3;

    const RED: Color = Color::new(255, 0, 0);
    const GREEN: Color = Color::new(0, 255, 0);
    const BLUE: Color = Color::new(0, 0, 255);

    fn rasterizer(width: u32, height: u32) -> Rasterizer {
        Rasterizer::new(Camera::new(width, height, 60f32.to_radians(), 1.0))
    }

    // Screen-space triangle at a constant depth.
    fn flat(points: [(f32, f32); 3], depth: f32, color: Color) -> Triangle {
        let [a, b, c] = points.map(|(x, y)| Vec3::new(x, y, depth));
        Triangle::new(a, b, c, color)
    }

    fn covering(depth: f32, color: Color) -> Triangle {
        flat([(-1.0, -1.0), (6.0, -1.0), (-1.0, 6.0)], depth, color)
    }

    #[test]
    fn single_triangle_fills_its_hull() {
        let mut fb = Framebuffer::new(4, 4);
        let written = rasterizer(4, 4)
            .rasterize_projected(&[flat([(0.0, 0.0), (2.0, 0.0), (0.0, 2.0)], 1.0, RED)], &mut fb);

        for (x, y) in [(0, 0), (1, 0), (0, 1)] {
            assert_eq!(fb.pixel(x, y), Some(RED), "pixel ({x}, {y})");
        }
        assert_eq!(fb.pixel(2, 2), None);
        assert_eq!(fb.pixel(1, 1), None);
        assert_eq!(written, 3);
    }

    #[test]
    fn nearest_wins_regardless_of_order() {
        for batch in [
            [covering(2.0, BLUE), covering(1.0, GREEN)],
            [covering(1.0, GREEN), covering(2.0, BLUE)],
        ] {
            let mut fb = Framebuffer::new(2, 2);
            rasterizer(2, 2).rasterize_projected(&batch, &mut fb);
            for y in 0..2 {
                for x in 0..2 {
                    assert_eq!(fb.pixel(x, y), Some(GREEN));
                }
            }
        }
    }

    #[test]
    fn behind_near_threshold_never_draws() {
        let mut fb = Framebuffer::new(4, 4);
        let r = rasterizer(4, 4);
        for depth in [0.09, 0.05, 0.0, -1.0] {
            assert_eq!(r.rasterize_projected(&[covering(depth, RED)], &mut fb), 0);
        }
        assert!((0..4).all(|y| (0..4).all(|x| fb.pixel(x, y).is_none())));
    }

    #[test]
    fn near_triangle_loses_to_valid_one_behind() {
        let mut fb = Framebuffer::new(2, 2);
        rasterizer(2, 2).rasterize_projected(&[covering(3.0, BLUE), covering(0.05, RED)], &mut fb);
        assert_eq!(fb.pixel(0, 0), Some(BLUE));
    }

    #[test]
    fn black_triangles_still_draw() {
        let mut fb = Framebuffer::new(2, 2);
        let written = rasterizer(2, 2).rasterize_projected(&[covering(1.0, Color::BLACK)], &mut fb);
        assert_eq!(written, 4);
        assert_eq!(fb.pixel(1, 1), Some(Color::BLACK));
    }

    #[test]
    fn quad_split_on_diagonal_has_no_seam() {
        // Pixel centres sit exactly on the first diagonal; the second one is skewed.
        let quads = [
            [(0.0, 0.0), (8.0, 0.0), (8.0, 8.0), (0.0, 8.0)],
            [(-0.3, -0.7), (9.1, -0.2), (8.6, 9.4), (-0.9, 8.3)],
        ];
        for [p0, p1, p2, p3] in quads {
            let halves = [flat([p0, p1, p2], 1.0, RED), flat([p0, p2, p3], 1.0, BLUE)];
            let mut fb = Framebuffer::new(8, 8);
            assert_eq!(rasterizer(8, 8).rasterize_projected(&halves, &mut fb), 64);
            for i in 0..8 {
                assert!(fb.pixel(i, i).is_some(), "diagonal pixel ({i}, {i})");
            }
        }
    }

    #[test]
    fn equal_depth_keeps_first() {
        let mut fb = Framebuffer::new(2, 2);
        rasterizer(2, 2).rasterize_projected(&[covering(1.0, RED), covering(1.0, BLUE)], &mut fb);
        assert_eq!(fb.pixel(0, 0), Some(RED));
    }

    #[test]
    fn interpolates_vertex_colors() {
        let tri = Triangle::with_colors(
            [Vec3::new(0.0, 0.0, 1.0), Vec3::new(40.0, 0.0, 1.0), Vec3::new(0.0, 40.0, 1.0)],
            [RED, GREEN, BLUE],
        );
        let mut fb = Framebuffer::new(40, 40);
        rasterizer(40, 40).rasterize_projected(&[tri], &mut fb);
        let near_red = fb.pixel(0, 0).unwrap();
        let near_green = fb.pixel(38, 0).unwrap();
        assert!(near_red.r > 240 && near_red.g < 10);
        assert!(near_green.g > 220 && near_green.r < 30);
    }

    #[test]
    fn interpolated_depth_picks_per_pixel_winner() {
        // Two crossing slopes: left half nearer for `a`, right half for `b`.
        let a = Triangle::with_colors(
            [Vec3::new(-2.0, -2.0, 1.0), Vec3::new(12.0, -2.0, 3.0), Vec3::new(-2.0, 12.0, 1.0)],
            [RED; 3],
        );
        let b = Triangle::with_colors(
            [Vec3::new(-2.0, -2.0, 3.0), Vec3::new(12.0, -2.0, 1.0), Vec3::new(-2.0, 12.0, 3.0)],
            [BLUE; 3],
        );
        let mut fb = Framebuffer::new(8, 2);
        rasterizer(8, 2).rasterize_projected(&[a, b], &mut fb);
        assert_eq!(fb.pixel(0, 0), Some(RED));
        assert_eq!(fb.pixel(7, 0), Some(BLUE));
    }

    #[test]
    fn offscreen_batch_scans_nothing() {
        let mut fb = Framebuffer::new(4, 4);
        let tri = flat([(100.0, 100.0), (110.0, 100.0), (100.0, 110.0)], 1.0, RED);
        assert_eq!(rasterizer(4, 4).rasterize_projected(&[tri], &mut fb), 0);
        assert_eq!(rasterizer(4, 4).rasterize_projected(&[], &mut fb), 0);
    }

    #[test]
    fn rasterize_projects_view_space() {
        // Camera-facing triangle straight ahead covers the screen center.
        let tri = Triangle::new(
            Vec3::new(0.0, 1.0, 3.0),
            Vec3::new(1.0, -1.0, 3.0),
            Vec3::new(-1.0, -1.0, 3.0),
            GREEN,
        );
        let mut fb = Framebuffer::new(20, 20);
        let written = rasterizer(20, 20).rasterize(&[tri], &mut fb);
        assert!(written > 0);
        assert_eq!(fb.pixel(10, 10), Some(GREEN));
        assert_eq!(fb.pixel(0, 0), None);
    }
}
