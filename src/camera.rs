use crate::point2d::Point2D;
use crate::triangle::Triangle;
use crate::vec3::Vec3;

/// Depths at or below this are treated as on/behind the eye when dividing.
pub const PROJECTION_EPSILON: f32 = 1e-4;

/// Pinhole camera at the origin looking down +z with +y up.
///
/// Projected triangles live in pixel units with y growing downward; `z`
/// keeps the view-space depth for depth resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub width: u32,
    pub height: u32,
    /// Vertical field of view, radians.
    pub fov: f32,
    /// Width over height of one output pixel (terminal cells are about 0.5).
    pub pixel_aspect: f32,
    focal_x: f32,
    focal_y: f32,
}

impl Camera {
    pub fn new(width: u32, height: u32, fov: f32, pixel_aspect: f32) -> Self {
        let focal_y = height as f32 * 0.5 / (fov * 0.5).tan();
        Camera {
            width,
            height,
            fov,
            pixel_aspect,
            focal_x: focal_y / pixel_aspect,
            focal_y,
        }
    }

    /// Perspective divide of one view-space point.
    ///
    /// Never divides by zero: vertices closer than [`PROJECTION_EPSILON`]
    /// divide by the epsilon instead and still land on some finite position.
    /// Their depth is kept so the rasterizer's near threshold rejects them.
    #[inline(always)]
    pub fn project_point(&self, point: Vec3) -> Vec3 {
        let inv_z = 1.0 / point.z.max(PROJECTION_EPSILON);
        Vec3 {
            x: (point.x * self.focal_x * inv_z).mul_add(1.0, self.width as f32 * 0.5),
            y: (-point.y * self.focal_y * inv_z).mul_add(1.0, self.height as f32 * 0.5),
            z: point.z,
        }
    }

    pub fn project(&self, triangle: &Triangle) -> Triangle {
        triangle.map_vertices(|v| self.project_point(v))
    }

    /// Screen-space sample point for a pixel: its center.
    #[inline(always)]
    pub fn pixel_to_world(x: i32, y: i32) -> Point2D {
        Point2D { x: x as f32 + 0.5, y: y as f32 + 0.5 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn camera() -> Camera {
        Camera::new(100, 50, 90f32.to_radians(), 1.0)
    }

    #[test]
    fn axis_projects_to_center() {
        let p = camera().project_point(Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(p, Vec3::new(50.0, 25.0, 3.0));
    }

    #[test]
    fn perspective_divide_shrinks_with_depth() {
        let cam = camera();
        // 90 degree fov: focal length is half the height.
        let near = cam.project_point(Vec3::new(1.0, 1.0, 1.0));
        let far = cam.project_point(Vec3::new(1.0, 1.0, 2.0));
        assert!((near.x - 75.0).abs() < 1e-3);
        assert!((near.y - 0.0).abs() < 1e-3);
        assert!((far.x - 62.5).abs() < 1e-3);
        assert!((far.y - 12.5).abs() < 1e-3);
    }

    #[test]
    fn pixel_aspect_widens_x() {
        let cam = Camera::new(100, 50, 90f32.to_radians(), 0.5);
        let p = cam.project_point(Vec3::new(0.5, 0.0, 1.0));
        assert!((p.x - 100.0).abs() < 1e-3);
    }

    #[test]
    fn zero_and_negative_depth_stay_finite() {
        let cam = camera();
        for z in [0.0, -0.0, -3.0, 1e-9] {
            let p = cam.project_point(Vec3::new(1.0, -1.0, z));
            assert!(p.x.is_finite() && p.y.is_finite(), "z = {z}: {p:?}");
            assert_eq!(p.z, z);
        }
    }

    #[test]
    fn project_keeps_colors() {
        let t = Triangle::new(
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(0.0, 1.0, 1.0),
            Color::new(9, 8, 7),
        );
        assert_eq!(camera().project(&t).colors, t.colors);
    }

    #[test]
    fn pixel_sample_is_center() {
        assert_eq!(Camera::pixel_to_world(0, 0), Point2D::new(0.5, 0.5));
        assert_eq!(Camera::pixel_to_world(-2, 3), Point2D::new(-1.5, 3.5));
    }
}
