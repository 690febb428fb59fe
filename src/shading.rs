use crate::triangle::Triangle;
use crate::vec3::{Vec3, cross, dot3, normalize};

/// Vertex order of front faces as seen from the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Winding {
    #[default]
    Clockwise,
    CounterClockwise,
}

/// Flat diffuse lighting: `ambient + diffuse * max(0, n . l)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shading {
    pub ambient: f32,
    pub diffuse: f32,
    pub winding: Winding,
}

impl Default for Shading {
    fn default() -> Self {
        Shading { ambient: 0.5, diffuse: 0.5, winding: Winding::Clockwise }
    }
}

impl Shading {
    /// Unit face normal pointing out of the front face.
    ///
    /// Zero for degenerate triangles.
    pub fn face_normal(&self, triangle: &Triangle) -> Vec3 {
        let [a, b, c] = triangle.vertices;
        let normal = normalize(cross(b - a, c - a));
        match self.winding {
            Winding::Clockwise => normal,
            Winding::CounterClockwise => -normal,
        }
    }

    /// `light_direction` points from the surface toward the light.
    pub fn brightness(&self, triangle: &Triangle, light_direction: Vec3) -> f32 {
        let lambert = dot3(self.face_normal(triangle), normalize(light_direction));
        self.ambient + self.diffuse * lambert.max(0.0)
    }

    /// Scales all three vertex colors by the triangle's brightness.
    pub fn shade(&self, triangle: &Triangle, light_direction: Vec3) -> Triangle {
        let brightness = self.brightness(triangle, light_direction);
        triangle.map_colors(|c| c.scale(brightness))
    }
}
