use crate::color::Color;
use crate::vec3::Vec3;

/// Three vertices with a color each; `vertices[i]` pairs with `colors[i]`.
///
/// The same type carries object, world and screen space triangles. After
/// projection `x`/`y` are pixels and `z` keeps the view depth.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    pub vertices: [Vec3; 3],
    pub colors: [Color; 3],
}

impl Triangle {
    /// Uniformly colored triangle.
    pub fn new(a: Vec3, b: Vec3, c: Vec3, color: Color) -> Self {
        Triangle { vertices: [a, b, c], colors: [color; 3] }
    }

    pub fn with_colors(vertices: [Vec3; 3], colors: [Color; 3]) -> Self {
        Triangle { vertices, colors }
    }

    /// Same colors, new positions.
    pub fn map_vertices(&self, f: impl FnMut(Vec3) -> Vec3) -> Triangle {
        Triangle { vertices: self.vertices.map(f), colors: self.colors }
    }

    pub fn map_colors(&self, f: impl FnMut(Color) -> Color) -> Triangle {
        Triangle { vertices: self.vertices, colors: self.colors.map(f) }
    }
}
