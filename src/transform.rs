use crate::triangle::Triangle;
use crate::vec3::Vec3;

/// Object placement: Euler rotation about the local origin, then translation.
///
/// Rotation order is fixed: X first, then Y, then Z
/// (`p' = Rz * Ry * Rx * p + position`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    ihat: Vec3,
    jhat: Vec3,
    khat: Vec3,
}

fn transform_vector(ihat: Vec3, jhat: Vec3, khat: Vec3, v: Vec3) -> Vec3 {
    ihat * v.x + jhat * v.y + khat * v.z
}

fn rotate_xyz(v: Vec3, rotation: Vec3) -> Vec3 {
    v.rotate_x(rotation.x).rotate_y(rotation.y).rotate_z(rotation.z)
}

impl Transform {
    pub fn new(position: Vec3, rotation: Vec3) -> Self {
        Transform {
            position,
            rotation,
            ihat: rotate_xyz(Vec3::X, rotation),
            jhat: rotate_xyz(Vec3::Y, rotation),
            khat: rotate_xyz(Vec3::Z, rotation),
        }
    }

    pub fn to_world_point(&self, point: Vec3) -> Vec3 {
        transform_vector(self.ihat, self.jhat, self.khat, point) + self.position
    }

    pub fn apply(&self, triangle: &Triangle) -> Triangle {
        triangle.map_vertices(|v| self.to_world_point(v))
    }
}

/// Rotates (X, Y, Z order) then translates every vertex; colors pass through.
pub fn transform(triangle: &Triangle, position: Vec3, rotation: Vec3) -> Triangle {
    Transform::new(position, rotation).apply(triangle)
}
