use crate::color::Color;
use crate::shading::Winding;
use crate::transform::Transform;
use crate::triangle::Triangle;
use crate::vec3::{Vec3, cross, dot3};

/// Object-space triangles plus the placement the animation loop mutates.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
    pub position: Vec3,
    /// Euler angles, radians, applied X then Y then Z.
    pub rotation: Vec3,
}

impl Mesh {
    pub fn new(triangles: Vec<Triangle>) -> Self {
        Mesh { triangles, position: Vec3::ZERO, rotation: Vec3::ZERO }
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn transform(&self) -> Transform {
        Transform::new(self.position, self.rotation)
    }

    /// Fresh world-space copies; the stored triangles are left alone.
    pub fn world_triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        let transform = self.transform();
        self.triangles.iter().map(move |t| transform.apply(t))
    }

    /// Unit cube centred on the origin, every face front-facing from outside
    /// under `winding`.
    pub fn cube(color: Color, winding: Winding) -> Self {
        let h = 0.5;
        let mut triangles = Vec::with_capacity(12);
        for axis in [Vec3::X, Vec3::Y, Vec3::Z] {
            // Two in-plane directions spanning the face.
            let (u, v) = (Vec3::new(axis.y, axis.z, axis.x), Vec3::new(axis.z, axis.x, axis.y));
            for outward in [axis, -axis] {
                let center = outward * h;
                let mut quad = [
                    center - u * h - v * h,
                    center + u * h - v * h,
                    center + u * h + v * h,
                    center - u * h + v * h,
                ];
                // Clockwise fronts have their cross product pointing at the viewer.
                let facing = dot3(cross(quad[1] - quad[0], quad[2] - quad[0]), outward) > 0.0;
                if facing != (winding == Winding::Clockwise) {
                    quad.reverse();
                }
                triangles.push(Triangle::new(quad[0], quad[1], quad[2], color));
                triangles.push(Triangle::new(quad[0], quad[2], quad[3], color));
            }
        }
        Mesh::new(triangles)
    }
}
