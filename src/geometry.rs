use crate::color::{Color, to_channel};
use crate::point2d::{Point2D, dot2, perp};
use crate::vec3::{Vec3, dot3};

/// Triangles with less screen area than this cover nothing.
pub const DEGENERATE_AREA: f32 = 1e-8;

#[inline(always)]
fn xy(v: Vec3) -> Point2D {
    Point2D { x: v.x, y: v.y }
}

/// Half the 2D cross product of `t1 -> t2` and `t1 -> p`. The sign tells
/// which side of the edge `p` is on.
#[inline(always)]
pub fn signed_triangle_area(t1: Point2D, t2: Point2D, p: Point2D) -> f32 {
    let ap = p - t1;
    let t1t2perp: Point2D = perp(t2 - t1);
    dot2(ap, t1t2perp) / 2.0
}

/// `signed_triangle_area(from, to, p)` computed with the endpoints sorted by
/// `(y, x)`, so `edge_value(b, c, p) == -edge_value(c, b, p)` bit for bit.
#[inline(always)]
fn edge_value(from: Point2D, to: Point2D, p: Point2D) -> f32 {
    if (from.y, from.x) <= (to.y, to.x) {
        signed_triangle_area(from, to, p)
    } else {
        -signed_triangle_area(to, from, p)
    }
}

/// Barycentric weights of `p` against the screen positions of `v0, v1, v2`
/// (depth is ignored), or `None` when `p` misses the triangle.
///
/// Edges are closed: a sample exactly on an edge is inside. Each edge value is
/// evaluated with its endpoints in a fixed order, so two triangles sharing an
/// edge see exactly opposite values there and at least one of them covers
/// every sample on it; the depth test picks between them. Weights are ratios
/// of signed areas and work for either winding. Degenerate and non-finite
/// input misses.
#[inline(always)]
pub fn barycentric(v0: Vec3, v1: Vec3, v2: Vec3, p: Point2D) -> Option<Vec3> {
    let (a, b, c) = (xy(v0), xy(v1), xy(v2));
    let area = signed_triangle_area(a, b, c);
    if !(area.abs() > DEGENERATE_AREA) {
        return None;
    }
    let inv_area = 1.0 / area;
    let weights = Vec3 {
        x: edge_value(b, c, p) * inv_area,
        y: edge_value(c, a, p) * inv_area,
        z: edge_value(a, b, p) * inv_area,
    };
    // Written so NaN fails the test.
    if weights.x >= 0.0 && weights.y >= 0.0 && weights.z >= 0.0 {
        Some(weights)
    } else {
        None
    }
}

/// Screen-space (affine) interpolation of vertex depth.
#[inline(always)]
pub fn interpolate_depth(v0: Vec3, v1: Vec3, v2: Vec3, weights: Vec3) -> f32 {
    dot3(Vec3 { x: v0.z, y: v1.z, z: v2.z }, weights)
}

/// Per-channel weighted sum, rounded and clamped to a byte.
#[inline(always)]
pub fn interpolate_color(c0: Color, c1: Color, c2: Color, weights: Vec3) -> Color {
    let channel = |a: u8, b: u8, c: u8| {
        to_channel(dot3(Vec3 { x: a as f32, y: b as f32, z: c as f32 }, weights))
    };
    Color {
        r: channel(c0.r, c1.r, c2.r),
        g: channel(c0.g, c1.g, c2.g),
        b: channel(c0.b, c1.b, c2.b),
    }
}
