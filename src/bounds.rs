use crate::triangle::Triangle;

/// Inclusive integer pixel box around a projected triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriangleBounds {
    pub xmin: i32,
    pub xmax: i32,
    pub ymin: i32,
    pub ymax: i32,
}

impl TriangleBounds {
    /// Floors the minimum and ceils the maximum so every covered sample is inside.
    pub fn of(projected: &Triangle) -> Self {
        let [a, b, c] = projected.vertices;
        TriangleBounds {
            xmin: a.x.min(b.x).min(c.x).floor() as i32,
            xmax: a.x.max(b.x).max(c.x).ceil() as i32,
            ymin: a.y.min(b.y).min(c.y).floor() as i32,
            ymax: a.y.max(b.y).max(c.y).ceil() as i32,
        }
    }

    pub fn union(self, other: TriangleBounds) -> Self {
        TriangleBounds {
            xmin: self.xmin.min(other.xmin),
            xmax: self.xmax.max(other.xmax),
            ymin: self.ymin.min(other.ymin),
            ymax: self.ymax.max(other.ymax),
        }
    }

    /// Union over a batch, `None` for an empty one.
    pub fn union_all(bounds: &[TriangleBounds]) -> Option<Self> {
        bounds.iter().copied().reduce(TriangleBounds::union)
    }

    #[inline(always)]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.xmin && x <= self.xmax && y >= self.ymin && y <= self.ymax
    }

    /// Intersection with a `width` x `height` screen, `None` when they don't overlap.
    pub fn clamp_to(self, width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        let clamped = TriangleBounds {
            xmin: self.xmin.max(0),
            xmax: self.xmax.min(width as i32 - 1),
            ymin: self.ymin.max(0),
            ymax: self.ymax.min(height as i32 - 1),
        };
        (clamped.xmin <= clamped.xmax && clamped.ymin <= clamped.ymax).then_some(clamped)
    }
}
