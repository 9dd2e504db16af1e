use super::{Point3, Vector3};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Creates a bounding box from explicit corners.
    #[must_use]
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Computes the bounding box of a set of points.
    ///
    /// Returns `None` when the set is empty.
    #[must_use]
    pub fn from_points(points: &[Point3]) -> Option<Self> {
        let first = *points.first()?;
        let mut min = first;
        let mut max = first;
        for p in &points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }
        Some(Self { min, max })
    }

    /// Returns the size of the box along each axis.
    #[must_use]
    pub fn extent(&self) -> Vector3 {
        self.max - self.min
    }

    /// Returns the center of the box.
    #[must_use]
    pub fn center(&self) -> Point3 {
        self.min + self.extent() * 0.5
    }
}
