use crate::math::Point3;
use crate::solid::Solid;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

/// Computes the axis-aligned bounding box of a solid.
pub struct BoundingBox<'a> {
    solid: &'a Solid,
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(solid: &'a Solid) -> Self {
        Self { solid }
    }

    /// Executes the query, returning the AABB.
    #[must_use]
    pub fn execute(&self) -> Aabb {
        let mut positions = self.solid.positions().iter();
        let first = positions.next().copied().unwrap_or_else(Point3::origin);
        positions.fold(Aabb { min: first, max: first }, |aabb, p| Aabb {
            min: aabb.min.inf(p),
            max: aabb.max.sup(p),
        })
    }
}
