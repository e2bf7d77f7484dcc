use crate::solid::Solid;

/// Computes the total surface area of a solid by summing its triangle areas.
pub struct Area<'a> {
    solid: &'a Solid,
}

impl<'a> Area<'a> {
    /// Creates a new `Area` query.
    #[must_use]
    pub fn new(solid: &'a Solid) -> Self {
        Self { solid }
    }

    /// Executes the query, returning the total surface area.
    #[must_use]
    pub fn execute(&self) -> f32 {
        let positions = self.solid.positions();

        let mut total_area = 0.0;
        for tri in self.solid.indices() {
            let v0 = positions[tri[0] as usize];
            let v1 = positions[tri[1] as usize];
            let v2 = positions[tri[2] as usize];

            let edge1 = v1 - v0;
            let edge2 = v2 - v0;
            total_area += edge1.cross(&edge2).norm() * 0.5;
        }

        total_area
    }
}
