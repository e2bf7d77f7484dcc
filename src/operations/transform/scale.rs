use crate::error::Result;
use crate::math::require_positive;
use crate::solid::Solid;

/// Scales a solid uniformly about the origin.
///
/// Uniform positive scaling keeps every face direction, so normals are left
/// as they are. The lengths recorded in the solid's
/// [`SolidKind`](crate::solid::SolidKind) are scaled along with the positions.
pub struct Scale {
    factor: f32,
}

impl Scale {
    /// Creates a new `Scale` operation.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        Self { factor }
    }

    /// Executes the scaling, modifying the solid in-place.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidParameter`](crate::error::GeometryError::InvalidParameter)
    /// if the factor is not finite and positive. A negative factor would turn
    /// the solid inside out.
    pub fn execute(&self, solid: &mut Solid) -> Result<()> {
        require_positive("factor", self.factor)?;
        for p in solid.positions_mut() {
            p.coords *= self.factor;
        }
        let kind = solid.kind().scaled(self.factor);
        *solid.kind_mut() = kind;
        Ok(())
    }
}
