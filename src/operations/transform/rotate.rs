use nalgebra::{Rotation3, Unit};

use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};
use crate::solid::Solid;

/// Rotates a solid around an axis.
///
/// Positions rotate about the axis line; both normal sets and the active
/// snapshot rotate with them.
pub struct Rotate {
    axis_origin: Point3,
    axis_direction: Vector3,
    angle: f32,
}

impl Rotate {
    /// Creates a new `Rotate` operation.
    ///
    /// * `angle` - Rotation angle in radians.
    #[must_use]
    pub fn new(axis_origin: Point3, axis_direction: Vector3, angle: f32) -> Self {
        Self {
            axis_origin,
            axis_direction,
            angle,
        }
    }

    /// Executes the rotation, modifying the solid in-place.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ZeroVector`] if the axis direction is zero-length.
    pub fn execute(&self, solid: &mut Solid) -> Result<()> {
        let axis = Unit::try_new(self.axis_direction, TOLERANCE).ok_or(GeometryError::ZeroVector)?;
        let rotation = Rotation3::from_axis_angle(&axis, self.angle);

        for p in solid.positions_mut() {
            *p = self.axis_origin + rotation * (*p - self.axis_origin);
        }
        solid.map_normals(|n| rotation * n);
        Ok(())
    }
}
