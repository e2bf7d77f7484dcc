use crate::math::Vector3;
use crate::solid::Solid;

/// Translates a solid by a displacement vector.
///
/// Normals are direction vectors and stay unchanged.
pub struct Translate {
    displacement: Vector3,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(displacement: Vector3) -> Self {
        Self { displacement }
    }

    /// Executes the translation, modifying the solid in-place.
    pub fn execute(&self, solid: &mut Solid) {
        for p in solid.positions_mut() {
            *p += self.displacement;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::MakePyramid;
    use crate::operations::query::BoundingBox;
    use approx::assert_relative_eq;

    #[test]
    fn translate_moves_bounding_box() {
        let mut solid = MakePyramid::new(0.5, 1.0).execute().unwrap();
        let normals = solid.face_normals().to_vec();

        Translate::new(Vector3::new(1.0, 2.0, 3.0)).execute(&mut solid);

        let aabb = BoundingBox::new(&solid).execute();
        assert_relative_eq!(aabb.min, Point3::new(0.5, 2.0, 2.5));
        assert_relative_eq!(aabb.max, Point3::new(1.5, 3.0, 3.5));
        assert_eq!(solid.face_normals(), normals.as_slice());
    }
}
