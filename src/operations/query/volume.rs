use crate::error::{GeometryError, Result};
use crate::solid::{Solid, SolidKind};

/// Computes the enclosed volume of a closed solid.
///
/// Sums the signed tetrahedra `(1/6) * v0 . (v1 x v2)` over all triangles.
/// The sign is kept, so an outward-wound solid yields a positive value and
/// an inverted one a negative value.
pub struct Volume<'a> {
    solid: &'a Solid,
}

impl<'a> Volume<'a> {
    /// Creates a new `Volume` query.
    #[must_use]
    pub fn new(solid: &'a Solid) -> Self {
        Self { solid }
    }

    /// Executes the query, returning the signed volume.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] for cones, whose base is open.
    pub fn execute(&self) -> Result<f32> {
        if matches!(self.solid.kind(), SolidKind::Cone { .. }) {
            return Err(GeometryError::Degenerate("open cone encloses no volume".into()).into());
        }

        let positions = self.solid.positions();
        let mut signed_volume = 0.0;
        for tri in self.solid.indices() {
            let v0 = positions[tri[0] as usize].coords;
            let v1 = positions[tri[1] as usize].coords;
            let v2 = positions[tri[2] as usize].coords;
            signed_volume += v0.dot(&v1.cross(&v2));
        }

        Ok(signed_volume / 6.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::{MakeCone, MakeOctahedron, MakePyramid};
    use approx::assert_relative_eq;

    #[test]
    fn pyramid_volume() {
        let solid = MakePyramid::new(1.0, 3.0).execute().unwrap();
        // (1/3) * base area * height = (1/3) * 4 * 3
        assert_relative_eq!(Volume::new(&solid).execute().unwrap(), 4.0, epsilon = 1e-5);
    }

    #[test]
    fn octahedron_volume() {
        let solid = MakeOctahedron::new().execute().unwrap();
        // sqrt(2) / 3 for unit edge length.
        let expected = 2.0_f32.sqrt() / 3.0;
        assert_relative_eq!(Volume::new(&solid).execute().unwrap(), expected, epsilon = 1e-5);
    }

    #[test]
    fn open_cone_has_no_volume() {
        let solid = MakeCone::default().execute().unwrap();
        assert!(Volume::new(&solid).execute().is_err());
    }
}
