use crate::error::{GeometryError, Result};

/// 2D point type, used for texture coordinates.
pub type Point2 = nalgebra::Point2<f32>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f32>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f32>;

/// Global geometric tolerance for degeneracy checks.
///
/// Triangle degeneracy compares the sine of the corner angle against this
/// value, so it holds at any scale.
pub const TOLERANCE: f32 = 1e-6;

/// Allowed deviation from unit length for generated normals.
pub const UNIT_TOLERANCE: f32 = 1e-5;

/// Unnormalized geometric normal of the triangle `(p0, p1, p2)`.
///
/// Points toward the side from which the triangle appears counter-clockwise.
#[must_use]
pub fn triangle_cross(p0: &Point3, p1: &Point3, p2: &Point3) -> Vector3 {
    (p1 - p0).cross(&(p2 - p0))
}

/// Unit normal of the triangle `(p0, p1, p2)`.
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`] if the triangle has (near) zero
/// area relative to the lengths of its edges.
pub fn triangle_normal(p0: &Point3, p1: &Point3, p2: &Point3) -> Result<Vector3> {
    let e1 = p1 - p0;
    let e2 = p2 - p0;
    let cross = e1.cross(&e2);
    let length = cross.norm();
    if length <= TOLERANCE * e1.norm() * e2.norm() {
        return Err(GeometryError::Degenerate("triangle has zero area".into()).into());
    }
    Ok(cross / length)
}

/// Centroid of the triangle `(p0, p1, p2)`.
#[must_use]
pub fn triangle_centroid(p0: &Point3, p1: &Point3, p2: &Point3) -> Point3 {
    Point3::from((p0.coords + p1.coords + p2.coords) / 3.0)
}

/// Rejects lengths that are not finite and strictly positive.
pub(crate) fn require_positive(parameter: &'static str, value: f32) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(GeometryError::invalid(parameter, value, "must be finite and positive").into());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ccw_triangle_in_xz_plane_faces_down() {
        let n = triangle_normal(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 0.0, 0.0),
            &Point3::new(1.0, 0.0, 1.0),
        )
        .unwrap();
        assert_relative_eq!(n, -Vector3::y());
    }

    #[test]
    fn collinear_triangle_is_degenerate() {
        let result = triangle_normal(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1.0, 0.0, 0.0),
            &Point3::new(2.0, 0.0, 0.0),
        );
        assert!(result.is_err());
    }

    #[test]
    fn tiny_triangle_still_has_a_normal() {
        let n = triangle_normal(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(1e-4, 0.0, 0.0),
            &Point3::new(1e-4, 0.0, 1e-4),
        )
        .unwrap();
        assert_relative_eq!(n, -Vector3::y());
    }

    #[test]
    fn sliver_is_degenerate_at_any_scale() {
        for scale in [1e-4, 1.0, 1e4] {
            let result = triangle_normal(
                &Point3::new(0.0, 0.0, 0.0),
                &Point3::new(scale, 0.0, 0.0),
                &Point3::new(2.0 * scale, 1e-9 * scale, 0.0),
            );
            assert!(result.is_err(), "scale {scale}");
        }
    }

    #[test]
    fn centroid_averages_corners() {
        let c = triangle_centroid(
            &Point3::new(0.0, 0.0, 0.0),
            &Point3::new(3.0, 0.0, 0.0),
            &Point3::new(0.0, 3.0, 0.0),
        );
        assert_relative_eq!(c, Point3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn require_positive_rejects_zero_negative_and_nan() {
        assert!(require_positive("x", 1.0).is_ok());
        assert!(require_positive("x", 0.0).is_err());
        assert!(require_positive("x", -2.0).is_err());
        assert!(require_positive("x", f32::NAN).is_err());
        assert!(require_positive("x", f32::INFINITY).is_err());
    }
}
