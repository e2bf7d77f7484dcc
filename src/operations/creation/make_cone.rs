use std::f32::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::{require_positive, Point2, Point3, Vector3};
use crate::solid::{Corner, Solid, SolidBuilder, SolidKind};

const DEFAULT_COLOR: [f32; 4] = [0.8, 0.8, 0.8, 1.0];

/// Fraction of the height below the apex treated as the apex region when
/// smoothing.
const APEX_REGION: f32 = 0.1;

const APEX: usize = 0;

/// Creates an open-bottomed cone centered at the origin along the Y axis.
///
/// The base ring lies at `y = -height / 2` and the apex at `y = height / 2`.
/// Each of the `radial_segments` sides is one triangle with its own three
/// slots; there is no base cap.
///
/// Smooth normals do not average faces. Slots in the apex region get
/// `(0, 1, 0)` and every other slot gets `normalize(x, radius / height, z)`
/// from its own position.
pub struct MakeCone {
    radius: f32,
    height: f32,
    radial_segments: u32,
    color: Option<[f32; 4]>,
}

impl MakeCone {
    /// Creates a new `MakeCone` operation.
    #[must_use]
    pub fn new(radius: f32, height: f32, radial_segments: u32) -> Self {
        Self {
            radius,
            height,
            radial_segments,
            color: None,
        }
    }

    /// Paints every face with `color`.
    #[must_use]
    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = Some(color);
        self
    }

    /// Executes the operation, returning the cone.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidParameter`] if the radius or height is
    /// not finite and positive, or if there are fewer than three segments.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<Solid> {
        require_positive("radius", self.radius)?;
        require_positive("height", self.height)?;
        if self.radial_segments < 3 {
            return Err(GeometryError::InvalidParameter {
                parameter: "radial_segments",
                value: f64::from(self.radial_segments),
                reason: "a cone needs at least 3 segments",
            }
            .into());
        }

        let n = self.radial_segments as usize;
        let half = self.height * 0.5;
        let step = TAU / n as f32;
        let apex = Point3::new(0.0, half, 0.0);
        let ring: Vec<Point3> = (0..n)
            .map(|i| {
                let angle = i as f32 * step;
                Point3::new(self.radius * angle.cos(), -half, self.radius * angle.sin())
            })
            .collect();
        let color = self.color.unwrap_or(DEFAULT_COLOR);

        let mut builder = SolidBuilder::with_triangles(n);
        for i in 0..n {
            let next = (i + 1) % n;
            let u0 = i as f32 / n as f32;
            let u1 = (i + 1) as f32 / n as f32;
            builder.triangle(
                i,
                [
                    Corner::new(APEX, apex, Point2::new((u0 + u1) * 0.5, 1.0)),
                    Corner::new(1 + next, ring[next], Point2::new(u1, 0.0)),
                    Corner::new(1 + i, ring[i], Point2::new(u0, 0.0)),
                ],
                color,
            );
        }

        let apex_threshold = half - APEX_REGION * self.height;
        // (x, r/h, z) scaled by h/r, so the normalized vector stays well away
        // from zero however small the cone is.
        let spread = self.height / self.radius;
        builder.build_analytic(
            SolidKind::Cone {
                radius: self.radius,
                height: self.height,
                radial_segments: self.radial_segments,
            },
            |p| {
                if p.y > apex_threshold {
                    return Ok(Vector3::y());
                }
                Ok(Vector3::new(p.x * spread, 1.0, p.z * spread).normalize())
            },
        )
    }
}

impl Default for MakeCone {
    fn default() -> Self {
        Self::new(0.5, 1.0, 32)
    }
}
