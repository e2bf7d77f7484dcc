use crate::error::Result;
use crate::math::{require_positive, Point2, Point3};
use crate::solid::{Corner, Solid, SolidBuilder, SolidKind};

const BASE_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
const SIDE_COLORS: [[f32; 4]; 4] = [
    [1.0, 1.0, 0.0, 1.0],
    [1.0, 0.0, 0.0, 1.0],
    [0.0, 1.0, 1.0, 1.0],
    [1.0, 0.0, 1.0, 1.0],
];

const APEX: usize = 4;

/// Creates a square pyramid standing on the `y = 0` plane.
///
/// The base is the square `[-w, w] x [-w, w]` in XZ, split into two
/// triangles; the apex sits at `(0, apex_height, 0)`. Six triangles, eighteen
/// vertex slots.
pub struct MakePyramid {
    base_half_width: f32,
    apex_height: f32,
    color: Option<[f32; 4]>,
}

impl MakePyramid {
    /// Creates a new `MakePyramid` operation.
    #[must_use]
    pub fn new(base_half_width: f32, apex_height: f32) -> Self {
        Self {
            base_half_width,
            apex_height,
            color: None,
        }
    }

    /// Paints every face with one color instead of the per-face palette.
    #[must_use]
    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = Some(color);
        self
    }

    /// Executes the operation, returning the pyramid.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidParameter`](crate::error::GeometryError::InvalidParameter)
    /// if either dimension is not finite and positive.
    pub fn execute(&self) -> Result<Solid> {
        require_positive("base_half_width", self.base_half_width)?;
        require_positive("apex_height", self.apex_height)?;

        let w = self.base_half_width;
        let base = [
            Point3::new(-w, 0.0, -w),
            Point3::new(w, 0.0, -w),
            Point3::new(w, 0.0, w),
            Point3::new(-w, 0.0, w),
        ];
        let apex = Point3::new(0.0, self.apex_height, 0.0);
        let uv = Point2::new;

        let mut builder = SolidBuilder::with_triangles(6);

        // Base quad, seen counter-clockwise from below.
        let base_color = self.color.unwrap_or(BASE_COLOR);
        builder.triangle(
            0,
            [
                Corner::new(0, base[0], uv(0.0, 0.0)),
                Corner::new(1, base[1], uv(1.0, 0.0)),
                Corner::new(2, base[2], uv(1.0, 1.0)),
            ],
            base_color,
        );
        builder.triangle(
            0,
            [
                Corner::new(2, base[2], uv(1.0, 1.0)),
                Corner::new(3, base[3], uv(0.0, 1.0)),
                Corner::new(0, base[0], uv(0.0, 0.0)),
            ],
            base_color,
        );

        // Sides walk the base edges so that (a, b, apex) winds outward.
        for (side, (a, b)) in [(3, 2), (2, 1), (1, 0), (0, 3)].into_iter().enumerate() {
            builder.triangle(
                side + 1,
                [
                    Corner::new(a, base[a], uv(0.0, 0.0)),
                    Corner::new(b, base[b], uv(1.0, 0.0)),
                    Corner::new(APEX, apex, uv(0.5, 1.0)),
                ],
                self.color.unwrap_or(SIDE_COLORS[side]),
            );
        }

        builder.build(SolidKind::Pyramid {
            base_half_width: self.base_half_width,
            apex_height: self.apex_height,
        })
    }
}

impl Default for MakePyramid {
    fn default() -> Self {
        Self::new(0.5, 1.0)
    }
}
