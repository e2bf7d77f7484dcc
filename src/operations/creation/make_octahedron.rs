use std::f32::consts::FRAC_1_SQRT_2;

use crate::error::Result;
use crate::math::{Point2, Point3};
use crate::solid::{Corner, Solid, SolidBuilder, SolidKind};

const TOP: usize = 0;
const BOTTOM: usize = 5;
const WHITE: [f32; 4] = [1.0; 4];

/// Creates a regular octahedron with unit edge length centered at the origin.
///
/// Apices lie on the Y axis at `±1/√2`; the equatorial ring is the square
/// `(±0.5, 0, ±0.5)`. Eight triangles, twenty-four vertex slots. Scale it with
/// [`Scale`](crate::operations::transform::Scale) if another size is needed.
#[derive(Default)]
pub struct MakeOctahedron {
    color: Option<[f32; 4]>,
}

impl MakeOctahedron {
    /// Creates a new `MakeOctahedron` operation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Paints every face with `color`.
    #[must_use]
    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = Some(color);
        self
    }

    /// Executes the operation, returning the octahedron.
    ///
    /// # Errors
    ///
    /// Returns an error only if a face turns out degenerate, which fixed
    /// coordinates rule out.
    pub fn execute(&self) -> Result<Solid> {
        let top = Point3::new(0.0, FRAC_1_SQRT_2, 0.0);
        let bottom = Point3::new(0.0, -FRAC_1_SQRT_2, 0.0);
        let ring = [
            Point3::new(-0.5, 0.0, 0.5),
            Point3::new(0.5, 0.0, 0.5),
            Point3::new(0.5, 0.0, -0.5),
            Point3::new(-0.5, 0.0, -0.5),
        ];
        let color = self.color.unwrap_or(WHITE);
        let uv = Point2::new;
        let ring_corner = |i: usize, u: f32| Corner::new(1 + i, ring[i], uv(u, 0.0));

        let mut builder = SolidBuilder::with_triangles(8);

        for i in 0..4 {
            let next = (i + 1) % 4;
            builder.triangle(
                i,
                [
                    Corner::new(TOP, top, uv(0.5, 1.0)),
                    ring_corner(i, 0.0),
                    ring_corner(next, 1.0),
                ],
                color,
            );
        }
        for i in 0..4 {
            let next = (i + 1) % 4;
            builder.triangle(
                4 + i,
                [
                    Corner::new(BOTTOM, bottom, uv(0.5, 1.0)),
                    ring_corner(next, 0.0),
                    ring_corner(i, 1.0),
                ],
                color,
            );
        }

        builder.build(SolidKind::Octahedron { edge_length: 1.0 })
    }
}
