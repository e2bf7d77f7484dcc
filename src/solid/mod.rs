mod builder;

pub(crate) use builder::{Corner, SolidBuilder};
#[cfg(test)]
pub(crate) use builder::geometric_normal;

use crate::math::{Point2, Point3, Vector3};
use crate::shading::{NormalMode, NormalSwitch};
use crate::topology::AdjacencyMap;

/// The family a solid belongs to, together with its shape parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolidKind {
    /// Square pyramid standing on the `y = 0` plane.
    Pyramid {
        base_half_width: f32,
        apex_height: f32,
    },
    /// Regular octahedron centered at the origin.
    Octahedron { edge_length: f32 },
    /// Open-bottomed cone centered at the origin along the Y axis.
    Cone {
        radius: f32,
        height: f32,
        radial_segments: u32,
    },
}

impl SolidKind {
    /// Whether smooth normals come from averaging adjacent face normals.
    ///
    /// Cones use an analytic slope formula instead.
    #[must_use]
    pub fn smooths_by_face_average(&self) -> bool {
        !matches!(self, Self::Cone { .. })
    }

    /// The same kind with every length multiplied by `factor`.
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        match self {
            Self::Pyramid {
                base_half_width,
                apex_height,
            } => Self::Pyramid {
                base_half_width: base_half_width * factor,
                apex_height: apex_height * factor,
            },
            Self::Octahedron { edge_length } => Self::Octahedron {
                edge_length: edge_length * factor,
            },
            Self::Cone {
                radius,
                height,
                radial_segments,
            } => Self::Cone {
                radius: radius * factor,
                height: height * factor,
                radial_segments,
            },
        }
    }
}

/// A generated solid: per-slot attribute arrays, triangle indices, corner
/// adjacency, and the active normal selection.
///
/// All arrays have one entry per vertex slot. Every triangle owns its three
/// slots, so [`Solid::indices`] is `[0, 1, 2], [3, 4, 5], ...`.
#[derive(Debug, Clone)]
pub struct Solid {
    kind: SolidKind,
    positions: Vec<Point3>,
    face_normals: Vec<Vector3>,
    vertex_normals: Vec<Vector3>,
    tex_coords: Vec<Point2>,
    colors: Vec<[f32; 4]>,
    indices: Vec<[u32; 3]>,
    adjacency: AdjacencyMap,
    normals: NormalSwitch,
}

impl Solid {
    /// Returns the kind and shape parameters.
    #[must_use]
    pub fn kind(&self) -> SolidKind {
        self.kind
    }

    /// Vertex slot positions.
    #[must_use]
    pub fn positions(&self) -> &[Point3] {
        &self.positions
    }

    /// Flat normals: constant across the three slots of each triangle.
    #[must_use]
    pub fn face_normals(&self) -> &[Vector3] {
        &self.face_normals
    }

    /// Smooth normals: shared by every slot of a logical corner.
    #[must_use]
    pub fn vertex_normals(&self) -> &[Vector3] {
        &self.vertex_normals
    }

    /// Texture coordinates.
    #[must_use]
    pub fn tex_coords(&self) -> &[Point2] {
        &self.tex_coords
    }

    /// RGBA vertex colors.
    #[must_use]
    pub fn colors(&self) -> &[[f32; 4]] {
        &self.colors
    }

    /// Triangle list, counter-clockwise when seen from outside.
    #[must_use]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// Slot groups for each logical corner.
    #[must_use]
    pub fn adjacency(&self) -> &AdjacencyMap {
        &self.adjacency
    }

    /// Number of vertex slots.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Returns the precomputed normal set for `mode`.
    #[must_use]
    pub fn normals_for(&self, mode: NormalMode) -> &[Vector3] {
        match mode {
            NormalMode::Flat => &self.face_normals,
            NormalMode::Smooth => &self.vertex_normals,
        }
    }

    /// Copies the normal set for `mode` into the active snapshot.
    ///
    /// Any buffer built from [`Solid::active_normals`] is stale afterwards and
    /// must be re-uploaded by the caller.
    pub fn set_normal_mode(&mut self, mode: NormalMode) {
        self.normals.select(mode, &self.face_normals, &self.vertex_normals);
    }

    /// Switches to the other normal mode and returns it.
    pub fn toggle_normal_mode(&mut self) -> NormalMode {
        let mode = self.normals.mode().toggled();
        self.set_normal_mode(mode);
        mode
    }

    /// The last selected normal mode; [`NormalMode::Flat`] after construction.
    #[must_use]
    pub fn normal_mode(&self) -> NormalMode {
        self.normals.mode()
    }

    /// The normal snapshot currently exposed to rendering.
    #[must_use]
    pub fn active_normals(&self) -> &[Vector3] {
        self.normals.active()
    }

    pub(crate) fn kind_mut(&mut self) -> &mut SolidKind {
        &mut self.kind
    }

    pub(crate) fn positions_mut(&mut self) -> &mut [Point3] {
        &mut self.positions
    }

    /// Applies `f` to every stored normal: both precomputed sets and the
    /// active snapshot.
    pub(crate) fn map_normals(&mut self, f: impl Fn(&Vector3) -> Vector3) {
        for n in self
            .face_normals
            .iter_mut()
            .chain(self.vertex_normals.iter_mut())
            .chain(self.normals.active_mut().iter_mut())
        {
            *n = f(n);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::{MakeCone, MakeOctahedron, MakePyramid};

    fn all_solids() -> Vec<Solid> {
        vec![
            MakePyramid::default().execute().unwrap(),
            MakeOctahedron::new().execute().unwrap(),
            MakeCone::default().execute().unwrap(),
        ]
    }

    #[test]
    fn array_lengths_agree() {
        for solid in all_solids() {
            let n = solid.vertex_count();
            assert_eq!(solid.face_normals().len(), n);
            assert_eq!(solid.vertex_normals().len(), n);
            assert_eq!(solid.tex_coords().len(), n);
            assert_eq!(solid.colors().len(), n);
            assert_eq!(solid.active_normals().len(), n);
            assert_eq!(solid.triangle_count() * 3, n);
        }
    }

    #[test]
    fn starts_flat() {
        for solid in all_solids() {
            assert_eq!(solid.normal_mode(), NormalMode::Flat);
            assert_eq!(solid.active_normals(), solid.face_normals());
        }
    }

    #[test]
    fn smooth_mode_exposes_vertex_normals() {
        for mut solid in all_solids() {
            solid.set_normal_mode(NormalMode::Smooth);
            assert_eq!(solid.normal_mode(), NormalMode::Smooth);
            assert_eq!(solid.active_normals(), solid.vertex_normals());
        }
    }

    #[test]
    fn flat_smooth_flat_is_bit_identical() {
        for mut solid in all_solids() {
            let initial: Vec<[u32; 3]> = solid
                .active_normals()
                .iter()
                .map(|n| [n.x.to_bits(), n.y.to_bits(), n.z.to_bits()])
                .collect();

            solid.set_normal_mode(NormalMode::Smooth);
            solid.set_normal_mode(NormalMode::Flat);

            let restored: Vec<[u32; 3]> = solid
                .active_normals()
                .iter()
                .map(|n| [n.x.to_bits(), n.y.to_bits(), n.z.to_bits()])
                .collect();
            assert_eq!(initial, restored);
        }
    }

    #[test]
    fn toggle_alternates_modes() {
        let mut solid = MakeCone::default().execute().unwrap();
        assert_eq!(solid.toggle_normal_mode(), NormalMode::Smooth);
        assert_eq!(solid.toggle_normal_mode(), NormalMode::Flat);
        assert_eq!(solid.active_normals(), solid.face_normals());
    }

    #[test]
    fn setting_current_mode_again_is_harmless() {
        let mut solid = MakePyramid::default().execute().unwrap();
        solid.set_normal_mode(NormalMode::Flat);
        assert_eq!(solid.active_normals(), solid.face_normals());
    }

    #[test]
    fn scaled_kind_multiplies_lengths_only() {
        let cone = SolidKind::Cone {
            radius: 0.5,
            height: 1.0,
            radial_segments: 8,
        };
        assert_eq!(
            cone.scaled(2.0),
            SolidKind::Cone {
                radius: 1.0,
                height: 2.0,
                radial_segments: 8
            }
        );
        assert_eq!(
            SolidKind::Octahedron { edge_length: 1.0 }.scaled(0.25),
            SolidKind::Octahedron { edge_length: 0.25 }
        );
    }

    #[test]
    fn indices_are_sequential_triples() {
        for solid in all_solids() {
            for (t, tri) in solid.indices().iter().enumerate() {
                let base = u32::try_from(t * 3).unwrap();
                assert_eq!(*tri, [base, base + 1, base + 2]);
            }
        }
    }

    #[test]
    fn only_cone_uses_analytic_smoothing() {
        assert!(SolidKind::Octahedron { edge_length: 1.0 }.smooths_by_face_average());
        assert!(!MakeCone::default().execute().unwrap().kind().smooths_by_face_average());
    }
}
