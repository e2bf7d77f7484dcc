use crate::error::{GeometryError, MeshError, Result};
use crate::math::{triangle_centroid, triangle_normal, Point2, Point3, Vector3, TOLERANCE};
use crate::shading::NormalSwitch;
use crate::topology::AdjacencyMap;

use super::{Solid, SolidKind};

/// One corner of a triangle being emitted.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Corner {
    /// Logical corner this slot duplicates.
    pub tag: usize,
    pub position: Point3,
    pub uv: Point2,
}

impl Corner {
    pub(crate) fn new(tag: usize, position: Point3, uv: Point2) -> Self {
        Self { tag, position, uv }
    }
}

/// Accumulates unshared vertex slots triangle by triangle, then derives
/// normals, indices and adjacency.
#[derive(Debug, Default)]
pub(crate) struct SolidBuilder {
    positions: Vec<Point3>,
    tex_coords: Vec<Point2>,
    colors: Vec<[f32; 4]>,
    face_tags: Vec<usize>,
    corner_tags: Vec<usize>,
}

impl SolidBuilder {
    pub(crate) fn with_triangles(triangles: usize) -> Self {
        let slots = triangles * 3;
        Self {
            positions: Vec::with_capacity(slots),
            tex_coords: Vec::with_capacity(slots),
            colors: Vec::with_capacity(slots),
            face_tags: Vec::with_capacity(slots),
            corner_tags: Vec::with_capacity(slots),
        }
    }

    /// Emits one triangle with three fresh slots.
    ///
    /// Corners must be counter-clockwise when seen from outside. Triangles
    /// sharing a `face` tag are treated as one polygon when smoothing.
    pub(crate) fn triangle(&mut self, face: usize, corners: [Corner; 3], color: [f32; 4]) {
        for corner in corners {
            self.positions.push(corner.position);
            self.tex_coords.push(corner.uv);
            self.colors.push(color);
            self.face_tags.push(face);
            self.corner_tags.push(corner.tag);
        }
    }

    /// Finishes the solid, smoothing by averaging the distinct faces around
    /// each corner.
    pub(crate) fn build(self, kind: SolidKind) -> Result<Solid> {
        self.finish(kind, |positions, flat, face_tags, adjacency| {
            face_averaged_normals(positions.len(), flat, face_tags, adjacency)
        })
    }

    /// Finishes the solid, computing each smooth normal from its slot position.
    pub(crate) fn build_analytic<F>(self, kind: SolidKind, normal_at: F) -> Result<Solid>
    where
        F: Fn(&Point3) -> Result<Vector3>,
    {
        self.finish(kind, |positions, _, _, _| positions.iter().map(&normal_at).collect())
    }

    #[allow(clippy::cast_precision_loss)]
    fn finish<S>(self, kind: SolidKind, smooth: S) -> Result<Solid>
    where
        S: FnOnce(&[Point3], &[Vector3], &[usize], &AdjacencyMap) -> Result<Vec<Vector3>>,
    {
        let Self {
            positions,
            tex_coords,
            colors,
            face_tags,
            corner_tags,
        } = self;

        let center = Point3::from(
            positions.iter().map(|p| p.coords).sum::<Vector3>() / positions.len().max(1) as f32,
        );

        let indices = sequential_indices(positions.len())?;
        let mut face_normals = Vec::with_capacity(positions.len());
        for (t, tri) in positions.chunks_exact(3).enumerate() {
            let normal = triangle_normal(&tri[0], &tri[1], &tri[2])?;
            debug_assert!(
                normal.dot(&(triangle_centroid(&tri[0], &tri[1], &tri[2]) - center)) > 0.0,
                "triangle {t} of {kind:?} faces inward"
            );
            face_normals.extend([normal; 3]);
        }

        let adjacency = AdjacencyMap::from_corner_tags(&corner_tags)?;
        let vertex_normals = smooth(&positions, &face_normals, &face_tags, &adjacency)?;
        let normals = NormalSwitch::new(&face_normals);

        tracing::debug!(
            ?kind,
            slots = positions.len(),
            triangles = indices.len(),
            corners = adjacency.corner_count(),
            "solid built"
        );

        Ok(Solid {
            kind,
            positions,
            face_normals,
            vertex_normals,
            tex_coords,
            colors,
            indices,
            adjacency,
            normals,
        })
    }
}

/// Index triples `[0, 1, 2], [3, 4, 5], ...` for `slot_count` unshared slots.
fn sequential_indices(slot_count: usize) -> std::result::Result<Vec<[u32; 3]>, MeshError> {
    let last = u32::try_from(slot_count).map_err(|_| MeshError::IndexOverflow {
        vertex_count: slot_count,
    })?;
    Ok((0..last)
        .step_by(3)
        .map(|base| [base, base + 1, base + 2])
        .collect())
}

/// Smooth normals as the normalized sum of the distinct face normals meeting
/// at each corner.
fn face_averaged_normals(
    slot_count: usize,
    flat: &[Vector3],
    face_tags: &[usize],
    adjacency: &AdjacencyMap,
) -> Result<Vec<Vector3>> {
    let mut smooth = vec![Vector3::zeros(); slot_count];
    let mut faces_seen = Vec::new();

    for (_, slots) in adjacency.corners() {
        faces_seen.clear();
        let mut sum = Vector3::zeros();
        for &slot in slots {
            let slot = slot as usize;
            if !faces_seen.contains(&face_tags[slot]) {
                faces_seen.push(face_tags[slot]);
                sum += flat[slot];
            }
        }
        let normal = sum
            .try_normalize(TOLERANCE)
            .ok_or_else(|| GeometryError::Degenerate("corner normals cancel out".into()))?;
        for &slot in slots {
            smooth[slot as usize] = normal;
        }
    }

    Ok(smooth)
}

/// Unnormalized normal of `triangle`, recomputed from its positions.
#[cfg(test)]
pub(crate) fn geometric_normal(solid: &Solid, triangle: usize) -> Vector3 {
    let [a, b, c] = solid.indices()[triangle];
    let p = solid.positions();
    crate::math::triangle_cross(&p[a as usize], &p[b as usize], &p[c as usize])
}
