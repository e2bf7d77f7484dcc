use crate::error::{MeshError, Result};
use crate::math::{triangle_cross, Point3, Vector3, UNIT_TOLERANCE};
use crate::solid::Solid;
use crate::topology::AdjacencyMap;

type Check = std::result::Result<(), MeshError>;

/// Validates the generated arrays of a solid.
///
/// Checks, in order: every attribute array has one entry per slot, every
/// index is in range, every normal has unit length, every triangle's flat
/// normal agrees with its winding, and smooth normals agree across the slots
/// of each corner. Generators never produce a mesh that fails; this is a
/// diagnostic for tests and for callers that edit solids.
pub struct CheckMesh<'a> {
    solid: &'a Solid,
}

impl<'a> CheckMesh<'a> {
    /// Creates a new `CheckMesh` query.
    #[must_use]
    pub fn new(solid: &'a Solid) -> Self {
        Self { solid }
    }

    /// Executes the validation.
    ///
    /// # Errors
    ///
    /// Returns the first [`MeshError`] found.
    pub fn execute(&self) -> Result<()> {
        let s = self.solid;
        let n = s.vertex_count();

        check_len("face normals", n, s.face_normals().len())?;
        check_len("vertex normals", n, s.vertex_normals().len())?;
        check_len("active normals", n, s.active_normals().len())?;
        check_len("texture coordinates", n, s.tex_coords().len())?;
        check_len("colors", n, s.colors().len())?;
        check_len("adjacency", n, s.adjacency().slot_count())?;

        check_indices(n, s.indices())?;
        check_unit("face", s.face_normals())?;
        check_unit("vertex", s.vertex_normals())?;
        check_winding(s.positions(), s.face_normals(), s.indices())?;
        check_corners(s.vertex_normals(), s.adjacency())?;
        Ok(())
    }
}

fn check_len(attribute: &'static str, expected: usize, actual: usize) -> Check {
    if expected == actual {
        Ok(())
    } else {
        Err(MeshError::LengthMismatch {
            attribute,
            expected,
            actual,
        })
    }
}

fn check_indices(vertex_count: usize, indices: &[[u32; 3]]) -> Check {
    for (triangle, tri) in indices.iter().enumerate() {
        if let Some(&index) = tri.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(MeshError::IndexOutOfRange {
                triangle,
                index,
                vertex_count,
            });
        }
    }
    Ok(())
}

fn check_unit(attribute: &'static str, normals: &[Vector3]) -> Check {
    for (slot, n) in normals.iter().enumerate() {
        let length = n.norm();
        if (length - 1.0).abs() > UNIT_TOLERANCE {
            return Err(MeshError::NonUnitNormal {
                attribute,
                slot,
                length,
            });
        }
    }
    Ok(())
}

fn check_winding(positions: &[Point3], flat: &[Vector3], indices: &[[u32; 3]]) -> Check {
    for (triangle, &[a, b, c]) in indices.iter().enumerate() {
        let (a, b, c) = (a as usize, b as usize, c as usize);
        let geometric = triangle_cross(&positions[a], &positions[b], &positions[c]);
        if flat[a].dot(&geometric) <= 0.0 {
            return Err(MeshError::InwardFacing { triangle });
        }
    }
    Ok(())
}

fn check_corners(smooth: &[Vector3], adjacency: &AdjacencyMap) -> Check {
    for (_, slots) in adjacency.corners() {
        let Some((&first, rest)) = slots.split_first() else {
            continue;
        };
        for &second in rest {
            if smooth[second as usize] != smooth[first as usize] {
                return Err(MeshError::SmoothNormalMismatch {
                    first: first as usize,
                    second: second as usize,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::{MakeCone, MakeOctahedron, MakePyramid};
    use crate::shading::NormalMode;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn generated_solids_pass() {
        init_tracing();
        for solid in [
            MakePyramid::default().execute().unwrap(),
            MakeOctahedron::new().execute().unwrap(),
            MakeCone::default().execute().unwrap(),
            MakeCone::new(0.5, 1.0, 3).execute().unwrap(),
        ] {
            CheckMesh::new(&solid).execute().unwrap();
        }
    }

    #[test]
    fn random_parameters_pass() {
        init_tracing();
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let w = 10.0_f32.powf(rng.random_range(-4.0..1.0));
            let h = 10.0_f32.powf(rng.random_range(-4.0..1.0));
            let n = rng.random_range(3..200);

            let mut pyramid = MakePyramid::new(w, h).execute().unwrap();
            CheckMesh::new(&pyramid).execute().unwrap();
            pyramid.set_normal_mode(NormalMode::Smooth);
            CheckMesh::new(&pyramid).execute().unwrap();

            let cone = MakeCone::new(w, h, n).execute().unwrap();
            CheckMesh::new(&cone).execute().unwrap();
        }
    }

    #[test]
    fn out_of_range_index_is_reported() {
        let err = check_indices(9, &[[0, 1, 2], [3, 9, 5]]).unwrap_err();
        assert!(matches!(
            err,
            MeshError::IndexOutOfRange {
                triangle: 1,
                index: 9,
                vertex_count: 9
            }
        ));
    }

    #[test]
    fn generated_indices_stay_in_range() {
        let solid = MakeCone::new(1.0, 1.0, 50).execute().unwrap();
        assert!(check_indices(solid.vertex_count(), solid.indices()).is_ok());
    }

    #[test]
    fn non_unit_normal_is_reported() {
        let mut normals = MakeOctahedron::new().execute().unwrap().face_normals().to_vec();
        normals[5] *= 2.0;
        assert!(matches!(
            check_unit("face", &normals),
            Err(MeshError::NonUnitNormal { slot: 5, .. })
        ));
    }

    #[test]
    fn reversed_triangle_is_reported() {
        let solid = MakePyramid::default().execute().unwrap();
        let mut indices = solid.indices().to_vec();
        indices[3].swap(1, 2);
        assert!(matches!(
            check_winding(solid.positions(), solid.face_normals(), &indices),
            Err(MeshError::InwardFacing { triangle: 3 })
        ));
    }

    #[test]
    fn mismatched_corner_normals_are_reported() {
        let solid = MakeOctahedron::new().execute().unwrap();
        let mut smooth = solid.vertex_normals().to_vec();
        // Slot 0 is the top apex of the first face; its twin sits in the second.
        smooth[3] = -smooth[3];
        assert!(matches!(
            check_corners(&smooth, solid.adjacency()),
            Err(MeshError::SmoothNormalMismatch { first: 0, second: 3 })
        ));
    }

    #[test]
    fn length_mismatch_is_reported() {
        assert!(matches!(
            check_len("colors", 18, 17),
            Err(MeshError::LengthMismatch { expected: 18, actual: 17, .. })
        ));
    }
}
