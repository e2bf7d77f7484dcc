//! Procedural meshes for a small family of convex solids.
//!
//! Each creation operation produces a [`Solid`] holding unshared per-face
//! vertex slots, flat and smooth normal sets, texture coordinates, colors and
//! a triangle list. The solid exposes one of its normal sets at a time; the
//! [`buffer`] module packs the result for upload to a rendering backend.
//!
//! ```
//! use solidmesh::operations::creation::MakeCone;
//! use solidmesh::NormalMode;
//!
//! let mut cone = MakeCone::new(0.5, 1.0, 32).execute()?;
//! cone.set_normal_mode(NormalMode::Smooth);
//! assert_eq!(cone.active_normals(), cone.vertex_normals());
//! # Ok::<(), solidmesh::SolidMeshError>(())
//! ```

pub mod buffer;
pub mod error;
pub mod math;
pub mod operations;
pub mod shading;
pub mod solid;
pub mod topology;

pub use error::{Result, SolidMeshError};
pub use shading::NormalMode;
pub use solid::{Solid, SolidKind};
