//! # Mesh Buffer Adapter
//!
//! CPU-side packing of a [`Solid`](crate::solid::Solid) into the byte layout a
//! rendering backend uploads: one contiguous vertex buffer, one index buffer,
//! and an attribute table of `(location, components, stride, offset)` tuples.
//!
//! Two layouts are supported:
//!
//! - [`BufferLayout::Planar`]: one region per attribute, in the order
//!   positions, normals, colors, texture coordinates. Normals occupy a single
//!   contiguous range, so switching normal modes needs one sub-upload.
//! - [`BufferLayout::Interleaved`]: one [`InterleavedVertex`] per slot.
//!
//! Creating the GPU objects themselves is left to the caller.

mod pack;
mod vertex;

pub use pack::PackMesh;
pub use vertex::InterleavedVertex;

use std::mem::size_of;
use std::ops::Range;

use crate::error::{MeshError, Result};
use crate::math::Vector3;

/// A per-vertex attribute stored in a mesh buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    Position,
    Normal,
    Color,
    TexCoord,
}

impl AttributeKind {
    /// All attributes, in shader-location order.
    pub const ALL: [Self; 4] = [Self::Position, Self::Normal, Self::Color, Self::TexCoord];

    /// Shader location the attribute binds to.
    #[must_use]
    pub fn location(self) -> u32 {
        match self {
            Self::Position => 0,
            Self::Normal => 1,
            Self::Color => 2,
            Self::TexCoord => 3,
        }
    }

    /// Number of `f32` components.
    #[must_use]
    pub fn components(self) -> u32 {
        match self {
            Self::Position | Self::Normal => 3,
            Self::Color => 4,
            Self::TexCoord => 2,
        }
    }

    /// Size of one element in bytes.
    #[must_use]
    pub fn size(self) -> u64 {
        u64::from(self.components()) * size_of::<f32>() as u64
    }
}

/// How attributes are arranged inside the vertex buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BufferLayout {
    /// One tightly packed region per attribute.
    #[default]
    Planar,
    /// All attributes of a slot stored together.
    Interleaved,
}

/// Binding description of one attribute, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    pub kind: AttributeKind,
    pub location: u32,
    pub components: u32,
    pub stride: u64,
    pub offset: u64,
}

impl BufferLayout {
    /// Attribute table for `vertex_count` slots, in shader-location order.
    #[must_use]
    pub fn attributes(self, vertex_count: usize) -> [VertexAttribute; 4] {
        let mut offset = 0;
        AttributeKind::ALL.map(|kind| {
            let (stride, region) = match self {
                Self::Planar => (kind.size(), kind.size() * vertex_count as u64),
                Self::Interleaved => (size_of::<InterleavedVertex>() as u64, kind.size()),
            };
            let attribute = VertexAttribute {
                kind,
                location: kind.location(),
                components: kind.components(),
                stride,
                offset,
            };
            offset += region;
            attribute
        })
    }
}

/// Width of the entries in an index buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexFormat {
    Uint16,
    Uint32,
}

impl IndexFormat {
    /// The narrowest format able to address `vertex_count` slots.
    #[must_use]
    pub fn for_vertex_count(vertex_count: usize) -> Self {
        if vertex_count <= usize::from(u16::MAX) + 1 {
            Self::Uint16
        } else {
            Self::Uint32
        }
    }

    /// Size of one index in bytes.
    #[must_use]
    pub fn size(self) -> usize {
        match self {
            Self::Uint16 => size_of::<u16>(),
            Self::Uint32 => size_of::<u32>(),
        }
    }
}

/// Packed vertex and index bytes ready for upload.
///
/// The buffer does not track whether its normals match the solid's current
/// normal mode. After a mode switch, call [`MeshBuffer::rewrite_normals`] and
/// re-upload the bytes in [`MeshBuffer::normal_ranges`].
#[derive(Debug, Clone)]
pub struct MeshBuffer {
    layout: BufferLayout,
    vertex_count: usize,
    vertex_bytes: Vec<u8>,
    index_format: IndexFormat,
    index_bytes: Vec<u8>,
    attributes: [VertexAttribute; 4],
}

impl MeshBuffer {
    /// The vertex layout.
    #[must_use]
    pub fn layout(&self) -> BufferLayout {
        self.layout
    }

    /// Number of vertex slots packed.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Contents of the vertex buffer.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        &self.vertex_bytes
    }

    /// Width of the packed indices.
    #[must_use]
    pub fn index_format(&self) -> IndexFormat {
        self.index_format
    }

    /// Contents of the index buffer.
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        &self.index_bytes
    }

    /// Number of indices (three per triangle).
    #[must_use]
    pub fn index_count(&self) -> usize {
        self.index_bytes.len() / self.index_format.size()
    }

    /// Attribute bindings in shader-location order.
    #[must_use]
    pub fn attributes(&self) -> &[VertexAttribute] {
        &self.attributes
    }

    /// Binding of one attribute.
    #[must_use]
    pub fn attribute(&self, kind: AttributeKind) -> &VertexAttribute {
        &self.attributes[kind.location() as usize]
    }

    /// Byte ranges of the vertex buffer that hold normals.
    ///
    /// A single range for [`BufferLayout::Planar`], one per slot for
    /// [`BufferLayout::Interleaved`].
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn normal_ranges(&self) -> Vec<Range<usize>> {
        let normal = self.attribute(AttributeKind::Normal);
        let offset = normal.offset as usize;
        let size = AttributeKind::Normal.size() as usize;
        match self.layout {
            BufferLayout::Planar => vec![offset..offset + size * self.vertex_count],
            BufferLayout::Interleaved => (0..self.vertex_count)
                .map(|i| {
                    let start = i * normal.stride as usize + offset;
                    start..start + size
                })
                .collect(),
        }
    }

    /// Overwrites the packed normals with `normals`, leaving every other byte
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::LengthMismatch`] if `normals` does not have one
    /// entry per packed slot.
    pub fn rewrite_normals(&mut self, normals: &[Vector3]) -> Result<()> {
        if normals.len() != self.vertex_count {
            return Err(MeshError::LengthMismatch {
                attribute: "normals",
                expected: self.vertex_count,
                actual: normals.len(),
            }
            .into());
        }

        let packed: Vec<[f32; 3]> = normals.iter().map(|n| [n.x, n.y, n.z]).collect();
        let ranges = self.normal_ranges();
        match self.layout {
            BufferLayout::Planar => {
                for range in ranges {
                    self.vertex_bytes[range].copy_from_slice(bytemuck::cast_slice(&packed));
                }
            }
            BufferLayout::Interleaved => {
                for (range, n) in ranges.into_iter().zip(&packed) {
                    self.vertex_bytes[range].copy_from_slice(bytemuck::bytes_of(n));
                }
            }
        }
        tracing::trace!(layout = ?self.layout, slots = self.vertex_count, "normals rewritten");
        Ok(())
    }
}
