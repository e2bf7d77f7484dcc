use std::mem::size_of;

use crate::error::{MeshError, Result};
use crate::solid::Solid;

use super::{BufferLayout, IndexFormat, InterleavedVertex, MeshBuffer};

/// Packs a solid's positions, active normals, colors, texture coordinates
/// and indices into upload-ready bytes.
pub struct PackMesh<'a> {
    solid: &'a Solid,
    layout: BufferLayout,
    index_format: Option<IndexFormat>,
}

impl<'a> PackMesh<'a> {
    /// Creates a new `PackMesh` operation.
    #[must_use]
    pub fn new(solid: &'a Solid, layout: BufferLayout) -> Self {
        Self {
            solid,
            layout,
            index_format: None,
        }
    }

    /// Forces an index width instead of the narrowest one that fits.
    #[must_use]
    pub fn with_index_format(mut self, format: IndexFormat) -> Self {
        self.index_format = Some(format);
        self
    }

    /// Executes the packing.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::IndexFormatOverflow`] if 16-bit indices were
    /// requested for more than 65 536 slots.
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> Result<MeshBuffer> {
        let solid = self.solid;
        let vertex_count = solid.vertex_count();

        let index_format = self
            .index_format
            .unwrap_or_else(|| IndexFormat::for_vertex_count(vertex_count));
        if index_format == IndexFormat::Uint16
            && IndexFormat::for_vertex_count(vertex_count) != IndexFormat::Uint16
        {
            return Err(MeshError::IndexFormatOverflow { vertex_count }.into());
        }

        let positions: Vec<[f32; 3]> = solid.positions().iter().map(|p| [p.x, p.y, p.z]).collect();
        let normals: Vec<[f32; 3]> = solid
            .active_normals()
            .iter()
            .map(|n| [n.x, n.y, n.z])
            .collect();
        let tex_coords: Vec<[f32; 2]> = solid.tex_coords().iter().map(|t| [t.x, t.y]).collect();
        let colors = solid.colors();

        let vertex_bytes = match self.layout {
            BufferLayout::Planar => {
                let mut bytes = Vec::with_capacity(vertex_count * size_of::<InterleavedVertex>());
                bytes.extend_from_slice(bytemuck::cast_slice(&positions));
                bytes.extend_from_slice(bytemuck::cast_slice(&normals));
                bytes.extend_from_slice(bytemuck::cast_slice(colors));
                bytes.extend_from_slice(bytemuck::cast_slice(&tex_coords));
                bytes
            }
            BufferLayout::Interleaved => {
                let vertices: Vec<InterleavedVertex> = (0..vertex_count)
                    .map(|i| InterleavedVertex {
                        position: positions[i],
                        normal: normals[i],
                        color: colors[i],
                        tex_coord: tex_coords[i],
                    })
                    .collect();
                bytemuck::cast_slice(&vertices).to_vec()
            }
        };

        let flat_indices = solid.indices().iter().flatten().copied();
        let index_bytes = match index_format {
            IndexFormat::Uint16 => {
                let indices: Vec<u16> = flat_indices.map(|i| i as u16).collect();
                bytemuck::cast_slice(&indices).to_vec()
            }
            IndexFormat::Uint32 => {
                let indices: Vec<u32> = flat_indices.collect();
                bytemuck::cast_slice(&indices).to_vec()
            }
        };

        tracing::trace!(
            layout = ?self.layout,
            ?index_format,
            vertex_bytes = vertex_bytes.len(),
            index_bytes = index_bytes.len(),
            "mesh packed"
        );

        Ok(MeshBuffer {
            layout: self.layout,
            vertex_count,
            vertex_bytes,
            index_format,
            index_bytes,
            attributes: self.layout.attributes(vertex_count),
        })
    }
}
