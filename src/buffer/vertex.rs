/// One vertex slot in the interleaved layout.
///
/// `#[repr(C)]` keeps the field order and offsets (0, 12, 24, 40) that
/// [`BufferLayout::Interleaved`](super::BufferLayout::Interleaved) reports.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InterleavedVertex {
    /// 3D position coordinates [x, y, z]
    pub position: [f32; 3],
    /// Active normal [nx, ny, nz]
    pub normal: [f32; 3],
    /// RGBA color
    pub color: [f32; 4],
    /// Texture coordinates [u, v]
    pub tex_coord: [f32; 2],
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn layout_matches_attribute_table() {
        assert_eq!(size_of::<InterleavedVertex>(), 48);
        assert_eq!(offset_of!(InterleavedVertex, normal), 12);
        assert_eq!(offset_of!(InterleavedVertex, color), 24);
        assert_eq!(offset_of!(InterleavedVertex, tex_coord), 40);
    }
}
