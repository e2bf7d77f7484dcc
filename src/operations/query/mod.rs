mod area;
mod bounding_box;
mod check_mesh;
mod volume;

pub use area::Area;
pub use bounding_box::{Aabb, BoundingBox};
pub use check_mesh::CheckMesh;
pub use volume::Volume;
