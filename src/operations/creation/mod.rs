mod make_cone;
mod make_octahedron;
mod make_pyramid;

pub use make_cone::MakeCone;
pub use make_octahedron::MakeOctahedron;
pub use make_pyramid::MakePyramid;
