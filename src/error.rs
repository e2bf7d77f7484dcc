use thiserror::Error;

/// Top-level error type for solid mesh generation.
#[derive(Debug, Error)]
pub enum SolidMeshError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// Errors related to shape parameters and geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid parameter {parameter} = {value}: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to the corner adjacency of a solid.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("vertex slot {slot} belongs to no corner")]
    SlotNotCovered { slot: usize },

    #[error("vertex slot {slot} belongs to more than one corner")]
    SlotSharedByCorners { slot: usize },

    #[error("corner has no vertex slots")]
    EmptyCorner,

    #[error("{slot_count} vertex slots exceed the 32-bit slot range")]
    TooManySlots { slot_count: usize },
}

/// Errors reported when validating or packing generated mesh arrays.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("{attribute} has {actual} entries, expected {expected}")]
    LengthMismatch {
        attribute: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("triangle {triangle} references slot {index}, but only {vertex_count} slots exist")]
    IndexOutOfRange {
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },

    #[error("{attribute} normal at slot {slot} has length {length}")]
    NonUnitNormal {
        attribute: &'static str,
        slot: usize,
        length: f32,
    },

    #[error("triangle {triangle} faces inward")]
    InwardFacing { triangle: usize },

    #[error("smooth normals differ between slots {first} and {second} of one corner")]
    SmoothNormalMismatch { first: usize, second: usize },

    #[error("{vertex_count} vertex slots do not fit in 16-bit indices")]
    IndexFormatOverflow { vertex_count: usize },

    #[error("{vertex_count} vertex slots do not fit in 32-bit indices")]
    IndexOverflow { vertex_count: usize },
}

impl GeometryError {
    /// Shorthand for an [`GeometryError::InvalidParameter`] on an `f32` input.
    pub(crate) fn invalid(parameter: &'static str, value: f32, reason: &'static str) -> Self {
        Self::InvalidParameter {
            parameter,
            value: f64::from(value),
            reason,
        }
    }
}

/// Convenience type alias for results using [`SolidMeshError`].
pub type Result<T> = std::result::Result<T, SolidMeshError>;
