//! Error types for geometry construction and discretization.

use pf_core::Real;
use thiserror::Error;

/// Errors raised while building panels from surface coordinates.
#[derive(Error, Debug)]
pub enum GeometryError {
    #[error("Too few surface coordinates: got {got}, need at least {need}")]
    TooFewPoints { got: usize, need: usize },

    #[error("Coordinate arrays differ in length: {x_len} x-values, {z_len} z-values")]
    MismatchedArrays { x_len: usize, z_len: usize },

    #[error("Surface has no x-extent: chord collapses to a point")]
    ZeroChord,

    #[error("Requested panel count {requested} is too small")]
    PanelCount { requested: usize },

    #[error(
        "No bracketing segment for abscissa {abscissa}: contour is not a single x-monotonic loop"
    )]
    Unbracketable { abscissa: Real },

    #[error("Zero-length panel at ({x}, {z})")]
    DegeneratePanel { x: Real, z: Real },

    #[error("Panel array must contain at least one panel")]
    EmptyArray,

    #[error("Invalid four-digit section code: {code}")]
    SectionCode { code: String },
}

pub type GeomResult<T> = Result<T, GeometryError>;
