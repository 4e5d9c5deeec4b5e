//! pf-field: velocity field evaluation and surface post-processing.
//!
//! Superposes the sheet influence of every panel with the freestream at
//! arbitrary query points, sweeps point sets in parallel, traces
//! streamlines, and derives the surface quantities a plotting or force
//! post-processing consumer needs (tangential speed, pressure coefficient,
//! circulation, lift coefficient).

pub mod error;
pub mod evaluate;
pub mod surface;
pub mod trace;

pub use error::{FieldError, FieldResult};
pub use evaluate::{velocity_at, velocity_at_with, velocity_field, velocity_field_with};
pub use surface::{circulation, lift_coefficient, pressure_coefficients, tangential_speeds};
pub use trace::{Streamline, TraceConfig, trace_streamline};
