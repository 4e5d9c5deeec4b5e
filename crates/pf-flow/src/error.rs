//! Error types for flow evaluation.

use pf_core::{PfError, Real};
use thiserror::Error;

/// Errors that can occur while evaluating flow models.
#[derive(Error, Debug)]
pub enum FlowError {
    #[error("Velocity query exactly on a panel endpoint at ({x}, {z})")]
    TargetOnEndpoint { x: Real, z: Real },

    #[error("Non-physical parameter: {what}")]
    NonPhysical { what: &'static str },

    #[error("Numeric error: {0}")]
    Numeric(#[from] PfError),
}

pub type FlowResult<T> = Result<T, FlowError>;
