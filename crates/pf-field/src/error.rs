//! Error types for field evaluation.

use pf_flow::FlowError;
use thiserror::Error;

/// Errors that can occur while evaluating the velocity field.
#[derive(Error, Debug)]
pub enum FieldError {
    #[error("Strength vector has {nodes} nodes but the array has {panels} panels")]
    StrengthCount { nodes: usize, panels: usize },

    #[error("Flow error: {0}")]
    Flow(#[from] FlowError),
}

pub type FieldResult<T> = Result<T, FieldError>;
