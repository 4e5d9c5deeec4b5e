//! Error types for system assembly and solving.

use pf_core::PfError;
use pf_flow::FlowError;
use thiserror::Error;

/// Errors that can occur while assembling or solving the tangency system.
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Linear system is numerically singular ({unknowns} unknowns)")]
    SingularSystem { unknowns: usize },

    #[error("Flow error: {0}")]
    Flow(#[from] FlowError),

    #[error("Numeric error: {0}")]
    Numeric(#[from] PfError),
}

pub type SolverResult<T> = Result<T, SolverError>;
