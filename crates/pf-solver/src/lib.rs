//! pf-solver: dense tangency system for the vortex panel method.
//!
//! Builds the (N+1)×(N+1) linear system enforcing zero through-flow at
//! every panel center plus the trailing-edge closure row, and solves it
//! with a direct LU factorization for the endpoint sheet strengths.

pub mod error;
pub mod solve;
pub mod strengths;
pub mod system;

pub use error::{SolverError, SolverResult};
pub use solve::{solve, solve_system, solve_with};
pub use strengths::VortexStrengths;
pub use system::{LinearSystem, assemble, assemble_with};
