//! Direct dense solve for the endpoint sheet strengths.

use crate::error::{SolverError, SolverResult};
use crate::strengths::VortexStrengths;
use crate::system::{LinearSystem, assemble_with};
use pf_core::ensure_finite;
use pf_flow::{Freestream, InfluenceConfig};
use pf_geom::PanelArray;

/// Solve an assembled system by LU factorization.
pub fn solve_system(system: &LinearSystem) -> SolverResult<VortexStrengths> {
    let unknowns = system.unknowns();
    let x = system
        .matrix
        .clone()
        .lu()
        .solve(&system.rhs)
        .ok_or(SolverError::SingularSystem { unknowns })?;

    let mut nodes = Vec::with_capacity(unknowns);
    for &v in x.iter() {
        nodes.push(ensure_finite(v, "sheet strength")?);
    }

    tracing::debug!(unknowns, "dense solve complete");
    Ok(VortexStrengths::new(nodes))
}

/// Assemble and solve in one step with the default influence configuration.
pub fn solve(panels: &PanelArray, freestream: &Freestream) -> SolverResult<VortexStrengths> {
    solve_with(panels, freestream, &InfluenceConfig::default())
}

/// Assemble and solve in one step.
pub fn solve_with(
    panels: &PanelArray,
    freestream: &Freestream,
    cfg: &InfluenceConfig,
) -> SolverResult<VortexStrengths> {
    let system = assemble_with(panels, freestream, cfg)?;
    solve_system(&system)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{DMatrix, DVector};

    #[test]
    fn rank_deficient_matrix_is_reported_singular() {
        // Second row is twice the first: elimination hits an exact zero pivot
        let system = LinearSystem {
            matrix: DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0, 4.0]),
            rhs: DVector::from_row_slice(&[1.0, 1.0]),
        };
        let err = solve_system(&system).unwrap_err();
        assert!(matches!(
            err,
            SolverError::SingularSystem { unknowns: 2 }
        ));
    }

    #[test]
    fn well_posed_system_solves() {
        let system = LinearSystem {
            matrix: DMatrix::from_row_slice(2, 2, &[2.0, 0.0, 0.0, 4.0]),
            rhs: DVector::from_row_slice(&[2.0, 2.0]),
        };
        let strengths = solve_system(&system).unwrap();
        assert_eq!(strengths.as_slice(), &[1.0, 0.5]);
    }
}
