//! Assembly of the dense tangency + trailing-edge system.

use crate::error::SolverResult;
use nalgebra::{DMatrix, DVector};
use pf_core::Real;
use pf_flow::{Freestream, InfluenceConfig, center_unit_influences, unit_influences};
use pf_geom::PanelArray;

/// Dense coefficient matrix and right-hand side, built fresh per solve.
///
/// Row i < N enforces zero normal velocity at panel i's center; row N is
/// the trailing-edge closure. Column j carries node j's strength, so each
/// panel contributes to two adjacent columns.
#[derive(Clone, Debug)]
pub struct LinearSystem {
    pub matrix: DMatrix<Real>,
    pub rhs: DVector<Real>,
}

impl LinearSystem {
    /// Number of unknowns, one per panel-array node.
    pub fn unknowns(&self) -> usize {
        self.rhs.len()
    }
}

/// Assemble the tangency system with the default influence configuration.
pub fn assemble(panels: &PanelArray, freestream: &Freestream) -> SolverResult<LinearSystem> {
    assemble_with(panels, freestream, &InfluenceConfig::default())
}

/// Assemble the tangency system.
///
/// Endpoints shared between adjacent panels accumulate additively into the
/// same column, which is how sheet continuity is encoded without an
/// explicit merge step. The last row forces the two trailing-edge nodes to
/// carry canceling strengths so no net vorticity is shed at the edge.
pub fn assemble_with(
    panels: &PanelArray,
    freestream: &Freestream,
    cfg: &InfluenceConfig,
) -> SolverResult<LinearSystem> {
    let n = panels.len();
    let mut matrix = DMatrix::zeros(n + 1, n + 1);
    let mut rhs = DVector::zeros(n + 1);
    let v_inf = freestream.velocity();

    for (i, receiver) in panels.iter().enumerate() {
        let normal = receiver.normal();
        let center = receiver.center();

        for (j, source) in panels.iter().enumerate() {
            // A panel's own center sits on its supporting line; that case
            // goes through the principal-value evaluation instead of the
            // floating-point discriminant test.
            let (va, vb) = if i == j {
                center_unit_influences(source)
            } else {
                unit_influences(source, center, cfg)?
            };
            matrix[(i, j)] += va.dot(&normal);
            matrix[(i, j + 1)] += vb.dot(&normal);
        }

        rhs[i] = -v_inf.dot(&normal);
    }

    // Trailing-edge closure row
    matrix[(n, 0)] = 1.0;
    matrix[(n, n)] = 1.0;

    tracing::debug!(panels = n, "tangency system assembled");
    Ok(LinearSystem { matrix, rhs })
}
