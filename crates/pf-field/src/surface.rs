//! Surface quantities derived from the solved sheet strengths.

use crate::error::{FieldError, FieldResult};
use pf_core::Real;
use pf_flow::Freestream;
use pf_geom::PanelArray;
use pf_solver::VortexStrengths;

/// Outer-surface tangential speed per panel.
///
/// With a stagnant interior the local sheet strength equals the tangential
/// velocity jump, so the speed seen by the outer flow at a panel is the
/// mean of its two endpoint strengths.
pub fn tangential_speeds(strengths: &VortexStrengths) -> Vec<Real> {
    (0..strengths.node_count() - 1)
        .map(|j| {
            let (ga, gb) = strengths.panel_pair(j);
            0.5 * (ga + gb)
        })
        .collect()
}

/// Pressure coefficient per panel, cp = 1 − (v/U)².
pub fn pressure_coefficients(strengths: &VortexStrengths, freestream: &Freestream) -> Vec<Real> {
    let u = freestream.speed();
    tangential_speeds(strengths)
        .into_iter()
        .map(|vt| 1.0 - (vt / u) * (vt / u))
        .collect()
}

/// Total bound circulation of the sheet.
pub fn circulation(panels: &PanelArray, strengths: &VortexStrengths) -> FieldResult<Real> {
    if strengths.node_count() != panels.node_count() {
        return Err(FieldError::StrengthCount {
            nodes: strengths.node_count(),
            panels: panels.len(),
        });
    }
    let mut total = 0.0;
    for (j, panel) in panels.iter().enumerate() {
        let (ga, gb) = strengths.panel_pair(j);
        total += panel.length * 0.5 * (ga + gb);
    }
    Ok(total)
}

/// Lift coefficient from the Kutta–Joukowski theorem, cl = 2Γ/(U·chord).
pub fn lift_coefficient(
    panels: &PanelArray,
    strengths: &VortexStrengths,
    freestream: &Freestream,
) -> FieldResult<Real> {
    let gamma = circulation(panels, strengths)?;
    Ok(2.0 * gamma / (freestream.speed() * panels.chord()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::{mps, rad};

    #[test]
    fn tangential_speed_is_the_endpoint_mean() {
        let strengths = VortexStrengths::new(vec![1.0, 0.5, -0.5, -1.0]);
        assert_eq!(tangential_speeds(&strengths), vec![0.75, 0.0, -0.75]);
    }

    #[test]
    fn stagnation_and_freestream_pressure() {
        let freestream = Freestream::new(mps(1.0), rad(0.0)).unwrap();
        // A stalled panel reads cp = 1, a freestream-speed panel cp = 0
        let strengths = VortexStrengths::new(vec![0.0, 0.0, 2.0]);
        let cp = pressure_coefficients(&strengths, &freestream);
        assert_eq!(cp[0], 1.0);
        assert_eq!(cp[1], 0.0);
    }
}
