//! Streamline tracing through the superposed velocity field.

use crate::error::FieldResult;
use crate::evaluate::velocity_at_with;
use pf_core::{Point2, Real, Vec2};
use pf_flow::{Freestream, InfluenceConfig};
use pf_geom::PanelArray;
use pf_solver::VortexStrengths;

/// Streamline integration parameters.
#[derive(Clone, Copy, Debug)]
pub struct TraceConfig {
    /// Integration time step
    pub step: Real,
    /// Maximum number of steps before the trace is cut off
    pub max_steps: usize,
    /// Stop when the local speed falls below this
    pub min_speed: Real,
    /// Lower-left and upper-right corners of the tracing window
    pub window: (Point2, Point2),
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            step: 0.01,
            max_steps: 400,
            min_speed: 1e-10,
            window: (Point2::new(-2.0, -2.0), Point2::new(3.0, 2.0)),
        }
    }
}

/// A traced path with the speed sampled along it, ready for a plotting
/// consumer.
#[derive(Clone, Debug)]
pub struct Streamline {
    pub points: Vec<Point2>,
    pub speeds: Vec<Real>,
}

/// Integrate one streamline from `start` with classical fourth-order
/// Runge–Kutta steps, stopping at the window edge, on stall, or after
/// `max_steps`.
pub fn trace_streamline(
    panels: &PanelArray,
    strengths: &VortexStrengths,
    freestream: &Freestream,
    start: Point2,
    cfg: &TraceConfig,
) -> FieldResult<Streamline> {
    let icfg = InfluenceConfig::default();
    let sample =
        |p: Point2| -> FieldResult<Vec2> { velocity_at_with(panels, strengths, freestream, p, &icfg) };

    let mut points = vec![start];
    let mut speeds = Vec::new();
    let mut current = start;
    let h = cfg.step;

    for _ in 0..cfg.max_steps {
        let k1 = sample(current)?;
        let speed = k1.norm();
        speeds.push(speed);
        if speed < cfg.min_speed {
            break;
        }

        let k2 = sample(current + 0.5 * h * k1)?;
        let k3 = sample(current + 0.5 * h * k2)?;
        let k4 = sample(current + h * k3)?;
        current += h / 6.0 * (k1 + 2.0 * k2 + 2.0 * k3 + k4);

        points.push(current);

        let (lo, hi) = cfg.window;
        if current.x < lo.x || current.x > hi.x || current.y < lo.y || current.y > hi.y {
            break;
        }
    }

    Ok(Streamline { points, speeds })
}
