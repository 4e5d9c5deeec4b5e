//! Superposed velocity at arbitrary field points.

use crate::error::{FieldError, FieldResult};
use pf_core::{Point2, Vec2};
use pf_flow::{Freestream, InfluenceConfig, influence};
use pf_geom::PanelArray;
use pf_solver::VortexStrengths;
use rayon::prelude::*;

fn check_counts(panels: &PanelArray, strengths: &VortexStrengths) -> FieldResult<()> {
    if strengths.node_count() != panels.node_count() {
        return Err(FieldError::StrengthCount {
            nodes: strengths.node_count(),
            panels: panels.len(),
        });
    }
    Ok(())
}

fn superpose(
    panels: &PanelArray,
    strengths: &VortexStrengths,
    freestream: &Freestream,
    point: Point2,
    cfg: &InfluenceConfig,
) -> FieldResult<Vec2> {
    let mut v = freestream.velocity();
    for (j, panel) in panels.iter().enumerate() {
        let (ga, gb) = strengths.panel_pair(j);
        v += influence(panel, point, ga, gb, cfg)?;
    }
    Ok(v)
}

/// Velocity at one field point with the default influence configuration.
pub fn velocity_at(
    panels: &PanelArray,
    strengths: &VortexStrengths,
    freestream: &Freestream,
    point: Point2,
) -> FieldResult<Vec2> {
    velocity_at_with(panels, strengths, freestream, point, &InfluenceConfig::default())
}

/// Velocity at one field point: every panel's sheet contribution plus the
/// freestream. A query exactly on a panel endpoint is an error; the caller
/// never receives a silently zeroed sample.
pub fn velocity_at_with(
    panels: &PanelArray,
    strengths: &VortexStrengths,
    freestream: &Freestream,
    point: Point2,
    cfg: &InfluenceConfig,
) -> FieldResult<Vec2> {
    check_counts(panels, strengths)?;
    superpose(panels, strengths, freestream, point, cfg)
}

/// Velocity at many field points with the default influence configuration.
pub fn velocity_field(
    panels: &PanelArray,
    strengths: &VortexStrengths,
    freestream: &Freestream,
    points: &[Point2],
) -> FieldResult<Vec<Vec2>> {
    velocity_field_with(panels, strengths, freestream, points, &InfluenceConfig::default())
}

/// Velocity at many field points, evaluated in parallel.
///
/// Every point is independent of every other, so the sweep parallelizes
/// without shared mutable state; the cost is panels × points and dominates
/// high-resolution field sampling.
pub fn velocity_field_with(
    panels: &PanelArray,
    strengths: &VortexStrengths,
    freestream: &Freestream,
    points: &[Point2],
    cfg: &InfluenceConfig,
) -> FieldResult<Vec<Vec2>> {
    check_counts(panels, strengths)?;
    tracing::debug!(points = points.len(), panels = panels.len(), "field sweep");
    points
        .par_iter()
        .map(|&p| superpose(panels, strengths, freestream, p, cfg))
        .collect()
}
