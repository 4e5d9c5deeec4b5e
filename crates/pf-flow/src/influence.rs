//! Closed-form velocity influence of a linearly varying vortex sheet panel.
//!
//! The induced velocity at a target point reduces to line integrals of
//! `x^k / D(x)` for `k = 0, 1, 2` over the normalized panel coordinate
//! `x ∈ [0, 1]`, with `D(x) = A + P x + B x²` built from four geometric
//! scalars: the squared offset to the first endpoint `A`, the squared panel
//! length `B`, the cross term `P`, and the discriminant `Δ = 4AB − P²`.
//! `Δ` vanishes exactly when the target lies on the panel's supporting
//! line, which selects an alternate set of antiderivatives free of the
//! vanishing-discriminant division.

use crate::error::{FlowError, FlowResult};
use pf_core::{Point2, Real, TWO_PI, Vec2, ensure_finite_vec, perp};
use pf_geom::Panel;

/// Branch selection for the closed-form integrals.
#[derive(Clone, Copy, Debug)]
pub struct InfluenceConfig {
    /// Discriminant value at or below which the collinear antiderivatives
    /// are used.
    pub collinear_threshold: Real,
}

impl Default for InfluenceConfig {
    fn default() -> Self {
        Self {
            collinear_threshold: 0.0,
        }
    }
}

/// Velocity induced at `target` by a panel whose sheet strength varies
/// linearly from `gamma_a` at its first endpoint to `gamma_b` at its
/// second.
///
/// The sheet is mathematically singular at the panel endpoints; querying
/// one exactly is an error, never a NaN.
pub fn influence(
    panel: &Panel,
    target: Point2,
    gamma_a: Real,
    gamma_b: Real,
    cfg: &InfluenceConfig,
) -> FlowResult<Vec2> {
    let (va, vb) = unit_influences(panel, target, cfg)?;
    let v = gamma_a * va + gamma_b * vb;
    Ok(ensure_finite_vec(v, "induced velocity")?)
}

/// Unit-strength velocity pair at `target`: the influence of a unit
/// strength at the first endpoint (second held at zero) and the symmetric
/// case, sharing one set of geometric scalars.
///
/// This is the shape the tangency rows consume: each panel feeds two
/// adjacent strength unknowns.
pub fn unit_influences(
    panel: &Panel,
    target: Point2,
    cfg: &InfluenceConfig,
) -> FlowResult<(Vec2, Vec2)> {
    let ra = Vec2::new(target.x - panel.xa, target.y - panel.za);
    let rb = Vec2::new(target.x - panel.xb, target.y - panel.zb);
    if ra.norm_squared() == 0.0 || rb.norm_squared() == 0.0 {
        return Err(FlowError::TargetOnEndpoint {
            x: target.x,
            z: target.y,
        });
    }

    let span = panel.span();
    let a = ra.norm_squared();
    let b = span.norm_squared();
    let p = -2.0 * ra.dot(&span);
    let delta = 4.0 * a * b - p * p;

    let (i0, i1, i2) = if delta > cfg.collinear_threshold {
        (
            eval(|x| arctan_antiderivative(x, b, p, delta)),
            eval(|x| log_antiderivative(x, a, b, p, delta)),
            eval(|x| linear_antiderivative(x, a, b, p, delta)),
        )
    } else {
        collinear_integrals(a, b, p)
    };

    Ok(combine(panel.length, ra, span, i0, i1, i2))
}

/// Principal-value influence of a panel on its own center.
///
/// The center lies on the supporting line, so the collinear antiderivatives
/// apply with exact scalars: the offset to the first endpoint is half the
/// span, giving `A = B/4` and `P = −B`. The pair reduces to a purely normal
/// velocity `±n̂/(2π)` per unit endpoint strength. Routing this case here
/// keeps the branch choice out of the hands of floating-point noise in the
/// discriminant.
pub fn center_unit_influences(panel: &Panel) -> (Vec2, Vec2) {
    let span = panel.span();
    let b = span.norm_squared();
    let (i0, i1, i2) = collinear_integrals(0.25 * b, b, -b);
    combine(panel.length, 0.5 * span, span, i0, i1, i2)
}

/// Evaluation difference of an antiderivative over the unit interval.
fn eval(f: impl Fn(Real) -> Real) -> Real {
    f(1.0) - f(0.0)
}

fn collinear_integrals(a: Real, b: Real, p: Real) -> (Real, Real, Real) {
    (
        eval(|x| rational_antiderivative(x, b, p)),
        eval(|x| rational_log_antiderivative(x, b, p)),
        eval(|x| rational_linear_antiderivative(x, a, b, p)),
    )
}

/// Assemble the two unit-strength velocities from the three integrals.
///
/// The linear shape functions split the integrand between the endpoint
/// offsets: the first-endpoint strength weights `(1 − x)` and the second
/// weights `x`. Each offset vector enters through its quarter-turn
/// rotation, and everything scales by length over 2π.
fn combine(length: Real, ra: Vec2, span: Vec2, i0: Real, i1: Real, i2: Real) -> (Vec2, Vec2) {
    let scale = length / TWO_PI;
    let va = scale * (perp(ra) * (i0 - i1) - perp(span) * (i1 - i2));
    let vb = scale * (perp(ra) * i1 - perp(span) * i2);
    (va, vb)
}

// The six antiderivative families below are `∫ x^k / D(x) dx` for
// k = 0, 1, 2 in the regular and the collinear case. The `k = 1` and
// `k = 2` members reduce to the lower ones through
// `x²/D = (1/B)(1 − P·x/D − A/D)`.

fn arctan_antiderivative(x: Real, b: Real, p: Real, delta: Real) -> Real {
    let root = delta.sqrt();
    2.0 / root * ((2.0 * b * x + p) / root).atan()
}

fn log_antiderivative(x: Real, a: Real, b: Real, p: Real, delta: Real) -> Real {
    (a + p * x + b * x * x).ln() / (2.0 * b) - p / (2.0 * b) * arctan_antiderivative(x, b, p, delta)
}

fn linear_antiderivative(x: Real, a: Real, b: Real, p: Real, delta: Real) -> Real {
    x / b - p / b * log_antiderivative(x, a, b, p, delta)
        - a / b * arctan_antiderivative(x, b, p, delta)
}

fn rational_antiderivative(x: Real, b: Real, p: Real) -> Real {
    -2.0 / (2.0 * b * x + p)
}

fn rational_log_antiderivative(x: Real, b: Real, p: Real) -> Real {
    let u = 2.0 * b * x + p;
    (u.abs().ln() + p / u) / b
}

fn rational_linear_antiderivative(x: Real, a: Real, b: Real, p: Real) -> Real {
    x / b - p / b * rational_log_antiderivative(x, b, p) - a / b * rational_antiderivative(x, b, p)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> InfluenceConfig {
        InfluenceConfig::default()
    }

    /// Composite-Simpson reference for the influence integral.
    fn quadrature(panel: &Panel, target: Point2, ga: Real, gb: Real, steps: usize) -> Vec2 {
        assert_eq!(steps % 2, 0);
        let span = panel.span();
        let f = |t: Real| -> Vec2 {
            let r = Vec2::new(
                target.x - (panel.xa + t * span.x),
                target.y - (panel.za + t * span.y),
            );
            let gamma = ga * (1.0 - t) + gb * t;
            gamma / r.norm_squared() * perp(r)
        };
        let h = 1.0 / steps as Real;
        let mut sum = f(0.0) + f(1.0);
        for k in 1..steps {
            let w = if k % 2 == 1 { 4.0 } else { 2.0 };
            sum += w * f(k as Real * h);
        }
        panel.length / TWO_PI * h / 3.0 * sum
    }

    #[test]
    fn regular_branch_matches_quadrature() {
        let panel = Panel::new(0.0, 0.0, 1.0, 0.2).unwrap();
        for (tx, tz) in [(0.3, 0.4), (-0.5, -0.3), (1.4, 0.1), (0.5, -0.25)] {
            let target = Point2::new(tx, tz);
            let v = influence(&panel, target, 0.7, 1.3, &cfg()).unwrap();
            let q = quadrature(&panel, target, 0.7, 1.3, 4000);
            assert!(
                (v - q).norm() < 1e-9,
                "mismatch at ({tx}, {tz}): {v:?} vs {q:?}"
            );
        }
    }

    #[test]
    fn collinear_branch_matches_quadrature() {
        // Target on the supporting line beyond the second endpoint: the
        // discriminant is exactly zero and the rational antiderivatives
        // apply, while the integrand itself stays regular.
        let panel = Panel::new(0.0, 0.0, 1.0, 0.0).unwrap();
        let target = Point2::new(2.5, 0.0);
        let v = influence(&panel, target, 1.0, 0.5, &cfg()).unwrap();
        let q = quadrature(&panel, target, 1.0, 0.5, 4000);
        assert!((v - q).norm() < 1e-9, "{v:?} vs {q:?}");
    }

    #[test]
    fn branches_agree_across_the_boundary() {
        let panel = Panel::new(0.0, 0.0, 1.0, 0.0).unwrap();
        let on_line = influence(&panel, Point2::new(2.5, 0.0), 1.0, 0.5, &cfg()).unwrap();
        let off_line = influence(&panel, Point2::new(2.5, 1e-7), 1.0, 0.5, &cfg()).unwrap();
        assert!((on_line - off_line).norm() < 1e-4 * on_line.norm());
    }

    #[test]
    fn far_field_converges_to_point_vortex() {
        // Uniform strength: the dipole moment about the center vanishes and
        // the field matches a point vortex of the total circulation to
        // second order in length over distance.
        let panel = Panel::new(0.0, 0.0, 0.02, 0.01).unwrap();
        let gamma = 2.0;
        let target = Point2::new(30.0, 40.0);

        let v = influence(&panel, target, gamma, gamma, &cfg()).unwrap();

        let circulation = panel.length * gamma;
        let rho = Vec2::new(target.x - panel.xc, target.y - panel.zc);
        let point_vortex = circulation / (TWO_PI * rho.norm_squared()) * perp(rho);

        assert!((v - point_vortex).norm() < 1e-6 * point_vortex.norm());
    }

    #[test]
    fn far_field_linear_strength_is_first_order() {
        // With distinct endpoint strengths the dipole term decays one order
        // slower, so the agreement is correspondingly looser.
        let panel = Panel::new(0.0, 0.0, 0.02, 0.01).unwrap();
        let target = Point2::new(30.0, 40.0);

        let v = influence(&panel, target, 0.0, 2.0, &cfg()).unwrap();

        let circulation = panel.length * 1.0;
        let rho = Vec2::new(target.x - panel.xc, target.y - panel.zc);
        let point_vortex = circulation / (TWO_PI * rho.norm_squared()) * perp(rho);

        assert!((v - point_vortex).norm() < 5e-3 * point_vortex.norm());
    }

    #[test]
    fn endpoint_queries_are_rejected() {
        let panel = Panel::new(0.0, 0.0, 1.0, 0.2).unwrap();
        for target in [Point2::new(0.0, 0.0), Point2::new(1.0, 0.2)] {
            let err = influence(&panel, target, 1.0, 1.0, &cfg()).unwrap_err();
            assert!(matches!(err, FlowError::TargetOnEndpoint { .. }));
        }
    }

    #[test]
    fn center_influence_is_purely_normal() {
        let panel = Panel::new(0.2, 0.1, 0.5, 0.45).unwrap();
        let n = panel.normal();
        let (va, vb) = center_unit_influences(&panel);

        assert!((va - n / TWO_PI).norm() < 1e-12);
        assert!((vb + n / TWO_PI).norm() < 1e-12);

        // Combined: normal component (γa − γb)/(2π), no tangential part
        let (ga, gb) = (1.7, 0.4);
        let v = ga * va + gb * vb;
        assert!((v.dot(&n) - (ga - gb) / TWO_PI).abs() < 1e-12);
        assert!(v.dot(&(panel.span() / panel.length)).abs() < 1e-12);
    }

    #[test]
    fn tangential_jump_across_the_sheet() {
        // A uniform unit sheet carries a tangential jump of one: just above
        // the midpoint the induced velocity is +1/2 along the span, just
        // below it is −1/2.
        let panel = Panel::new(0.0, 0.0, 1.0, 0.0).unwrap();
        let above = influence(&panel, Point2::new(0.5, 1e-6), 1.0, 1.0, &cfg()).unwrap();
        let below = influence(&panel, Point2::new(0.5, -1e-6), 1.0, 1.0, &cfg()).unwrap();

        assert!((above.x - 0.5).abs() < 1e-3);
        assert!((below.x + 0.5).abs() < 1e-3);
        assert!(above.y.abs() < 1e-3);
        assert!((above + below).norm() < 1e-3);
    }
}
