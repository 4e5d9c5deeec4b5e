//! 2D plane aliases and small vector helpers.

use crate::{PfError, Real};

pub type Vec2 = nalgebra::Vector2<Real>;
pub type Point2 = nalgebra::Point2<Real>;

/// Quarter-turn rotation (vx, vz) -> (vz, -vx).
///
/// Maps an in-plane gradient onto the induced-velocity convention used by
/// the vortex influence integrals.
#[inline]
pub fn perp(v: Vec2) -> Vec2 {
    Vec2::new(v.y, -v.x)
}

pub fn ensure_finite_vec(v: Vec2, what: &'static str) -> Result<Vec2, PfError> {
    if v.x.is_finite() && v.y.is_finite() {
        Ok(v)
    } else {
        Err(PfError::NonFinite {
            what,
            value: if v.x.is_finite() { v.y } else { v.x },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perp_is_quarter_turn() {
        let v = Vec2::new(3.0, 4.0);
        let p = perp(v);
        assert_eq!(p, Vec2::new(4.0, -3.0));
        // perpendicular and length preserving
        assert_eq!(v.dot(&p), 0.0);
        assert_eq!(v.norm_squared(), p.norm_squared());
    }

    #[test]
    fn ensure_finite_vec_rejects_nan_component() {
        let v = Vec2::new(1.0, Real::NAN);
        assert!(ensure_finite_vec(v, "test").is_err());
    }
}
