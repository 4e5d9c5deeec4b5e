//! Uniform ambient flow.

use crate::error::{FlowError, FlowResult};
use pf_core::{Angle, Real, Vec2, Velocity};

/// Uniform freestream described by speed and angle of attack.
///
/// The velocity is uniform in space; evaluation at a point is a trivial
/// broadcast of the same vector.
#[derive(Clone, Copy, Debug)]
pub struct Freestream {
    speed: Real,
    alpha: Real,
}

impl Freestream {
    /// Create a freestream; speed must be positive and finite.
    pub fn new(speed: Velocity, alpha: Angle) -> FlowResult<Self> {
        if !speed.value.is_finite() || !(speed.value > 0.0) {
            return Err(FlowError::NonPhysical {
                what: "freestream speed must be positive",
            });
        }
        if !alpha.value.is_finite() {
            return Err(FlowError::NonPhysical {
                what: "angle of attack must be finite",
            });
        }
        Ok(Self {
            speed: speed.value,
            alpha: alpha.value,
        })
    }

    /// Speed in m/s.
    pub fn speed(&self) -> Real {
        self.speed
    }

    /// Angle of attack in radians.
    pub fn alpha(&self) -> Real {
        self.alpha
    }

    /// The uniform velocity vector.
    pub fn velocity(&self) -> Vec2 {
        Vec2::new(
            self.speed * self.alpha.cos(),
            self.speed * self.alpha.sin(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::{deg, mps, rad};

    #[test]
    fn velocity_components() {
        let fs = Freestream::new(mps(2.0), rad(0.0)).unwrap();
        assert_eq!(fs.velocity(), Vec2::new(2.0, 0.0));

        let inclined = Freestream::new(mps(1.0), deg(30.0)).unwrap();
        let v = inclined.velocity();
        assert!((v.x - 0.75f64.sqrt()).abs() < 1e-12);
        assert!((v.y - 0.5).abs() < 1e-12);
    }

    #[test]
    fn non_positive_speed_is_rejected() {
        assert!(Freestream::new(mps(0.0), rad(0.0)).is_err());
        assert!(Freestream::new(mps(-1.0), rad(0.0)).is_err());
        assert!(Freestream::new(mps(Real::NAN), rad(0.0)).is_err());
    }
}
