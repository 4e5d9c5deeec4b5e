// pf-core/src/units.rs

use uom::si::f64::{Angle as UomAngle, Velocity as UomVelocity};

// Public canonical unit types (SI, f64)
pub type Angle = UomAngle;
pub type Velocity = UomVelocity;

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn rad(v: f64) -> Angle {
    use uom::si::angle::radian;
    Angle::new::<radian>(v)
}

#[inline]
pub fn deg(v: f64) -> Angle {
    use uom::si::angle::degree;
    Angle::new::<degree>(v)
}
