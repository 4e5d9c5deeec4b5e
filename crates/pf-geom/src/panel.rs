//! Straight boundary elements and the closed panel sequence.

use crate::error::{GeomResult, GeometryError};
use pf_core::{Point2, Real, Vec2};
use std::f64::consts::PI;

/// Which surface a panel belongs to, derived from its orientation angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Side {
    Upper,
    Lower,
}

/// A straight boundary element with derived geometric attributes.
///
/// Immutable once constructed. The orientation angle `beta` lies in
/// [0, 2π) and is measured so that the unit normal `(cos β, sin β)` points
/// away from the interior when the contour is traversed trailing edge →
/// upper surface → leading edge → lower surface. All panels of one array
/// must share the same traversal sense or the tangency signs are wrong for
/// the whole array.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Panel {
    /// First endpoint
    pub xa: Real,
    pub za: Real,
    /// Second endpoint
    pub xb: Real,
    pub zb: Real,
    /// Center (control point)
    pub xc: Real,
    pub zc: Real,
    /// Euclidean length, always positive
    pub length: Real,
    /// Orientation angle in [0, 2π)
    pub beta: Real,
    /// Surface classification from `beta <= π`
    pub side: Side,
}

impl Panel {
    /// Build a panel from its two endpoints, rejecting zero-length input.
    pub fn new(xa: Real, za: Real, xb: Real, zb: Real) -> GeomResult<Self> {
        let dx = xb - xa;
        let dz = zb - za;
        let length = (dx * dx + dz * dz).sqrt();
        if !(length > 0.0) {
            return Err(GeometryError::DegeneratePanel { x: xa, z: za });
        }

        // Orientation of the outward normal. A vertical panel (dx == 0)
        // takes the first form.
        let beta = if dx <= 0.0 {
            (dz / length).acos()
        } else {
            PI + (-dz / length).acos()
        };
        let side = if beta <= PI { Side::Upper } else { Side::Lower };

        Ok(Self {
            xa,
            za,
            xb,
            zb,
            xc: 0.5 * (xa + xb),
            zc: 0.5 * (za + zb),
            length,
            beta,
            side,
        })
    }

    pub fn first(&self) -> Point2 {
        Point2::new(self.xa, self.za)
    }

    pub fn second(&self) -> Point2 {
        Point2::new(self.xb, self.zb)
    }

    /// Control point at the panel center.
    pub fn center(&self) -> Point2 {
        Point2::new(self.xc, self.zc)
    }

    /// Outward unit normal.
    pub fn normal(&self) -> Vec2 {
        Vec2::new(self.beta.cos(), self.beta.sin())
    }

    /// Endpoint-to-endpoint vector, first → second.
    pub fn span(&self) -> Vec2 {
        Vec2::new(self.xb - self.xa, self.zb - self.za)
    }
}

/// Ordered closed sequence of panels approximating the section surface.
///
/// Index order is the solve order and is preserved end-to-end: endpoint
/// continuity between panel i and panel i+1 is what ties each panel to two
/// adjacent strength unknowns.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PanelArray {
    panels: Vec<Panel>,
}

impl PanelArray {
    pub fn new(panels: Vec<Panel>) -> GeomResult<Self> {
        if panels.is_empty() {
            return Err(GeometryError::EmptyArray);
        }
        Ok(Self { panels })
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Number of sheet-strength nodes, one per panel endpoint.
    ///
    /// The closing node is tracked separately from node 0; the trailing-edge
    /// condition relates the two rather than merging them.
    pub fn node_count(&self) -> usize {
        self.panels.len() + 1
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Panel> {
        self.panels.iter()
    }

    /// True when the last panel's second endpoint coincides exactly with the
    /// first panel's first endpoint.
    pub fn is_closed(&self) -> bool {
        let first = &self.panels[0];
        let last = &self.panels[self.panels.len() - 1];
        first.xa == last.xb && first.za == last.zb
    }

    /// x-extent of the array, the reference length for force coefficients.
    pub fn chord(&self) -> Real {
        let mut lo = Real::INFINITY;
        let mut hi = Real::NEG_INFINITY;
        for p in &self.panels {
            lo = lo.min(p.xa).min(p.xb);
            hi = hi.max(p.xa).max(p.xb);
        }
        hi - lo
    }
}

impl std::ops::Index<usize> for PanelArray {
    type Output = Panel;

    fn index(&self, i: usize) -> &Panel {
        &self.panels[i]
    }
}
