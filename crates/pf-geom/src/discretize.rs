//! Cosine-spacing discretizer: raw surface coordinates → closed panel array.

use crate::error::{GeomResult, GeometryError};
use crate::panel::{Panel, PanelArray};
use pf_core::{Real, TWO_PI};

/// Fraction by which the reference-circle radius is shrunk so that sampled
/// abscissas stay strictly inside the data range.
const RADIUS_SHRINK: Real = 1.0 / 10_000.0;

/// Discretize an ordered surface trace into `requested` panels.
///
/// The abscissas of the panel endpoints are the x-projections of equally
/// spaced points on a reference circle spanning the section chord, which
/// clusters panels near the leading and trailing edges. Ordinates come from
/// linear interpolation along the input polyline, scanned in one monotonic
/// pass; an abscissa the scan cannot bracket is an error, never an
/// extrapolation.
///
/// The array is treated as a closed loop, so an odd `requested` count is
/// silently reduced by one. Input must trace the surface once, trailing
/// edge first; the first and last points may or may not coincide (the
/// polyline is closed internally when they do not share an abscissa).
pub fn discretize(x: &[Real], z: &[Real], requested: usize) -> GeomResult<PanelArray> {
    if x.len() != z.len() {
        return Err(GeometryError::MismatchedArrays {
            x_len: x.len(),
            z_len: z.len(),
        });
    }
    if x.len() < 3 {
        return Err(GeometryError::TooFewPoints {
            got: x.len(),
            need: 3,
        });
    }

    let n = requested - requested % 2;
    if n != requested {
        tracing::debug!(requested, used = n, "odd panel count reduced to even");
    }
    if n < 2 {
        return Err(GeometryError::PanelCount { requested });
    }

    let (x_min, x_max) = extent(x);
    if !(x_max > x_min) {
        return Err(GeometryError::ZeroChord);
    }

    // Reference circle for cosine clustering
    let x_center = 0.5 * (x_min + x_max);
    let radius = 0.5 * (x_max - x_min) * (1.0 - RADIUS_SHRINK);

    let mut x_ends = Vec::with_capacity(n + 1);
    for i in 0..=n {
        let theta = TWO_PI * i as Real / n as Real;
        x_ends.push(x_center + radius * theta.cos());
    }

    // Close the search polyline when the trace does not return to its
    // starting abscissa.
    let closed: (Vec<Real>, Vec<Real>);
    let (px, pz) = if x[x.len() - 1] != x[0] {
        let mut cx = x.to_vec();
        let mut cz = z.to_vec();
        cx.push(x[0]);
        cz.push(z[0]);
        closed = (cx, cz);
        (&closed.0[..], &closed.1[..])
    } else {
        (x, z)
    };

    // One monotonic pass: the segment pointer only ever advances.
    let mut z_ends = vec![0.0; n + 1];
    let mut seg = 0;
    for i in 0..n {
        let xe = x_ends[i];
        loop {
            if seg + 1 >= px.len() {
                return Err(GeometryError::Unbracketable { abscissa: xe });
            }
            let (x0, x1) = (px[seg], px[seg + 1]);
            if (x0 <= xe && xe <= x1) || (x1 <= xe && xe <= x0) {
                break;
            }
            seg += 1;
        }
        let (x0, x1) = (px[seg], px[seg + 1]);
        z_ends[i] = if x1 == x0 {
            // Vertical data segment: the shared abscissa maps to its start
            pz[seg]
        } else {
            pz[seg] + (pz[seg + 1] - pz[seg]) * (xe - x0) / (x1 - x0)
        };
    }

    // Closure: the loop ends exactly where it began
    x_ends[n] = x_ends[0];
    z_ends[n] = z_ends[0];

    let mut panels = Vec::with_capacity(n);
    for i in 0..n {
        panels.push(Panel::new(x_ends[i], z_ends[i], x_ends[i + 1], z_ends[i + 1])?);
    }
    PanelArray::new(panels)
}

fn extent(x: &[Real]) -> (Real, Real) {
    let mut lo = Real::INFINITY;
    let mut hi = Real::NEG_INFINITY;
    for &v in x {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    (lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections;

    #[test]
    fn requested_count_and_closure() {
        let (x, z) = sections::naca4("0012", 160).unwrap();
        let array = discretize(&x, &z, 40).unwrap();
        assert_eq!(array.len(), 40);
        assert!(array.is_closed());
    }

    #[test]
    fn odd_request_is_reduced_by_one() {
        let (x, z) = sections::naca4("0012", 160).unwrap();
        let array = discretize(&x, &z, 41).unwrap();
        assert_eq!(array.len(), 40);
    }

    #[test]
    fn centers_stay_near_the_surface() {
        let (x, z) = sections::naca4("0012", 240).unwrap();
        let array = discretize(&x, &z, 40).unwrap();
        // Symmetric section: |z| at a panel center must track the thickness
        // distribution to within one panel chord's sagitta. The panels
        // touching the nose set the bound: their chords cut across the
        // highest-curvature region.
        let t = 0.12;
        for p in array.iter() {
            let xc = p.xc.clamp(0.0, 1.0);
            let yt = 5.0
                * t
                * (0.2969 * xc.sqrt() - 0.1260 * xc - 0.3516 * xc.powi(2)
                    + 0.2843 * xc.powi(3)
                    - 0.1015 * xc.powi(4));
            assert!(
                (p.zc.abs() - yt).abs() < 2e-2,
                "center ({}, {}) is off the surface",
                p.xc,
                p.zc
            );
        }
    }

    #[test]
    fn leading_edge_first_traversal_is_rejected() {
        // A diamond traced from the leading edge breaks the monotonic scan:
        // the returning abscissas lie behind the segment pointer.
        let x = [0.0, 0.5, 1.0, 0.5, 0.0];
        let z = [0.0, 0.3, 0.0, -0.3, 0.0];
        let err = discretize(&x, &z, 8).unwrap_err();
        assert!(matches!(err, GeometryError::Unbracketable { .. }));
    }

    #[test]
    fn mismatched_arrays_are_rejected() {
        let err = discretize(&[0.0, 1.0, 0.5], &[0.0, 0.1], 8).unwrap_err();
        assert!(matches!(err, GeometryError::MismatchedArrays { .. }));
    }

    #[test]
    fn collapsed_chord_is_rejected() {
        let err = discretize(&[0.3, 0.3, 0.3], &[0.0, 0.1, 0.2], 8).unwrap_err();
        assert!(matches!(err, GeometryError::ZeroChord));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::sections;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn even_count_and_exact_closure(requested in 8usize..72, thickness in 6u32..19) {
            let code = format!("00{thickness:02}");
            let (x, z) = sections::naca4(&code, 200).unwrap();
            let array = discretize(&x, &z, requested).unwrap();

            prop_assert_eq!(array.len(), requested - requested % 2);
            prop_assert!(array.is_closed());
            for pair in array.panels().windows(2) {
                // Shared node between consecutive panels
                prop_assert_eq!(pair[0].xb, pair[1].xa);
                prop_assert_eq!(pair[0].zb, pair[1].za);
            }
        }
    }
}
