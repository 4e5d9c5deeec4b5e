//! Coordinate generators for common test sections.
//!
//! Both generators emit the dat-file traversal the discretizer expects:
//! trailing edge → upper surface → leading edge → lower surface.

use crate::error::{GeomResult, GeometryError};
use pf_core::{Real, TWO_PI};
use std::f64::consts::PI;

/// Surface coordinates of a NACA 4-digit section with unit chord.
///
/// `samples` is the number of chordwise stations per surface; the result
/// holds `2 * samples + 1` points starting and ending at the trailing edge.
pub fn naca4(code: &str, samples: usize) -> GeomResult<(Vec<Real>, Vec<Real>)> {
    let digits = parse_code(code)?;
    let m = digits[0] as Real / 100.0;
    let p = digits[1] as Real / 10.0;
    let t = (digits[2] * 10 + digits[3]) as Real / 100.0;

    if samples < 8 {
        return Err(GeometryError::TooFewPoints {
            got: samples,
            need: 8,
        });
    }

    let mut upper = Vec::with_capacity(samples + 1);
    let mut lower = Vec::with_capacity(samples + 1);

    for i in 0..=samples {
        // Cosine clustering toward both edges
        let x = 0.5 * (1.0 - (PI * i as Real / samples as Real).cos());

        let yt = 5.0
            * t
            * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x.powi(2) + 0.2843 * x.powi(3)
                - 0.1015 * x.powi(4));

        // Mean camber line and its slope; a symmetric section (m == 0)
        // always takes the aft branch and stays flat.
        let (yc, dyc_dx) = if x < p {
            (
                m * (x / p.powi(2)) * (2.0 * p - x),
                2.0 * m / p.powi(2) * (p - x),
            )
        } else {
            (
                m * ((1.0 - x) / (1.0 - p).powi(2)) * (1.0 + x - 2.0 * p),
                2.0 * m / (1.0 - p).powi(2) * (p - x),
            )
        };

        let theta = dyc_dx.atan();
        upper.push((x - yt * theta.sin(), yc + yt * theta.cos()));
        lower.push((x + yt * theta.sin(), yc - yt * theta.cos()));
    }

    // Trailing edge first: upper surface reversed, then lower from the
    // leading edge outward (skipping the duplicated nose point).
    let mut xs = Vec::with_capacity(2 * samples + 1);
    let mut zs = Vec::with_capacity(2 * samples + 1);
    for &(x, z) in upper.iter().rev() {
        xs.push(x);
        zs.push(z);
    }
    for &(x, z) in lower.iter().skip(1) {
        xs.push(x);
        zs.push(z);
    }

    Ok((xs, zs))
}

/// Closed circular contour of the given radius centered at the origin,
/// traced counterclockwise from (radius, 0).
pub fn circle(radius: Real, samples: usize) -> GeomResult<(Vec<Real>, Vec<Real>)> {
    if !(radius > 0.0) {
        return Err(GeometryError::ZeroChord);
    }
    if samples < 8 {
        return Err(GeometryError::TooFewPoints {
            got: samples,
            need: 8,
        });
    }

    let mut xs = Vec::with_capacity(samples + 1);
    let mut zs = Vec::with_capacity(samples + 1);
    for k in 0..samples {
        let phi = TWO_PI * k as Real / samples as Real;
        xs.push(radius * phi.cos());
        zs.push(radius * phi.sin());
    }
    // Exact closure
    xs.push(xs[0]);
    zs.push(zs[0]);

    Ok((xs, zs))
}

fn parse_code(code: &str) -> GeomResult<[u32; 4]> {
    let invalid = || GeometryError::SectionCode {
        code: code.to_string(),
    };
    let mut digits = [0u32; 4];
    let mut chars = code.chars();
    for d in digits.iter_mut() {
        *d = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .ok_or_else(invalid)?;
    }
    if chars.next().is_some() {
        return Err(invalid());
    }
    Ok(digits)
}
