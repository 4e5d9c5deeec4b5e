//! End-to-end checks of the solved sheet strengths on a symmetric section.

use pf_core::{mps, rad};
use pf_flow::Freestream;
use pf_geom::{discretize, sections};
use pf_solver::solve;

#[test]
fn zero_incidence_strengths_are_antisymmetric() {
    // At zero angle of attack a symmetric section carries mirror-image
    // surface speeds, so node k and its lower-surface mirror must hold
    // strengths of equal magnitude and opposite sign. This pins down the
    // normal-vector sign convention end to end.
    let (x, z) = sections::naca4("0012", 200).unwrap();
    let panels = discretize(&x, &z, 60).unwrap();
    let freestream = Freestream::new(mps(1.0), rad(0.0)).unwrap();

    let strengths = solve(&panels, &freestream).unwrap();
    let gamma = strengths.as_slice();
    let n = panels.len();

    let scale = gamma.iter().fold(0.0f64, |m, g| m.max(g.abs()));
    assert!(scale > 0.5, "surface speeds should be of freestream order");

    for k in 0..=n {
        assert!(
            (gamma[k] + gamma[n - k]).abs() < 1e-6 * scale,
            "node {k}: {} vs mirror {}",
            gamma[k],
            gamma[n - k]
        );
    }
}

#[test]
fn trailing_edge_nodes_cancel() {
    let (x, z) = sections::naca4("0012", 200).unwrap();
    let panels = discretize(&x, &z, 40).unwrap();
    let freestream = Freestream::new(mps(1.0), rad(0.0872664625997165)).unwrap();

    let strengths = solve(&panels, &freestream).unwrap();
    let gamma = strengths.as_slice();

    assert!((gamma[0] + gamma[40]).abs() < 1e-10);
}

#[test]
fn repeated_solves_are_identical() {
    // The whole pipeline is deterministic: same geometry and freestream
    // must reproduce the strength vector bit for bit.
    let (x, z) = sections::naca4("2412", 160).unwrap();
    let panels = discretize(&x, &z, 48).unwrap();
    let freestream = Freestream::new(mps(1.0), rad(0.05)).unwrap();

    let first = solve(&panels, &freestream).unwrap();
    let second = solve(&panels, &freestream).unwrap();

    assert_eq!(first.as_slice(), second.as_slice());
}
