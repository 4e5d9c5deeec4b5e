//! pf-geom: surface geometry layer for panelflow.
//!
//! Provides:
//! - straight boundary elements with derived attributes (Panel, Side)
//! - the closed ordered panel sequence used by the solver (PanelArray)
//! - the cosine-spacing discretizer turning raw surface coordinates into panels
//! - coordinate generators for common test sections (NACA 4-digit, circle)
//!
//! # Example
//!
//! ```
//! use pf_geom::{discretize, sections};
//!
//! let (x, z) = sections::naca4("0012", 120).unwrap();
//! let panels = discretize(&x, &z, 40).unwrap();
//!
//! assert_eq!(panels.len(), 40);
//! assert!(panels.is_closed());
//! ```

pub mod discretize;
pub mod error;
pub mod panel;
pub mod sections;

// Re-exports for ergonomics
pub use discretize::discretize;
pub use error::{GeomResult, GeometryError};
pub use panel::{Panel, PanelArray, Side};
