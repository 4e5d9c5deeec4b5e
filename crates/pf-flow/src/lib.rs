//! pf-flow: flow models for panelflow.
//!
//! Contains:
//! - freestream (uniform ambient flow: speed + angle of attack)
//! - influence (closed-form velocity of a linearly varying vortex sheet
//!   panel, with regular and collinear integral branches)
//! - error (flow error types)

pub mod error;
pub mod freestream;
pub mod influence;

pub use error::{FlowError, FlowResult};
pub use freestream::Freestream;
pub use influence::{InfluenceConfig, center_unit_influences, influence, unit_influences};
