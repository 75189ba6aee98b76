//! Estimation Parameters
//!
//! Turns caller-supplied configuration into the validated
//! `EstimationParams` record every size computation takes.

mod options;
mod validator;

pub use options::*;
pub use validator::*;
