//! Fee Estimation Module
//!
//! Fee and fee-range calculations over estimated sizes. The fee rate is
//! always an external input.

mod estimator;

pub use estimator::*;
