//! Bitcoin Transaction Size & Fee Estimator
//!
//! Predicts the serialized size, weight and fee of a Bitcoin transaction
//! from high-level parameters (input/output counts, script types, multisig
//! thresholds) without building the transaction.
//!
//! # Architecture
//!
//! This crate provides:
//! - **params**: option parsing and validation into `EstimationParams`
//! - **size**: length prefixes, overhead, input/output sizes and composition
//! - **fees**: fee and fee-range calculation from an external fee rate
//! - **ffi**: C-ABI exports (JSON in, JSON out)
//!
//! Every computation takes its parameters explicitly; no state is kept
//! between calls.
//!
//! # Example
//!
//! ```rust
//! use btc_size_fee::{calc_tx_size_with, estimate_fee_for, EstimationOptions, ScriptType};
//!
//! let options = EstimationOptions::new()
//!     .with_input_count(1)
//!     .with_input_script(ScriptType::P2wpkh)
//!     .with_p2wpkh_output_count(2);
//! let size = calc_tx_size_with(Some(&options))?;
//! assert_eq!(size.tx_vbytes.as_f64(), 140.5);
//!
//! let fee = estimate_fee_for(&size, 10.0)?;
//! assert_eq!(fee, 1400);
//! # Ok::<(), btc_size_fee::EstimatorError>(())
//! ```

pub mod error;
pub mod types;
pub mod params;
pub mod size;
pub mod fees;
pub mod ffi;
pub mod utils;

// Re-export key types for convenience
pub use error::{ErrorCode, EstimatorError, EstimatorResult};
pub use types::*;

pub use params::{prepare_params, EstimationOptions, ParamError, OPTION_NAMES};
pub use size::{
    calc_tx_size, calc_tx_size_with, compact_size_length, input_size, outputs_size,
    push_data_length_size, tx_overhead_extra_raw_bytes, tx_overhead_vbytes, InputSizeConstants,
    Size,
};
pub use fees::{estimate_fee, estimate_fee_for, fee_range, format_fee_range, parse_number, FeeRange};

pub use ffi::{btcfee_calc_tx_size, btcfee_estimate_fee, btcfee_format_fee_range, btcfee_free_string};
