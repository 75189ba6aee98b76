//! Transaction size composer
//!
//! Combines overhead, inputs and outputs into virtual size, raw size and
//! weight. Weight is always derived from the virtual size.

use super::input::input_size;
use super::output::outputs_size;
use super::overhead::{tx_overhead_extra_raw_bytes, tx_overhead_vbytes};
use crate::error::{EstimatorError, EstimatorResult};
use crate::params::{prepare_params, EstimationOptions};
use crate::types::{EstimationParams, InputSizeBreakdown, TxSizeResult};

/// Estimate the size of a transaction described by `params`
pub fn calc_tx_size(params: &EstimationParams) -> EstimatorResult<TxSizeResult> {
    params.validate()?;

    let input_count = u64::from(params.input_count);
    let InputSizeBreakdown {
        input_size,
        input_witness_size,
    } = input_size(params)?;

    let overhead = tx_overhead_vbytes(params.input_script, input_count, params.output_count())?;
    let outputs = outputs_size(params)?;
    let tx_vbytes = input_size
        .checked_mul(input_count)
        .and_then(|inputs| overhead.checked_add(inputs))
        .and_then(|partial| partial.checked_add(outputs))
        .ok_or_else(|| EstimatorError::overflow("Transaction virtual size"))?;

    let extra_raw = tx_overhead_extra_raw_bytes(params.input_script, input_count)?;
    let tx_bytes = input_witness_size
        .checked_mul(input_count)
        .and_then(|witness| witness.checked_add(tx_vbytes))
        .and_then(|partial| partial.checked_add(extra_raw))
        .ok_or_else(|| EstimatorError::overflow("Transaction size"))?;

    let result = TxSizeResult::new(tx_vbytes, tx_bytes);

    crate::log_debug!(
        "size",
        "Estimated transaction size",
        input_script = params.input_script,
        input_count = params.input_count,
        output_count = params.output_count(),
        vbytes = result.tx_vbytes,
        bytes = result.tx_bytes,
        weight = result.tx_weight.to_wu(),
    );

    Ok(result)
}

/// Prepare parameters from `options`, then estimate the transaction size
pub fn calc_tx_size_with(options: Option<&EstimationOptions>) -> EstimatorResult<TxSizeResult> {
    let params = prepare_params(options)?;
    calc_tx_size(&params)
}
