//! Parameter validator
//!
//! Merges caller options over the defaults into a canonical
//! `EstimationParams`. Nothing is retained between calls; the record is
//! passed explicitly to every size computation.

use super::options::{EstimationOptions, ParamError};
use crate::error::EstimatorResult;
use crate::types::EstimationParams;

impl EstimationParams {
    /// Check relationships the field types cannot express
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.input_script.is_multisig() && self.input_m > self.input_n {
            return Err(ParamError::ThresholdExceedsKeys {
                m: self.input_m,
                n: self.input_n,
            });
        }
        Ok(())
    }
}

/// Build the canonical parameter record for one estimation
pub fn prepare_params(options: Option<&EstimationOptions>) -> EstimatorResult<EstimationParams> {
    let defaults = EstimationParams::default();
    let Some(options) = options else {
        return Ok(defaults);
    };

    let params = EstimationParams {
        input_count: options.input_count.unwrap_or(defaults.input_count),
        input_script: options.input_script.unwrap_or(defaults.input_script),
        input_m: options.input_m.unwrap_or(defaults.input_m),
        input_n: options.input_n.unwrap_or(defaults.input_n),
        p2pkh_output_count: options.p2pkh_output_count.unwrap_or(defaults.p2pkh_output_count),
        p2sh_output_count: options.p2sh_output_count.unwrap_or(defaults.p2sh_output_count),
        p2sh_p2wpkh_output_count: options
            .p2sh_p2wpkh_output_count
            .unwrap_or(defaults.p2sh_p2wpkh_output_count),
        p2sh_p2wsh_output_count: options
            .p2sh_p2wsh_output_count
            .unwrap_or(defaults.p2sh_p2wsh_output_count),
        p2wpkh_output_count: options.p2wpkh_output_count.unwrap_or(defaults.p2wpkh_output_count),
        p2wsh_output_count: options.p2wsh_output_count.unwrap_or(defaults.p2wsh_output_count),
        p2tr_output_count: options.p2tr_output_count.unwrap_or(defaults.p2tr_output_count),
    };

    if let Err(e) = params.validate() {
        crate::log_warn!("params", "Rejected estimation parameters", reason = e);
        return Err(e.into());
    }

    crate::log_debug!(
        "params",
        "Prepared estimation parameters",
        input_script = params.input_script,
        input_count = params.input_count,
        output_count = params.output_count(),
    );

    Ok(params)
}
