//! Output size table

use super::units::Size;
use crate::error::{EstimatorError, EstimatorResult};
use crate::types::{EstimationParams, ScriptType};

impl ScriptType {
    /// Virtual size of one output paying to this script type
    pub const fn output_size(self) -> Size {
        match self {
            ScriptType::P2pkh => Size::from_bytes(34),
            ScriptType::P2sh | ScriptType::P2shP2wpkh | ScriptType::P2shP2wsh => Size::from_bytes(32),
            ScriptType::P2wpkh => Size::from_bytes(31),
            ScriptType::P2wsh => Size::from_bytes(43),
            ScriptType::P2tr => Size::from_bytes(43),
        }
    }
}

/// Combined size of all outputs requested in `params`
pub fn outputs_size(params: &EstimationParams) -> EstimatorResult<Size> {
    params
        .outputs()
        .iter()
        .try_fold(Size::ZERO, |total, (script, count)| {
            script
                .output_size()
                .checked_mul(u64::from(*count))
                .and_then(|size| total.checked_add(size))
        })
        .ok_or_else(|| EstimatorError::overflow("Output size"))
}
