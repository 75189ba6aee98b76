//! Length-prefix sizes
//!
//! Byte lengths of a script push-data prefix and of a CompactSize integer.
//! The two tables use different boundary comparisons (`<=` versus `<`);
//! estimates depend on those exact boundaries.

use crate::error::{EstimatorError, EstimatorResult};

/// Bytes taken by the push prefix of a script element of `length` bytes
pub fn push_data_length_size(length: u64) -> EstimatorResult<u64> {
    match length {
        0..=74 => Ok(1),
        75..=0xff => Ok(2),
        0x100..=0xffff => Ok(3),
        0x1_0000..=0xffff_ffff => Ok(5),
        _ => Err(EstimatorError::value_too_large("Size of redeem script is too large")
            .with_details(format!("{} bytes", length))),
    }
}

/// Bytes taken by the CompactSize ("var-int") encoding of `value`
pub fn compact_size_length(value: u64) -> EstimatorResult<u64> {
    match value {
        0..=252 => Ok(1),
        253..=0xfffe => Ok(3),
        0xffff..=0xffff_fffe => Ok(5),
        0xffff_ffff..=0xffff_ffff_ffff_fffe => Ok(9),
        _ => Err(EstimatorError::invalid_var_int("Invalid var int").with_details(value.to_string())),
    }
}
