//! Per-transaction overhead
//!
//! Version, locktime and the input/output counts, plus the segwit marker,
//! flag and witness item count when the inputs carry witness data.

use super::compact::compact_size_length;
use super::units::Size;
use crate::error::{EstimatorError, EstimatorResult};
use crate::types::ScriptType;

const VERSION_SIZE: u32 = 4;
const LOCKTIME_SIZE: u32 = 4;

/// Segwit marker, flag and witness item count, at witness weight
fn witness_overhead(input_script: ScriptType, input_count: u64) -> EstimatorResult<Size> {
    if !input_script.is_segwit() {
        return Ok(Size::ZERO);
    }
    let item_count_len = compact_size_length(input_count)?;
    // one quarter each for marker and flag
    Ok(Size::from_quarters(1 + 1 + item_count_len))
}

/// Virtual-byte overhead of a transaction
pub fn tx_overhead_vbytes(
    input_script: ScriptType,
    input_count: u64,
    output_count: u64,
) -> EstimatorResult<Size> {
    let fixed = u64::from(VERSION_SIZE)
        + compact_size_length(input_count)?
        + compact_size_length(output_count)?
        + u64::from(LOCKTIME_SIZE);

    let witness = witness_overhead(input_script, input_count)?;

    Size::checked_from_bytes(fixed)
        .and_then(|base| base.checked_add(witness))
        .ok_or_else(|| EstimatorError::overflow("Transaction overhead"))
}

/// Raw bytes the segwit overhead adds on top of its discounted virtual size
pub fn tx_overhead_extra_raw_bytes(input_script: ScriptType, input_count: u64) -> EstimatorResult<Size> {
    let witness = witness_overhead(input_script, input_count)?;
    witness
        .checked_mul(3)
        .ok_or_else(|| EstimatorError::overflow("Transaction overhead"))
}
