//! Input size calculator
//!
//! Single-key inputs have a fixed size. Multisig inputs are sized from the
//! m-of-n redeem (or witness) script they reveal.

use super::compact::{compact_size_length, push_data_length_size};
use super::units::Size;
use crate::error::{EstimatorError, EstimatorResult};
use crate::types::{EstimationParams, InputSizeBreakdown, ScriptType};

/// Fixed input sizes (virtual bytes unless noted)
pub struct InputSizeConstants;

impl InputSizeConstants {
    /// Legacy P2PKH input
    pub const P2PKH: Size = Size::from_bytes(148);

    /// Wrapped SegWit P2SH-P2WPKH input
    pub const P2SH_P2WPKH: Size = Size::from_bytes(91);

    /// Native SegWit P2WPKH input (67.75 vB)
    pub const P2WPKH: Size = Size::from_quarters(271);

    /// Taproot key-path input (57.25 vB)
    pub const P2TR: Size = Size::from_quarters(229);

    /// Raw witness of a P2WPKH spend: size(sig) + sig + size(pubkey) + pubkey
    pub const P2WPKH_WITNESS: Size = Size::from_bytes(107);

    /// Raw witness of a taproot key-path spend: size(sig) + schnorr sig
    pub const P2TR_WITNESS: Size = Size::from_bytes(65);

    /// Compressed public key
    pub const PUBKEY_SIZE: u64 = 33;

    /// DER signature with sighash byte, worst case
    pub const SIGNATURE_SIZE: u64 = 72;
}

/// Outpoint (txid + vout)
const OUTPOINT_SIZE: u64 = 32 + 4;
const SEQUENCE_SIZE: u64 = 4;
/// P2SH wrapper around a witness program: redeem script hash push and overhead
const P2SH_WRAPPER_SIZE: u64 = 32 + 3;

/// OP_M <pubkey>... OP_N OP_CHECKMULTISIG
fn multisig_script_size(n: u32) -> u64 {
    1 + u64::from(n) * (1 + InputSizeConstants::PUBKEY_SIZE) + 1 + 1
}

/// OP_0 <sig>... <script>, the same layout in scriptSig and witness
fn multisig_unlock_size(m: u32, script_size: u64) -> EstimatorResult<u64> {
    // the leading empty element works around the CHECKMULTISIG extra pop
    Ok(1
        + u64::from(m) * (1 + InputSizeConstants::SIGNATURE_SIZE)
        + push_data_length_size(script_size)?
        + script_size)
}

/// Size of one input spending `params.input_script`
pub fn input_size(params: &EstimationParams) -> EstimatorResult<InputSizeBreakdown> {
    let (input_size, input_witness_size) = match params.input_script {
        ScriptType::P2pkh => (InputSizeConstants::P2PKH, Size::ZERO),
        ScriptType::P2shP2wpkh => (InputSizeConstants::P2SH_P2WPKH, InputSizeConstants::P2WPKH_WITNESS),
        ScriptType::P2wpkh => (InputSizeConstants::P2WPKH, InputSizeConstants::P2WPKH_WITNESS),
        // cooperative key-path spend only, multisig assumed aggregated
        ScriptType::P2tr => (InputSizeConstants::P2TR, InputSizeConstants::P2TR_WITNESS),
        ScriptType::P2sh => {
            let redeem_script_size = multisig_script_size(params.input_n);
            let script_sig_size = multisig_unlock_size(params.input_m, redeem_script_size)?;
            let bytes = OUTPOINT_SIZE
                + compact_size_length(script_sig_size)?
                + script_sig_size
                + SEQUENCE_SIZE;
            (to_size(bytes)?, Size::ZERO)
        }
        ScriptType::P2wsh | ScriptType::P2shP2wsh => {
            let witness_script_size = multisig_script_size(params.input_n);
            let witness_size = multisig_unlock_size(params.input_m, witness_script_size)?;

            let mut base = OUTPOINT_SIZE + SEQUENCE_SIZE;
            if params.input_script == ScriptType::P2shP2wsh {
                base += P2SH_WRAPPER_SIZE;
            }
            // witness bytes count a quarter each
            let size = to_size(base)?
                .checked_add(Size::from_quarters(witness_size))
                .ok_or_else(|| EstimatorError::overflow("Input size"))?;
            (size, to_size(witness_size)?)
        }
    };

    Ok(InputSizeBreakdown {
        input_size,
        input_witness_size,
    })
}

fn to_size(bytes: u64) -> EstimatorResult<Size> {
    Size::checked_from_bytes(bytes).ok_or_else(|| EstimatorError::overflow("Input size"))
}
