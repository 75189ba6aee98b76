//! Fee Estimator
//!
//! Turns an estimated size and an externally supplied fee rate into a fee,
//! and formats a symmetric range around a fee.

use serde::Serialize;
use std::fmt;

use crate::error::{EstimatorError, EstimatorResult};
use crate::types::TxSizeResult;

// =============================================================================
// Fee Estimation
// =============================================================================

/// Fee in satoshis: `trunc(vbytes) * trunc(sat_per_vbyte)`
///
/// Signs are carried through, so a negative input yields a negative fee.
pub fn estimate_fee(vbytes: f64, sat_per_vbyte: f64) -> EstimatorResult<i64> {
    let vbytes = truncate(vbytes, "vbytes")?;
    let rate = truncate(sat_per_vbyte, "fee rate")?;

    vbytes
        .checked_mul(rate)
        .ok_or_else(|| EstimatorError::overflow("Fee"))
}

/// Fee for an estimated transaction at `sat_per_vbyte`
pub fn estimate_fee_for(size: &TxSizeResult, sat_per_vbyte: f64) -> EstimatorResult<i64> {
    let vbytes = i64::try_from(size.tx_vbytes.whole_bytes())
        .map_err(|_| EstimatorError::overflow("vbytes"))?;
    let rate = truncate(sat_per_vbyte, "fee rate")?;

    vbytes
        .checked_mul(rate)
        .ok_or_else(|| EstimatorError::overflow("Fee"))
}

fn truncate(value: f64, what: &str) -> EstimatorResult<i64> {
    let truncated = require_number(value)?.trunc();
    // i64::MAX as f64 rounds up to 2^63
    if truncated >= i64::MAX as f64 || truncated < i64::MIN as f64 {
        return Err(EstimatorError::overflow(what));
    }
    Ok(truncated as i64)
}

// =============================================================================
// Fee Range
// =============================================================================

/// Symmetric range around a fee
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeeRange {
    pub low: f64,
    pub high: f64,
}

impl fmt::Display for FeeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", format_amount(self.low), format_amount(self.high))
    }
}

/// Shortest decimal form; magnitudes from 1e21 up or below 1e-6 use an
/// exponent with an explicit sign (`1e+21`, `5e-7`)
fn format_amount(value: f64) -> String {
    // + 0.0 turns -0 into 0
    let value = value + 0.0;
    let magnitude = value.abs();
    if value == 0.0 || (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }
    let scientific = format!("{:e}", value);
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => scientific,
    }
}

/// `fee ± floor(fee) * multiplier`, centred on the truncated fee
pub fn fee_range(fee: f64, multiplier: f64) -> EstimatorResult<FeeRange> {
    let fee = require_number(fee)?.trunc();
    let multiplier = require_number(multiplier)?;

    if multiplier < 0.0 {
        return Err(EstimatorError::negative_multiplier("Multiplier cannot be negative")
            .with_details(multiplier.to_string()));
    }

    let delta = fee * multiplier;
    Ok(FeeRange {
        low: fee - delta,
        high: fee + delta,
    })
}

/// Format a fee range as `"<low> - <high>"`
pub fn format_fee_range(fee: f64, multiplier: f64) -> EstimatorResult<String> {
    fee_range(fee, multiplier).map(|range| range.to_string())
}

// =============================================================================
// Numeric Input
// =============================================================================

/// Parse a textual fee, rate or multiplier argument
pub fn parse_number(text: &str) -> EstimatorResult<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| not_a_number(text))
        .and_then(require_number)
}

fn require_number(value: f64) -> EstimatorResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(not_a_number(&value.to_string()))
    }
}

fn not_a_number(raw: &str) -> EstimatorError {
    EstimatorError::not_a_number("Parameters should be numbers").with_details(raw.to_string())
}
