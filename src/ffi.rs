//! FFI Layer
//!
//! All C-ABI exports are defined here. Every function follows the same
//! pattern:
//! - Input: JSON string (null-terminated C string)
//! - Output: JSON string (must be freed with `btcfee_free_string`)
//!
//! Error handling: All functions return JSON with a `success` field.
//! On error, `success: false` and the `error` object is populated.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{EstimatorError, EstimatorResult};
use crate::fees::{estimate_fee, format_fee_range, parse_number};
use crate::params::EstimationOptions;
use crate::size::calc_tx_size_with;
use crate::types::ApiResponse;

// =============================================================================
// Memory Management
// =============================================================================

/// Free a string returned by any btcfee_* function
///
/// # Safety
/// The pointer must have been returned by a btcfee_* function
#[unsafe(no_mangle)]
pub extern "C" fn btcfee_free_string(s: *mut c_char) {
    if s.is_null() {
        return;
    }
    unsafe {
        let _ = CString::from_raw(s);
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Convert C string to Rust string, returning error JSON if invalid
fn parse_input<'a>(input: *const c_char) -> Result<&'a str, *mut c_char> {
    if input.is_null() {
        return Err(error_response(EstimatorError::invalid_parameter("Null input pointer")));
    }

    let c_str = unsafe { CStr::from_ptr(input) };
    c_str
        .to_str()
        .map_err(|_| error_response(EstimatorError::invalid_parameter("Invalid UTF-8 string")))
}

fn respond<T: serde::Serialize>(result: EstimatorResult<T>) -> *mut c_char {
    let response = match result {
        Ok(data) => ApiResponse::ok(data),
        Err(e) => ApiResponse::err(e),
    };
    string_to_ptr(response.to_json())
}

fn error_response(error: EstimatorError) -> *mut c_char {
    string_to_ptr(ApiResponse::<()>::err(error).to_json())
}

fn string_to_ptr(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(c_str) => c_str.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Numbers may arrive as JSON numbers or numeric strings
fn number_from(value: &Value) -> EstimatorResult<f64> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| EstimatorError::not_a_number("Parameters should be numbers")),
        Value::String(s) => parse_number(s),
        other => Err(EstimatorError::not_a_number("Parameters should be numbers")
            .with_details(other.to_string())),
    }
}

// =============================================================================
// Size Estimation
// =============================================================================

/// Estimate transaction size from an options object
///
/// Input: `{"input_count": 1, "input_script": "P2WPKH", "p2wpkh_output_count": 2}`
/// Output: `{"success": true, "data": {"txVBytes": .., "txBytes": .., "txWeight": ..}}`
#[unsafe(no_mangle)]
pub extern "C" fn btcfee_calc_tx_size(json_input: *const c_char) -> *mut c_char {
    let json_str = match parse_input(json_input) {
        Ok(s) => s,
        Err(e) => return e,
    };

    respond(
        EstimationOptions::from_json_str(json_str)
            .and_then(|options| calc_tx_size_with(Some(&options))),
    )
}

// =============================================================================
// Fees
// =============================================================================

#[derive(Deserialize)]
struct FeeRequest {
    vbytes: Value,
    fee_rate: Value,
}

#[derive(Deserialize)]
struct FeeRangeRequest {
    fee: Value,
    multiplier: Value,
}

/// Estimate a fee in satoshis
///
/// Input: `{"vbytes": 140.5, "fee_rate": 10}`
#[unsafe(no_mangle)]
pub extern "C" fn btcfee_estimate_fee(json_input: *const c_char) -> *mut c_char {
    let json_str = match parse_input(json_input) {
        Ok(s) => s,
        Err(e) => return e,
    };

    respond(
        serde_json::from_str::<FeeRequest>(json_str)
            .map_err(EstimatorError::from)
            .and_then(|req| estimate_fee(number_from(&req.vbytes)?, number_from(&req.fee_rate)?)),
    )
}

/// Format a fee range string
///
/// Input: `{"fee": 1000, "multiplier": 0.05}` -> data `"950 - 1050"`
#[unsafe(no_mangle)]
pub extern "C" fn btcfee_format_fee_range(json_input: *const c_char) -> *mut c_char {
    let json_str = match parse_input(json_input) {
        Ok(s) => s,
        Err(e) => return e,
    };

    respond(
        serde_json::from_str::<FeeRangeRequest>(json_str)
            .map_err(EstimatorError::from)
            .and_then(|req| format_fee_range(number_from(&req.fee)?, number_from(&req.multiplier)?)),
    )
}
