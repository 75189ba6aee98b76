//! Shared types for the size and fee estimator
//!
//! These types are used across the library, CLI, and FFI boundary.
//! All types are serializable to JSON for interop.

use bitcoin::Weight;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::EstimatorError;
use crate::size::Size;

// =============================================================================
// Script Types
// =============================================================================

/// Input/output script patterns with distinct size profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScriptType {
    #[serde(rename = "P2PKH")]
    P2pkh,
    #[serde(rename = "P2SH")]
    P2sh,
    #[serde(rename = "P2SH-P2WPKH")]
    P2shP2wpkh,
    #[serde(rename = "P2SH-P2WSH")]
    P2shP2wsh,
    #[serde(rename = "P2WPKH")]
    P2wpkh,
    #[serde(rename = "P2WSH")]
    P2wsh,
    #[serde(rename = "P2TR")]
    P2tr,
}

impl ScriptType {
    pub const ALL: [ScriptType; 7] = [
        ScriptType::P2pkh,
        ScriptType::P2sh,
        ScriptType::P2shP2wpkh,
        ScriptType::P2shP2wsh,
        ScriptType::P2wpkh,
        ScriptType::P2wsh,
        ScriptType::P2tr,
    ];

    /// Canonical name, as accepted in options and printed in output
    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptType::P2pkh => "P2PKH",
            ScriptType::P2sh => "P2SH",
            ScriptType::P2shP2wpkh => "P2SH-P2WPKH",
            ScriptType::P2shP2wsh => "P2SH-P2WSH",
            ScriptType::P2wpkh => "P2WPKH",
            ScriptType::P2wsh => "P2WSH",
            ScriptType::P2tr => "P2TR",
        }
    }

    /// Spending this type puts data in the witness section
    pub fn is_segwit(&self) -> bool {
        !matches!(self, ScriptType::P2pkh | ScriptType::P2sh)
    }

    /// Spending this type is modelled as an m-of-n multisig
    pub fn is_multisig(&self) -> bool {
        matches!(
            self,
            ScriptType::P2sh | ScriptType::P2wsh | ScriptType::P2shP2wsh
        )
    }
}

impl fmt::Display for ScriptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScriptType {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScriptType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                EstimatorError::invalid_parameter("Not supported input script type")
                    .with_details(s.to_string())
            })
    }
}

// =============================================================================
// Estimation Parameters
// =============================================================================

/// Canonical, validated parameter record for one estimation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimationParams {
    pub input_count: u32,
    pub input_script: ScriptType,
    /// Signatures required (multisig inputs only)
    pub input_m: u32,
    /// Public keys (multisig inputs only)
    pub input_n: u32,
    pub p2pkh_output_count: u32,
    pub p2sh_output_count: u32,
    pub p2sh_p2wpkh_output_count: u32,
    pub p2sh_p2wsh_output_count: u32,
    pub p2wpkh_output_count: u32,
    pub p2wsh_output_count: u32,
    pub p2tr_output_count: u32,
}

impl Default for EstimationParams {
    fn default() -> Self {
        Self {
            input_count: 0,
            input_script: ScriptType::P2pkh,
            input_m: 0,
            input_n: 0,
            p2pkh_output_count: 0,
            p2sh_output_count: 0,
            p2sh_p2wpkh_output_count: 0,
            p2sh_p2wsh_output_count: 0,
            p2wpkh_output_count: 0,
            p2wsh_output_count: 0,
            p2tr_output_count: 0,
        }
    }
}

impl EstimationParams {
    /// Output counts paired with their script type
    pub fn outputs(&self) -> [(ScriptType, u32); 7] {
        [
            (ScriptType::P2pkh, self.p2pkh_output_count),
            (ScriptType::P2sh, self.p2sh_output_count),
            (ScriptType::P2shP2wpkh, self.p2sh_p2wpkh_output_count),
            (ScriptType::P2shP2wsh, self.p2sh_p2wsh_output_count),
            (ScriptType::P2wpkh, self.p2wpkh_output_count),
            (ScriptType::P2wsh, self.p2wsh_output_count),
            (ScriptType::P2tr, self.p2tr_output_count),
        ]
    }

    /// Total number of outputs across all script types
    pub fn output_count(&self) -> u64 {
        self.outputs().iter().map(|(_, count)| u64::from(*count)).sum()
    }
}

// =============================================================================
// Size Results
// =============================================================================

/// Per-input size figures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSizeBreakdown {
    /// Virtual size of one input, witness discounted
    pub input_size: Size,
    /// Raw witness bytes of one input (zero for legacy inputs)
    pub input_witness_size: Size,
}

/// Estimated size of a whole transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TxSizeResult {
    #[serde(rename = "txVBytes")]
    pub tx_vbytes: Size,
    #[serde(rename = "txBytes")]
    pub tx_bytes: Size,
    #[serde(rename = "txWeight", serialize_with = "serialize_weight")]
    pub tx_weight: Weight,
}

impl TxSizeResult {
    /// Build a result whose weight is derived from the virtual size
    pub fn new(tx_vbytes: Size, tx_bytes: Size) -> Self {
        Self {
            tx_vbytes,
            tx_bytes,
            tx_weight: tx_vbytes.to_weight(),
        }
    }
}

fn serialize_weight<S: Serializer>(weight: &Weight, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(weight.to_wu())
}

// =============================================================================
// API Response Wrapper
// =============================================================================

/// Standard API response wrapper for CLI and FFI output
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<crate::error::EstimatorError>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: crate::error::EstimatorError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            r#"{"success":false,"error":{"code":"internal","message":"Serialization failed"}}"#.to_string()
        })
    }
}
