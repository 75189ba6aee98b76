//! Estimation options
//!
//! `EstimationOptions` is the typed, partial configuration a caller
//! supplies. Untyped input (JSON documents, key/value text pairs from a
//! command line) is coerced here, before anything reaches the engine.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::error::EstimatorError;
use crate::types::ScriptType;

/// Option names accepted in JSON and key/value input
pub const OPTION_NAMES: [&str; 11] = [
    "input_count",
    "input_script",
    "input_m",
    "input_n",
    "p2pkh_output_count",
    "p2sh_output_count",
    "p2sh_p2wpkh_output_count",
    "p2sh_p2wsh_output_count",
    "p2wpkh_output_count",
    "p2wsh_output_count",
    "p2tr_output_count",
];

/// Option parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    #[error("expecting non-negative {0}, got: {1}")]
    Negative(String, String),

    #[error("expecting integer {0}, got: {1}")]
    NotAnInteger(String, String),

    #[error("{0} out of range: {1} (max {max})", max = u32::MAX)]
    OutOfRange(String, String),

    #[error("Not supported input script type: {0}")]
    UnsupportedScript(String),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Options must be a JSON object")]
    NotAnObject,

    #[error("signature count {m} exceeds pubkey count {n}")]
    ThresholdExceedsKeys { m: u32, n: u32 },
}

impl From<ParamError> for EstimatorError {
    fn from(e: ParamError) -> Self {
        EstimatorError::invalid_parameter(e.to_string())
    }
}

/// Partial configuration; unset fields fall back to the defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EstimationOptions {
    pub input_count: Option<u32>,
    pub input_script: Option<ScriptType>,
    pub input_m: Option<u32>,
    pub input_n: Option<u32>,
    pub p2pkh_output_count: Option<u32>,
    pub p2sh_output_count: Option<u32>,
    pub p2sh_p2wpkh_output_count: Option<u32>,
    pub p2sh_p2wsh_output_count: Option<u32>,
    pub p2wpkh_output_count: Option<u32>,
    pub p2wsh_output_count: Option<u32>,
    pub p2tr_output_count: Option<u32>,
}

impl EstimationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input_count(mut self, count: u32) -> Self {
        self.input_count = Some(count);
        self
    }

    pub fn with_input_script(mut self, script: ScriptType) -> Self {
        self.input_script = Some(script);
        self
    }

    pub fn with_input_m(mut self, m: u32) -> Self {
        self.input_m = Some(m);
        self
    }

    pub fn with_input_n(mut self, n: u32) -> Self {
        self.input_n = Some(n);
        self
    }

    pub fn with_p2pkh_output_count(mut self, count: u32) -> Self {
        self.p2pkh_output_count = Some(count);
        self
    }

    pub fn with_p2sh_output_count(mut self, count: u32) -> Self {
        self.p2sh_output_count = Some(count);
        self
    }

    pub fn with_p2sh_p2wpkh_output_count(mut self, count: u32) -> Self {
        self.p2sh_p2wpkh_output_count = Some(count);
        self
    }

    pub fn with_p2sh_p2wsh_output_count(mut self, count: u32) -> Self {
        self.p2sh_p2wsh_output_count = Some(count);
        self
    }

    pub fn with_p2wpkh_output_count(mut self, count: u32) -> Self {
        self.p2wpkh_output_count = Some(count);
        self
    }

    pub fn with_p2wsh_output_count(mut self, count: u32) -> Self {
        self.p2wsh_output_count = Some(count);
        self
    }

    pub fn with_p2tr_output_count(mut self, count: u32) -> Self {
        self.p2tr_output_count = Some(count);
        self
    }

    /// Overlay `overrides` on top of `self`; set fields in `overrides` win
    pub fn merge(self, overrides: &EstimationOptions) -> Self {
        Self {
            input_count: overrides.input_count.or(self.input_count),
            input_script: overrides.input_script.or(self.input_script),
            input_m: overrides.input_m.or(self.input_m),
            input_n: overrides.input_n.or(self.input_n),
            p2pkh_output_count: overrides.p2pkh_output_count.or(self.p2pkh_output_count),
            p2sh_output_count: overrides.p2sh_output_count.or(self.p2sh_output_count),
            p2sh_p2wpkh_output_count: overrides
                .p2sh_p2wpkh_output_count
                .or(self.p2sh_p2wpkh_output_count),
            p2sh_p2wsh_output_count: overrides
                .p2sh_p2wsh_output_count
                .or(self.p2sh_p2wsh_output_count),
            p2wpkh_output_count: overrides.p2wpkh_output_count.or(self.p2wpkh_output_count),
            p2wsh_output_count: overrides.p2wsh_output_count.or(self.p2wsh_output_count),
            p2tr_output_count: overrides.p2tr_output_count.or(self.p2tr_output_count),
        }
    }

    /// Parse options from a JSON object document
    pub fn from_json_str(json: &str) -> Result<Self, EstimatorError> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_json_value(&value)?)
    }

    /// Coerce a JSON object into options.
    ///
    /// Counts may be JSON integers or numeric strings. `null`, `false`,
    /// `0` and `""` leave a field at its default.
    pub fn from_json_value(value: &Value) -> Result<Self, ParamError> {
        let object = value.as_object().ok_or(ParamError::NotAnObject)?;
        let mut options = Self::new();
        for (key, value) in object {
            options.set(key, value)?;
        }
        Ok(options)
    }

    /// Coerce textual key/value pairs into options
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ParamError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut options = Self::new();
        for (key, value) in pairs {
            options.set(key.as_ref(), &Value::String(value.as_ref().to_string()))?;
        }
        Ok(options)
    }

    fn set(&mut self, key: &str, value: &Value) -> Result<(), ParamError> {
        let slot = match key {
            "input_script" => {
                self.input_script = coerce_script(value)?;
                return Ok(());
            }
            "input_count" => &mut self.input_count,
            "input_m" => &mut self.input_m,
            "input_n" => &mut self.input_n,
            "p2pkh_output_count" => &mut self.p2pkh_output_count,
            "p2sh_output_count" => &mut self.p2sh_output_count,
            "p2sh_p2wpkh_output_count" => &mut self.p2sh_p2wpkh_output_count,
            "p2sh_p2wsh_output_count" => &mut self.p2sh_p2wsh_output_count,
            "p2wpkh_output_count" => &mut self.p2wpkh_output_count,
            "p2wsh_output_count" => &mut self.p2wsh_output_count,
            "p2tr_output_count" => &mut self.p2tr_output_count,
            other => return Err(ParamError::UnknownOption(other.to_string())),
        };
        *slot = coerce_count(key, value)?;
        Ok(())
    }
}

fn coerce_count(key: &str, value: &Value) -> Result<Option<u32>, ParamError> {
    let not_integer = || ParamError::NotAnInteger(key.to_string(), value.to_string());
    let negative = || ParamError::Negative(key.to_string(), value.to_string());
    let out_of_range = || ParamError::OutOfRange(key.to_string(), value.to_string());

    let parsed: u64 = match value {
        Value::Null | Value::Bool(false) => return Ok(None),
        Value::Number(number) => {
            if let Some(n) = number.as_u64() {
                n
            } else if number.as_i64().is_some() {
                return Err(negative());
            } else {
                let float = number.as_f64().ok_or_else(not_integer)?;
                if float.fract() != 0.0 {
                    return Err(not_integer());
                }
                if float < 0.0 {
                    return Err(negative());
                }
                if float > f64::from(u32::MAX) {
                    return Err(out_of_range());
                }
                float as u64
            }
        }
        Value::String(text) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            match text.parse::<u64>() {
                Ok(n) => n,
                Err(_) if text.parse::<i64>().is_ok() => return Err(negative()),
                Err(_) if text.chars().all(|c| c.is_ascii_digit()) => return Err(out_of_range()),
                Err(_) => return Err(not_integer()),
            }
        }
        Value::Bool(true) | Value::Array(_) | Value::Object(_) => return Err(not_integer()),
    };

    match u32::try_from(parsed) {
        Ok(0) => Ok(None),
        Ok(n) => Ok(Some(n)),
        Err(_) => Err(out_of_range()),
    }
}

fn coerce_script(value: &Value) -> Result<Option<ScriptType>, ParamError> {
    match value {
        Value::Null | Value::Bool(false) => Ok(None),
        Value::String(text) if text.is_empty() => Ok(None),
        Value::String(text) => text
            .parse::<ScriptType>()
            .map(Some)
            .map_err(|_| ParamError::UnsupportedScript(text.clone())),
        other => Err(ParamError::UnsupportedScript(other.to_string())),
    }
}
