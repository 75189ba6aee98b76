//! Quarter-byte size unit
//!
//! Witness data is discounted by a factor of four, so every figure the
//! estimator produces is a whole number of quarter bytes. Keeping sizes as
//! integers avoids drifting away from that grid across large counts.

use bitcoin::Weight;
use serde::{Serialize, Serializer};
use std::fmt;

/// A byte count with quarter-byte resolution.
///
/// Used for both virtual bytes and raw bytes; one quarter of a virtual
/// byte is exactly one weight unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Size {
    quarters: u64,
}

impl Size {
    pub const ZERO: Size = Size { quarters: 0 };

    pub const fn from_quarters(quarters: u64) -> Self {
        Self { quarters }
    }

    pub const fn from_bytes(bytes: u32) -> Self {
        Self {
            quarters: bytes as u64 * 4,
        }
    }

    pub fn checked_from_bytes(bytes: u64) -> Option<Self> {
        bytes.checked_mul(4).map(Self::from_quarters)
    }

    pub const fn quarters(&self) -> u64 {
        self.quarters
    }

    /// Whole bytes, fractional part discarded
    pub const fn whole_bytes(&self) -> u64 {
        self.quarters / 4
    }

    pub fn as_f64(&self) -> f64 {
        self.quarters as f64 / 4.0
    }

    pub fn checked_add(self, other: Size) -> Option<Size> {
        self.quarters.checked_add(other.quarters).map(Self::from_quarters)
    }

    pub fn checked_mul(self, count: u64) -> Option<Size> {
        self.quarters.checked_mul(count).map(Self::from_quarters)
    }

    /// Weight units of a virtual size (vbytes x 4)
    pub fn to_weight(&self) -> Weight {
        Weight::from_wu(self.quarters)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_f64())
    }
}

impl Serialize for Size {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}
