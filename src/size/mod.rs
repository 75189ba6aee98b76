//! Transaction Size Estimation
//!
//! Models the serialized size of a transaction from counts and script
//! types alone, without building it:
//! - **units**: quarter-byte `Size`
//! - **compact**: push-data and CompactSize length prefixes
//! - **overhead**: per-transaction fields and segwit marker/flag
//! - **input** / **output**: per-script-type sizes
//! - **calculator**: composition into vbytes, bytes and weight

pub mod units;
pub mod compact;
pub mod overhead;
pub mod input;
pub mod output;
pub mod calculator;

#[cfg(test)]
pub mod tests;

pub use units::*;
pub use compact::*;
pub use overhead::*;
pub use input::*;
pub use output::*;
pub use calculator::*;
