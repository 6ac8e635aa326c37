//! Conversion form input errors.

use thiserror::Error;

/// Reasons an amount entered in the converter cannot be used.
///
/// These never surface as warnings; the form simply shows no result.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AmountError {
    /// Input is empty.
    #[error("amount is empty")]
    Empty,
    /// Input is not a number.
    #[error("amount is not a number")]
    NotANumber,
    /// Input is negative, infinite or NaN.
    #[error("amount must be a non-negative finite number")]
    OutOfRange,
}
