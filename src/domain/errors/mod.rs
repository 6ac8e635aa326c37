//! Domain error types.

mod amount_error;
mod fetch_error;

pub use amount_error::AmountError;
pub use fetch_error::FetchError;
