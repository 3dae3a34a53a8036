//! Currency registry, exchange-rate tables, conversion and balances.
//!
//! Everything in here is pure: values go in, a result or a [`SaldoError`]
//! comes out. Documents and customers are plain data; the CSV front end lives
//! in [`crate::ingest`].

mod balance;
mod conversion;
pub mod currencies;
mod error;
mod rates;
mod rounding;
mod types;

pub use balance::*;
pub use conversion::*;
pub use currencies::{Currency, is_known_currency_code};
pub use error::*;
pub use rates::*;
pub use rounding::*;
pub use types::*;
