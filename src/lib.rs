//! # saldo
//!
//! Net customer balances over invoices, credit notes and debit notes issued
//! in different currencies, converted into one output currency through a
//! caller-supplied exchange-rate table.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Exchange rates are expressed against a single default (pivot) currency
//! whose rate is exactly 1; every conversion passes through it.
//!
//! ## Quick Start
//!
//! ```rust
//! use saldo::core::*;
//! use rust_decimal_macros::dec;
//!
//! let table = ExchangeRateTable::parse(&["EUR:1", "USD:0.987", "GBP:0.878"]).unwrap();
//! let eur = Currency::from_code("EUR").unwrap();
//! let usd = Currency::from_code("USD").unwrap();
//!
//! let mut customer = Customer::new("Vendor 1", "123456789");
//! customer.add_document(Document::new("1000", DocumentType::Invoice, dec!(100.01), usd));
//! customer.add_document(Document::new("1001", DocumentType::Invoice, dec!(100.01), eur));
//!
//! let balance = compute_balance(&customer.documents, eur, &table, Rounding::HalfUp).unwrap();
//! assert_eq!(balance, dec!(198.72));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Currency registry, rate tables, conversion, balances |
//! | `ingest` (default) | CSV document ingestion and balance reports |
//! | `cli` | The `saldo` command-line binary |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "ingest")]
pub mod ingest;

#[cfg(feature = "ingest")]
pub mod report;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
