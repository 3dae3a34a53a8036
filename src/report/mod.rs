//! Per-customer balance reports.
//!
//! [`sum_invoices`] runs the whole pipeline for one request: it validates the
//! output currency, builds the exchange-rate table, ingests the document file
//! and computes every customer's balance.

use std::io::Read;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::{Currency, ExchangeRateTable, Rounding, SaldoError, compute_balance};
use crate::ingest::{CsvLayout, ingest_documents_with};

/// Balance of a single customer in the report currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerBalance {
    pub name: String,
    pub vat_number: String,
    /// Rounded to the report currency's fraction digits.
    pub balance: Decimal,
}

/// Balances of all (or one filtered) customers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceReport {
    pub currency: Currency,
    /// Ordered by VAT number.
    pub customers: Vec<CustomerBalance>,
}

impl BalanceReport {
    /// Balance of the customer with the given VAT number.
    pub fn balance_of(&self, vat_number: &str) -> Option<Decimal> {
        self.customers
            .iter()
            .find(|c| c.vat_number == vat_number)
            .map(|c| c.balance)
    }
}

/// Sum every customer's documents into `output_currency`.
///
/// `rates` are raw `CODE:rate` entries. When `customer_vat` is set, only
/// that customer is read and reported.
///
/// ```
/// use saldo::core::Rounding;
/// use saldo::report::sum_invoices;
/// use rust_decimal_macros::dec;
///
/// let csv = "\
/// Customer,Vat number,Document number,Type,Parent document,Currency,Total
/// Vendor 1,123456789,1000,1,,USD,100.01
/// Vendor 1,123456789,1001,1,,GBP,100.01
/// Vendor 1,123456789,1002,1,,EUR,100.01
/// ";
/// let report = sum_invoices(
///     csv.as_bytes(),
///     &["EUR:1", "USD:0.987", "GBP:0.878"],
///     "EUR",
///     None,
///     Rounding::HalfUp,
/// )
/// .unwrap();
/// assert_eq!(report.balance_of("123456789"), Some(dec!(286.53)));
/// ```
pub fn sum_invoices<R: Read, S: AsRef<str>>(
    reader: R,
    rates: &[S],
    output_currency: &str,
    customer_vat: Option<&str>,
    rounding: Rounding,
) -> Result<BalanceReport, SaldoError> {
    sum_invoices_with(
        reader,
        rates,
        output_currency,
        customer_vat,
        rounding,
        &CsvLayout::default(),
    )
}

/// Like [`sum_invoices`], with a custom document file layout.
pub fn sum_invoices_with<R: Read, S: AsRef<str>>(
    reader: R,
    rates: &[S],
    output_currency: &str,
    customer_vat: Option<&str>,
    rounding: Rounding,
    layout: &CsvLayout,
) -> Result<BalanceReport, SaldoError> {
    let currency = Currency::from_code(output_currency)?;
    let table = ExchangeRateTable::parse(rates)?;
    let customers = ingest_documents_with(reader, customer_vat, layout)?;

    let mut balances = Vec::with_capacity(customers.len());
    for (vat_number, customer) in customers {
        let balance = compute_balance(&customer.documents, currency, &table, rounding)
            .inspect_err(|e| {
                tracing::info!(
                    vat_number = %vat_number,
                    error = %e,
                    "error while calculating documents total sum"
                );
            })?;

        balances.push(CustomerBalance {
            name: customer.name,
            vat_number,
            balance,
        });
    }

    Ok(BalanceReport {
        currency,
        customers: balances,
    })
}
