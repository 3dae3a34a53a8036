//! Signed, currency-converted sums over a customer's documents.

use rust_decimal::Decimal;

use super::conversion::convert;
use super::currencies::Currency;
use super::error::SaldoError;
use super::rates::ExchangeRateTable;
use super::rounding::Rounding;
use super::types::{Document, DocumentSet, DocumentType};

/// Compute the balance of one customer's documents in `target`.
///
/// Invoices and debit notes add, credit notes subtract. Credit and debit
/// notes must reference a parent document present in `documents`. Documents
/// are visited in document-number order and the first failure is returned.
/// The total is rounded once to the fraction digits of `target`.
///
/// ```
/// use saldo::core::*;
/// use rust_decimal_macros::dec;
///
/// let eur = Currency::from_code("EUR").unwrap();
/// let table = ExchangeRateTable::parse(&["EUR:1"]).unwrap();
///
/// let mut customer = Customer::new("Vendor 1", "123456789");
/// customer.add_document(Document::new("1000", DocumentType::Invoice, dec!(100), eur));
/// customer.add_document(
///     Document::new("1001", DocumentType::CreditNote, dec!(40), eur).with_parent("1000"),
/// );
///
/// let balance = compute_balance(&customer.documents, eur, &table, Rounding::HalfUp).unwrap();
/// assert_eq!(balance, dec!(60.00));
/// ```
pub fn compute_balance(
    documents: &DocumentSet,
    target: Currency,
    table: &ExchangeRateTable,
    rounding: Rounding,
) -> Result<Decimal, SaldoError> {
    let mut total = Decimal::ZERO;

    for doc in documents.values() {
        let converted = convert(table, doc.currency, target, doc.total, rounding)?;

        if doc.document_type.requires_parent() {
            check_parent(doc, documents)?;
        }
        let signed = match doc.document_type {
            DocumentType::CreditNote => -converted,
            DocumentType::Invoice | DocumentType::DebitNote => converted,
        };

        total = total
            .checked_add(signed)
            .ok_or(SaldoError::AmountOverflow {
                from: doc.currency,
                to: target,
            })?;
    }

    Ok(rounding.round(total, target))
}

/// The parent reference must be set and point into the same document set.
fn check_parent(doc: &Document, documents: &DocumentSet) -> Result<(), SaldoError> {
    match doc.parent.as_deref() {
        Some(parent) if documents.contains_key(parent) => Ok(()),
        parent => Err(SaldoError::MissingParentDocument {
            document: doc.number.clone(),
            parent: parent.map(str::to_string),
        }),
    }
}
