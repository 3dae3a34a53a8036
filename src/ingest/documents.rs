//! Document file ingestion.

use std::collections::BTreeMap;
use std::io::Read;

use rust_decimal::Decimal;

use super::layout::CsvLayout;
use crate::core::{Currency, Customer, Document, DocumentType, SaldoError};

/// Column positions resolved from a file's header row.
struct Columns {
    customer: usize,
    vat_number: usize,
    document_number: usize,
    document_type: usize,
    parent_document: usize,
    currency: usize,
    total: usize,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord, layout: &CsvLayout) -> Result<Self, SaldoError> {
        let mut idx = [0usize; 7];
        for (slot, name) in idx.iter_mut().zip(layout.headers()) {
            *slot = headers.iter().position(|h| h == name).ok_or_else(|| {
                SaldoError::malformed_input(format!("missing column '{name}'"))
            })?;
        }

        let [
            customer,
            vat_number,
            document_number,
            document_type,
            parent_document,
            currency,
            total,
        ] = idx;
        Ok(Self {
            customer,
            vat_number,
            document_number,
            document_type,
            parent_document,
            currency,
            total,
        })
    }
}

/// Parse a document file with the standard layout into customers keyed by
/// VAT number.
///
/// When `filter_vat` is set, records of other customers are skipped without
/// being validated.
///
/// ```
/// use saldo::ingest::ingest_documents;
///
/// let csv = "\
/// Customer,Vat number,Document number,Type,Parent document,Currency,Total
/// Vendor 1,123456789,1000000257,1,,USD,400
/// Vendor 1,123456789,1000000260,2,1000000257,EUR,100
/// ";
/// let customers = ingest_documents(csv.as_bytes(), None).unwrap();
/// assert_eq!(customers["123456789"].documents.len(), 2);
/// ```
pub fn ingest_documents<R: Read>(
    reader: R,
    filter_vat: Option<&str>,
) -> Result<BTreeMap<String, Customer>, SaldoError> {
    ingest_documents_with(reader, filter_vat, &CsvLayout::default())
}

/// Like [`ingest_documents`], with custom header names or delimiter.
pub fn ingest_documents_with<R: Read>(
    reader: R,
    filter_vat: Option<&str>,
    layout: &CsvLayout,
) -> Result<BTreeMap<String, Customer>, SaldoError> {
    let mut csv = csv::ReaderBuilder::new()
        .delimiter(layout.delimiter)
        .has_headers(true)
        .from_reader(reader);

    let headers = csv
        .headers()
        .map_err(|e| SaldoError::malformed_input(e.to_string()))?
        .clone();
    let columns = Columns::resolve(&headers, layout)?;

    let mut customers: BTreeMap<String, Customer> = BTreeMap::new();
    let mut records = 0usize;
    let mut skipped = 0usize;

    for result in csv.records() {
        let record = result.map_err(|e| SaldoError::malformed_input(e.to_string()))?;
        let field = |idx: usize| record.get(idx).unwrap_or_default();
        records += 1;

        let vat_number = field(columns.vat_number);
        if filter_vat.is_some_and(|filter| filter != vat_number) {
            skipped += 1;
            continue;
        }

        let customer = customers
            .entry(vat_number.to_string())
            .or_insert_with(|| Customer::new(field(columns.customer), vat_number));

        let number = field(columns.document_number);
        let document = parse_document(
            number,
            field(columns.document_type),
            field(columns.parent_document),
            field(columns.currency),
            field(columns.total),
        )?;

        if let Some(previous) = customer.add_document(document) {
            tracing::warn!(
                vat_number,
                document = number,
                replaced_total = %previous.total,
                "duplicate document number, keeping the later record"
            );
        }
    }

    tracing::debug!(
        records,
        skipped,
        customers = customers.len(),
        "document file ingested"
    );

    Ok(customers)
}

fn parse_document(
    number: &str,
    type_code: &str,
    parent: &str,
    currency: &str,
    total: &str,
) -> Result<Document, SaldoError> {
    let invalid_type = || SaldoError::InvalidDocumentType {
        document: number.to_string(),
        value: type_code.to_string(),
    };
    let code: i64 = type_code.parse().map_err(|_| invalid_type())?;
    let document_type = DocumentType::from_code(code).ok_or_else(invalid_type)?;

    let currency = Currency::from_code(currency).map_err(|_| SaldoError::UnsupportedCurrency {
        code: currency.to_string(),
        document: Some(number.to_string()),
    })?;

    let total = parse_amount(total).ok_or_else(|| SaldoError::InvalidAmountFormat {
        document: number.to_string(),
        value: total.to_string(),
    })?;

    Ok(Document::new(number, document_type, total, currency).with_parent(parent))
}

/// Exact decimal, plain (`-12.50`) or scientific (`1.5E+3`) notation.
///
/// `rust_decimal` skips `_` separators, so they are refused up front.
fn parse_amount(raw: &str) -> Option<Decimal> {
    if raw.contains('_') {
        return None;
    }
    Decimal::from_str_exact(raw)
        .ok()
        .or_else(|| {
            raw.contains(['e', 'E'])
                .then(|| Decimal::from_scientific(raw).ok())
                .flatten()
        })
}
