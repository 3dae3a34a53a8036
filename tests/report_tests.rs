#![cfg(feature = "ingest")]

use rust_decimal_macros::dec;
use saldo::core::*;
use saldo::report::*;

const DOCUMENTS: &str = include_str!("data/documents.csv");
const DOCUMENTS_ERROR: &str = include_str!("data/documents_error.csv");
const ORPHAN_CREDIT_NOTE: &str = include_str!("data/orphan_credit_note.csv");

const RATES: [&str; 3] = ["EUR:1", "USD:0.987", "GBP:0.878"];

fn report(currency: &str, vat: Option<&str>) -> Result<BalanceReport, SaldoError> {
    sum_invoices(DOCUMENTS.as_bytes(), &RATES, currency, vat, Rounding::HalfUp)
}

#[test]
fn balances_in_eur() {
    let report = report("EUR", None).unwrap();
    assert_eq!(report.currency.code(), "EUR");
    assert_eq!(report.customers.len(), 3);

    let vendor1 = report
        .customers
        .iter()
        .find(|c| c.name == "Vendor 1")
        .unwrap();
    assert_eq!(vendor1.balance.to_string(), "1938.70");
    assert_eq!(report.balance_of("987654321"), Some(dec!(702.60)));
    assert_eq!(report.balance_of("123465123"), Some(dec!(1241.40)));
}

#[test]
fn balances_in_other_currencies() {
    let usd = report("USD", None).unwrap();
    assert_eq!(usd.balance_of("123456789"), Some(dec!(1913.50)));
    assert_eq!(usd.balance_of("987654321"), Some(dec!(693.47)));
    assert_eq!(usd.balance_of("123465123"), Some(dec!(1225.26)));

    let gbp = report("GBP", None).unwrap();
    assert_eq!(gbp.balance_of("123456789"), Some(dec!(1702.17)));
    assert_eq!(gbp.balance_of("987654321"), Some(dec!(616.88)));
    assert_eq!(gbp.balance_of("123465123"), Some(dec!(1089.95)));
}

#[test]
fn filtered_by_vat() {
    let report = report("EUR", Some("123456789")).unwrap();
    assert_eq!(report.customers.len(), 1);
    assert_eq!(report.customers[0].name, "Vendor 1");
    assert_eq!(report.customers[0].balance, dec!(1938.70));
}

#[test]
fn customers_ordered_by_vat_number() {
    let report = report("EUR", None).unwrap();
    let vats: Vec<&str> = report
        .customers
        .iter()
        .map(|c| c.vat_number.as_str())
        .collect();
    assert_eq!(vats, ["123456789", "123465123", "987654321"]);
}

#[test]
fn invalid_output_currency() {
    assert!(matches!(
        report("asddsasd", None),
        Err(SaldoError::UnsupportedCurrency { .. })
    ));
    assert!(matches!(
        report("XYZ", None),
        Err(SaldoError::UnsupportedCurrency { .. })
    ));
    assert!(matches!(
        report("eur", None),
        Err(SaldoError::UnsupportedCurrency { .. })
    ));
}

#[test]
fn unsupported_currency_in_rates() {
    let err = sum_invoices(
        DOCUMENTS.as_bytes(),
        &["EUR:1", "XYZ:0.322"],
        "EUR",
        None,
        Rounding::HalfUp,
    )
    .unwrap_err();
    assert_eq!(
        err,
        SaldoError::UnsupportedCurrency {
            code: "XYZ".into(),
            document: None
        }
    );
}

#[test]
fn invalid_rate_values() {
    let err = sum_invoices(DOCUMENTS.as_bytes(), &["EUR:1", "XYZ"], "EUR", None, Rounding::HalfUp)
        .unwrap_err();
    assert!(matches!(err, SaldoError::MalformedExchangeRate { .. }));
}

#[test]
fn document_without_rate() {
    let err = sum_invoices(DOCUMENTS.as_bytes(), &["EUR:1", "USD:0.987"], "EUR", None, Rounding::HalfUp)
        .unwrap_err();
    let gbp = Currency::from_code("GBP").unwrap();
    let eur = Currency::from_code("EUR").unwrap();
    assert_eq!(
        err,
        SaldoError::CurrencyRateNotFound {
            currency: gbp,
            from: gbp,
            to: eur
        }
    );
}

#[test]
fn invalid_document_data() {
    let err = sum_invoices(DOCUMENTS_ERROR.as_bytes(), &RATES, "EUR", None, Rounding::HalfUp)
        .unwrap_err();
    assert_eq!(err.document_number(), Some("1000000260"));
}

#[test]
fn parent_must_belong_to_same_customer() {
    let err = sum_invoices(ORPHAN_CREDIT_NOTE.as_bytes(), &RATES, "EUR", None, Rounding::HalfUp)
        .unwrap_err();
    assert_eq!(
        err,
        SaldoError::MissingParentDocument {
            document: "1000000262".into(),
            parent: Some("1000000257".into()),
        }
    );

    // The customer owning the referenced document is still fine on its own.
    let report = sum_invoices(
        ORPHAN_CREDIT_NOTE.as_bytes(),
        &RATES,
        "EUR",
        Some("123456789"),
        Rounding::HalfUp,
    )
    .unwrap();
    assert_eq!(report.balance_of("123456789"), Some(dec!(394.80)));
}

#[test]
fn serialises_to_json() {
    let report = report("EUR", Some("987654321")).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    assert_eq!(
        json,
        r#"{"currency":"EUR","customers":[{"name":"Vendor 2","vat_number":"987654321","balance":"702.60"}]}"#
    );
}
