use thiserror::Error;

use super::currencies::Currency;

/// Errors raised while building rate tables, ingesting documents or
/// computing balances.
///
/// Every variant is caller-visible and carries the offending document number
/// or currency pair where one exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SaldoError {
    /// A rate entry does not look like `CODE:rate` or its rate is not a
    /// positive decimal.
    #[error("invalid currency exchange rate: [{input}], expected e.g. 'EUR:1' or 'GBP:0.878'")]
    MalformedExchangeRate { input: String },

    /// Currency code is not a known ISO 4217 code.
    #[error("{}", unsupported_currency_message(.code, .document.as_deref()))]
    UnsupportedCurrency {
        code: String,
        document: Option<String>,
    },

    /// The same currency was given two different rates.
    #[error("multiple exchange rates provided for currency: {currency}")]
    DuplicateExchangeRate { currency: Currency },

    /// No rate equals 1, so there is no pivot currency.
    #[error("default exchange rate currency is not specified")]
    MissingDefaultRate,

    /// More than one rate equals 1.
    #[error("expected only 1 default exchange rate currency, while {count} are specified")]
    MultipleDefaultRates { count: usize },

    /// The document stream is structurally invalid.
    #[error("malformed document input: {message}")]
    MalformedInput { message: String },

    /// The type column is not one of 1, 2 or 3.
    #[error("validation error for document [{document}]: invalid document type: {value}")]
    InvalidDocumentType { document: String, value: String },

    /// The total column is not a decimal number.
    #[error("validation error for document [{document}]: document total is not a decimal number: {value}")]
    InvalidAmountFormat { document: String, value: String },

    /// A credit or debit note references a parent that is absent from the
    /// customer's documents.
    #[error("{}", missing_parent_message(.document, .parent.as_deref()))]
    MissingParentDocument {
        document: String,
        parent: Option<String>,
    },

    /// Conversion needs a rate the table does not have.
    #[error("currency conversion error from [{from}] to [{to}]: unable to find exchange rate for [{currency}]")]
    CurrencyRateNotFound {
        currency: Currency,
        from: Currency,
        to: Currency,
    },

    /// A converted amount or running total left the `Decimal` range.
    #[error("currency conversion error from [{from}] to [{to}]: amount out of range")]
    AmountOverflow { from: Currency, to: Currency },
}

fn unsupported_currency_message(code: &str, document: Option<&str>) -> String {
    match document {
        Some(doc) => {
            format!("validation error for document [{doc}]: unsupported ISO 4217 currency code: {code}")
        }
        None => format!("unsupported ISO 4217 currency code: {code}"),
    }
}

fn missing_parent_message(document: &str, parent: Option<&str>) -> String {
    match parent {
        Some(parent) => format!(
            "validation error for document [{document}]: non-existing parent document specified: [{parent}]"
        ),
        None => format!("validation error for document [{document}]: parent document number is required"),
    }
}

impl SaldoError {
    /// Document number the error is tied to, if any.
    pub fn document_number(&self) -> Option<&str> {
        match self {
            Self::UnsupportedCurrency { document, .. } => document.as_deref(),
            Self::InvalidDocumentType { document, .. }
            | Self::InvalidAmountFormat { document, .. }
            | Self::MissingParentDocument { document, .. } => Some(document),
            _ => None,
        }
    }

    /// `(from, to)` pair of a failed conversion.
    pub fn currency_pair(&self) -> Option<(Currency, Currency)> {
        match self {
            Self::CurrencyRateNotFound { from, to, .. } | Self::AmountOverflow { from, to } => {
                Some((*from, *to))
            }
            _ => None,
        }
    }

    pub(crate) fn malformed_input(message: impl Into<String>) -> Self {
        Self::MalformedInput {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_tag_is_exposed() {
        let err = SaldoError::InvalidAmountFormat {
            document: "1000000257".into(),
            value: "12,5".into(),
        };
        assert_eq!(err.document_number(), Some("1000000257"));
        assert!(err.currency_pair().is_none());

        let err = SaldoError::UnsupportedCurrency {
            code: "XYZ".into(),
            document: None,
        };
        assert_eq!(err.document_number(), None);
    }

    #[test]
    fn messages_carry_payload() {
        let err = SaldoError::MissingParentDocument {
            document: "1003".into(),
            parent: Some("1000".into()),
        };
        assert_eq!(
            err.to_string(),
            "validation error for document [1003]: non-existing parent document specified: [1000]"
        );

        let err = SaldoError::MissingParentDocument {
            document: "1003".into(),
            parent: None,
        };
        assert!(err.to_string().contains("parent document number is required"));

        let err = SaldoError::MultipleDefaultRates { count: 2 };
        assert!(err.to_string().contains("while 2 are specified"));
    }

    #[test]
    fn currency_pair_for_missing_rate() {
        let usd = Currency::from_code("USD").unwrap();
        let bgn = Currency::from_code("BGN").unwrap();
        let err = SaldoError::CurrencyRateNotFound {
            currency: usd,
            from: usd,
            to: bgn,
        };
        assert_eq!(err.currency_pair(), Some((usd, bgn)));
        assert_eq!(
            err.to_string(),
            "currency conversion error from [USD] to [BGN]: unable to find exchange rate for [USD]"
        );
    }
}
