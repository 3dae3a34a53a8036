//! Exchange-rate tables built from `CODE:rate` strings.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;

use super::currencies::Currency;
use super::error::SaldoError;

static RATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z]{3}):([0-9]+|[0-9]+\.[0-9]+)$").expect("rate pattern is a valid regex")
});

/// One currency and its rate relative to the table's default currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExchangeRate {
    pub currency: Currency,
    pub rate: Decimal,
}

impl ExchangeRate {
    /// Whether this rate marks the default (pivot) currency.
    pub fn is_default(&self) -> bool {
        self.rate == Decimal::ONE
    }
}

impl FromStr for ExchangeRate {
    type Err = SaldoError;

    /// Parse a single `CODE:rate` entry, e.g. `GBP:0.878`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || SaldoError::MalformedExchangeRate {
            input: s.to_string(),
        };

        let caps = RATE_PATTERN.captures(s).ok_or_else(malformed)?;
        let currency = Currency::from_code(&caps[1])?;
        let rate = Decimal::from_str_exact(&caps[2]).map_err(|_| malformed())?;
        if rate.is_zero() {
            return Err(malformed());
        }
        Ok(Self { currency, rate })
    }
}

/// Validated set of exchange rates with exactly one default currency.
///
/// Rates are "per default currency": the default currency has rate 1 and
/// every conversion is routed through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeRateTable {
    rates: BTreeMap<Currency, Decimal>,
    default_currency: Currency,
}

impl ExchangeRateTable {
    /// Build a table from raw `CODE:rate` strings.
    ///
    /// Blank entries are skipped. A currency repeated with the same rate is
    /// accepted once; repeated with a different rate it is an error. Exactly
    /// one rate must equal 1.
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Result<Self, SaldoError> {
        let mut rates: BTreeMap<Currency, Decimal> = BTreeMap::new();

        for entry in raw {
            let entry = entry.as_ref();
            if entry.trim().is_empty() {
                continue;
            }
            let parsed: ExchangeRate = entry.parse()?;
            match rates.entry(parsed.currency) {
                Entry::Vacant(slot) => {
                    slot.insert(parsed.rate);
                }
                Entry::Occupied(existing) => {
                    if *existing.get() != parsed.rate {
                        return Err(SaldoError::DuplicateExchangeRate {
                            currency: parsed.currency,
                        });
                    }
                }
            }
        }

        Self::from_rates(rates)
    }

    fn from_rates(rates: BTreeMap<Currency, Decimal>) -> Result<Self, SaldoError> {
        let defaults: Vec<Currency> = rates
            .iter()
            .filter(|(_, rate)| **rate == Decimal::ONE)
            .map(|(currency, _)| *currency)
            .collect();

        let default_currency = match defaults.as_slice() {
            [] => return Err(SaldoError::MissingDefaultRate),
            [single] => *single,
            many => {
                return Err(SaldoError::MultipleDefaultRates { count: many.len() });
            }
        };

        tracing::debug!(
            default = %default_currency,
            rates = rates.len(),
            "exchange rate table built"
        );

        Ok(Self {
            rates,
            default_currency,
        })
    }

    /// Rate of `currency`, if the table has one.
    pub fn rate(&self, currency: Currency) -> Option<Decimal> {
        self.rates.get(&currency).copied()
    }

    /// The pivot currency (the one with rate 1).
    pub fn default_currency(&self) -> Currency {
        self.default_currency
    }

    /// The pivot entry.
    pub fn default_rate(&self) -> Option<ExchangeRate> {
        self.rate(self.default_currency).map(|rate| ExchangeRate {
            currency: self.default_currency,
            rate,
        })
    }

    /// Whether the table has a rate for `currency`.
    pub fn contains(&self, currency: Currency) -> bool {
        self.rates.contains_key(&currency)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// All rates, ordered by currency code.
    pub fn iter(&self) -> impl Iterator<Item = ExchangeRate> + '_ {
        self.rates.iter().map(|(currency, rate)| ExchangeRate {
            currency: *currency,
            rate: *rate,
        })
    }
}

impl FromStr for ExchangeRateTable {
    type Err = SaldoError;

    /// Parse the comma-separated form, e.g. `EUR:1,USD:0.987,GBP:0.878`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let entries: Vec<&str> = s.split(',').map(str::trim).collect();
        Self::parse(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn currency(code: &str) -> Currency {
        Currency::from_code(code).unwrap()
    }

    #[test]
    fn builds_with_single_default() {
        let table = ExchangeRateTable::parse(&["EUR:1", "USD:0.987"]).unwrap();
        assert_eq!(table.default_currency(), currency("EUR"));
        assert_eq!(table.rate(currency("USD")), Some(dec!(0.987)));
        assert_eq!(table.len(), 2);
        assert!(table.default_rate().unwrap().is_default());
    }

    #[test]
    fn missing_default() {
        assert_eq!(
            ExchangeRateTable::parse(&["USD:0.987"]),
            Err(SaldoError::MissingDefaultRate)
        );
        let empty: [&str; 0] = [];
        assert_eq!(
            ExchangeRateTable::parse(&empty),
            Err(SaldoError::MissingDefaultRate)
        );
    }

    #[test]
    fn duplicate_with_different_rate() {
        assert_eq!(
            ExchangeRateTable::parse(&["EUR:1", "EUR:2"]),
            Err(SaldoError::DuplicateExchangeRate {
                currency: currency("EUR")
            })
        );
    }

    #[test]
    fn duplicate_with_same_rate_is_ignored() {
        let table = ExchangeRateTable::parse(&["EUR:1", "GBP:0.878", "GBP:0.8780"]).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn multiple_defaults() {
        assert_eq!(
            ExchangeRateTable::parse(&["EUR:1", "USD:1"]),
            Err(SaldoError::MultipleDefaultRates { count: 2 })
        );
        assert_eq!(
            ExchangeRateTable::parse(&["EUR:1", "USD:1.0", "GBP:1.00"]),
            Err(SaldoError::MultipleDefaultRates { count: 3 })
        );
    }

    #[test]
    fn blank_entries_are_skipped() {
        let table = ExchangeRateTable::parse(&["", "EUR:1", "   "]).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn malformed_entries() {
        for input in ["XYZ", "EUR", "EUR:", "eur:1", "EUR:1.", "EUR:.5", "EUR:-1", "EUR: 1", "EURO:1", "EUR:1,5"] {
            assert_eq!(
                ExchangeRateTable::parse(&["GBP:1", input]),
                Err(SaldoError::MalformedExchangeRate {
                    input: input.to_string()
                }),
                "{input}"
            );
        }
    }

    #[test]
    fn zero_rate_is_rejected() {
        assert!(matches!(
            ExchangeRateTable::parse(&["EUR:1", "USD:0"]),
            Err(SaldoError::MalformedExchangeRate { .. })
        ));
        assert!(matches!(
            ExchangeRateTable::parse(&["EUR:1", "USD:0.000"]),
            Err(SaldoError::MalformedExchangeRate { .. })
        ));
    }

    #[test]
    fn unsupported_currency() {
        assert_eq!(
            ExchangeRateTable::parse(&["EUR:1", "XYZ:0.322"]),
            Err(SaldoError::UnsupportedCurrency {
                code: "XYZ".into(),
                document: None
            })
        );
    }

    #[test]
    fn comma_separated_form() {
        let table: ExchangeRateTable = "EUR:1, USD:0.987,GBP:0.878".parse().unwrap();
        assert_eq!(table.len(), 3);
        let codes: Vec<&str> = table.iter().map(|r| r.currency.code()).collect();
        assert_eq!(codes, ["EUR", "GBP", "USD"]);
    }
}
