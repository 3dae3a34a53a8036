//! Currency conversion through the table's default currency.

use rust_decimal::Decimal;

use super::currencies::Currency;
use super::error::SaldoError;
use super::rates::ExchangeRateTable;
use super::rounding::Rounding;

/// Convert `amount` from one currency to another.
///
/// The amount is multiplied by the rate of `from`, giving the amount in the
/// default currency, then by the rate of `to`. No intermediate rounding takes
/// place; the result is rounded once to the fraction digits of `to`.
///
/// Converting the default currency to itself returns `amount` untouched,
/// without rounding.
///
/// ```
/// use saldo::core::*;
/// use rust_decimal_macros::dec;
///
/// let table = ExchangeRateTable::parse(&["EUR:1", "USD:0.987", "GBP:0.878"]).unwrap();
/// let usd = Currency::from_code("USD").unwrap();
/// let gbp = Currency::from_code("GBP").unwrap();
///
/// let converted = convert(&table, usd, gbp, dec!(100), Rounding::HalfUp).unwrap();
/// assert_eq!(converted, dec!(86.66));
/// ```
pub fn convert(
    table: &ExchangeRateTable,
    from: Currency,
    to: Currency,
    amount: Decimal,
    rounding: Rounding,
) -> Result<Decimal, SaldoError> {
    let not_found = |currency| SaldoError::CurrencyRateNotFound { currency, from, to };

    let default = table
        .default_rate()
        .ok_or_else(|| not_found(table.default_currency()))?;

    if from == default.currency && to == default.currency {
        return Ok(amount);
    }

    let from_rate = table.rate(from).ok_or_else(|| not_found(from))?;
    let to_rate = table.rate(to).ok_or_else(|| not_found(to))?;

    let converted = amount
        .checked_mul(from_rate)
        .and_then(|in_default| in_default.checked_mul(to_rate))
        .ok_or(SaldoError::AmountOverflow { from, to })?;
    Ok(rounding.round(converted, to))
}
