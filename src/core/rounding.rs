use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::currencies::Currency;

/// Rounding mode applied when an amount is brought to a currency's
/// minor-unit precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rounding {
    /// Ties away from zero (2.5 → 3, -2.5 → -3).
    #[default]
    HalfUp,
    /// Ties toward zero (2.5 → 2).
    HalfDown,
    /// Banker's rounding, ties to even (2.5 → 2, 3.5 → 4).
    HalfEven,
    /// Always away from zero.
    Up,
    /// Always toward zero (truncation).
    Down,
}

impl Rounding {
    /// All modes, in declaration order.
    pub const ALL: [Rounding; 5] = [
        Self::HalfUp,
        Self::HalfDown,
        Self::HalfEven,
        Self::Up,
        Self::Down,
    ];

    /// Matching `rust_decimal` strategy.
    pub fn strategy(self) -> RoundingStrategy {
        match self {
            Self::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfDown => RoundingStrategy::MidpointTowardZero,
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
            Self::Up => RoundingStrategy::AwayFromZero,
            Self::Down => RoundingStrategy::ToZero,
        }
    }

    /// Kebab-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::HalfUp => "half-up",
            Self::HalfDown => "half-down",
            Self::HalfEven => "half-even",
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// Round `amount` to the currency's fraction digits.
    ///
    /// The result always carries exactly `minor_units` decimal places, so
    /// `1938.7` in EUR comes back as `1938.70`.
    pub fn round(self, amount: Decimal, currency: Currency) -> Decimal {
        let dp = currency.minor_units();
        let mut rounded = amount.round_dp_with_strategy(dp, self.strategy());
        rounded.rescale(dp);
        rounded
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rounding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown rounding mode '{s}', expected one of: half-up, half-down, half-even, up, down")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn eur() -> Currency {
        Currency::from_code("EUR").unwrap()
    }

    #[test]
    fn half_up_is_default() {
        assert_eq!(Rounding::default(), Rounding::HalfUp);
        assert_eq!(Rounding::HalfUp.round(dec!(286.52865), eur()), dec!(286.53));
        assert_eq!(Rounding::HalfUp.round(dec!(0.125), eur()), dec!(0.13));
        assert_eq!(Rounding::HalfUp.round(dec!(-0.125), eur()), dec!(-0.13));
    }

    #[test]
    fn other_modes() {
        assert_eq!(Rounding::HalfEven.round(dec!(0.125), eur()), dec!(0.12));
        assert_eq!(Rounding::HalfDown.round(dec!(0.125), eur()), dec!(0.12));
        assert_eq!(Rounding::Up.round(dec!(0.121), eur()), dec!(0.13));
        assert_eq!(Rounding::Down.round(dec!(0.129), eur()), dec!(0.12));
    }

    #[test]
    fn pads_to_minor_units() {
        let rounded = Rounding::HalfUp.round(dec!(1938.7), eur());
        assert_eq!(rounded.to_string(), "1938.70");

        let jpy = Currency::from_code("JPY").unwrap();
        assert_eq!(Rounding::HalfUp.round(dec!(1234.5), jpy).to_string(), "1235");

        let bhd = Currency::from_code("BHD").unwrap();
        assert_eq!(Rounding::HalfUp.round(dec!(1), bhd).to_string(), "1.000");
    }

    #[test]
    fn parse_names() {
        assert_eq!("half-up".parse::<Rounding>(), Ok(Rounding::HalfUp));
        assert_eq!("HALF-EVEN".parse::<Rounding>(), Ok(Rounding::HalfEven));
        assert_eq!(" down ".parse::<Rounding>(), Ok(Rounding::Down));
        assert!("ceiling".parse::<Rounding>().is_err());
        for mode in Rounding::ALL {
            assert_eq!(mode.to_string().parse::<Rounding>(), Ok(mode));
        }
    }
}
