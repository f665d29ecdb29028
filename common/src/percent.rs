//! [`Percent`]-related definitions.

use std::{fmt, str::FromStr};

use rust_decimal::Decimal;

use crate::Money;

/// Floating-point percentage.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Percent(Decimal);

impl Percent {
    /// Creates a new [`Percent`] by checking the provided value lies
    /// within `0..=100`.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        (val >= Decimal::ZERO && val <= Decimal::ONE_HUNDRED)
            .then_some(Self(val))
    }

    /// Derives the rounded relative discount of the `current` price against
    /// the `original` one.
    ///
    /// [`None`] is returned when no actual discount applies (the `original`
    /// price is not positive, or not above the `current` one).
    #[must_use]
    pub fn discount(original: Money, current: Money) -> Option<Self> {
        if original <= Money::ZERO || current >= original {
            return None;
        }
        let ratio = (original.amount() - current.amount()) / original.amount();
        Self::new((ratio * Decimal::ONE_HUNDRED).round())
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl FromStr for Percent {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s)
            .ok()
            .and_then(Self::new)
            .ok_or("invalid percent value")
    }
}

#[cfg(test)]
mod spec {
    use super::{Money, Percent};

    #[test]
    fn discount() {
        let pct = |p: &Percent| p.to_string();

        let d = Percent::discount(Money::from(3500), Money::from(3000))
            .unwrap();
        assert_eq!(pct(&d), "14%");

        let d = Percent::discount(Money::from(4000), Money::from(3000))
            .unwrap();
        assert_eq!(pct(&d), "25%");

        assert!(Percent::discount(Money::from(3000), Money::from(3000))
            .is_none());
        assert!(Percent::discount(Money::ZERO, Money::ZERO).is_none());
        assert!(Percent::discount(Money::from(3000), Money::from(3500))
            .is_none());
    }
}
