//! [`Money`]-related definitions.

use std::{fmt, iter::Sum, ops, str::FromStr};

use rust_decimal::{prelude::ToPrimitive as _, Decimal};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Amount of money in minor units of the single supported currency (XOF,
/// displayed as FCFA).
///
/// Amounts are whole minor units: FCFA has no decimal subunit.
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(transparent)
)]
pub struct Money(Decimal);

impl Money {
    /// [`Money`] amount of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates a new [`Money`] from the provided amount of minor units.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Returns the amount of this [`Money`] in minor units.
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    /// Indicates whether this [`Money`] amount is zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }
}

impl From<u32> for Money {
    fn from(minor_units: u32) -> Self {
        Self(Decimal::from(minor_units))
    }
}

impl ops::Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl ops::Mul<u32> for Money {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        Self(self.0 * Decimal::from(rhs))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, ops::Add::add)
    }
}

impl fmt::Display for Money {
    /// Formats this [`Money`] the way the storefront displays prices: whole
    /// minor units in space-separated thousands groups with the `FCFA`
    /// suffix (e.g. `7 500 FCFA`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = self.0.trunc().to_i128().expect("integer");
        if units < 0 {
            write!(f, "-")?;
        }
        let digits = units.unsigned_abs().to_string();
        let first = digits.len() % 3;
        let mut groups = Vec::with_capacity(digits.len() / 3 + 1);
        if first != 0 {
            groups.push(&digits[..first]);
        }
        let mut at = first;
        while at < digits.len() {
            groups.push(&digits[at..at + 3]);
            at += 3;
        }
        write!(f, "{} FCFA", groups.join(" "))
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = s
            .trim()
            .trim_end_matches("FCFA")
            .trim_end()
            .replace(' ', "");
        Decimal::from_str(&amount)
            .map(Self)
            .map_err(|_| "invalid amount")
    }
}
