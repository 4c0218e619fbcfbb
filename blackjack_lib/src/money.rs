use serde::{Serialize, Serializer};
use std::fmt::Display;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub};

const CENTS_PER_UNIT: i64 = 100;

/// An amount of currency kept as a whole number of cents, so a 3 to 2 payout on any whole bet
/// is exact and large balances never lose units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Associated function to create an amount of whole currency units.
    pub fn from_units(units: i64) -> Money {
        Money(units.saturating_mul(CENTS_PER_UNIT))
    }

    pub fn from_cents(cents: i64) -> Money {
        Money(cents)
    }

    pub fn cents(&self) -> i64 {
        self.0
    }

    /// The number of whole units in the amount, rounded down.
    pub fn whole_units(&self) -> i64 {
        self.0.div_euclid(CENTS_PER_UNIT)
    }

    /// Returns the amount scaled by `numerator / denominator`, rounded toward zero.
    pub fn scale(&self, numerator: i64, denominator: i64) -> Money {
        Money(self.0.saturating_mul(numerator) / denominator)
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn abs(&self) -> Money {
        Money(self.0.saturating_abs())
    }
}

impl From<u32> for Money {
    fn from(units: u32) -> Self {
        Money::from_units(units as i64)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        *self = *self + rhs;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(self.0.saturating_neg())
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl Display for Money {
    /// Formats the amount with two decimals, e.g. `-7.50`. Width and alignment are honoured.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let cents = self.0.unsigned_abs();
        let text = format!(
            "{}{}.{:02}",
            sign,
            cents / CENTS_PER_UNIT as u64,
            cents % CENTS_PER_UNIT as u64
        );
        f.pad(&text)
    }
}

impl Serialize for Money {
    /// Serialized as a decimal number of units.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0 as f64 / CENTS_PER_UNIT as f64)
    }
}
