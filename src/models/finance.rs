//! Finance entity models
//!
//! Monetary amounts and the transactions applied to accounts.

use super::traits::EntityModel;
use chrono::NaiveDate;
use std::fmt;

/// A monetary amount in cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(i64);

impl Amount {
    /// Create an amount from a number of cents
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create an amount from whole currency units
    ///
    /// # Panics
    ///
    /// Panics if `units * 100` does not fit in an `i64`, in every build profile.
    #[must_use]
    pub const fn from_units(units: i64) -> Self {
        match units.checked_mul(100) {
            Some(cents) => Self(cents),
            None => panic!("amount out of range"),
        }
    }

    /// Subtract `rhs`, or `None` if the result does not fit
    #[must_use]
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.0.checked_sub(rhs.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }
}

impl fmt::Display for Amount {
    /// Formats as `$1,234.56`, with a leading minus for negative amounts
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let units = (abs / 100).to_string();
        let cents = abs % 100;

        let mut grouped = String::with_capacity(units.len() + units.len() / 3);
        for (i, ch) in units.chars().enumerate() {
            if i > 0 && (units.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        write!(f, "{sign}${grouped}.{cents:02}")
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: i32,
    pub date: NaiveDate,
    pub amount: Amount,
    pub category: String,
}

impl Transaction {
    #[must_use]
    pub fn new(id: i32, date: NaiveDate, amount: Amount, category: &str) -> Self {
        Self {
            id,
            date,
            amount,
            category: category.to_string(),
        }
    }
}

impl EntityModel for Transaction {
    type Id = i32;

    fn id(&self) -> &i32 {
        &self.id
    }
}
