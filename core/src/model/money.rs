// menu_cart/src/model/money.rs

//! Integer-cent currency values and the VAT rate applied to them.
//!
//! Prices, subtotals and taxes are whole euro cents. Nothing in the cart ever
//! goes through binary floating point, so a displayed `€15.97` is exactly the
//! value the engine computed.

use crate::error::{CartError, CartResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};
use std::str::FromStr;

const CENTS_PER_EURO: i64 = 100;
const BASIS_POINTS_PER_UNIT: i128 = 10_000;

/// An amount of euros, stored as a signed count of cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
  pub const ZERO: Money = Money(0);

  pub const fn from_cents(cents: i64) -> Self {
    Money(cents)
  }

  /// Whole euros, e.g. the `18` of a menu priced at €18.
  pub const fn from_euros(euros: i64) -> Self {
    Money(euros * CENTS_PER_EURO)
  }

  pub const fn cents(self) -> i64 {
    self.0
  }

  pub fn is_zero(self) -> bool {
    self.0 == 0
  }

  /// Unit price times quantity. Saturates instead of wrapping.
  pub fn times(self, quantity: u32) -> Money {
    Money(self.0.saturating_mul(i64::from(quantity)))
  }

  pub fn saturating_add(self, other: Money) -> Money {
    Money(self.0.saturating_add(other.0))
  }

  pub fn saturating_sub(self, other: Money) -> Money {
    Money(self.0.saturating_sub(other.0))
  }
}

impl Add for Money {
  type Output = Money;

  fn add(self, rhs: Money) -> Money {
    self.saturating_add(rhs)
  }
}

impl Sub for Money {
  type Output = Money;

  fn sub(self, rhs: Money) -> Money {
    self.saturating_sub(rhs)
  }
}

impl Sum for Money {
  fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
    iter.fold(Money::ZERO, Money::saturating_add)
  }
}

impl fmt::Display for Money {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let sign = if self.0 < 0 { "-" } else { "" };
    let abs = self.0.unsigned_abs();
    write!(f, "{}€{}.{:02}", sign, abs / 100, abs % 100)
  }
}

impl FromStr for Money {
  type Err = CartError;

  /// Accepts `4.99`, `4.9`, `18`, `€4.99`. Prices are never negative and
  /// never carry sub-cent digits.
  fn from_str(input: &str) -> CartResult<Self> {
    let invalid = |reason: &str| CartError::InvalidPrice {
      input: input.to_string(),
      reason: reason.to_string(),
    };

    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix('€').unwrap_or(trimmed).trim_start();
    if trimmed.starts_with('-') {
      return Err(invalid("prices cannot be negative"));
    }

    let (whole, fraction) = split_decimal(trimmed).ok_or_else(|| invalid("expected digits like 4.99"))?;
    if fraction.len() > 2 {
      return Err(invalid("more than two decimal places"));
    }

    let euros: i64 = whole.parse().map_err(|_| invalid("amount out of range"))?;
    let cents = pad_fraction(fraction, 2);
    euros
      .checked_mul(CENTS_PER_EURO)
      .and_then(|c| c.checked_add(cents))
      .map(Money)
      .ok_or_else(|| invalid("amount out of range"))
  }
}

/// A VAT rate in basis points (900 = 9 %).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxRate(u32);

impl TaxRate {
  pub const MAX_BASIS_POINTS: u32 = 10_000;

  pub fn from_basis_points(basis_points: u32) -> CartResult<Self> {
    if basis_points > Self::MAX_BASIS_POINTS {
      return Err(CartError::InvalidTaxRate {
        input: basis_points.to_string(),
        reason: "rates above 100% are not supported".to_string(),
      });
    }
    Ok(TaxRate(basis_points))
  }

  pub const fn zero() -> Self {
    TaxRate(0)
  }

  pub const fn basis_points(self) -> u32 {
    self.0
  }

  /// `round(amount * rate, 2)`, half away from zero.
  pub fn apply(self, amount: Money) -> Money {
    let product = i128::from(amount.cents()) * i128::from(self.0);
    let mut quotient = product / BASIS_POINTS_PER_UNIT;
    let remainder = product % BASIS_POINTS_PER_UNIT;
    if remainder.abs() * 2 >= BASIS_POINTS_PER_UNIT {
      quotient += product.signum();
    }
    Money(i64::try_from(quotient).unwrap_or(if product < 0 { i64::MIN } else { i64::MAX }))
  }
}

impl fmt::Display for TaxRate {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let whole = self.0 / 100;
    let fraction = self.0 % 100;
    if fraction == 0 {
      write!(f, "{}%", whole)
    } else if fraction % 10 == 0 {
      write!(f, "{}.{}%", whole, fraction / 10)
    } else {
      write!(f, "{}.{:02}%", whole, fraction)
    }
  }
}

impl FromStr for TaxRate {
  type Err = CartError;

  /// Parses a percentage: `9`, `9%`, `13.5`, `13.5 %`.
  fn from_str(input: &str) -> CartResult<Self> {
    let invalid = |reason: &str| CartError::InvalidTaxRate {
      input: input.to_string(),
      reason: reason.to_string(),
    };

    let trimmed = input.trim();
    let trimmed = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
    let (whole, fraction) = split_decimal(trimmed).ok_or_else(|| invalid("expected a percentage like 9 or 13.5"))?;
    if fraction.len() > 2 {
      return Err(invalid("more than two decimal places of percent"));
    }

    let percent: u32 = whole.parse().map_err(|_| invalid("percentage out of range"))?;
    let basis_points = percent
      .checked_mul(100)
      .and_then(|bp| bp.checked_add(pad_fraction(fraction, 2) as u32))
      .ok_or_else(|| invalid("percentage out of range"))?;

    TaxRate::from_basis_points(basis_points).map_err(|_| invalid("rates above 100% are not supported"))
  }
}

// "12.5" -> ("12", "5"); "12" -> ("12", ""). Both halves must be ASCII digits
// and the whole part must be present.
fn split_decimal(s: &str) -> Option<(&str, &str)> {
  let (whole, fraction) = match s.split_once('.') {
    Some((w, f)) if !f.is_empty() => (w, f),
    Some(_) => return None,
    None => (s, ""),
  };
  let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
  if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) {
    return None;
  }
  Some((whole, fraction))
}

fn pad_fraction(fraction: &str, width: usize) -> i64 {
  let mut value = 0i64;
  for i in 0..width {
    let digit = fraction.as_bytes().get(i).map_or(0, |b| i64::from(b - b'0'));
    value = value * 10 + digit;
  }
  value
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_menu_prices() {
    assert_eq!("4.99".parse::<Money>().unwrap(), Money::from_cents(499));
    assert_eq!("4.9".parse::<Money>().unwrap(), Money::from_cents(490));
    assert_eq!("18".parse::<Money>().unwrap(), Money::from_euros(18));
    assert_eq!("€ 5.99".parse::<Money>().unwrap(), Money::from_cents(599));
  }

  #[test]
  fn rejects_bad_prices() {
    for bad in ["", "-1.00", "4.999", "4.", ".5", "abc", "4,99"] {
      assert!(bad.parse::<Money>().is_err(), "expected '{}' to be rejected", bad);
    }
  }

  #[test]
  fn displays_euros() {
    assert_eq!(Money::from_cents(1597).to_string(), "€15.97");
    assert_eq!(Money::from_cents(5).to_string(), "€0.05");
    assert_eq!(Money::from_cents(-50).to_string(), "-€0.50");
    assert_eq!(Money::ZERO.to_string(), "€0.00");
  }

  #[test]
  fn tax_rate_parsing() {
    assert_eq!("9".parse::<TaxRate>().unwrap().basis_points(), 900);
    assert_eq!("9%".parse::<TaxRate>().unwrap().basis_points(), 900);
    assert_eq!("13.5 %".parse::<TaxRate>().unwrap().basis_points(), 1350);
    assert_eq!("0.25".parse::<TaxRate>().unwrap().basis_points(), 25);
    assert!("101".parse::<TaxRate>().is_err());
    assert!("9.125".parse::<TaxRate>().is_err());
    assert!("nine".parse::<TaxRate>().is_err());
  }

  #[test]
  fn tax_rate_display() {
    assert_eq!(TaxRate::from_basis_points(900).unwrap().to_string(), "9%");
    assert_eq!(TaxRate::from_basis_points(1350).unwrap().to_string(), "13.5%");
    assert_eq!(TaxRate::from_basis_points(1325).unwrap().to_string(), "13.25%");
  }

  #[test]
  fn tax_rounds_half_away_from_zero() {
    let nine = TaxRate::from_basis_points(900).unwrap();
    // 15.97 * 0.09 = 1.4373
    assert_eq!(nine.apply(Money::from_cents(1597)), Money::from_cents(144));
    // 0.50 * 0.09 = 0.045
    assert_eq!(nine.apply(Money::from_cents(50)), Money::from_cents(5));
    // 0.49 * 0.09 = 0.0441
    assert_eq!(nine.apply(Money::from_cents(49)), Money::from_cents(4));
    assert_eq!(nine.apply(Money::ZERO), Money::ZERO);
    assert_eq!(TaxRate::zero().apply(Money::from_cents(1597)), Money::ZERO);
  }
}
