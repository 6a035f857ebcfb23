//! # Money Module
//!
//! Provides the `Money` type for handling receipt amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  As binary floats:                                                      │
//! │    35.35 % 0.25 = 0.0999999...   (fine)                                │
//! │    0.30 % 0.10  = 0.0999999...   ❌ should be 0!                        │
//! │                                                                         │
//! │  The quarter-multiple and round-total rules compare remainders to      │
//! │  exactly zero, so a float total gives wrong answers at the boundary.   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Micro-Units (millionths of a unit)              │
//! │    35_350_000 % 250_000 = 100_000   ✅                                  │
//! │       300_000 % 100_000 = 0         ✅                                  │
//! │     1_255_000 % 250_000 = 5_000     ✅  sub-cent amounts stay exact     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::money::Money;
//!
//! let total = Money::parse("35.35").unwrap();
//! assert_eq!(total, Money::from_cents(3535));
//! assert!(!total.is_whole());
//! assert!(!total.is_multiple_of(Money::from_cents(25)));
//!
//! let odd = Money::parse("1.255").unwrap();
//! assert_eq!(odd.micros(), 1_255_000);
//! ```

use crate::error::ParseError;

/// Micro-units in one whole currency unit.
const MICROS_PER_UNIT: i64 = 1_000_000;

/// Micro-units in one cent.
const MICROS_PER_CENT: i64 = MICROS_PER_UNIT / 100;

/// Fraction digits kept exactly; further digits round the last kept one.
const FRACTION_DIGITS: usize = 6;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in millionths of a currency unit.
///
/// Values produced by [`Money::parse`] are never negative; the signed
/// representation only keeps arithmetic on the inner value simple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole cents.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.micros(), 10_990_000);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents * MICROS_PER_CENT)
    }

    /// Creates a Money value from millionths of a unit.
    #[inline]
    pub const fn from_micros(micros: i64) -> Self {
        Money(micros)
    }

    /// Returns the value in millionths of a unit.
    #[inline]
    pub const fn micros(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// True when the amount has no fractional part (it equals its own ceiling).
    #[inline]
    pub const fn is_whole(&self) -> bool {
        self.0 % MICROS_PER_UNIT == 0
    }

    /// True when the amount divides evenly by `step`.
    ///
    /// A zero step divides nothing.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let quarter = Money::from_cents(25);
    /// assert!(Money::from_cents(125).is_multiple_of(quarter));
    /// assert!(!Money::from_cents(265).is_multiple_of(quarter));
    /// ```
    #[inline]
    pub const fn is_multiple_of(&self, step: Money) -> bool {
        step.0 != 0 && self.0 % step.0 == 0
    }

    /// Whole units of `self × numerator / denominator`, rounded toward
    /// positive infinity.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// // $12.25 × 0.2 = 2.45 → 3
    /// assert_eq!(Money::from_cents(1225).ceil_units_scaled(1, 5), 3);
    /// // $10.00 × 0.2 = 2.00 → 2
    /// assert_eq!(Money::from_cents(1000).ceil_units_scaled(1, 5), 2);
    /// ```
    ///
    /// # Panics
    /// Panics if `denominator` is zero.
    pub fn ceil_units_scaled(&self, numerator: i64, denominator: i64) -> i64 {
        // i128 keeps `micros × numerator` exact for any i64 input
        let n = self.0 as i128 * numerator as i128;
        let d = denominator as i128 * MICROS_PER_UNIT as i128;
        let mut quotient = n.div_euclid(d);
        if n.rem_euclid(d) != 0 {
            quotient += 1;
        }
        i64::try_from(quotient).unwrap_or(if quotient > 0 { i64::MAX } else { i64::MIN })
    }

    /// Parses a non-negative decimal amount such as `"35.35"`, `"9"`,
    /// `"1.255"` or `".25"`.
    ///
    /// ## Accepted Forms
    /// ```text
    /// digits                  "12"        → $12.000000
    /// digits "." digits       "1.255"     →  $1.255000
    /// "." digits              ".25"       →  $0.250000
    /// digits "."              "12."       → $12.000000
    /// leading plus            "+1.00"     →  $1.000000
    /// past six places         "0.0000005" →  $0.000001 (half rounds up)
    /// ```
    ///
    /// Anything else (minus signs, exponents, whitespace, separators,
    /// overflow) is a [`ParseError::Currency`] carrying `raw`.
    pub fn parse(raw: &str) -> Result<Money, ParseError> {
        let invalid = || ParseError::Currency(raw.to_string());

        let unsigned = raw.strip_prefix('+').unwrap_or(raw);
        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (unsigned, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let units: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        let (kept, dropped) = fraction.split_at(fraction.len().min(FRACTION_DIGITS));
        let mut micros = kept
            .bytes()
            .fold(0i64, |acc, b| acc * 10 + i64::from(b - b'0'))
            * 10i64.pow((FRACTION_DIGITS - kept.len()) as u32);
        if dropped.bytes().next().is_some_and(|b| b >= b'5') {
            micros += 1;
        }

        units
            .checked_mul(MICROS_PER_UNIT)
            .and_then(|value| value.checked_add(micros))
            .map(Money)
            .ok_or_else(invalid)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
