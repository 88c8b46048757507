//! # Money Module
//!
//! Provides the `Money` type for handling GBP amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    25.99 + 59.99 * 2 = 145.97000000000003  ❌                            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Pence                                            │
//! │    2599 + 5999 * 2 = 14597 pence = £145.97  ✅                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use blvd_core::money::{format_gbp, Money};
//!
//! let price = Money::from_pence(2599);  // £25.99
//! let line = price.multiply_quantity(2); // £51.98
//! assert_eq!(format_gbp(line), "£51.98");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in pence (the smallest GBP unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: arithmetic stays total even though prices are never negative
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Serialized as a plain integer** of pence
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► CartItem (frozen copy) ──► line_total ──► Cart total
///                                                                │
///                                                                ▼
///                                                     Displayed as "£145.97"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from pence.
    ///
    /// ## Example
    /// ```rust
    /// use blvd_core::money::Money;
    ///
    /// let price = Money::from_pence(2599); // Represents £25.99
    /// assert_eq!(price.pence(), 2599);
    /// ```
    #[inline]
    pub const fn from_pence(pence: i64) -> Self {
        Money(pence)
    }

    /// Returns the value in pence.
    #[inline]
    pub const fn pence(&self) -> i64 {
        self.0
    }

    /// Returns the whole pounds portion.
    #[inline]
    pub const fn pounds(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the pence portion (always 0-99).
    #[inline]
    pub const fn pence_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity, saturating at the `i64` limits.
    ///
    /// `CartStore::add` rejects any quantity whose line would not fit, so a
    /// cart line never actually reaches the limit.
    ///
    /// ## Example
    /// ```rust
    /// use blvd_core::money::Money;
    ///
    /// let hoodie = Money::from_pence(5999);
    /// assert_eq!(hoodie.multiply_quantity(2).pence(), 11998);
    /// assert_eq!(hoodie.multiply_quantity(i64::MAX).pence(), i64::MAX);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// How many units of `self` can be added to `base` before the sum would
    /// leave the `i64` range. Free items have no limit.
    ///
    /// ```rust
    /// use blvd_core::money::Money;
    ///
    /// let tee = Money::from_pence(2599);
    /// assert_eq!(tee.quantity_headroom(Money::from_pence(i64::MAX - 5198)), 2);
    /// assert_eq!(Money::zero().quantity_headroom(Money::zero()), i64::MAX);
    /// ```
    #[inline]
    pub const fn quantity_headroom(&self, base: Money) -> i64 {
        if self.0 <= 0 {
            return i64::MAX;
        }
        i64::MAX.saturating_sub(base.0) / self.0
    }
}

/// Formats an amount as `£X.XX`.
///
/// Used wherever a price or total is shown. Amounts are never negative in the
/// storefront; a negative value would be rendered with a leading `-`.
pub fn format_gbp(amount: Money) -> String {
    amount.to_string()
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}£{}.{:02}", sign, self.pounds().abs(), self.pence_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
