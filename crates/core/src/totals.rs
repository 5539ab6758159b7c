//! Order totals arithmetic.
//!
//! Shipping and tax policy for the storefront: orders at or above the
//! free-shipping threshold ship free, everything else pays one flat
//! rate, and tax is a fixed fraction of the subtotal. All arithmetic is
//! decimal; rounding happens only at display time.

use rust_decimal::{Decimal, dec};

/// Subtotal at which shipping becomes free.
pub const FREE_SHIPPING_THRESHOLD: Decimal = dec!(50);

/// Flat shipping rate below the free-shipping threshold.
pub const FLAT_SHIPPING_RATE: Decimal = dec!(9.99);

/// Sales tax applied to the subtotal.
pub const TAX_RATE: Decimal = dec!(0.08);

/// The cost breakdown for an order at its current subtotal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    /// Grand total: subtotal + shipping + tax.
    pub total: Decimal,
}

impl OrderTotals {
    /// Compute the breakdown from a cart subtotal.
    #[must_use]
    pub fn from_subtotal(subtotal: Decimal) -> Self {
        let shipping = if subtotal >= FREE_SHIPPING_THRESHOLD {
            Decimal::ZERO
        } else {
            FLAT_SHIPPING_RATE
        };
        let tax = subtotal * TAX_RATE;
        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }
}

/// How much more the cart needs before shipping is free.
///
/// `None` for empty carts and for carts already past the threshold; the
/// nudge only makes sense in between.
#[must_use]
pub fn free_shipping_remainder(subtotal: Decimal) -> Option<Decimal> {
    if subtotal > Decimal::ZERO && subtotal < FREE_SHIPPING_THRESHOLD {
        Some(FREE_SHIPPING_THRESHOLD - subtotal)
    } else {
        None
    }
}
