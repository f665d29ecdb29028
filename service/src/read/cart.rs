//! [`Cart`]-related read definitions.

use common::Money;

use crate::domain::Cart;

/// Derived money breakdown of a [`Cart`], ready for display.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Totals {
    /// Total number of units across all the lines.
    pub items: u32,

    /// Sum of all the line totals.
    pub subtotal: Money,

    /// Delivery surcharge, zero unless the order is a non-empty delivery.
    pub delivery_fee: Money,

    /// Amount due: [`subtotal`] plus [`delivery_fee`]. No tax line.
    ///
    /// [`delivery_fee`]: Totals::delivery_fee
    /// [`subtotal`]: Totals::subtotal
    pub total: Money,
}

impl Totals {
    /// Derives the [`Totals`] of the provided [`Cart`], with `fee` being the
    /// configured delivery surcharge.
    #[must_use]
    pub fn of(cart: &Cart, fee: Money) -> Self {
        Self {
            items: cart.total_items(),
            subtotal: cart.subtotal(),
            delivery_fee: cart.delivery_fee(fee),
            total: cart.total(fee),
        }
    }
}
