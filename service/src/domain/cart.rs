//! [`Cart`] definitions: the aggregation state every storefront mutation
//! goes through.

use common::Money;
use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{customer, order, product, Customer, Product};

/// Shopping cart.
///
/// Holds the selected [`LineItem`]s in insertion order along with the chosen
/// fulfillment mode, order notes and [`Customer`] details. Invariants:
/// - every stored [`Quantity`] is positive;
/// - [`product::Id`]s are unique across lines (mutations merge, never
///   duplicate).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Cart {
    /// Selected [`LineItem`]s, in insertion order.
    items: Vec<LineItem>,

    /// Fulfillment mode of the future order.
    kind: order::Kind,

    /// Free-text order notes.
    notes: String,

    /// [`Customer`] details collected so far.
    customer: Customer,
}

impl Cart {
    /// Returns the [`LineItem`]s of this [`Cart`], in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns the chosen fulfillment mode.
    #[must_use]
    pub fn kind(&self) -> order::Kind {
        self.kind
    }

    /// Returns the free-text order notes.
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Returns the collected [`Customer`] details.
    #[must_use]
    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Indicates whether this [`Cart`] has no [`LineItem`]s.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds `quantity` units of the `product`.
    ///
    /// Merges into the existing line of the same [`product::Id`] if there is
    /// one (keeping that line's `notes`), otherwise appends a new line with
    /// the provided `notes`.
    pub fn add_units(
        &mut self,
        product: Product,
        quantity: Quantity,
        notes: impl Into<String>,
    ) -> &LineItem {
        if let Some(at) =
            self.items.iter().position(|l| l.product.id == product.id)
        {
            let line = &mut self.items[at];
            line.quantity = line.quantity.saturating_add(quantity);
            &self.items[at]
        } else {
            self.items.push(LineItem {
                id: Id::new(),
                product,
                quantity,
                notes: notes.into(),
            });
            self.items.last().expect("just pushed")
        }
    }

    /// Sets the absolute quantity of the line matching `id`.
    ///
    /// A zero `quantity` removes the line (a line is never retained at
    /// zero). No-op when no line matches.
    pub fn set_quantity(&mut self, id: &product::Id, quantity: u32) {
        match Quantity::new(quantity) {
            None => self.remove(id),
            Some(quantity) => {
                if let Some(line) =
                    self.items.iter_mut().find(|l| l.product.id == *id)
                {
                    line.quantity = quantity;
                }
            }
        }
    }

    /// Removes the line matching `id`. No-op when no line matches.
    pub fn remove(&mut self, id: &product::Id) {
        self.items.retain(|l| l.product.id != *id);
    }

    /// Replaces the notes of the line matching `id`. No-op when no line
    /// matches.
    pub fn set_line_notes(
        &mut self,
        id: &product::Id,
        notes: impl Into<String>,
    ) {
        if let Some(line) =
            self.items.iter_mut().find(|l| l.product.id == *id)
        {
            line.notes = notes.into();
        }
    }

    /// Empties the [`LineItem`]s.
    ///
    /// Fulfillment mode, order notes and [`Customer`] details are kept: they
    /// persist independently until explicitly changed.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sets the fulfillment mode.
    pub fn set_kind(&mut self, kind: order::Kind) {
        self.kind = kind;
    }

    /// Replaces the free-text order notes.
    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Applies the provided [`customer::Update`].
    pub fn update_customer(&mut self, update: customer::Update) {
        self.customer.apply(update);
    }

    /// Sum of all line quantities, for the basket-count badge.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|l| l.quantity.get()).sum()
    }

    /// Sum of line totals, before any delivery fee.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Delivery fee due: the provided flat `fee` if and only if the
    /// fulfillment mode is delivery and the [`Cart`] is non-empty.
    #[must_use]
    pub fn delivery_fee(&self, fee: Money) -> Money {
        if self.kind == order::Kind::Delivery && !self.subtotal().is_zero() {
            fee
        } else {
            Money::ZERO
        }
    }

    /// Total amount due: subtotal plus delivery fee. No tax line applies.
    #[must_use]
    pub fn total(&self, fee: Money) -> Money {
        self.subtotal() + self.delivery_fee(fee)
    }
}

/// One [`Cart`] entry: a [`Product`] with the selected [`Quantity`] and
/// line notes.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct LineItem {
    /// ID of this [`LineItem`], distinct from the [`product::Id`].
    pub id: Id,

    /// Purchased [`Product`] record.
    pub product: Product,

    /// Selected [`Quantity`], always positive.
    pub quantity: Quantity,

    /// Free-text line notes.
    pub notes: String,
}

impl LineItem {
    /// Extended price of this [`LineItem`]: the charged unit price times the
    /// [`Quantity`].
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.product.charged_price() * self.quantity.get()
    }
}

/// ID of a [`LineItem`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Positive number of units of a [`LineItem`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(into = "u32", try_from = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// A [`Quantity`] of one unit.
    pub const ONE: Self = Self(1);

    /// Creates a new [`Quantity`] if the given `value` is positive.
    #[must_use]
    pub fn new(value: u32) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    /// Returns the number of units.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Saturating addition of two [`Quantity`]s.
    #[must_use]
    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl TryFrom<u32> for Quantity {
    type Error = &'static str;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or("`Quantity` must be positive")
    }
}

#[cfg(test)]
mod spec {
    use common::Money;

    use crate::domain::{order, product, Product};

    use super::{Cart, Quantity};

    fn product(id: &str, price: u32, original: Option<u32>) -> Product {
        Product {
            id: product::Id::from(id),
            name: product::Name::new("Product").unwrap(),
            description: String::new(),
            price: Money::from(price),
            original_price: original.map(Money::from),
            kind: product::Kind::FastFood,
            ingredients: vec![],
            calories: 0,
            weight_grams: 0,
            is_special_offer: original.is_some(),
            preparation_minutes: 10,
            is_available: true,
            tags: vec![],
        }
    }

    fn qty(n: u32) -> Quantity {
        Quantity::new(n).unwrap()
    }

    #[test]
    fn add_units_merges_by_product_id() {
        let mut cart = Cart::default();

        _ = cart.add_units(product("burger", 3000, None), qty(2), "no onion");
        _ = cart.add_units(product("burger", 3000, None), qty(1), "ignored");
        _ = cart.add_units(product("bissap", 1000, None), qty(1), "");

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.total_items(), 4);
        assert_eq!(cart.items()[0].quantity, qty(3));
        assert_eq!(cart.items()[0].notes, "no onion");
    }

    #[test]
    fn line_ids_differ_from_product_ids() {
        let mut cart = Cart::default();
        let line =
            cart.add_units(product("burger", 3000, None), qty(1), "").clone();

        assert_ne!(line.id.to_string(), line.product.id.to_string());
    }

    #[test]
    fn set_quantity_is_absolute_and_zero_removes() {
        let mut cart = Cart::default();
        _ = cart.add_units(product("burger", 3000, None), qty(5), "");

        cart.set_quantity(&product::Id::from("burger"), 2);
        assert_eq!(cart.total_items(), 2);

        // Same as an explicit removal.
        cart.set_quantity(&product::Id::from("burger"), 0);
        assert!(cart.is_empty());

        // No-op on an absent product.
        cart.set_quantity(&product::Id::from("burger"), 3);
        assert!(cart.is_empty());
    }

    #[test]
    fn remove_restores_prior_badge_count() {
        let mut cart = Cart::default();
        _ = cart.add_units(product("salad", 2000, None), qty(1), "");
        let before = cart.total_items();

        _ = cart.add_units(product("burger", 3000, None), qty(4), "");
        assert_eq!(cart.total_items(), before + 4);

        cart.remove(&product::Id::from("burger"));
        assert_eq!(cart.total_items(), before);

        // Removing an absent product is not an error.
        cart.remove(&product::Id::from("burger"));
        assert_eq!(cart.total_items(), before);
    }

    #[test]
    fn subtotal_charges_pre_discount_prices() {
        let mut cart = Cart::default();
        _ = cart.add_units(product("burger", 3000, Some(3500)), qty(2), "");
        _ = cart.add_units(product("bissap", 1000, None), qty(3), "");

        assert_eq!(cart.subtotal(), Money::from(2 * 3500 + 3 * 1000));
    }

    #[test]
    fn delivery_fee_applies_to_non_empty_delivery_carts_only() {
        let fee = Money::from(500);
        let mut cart = Cart::default();

        // Empty cart never owes the fee, even with delivery selected.
        cart.set_kind(order::Kind::Delivery);
        assert_eq!(cart.delivery_fee(fee), Money::ZERO);

        _ = cart.add_units(product("burger", 3000, None), qty(1), "");
        assert_eq!(cart.delivery_fee(fee), fee);

        cart.set_kind(order::Kind::Takeaway);
        assert_eq!(cart.delivery_fee(fee), Money::ZERO);
        cart.set_kind(order::Kind::DineIn);
        assert_eq!(cart.delivery_fee(fee), Money::ZERO);
    }

    #[test]
    fn burger_scenario() {
        let fee = Money::from(500);
        let mut cart = Cart::default();
        assert!(cart.is_empty());

        _ = cart.add_units(product("burger", 3000, Some(3500)), qty(2), "");
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.subtotal(), Money::from(7000));

        cart.set_kind(order::Kind::Delivery);
        assert_eq!(cart.delivery_fee(fee), Money::from(500));
        assert_eq!(cart.total(fee), Money::from(7500));

        cart.set_quantity(&product::Id::from("burger"), 0);
        assert!(cart.is_empty());
        assert_eq!(cart.total(fee), Money::ZERO);
    }

    #[test]
    fn clear_keeps_order_details() {
        let mut cart = Cart::default();
        _ = cart.add_units(product("burger", 3000, None), qty(1), "");
        cart.set_kind(order::Kind::Delivery);
        cart.set_notes("ring the bell");

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.kind(), order::Kind::Delivery);
        assert_eq!(cart.notes(), "ring the bell");
    }
}
