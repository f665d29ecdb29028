//! [`Product`] definitions.

use std::str::FromStr;

use common::{Money, Percent};
use derive_more::{AsRef, Display, From, Into};
use serde::{Deserialize, Serialize};

/// Menu product.
///
/// Immutable once loaded from the catalog: the cart stores copies of these
/// records and never mutates them.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Product {
    /// ID of this [`Product`].
    pub id: Id,

    /// [`Name`] of this [`Product`].
    pub name: Name,

    /// Short description shown on the product card.
    pub description: String,

    /// Current unit price.
    pub price: Money,

    /// Pre-discount unit price, `>= price` whenever present.
    pub original_price: Option<Money>,

    /// Category this [`Product`] is listed under.
    pub kind: Kind,

    /// Ingredients, in display order.
    pub ingredients: Vec<String>,

    /// Energy value of one unit, in kilocalories.
    pub calories: u32,

    /// Weight of one unit, in grams.
    pub weight_grams: u32,

    /// Whether this [`Product`] is part of the special offers selection.
    pub is_special_offer: bool,

    /// Preparation time of one unit, in minutes.
    pub preparation_minutes: u32,

    /// Whether this [`Product`] can be ordered right now.
    pub is_available: bool,

    /// Free-form search tags.
    pub tags: Vec<String>,
}

impl Product {
    /// Unit price the cart charges for this [`Product`].
    ///
    /// When a pre-discount price is present, totals are computed from it
    /// rather than from the discounted [`price`]: the discount is a display
    /// concern only and never lowers the charged amount.
    ///
    /// [`price`]: Product::price
    #[must_use]
    pub fn charged_price(&self) -> Money {
        self.original_price.unwrap_or(self.price)
    }

    /// Relative discount of this [`Product`], for strike-through price
    /// display.
    ///
    /// [`None`] when the [`Product`] is not discounted.
    #[must_use]
    pub fn discount(&self) -> Option<Percent> {
        self.original_price
            .and_then(|original| Percent::discount(original, self.price))
    }
}

/// ID of a [`Product`].
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[as_ref(str, String)]
#[from(&str, String)]
pub struct Id(String);

/// Name of a [`Product`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[as_ref(str, String)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 512
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// Category of a [`Product`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
#[repr(u8)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Kind {
    /// Burgers, fries and other quick bites.
    FastFood = 1,

    /// Traditional dishes of the house.
    AfricanCuisine = 2,

    /// Salads.
    Salads = 3,

    /// Drinks.
    Drinks = 4,

    /// Desserts.
    Desserts = 5,

    /// Discounted selection.
    SpecialOffers = 6,
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use common::Money;

    use super::{Id, Kind, Name, Product};

    fn product(original_price: Option<Money>) -> Product {
        Product {
            id: Id::from("classic-burger"),
            name: Name::new("Classic Burger").unwrap(),
            description: String::new(),
            price: Money::from(3000),
            original_price,
            kind: Kind::FastFood,
            ingredients: vec![],
            calories: 540,
            weight_grams: 280,
            is_special_offer: original_price.is_some(),
            preparation_minutes: 15,
            is_available: true,
            tags: vec![],
        }
    }

    #[test]
    fn charges_pre_discount_price() {
        assert_eq!(product(None).charged_price(), Money::from(3000));
        assert_eq!(
            product(Some(Money::from(3500))).charged_price(),
            Money::from(3500),
        );
    }

    #[test]
    fn discount_requires_higher_original_price() {
        assert!(product(None).discount().is_none());
        assert!(product(Some(Money::from(3000))).discount().is_none());
        assert_eq!(
            product(Some(Money::from(3500))).discount().unwrap().to_string(),
            "14%",
        );
    }

    #[test]
    fn kind_wire_names_are_kebab_case() {
        assert_eq!(Kind::AfricanCuisine.to_string(), "african-cuisine");
        assert_eq!(
            Kind::from_str("special-offers").unwrap(),
            Kind::SpecialOffers,
        );
        assert!(Kind::from_str("SpecialOffers").is_err());
    }
}
