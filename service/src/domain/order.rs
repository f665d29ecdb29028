//! [`Order`] definitions.

use common::{unit, DateTime, DateTimeOf, Money};
use derive_more::{AsRef, Display, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{cart::LineItem, Customer};

/// Brand tag prefixing every order [`Id`].
const BRAND_TAG: &str = "MON";

/// Base36 alphabet of order [`Id`] components.
const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of the random component of an order [`Id`].
const RANDOM_LEN: usize = 5;

/// Placed order, produced by a successful checkout.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Order {
    /// ID of this [`Order`].
    pub id: Id,

    /// Snapshot of the purchased [`LineItem`]s.
    pub items: Vec<LineItem>,

    /// Sum of line totals, before the delivery fee.
    pub subtotal: Money,

    /// Delivery fee charged (zero unless [`Kind::Delivery`]).
    pub delivery_fee: Money,

    /// Total amount charged.
    pub total: Money,

    /// Fulfillment mode of this [`Order`].
    pub kind: Kind,

    /// [`Customer`] the [`Order`] was placed by.
    pub customer: Customer,

    /// Free-text order notes.
    pub notes: String,

    /// [`DateTime`] when this [`Order`] was placed.
    pub placed_at: PlacementDateTime,

    /// [`DateTime`] when this [`Order`] is expected to be ready (or
    /// delivered, for delivery orders).
    pub estimated_ready_at: DateTime,

    /// Display [`Status`] of this [`Order`].
    pub status: Status,
}

/// [`DateTime`] when an [`Order`] was placed.
pub type PlacementDateTime = DateTimeOf<(Order, unit::Placement)>;

/// Human-readable order reference.
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[as_ref(str, String)]
pub struct Id(String);

impl Id {
    /// Generates a new [`Id`]: the brand tag, a base36 time component and a
    /// short random component (`MON-<time>-<random>`).
    ///
    /// Uniqueness is probabilistic, not guaranteed.
    #[must_use]
    pub fn generate(at: DateTime) -> Self {
        let time = base36(u128::from(at.unix_timestamp().unsigned_abs()));
        let random: String = base36(u128::from_le_bytes(
            Uuid::new_v4().into_bytes(),
        ))
        .chars()
        .take(RANDOM_LEN)
        .collect();
        Self(format!("{BRAND_TAG}-{time}-{random}"))
    }
}

/// Renders `n` in uppercase base36, most significant digit first.
fn base36(mut n: u128) -> String {
    let mut out = Vec::new();
    loop {
        out.push(ALPHABET[(n % 36) as usize]);
        n /= 36;
        if n == 0 {
            break;
        }
    }
    out.reverse();
    String::from_utf8(out).expect("ASCII alphabet")
}

/// Fulfillment mode of an [`Order`].
///
/// Decides which [`Customer`] fields checkout requires and whether the
/// delivery fee applies.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Eq,
    PartialEq,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
#[repr(u8)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Kind {
    /// Eating at the restaurant; a reservation time may be attached.
    DineIn = 1,

    /// Picking the order up at the counter.
    #[default]
    Takeaway = 2,

    /// Courier delivery; the flat delivery fee applies.
    Delivery = 3,
}

/// Display status of an [`Order`].
///
/// Purely informational: the aggregation engine never advances it, the
/// kitchen side of the system does.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Eq,
    PartialEq,
    Serialize,
    strum::Display,
    strum::EnumString,
)]
#[repr(u8)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Status {
    /// Placed, not yet acknowledged.
    Pending = 1,

    /// Payment settled, order acknowledged.
    Confirmed = 2,

    /// In the kitchen.
    Preparing = 3,

    /// Ready for pickup or courier handoff.
    Ready = 4,

    /// Handed to the customer.
    Delivered = 5,

    /// Cancelled.
    Cancelled = 6,
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use common::DateTime;

    use super::{base36, Id, Kind};

    #[test]
    fn base36_digits() {
        assert_eq!(base36(0), "0");
        assert_eq!(base36(35), "Z");
        assert_eq!(base36(36), "10");
        assert_eq!(base36(1_756_665_000), "T1VFE0");
    }

    #[test]
    fn id_format() {
        let id = Id::generate(DateTime::now()).to_string();
        let parts: Vec<_> = id.split('-').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "MON");
        assert_eq!(parts[2].len(), 5);
        assert_eq!(id, id.to_uppercase());
    }

    #[test]
    fn ids_differ() {
        let at = DateTime::now();
        assert_ne!(Id::generate(at), Id::generate(at));
    }

    #[test]
    fn default_kind_is_takeaway() {
        assert_eq!(Kind::default(), Kind::Takeaway);
        assert_eq!(Kind::DineIn.to_string(), "dine-in");
        assert_eq!(Kind::from_str("delivery").unwrap(), Kind::Delivery);
    }
}
