//! [`Customer`] contact details.

use std::{str::FromStr, sync::LazyLock};

use common::DateTime;
use derive_more::{AsRef, Display};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Contact details collected before checkout.
///
/// All fields start blank; checkout validation decides which ones are
/// required for the chosen fulfillment mode.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Customer {
    /// [`Name`] of this [`Customer`].
    pub name: Option<Name>,

    /// [`Phone`] of this [`Customer`].
    pub phone: Option<Phone>,

    /// [`Email`] of this [`Customer`].
    pub email: Option<Email>,

    /// Delivery [`Address`], required for delivery orders only.
    pub address: Option<Address>,

    /// Reservation time, meaningful for dine-in orders only.
    pub dine_in_time: Option<DateTime>,
}

impl Customer {
    /// Applies the provided [`Update`]: set fields overwrite, unset fields
    /// are kept as they are.
    pub fn apply(&mut self, update: Update) {
        let Update {
            name,
            phone,
            email,
            address,
            dine_in_time,
        } = update;
        if let Some(name) = name {
            self.name = Some(name);
        }
        if let Some(phone) = phone {
            self.phone = Some(phone);
        }
        if let Some(email) = email {
            self.email = Some(email);
        }
        if let Some(address) = address {
            self.address = Some(address);
        }
        if let Some(dine_in_time) = dine_in_time {
            self.dine_in_time = Some(dine_in_time);
        }
    }
}

/// Shallow patch of a [`Customer`].
#[derive(Clone, Debug, Default)]
pub struct Update {
    /// New [`Name`], if changed.
    pub name: Option<Name>,

    /// New [`Phone`], if changed.
    pub phone: Option<Phone>,

    /// New [`Email`], if changed.
    pub email: Option<Email>,

    /// New [`Address`], if changed.
    pub address: Option<Address>,

    /// New reservation time, if changed.
    pub dine_in_time: Option<DateTime>,
}

/// [`Customer`] field required at checkout.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Field {
    /// [`Customer::name`].
    #[display("name")]
    Name,

    /// [`Customer::phone`].
    #[display("phone")]
    Phone,

    /// [`Customer::address`].
    #[display("address")]
    Address,
}

/// Name of a [`Customer`].
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

/// Phone number of a [`Customer`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[as_ref(str, String)]
pub struct Phone(String);

impl Phone {
    /// Creates a new [`Phone`] if the given `number` is valid.
    #[must_use]
    pub fn new(number: impl Into<String>) -> Option<Self> {
        let number = number.into();
        Self::check(&number).then_some(Self(number))
    }

    /// Checks whether the given `number` is a valid [`Phone`].
    fn check(number: impl AsRef<str>) -> bool {
        /// Regular expression checking [`Phone`] invariants:
        /// - optional leading `+` country code;
        /// - 7 to 15 digits overall;
        /// - single spaces or dashes allowed between digit groups.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^\+?\d(?:[-\s]?\d){6,14}$").expect("valid regex")
        });

        REGEX.is_match(number.as_ref())
    }
}

impl FromStr for Phone {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Phone`")
    }
}

/// Email address of a [`Customer`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[as_ref(str, String)]
pub struct Email(String);

impl Email {
    /// Creates a new [`Email`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether the given `address` is a valid [`Email`].
    fn check(address: impl AsRef<str>) -> bool {
        /// Regular expression checking a pragmatic `local@domain.tld` shape.
        static REGEX: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex")
        });

        REGEX.is_match(address.as_ref())
    }
}

impl FromStr for Email {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Email`")
    }
}

/// Delivery address of a [`Customer`].
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[as_ref(str, String)]
pub struct Address(String);

impl Address {
    /// Creates a new [`Address`] if the given `address` is valid.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        Self::check(&address).then_some(Self(address))
    }

    /// Checks whether the given `address` is a valid [`Address`].
    fn check(address: impl AsRef<str>) -> bool {
        let address = address.as_ref();
        !address.trim().is_empty() && address.len() <= 1024
    }
}

impl FromStr for Address {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Address`")
    }
}
