//! Payment [`Gateway`] definitions.

pub mod simulated;

use common::{DateTime, Money};
use derive_more::{Display, Error as StdError};

#[doc(inline)]
pub use self::simulated::Simulated;

/// Gateway settling payments for checked-out orders.
pub use common::Handler as Gateway;

/// Request to charge the given amount.
#[derive(Clone, Copy, Debug)]
pub struct Charge {
    /// Amount to be charged.
    pub amount: Money,
}

/// Proof of a settled [`Charge`].
#[derive(Clone, Debug)]
pub struct Receipt {
    /// Reference assigned to the settled payment by the processor.
    pub reference: Reference,

    /// [`DateTime`] when the payment was settled.
    pub paid_at: DateTime,
}

/// Opaque reference of a settled payment.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub struct Reference(String);

impl Reference {
    /// Creates a new random [`Reference`].
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("PAY-{}", uuid::Uuid::new_v4().simple()))
    }
}

impl AsRef<str> for Reference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Possible errors of charging a payment.
#[derive(Clone, Copy, Debug, Display, StdError)]
pub enum Error {
    /// Processor refused to settle the [`Charge`].
    #[display("payment declined by the processor")]
    Declined,
}
