//! Simulated payment [`Gateway`].

use std::time::Duration;

use common::{operations::Perform, DateTime};
use tracerr::Traced;

use super::{Charge, Error, Gateway, Receipt, Reference};

/// [`Gateway`] settling every [`Charge`] locally, without talking to any
/// real processor.
///
/// Waits for the configured delay before answering, so that embedders see
/// the same latency a real processor would add.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Simulated {
    /// Delay before the simulated processor answers.
    delay: Duration,

    /// Indicator whether every [`Charge`] should be declined.
    declining: bool,
}

impl Simulated {
    /// Default [`delay`] before a [`Charge`] is settled.
    ///
    /// [`delay`]: Simulated::delay
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

    /// Creates a new [`Simulated`] [`Gateway`] settling every [`Charge`]
    /// after the provided `delay`.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay, declining: false }
    }

    /// Creates a new [`Simulated`] [`Gateway`] settling every [`Charge`]
    /// immediately.
    #[must_use]
    pub const fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Switches this [`Simulated`] [`Gateway`] into declining every
    /// [`Charge`], keeping its configured delay.
    #[must_use]
    pub const fn declining(mut self) -> Self {
        self.declining = true;
        self
    }
}

impl Default for Simulated {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

impl Gateway<Perform<Charge>> for Simulated {
    type Ok = Receipt;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Perform(_): Perform<Charge>,
    ) -> Result<Self::Ok, Self::Err> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.declining {
            return Err(tracerr::new!(Error::Declined));
        }
        Ok(Receipt {
            reference: Reference::generate(),
            paid_at: DateTime::now(),
        })
    }
}

#[cfg(test)]
mod spec {
    use common::{operations::Perform, Money};

    use crate::infra::{payment::Charge, Gateway as _};

    use super::{Error, Simulated};

    #[tokio::test]
    async fn settles_with_a_reference() {
        let receipt = Simulated::instant()
            .execute(Perform(Charge { amount: Money::from(7500) }))
            .await
            .unwrap();

        assert!(receipt.reference.as_ref().starts_with("PAY-"));
    }

    #[tokio::test]
    async fn declines_when_told_to() {
        let err = Simulated::instant()
            .declining()
            .execute(Perform(Charge { amount: Money::from(7500) }))
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), Error::Declined));
    }

    #[tokio::test(start_paused = true)]
    async fn declined_charges_still_wait_the_delay() {
        let delay = std::time::Duration::from_millis(200);
        let gateway = Simulated::new(delay).declining();

        let before = tokio::time::Instant::now();
        let err = gateway
            .execute(Perform(Charge { amount: Money::from(7500) }))
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), Error::Declined));
        assert!(before.elapsed() >= delay);
    }
}
