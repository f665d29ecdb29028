//! [`Query`] collection over the current [`Cart`].

use std::convert::Infallible;

use crate::{domain::Cart, read, Service};

use super::Query;

/// [`Query`] of the current [`Cart`] state, as a detached copy.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot;

impl<S, G> Query<Snapshot> for Service<S, G> {
    type Ok = Cart;
    type Err = Infallible;

    async fn execute(&self, _: Snapshot) -> Result<Self::Ok, Self::Err> {
        Ok(self.cart.read().await.clone())
    }
}

/// [`Query`] of the derived [`read::cart::Totals`] of the current [`Cart`].
#[derive(Clone, Copy, Debug)]
pub struct Totals;

impl<S, G> Query<Totals> for Service<S, G> {
    type Ok = read::cart::Totals;
    type Err = Infallible;

    async fn execute(&self, _: Totals) -> Result<Self::Ok, Self::Err> {
        let cart = self.cart.read().await;
        Ok(read::cart::Totals::of(&cart, self.config().delivery_fee))
    }
}
