//! [`Command`] for choosing the fulfillment mode.

use std::convert::Infallible;

use common::operations::Save;
use tracerr::Traced;

use crate::{
    domain::{order, Cart},
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] choosing the [`order::Kind`] of the future order.
#[derive(Clone, Copy, Debug)]
pub struct SetOrderKind(pub order::Kind);

impl<S, G> Command<SetOrderKind> for Service<S, G>
where
    S: Storage<Save<Cart>, Ok = (), Err = Traced<storage::Error>>,
{
    type Ok = ();
    type Err = Infallible;

    async fn execute(
        &self,
        SetOrderKind(kind): SetOrderKind,
    ) -> Result<Self::Ok, Self::Err> {
        let mut cart = self.cart.write().await;
        cart.set_kind(kind);
        self.persist(&cart).await;
        Ok(())
    }
}
