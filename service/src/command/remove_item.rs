//! [`Command`] for removing a cart line.

use std::convert::Infallible;

use common::operations::Save;
use tracerr::Traced;

use crate::{
    domain::{product, Cart},
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] for removing the cart line matching a [`product::Id`].
///
/// Removing an absent product is a no-op, not an error.
#[derive(Clone, Debug)]
pub struct RemoveItem(pub product::Id);

impl<S, G> Command<RemoveItem> for Service<S, G>
where
    S: Storage<Save<Cart>, Ok = (), Err = Traced<storage::Error>>,
{
    type Ok = ();
    type Err = Infallible;

    async fn execute(
        &self,
        RemoveItem(id): RemoveItem,
    ) -> Result<Self::Ok, Self::Err> {
        let mut cart = self.cart.write().await;
        cart.remove(&id);
        self.persist(&cart).await;
        Ok(())
    }
}
