//! [`Command`] for emptying the cart.

use std::convert::Infallible;

use common::operations::Save;
use tracerr::Traced;

use crate::{
    domain::Cart,
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] emptying the cart lines.
///
/// Fulfillment mode, order notes and customer details are kept.
#[derive(Clone, Copy, Debug)]
pub struct ClearCart;

impl<S, G> Command<ClearCart> for Service<S, G>
where
    S: Storage<Save<Cart>, Ok = (), Err = Traced<storage::Error>>,
{
    type Ok = ();
    type Err = Infallible;

    async fn execute(&self, _: ClearCart) -> Result<Self::Ok, Self::Err> {
        let mut cart = self.cart.write().await;
        cart.clear();
        self.persist(&cart).await;
        Ok(())
    }
}
