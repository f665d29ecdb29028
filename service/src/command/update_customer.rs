//! [`Command`] for updating the customer contact details.

use std::convert::Infallible;

use common::operations::Save;
use tracerr::Traced;

use crate::{
    domain::{customer, Cart},
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] applying a [`customer::Update`] to the collected contact
/// details (shallow merge: unset fields are kept).
#[derive(Clone, Debug)]
pub struct UpdateCustomer(pub customer::Update);

impl<S, G> Command<UpdateCustomer> for Service<S, G>
where
    S: Storage<Save<Cart>, Ok = (), Err = Traced<storage::Error>>,
{
    type Ok = ();
    type Err = Infallible;

    async fn execute(
        &self,
        UpdateCustomer(update): UpdateCustomer,
    ) -> Result<Self::Ok, Self::Err> {
        let mut cart = self.cart.write().await;
        cart.update_customer(update);
        self.persist(&cart).await;
        Ok(())
    }
}
