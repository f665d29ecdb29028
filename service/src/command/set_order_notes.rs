//! [`Command`] for replacing the free-text order notes.

use std::convert::Infallible;

use common::operations::Save;
use tracerr::Traced;

use crate::{
    domain::Cart,
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] replacing the free-text notes attached to the whole order.
#[derive(Clone, Debug)]
pub struct SetOrderNotes(pub String);

impl<S, G> Command<SetOrderNotes> for Service<S, G>
where
    S: Storage<Save<Cart>, Ok = (), Err = Traced<storage::Error>>,
{
    type Ok = ();
    type Err = Infallible;

    async fn execute(
        &self,
        SetOrderNotes(notes): SetOrderNotes,
    ) -> Result<Self::Ok, Self::Err> {
        let mut cart = self.cart.write().await;
        cart.set_notes(notes);
        self.persist(&cart).await;
        Ok(())
    }
}
