//! [`Command`] for editing the notes of a cart line.

use std::convert::Infallible;

use common::operations::Save;
use tracerr::Traced;

use crate::{
    domain::{product, Cart},
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] replacing the free-text notes of the cart line matching a
/// [`product::Id`]. No-op when no line matches.
#[derive(Clone, Debug)]
pub struct UpdateLineNotes {
    /// [`product::Id`] of the line to annotate.
    pub product: product::Id,

    /// New line notes.
    pub notes: String,
}

impl<S, G> Command<UpdateLineNotes> for Service<S, G>
where
    S: Storage<Save<Cart>, Ok = (), Err = Traced<storage::Error>>,
{
    type Ok = ();
    type Err = Infallible;

    async fn execute(
        &self,
        cmd: UpdateLineNotes,
    ) -> Result<Self::Ok, Self::Err> {
        let mut cart = self.cart.write().await;
        cart.set_line_notes(&cmd.product, cmd.notes);
        self.persist(&cart).await;
        Ok(())
    }
}
