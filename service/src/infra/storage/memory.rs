//! In-memory [`Storage`].

use std::sync::{Arc, Mutex};

use common::operations::{Load, Save};
use tracerr::Traced;

use crate::domain::Cart;

use super::{Error, Storage};

/// [`Storage`] keeping the snapshot in process memory.
///
/// Cheaply cloneable handle: clones share the same record. Used by tests and
/// by embedders that do not want any on-disk state.
#[derive(Clone, Debug, Default)]
pub struct Memory(Arc<Mutex<Option<Cart>>>);

impl Memory {
    /// Locks the shared record, recovering from a poisoned lock (the
    /// snapshot stays usable even if a writer panicked).
    fn record(&self) -> std::sync::MutexGuard<'_, Option<Cart>> {
        self.0.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Storage<Save<Cart>> for Memory {
    type Ok = ();
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Save(cart): Save<Cart>,
    ) -> Result<Self::Ok, Self::Err> {
        *self.record() = Some(cart);
        Ok(())
    }
}

impl Storage<Load<Cart>> for Memory {
    type Ok = Option<Cart>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        _: Load<Cart>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.record().clone())
    }
}

#[cfg(test)]
mod spec {
    use common::operations::{Load, Save};

    use crate::{domain::Cart, infra::Storage as _};

    use super::Memory;

    #[tokio::test]
    async fn clones_share_the_record() {
        let a = Memory::default();
        let b = a.clone();

        a.execute(Save(Cart::default())).await.unwrap();

        assert_eq!(
            b.execute(Load::<Cart>::new()).await.unwrap(),
            Some(Cart::default()),
        );
    }
}
