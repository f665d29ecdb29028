//! [`Command`] for adding units of a [`Product`] to the cart.

use common::operations::Save;
use derive_more::{Display, Error};
use tracerr::Traced;

use crate::{
    domain::{cart, Cart, Product},
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] for adding units of a [`Product`] to the cart.
///
/// Merges into the existing line of the same [`product::Id`] instead of
/// creating a duplicate entry.
///
/// [`product::Id`]: crate::domain::product::Id
#[derive(Clone, Debug)]
pub struct AddItem {
    /// [`Product`] to add.
    pub product: Product,

    /// Number of units to add. Must be positive.
    pub quantity: u32,

    /// Line notes for a newly created line. Ignored when merging into an
    /// existing one.
    pub notes: String,
}

impl AddItem {
    /// Creates an [`AddItem`] for one unit of the `product`, without notes.
    #[must_use]
    pub fn one(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
            notes: String::new(),
        }
    }
}

impl<S, G> Command<AddItem> for Service<S, G>
where
    S: Storage<Save<Cart>, Ok = (), Err = Traced<storage::Error>>,
{
    type Ok = cart::LineItem;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, cmd: AddItem) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let AddItem {
            product,
            quantity,
            notes,
        } = cmd;

        let quantity = cart::Quantity::new(quantity)
            .ok_or_else(|| tracerr::new!(E::InvalidQuantity(quantity)))?;

        let mut cart = self.cart.write().await;
        let line = cart.add_units(product, quantity, notes).clone();
        self.persist(&cart).await;

        Ok(line)
    }
}

/// Error of [`AddItem`] [`Command`] execution.
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
pub enum ExecutionError {
    /// Attempted to add a non-positive number of units.
    #[display("cannot add {_0} units")]
    InvalidQuantity(#[error(not(source))] u32),
}

#[cfg(test)]
mod spec {
    use common::Money;

    use crate::{
        domain::{product, Product},
        infra::{payment::Simulated, storage::Memory},
        Command as _, Config, Service,
    };

    use super::{AddItem, ExecutionError};

    fn product(id: &str) -> Product {
        Product {
            id: product::Id::from(id),
            name: product::Name::new("Product").unwrap(),
            description: String::new(),
            price: Money::from(3000),
            original_price: None,
            kind: product::Kind::FastFood,
            ingredients: vec![],
            calories: 0,
            weight_grams: 0,
            is_special_offer: false,
            preparation_minutes: 10,
            is_available: true,
            tags: vec![],
        }
    }

    fn service() -> Service<Memory, Simulated> {
        Service::new(Config::default(), Memory::default(), Simulated::instant())
    }

    #[tokio::test]
    async fn rejects_zero_quantity() {
        let service = service();

        let err = service
            .execute(AddItem {
                product: product("burger"),
                quantity: 0,
                notes: String::new(),
            })
            .await
            .unwrap_err();

        assert_eq!(*err.as_ref(), ExecutionError::InvalidQuantity(0));
    }

    #[tokio::test]
    async fn merges_and_persists() {
        let service = service();

        _ = service.execute(AddItem::one(product("burger"))).await.unwrap();
        let line = service
            .execute(AddItem {
                product: product("burger"),
                quantity: 2,
                notes: String::new(),
            })
            .await
            .unwrap();

        assert_eq!(line.quantity.get(), 3);

        // The mutation reached the storage: a reload sees the same cart.
        let reloaded = Service::load(
            Config::default(),
            service.storage().clone(),
            Simulated::instant(),
        )
        .await
        .unwrap();
        let cart = reloaded.cart.read().await;
        assert_eq!(cart.total_items(), 3);
        assert_eq!(cart.items().len(), 1);
    }
}
