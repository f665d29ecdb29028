//! [`Command`] for setting the absolute quantity of a cart line.

use std::convert::Infallible;

use common::operations::Save;
use tracerr::Traced;

use crate::{
    domain::{product, Cart},
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] for setting the absolute quantity of the cart line matching a
/// [`product::Id`].
///
/// Unlike [`AddItem`] this is a set, not a delta: a zero `quantity` removes
/// the line, so zero-quantity lines stay unreachable. No-op when no line
/// matches.
///
/// [`AddItem`]: super::AddItem
#[derive(Clone, Debug)]
pub struct SetQuantity {
    /// [`product::Id`] of the line to change.
    pub product: product::Id,

    /// New absolute quantity. Zero removes the line.
    pub quantity: u32,
}

impl<S, G> Command<SetQuantity> for Service<S, G>
where
    S: Storage<Save<Cart>, Ok = (), Err = Traced<storage::Error>>,
{
    type Ok = ();
    type Err = Infallible;

    async fn execute(&self, cmd: SetQuantity) -> Result<Self::Ok, Self::Err> {
        let mut cart = self.cart.write().await;
        cart.set_quantity(&cmd.product, cmd.quantity);
        self.persist(&cart).await;
        Ok(())
    }
}

#[cfg(test)]
mod spec {
    use common::Money;

    use crate::{
        domain::{product, Product},
        infra::{payment::Simulated, storage::Memory},
        Command as _, Config, Service,
    };

    use super::SetQuantity;

    fn product(id: &str) -> Product {
        Product {
            id: product::Id::from(id),
            name: product::Name::new("Product").unwrap(),
            description: String::new(),
            price: Money::from(2000),
            original_price: None,
            kind: product::Kind::Drinks,
            ingredients: vec![],
            calories: 0,
            weight_grams: 0,
            is_special_offer: false,
            preparation_minutes: 5,
            is_available: true,
            tags: vec![],
        }
    }

    #[tokio::test]
    async fn zero_removes_like_remove_item() {
        let service = Service::new(
            Config::default(),
            Memory::default(),
            Simulated::instant(),
        );

        _ = service
            .execute(crate::command::AddItem {
                product: product("bissap"),
                quantity: 4,
                notes: String::new(),
            })
            .await
            .unwrap();

        service
            .execute(SetQuantity {
                product: product::Id::from("bissap"),
                quantity: 2,
            })
            .await
            .unwrap();
        assert_eq!(service.cart.read().await.total_items(), 2);

        service
            .execute(SetQuantity {
                product: product::Id::from("bissap"),
                quantity: 0,
            })
            .await
            .unwrap();
        assert!(service.cart.read().await.is_empty());
    }
}
