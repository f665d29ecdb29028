//! [`Command`] for submitting the assembled order.

use std::time::Duration;

use common::{
    operations::{Perform, Save},
    DateTime,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{customer, order, Cart, Order},
    infra::{payment, storage, Gateway, Storage},
    Service,
};

use super::Command;

/// Extra travel time budgeted on top of the kitchen estimate for delivery
/// orders.
const DELIVERY_BUFFER: Duration = Duration::from_secs(15 * 60);

/// [`Command`] submitting the current cart as an [`Order`].
///
/// Validates the cart and contact details, charges the payment [`Gateway`]
/// and, only once the payment settles, clears the cart. A failed payment
/// leaves the cart exactly as it was.
#[derive(Clone, Copy, Debug)]
pub struct Checkout;

impl<S, G> Command<Checkout> for Service<S, G>
where
    S: Storage<Save<Cart>, Ok = (), Err = Traced<storage::Error>>,
    G: Gateway<
        Perform<payment::Charge>,
        Ok = payment::Receipt,
        Err = Traced<payment::Error>,
    >,
{
    type Ok = Order;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, _: Checkout) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        // The write guard is held across the payment await: a second submit
        // issued meanwhile serializes behind it and then observes the
        // emptied cart instead of charging twice.
        let mut cart = self.cart.write().await;

        if cart.is_empty() {
            return Err(tracerr::new!(E::EmptyCart));
        }
        let customer = cart.customer().clone();
        if customer.name.is_none() {
            return Err(tracerr::new!(E::MissingCustomerInfo(
                customer::Field::Name
            )));
        }
        if customer.phone.is_none() {
            return Err(tracerr::new!(E::MissingCustomerInfo(
                customer::Field::Phone
            )));
        }
        if cart.kind() == order::Kind::Delivery && customer.address.is_none()
        {
            return Err(tracerr::new!(E::MissingCustomerInfo(
                customer::Field::Address
            )));
        }

        let fee = self.config.delivery_fee;
        let total = cart.total(fee);
        let receipt = self
            .gateway
            .execute(Perform(payment::Charge { amount: total }))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let placed_at = DateTime::now();
        let kitchen_minutes = cart
            .items()
            .iter()
            .map(|l| l.product.preparation_minutes)
            .max()
            .unwrap_or(0);
        let mut estimated_ready_at =
            placed_at + Duration::from_secs(u64::from(kitchen_minutes) * 60);
        if cart.kind() == order::Kind::Delivery {
            estimated_ready_at = estimated_ready_at + DELIVERY_BUFFER;
        }

        let order = Order {
            id: order::Id::generate(placed_at),
            items: cart.items().to_vec(),
            subtotal: cart.subtotal(),
            delivery_fee: cart.delivery_fee(fee),
            total,
            kind: cart.kind(),
            customer,
            notes: cart.notes().to_owned(),
            placed_at: placed_at.coerce(),
            estimated_ready_at,
            status: order::Status::Confirmed,
        };

        cart.clear();
        self.persist(&cart).await;

        log::info!(
            order = %order.id,
            reference = %receipt.reference,
            "payment settled",
        );
        Ok(order)
    }
}

/// Error of [`Checkout`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// Checkout attempted with no cart lines.
    #[display("cart is empty")]
    EmptyCart,

    /// A required contact field is blank.
    #[display("missing customer {_0}")]
    MissingCustomerInfo(#[error(not(source))] customer::Field),

    /// The payment was not settled. The cart is left intact.
    #[display("payment failed: {_0}")]
    #[from]
    Payment(payment::Error),
}

#[cfg(test)]
mod spec {
    use common::Money;

    use crate::{
        command::{AddItem, SetOrderKind, UpdateCustomer},
        domain::{customer, order, product, Product},
        infra::{payment::Simulated, storage::Memory},
        Command as _, Config, Service,
    };

    use super::{Checkout, ExecutionError};

    fn product(id: &str, price: u32, original: Option<u32>) -> Product {
        Product {
            id: product::Id::from(id),
            name: product::Name::new("Product").unwrap(),
            description: String::new(),
            price: Money::from(price),
            original_price: original.map(Money::from),
            kind: product::Kind::FastFood,
            ingredients: vec![],
            calories: 0,
            weight_grams: 0,
            is_special_offer: original.is_some(),
            preparation_minutes: 15,
            is_available: true,
            tags: vec![],
        }
    }

    fn service(gateway: Simulated) -> Service<Memory, Simulated> {
        Service::new(Config::default(), Memory::default(), gateway)
    }

    async fn fill(service: &Service<Memory, Simulated>) {
        _ = service
            .execute(AddItem {
                product: product("burger", 3000, Some(3500)),
                quantity: 2,
                notes: String::new(),
            })
            .await
            .unwrap();
        service
            .execute(UpdateCustomer(customer::Update {
                name: customer::Name::new("Amina"),
                phone: customer::Phone::new("671234567"),
                ..customer::Update::default()
            }))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn rejects_empty_cart() {
        let service = service(Simulated::instant());

        let err = service.execute(Checkout).await.unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::EmptyCart));
    }

    #[tokio::test]
    async fn rejects_blank_required_contact_fields() {
        let service = service(Simulated::instant());
        _ = service
            .execute(AddItem::one(product("burger", 3000, None)))
            .await
            .unwrap();

        let err = service.execute(Checkout).await.unwrap_err();
        assert!(matches!(
            err.as_ref(),
            ExecutionError::MissingCustomerInfo(customer::Field::Name),
        ));

        service
            .execute(UpdateCustomer(customer::Update {
                name: customer::Name::new("Amina"),
                ..customer::Update::default()
            }))
            .await
            .unwrap();
        let err = service.execute(Checkout).await.unwrap_err();
        assert!(matches!(
            err.as_ref(),
            ExecutionError::MissingCustomerInfo(customer::Field::Phone),
        ));
    }

    #[tokio::test]
    async fn delivery_requires_an_address() {
        let service = service(Simulated::instant());
        fill(&service).await;
        service
            .execute(SetOrderKind(order::Kind::Delivery))
            .await
            .unwrap();

        let err = service.execute(Checkout).await.unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::MissingCustomerInfo(customer::Field::Address),
        ));
    }

    #[tokio::test]
    async fn takeaway_needs_name_and_phone_only() {
        let service = service(Simulated::instant());
        fill(&service).await;

        let order = service.execute(Checkout).await.unwrap();

        assert_eq!(order.kind, order::Kind::Takeaway);
        assert_eq!(order.subtotal, Money::from(7000));
        assert_eq!(order.delivery_fee, Money::ZERO);
        assert_eq!(order.total, Money::from(7000));
        assert!(order.id.to_string().starts_with("MON-"));
        assert!(service.cart.read().await.is_empty());
    }

    #[tokio::test]
    async fn delivery_order_charges_the_flat_fee() {
        let service = service(Simulated::instant());
        fill(&service).await;
        service
            .execute(SetOrderKind(order::Kind::Delivery))
            .await
            .unwrap();
        service
            .execute(UpdateCustomer(customer::Update {
                address: customer::Address::new("12 Rue des Manguiers"),
                ..customer::Update::default()
            }))
            .await
            .unwrap();

        let order = service.execute(Checkout).await.unwrap();

        assert_eq!(order.subtotal, Money::from(7000));
        assert_eq!(order.delivery_fee, Money::from(500));
        assert_eq!(order.total, Money::from(7500));
        assert!(order.estimated_ready_at > order.placed_at.coerce());
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_submissions_charge_once() {
        let service =
            service(Simulated::new(std::time::Duration::from_millis(200)));
        fill(&service).await;

        // The second submission serializes behind the held write lock and
        // then observes the emptied cart.
        let (a, b) =
            tokio::join!(service.execute(Checkout), service.execute(Checkout));

        let (order, err) = match (a, b) {
            (Ok(order), Err(err)) | (Err(err), Ok(order)) => (order, err),
            (a, b) => panic!("expected exactly one settled order: {a:?}, {b:?}"),
        };
        assert_eq!(order.total, Money::from(7000));
        assert!(matches!(err.as_ref(), ExecutionError::EmptyCart));
        assert!(service.cart.read().await.is_empty());
    }

    #[tokio::test]
    async fn declined_payment_keeps_the_cart() {
        let service = service(Simulated::instant().declining());
        fill(&service).await;

        let err = service.execute(Checkout).await.unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::Payment(..)));
        assert_eq!(service.cart.read().await.total_items(), 2);
    }
}
