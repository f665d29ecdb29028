//! Service contains the business logic of the storefront: the cart/order
//! aggregation engine and its local infrastructure adapters.
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;
pub mod read;

use common::{
    operations::{Load, Save},
    Money,
};
use smart_default::SmartDefault;
use tokio::sync::RwLock;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::Cart,
    infra::{storage, Storage},
};

pub use self::{command::Command, query::Query};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// Flat surcharge applied to delivery orders with a non-empty cart.
    #[default(Money::from(500))]
    pub delivery_fee: Money,
}

/// Storefront service: the single owner of the [`Cart`] state.
///
/// All mutations go through [`Command`]s, which persist the updated snapshot
/// into the `S` [`Storage`] afterwards. `G` is the payment [`Gateway`]
/// charged on checkout.
///
/// [`Gateway`]: infra::Gateway
#[derive(Debug)]
pub struct Service<S, G> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Storage`] the [`Cart`] snapshot persists to.
    storage: S,

    /// Payment gateway charged on checkout.
    gateway: G,

    /// Current [`Cart`] state.
    cart: RwLock<Cart>,
}

impl<S, G> Service<S, G> {
    /// Creates a new [`Service`] over an empty [`Cart`].
    pub fn new(config: Config, storage: S, gateway: G) -> Self {
        Self {
            config,
            storage,
            gateway,
            cart: RwLock::new(Cart::default()),
        }
    }

    /// Creates a new [`Service`], rehydrating the [`Cart`] from the persisted
    /// snapshot (an absent snapshot yields an empty [`Cart`]).
    ///
    /// # Errors
    ///
    /// If the persisted snapshot cannot be read or decoded.
    pub async fn load(
        config: Config,
        storage: S,
        gateway: G,
    ) -> Result<Self, Traced<storage::Error>>
    where
        S: Storage<
            Load<Cart>,
            Ok = Option<Cart>,
            Err = Traced<storage::Error>,
        >,
    {
        let cart = storage
            .execute(Load::new())
            .await
            .map_err(tracerr::wrap!())?
            .unwrap_or_default();
        Ok(Self {
            config,
            storage,
            gateway,
            cart: RwLock::new(cart),
        })
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the [`Storage`] of this [`Service`].
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns the payment gateway of this [`Service`].
    #[must_use]
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Persists the provided [`Cart`] snapshot.
    ///
    /// Persistence is fire-and-forget: a failed write is logged and the
    /// in-memory state stays authoritative (last write wins on reload).
    async fn persist(&self, cart: &Cart)
    where
        S: Storage<Save<Cart>, Ok = (), Err = Traced<storage::Error>>,
    {
        if let Err(e) = self.storage.execute(Save(cart.clone())).await {
            log::warn!("failed to persist cart snapshot: {e}");
        }
    }
}
