//! [`Args`] definitions.

use clap::{Parser, Subcommand};
use common::DateTime;
use service::domain::{customer, order, product};

/// Storefront of the Monifa restaurant.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Storefront action to perform.
    #[command(subcommand)]
    pub action: Action,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Storefront action.
#[derive(Debug, Subcommand)]
pub enum Action {
    /// Prints the menu, optionally narrowed to a single category.
    Menu {
        /// Category to list (e.g. `fast-food`, `african-cuisine`).
        #[arg(long)]
        category: Option<product::Kind>,
    },

    /// Prints the current cart with its totals.
    Show,

    /// Adds units of a product to the cart.
    Add {
        /// ID of the product to add.
        product: product::Id,

        /// Number of units to add.
        #[arg(long, default_value_t = 1)]
        qty: u32,

        /// Line notes (e.g. `no onions`).
        #[arg(long, default_value = "")]
        note: String,
    },

    /// Removes a product line from the cart.
    Remove {
        /// ID of the product to remove.
        product: product::Id,
    },

    /// Sets the absolute quantity of a cart line. Zero removes the line.
    SetQty {
        /// ID of the product to change.
        product: product::Id,

        /// New quantity.
        qty: u32,
    },

    /// Replaces the notes of a cart line.
    Note {
        /// ID of the product to annotate.
        product: product::Id,

        /// New line notes.
        note: String,
    },

    /// Chooses the fulfillment mode of the future order.
    OrderType {
        /// One of `dine-in`, `takeaway` or `delivery`.
        kind: order::Kind,
    },

    /// Updates the customer contact details. Omitted fields stay unchanged.
    Customer {
        /// Customer name.
        #[arg(long)]
        name: Option<customer::Name>,

        /// Contact phone number.
        #[arg(long)]
        phone: Option<customer::Phone>,

        /// Contact email address.
        #[arg(long)]
        email: Option<customer::Email>,

        /// Delivery address.
        #[arg(long)]
        address: Option<customer::Address>,

        /// Dine-in reservation time, as RFC 3339 (e.g.
        /// `2026-08-31T19:30:00Z`).
        #[arg(long, value_parser = parse_datetime)]
        dine_in_time: Option<DateTime>,
    },

    /// Replaces the order-level notes.
    Notes {
        /// New order notes.
        notes: String,
    },

    /// Empties the cart, keeping the order details.
    Clear,

    /// Validates the cart, charges the payment and places the order.
    Checkout,
}

/// Parses a [`DateTime`] command line value.
fn parse_datetime(input: &str) -> Result<DateTime, String> {
    DateTime::from_rfc3339(input).map_err(|e| e.to_string())
}
