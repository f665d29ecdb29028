//! [`Command`] definition.

pub mod add_item;
pub mod checkout;
pub mod clear_cart;
pub mod remove_item;
pub mod set_order_kind;
pub mod set_order_notes;
pub mod set_quantity;
pub mod update_customer;
pub mod update_line_notes;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    add_item::AddItem, checkout::Checkout, clear_cart::ClearCart,
    remove_item::RemoveItem, set_order_kind::SetOrderKind,
    set_order_notes::SetOrderNotes, set_quantity::SetQuantity,
    update_customer::UpdateCustomer, update_line_notes::UpdateLineNotes,
};
