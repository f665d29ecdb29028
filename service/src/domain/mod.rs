//! Domain definitions.

pub mod cart;
pub mod customer;
pub mod order;
pub mod product;

pub use self::{
    cart::Cart, customer::Customer, order::Order, product::Product,
};
