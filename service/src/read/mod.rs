//! Read entities definitions.

pub mod cart;
