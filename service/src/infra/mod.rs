//! Infrastructure layer.

pub mod catalog;
pub mod payment;
pub mod storage;

pub use self::{catalog::Catalog, payment::Gateway, storage::Storage};
