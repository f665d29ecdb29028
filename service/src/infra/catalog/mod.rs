//! Product [`Catalog`] definitions.

pub mod menu;

#[doc(inline)]
pub use self::menu::Menu;

/// Read-only source of [`Product`]s.
///
/// [`Product`]: crate::domain::Product
pub use common::Handler as Catalog;

/// Selector of the whole [`Catalog`] listing.
#[derive(Clone, Copy, Debug)]
pub struct All;
