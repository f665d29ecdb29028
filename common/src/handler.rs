//! [`Handler`] abstractions.

use std::future::Future;

/// Executable handler.
///
/// Every port of the system (commands, queries, storage, payment, catalog)
/// is expressed as a [`Handler`] over a dedicated operation type.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}
