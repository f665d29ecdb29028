//! Abstract operations.

use std::marker::PhantomData;

/// Operation to select a value.
#[derive(Clone, Copy, Debug)]
pub struct Select<T>(pub T);

/// Operation to perform a value.
#[derive(Clone, Copy, Debug)]
pub struct Perform<T>(pub T);

/// Operation to load the persisted `T` value.
#[derive(Clone, Copy, Debug, Default)]
pub struct Load<T>(PhantomData<T>);

impl<T> Load<T> {
    /// Creates a new [`Load`] operation.
    #[must_use]
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

/// Operation to persist a value.
#[derive(Clone, Copy, Debug)]
pub struct Save<T>(pub T);

/// Selector of `W` by `B`.
#[derive(Clone, Copy, Debug)]
pub struct By<W, B> {
    /// Type of the value to select.
    _what: PhantomData<W>,

    /// Value to select by.
    by: B,
}

impl<W, B> By<W, B> {
    /// Creates a new [`By`] with the given value.
    #[must_use]
    pub fn new(by: B) -> Self {
        Self {
            _what: PhantomData,
            by,
        }
    }

    /// Consumes this [`By`] and returns the inner value.
    #[must_use]
    pub fn into_inner(self) -> B {
        self.by
    }
}
