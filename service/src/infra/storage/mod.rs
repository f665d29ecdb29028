//! Local persistence of cart snapshots.

pub mod file;
pub mod memory;

use std::io;

use derive_more::{Display, Error as StdError, From};

pub use self::{file::File, memory::Memory};

/// Local key-value storage the cart snapshot persists to.
pub use common::Handler as Storage;

/// [`Storage`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Underlying I/O failure.
    #[display("I/O operation failed: {_0}")]
    Io(io::Error),

    /// Snapshot encoding/decoding failure.
    #[display("cannot (de)code snapshot: {_0}")]
    Codec(serde_json::Error),
}
