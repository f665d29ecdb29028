//! [`File`]-backed [`Storage`].

use std::{io, path::PathBuf};

use common::operations::{Load, Save};
use tracerr::Traced;

use crate::domain::Cart;

use super::{Error, Storage};

/// Default namespace the cart snapshot is keyed under.
pub const DEFAULT_NAMESPACE: &str = "monifa-cart";

/// [`Storage`] keeping the snapshot as a single JSON record on disk, keyed
/// by a namespace: `<dir>/<namespace>.json`.
///
/// Writes are not atomic with the in-memory state: the snapshot is best
/// effort and last write wins on reload.
#[derive(Clone, Debug)]
pub struct File {
    /// Directory the record lives in.
    dir: PathBuf,

    /// Namespace keying the record.
    namespace: String,
}

impl File {
    /// Creates a new [`File`] storage in the given directory, keyed under
    /// the [`DEFAULT_NAMESPACE`].
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_namespace(dir, DEFAULT_NAMESPACE)
    }

    /// Creates a new [`File`] storage in the given directory, keyed under
    /// the provided `namespace`.
    #[must_use]
    pub fn with_namespace(
        dir: impl Into<PathBuf>,
        namespace: impl Into<String>,
    ) -> Self {
        Self {
            dir: dir.into(),
            namespace: namespace.into(),
        }
    }

    /// Path of the snapshot record.
    fn record(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.namespace))
    }
}

impl Storage<Save<Cart>> for File {
    type Ok = ();
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Save(cart): Save<Cart>,
    ) -> Result<Self::Ok, Self::Err> {
        let bytes = serde_json::to_vec(&cart)
            .map_err(tracerr::from_and_wrap!(=> Error))?;
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))?;
        tokio::fs::write(self.record(), bytes)
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))
    }
}

impl Storage<Load<Cart>> for File {
    type Ok = Option<Cart>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        _: Load<Cart>,
    ) -> Result<Self::Ok, Self::Err> {
        let bytes = match tokio::fs::read(self.record()).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(None);
            }
            Err(e) => return Err(tracerr::new!(Error::Io(e))),
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(tracerr::from_and_wrap!(=> Error))
    }
}
