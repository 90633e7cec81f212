//! Errors reported by the manager.

use std::io;
use std::path::PathBuf;

use crate::reference::BddId;

/// Error type for manager operations.
#[derive(Debug, thiserror::Error)]
pub enum BddError {
    /// The handle does not name a node of this manager.
    #[error("invalid handle {0}: no such node in the unique table")]
    InvalidHandle(BddId),

    /// Writing an exported graph failed.
    #[error("failed to write '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, BddError>;
