//! Error types for the listing core.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListingError {
    /// A path could not be opened or its directory could not be read.
    #[error("{}: {}", .path.display(), .source)]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Metadata for an entry could not be probed.
    #[error("{}: cannot read metadata: {}", .path.display(), .source)]
    Probe {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ListingError {
    pub(crate) fn unreadable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ListingError::Unreadable {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ListingError>;
