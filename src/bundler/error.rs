//! Error taxonomy for the bundle pipeline.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or packaging a bundle.
#[derive(Error, Debug)]
pub enum Error {
    /// A file could not be opened or read while computing its digest.
    ///
    /// The manifest builder degrades this to a null hash instead of
    /// aborting; the variant surfaces only through [`crate::bundler::hash_file`]
    /// callers that want the failure itself.
    #[error("failed to hash {}: {source}", path.display())]
    Hashing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The project root could not be listed. Listing failures below the
    /// root are skipped by the walker, not raised.
    #[error("failed to list {}: {source}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The project path does not exist or is not a directory at bundle time.
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// Another bundle run is already in flight for the same project path.
    #[error("a bundle is already running for {}", .0.display())]
    InProgress(PathBuf),

    /// Manifest serialization or archive creation failed.
    #[error(transparent)]
    Packaging(#[from] PackagingError),
}

/// Fatal failures while writing the manifest document or the archive.
///
/// Every variant aborts the whole bundle; nothing is retried.
#[derive(Error, Debug)]
pub enum PackagingError {
    /// The aggregate manifest could not be serialized
    #[error("failed to encode bundle manifest: {0}")]
    ManifestEncode(#[source] serde_json::Error),

    /// The manifest document could not be written to the project root
    #[error("failed to write bundle manifest {}: {source}", path.display())]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A stale archive at the target path could not be deleted
    #[error("failed to remove stale archive {}: {source}", path.display())]
    RemoveStale {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The archive file could not be created
    #[error("failed to create archive {}: {source}", path.display())]
    ArchiveCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The archival walk over the project tree failed
    #[error("failed to walk {} while archiving: {source}", path.display())]
    ArchiveWalk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// An entry header could not be added to the archive
    #[error("failed to add {entry:?} to the archive: {source}")]
    ArchiveEntry {
        entry: String,
        #[source]
        source: zip::result::ZipError,
    },

    /// A file's bytes could not be streamed into the archive
    #[error("failed to copy {} into the archive: {source}", path.display())]
    EntryCopy {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The archive's central directory could not be finalized
    #[error("failed to finish archive {}: {source}", path.display())]
    ArchiveFinish {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
}
