//! Content digest calculation for bundle manifests.
//!
//! Every file recorded in a manifest is identified by a SHA-1 digest over
//! its raw bytes. The algorithm is fixed: downstream consumers compare
//! digests across manifests, so mixing algorithms within or between
//! manifests is not allowed.

use crate::bundler::error::{Error, Result};
use sha1::{Digest, Sha1};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read buffer size for streaming files through the digest.
const CHUNK_SIZE: usize = 8192;

/// Computes the SHA-1 digest of a file's contents.
///
/// Reads the file in 8KB chunks and feeds them incrementally into the
/// digest, so memory use is constant regardless of file size.
///
/// # Arguments
///
/// * `path` - File to hash
///
/// # Returns
///
/// * `Ok(String)` - Lowercase hex-encoded SHA-1 digest (40 characters)
/// * `Err` - If the file cannot be opened or read
pub fn hash_file(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|source| Error::Hashing {
        path: path.to_path_buf(),
        source,
    })?;
    let mut hasher = Sha1::new();
    let mut buffer = vec![0u8; CHUNK_SIZE];

    loop {
        let n = file.read(&mut buffer).map_err(|source| Error::Hashing {
            path: path.to_path_buf(),
            source,
        })?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(hex::encode(hasher.finalize()))
}
