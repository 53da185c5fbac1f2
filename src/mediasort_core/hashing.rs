use crate::mediasort_core::error::Result;
use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::Path;

/// Calculate the SHA256 digest of a file. Used only for equality
/// checks, never for addressing.
pub fn digest_file(path: &Path) -> Result<[u8; 32]> {
    let mut file = fs::File::open(path)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(hasher.finalize().into())
}

/// Byte equality of two files. Sizes are compared first; digests are
/// only computed when the sizes match.
pub fn files_equal(src: &Path, dest: &Path) -> Result<bool> {
    files_equal_with(src, dest, digest_file)
}

fn files_equal_with<F>(src: &Path, dest: &Path, digest: F) -> Result<bool>
where
    F: Fn(&Path) -> Result<[u8; 32]>,
{
    if fs::metadata(src)?.len() != fs::metadata(dest)?.len() {
        return Ok(false);
    }
    Ok(digest(src)? == digest(dest)?)
}
