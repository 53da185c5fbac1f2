use crate::mediasort_core::category::Config;
use crate::mediasort_core::error::{MediasortError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Editing-config sidecar extension (lowercase). Darktable and other
/// raw editors keep per-image edits in an `.xmp` file with the same
/// stem as the image; the pair must stay co-located.
pub const SIDECAR_EXTENSION: &str = "xmp";

/// Find the sidecar file associated with a photo, if one exists next
/// to it. The photo itself must still exist, independent of whether a
/// sidecar does.
///
/// Example: for "photo.jpg", returns "photo.xmp" when present.
pub fn find_sidecar(photo_path: &Path) -> Result<Option<PathBuf>> {
    if !photo_path.is_file() {
        return Err(MediasortError::NotAFile(photo_path.to_path_buf()));
    }

    let candidate = photo_path.with_extension(SIDECAR_EXTENSION);
    if candidate.is_file() {
        Ok(Some(candidate))
    } else {
        Ok(None)
    }
}

/// If `path` is a sidecar whose parent photo sits next to it, return
/// the photo. Such a sidecar is left alone during the walk so it
/// travels with the photo instead of being filed as a document.
pub fn parent_photo(path: &Path, config: &Config) -> Option<PathBuf> {
    let ext = path.extension().and_then(|e| e.to_str())?;
    if ext != SIDECAR_EXTENSION {
        return None;
    }

    let parent = path.parent()?;
    let stem = path.file_stem()?;

    // Scan the directory rather than synthesizing extension spellings,
    // so mixed-case photo names (shot.Jpg) are matched too.
    for entry in fs::read_dir(parent).ok()?.flatten() {
        let candidate = entry.path();
        if candidate == path || candidate.file_stem() != Some(stem) {
            continue;
        }
        let Some(candidate_ext) = candidate.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if config
            .photo_extensions()
            .iter()
            .any(|photo_ext| photo_ext.eq_ignore_ascii_case(candidate_ext))
            && candidate.is_file()
        {
            return Some(candidate);
        }
    }

    None
}
