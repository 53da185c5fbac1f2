use crate::mediasort_core::error::{MediasortError, Result};
use crate::mediasort_core::hashing::files_equal;
use clap::ValueEnum;
use std::path::{Path, PathBuf};

/// What to do when the destination already holds a file with the same
/// name. Set once per run and applied to every conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DuplicatePolicy {
    /// Always move under a fresh suffixed name, no content comparison.
    CreateUniqFilename,
    /// Compare contents first: identical files drop the source instead
    /// of creating another copy; differing files get a suffixed name.
    /// Slower, since equal-sized files must be hashed.
    CreateUniqFilenameIfContentMismatch,
    /// Replace the destination file with the source file.
    Overwrite,
    /// Leave the source untouched.
    Skip,
}

impl std::str::FromStr for DuplicatePolicy {
    type Err = MediasortError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "create-uniq-filename" => Ok(DuplicatePolicy::CreateUniqFilename),
            "create-uniq-filename-if-content-mismatch" => {
                Ok(DuplicatePolicy::CreateUniqFilenameIfContentMismatch)
            }
            "overwrite" => Ok(DuplicatePolicy::Overwrite),
            "skip" => Ok(DuplicatePolicy::Skip),
            other => Err(MediasortError::UnknownPolicy(other.to_string())),
        }
    }
}

/// Action decided for one source file, carried out by the move executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Destination is free; move straight there.
    Move(PathBuf),
    /// Destination occupied; move under this fresh suffixed name.
    RenameTo(PathBuf),
    /// Destination occupied; replace it.
    Overwrite(PathBuf),
    /// Destination already holds the same content; unlink the source.
    DeleteSource,
    /// Leave the source where it is.
    Skip,
}

/// Decide what to do with `src` given its computed destination. Only
/// inspects the filesystem; the one mutation (unlinking a duplicate
/// source) is deferred to the executor as well.
pub fn resolve(src: &Path, candidate: &Path, policy: DuplicatePolicy) -> Result<Resolution> {
    if !candidate.exists() {
        return Ok(Resolution::Move(candidate.to_path_buf()));
    }

    log::warn!(
        "duplicate: destination already has this name: {} == {}",
        src.display(),
        candidate.display()
    );

    match policy {
        DuplicatePolicy::CreateUniqFilenameIfContentMismatch => {
            if files_equal(src, candidate)? {
                Ok(Resolution::DeleteSource)
            } else {
                Ok(Resolution::RenameTo(unique_destination(candidate)))
            }
        }
        DuplicatePolicy::CreateUniqFilename => {
            Ok(Resolution::RenameTo(unique_destination(candidate)))
        }
        DuplicatePolicy::Overwrite => Ok(Resolution::Overwrite(candidate.to_path_buf())),
        DuplicatePolicy::Skip => Ok(Resolution::Skip),
    }
}

/// First unoccupied variant of `candidate`, appending `_01`, `_02`, …
/// before the extension. Suffixes are zero-padded to two digits and
/// keep growing past 99. The probe-then-create gap is not atomic; the
/// run assumes sole-writer access to the destination tree.
pub fn unique_destination(candidate: &Path) -> PathBuf {
    let stem = candidate
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();
    let extension = candidate
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();

    let mut counter: u32 = 1;
    let mut next = candidate.to_path_buf();
    while next.exists() {
        let name = if extension.is_empty() {
            format!("{stem}_{counter:02}")
        } else {
            format!("{stem}_{counter:02}.{extension}")
        };
        next = candidate.with_file_name(name);
        counter += 1;
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::str::FromStr;

    fn write(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_free_destination_bypasses_policy() {
        let temp = assert_fs::TempDir::new().unwrap();
        let src = write(temp.path(), "a.txt", b"x");
        let candidate = temp.path().join("sub/a.txt");

        let resolution = resolve(&src, &candidate, DuplicatePolicy::Skip).unwrap();
        assert_eq!(resolution, Resolution::Move(candidate));
    }

    #[test]
    fn test_content_mismatch_policy_equal_files() {
        let temp = assert_fs::TempDir::new().unwrap();
        let src = write(temp.path(), "a.txt", b"same");
        let dest = write(temp.path(), "b.txt", b"same");

        let resolution = resolve(
            &src,
            &dest,
            DuplicatePolicy::CreateUniqFilenameIfContentMismatch,
        )
        .unwrap();
        assert_eq!(resolution, Resolution::DeleteSource);
    }

    #[test]
    fn test_content_mismatch_policy_differing_files() {
        let temp = assert_fs::TempDir::new().unwrap();
        let src = write(temp.path(), "a.txt", b"one");
        let dest = write(temp.path(), "b.txt", b"other");

        let resolution = resolve(
            &src,
            &dest,
            DuplicatePolicy::CreateUniqFilenameIfContentMismatch,
        )
        .unwrap();
        assert_eq!(
            resolution,
            Resolution::RenameTo(temp.path().join("b_01.txt"))
        );
    }

    #[test]
    fn test_create_uniq_policy_never_compares() {
        let temp = assert_fs::TempDir::new().unwrap();
        // Identical contents still get a fresh name under this policy.
        let src = write(temp.path(), "a.txt", b"same");
        let dest = write(temp.path(), "b.txt", b"same");

        let resolution = resolve(&src, &dest, DuplicatePolicy::CreateUniqFilename).unwrap();
        assert_eq!(
            resolution,
            Resolution::RenameTo(temp.path().join("b_01.txt"))
        );
    }

    #[test]
    fn test_skip_and_overwrite_policies() {
        let temp = assert_fs::TempDir::new().unwrap();
        let src = write(temp.path(), "a.txt", b"one");
        let dest = write(temp.path(), "b.txt", b"other");

        assert_eq!(
            resolve(&src, &dest, DuplicatePolicy::Skip).unwrap(),
            Resolution::Skip
        );
        assert_eq!(
            resolve(&src, &dest, DuplicatePolicy::Overwrite).unwrap(),
            Resolution::Overwrite(dest.clone())
        );
    }

    #[test]
    fn test_unique_destination_free_path_unchanged() {
        let temp = assert_fs::TempDir::new().unwrap();
        let candidate = temp.path().join("a.txt");
        assert_eq!(unique_destination(&candidate), candidate);
    }

    #[test]
    fn test_unique_destination_first_suffix() {
        let temp = assert_fs::TempDir::new().unwrap();
        let candidate = write(temp.path(), "a.txt", b"x");
        assert_eq!(unique_destination(&candidate), temp.path().join("a_01.txt"));
    }

    #[test]
    fn test_unique_destination_is_idempotent() {
        let temp = assert_fs::TempDir::new().unwrap();
        let candidate = write(temp.path(), "a.txt", b"x");
        // No filesystem change between calls: both must agree.
        assert_eq!(unique_destination(&candidate), unique_destination(&candidate));
    }

    #[test]
    fn test_unique_destination_suffix_growth() {
        let temp = assert_fs::TempDir::new().unwrap();
        let candidate = write(temp.path(), "a.txt", b"x");
        for n in 1..=9 {
            write(temp.path(), &format!("a_{n:02}.txt"), b"x");
        }
        assert_eq!(unique_destination(&candidate), temp.path().join("a_10.txt"));
    }

    #[test]
    fn test_unique_destination_without_extension() {
        let temp = assert_fs::TempDir::new().unwrap();
        let candidate = write(temp.path(), "README", b"x");
        assert_eq!(unique_destination(&candidate), temp.path().join("README_01"));
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(
            <DuplicatePolicy as FromStr>::from_str("overwrite").unwrap(),
            DuplicatePolicy::Overwrite
        );
        assert_eq!(
            <DuplicatePolicy as FromStr>::from_str("create-uniq-filename-if-content-mismatch").unwrap(),
            DuplicatePolicy::CreateUniqFilenameIfContentMismatch
        );
        assert!(matches!(
            <DuplicatePolicy as FromStr>::from_str("rename-everything"),
            Err(MediasortError::UnknownPolicy(_))
        ));
    }
}
