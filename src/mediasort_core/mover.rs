use crate::mediasort_core::conflict::{self, DuplicatePolicy, Resolution};
use crate::mediasort_core::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// The action actually taken for one source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    Renamed,
    Overwritten,
    Skipped,
    SourceDeleted,
    Failed,
}

/// Carry out the decided action for `src` against its computed
/// destination. Under `dry_run` the full decision logic still runs
/// (conflict check, content comparison, unique-name search) and the
/// same action lines are printed, but nothing on disk changes.
///
/// Returns the outcome together with the path the file ended up at
/// (or would end up at), so a sidecar can follow its photo into the
/// same directory.
pub fn execute(
    src: &Path,
    candidate: &Path,
    policy: DuplicatePolicy,
    dry_run: bool,
) -> Result<(MoveOutcome, PathBuf)> {
    match conflict::resolve(src, candidate, policy)? {
        Resolution::Move(dest) => {
            println!("mv {} {}", src.display(), dest.display());
            if !dry_run {
                rename_with_parents(src, &dest)?;
            }
            Ok((MoveOutcome::Moved, dest))
        }
        Resolution::RenameTo(dest) => {
            println!("mv {} {}", src.display(), dest.display());
            if !dry_run {
                rename_with_parents(src, &dest)?;
            }
            Ok((MoveOutcome::Renamed, dest))
        }
        Resolution::Overwrite(dest) => {
            log::warn!("overwriting {}", dest.display());
            println!("mv {} {}", src.display(), dest.display());
            if !dry_run {
                rename_with_parents(src, &dest)?;
            }
            Ok((MoveOutcome::Overwritten, dest))
        }
        Resolution::DeleteSource => {
            println!("rm {}", src.display());
            if !dry_run {
                fs::remove_file(src)?;
            }
            Ok((MoveOutcome::SourceDeleted, candidate.to_path_buf()))
        }
        Resolution::Skip => {
            println!("skip {}", src.display());
            Ok((MoveOutcome::Skipped, candidate.to_path_buf()))
        }
    }
}

/// Create missing ancestors, then rename. `rename` replaces an existing
/// destination file, which only the overwrite branch permits to exist.
fn rename_with_parents(src: &Path, dest: &Path) -> Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::rename(src, dest)?;
    Ok(())
}
