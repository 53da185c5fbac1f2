use crate::mediasort_core::category::{Category, Config};
use crate::mediasort_core::conflict::DuplicatePolicy;
use crate::mediasort_core::dates::{DateMode, DateResolver};
use crate::mediasort_core::dest::build_destination;
use crate::mediasort_core::error::{MediasortError, Result};
use crate::mediasort_core::mover::{self, MoveOutcome};
use crate::mediasort_core::sidecar;
use std::path::Path;
use walkdir::WalkDir;

/// Per-run settings, fixed before the walk starts.
#[derive(Debug, Clone, Copy)]
pub struct OrganizeOptions {
    /// Use filesystem modification time instead of embedded metadata.
    pub fast: bool,
    /// Decide everything, mutate nothing.
    pub dry_run: bool,
    pub on_duplicate: DuplicatePolicy,
}

/// Tally of actions taken over one walk. Reporting only; nothing here
/// survives the run.
#[derive(Debug, Default)]
pub struct OrganizeStats {
    pub moved: usize,
    pub renamed: usize,
    pub overwritten: usize,
    pub skipped: usize,
    pub source_deleted: usize,
    pub sidecars_moved: usize,
    pub failed: usize,
}

impl OrganizeStats {
    fn record(&mut self, outcome: MoveOutcome) {
        match outcome {
            MoveOutcome::Moved => self.moved += 1,
            MoveOutcome::Renamed => self.renamed += 1,
            MoveOutcome::Overwritten => self.overwritten += 1,
            MoveOutcome::Skipped => self.skipped += 1,
            MoveOutcome::SourceDeleted => self.source_deleted += 1,
            MoveOutcome::Failed => self.failed += 1,
        }
    }
}

impl std::fmt::Display for OrganizeStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} moved, {} renamed, {} overwritten, {} skipped, {} duplicate sources removed, {} sidecars, {} failed",
            self.moved,
            self.renamed,
            self.overwritten,
            self.skipped,
            self.source_deleted,
            self.sidecars_moved,
            self.failed
        )
    }
}

/// Walk `source_dir` and move every regular file into its place under
/// `dest_dir`. Each file is fully processed (classify, date-resolve,
/// path-build, conflict-resolve, move, sidecar) before the next one is
/// considered; a per-file failure is logged and counted, never fatal.
pub fn organize(
    source_dir: &Path,
    dest_dir: &Path,
    config: &Config,
    resolver: &mut dyn DateResolver,
    opts: &OrganizeOptions,
) -> Result<OrganizeStats> {
    if !source_dir.exists() {
        return Err(MediasortError::PathNotFound(source_dir.to_path_buf()));
    }
    if !source_dir.is_dir() {
        return Err(MediasortError::NotADirectory(source_dir.to_path_buf()));
    }

    let mut stats = OrganizeStats::default();

    for entry in WalkDir::new(source_dir) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("walk error: {e}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();

        if !path.exists() {
            log::warn!(
                "{} no longer exists, it may have moved alongside a related file",
                path.display()
            );
            continue;
        }

        // A sidecar with its photo still next to it travels during the
        // photo's pass, whichever of the two the walk yields first.
        if let Some(photo) = sidecar::parent_photo(path, config) {
            log::debug!(
                "leaving sidecar {} for {}",
                path.display(),
                photo.display()
            );
            continue;
        }

        if let Err(e) = process_file(path, dest_dir, config, resolver, opts, &mut stats) {
            log::error!("failed to process {}: {}", path.display(), e);
            stats.record(MoveOutcome::Failed);
        }
    }

    Ok(stats)
}

fn process_file(
    path: &Path,
    dest_root: &Path,
    config: &Config,
    resolver: &mut dyn DateResolver,
    opts: &OrganizeOptions,
    stats: &mut OrganizeStats,
) -> Result<()> {
    let category = config.classify_path(path);
    if category == Category::Unsorted {
        log::warn!("{}: unknown file type", path.display());
    }

    // The sidecar lookup must happen before the photo itself moves away.
    let sidecar_path = if category == Category::Photo {
        sidecar::find_sidecar(path)?
    } else {
        None
    };

    let taken = if category.is_media() {
        let mode = if opts.fast {
            DateMode::Fast
        } else {
            DateMode::Accurate
        };
        let taken = resolver.resolve(path, mode);
        if taken.is_none() {
            log::warn!(
                "no capture date for {}, filing under {}/",
                path.display(),
                Category::Unsorted.folder_name()
            );
        }
        taken
    } else {
        None
    };

    let candidate = build_destination(dest_root, path, category, taken);
    let (outcome, final_dest) = mover::execute(path, &candidate, opts.on_duplicate, opts.dry_run)?;
    stats.record(outcome);

    if let Some(sidecar_src) = sidecar_path {
        // The sidecar only follows once the photo's content sits at the
        // destination; a skipped photo keeps its sidecar next to it.
        // SourceDeleted qualifies: an identical copy is already there.
        let photo_placed = matches!(
            outcome,
            MoveOutcome::Moved
                | MoveOutcome::Renamed
                | MoveOutcome::Overwritten
                | MoveOutcome::SourceDeleted
        );
        if !photo_placed {
            log::debug!(
                "leaving sidecar {} with its unmoved photo {}",
                sidecar_src.display(),
                path.display()
            );
            return Ok(());
        }

        log::debug!(
            "found sidecar {} for {}",
            sidecar_src.display(),
            path.display()
        );
        // It follows the photo into whatever directory it finally
        // landed in, renamed-for-uniqueness included.
        let final_dir = final_dest.parent().unwrap_or(dest_root);
        let sidecar_candidate =
            final_dir.join(sidecar_src.file_name().unwrap_or(sidecar_src.as_os_str()));

        match mover::execute(&sidecar_src, &sidecar_candidate, opts.on_duplicate, opts.dry_run) {
            Ok((MoveOutcome::Moved | MoveOutcome::Renamed | MoveOutcome::Overwritten, _)) => {
                stats.sidecars_moved += 1;
            }
            Ok(_) => {}
            Err(e) => {
                log::error!("failed to move sidecar {}: {}", sidecar_src.display(), e);
                stats.record(MoveOutcome::Failed);
            }
        }
    }

    Ok(())
}
