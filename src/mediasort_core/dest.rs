use crate::mediasort_core::category::Category;
use std::path::{Path, PathBuf};
use time::PrimitiveDateTime;

/// Year folder (YYYY).
const YEAR_FORMAT: &[time::format_description::FormatItem] =
    time::macros::format_description!("[year]");

/// Day folder under the year (YYYY_MM_DD).
const DAY_FOLDER_FORMAT: &[time::format_description::FormatItem] =
    time::macros::format_description!("[year]_[month]_[day]");

/// Compute the canonical destination for a classified file. Pure path
/// computation; directories are created later by the move executor.
///
/// - Media with a resolved date: `<root>/<category>/<YYYY>/<YYYY_MM_DD>/<name>`
/// - Media without a date: `<root>/unsort/<name>`
/// - Everything else: `<root>/<category>/<ext>/<name>`, with the
///   extension folder omitted when the file has no extension.
pub fn build_destination(
    root: &Path,
    src: &Path,
    category: Category,
    taken: Option<PrimitiveDateTime>,
) -> PathBuf {
    let filename = src.file_name().unwrap_or(src.as_os_str());
    let extension = src
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match category {
        Category::Photo | Category::Video => match taken {
            Some(dt) => root
                .join(category.folder_name())
                .join(dt.format(YEAR_FORMAT).unwrap())
                .join(dt.format(DAY_FOLDER_FORMAT).unwrap())
                .join(filename),
            // Date unresolvable; cannot subdivide by date.
            None => root.join(Category::Unsorted.folder_name()).join(filename),
        },
        _ => {
            let folder = root.join(category.folder_name());
            let folder = if extension.is_empty() {
                folder
            } else {
                folder.join(extension)
            };
            folder.join(filename)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mediasort_core::category::Config;
    use time::macros::datetime;

    #[test]
    fn test_dated_photo_destination() {
        let dest = build_destination(
            Path::new("/dest"),
            Path::new("/src/photo.jpg"),
            Category::Photo,
            Some(datetime!(2024-10-21 17:56:55)),
        );
        assert_eq!(dest, Path::new("/dest/photos/2024/2024_10_21/photo.jpg"));
    }

    #[test]
    fn test_dated_video_destination() {
        let dest = build_destination(
            Path::new("/dest"),
            Path::new("/src/clip.MOV"),
            Category::Video,
            Some(datetime!(2021-01-05 00:00:00)),
        );
        assert_eq!(dest, Path::new("/dest/videos/2021/2021_01_05/clip.MOV"));
    }

    #[test]
    fn test_undated_media_goes_to_unsort() {
        let dest = build_destination(
            Path::new("/dest"),
            Path::new("/src/photo.png"),
            Category::Photo,
            None,
        );
        assert_eq!(dest, Path::new("/dest/unsort/photo.png"));
    }

    #[test]
    fn test_document_destination_uses_extension_folder() {
        let dest = build_destination(
            Path::new("/dest"),
            Path::new("/src/notes.TXT"),
            Category::Document,
            None,
        );
        assert_eq!(dest, Path::new("/dest/docs/txt/notes.TXT"));
    }

    #[test]
    fn test_archive_destination() {
        let dest = build_destination(
            Path::new("/dest"),
            Path::new("/src/backup.zip"),
            Category::Archive,
            None,
        );
        assert_eq!(dest, Path::new("/dest/archives/zip/backup.zip"));
    }

    #[test]
    fn test_unknown_extension_destination() {
        let dest = build_destination(
            Path::new("/dest"),
            Path::new("/src/data.foo"),
            Category::Unsorted,
            None,
        );
        assert_eq!(dest, Path::new("/dest/unsort/foo/data.foo"));
    }

    #[test]
    fn test_no_extension_lands_directly_in_folder() {
        let dest = build_destination(
            Path::new("/dest"),
            Path::new("/src/README"),
            Category::Unsorted,
            None,
        );
        assert_eq!(dest, Path::new("/dest/unsort/README"));
    }

    #[test]
    fn test_destinations_are_fixed_points() {
        // Re-running the builder on an already-organized file must not
        // suggest a further move.
        let config = Config::default();
        let root = Path::new("/dest");
        let taken = Some(datetime!(2024-10-21 17:56:55));

        let first = build_destination(root, Path::new("/src/photo.jpg"), Category::Photo, taken);
        let again = build_destination(root, &first, config.classify_path(&first), taken);
        assert_eq!(first, again);

        let doc = build_destination(root, Path::new("/src/a.txt"), Category::Document, None);
        let doc_again = build_destination(root, &doc, config.classify_path(&doc), None);
        assert_eq!(doc, doc_again);
    }
}
