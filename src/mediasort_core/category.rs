use std::path::Path;

/// What kind of file an extension maps to, which decides the top-level
/// folder it is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Photo,
    Video,
    Audio,
    Document,
    Archive,
    Unsorted,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Photo => "photo",
            Category::Video => "video",
            Category::Audio => "audio",
            Category::Document => "document",
            Category::Archive => "archive",
            Category::Unsorted => "unsorted",
        }
    }

    /// Folder name under the destination root.
    pub fn folder_name(&self) -> &'static str {
        match self {
            Category::Photo => "photos",
            Category::Video => "videos",
            Category::Audio => "audio",
            Category::Document => "docs",
            Category::Archive => "archives",
            Category::Unsorted => "unsort",
        }
    }

    /// Media files get dated folders; everything else is filed by extension.
    pub fn is_media(&self) -> bool {
        matches!(self, Category::Photo | Category::Video)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Photo extensions (lowercase). Raw formats included so edits stay
/// alongside their originals.
const PHOTO_EXTENSIONS: &[&str] = &["jpg", "png", "gif", "cr2", "dng", "arw", "nef"];

/// Video extensions (lowercase).
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov"];

const AUDIO_EXTENSIONS: &[&str] = &["woff", "wav", "mp3"];

/// Text and data formats, plus editing sidecars when they show up on
/// their own without a parent photo.
const DOCUMENT_EXTENSIONS: &[&str] = &[
    "txt", "xml", "csv", "svg", "py", "java", "sh", "dll", "h", "c", "f", "html", "xmp",
];

const ARCHIVE_EXTENSIONS: &[&str] = &["gz", "zip"];

/// Extension-to-category tables, built once at startup and passed
/// explicitly into the classifier and walk instead of living in
/// global state.
#[derive(Debug, Clone)]
pub struct Config {
    photo_extensions: &'static [&'static str],
    video_extensions: &'static [&'static str],
    audio_extensions: &'static [&'static str],
    document_extensions: &'static [&'static str],
    archive_extensions: &'static [&'static str],
}

impl Default for Config {
    fn default() -> Self {
        Config {
            photo_extensions: PHOTO_EXTENSIONS,
            video_extensions: VIDEO_EXTENSIONS,
            audio_extensions: AUDIO_EXTENSIONS,
            document_extensions: DOCUMENT_EXTENSIONS,
            archive_extensions: ARCHIVE_EXTENSIONS,
        }
    }
}

impl Config {
    /// Map an extension to its category. Comparison is case-insensitive;
    /// an extension found in no table is Unsorted, never an error.
    pub fn classify(&self, extension: &str) -> Category {
        let ext = extension.to_lowercase();
        let ext = ext.as_str();

        if self.photo_extensions.contains(&ext) {
            Category::Photo
        } else if self.video_extensions.contains(&ext) {
            Category::Video
        } else if self.audio_extensions.contains(&ext) {
            Category::Audio
        } else if self.document_extensions.contains(&ext) {
            Category::Document
        } else if self.archive_extensions.contains(&ext) {
            Category::Archive
        } else {
            Category::Unsorted
        }
    }

    /// Classify a path by its extension. Paths without an extension are
    /// Unsorted.
    pub fn classify_path(&self, path: &Path) -> Category {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => self.classify(ext),
            None => Category::Unsorted,
        }
    }

    pub fn photo_extensions(&self) -> &'static [&'static str] {
        self.photo_extensions
    }
}
