use crate::mediasort_core::sidecar::SIDECAR_EXTENSION;
use exiftool::ExifTool;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Date format used in EXIF-style metadata.
const METADATA_DATE_FORMAT: &[time::format_description::FormatItem] =
    time::macros::format_description!("[year]:[month]:[day] [hour]:[minute]:[second]");

/// Same, with a literal UTC marker.
const METADATA_DATE_FORMAT_UTC: &[time::format_description::FormatItem] =
    time::macros::format_description!("[year]:[month]:[day] [hour]:[minute]:[second]Z");

/// Same, with an explicit zone offset.
const METADATA_DATE_FORMAT_ZONED: &[time::format_description::FormatItem] =
    time::macros::format_description!(
        "[year]:[month]:[day] [hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
    );

/// How hard to work for a capture date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateMode {
    /// Embedded metadata via exiftool.
    Accurate,
    /// Filesystem modification time. Cheap, less trustworthy.
    Fast,
}

/// Capture-date lookup for a media file. Absence of a date is a normal
/// answer (the file is filed under unsort), not an error.
pub trait DateResolver {
    fn resolve(&mut self, path: &Path, mode: DateMode) -> Option<PrimitiveDateTime>;
}

/// Production resolver backed by a persistent exiftool process,
/// started lazily on the first accurate lookup.
pub struct ExiftoolDateResolver {
    exiftool: Option<ExifTool>,
    warned: bool,
}

impl ExiftoolDateResolver {
    pub fn new() -> Self {
        ExiftoolDateResolver {
            exiftool: None,
            warned: false,
        }
    }

    fn tool(&mut self) -> Option<&mut ExifTool> {
        if self.exiftool.is_none() && !self.warned {
            match ExifTool::new() {
                Ok(tool) => self.exiftool = Some(tool),
                Err(e) => {
                    log::warn!("exiftool unavailable, media dates cannot be resolved: {e}");
                    self.warned = true;
                }
            }
        }
        self.exiftool.as_mut()
    }
}

impl Default for ExiftoolDateResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl DateResolver for ExiftoolDateResolver {
    fn resolve(&mut self, path: &Path, mode: DateMode) -> Option<PrimitiveDateTime> {
        match mode {
            DateMode::Fast => fast_date(path),
            DateMode::Accurate => accurate_date(self.tool()?, path),
        }
    }
}

/// Raw date fields from exiftool, in tag-priority order. Value is used
/// because exiftool occasionally emits bare numbers for truncated dates.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase")]
struct RawDateInfo {
    #[serde(default)]
    date_time_original: Option<Value>,
    #[serde(default)]
    create_date: Option<Value>,
    #[serde(default)]
    modify_date: Option<Value>,
}

fn value_to_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Extract a capture date from embedded metadata.
/// Sidecar files borrow the date of the media file they belong to.
fn accurate_date(exiftool: &mut ExifTool, path: &Path) -> Option<PrimitiveDateTime> {
    let target = if path
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case(SIDECAR_EXTENSION))
    {
        path.with_extension("")
    } else {
        path.to_path_buf()
    };

    let raw: RawDateInfo = match exiftool.read_metadata(&target, &[]) {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!("failed to read metadata from {}: {}", target.display(), e);
            return None;
        }
    };

    for field in [&raw.date_time_original, &raw.create_date, &raw.modify_date] {
        let Some(raw_date) = field.as_ref().and_then(value_to_string) else {
            continue;
        };
        if raw_date.is_empty() {
            continue;
        }
        match parse_metadata_date(&raw_date) {
            Some(dt) => return Some(dt),
            None => log::warn!(
                "could not parse date {:?} from {}",
                raw_date,
                target.display()
            ),
        }
    }

    None
}

/// Capture date from filesystem modification time, as local wall-clock.
pub fn fast_date(path: &Path) -> Option<PrimitiveDateTime> {
    let modified = fs::metadata(path).and_then(|m| m.modified()).ok()?;
    let dt = OffsetDateTime::from(modified).to_offset(get_local_offset());
    Some(PrimitiveDateTime::new(dt.date(), dt.time()))
}

/// Parse a metadata timestamp. The `YYYY:MM:DD HH:MM:SS` family comes in
/// bare, `Z`-suffixed and zone-offset variants; the wall-clock fields are
/// kept as written since they decide the folder name.
pub fn parse_metadata_date(raw: &str) -> Option<PrimitiveDateTime> {
    if let Ok(dt) = PrimitiveDateTime::parse(raw, METADATA_DATE_FORMAT) {
        return Some(dt);
    }
    if let Ok(dt) = PrimitiveDateTime::parse(raw, METADATA_DATE_FORMAT_UTC) {
        return Some(dt);
    }
    if let Ok(dt) = OffsetDateTime::parse(raw, METADATA_DATE_FORMAT_ZONED) {
        return Some(PrimitiveDateTime::new(dt.date(), dt.time()));
    }
    None
}

/// Get the local timezone offset, falling back to UTC if unavailable.
fn get_local_offset() -> UtcOffset {
    OffsetDateTime::now_local()
        .map(|dt| dt.offset())
        .unwrap_or(UtcOffset::UTC)
}
