//! Selected-file metadata.
//!
//! Files are only ever counted. The descriptor keeps the name, byte size and
//! declared MIME type the browser reports, and the file bytes are never read.

use serde::{Deserialize, Serialize};

/// Metadata for one file picked or dropped by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub name: String,
    pub size_bytes: u64,
    /// As declared by the browser; may be empty.
    #[serde(default)]
    pub mime_type: String,
}

impl FileDescriptor {
    pub fn new(name: impl Into<String>, size_bytes: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
        }
    }

    pub fn kind(&self) -> FileKind {
        detect_kind(&self.name, &self.mime_type)
    }
}

/// Coarse file category, used to pick an icon in the file list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Pdf,
    Image,
    Document,
    Spreadsheet,
    Text,
    Other,
}

/// Classifies a file from its declared MIME type, falling back to the
/// filename extension when the browser reports no (or a generic) type.
///
/// # Detection Strategy
///
/// 1. MIME type (`application/pdf`, `image/*`, office types, `text/*`)
/// 2. Filename extension (case-insensitive)
/// 3. `Other`
///
/// Classification never rejects a file.
pub fn detect_kind(name: &str, mime_type: &str) -> FileKind {
    let mime = mime_type.to_ascii_lowercase();
    match mime.as_str() {
        "application/pdf" => return FileKind::Pdf,
        m if m.starts_with("image/") => return FileKind::Image,
        "application/msword"
        | "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        | "application/vnd.oasis.opendocument.text"
        | "application/rtf" => return FileKind::Document,
        "application/vnd.ms-excel"
        | "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
        | "application/vnd.oasis.opendocument.spreadsheet"
        | "text/csv" => return FileKind::Spreadsheet,
        m if m.starts_with("text/") => return FileKind::Text,
        _ => {}
    }

    let lower = name.to_lowercase();
    let ext = match lower.rsplit_once('.') {
        Some((_, ext)) => ext,
        None => return FileKind::Other,
    };
    match ext {
        "pdf" => FileKind::Pdf,
        "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp" | "tif" | "tiff" | "heic" => {
            FileKind::Image
        }
        "doc" | "docx" | "odt" | "rtf" => FileKind::Document,
        "xls" | "xlsx" | "xlsm" | "ods" | "csv" => FileKind::Spreadsheet,
        "txt" | "md" | "markdown" => FileKind::Text,
        _ => FileKind::Other,
    }
}

/// Formats a byte count as megabytes with two decimals, e.g. `"1.50 MB"`.
pub fn format_size_mb(size_bytes: u64) -> String {
    format!("{:.2} MB", size_bytes as f64 / 1024.0 / 1024.0)
}

/// Entry of the file list as rendered by the host page.
#[derive(Debug, Clone, Serialize)]
pub struct FileListEntry<'a> {
    #[serde(flatten)]
    pub file: &'a FileDescriptor,
    pub kind: FileKind,
    pub size_display: String,
}

impl<'a> From<&'a FileDescriptor> for FileListEntry<'a> {
    fn from(file: &'a FileDescriptor) -> Self {
        Self {
            file,
            kind: file.kind(),
            size_display: format_size_mb(file.size_bytes),
        }
    }
}

/// Reads descriptors out of a browser `FileList` (from an `<input type=file>`
/// change event or `DataTransfer.files` on drop).
pub fn descriptors_from_file_list(list: &web_sys::FileList) -> Vec<FileDescriptor> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| {
            // Blob.size is a JS number; sizes are whole bytes
            let size = file.size().max(0.0) as u64;
            FileDescriptor::new(file.name(), size, file.type_())
        })
        .collect()
}
