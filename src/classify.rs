use std::fmt;
use std::path::Path;

/// Media category of a selected file, derived from its MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    Image,
    Video,
    Audio,
    Archive,
    Other,
}

impl FileType {
    pub fn label(&self) -> &'static str {
        match self {
            FileType::Image => "image",
            FileType::Video => "video",
            FileType::Audio => "audio",
            FileType::Archive => "archive",
            FileType::Other => "other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            FileType::Image => "🖼️",
            FileType::Video => "🎥",
            FileType::Audio => "🎵",
            FileType::Archive => "📦",
            FileType::Other => "📄",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classify a MIME type string. Pure and total: every input maps to
/// exactly one tag, first match wins in the order
/// image > video > audio > archive > other.
pub fn classify(mime: &str) -> FileType {
    let mime = mime.to_ascii_lowercase();
    if mime.starts_with("image/") {
        FileType::Image
    } else if mime.starts_with("video/") {
        FileType::Video
    } else if mime.starts_with("audio/") {
        FileType::Audio
    } else if mime.contains("zip")
        || mime.contains("rar")
        || mime.contains("7z")
        || mime.contains("tar")
    {
        FileType::Archive
    } else {
        FileType::Other
    }
}

/// Guess a MIME type from a file extension. The CLI stands in for the
/// browser file picker, which provided MIME types for free.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        // Images
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "tif" | "tiff" => "image/tiff",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",

        // Video
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "m4v" => "video/x-m4v",
        "avi" => "video/x-msvideo",
        "mkv" => "video/x-matroska",
        "webm" => "video/webm",
        "3gp" => "video/3gpp",
        "wmv" => "video/x-ms-wmv",
        "flv" => "video/x-flv",
        "ogv" => "video/ogg",

        // Audio
        "mp3" => "audio/mpeg",
        "m4a" => "audio/m4a",
        "wav" => "audio/wav",
        "aac" => "audio/aac",
        "flac" => "audio/flac",
        "ogg" => "audio/ogg",
        "opus" => "audio/opus",

        // Archives
        "zip" => "application/zip",
        "rar" => "application/x-rar-compressed",
        "7z" => "application/x-7z-compressed",
        "tar" => "application/x-tar",
        "gz" => "application/gzip",
        "bz2" => "application/x-bzip2",

        // Common documents end up in the "other" bucket
        "txt" => "text/plain",
        "pdf" => "application/pdf",
        "json" => "application/json",

        _ => "application/octet-stream",
    }
}
