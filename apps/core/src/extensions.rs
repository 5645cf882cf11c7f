use std::collections::BTreeMap;
use std::path::Path;

/// Built-in file groups for bulk extension registration. The sets are fixed;
/// users point a whole group at one application in a single command.
pub const FILE_GROUPS: &[(&str, &[&str])] = &[
    ("audio", &["mp3", "wav", "flac", "aac", "ogg", "m4a", "wma"]),
    (
        "video",
        &["mp4", "avi", "mkv", "mov", "wmv", "flv", "webm", "m4v", "3gp"],
    ),
    (
        "image",
        &["jpg", "jpeg", "png", "gif", "bmp", "svg", "tiff", "webp"],
    ),
    ("document", &["pdf", "doc", "docx", "txt", "md", "rtf"]),
    (
        "code",
        &[
            "py", "js", "ts", "go", "java", "cpp", "c", "h", "html", "css", "json", "xml",
            "yaml", "yml",
        ],
    ),
    ("archive", &["zip", "rar", "7z", "tar", "gz", "bz2"]),
    ("spreadsheet", &["xls", "xlsx", "csv"]),
    ("presentation", &["ppt", "pptx"]),
];

/// Extracts the lowercased extension of the final path segment: everything
/// after the last dot. A name with no dot, or a trailing dot, has no
/// extension. Leading-dot names (`.bashrc`) keep their historical treatment
/// as an extension.
pub fn file_extension(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let dot = name.rfind('.')?;
    let extension = &name[dot + 1..];
    if extension.is_empty() {
        return None;
    }

    Some(extension.to_ascii_lowercase())
}

/// Looks up the configured application for a path's extension. Absence is a
/// normal "no override" result.
pub fn resolve_extension_app(
    path: &Path,
    file_type_apps: &BTreeMap<String, String>,
) -> Option<String> {
    let extension = file_extension(path)?;
    file_type_apps.get(&extension).cloned()
}

pub fn group_extensions(group: &str) -> Option<&'static [&'static str]> {
    let wanted = group.trim().to_ascii_lowercase();
    FILE_GROUPS
        .iter()
        .find(|(name, _)| *name == wanted)
        .map(|(_, extensions)| *extensions)
}

pub fn group_names() -> Vec<&'static str> {
    FILE_GROUPS.iter().map(|(name, _)| *name).collect()
}

/// Normalizes user-supplied extension input: trims, drops a leading dot,
/// lowercases.
pub fn normalize_extension(raw: &str) -> String {
    raw.trim().trim_start_matches('.').to_ascii_lowercase()
}
