use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum TargetError {
    NotFound(PathBuf),
    CurrentDir(std::io::Error),
}

impl Display for TargetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "path does not exist: {}", path.display()),
            Self::CurrentDir(error) => {
                write!(f, "cannot resolve current directory: {error}")
            }
        }
    }
}

impl std::error::Error for TargetError {}

/// A launchable filesystem target, valid for the duration of one open
/// operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub absolute_path: PathBuf,
    pub is_file: bool,
    pub display_name: String,
}

/// Resolves raw user input to an existing absolute path. Blank input means
/// the current working directory. No globbing, no partial matching.
pub fn classify(raw_path: &str) -> Result<ResolvedTarget, TargetError> {
    let trimmed = raw_path.trim();
    let candidate = if trimmed.is_empty() {
        std::env::current_dir().map_err(TargetError::CurrentDir)?
    } else {
        PathBuf::from(trimmed)
    };

    if !candidate.exists() {
        return Err(TargetError::NotFound(candidate));
    }

    let absolute_path = absolutize(&candidate).map_err(TargetError::CurrentDir)?;
    // Metadata can fail after the exists() check (permissions, races);
    // treat that as "not a file" rather than an error.
    let is_file = fs::metadata(&absolute_path)
        .map(|meta| meta.is_file())
        .unwrap_or(false);
    let display_name = display_path(&absolute_path);

    Ok(ResolvedTarget {
        absolute_path,
        is_file,
        display_name,
    })
}

fn absolutize(path: &Path) -> Result<PathBuf, std::io::Error> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    Ok(std::env::current_dir()?.join(path))
}

/// Renders a path for user feedback, abbreviating the home directory to `~`.
/// Cosmetic only; resolution always works on the absolute path.
pub fn display_path(path: &Path) -> String {
    let rendered = path.to_string_lossy().into_owned();
    let Some(home) = dirs::home_dir() else {
        return rendered;
    };

    match path.strip_prefix(&home) {
        Ok(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Ok(rest) => format!(
            "~{}{}",
            std::path::MAIN_SEPARATOR,
            rest.to_string_lossy()
        ),
        Err(_) => rendered,
    }
}
