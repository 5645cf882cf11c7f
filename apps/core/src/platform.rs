use std::path::PathBuf;

/// Launch capability of the host platform, resolved once at startup. Bundles
/// the default open command, the named-app convention, and the application
/// bundle directories so the rest of the crate never branches on the OS
/// string itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Windows,
    Linux,
    Other(String),
}

impl Platform {
    pub fn current() -> Self {
        Self::from_identifier(std::env::consts::OS)
    }

    pub fn from_identifier(os: &str) -> Self {
        match os {
            "macos" | "darwin" => Self::MacOs,
            "windows" => Self::Windows,
            "linux" => Self::Linux,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn identifier(&self) -> &str {
        match self {
            Self::MacOs => "macos",
            Self::Windows => "windows",
            Self::Linux => "linux",
            Self::Other(os) => os,
        }
    }

    /// Program that opens a path with the system file manager or default
    /// handler. None on platforms we do not recognize.
    pub fn default_open_program(&self) -> Option<&'static str> {
        match self {
            Self::MacOs => Some("open"),
            Self::Windows => Some("explorer"),
            Self::Linux => Some("xdg-open"),
            Self::Other(_) => None,
        }
    }

    /// Display name of the platform file manager, for user feedback.
    pub fn file_manager_name(&self) -> &'static str {
        match self {
            Self::MacOs => "Finder",
            Self::Windows => "Explorer",
            _ => "File Manager",
        }
    }

    /// Program and leading arguments for launching a named application
    /// against a path, where the platform has such a convention. The path is
    /// appended by the caller.
    pub fn named_app_invocation(&self, app: &str) -> Option<(String, Vec<String>)> {
        match self {
            Self::MacOs => Some((
                "open".to_string(),
                vec!["-a".to_string(), app.to_string()],
            )),
            // `start` is a cmd builtin; the empty string is the window title
            // slot, which `start` otherwise steals from a quoted app name.
            Self::Windows => Some((
                "cmd".to_string(),
                vec![
                    "/C".to_string(),
                    "start".to_string(),
                    String::new(),
                    app.to_string(),
                ],
            )),
            _ => None,
        }
    }

    /// Directories scanned for installed application bundles. Empty on
    /// platforms without a bundle concept; those rely on the search path
    /// alone.
    pub fn bundle_directories(&self) -> Vec<PathBuf> {
        match self {
            Self::MacOs => {
                let mut directories = vec![
                    PathBuf::from("/Applications"),
                    PathBuf::from("/System/Applications"),
                ];
                if let Some(home) = dirs::home_dir() {
                    directories.push(home.join("Applications"));
                }
                directories
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Platform;

    #[test]
    fn identifiers_round_trip() {
        for os in ["macos", "windows", "linux"] {
            assert_eq!(Platform::from_identifier(os).identifier(), os);
        }
        assert_eq!(Platform::from_identifier("darwin"), Platform::MacOs);
        assert_eq!(
            Platform::from_identifier("plan9").identifier(),
            "plan9"
        );
    }

    #[test]
    fn default_open_program_per_platform() {
        assert_eq!(Platform::MacOs.default_open_program(), Some("open"));
        assert_eq!(Platform::Windows.default_open_program(), Some("explorer"));
        assert_eq!(Platform::Linux.default_open_program(), Some("xdg-open"));
        assert_eq!(
            Platform::Other("plan9".to_string()).default_open_program(),
            None
        );
    }

    #[test]
    fn only_macos_has_bundle_directories() {
        assert!(!Platform::MacOs.bundle_directories().is_empty());
        assert!(Platform::Linux.bundle_directories().is_empty());
        assert!(Platform::Windows.bundle_directories().is_empty());
    }
}
