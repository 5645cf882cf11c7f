use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use crate::config::{self, Config, ConfigError};
use crate::extensions;
use crate::launcher::{self, LaunchError};
use crate::logging;
use crate::platform::Platform;
use crate::resolver::{self, ResolveError};
use crate::target::{self, TargetError};
use crate::validator::{self, AppValidation};

#[derive(Debug)]
pub enum ServiceError {
    Target(TargetError),
    Resolve(ResolveError),
    Launch(LaunchError),
    UnknownFileGroup(String),
    UnknownFileType(String),
    InvalidApp(String),
    InvalidConfig(String),
    Config(ConfigError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Target(error) => write!(f, "{error}"),
            Self::Resolve(error) => write!(f, "{error}"),
            Self::Launch(error) => write!(f, "{error}"),
            Self::UnknownFileGroup(name) => write!(
                f,
                "unknown file group '{name}' (valid groups: {})",
                extensions::group_names().join(", ")
            ),
            Self::UnknownFileType(extension) => {
                write!(f, "file type '.{extension}' is not mapped")
            }
            Self::InvalidApp(message) => write!(f, "{message}"),
            Self::InvalidConfig(message) => write!(f, "invalid config: {message}"),
            Self::Config(error) => write!(f, "config error: {error}"),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<TargetError> for ServiceError {
    fn from(value: TargetError) -> Self {
        Self::Target(value)
    }
}

impl From<ResolveError> for ServiceError {
    fn from(value: ResolveError) -> Self {
        Self::Resolve(value)
    }
}

impl From<LaunchError> for ServiceError {
    fn from(value: LaunchError) -> Self {
        Self::Launch(value)
    }
}

impl From<ConfigError> for ServiceError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

/// What the user sees after a successful launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOutcome {
    pub used_app: String,
    pub display_path: String,
}

/// One invocation's view of the tool: the loaded configuration, the platform
/// capability, and the operations exposed to the CLI layer. Config is an
/// explicit value here; nothing is process-global.
pub struct OpenService {
    config: Config,
    config_path: PathBuf,
    platform: Platform,
    debug: bool,
}

impl OpenService {
    pub fn new(
        config: Config,
        config_path: PathBuf,
        platform: Platform,
    ) -> Result<Self, ServiceError> {
        config::validate(&config).map_err(ServiceError::InvalidConfig)?;
        Ok(Self {
            config,
            config_path,
            platform,
            debug: false,
        })
    }

    /// Loads the config from its default location.
    pub fn load(platform: Platform) -> Result<Self, ServiceError> {
        Self::load_from(config::default_config_path(), platform)
    }

    pub fn load_from(config_path: PathBuf, platform: Platform) -> Result<Self, ServiceError> {
        let config = Config::load(&config_path)?;
        Self::new(config, config_path, platform)
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Classifies the path, picks a launch plan, spawns it, and records the
    /// path in the recent list. The recent-list save is best-effort: a write
    /// failure degrades to in-memory operation for this invocation.
    pub fn resolve_and_launch(
        &mut self,
        raw_path: &str,
        explicit_manager: Option<&str>,
    ) -> Result<LaunchOutcome, ServiceError> {
        let resolved = target::classify(raw_path)?;
        self.diag(&format!(
            "platform={} target={} is_file={}",
            self.platform.identifier(),
            resolved.absolute_path.display(),
            resolved.is_file
        ));

        let plan =
            resolver::resolve_launcher(&resolved, explicit_manager, &self.config, &self.platform)?;
        self.diag(&format!(
            "launching {} via {} {:?}",
            plan.app_label, plan.program, plan.args
        ));

        launcher::run_detached(&plan)?;

        self.config
            .push_recent(&resolved.absolute_path.to_string_lossy());
        self.persist_best_effort();

        Ok(LaunchOutcome {
            used_app: plan.app_label,
            display_path: resolved.display_name,
        })
    }

    pub fn validate_app(&self, name: &str) -> AppValidation {
        validator::validate_app(name, &self.platform)
    }

    /// Maps one extension to an application and persists. Returns the
    /// normalized extension.
    pub fn register_file_type(
        &mut self,
        extension: &str,
        app: &str,
    ) -> Result<String, ServiceError> {
        let normalized = extensions::normalize_extension(extension);
        self.config
            .file_type_apps
            .insert(normalized.clone(), app.to_string());
        self.save()?;
        Ok(normalized)
    }

    pub fn remove_file_type(&mut self, extension: &str) -> Result<String, ServiceError> {
        let normalized = extensions::normalize_extension(extension);
        if self.config.file_type_apps.remove(&normalized).is_none() {
            return Err(ServiceError::UnknownFileType(normalized));
        }
        self.save()?;
        Ok(normalized)
    }

    /// Maps every extension of a built-in group to one application and
    /// persists. Returns the registered extensions.
    pub fn register_file_group(
        &mut self,
        group: &str,
        app: &str,
    ) -> Result<&'static [&'static str], ServiceError> {
        let group_extensions = extensions::group_extensions(group)
            .ok_or_else(|| ServiceError::UnknownFileGroup(group.trim().to_string()))?;

        for extension in group_extensions {
            self.config
                .file_type_apps
                .insert((*extension).to_string(), app.to_string());
        }
        self.save()?;
        Ok(group_extensions)
    }

    pub fn set_default_manager(&mut self, name: &str) -> Result<(), ServiceError> {
        self.config.default_manager = name.to_string();
        self.save()
    }

    pub fn add_custom_manager(&mut self, name: &str, command: &str) -> Result<(), ServiceError> {
        self.config
            .custom_managers
            .insert(name.to_string(), command.to_string());
        self.save()
    }

    pub fn clear_recent(&mut self) -> Result<(), ServiceError> {
        self.config.recent_paths.clear();
        self.save()
    }

    /// Drops recent entries whose paths no longer exist, persisting when
    /// anything changed. Returns how many were dropped.
    pub fn prune_recent_missing(&mut self) -> usize {
        let dropped = self.config.prune_recent(|path| Path::new(path).exists());
        if dropped > 0 {
            self.persist_best_effort();
        }
        dropped
    }

    pub fn save(&self) -> Result<(), ServiceError> {
        self.config
            .save(&self.config_path)
            .map_err(ServiceError::from)
    }

    fn persist_best_effort(&self) {
        if let Err(error) = self.config.save(&self.config_path) {
            logging::warn(&format!("config save failed: {error}"));
            if self.debug {
                eprintln!("[quickopen] config save failed: {error}");
            }
        }
    }

    fn diag(&self, message: &str) {
        logging::info(message);
        if self.debug {
            eprintln!("[quickopen] {message}");
        }
    }
}
