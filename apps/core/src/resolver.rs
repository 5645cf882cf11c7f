use std::fmt::{Display, Formatter};
use std::path::Path;

use crate::config::Config;
use crate::extensions;
use crate::platform::Platform;
use crate::target::ResolvedTarget;

#[derive(Debug)]
pub enum ResolveError {
    UnsupportedPlatform(String),
}

impl Display for ResolveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedPlatform(os) => {
                write!(f, "unsupported operating system: {os}")
            }
        }
    }
}

impl std::error::Error for ResolveError {}

/// The resolved (program, arguments) pair handed to the launch capability,
/// plus the application name reported back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub program: String,
    pub args: Vec<String>,
    pub app_label: String,
}

impl LaunchPlan {
    fn direct(program: &str, path: &Path, label: &str) -> Self {
        Self {
            program: program.to_string(),
            args: vec![path.to_string_lossy().into_owned()],
            app_label: label.to_string(),
        }
    }

    fn with_leading_args(
        program: String,
        mut args: Vec<String>,
        path: &Path,
        label: &str,
    ) -> Self {
        args.push(path.to_string_lossy().into_owned());
        Self {
            program,
            args,
            app_label: label.to_string(),
        }
    }
}

/// Decides what to launch for a target. Precedence, first match wins:
///
/// 1. explicit manager (custom manager command, else the name run directly)
/// 2. file with a configured extension app (custom manager entry, built-in
///    alias, platform named-app convention, else default open)
/// 3. default open (configured default manager, else the platform command)
///
/// Pure decision procedure; nothing is spawned here.
pub fn resolve_launcher(
    target: &ResolvedTarget,
    explicit_manager: Option<&str>,
    config: &Config,
    platform: &Platform,
) -> Result<LaunchPlan, ResolveError> {
    let explicit = explicit_manager
        .map(str::trim)
        .filter(|name| !name.is_empty());

    if let Some(name) = explicit {
        return Ok(manager_plan(name, &target.absolute_path, config));
    }

    if target.is_file {
        if let Some(app) =
            extensions::resolve_extension_app(&target.absolute_path, &config.file_type_apps)
        {
            return named_app_plan(&app, &target.absolute_path, config, platform);
        }
    }

    default_open_plan(&target.absolute_path, config, platform)
}

fn manager_plan(name: &str, path: &Path, config: &Config) -> LaunchPlan {
    match config.custom_manager(name) {
        Some(command) => LaunchPlan::direct(command, path, name),
        // Unregistered names run as-is; a spawn failure surfaces to the user
        // instead of silently retrying with the platform default.
        None => LaunchPlan::direct(name, path, name),
    }
}

fn named_app_plan(
    app: &str,
    path: &Path,
    config: &Config,
    platform: &Platform,
) -> Result<LaunchPlan, ResolveError> {
    if let Some(command) = config.custom_manager(app) {
        return Ok(LaunchPlan::direct(command, path, app));
    }

    if let Some(plan) = builtin_app_plan(app, path, platform) {
        return Ok(plan);
    }

    if let Some((program, args)) = platform.named_app_invocation(app) {
        return Ok(LaunchPlan::with_leading_args(program, args, path, app));
    }

    default_open_plan(path, config, platform)
}

/// App names with a well-known launch command, kept for compatibility with
/// existing file-type configs.
fn builtin_app_plan(app: &str, path: &Path, platform: &Platform) -> Option<LaunchPlan> {
    match app {
        "vscode" => Some(LaunchPlan::direct("code", path, app)),
        "wps" => Some(LaunchPlan::direct("wps", path, app)),
        "preview" if *platform == Platform::MacOs => {
            Some(LaunchPlan::direct("open", path, app))
        }
        _ => None,
    }
}

fn default_open_plan(
    path: &Path,
    config: &Config,
    platform: &Platform,
) -> Result<LaunchPlan, ResolveError> {
    let default_manager = config.default_manager.trim();
    if !default_manager.is_empty() {
        return Ok(manager_plan(default_manager, path, config));
    }

    match platform.default_open_program() {
        Some(program) => Ok(LaunchPlan {
            program: program.to_string(),
            args: vec![path.to_string_lossy().into_owned()],
            app_label: platform.file_manager_name().to_string(),
        }),
        None => Err(ResolveError::UnsupportedPlatform(
            platform.identifier().to_string(),
        )),
    }
}
