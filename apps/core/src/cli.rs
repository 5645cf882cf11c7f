use std::path::Path;

use clap::{Parser, Subcommand};

use crate::platform::Platform;
use crate::service::{OpenService, ServiceError};
use crate::target;
use crate::validator::AppValidation;

#[derive(Debug, Parser)]
#[command(
    name = "quickopen",
    version,
    about = "Open files and directories in your file manager from the terminal",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    /// Path to open; defaults to the current directory
    pub path: Option<String>,

    /// Path to open (alternative to the positional argument)
    #[arg(short = 'p', long = "path", value_name = "PATH")]
    pub path_flag: Option<String>,

    /// File manager or application to use for this launch
    #[arg(short, long, value_name = "NAME")]
    pub manager: Option<String>,

    /// Print resolution diagnostics to stderr
    #[arg(short, long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show recently opened paths
    List,
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the current configuration
    Show,
    /// Set the default file manager
    SetDefault { manager: String },
    /// Register a custom file manager command under a name
    AddManager { name: String, command: String },
    /// Clear the recent-paths list
    ClearRecent,
    /// Map a file extension to an application
    AddFiletype { extension: String, app: String },
    /// Remove a file extension mapping
    RemoveFiletype { extension: String },
    /// List all file extension mappings
    ListFiletypes,
    /// Map every extension in a built-in group to an application
    AddFilegroup { group: String, app: String },
}

pub fn run(cli: Cli) -> Result<(), ServiceError> {
    let platform = Platform::current();
    let mut service = OpenService::load(platform)?.with_debug(cli.debug);

    match cli.command {
        Some(Command::List) => run_list(&mut service),
        Some(Command::Config { action }) => run_config(&mut service, action),
        None => run_open(&mut service, &cli),
    }
}

fn run_open(service: &mut OpenService, cli: &Cli) -> Result<(), ServiceError> {
    let raw_path = cli
        .path
        .as_deref()
        .or(cli.path_flag.as_deref())
        .unwrap_or_default();

    let outcome = service.resolve_and_launch(raw_path, cli.manager.as_deref())?;
    println!("Opened in {}: {}", outcome.used_app, outcome.display_path);
    Ok(())
}

fn run_list(service: &mut OpenService) -> Result<(), ServiceError> {
    service.prune_recent_missing();

    let recent = &service.config().recent_paths;
    if recent.is_empty() {
        println!("No recent paths.");
        return Ok(());
    }

    println!("Recent paths:");
    for (index, path) in recent.iter().enumerate() {
        println!("  {}. {}", index + 1, target::display_path(Path::new(path)));
    }
    Ok(())
}

fn run_config(service: &mut OpenService, action: ConfigAction) -> Result<(), ServiceError> {
    match action {
        ConfigAction::Show => {
            let config = service.config();
            println!("Config file: {}", service.config_path().display());
            println!("Default manager: {}", render_optional(&config.default_manager));
            println!("Recent paths: {} (max {})", config.recent_paths.len(), config.max_recent);

            if !config.custom_managers.is_empty() {
                println!("Custom managers:");
                for (name, command) in &config.custom_managers {
                    println!("  {name}: {command}");
                }
            }
            if !config.file_type_apps.is_empty() {
                println!("File type applications:");
                for (extension, app) in &config.file_type_apps {
                    println!("  .{extension}: {app}");
                }
            }
            Ok(())
        }
        ConfigAction::SetDefault { manager } => {
            service.set_default_manager(&manager)?;
            println!("Default manager set to {manager}.");
            Ok(())
        }
        ConfigAction::AddManager { name, command } => {
            service.add_custom_manager(&name, &command)?;
            println!("Registered custom manager {name} -> {command}.");
            Ok(())
        }
        ConfigAction::ClearRecent => {
            service.clear_recent()?;
            println!("Cleared recent paths.");
            Ok(())
        }
        ConfigAction::AddFiletype { extension, app } => {
            ensure_app_valid(service, &app)?;
            let normalized = service.register_file_type(&extension, &app)?;
            println!("Mapped .{normalized} to {app}.");
            Ok(())
        }
        ConfigAction::RemoveFiletype { extension } => {
            let normalized = service.remove_file_type(&extension)?;
            println!("Removed mapping for .{normalized}.");
            Ok(())
        }
        ConfigAction::ListFiletypes => {
            let mappings = &service.config().file_type_apps;
            if mappings.is_empty() {
                println!("No file type mappings.");
                return Ok(());
            }

            println!("File type mappings:");
            for (extension, app) in mappings {
                println!("  .{extension} -> {app}");
            }
            Ok(())
        }
        ConfigAction::AddFilegroup { group, app } => {
            ensure_app_valid(service, &app)?;
            let extensions = service.register_file_group(&group, &app)?;
            println!(
                "Mapped {group} ({} file types) to {app}: {}",
                extensions.len(),
                extensions.join(", ")
            );
            Ok(())
        }
    }
}

fn ensure_app_valid(service: &OpenService, app: &str) -> Result<(), ServiceError> {
    match service.validate_app(app) {
        AppValidation::Valid => Ok(()),
        AppValidation::Invalid { message } => Err(ServiceError::InvalidApp(message)),
    }
}

fn render_optional(value: &str) -> &str {
    if value.is_empty() {
        "(not set)"
    } else {
        value
    }
}
