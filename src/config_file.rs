//! Settings file handling for lazy-runner

use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use serde_json::Value;
use thiserror::Error;

use crate::failure::Failure;
use crate::options::{CommandOption, GroupOption, RunnerOption, RunnerSettings};

/// Errors that can occur while loading settings
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse settings.json. Ensure it is valid JSON.")]
    Malformed(#[source] serde_json::Error),
    #[error("settings.json must contain an \"options\" array.")]
    MissingOptions,
    #[error(
        "No valid commands found. Each option needs a name and either a command or nested options containing commands."
    )]
    NoValidCommands,
    #[error("Configuration file not found at {}. Please create it first.", .0.display())]
    NotFound(PathBuf),
    #[error("Unable to determine the home directory to locate settings.json")]
    NoHomeDirectory,
}

/// Location of the settings file, relative to the user's home directory
const SETTINGS_PATH: [&str; 3] = [".config", "lazy-runner", "settings.json"];

/// Default settings location, `~/.config/lazy-runner/settings.json`.
///
/// # Errors
///
/// Returns `ConfigError::NoHomeDirectory` if the home directory cannot be determined.
pub fn default_settings_path() -> Result<PathBuf, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDirectory)?;
    Ok(SETTINGS_PATH.iter().fold(home, |path, part| path.join(part)))
}

/// Source of raw settings text.
pub trait SettingsReader {
    fn read(&self, path: &Path) -> impl Future<Output = io::Result<String>>;
}

/// Reads settings from the local file system
#[derive(Debug, Default, Clone, Copy)]
pub struct FsReader;

impl SettingsReader for FsReader {
    async fn read(&self, path: &Path) -> io::Result<String> {
        tokio::fs::read_to_string(path).await
    }
}

/// Parse and normalize the raw contents of a settings file.
///
/// Invalid entries are dropped rather than rejected, the call only fails when nothing
/// runnable is left.
///
/// # Errors
///
/// Returns `ConfigError::Malformed` for invalid JSON, `ConfigError::MissingOptions` if
/// there is no top-level `options` array, and `ConfigError::NoValidCommands` if no
/// command survives normalization.
pub fn parse_settings(raw: &str) -> Result<RunnerSettings, ConfigError> {
    let parsed: Value = serde_json::from_str(raw).map_err(ConfigError::Malformed)?;
    let Some(raw_options) = parsed.get("options").and_then(Value::as_array) else {
        return Err(ConfigError::MissingOptions);
    };

    let options: Vec<RunnerOption> = raw_options.iter().filter_map(normalize_option).collect();
    let command_count: usize = options.iter().map(RunnerOption::command_count).sum();
    if options.is_empty() || command_count == 0 {
        return Err(ConfigError::NoValidCommands);
    }
    debug!(
        "Loaded {} top-level options ({command_count} commands)",
        options.len()
    );

    Ok(RunnerSettings {
        options,
        hide_output_messages: parsed
            .get("hideOutputMessages")
            .and_then(Value::as_bool)
            .unwrap_or(false),
    })
}

/// Normalize a single raw entry, returning `None` if it should be dropped
fn normalize_option(raw: &Value) -> Option<RunnerOption> {
    let Some(entry) = raw.as_object() else {
        debug!("Dropping option that is not an object: {raw}");
        return None;
    };

    let name = non_blank(entry.get("name"));
    let command = non_blank(entry.get("command"));
    let children = entry.get("options").and_then(Value::as_array);

    match (name, command, children) {
        (None, _, _) => {
            debug!("Dropping option without a name: {raw}");
            None
        }
        (Some(name), Some(_), Some(_)) => {
            debug!("Dropping option '{name}': it has both a command and nested options");
            None
        }
        (Some(name), Some(command), None) => Some(CommandOption::new(name, command).into()),
        (Some(name), None, Some(children)) => normalize_group(name, children),
        (Some(name), None, None) => {
            debug!("Dropping option '{name}': it has neither a command nor nested options");
            None
        }
    }
}

fn normalize_group(name: &str, children: &[Value]) -> Option<RunnerOption> {
    let options: Vec<RunnerOption> = children.iter().filter_map(normalize_option).collect();
    // Every surviving child reaches at least one command
    if options.is_empty() {
        debug!("Dropping group '{name}': it contains no valid commands");
        return None;
    }
    Some(GroupOption::new(name, options).into())
}

fn non_blank(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Read and parse the settings file, falling back to the default location.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file does not exist and any `ConfigError` from
/// [`parse_settings`]. Other read failures are returned as `Failure::Io` untouched.
pub async fn read_settings(
    path: Option<&Path>,
    reader: &impl SettingsReader,
) -> Result<RunnerSettings, Failure> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => default_settings_path()?,
    };
    debug!("Reading settings from {}", path.display());

    let raw = match reader.read(&path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ConfigError::NotFound(path).into());
        }
        Err(e) => return Err(e.into()),
    };
    let settings = parse_settings(&raw)?;
    debug!("Using settings from {}", path.display());
    Ok(settings)
}
