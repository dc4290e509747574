//! Core implementation of lazy-runner
//!
//! lazy-runner reads a list of named shell commands, optionally nested into groups, from
//! a JSON settings file. The user picks one through an interactive prompt and it is run
//! through the host shell with the terminal's stdio, its exit status becoming ours.

use std::path::Path;

use log::debug;

use crate::config_file::{SettingsReader, read_settings};
use crate::failure::Failure;
use crate::runner::{OutputHooks, run_command};
use crate::selector::Prompter;

pub mod config_file;
pub mod failure;
pub mod logger;
pub mod messages;
pub mod options;
pub mod runner;
pub mod selector;

/// Load the settings, let the user pick a command and run it.
///
/// Stages run strictly one after another: reading the settings, prompting, then waiting
/// for the child process.
///
/// # Errors
///
/// Returns the first `Failure` raised by any stage.
pub async fn execute(
    settings_path: Option<&Path>,
    reader: &impl SettingsReader,
    prompter: &mut impl Prompter,
) -> Result<(), Failure> {
    let settings = read_settings(settings_path, reader).await?;
    let selected = selector::select(&settings.options, prompter)?;
    debug!("Selected '{}' ({})", selected.name, selected.command);

    let mut hooks = OutputHooks::new(settings.hide_output_messages);
    run_command(selected, &mut hooks).await
}
