//! Execution of the selected command through the host shell

use std::process::{ExitStatus, Stdio};

use log::{debug, info};
use thiserror::Error;
use tokio::process::Command as ProcessCommand;

use crate::failure::Failure;
use crate::messages::Palette;
use crate::options::CommandOption;

/// A command that ran but did not succeed
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("{label} failed with exit code {exit_code}.")]
    Exit { label: String, exit_code: i32 },
    #[error("{label} was terminated by signal {signal}.")]
    Signal {
        label: String,
        signal: String,
        /// Host signal number, when the platform reports one
        number: Option<i32>,
    },
}

/// How a child process terminated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub exit_code: i32,
    pub signal: Option<TerminatingSignal>,
}

/// Signal that killed a child process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminatingSignal {
    /// `SIGINT` style name, or the number when the signal has no name
    pub name: String,
    pub number: Option<i32>,
}

impl From<ExitStatus> for CommandResult {
    fn from(status: ExitStatus) -> Self {
        CommandResult {
            exit_code: status.code().unwrap_or(0),
            signal: terminating_signal(status),
        }
    }
}

#[cfg(unix)]
fn terminating_signal(status: ExitStatus) -> Option<TerminatingSignal> {
    use std::os::unix::process::ExitStatusExt;

    status.signal().map(|number| TerminatingSignal {
        name: nix::sys::signal::Signal::try_from(number)
            .map_or_else(|_| number.to_string(), |signal| signal.as_str().to_string()),
        number: Some(number),
    })
}

#[cfg(not(unix))]
fn terminating_signal(_status: ExitStatus) -> Option<TerminatingSignal> {
    None
}

/// Observers notified around a command run. Both default to doing nothing.
pub trait RunHooks {
    fn on_before_start(&mut self, _option: &CommandOption) {}
    fn on_after_success(&mut self, _option: &CommandOption) {}
}

/// Hooks used when output messages are hidden
#[derive(Debug, Default)]
pub struct SilentHooks;

impl RunHooks for SilentHooks {}

/// Announces the command and its completion through the logger
#[derive(Debug)]
pub struct ConsoleHooks {
    palette: Palette,
}

impl ConsoleHooks {
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        ConsoleHooks { palette }
    }
}

impl RunHooks for ConsoleHooks {
    fn on_before_start(&mut self, option: &CommandOption) {
        info!("{}", self.palette.format_start_message(option));
    }

    fn on_after_success(&mut self, _option: &CommandOption) {
        info!("{}", self.palette.format_success_message());
    }
}

/// Hooks picked by the `hideOutputMessages` setting
#[derive(Debug)]
pub enum OutputHooks {
    Silent(SilentHooks),
    Console(ConsoleHooks),
}

impl OutputHooks {
    #[must_use]
    pub fn new(hide_output_messages: bool) -> Self {
        if hide_output_messages {
            OutputHooks::Silent(SilentHooks)
        } else {
            OutputHooks::Console(ConsoleHooks::new(Palette::detect()))
        }
    }
}

impl RunHooks for OutputHooks {
    fn on_before_start(&mut self, option: &CommandOption) {
        match self {
            OutputHooks::Silent(hooks) => hooks.on_before_start(option),
            OutputHooks::Console(hooks) => hooks.on_before_start(option),
        }
    }

    fn on_after_success(&mut self, option: &CommandOption) {
        match self {
            OutputHooks::Silent(hooks) => hooks.on_after_success(option),
            OutputHooks::Console(hooks) => hooks.on_after_success(option),
        }
    }
}

/// Convert a finished run into an error if it did not exit cleanly.
///
/// # Errors
///
/// Returns `CommandError::Signal` if a signal terminated the process, otherwise
/// `CommandError::Exit` for a non-zero exit code.
pub fn check_result(result: &CommandResult, label: &str) -> Result<(), CommandError> {
    if let Some(signal) = &result.signal {
        return Err(CommandError::Signal {
            label: label.to_string(),
            signal: signal.name.clone(),
            number: signal.number,
        });
    }
    if result.exit_code != 0 {
        return Err(CommandError::Exit {
            label: label.to_string(),
            exit_code: result.exit_code,
        });
    }
    Ok(())
}

#[cfg(unix)]
fn shell_command(command: &str) -> ProcessCommand {
    let mut process = ProcessCommand::new("sh");
    process.arg("-c").arg(command);
    process
}

#[cfg(not(unix))]
fn shell_command(command: &str) -> ProcessCommand {
    let mut process = ProcessCommand::new("cmd");
    process.arg("/C").arg(command);
    process
}

/// Spawn `command` with inherited stdio and wait for it to terminate
async fn spawn_command(command: &str) -> std::io::Result<CommandResult> {
    debug!("Spawning '{command}'");
    let status = shell_command(command)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await?;
    debug!("'{command}' exited with {status}");
    Ok(status.into())
}

/// Run the selected command, notifying `hooks` before it starts and after it succeeds.
///
/// # Errors
///
/// Returns `Failure::Io` if the shell cannot be started and `Failure::Command` if the
/// command exits non-zero or is killed by a signal.
pub async fn run_command(option: &CommandOption, hooks: &mut impl RunHooks) -> Result<(), Failure> {
    hooks.on_before_start(option);

    let result = spawn_command(&option.command).await?;
    check_result(&result, &option.name)?;

    hooks.on_after_success(option);
    Ok(())
}
