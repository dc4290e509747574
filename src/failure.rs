//! Top-level failure type and the mapping from failures to process exit codes

use std::io;

use inquire::InquireError;
use log::error;
use thiserror::Error;

use crate::config_file::ConfigError;
use crate::runner::CommandError;
use crate::selector::SelectionError;

/// Anything that aborts a run
#[derive(Error, Debug)]
pub enum Failure {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Prompt(#[from] InquireError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Failure {
    /// Exit code the process should terminate with after this failure
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Failure::Command(CommandError::Exit { exit_code, .. }) => *exit_code,
            Failure::Command(CommandError::Signal { number, .. }) => signal_exit_code(*number),
            Failure::Config(_) | Failure::Selection(_) | Failure::Prompt(_) | Failure::Io(_) => 1,
        }
    }
}

/// Shell convention for signal deaths, `128 + signal number`, or `1` if the number is unknown
#[must_use]
pub fn signal_exit_code(number: Option<i32>) -> i32 {
    number.map_or(1, |number| 128 + number)
}

/// Log `failure` and return the exit code to terminate with.
///
/// This is the only place a failure is logged.
#[must_use]
pub fn report(failure: &Failure) -> i32 {
    error!("{failure}");
    failure.exit_code()
}
