//! Interactive selection of a single command from the option tree

use std::fmt;

use inquire::InquireError;
use log::debug;
use thiserror::Error;

use crate::failure::Failure;
use crate::options::{CommandOption, RunnerOption};

const PROMPT_MESSAGE: &str = "Select a command to run";

/// Errors that can occur while resolving an answer to an option
#[derive(Error, Debug)]
pub enum SelectionError {
    #[error("Invalid selection.")]
    Invalid(String),
}

/// One selectable entry of a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    /// Position of the entry in its level, as a decimal string
    pub value: String,
    pub hint: String,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.hint)
    }
}

/// Asks the user to pick one of a list of choices
pub trait Prompter {
    /// Present `choices` under `message` and return the `value` of the picked one.
    ///
    /// # Errors
    ///
    /// Returns `InquireError` if the prompt is cancelled or cannot be shown.
    fn select(&mut self, message: &str, choices: Vec<Choice>) -> Result<String, InquireError>;
}

/// Terminal prompt backed by `inquire`
#[derive(Debug, Default)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn select(&mut self, message: &str, choices: Vec<Choice>) -> Result<String, InquireError> {
        inquire::Select::new(message, choices)
            .prompt()
            .map(|choice| choice.value)
    }
}

/// Walk the option tree with `prompter` until a command is picked.
///
/// # Errors
///
/// Returns `Failure::Selection` if an answer does not match an option at its level and
/// `Failure::Prompt` if the prompt itself fails or is cancelled.
pub fn select<'a>(
    options: &'a [RunnerOption],
    prompter: &mut impl Prompter,
) -> Result<&'a CommandOption, Failure> {
    select_at(options, &mut Vec::new(), prompter)
}

fn select_at<'a>(
    options: &'a [RunnerOption],
    path: &mut Vec<&'a str>,
    prompter: &mut impl Prompter,
) -> Result<&'a CommandOption, Failure> {
    let answer = prompter.select(&prompt_message(path), build_choices(options))?;
    let selected = answer
        .parse::<usize>()
        .ok()
        .and_then(|index| options.get(index))
        .ok_or(SelectionError::Invalid(answer))?;

    match selected {
        RunnerOption::Command(command) => Ok(command),
        RunnerOption::Group(group) => {
            debug!("Entering group '{}'", group.name);
            path.push(&group.name);
            select_at(&group.options, path, prompter)
        }
    }
}

fn build_choices(options: &[RunnerOption]) -> Vec<Choice> {
    options
        .iter()
        .enumerate()
        .map(|(index, option)| Choice {
            label: option.name().to_string(),
            value: index.to_string(),
            hint: option.hint(),
        })
        .collect()
}

fn prompt_message(path: &[&str]) -> String {
    if path.is_empty() {
        PROMPT_MESSAGE.to_string()
    } else {
        format!("{PROMPT_MESSAGE} ({})", path.join(" > "))
    }
}
