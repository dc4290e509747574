//! The option tree read from the settings file.
//!
//! Every entry is either a [`CommandOption`] leaf or a [`GroupOption`] holding further
//! entries. Groups that survive normalization always reach at least one leaf.

use serde::Serialize;

pub mod command;
pub mod group;

pub use command::CommandOption;
pub use group::GroupOption;

/// A single entry of the option tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RunnerOption {
    Command(CommandOption),
    Group(GroupOption),
}

impl RunnerOption {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            RunnerOption::Command(command) => &command.name,
            RunnerOption::Group(group) => &group.name,
        }
    }

    #[must_use]
    pub fn command_count(&self) -> usize {
        match self {
            RunnerOption::Command(_) => 1,
            RunnerOption::Group(group) => group.command_count(),
        }
    }

    /// Short description shown next to the name when prompting
    #[must_use]
    pub fn hint(&self) -> String {
        match self {
            RunnerOption::Command(command) => command.command.clone(),
            RunnerOption::Group(group) => format!("{} options", group.options.len()),
        }
    }
}

impl From<CommandOption> for RunnerOption {
    fn from(command: CommandOption) -> Self {
        RunnerOption::Command(command)
    }
}

impl From<GroupOption> for RunnerOption {
    fn from(group: GroupOption) -> Self {
        RunnerOption::Group(group)
    }
}

/// Normalized contents of the settings file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunnerSettings {
    pub options: Vec<RunnerOption>,
    #[serde(rename = "hideOutputMessages")]
    pub hide_output_messages: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> RunnerOption {
        GroupOption::new(
            "AI",
            vec![
                CommandOption::new("claude code", "claude").into(),
                GroupOption::new("more", vec![CommandOption::new("codex", "codex").into()]).into(),
            ],
        )
        .into()
    }

    #[test]
    fn test_command_count_is_transitive() {
        assert_eq!(tree().command_count(), 2);
        assert_eq!(RunnerOption::from(CommandOption::new("a", "b")).command_count(), 1);
    }

    #[test]
    fn test_hint() {
        assert_eq!(tree().hint(), "2 options");
        assert_eq!(RunnerOption::from(CommandOption::new("a", "echo a")).hint(), "echo a");
    }

    #[test]
    fn test_serializes_as_config_shape() {
        let value = serde_json::to_value(tree()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "AI",
                "options": [
                    {"name": "claude code", "command": "claude"},
                    {"name": "more", "options": [{"name": "codex", "command": "codex"}]}
                ]
            })
        );
    }
}
